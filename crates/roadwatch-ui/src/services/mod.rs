//! HTTP client helpers for data-backed pages.
pub(crate) mod api;
