#![forbid(unsafe_code)]
#![deny(
    warnings,
    dead_code,
    unused,
    unused_imports,
    unused_must_use,
    unreachable_pub,
    clippy::all,
    clippy::pedantic,
    clippy::cargo,
    clippy::nursery,
    rustdoc::broken_intra_doc_links,
    rustdoc::bare_urls,
    missing_docs
)]
#![allow(clippy::multiple_crate_versions)]
//! Shared HTTP DTOs for the RoadWatch public API.
//!
//! The backend scrapes the municipal road-works register and serves the
//! resulting construction notices as JSON; the UI decodes them with these types.
use serde::{Deserialize, Serialize};

/// Relative path of the construction notice listing endpoint.
pub const CONSTRUCTION_NOTICES_PATH: &str = "/construction_notices";

/// Placeholder rendered for absent or blank optional fields.
const MISSING: &str = "-";

/// Road-works announcement as published by the backend.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ConstructionNotice {
    /// Backend row identifier.
    pub id: i64,
    /// Free-form date range of the works (e.g. `2024/01/02~2024/02/03`).
    #[serde(default)]
    pub date_range: Option<String>,
    /// Name of the construction project.
    pub name: String,
    /// Category of works.
    #[serde(rename = "type", default)]
    pub kind: Option<String>,
    /// Executing unit or contractor.
    #[serde(default)]
    pub unit: Option<String>,
    /// Road or location affected.
    #[serde(default)]
    pub road: Option<String>,
    /// Link to the detail page on the source register.
    #[serde(default)]
    pub url: Option<String>,
}

impl ConstructionNotice {
    /// Date range suitable for display, `-` when unknown.
    #[must_use]
    pub fn display_date_range(&self) -> &str {
        display_or_missing(self.date_range.as_deref())
    }

    /// Road suitable for display, `-` when unknown.
    #[must_use]
    pub fn display_road(&self) -> &str {
        display_or_missing(self.road.as_deref())
    }

    /// Category suitable for display, `-` when unknown.
    #[must_use]
    pub fn display_kind(&self) -> &str {
        display_or_missing(self.kind.as_deref())
    }

    /// Executing unit suitable for display, `-` when unknown.
    #[must_use]
    pub fn display_unit(&self) -> &str {
        display_or_missing(self.unit.as_deref())
    }

    /// Whether the notice carries a usable detail link.
    #[must_use]
    pub fn has_link(&self) -> bool {
        self.url.as_deref().is_some_and(|url| !url.trim().is_empty())
    }
}

fn display_or_missing(value: Option<&str>) -> &str {
    match value.map(str::trim) {
        Some(text) if !text.is_empty() => text,
        _ => MISSING,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> ConstructionNotice {
        ConstructionNotice {
            id: 7,
            date_range: Some("2024/03/01~2024/03/15".to_string()),
            name: "Water main replacement".to_string(),
            kind: Some("pipeline".to_string()),
            unit: Some("Water Department".to_string()),
            road: Some("Zhongshan N. Rd. Sec. 2".to_string()),
            url: Some("https://dig.taipei/Tpdig/detail?id=7".to_string()),
        }
    }

    #[test]
    fn decodes_backend_payload_with_type_field() {
        let payload = r#"{
            "id": 3,
            "date_range": null,
            "name": "Sidewalk repaving",
            "type": "paving",
            "unit": null,
            "road": "Roosevelt Rd.",
            "url": null
        }"#;
        let notice: ConstructionNotice =
            serde_json::from_str(payload).expect("notice should decode");
        assert_eq!(notice.id, 3);
        assert_eq!(notice.kind.as_deref(), Some("paving"));
        assert_eq!(notice.display_date_range(), "-");
        assert_eq!(notice.display_road(), "Roosevelt Rd.");
        assert!(!notice.has_link());
    }

    #[test]
    fn missing_optional_fields_default_to_none() {
        let notice: ConstructionNotice =
            serde_json::from_str(r#"{"id": 1, "name": "Cable trench"}"#)
                .expect("minimal notice should decode");
        assert!(notice.date_range.is_none());
        assert!(notice.kind.is_none());
        assert_eq!(notice.display_unit(), "-");
    }

    #[test]
    fn kind_serializes_as_type() {
        let value = serde_json::to_value(sample()).expect("notice should encode");
        assert_eq!(value["type"], "pipeline");
        assert!(value.get("kind").is_none());
    }

    #[test]
    fn blank_values_render_as_missing() {
        let notice = ConstructionNotice {
            road: Some("   ".to_string()),
            url: Some(String::new()),
            ..sample()
        };
        assert_eq!(notice.display_road(), "-");
        assert!(!notice.has_link());
        assert_eq!(sample().display_kind(), "pipeline");
        assert!(sample().has_link());
    }
}
