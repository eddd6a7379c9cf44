#![forbid(unsafe_code)]
#![deny(warnings, unused, missing_docs, clippy::all, clippy::pedantic)]
//! Browser entry point for the RoadWatch UI.
//!
//! On wasm32 this mounts the app. Native builds only exist so the workspace builds and tests on
//! the host; running one prints how to serve the UI instead.

#[cfg(target_arch = "wasm32")]
fn main() {
    roadwatch_ui::run_app();
}

#[cfg(not(target_arch = "wasm32"))]
fn main() -> std::io::Result<()> {
    use std::io::Write;

    writeln!(std::io::stderr().lock(), "{}", host_notice())
}

#[cfg(not(target_arch = "wasm32"))]
fn host_notice() -> String {
    format!(
        "roadwatch-ui {} renders in the browser: serve it with `trunk serve`. \
         Set ROADWATCH_HISTORY_MODE=hash when the host cannot rewrite unknown paths to index.html.",
        env!("CARGO_PKG_VERSION")
    )
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod tests {
    use super::*;

    #[test]
    fn host_notice_points_at_trunk_and_hash_mode() {
        let notice = host_notice();
        assert!(notice.contains("trunk serve"));
        assert!(notice.contains("ROADWATCH_HISTORY_MODE=hash"));
        assert!(notice.contains(env!("CARGO_PKG_VERSION")));
    }

    #[test]
    fn host_main_succeeds() -> std::io::Result<()> {
        main()
    }
}
