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
    clippy::nursery,
    rustdoc::broken_intra_doc_links,
    rustdoc::bare_urls,
    missing_docs
)]
//! Launcher for the post-editor demo page.

#[cfg(target_arch = "wasm32")]
fn main() {
    vellum_modals::run_app();
}

#[cfg(not(target_arch = "wasm32"))]
const NATIVE_NOTICE: &str = "vellum-modals: the post-editor demo renders in a browser only. \
Serve it with `trunk serve` or compile for wasm32-unknown-unknown.\n";

#[cfg(not(target_arch = "wasm32"))]
fn main() -> std::io::Result<()> {
    use std::io::Write;

    std::io::stderr().lock().write_all(NATIVE_NOTICE.as_bytes())
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod tests {
    use super::NATIVE_NOTICE;

    #[test]
    fn native_notice_points_at_the_browser_demo() {
        assert!(NATIVE_NOTICE.contains("post-editor demo"));
        assert!(NATIVE_NOTICE.contains("wasm32-unknown-unknown"));
        assert!(NATIVE_NOTICE.ends_with('\n'));
    }
}
