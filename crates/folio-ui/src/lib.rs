#![forbid(unsafe_code)]
#![warn(
    unused,
    unused_must_use,
    unreachable_pub,
    clippy::all,
    clippy::pedantic,
    clippy::nursery,
    rustdoc::broken_intra_doc_links,
    rustdoc::bare_urls,
    missing_docs
)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::multiple_crate_versions)]
//! Folio portfolio page controller.
//!
//! The page model under [`core`] is DOM-free and runs anywhere; the wasm32
//! runtime binds it to a static portfolio page. The wasm entry point mounts
//! once the document is parsed, publishes the handle as `window.portfolio`
//! and installs the global functions inline `onclick` attributes call, such
//! as `scrollToSection('about')` or `openProject('demo', 'weather')`.

pub mod config;
pub mod core;
pub mod error;

#[cfg(target_arch = "wasm32")]
mod app;

#[cfg(target_arch = "wasm32")]
pub use app::{Portfolio, run_app, start_portfolio};

#[cfg(test)]
mod tests {
    use crate::config::PortfolioConfig;
    use crate::core::page::{PageEvent, PageLayout, PageState};
    use crate::core::theme::ThemeMode;

    #[test]
    fn page_builds_from_defaults_without_a_document() {
        let mut page = PageState::new(PortfolioConfig::default(), PageLayout::default(), None);
        assert_eq!(page.theme(), ThemeMode::Dark);
        assert!(!page.handle(PageEvent::Initialize).is_empty());
        assert_eq!(page.active_filter(), Some("all"));
        assert_eq!(page.active_section(), None);
    }
}
