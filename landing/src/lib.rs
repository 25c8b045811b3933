//! Kiro landing page.
//!
//! A Leptos client-side app built from static content sections and a small
//! in-crate motion engine. With the `ssr` feature the same tree renders to
//! HTML for prerendering and tests.

#![recursion_limit = "256"]

pub mod app;
pub mod config;
pub mod content;
pub mod dom;
pub mod error;
pub mod logging;
pub mod media;
pub mod motion;
pub mod navigate;
pub mod sections;
pub mod state;

pub use app::App;
pub use config::{BuildMode, SiteConfig};
pub use error::{Result, SiteError};
pub use navigate::Navigation;

/// Id of the element the app mounts into and prerendered HTML fills.
pub const MOUNT_ID: &str = "app";

#[cfg(feature = "ssr")]
pub use render::{render_page, render_with};

#[cfg(feature = "ssr")]
mod render {
    use std::sync::Arc;

    use leptos::prelude::*;

    use crate::app::App;
    use crate::config::SiteConfig;
    use crate::navigate::Navigation;

    /// Renders the page with the embedded config.
    pub fn render_page() -> String {
        render_with(Arc::new(SiteConfig::load()), Navigation::browser())
    }

    /// Renders the page with an explicit config and navigator.
    pub fn render_with(config: Arc<SiteConfig>, navigation: Navigation) -> String {
        let owner = Owner::new();
        owner.with(|| {
            provide_context(config);
            provide_context(navigation);
            view! { <App /> }.to_html()
        })
    }
}
