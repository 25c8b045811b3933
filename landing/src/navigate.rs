//! Outbound navigation.
//!
//! Every call to action opens its URL in a new browsing context with no
//! opener and no referrer. Components reach the navigator through Leptos
//! context so tests can swap in a recorder.

use std::sync::{Arc, Mutex, PoisonError};

use leptos::prelude::use_context;

use crate::error::{Result, SiteError};

pub const TARGET: &str = "_blank";
pub const FEATURES: &str = "noopener,noreferrer";

pub trait Navigator: Send + Sync {
    fn open(&self, url: &str, target: &str, features: &str) -> Result<()>;
}

/// `window.open` in the browser.
#[derive(Debug, Clone, Copy, Default)]
pub struct BrowserNavigator;

impl Navigator for BrowserNavigator {
    #[cfg(target_arch = "wasm32")]
    fn open(&self, url: &str, target: &str, features: &str) -> Result<()> {
        let blocked = || SiteError::NavigationBlocked { url: url.to_string() };
        let window = web_sys::window().ok_or_else(blocked)?;
        match window.open_with_url_and_target_and_features(url, target, features) {
            // noopener makes window.open return null even on success
            Ok(_) => Ok(()),
            Err(_) => Err(blocked()),
        }
    }

    #[cfg(not(target_arch = "wasm32"))]
    fn open(&self, url: &str, _target: &str, _features: &str) -> Result<()> {
        Err(SiteError::NavigationBlocked { url: url.to_string() })
    }
}

/// One recorded `open` call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Visit {
    pub url: String,
    pub target: String,
    pub features: String,
}

/// Test navigator that remembers every call.
#[derive(Debug, Clone, Default)]
pub struct RecordingNavigator {
    visits: Arc<Mutex<Vec<Visit>>>,
    block: bool,
}

impl RecordingNavigator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Records calls but reports them as blocked, like a popup blocker.
    pub fn blocking() -> Self {
        Self {
            block: true,
            ..Self::default()
        }
    }

    pub fn visits(&self) -> Vec<Visit> {
        self.visits
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    pub fn urls(&self) -> Vec<String> {
        self.visits().into_iter().map(|v| v.url).collect()
    }
}

impl Navigator for RecordingNavigator {
    fn open(&self, url: &str, target: &str, features: &str) -> Result<()> {
        self.visits
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push(Visit {
                url: url.to_string(),
                target: target.to_string(),
                features: features.to_string(),
            });
        if self.block {
            return Err(SiteError::NavigationBlocked { url: url.to_string() });
        }
        Ok(())
    }
}

/// Shared handle stored in Leptos context.
#[derive(Clone)]
pub struct Navigation(Arc<dyn Navigator>);

impl Navigation {
    pub fn new(navigator: impl Navigator + 'static) -> Self {
        Self(Arc::new(navigator))
    }

    pub fn browser() -> Self {
        Self::new(BrowserNavigator)
    }

    /// Opens `url` in a new context. Failures are logged and dropped.
    pub fn open_external(&self, url: &str) {
        match self.0.open(url, TARGET, FEATURES) {
            Ok(()) => tracing::debug!(url, "opened external link"),
            Err(err) => tracing::warn!(%err, "external navigation failed"),
        }
    }
}

impl std::fmt::Debug for Navigation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str("Navigation")
    }
}

/// The navigator from context, or the browser one.
pub fn use_navigation() -> Navigation {
    use_context::<Navigation>().unwrap_or_else(Navigation::browser)
}
