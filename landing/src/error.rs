//! Error types for the landing page.
//!
//! Nothing here is fatal: callers log and fall back, the page keeps rendering.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum SiteError {
    #[error("failed to parse site config: {0}")]
    Config(#[from] toml::de::Error),

    #[error("unknown ease `{0}`")]
    UnknownEase(String),

    #[error("invalid ease parameters in `{0}`")]
    EaseParams(String),

    #[error("invalid trigger position `{0}`")]
    TriggerPosition(String),

    #[error("invalid toggle actions `{0}`: {1}")]
    ToggleActions(String, &'static str),

    #[error("invalid date `{0}`")]
    Date(String),

    #[error("navigation to {url} was blocked")]
    NavigationBlocked { url: String },
}

pub type Result<T, E = SiteError> = std::result::Result<T, E>;
