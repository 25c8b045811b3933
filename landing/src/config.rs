//! Site configuration.
//!
//! `site.toml` is compiled into the binary. Missing keys fall back to the
//! built-in defaults; a file that fails to parse is reported and ignored.

use std::sync::Arc;

use leptos::prelude::use_context;
use serde::Deserialize;

use crate::error::SiteError;
use crate::motion::MotionDefaults;

const EMBEDDED: &str = include_str!("../site.toml");

/// Root configuration structure
#[derive(Debug, Default, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct SiteConfig {
    pub links: Links,
    pub motion: MotionDefaults,
    pub images: ImageSettings,
    pub layout: Layout,
}

/// Outbound call-to-action destinations
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct Links {
    pub home: String,
    pub waitlist: String,
    pub pricing: String,
    pub docs: String,
}

impl Default for Links {
    fn default() -> Self {
        Self {
            home: "https://kiro.dev".into(),
            waitlist: "https://kiro.dev/waitlist/".into(),
            pricing: "https://kiro.dev/pricing/".into(),
            docs: "https://kiro.dev/docs/getting-started/".into(),
        }
    }
}

/// Lazy image observer settings
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct ImageSettings {
    /// Pre-load margin around the viewport, CSS syntax.
    pub root_margin: String,
    /// Visible fraction that counts as "in view".
    pub threshold: f64,
}

impl Default for ImageSettings {
    fn default() -> Self {
        Self {
            root_margin: "50px".into(),
            threshold: 0.1,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct Layout {
    pub max_width: String,
}

impl Default for Layout {
    fn default() -> Self {
        Self {
            max_width: "480px".into(),
        }
    }
}

/// Development keeps source maps and original image URLs; production
/// minifies and routes images through the CDN parameters.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BuildMode {
    Development,
    Production,
}

impl BuildMode {
    pub fn current() -> Self {
        if cfg!(debug_assertions) {
            BuildMode::Development
        } else {
            BuildMode::Production
        }
    }
}

impl std::str::FromStr for BuildMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "development" | "dev" => Ok(BuildMode::Development),
            "production" | "prod" => Ok(BuildMode::Production),
            other => Err(format!("unknown build mode `{other}`")),
        }
    }
}

impl SiteConfig {
    pub fn from_toml(content: &str) -> Result<Self, SiteError> {
        Ok(toml::from_str(content)?)
    }

    /// The embedded `site.toml`, or defaults if it does not parse.
    pub fn load() -> Self {
        Self::from_toml(EMBEDDED).unwrap_or_else(|err| {
            tracing::warn!(%err, "falling back to default site config");
            Self::default()
        })
    }
}

/// The config provided by `App`, or the embedded one.
pub fn use_config() -> Arc<SiteConfig> {
    use_context::<Arc<SiteConfig>>().unwrap_or_else(|| Arc::new(SiteConfig::load()))
}
