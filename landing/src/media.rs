//! Image loading state and URL helpers for `OptimizedImage`.

use std::fmt;

use crate::config::BuildMode;

/// Native `loading` attribute values.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Loading {
    #[default]
    Lazy,
    Eager,
}

impl Loading {
    pub fn as_str(self) -> &'static str {
        match self {
            Loading::Lazy => "lazy",
            Loading::Eager => "eager",
        }
    }
}

/// Lifecycle of one lazily loaded image.
///
/// An error also counts as loaded so the placeholder goes away.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ImageLoad {
    in_view: bool,
    loaded: bool,
    errored: bool,
}

impl ImageLoad {
    pub fn new(loading: Loading, priority: bool) -> Self {
        Self {
            in_view: priority || loading == Loading::Eager,
            loaded: false,
            errored: false,
        }
    }

    /// True when no observer is needed.
    pub fn starts_visible(&self) -> bool {
        self.in_view
    }

    pub fn enter_view(&mut self) {
        self.in_view = true;
    }

    pub fn on_load(&mut self) {
        self.loaded = true;
    }

    pub fn on_error(&mut self) {
        self.errored = true;
        self.loaded = true;
    }

    pub fn is_in_view(&self) -> bool {
        self.in_view
    }

    pub fn is_loaded(&self) -> bool {
        self.loaded
    }

    pub fn has_error(&self) -> bool {
        self.errored
    }

    pub fn show_placeholder(&self) -> bool {
        !self.loaded
    }

    /// The fallback once the primary failed, otherwise the primary.
    pub fn current_src<'a>(&self, src: &'a str, fallback: Option<&'a str>) -> &'a str {
        match (self.errored, fallback) {
            (true, Some(fallback)) => fallback,
            _ => src,
        }
    }

    /// Modern-format sources to offer. Empty after an error, so the browser
    /// falls back to the `<img>` source instead of retrying a broken one.
    pub fn sources<'a>(
        &self,
        avif: Option<&'a str>,
        webp: Option<&'a str>,
    ) -> Vec<(SourceFormat, &'a str)> {
        if self.errored {
            return Vec::new();
        }
        picture_sources(avif, webp)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SourceFormat {
    Avif,
    Webp,
}

impl SourceFormat {
    pub fn mime(self) -> &'static str {
        match self {
            SourceFormat::Avif => "image/avif",
            SourceFormat::Webp => "image/webp",
        }
    }
}

/// `<source>` candidates, most efficient format first.
pub fn picture_sources<'a>(
    avif: Option<&'a str>,
    webp: Option<&'a str>,
) -> Vec<(SourceFormat, &'a str)> {
    [(SourceFormat::Avif, avif), (SourceFormat::Webp, webp)]
        .into_iter()
        .filter_map(|(format, src)| src.map(|src| (format, src)))
        .collect()
}

pub const DEFAULT_WIDTHS: &[u32] = &[320, 640, 768, 1024, 1280, 1920];

/// `hero.png` → `hero-320w.png 320w, hero-640w.png 640w, …`
///
/// Only the file name is split, so dots in directory names are left alone.
pub fn responsive_srcset(base: &str, widths: &[u32]) -> String {
    let name_start = base.rfind('/').map_or(0, |slash| slash + 1);
    let (stem, ext) = match base[name_start..].rfind('.') {
        Some(dot) if dot > 0 => base.split_at(name_start + dot),
        _ => (base, ""),
    };
    widths
        .iter()
        .map(|w| format!("{stem}-{w}w{ext} {w}w"))
        .collect::<Vec<_>>()
        .join(", ")
}

/// `navigator.connection.effectiveType`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ConnectionSpeed {
    Slow2g,
    TwoG,
    ThreeG,
    FourG,
    #[default]
    Unknown,
}

impl ConnectionSpeed {
    pub fn parse(effective_type: &str) -> Self {
        match effective_type {
            "slow-2g" => ConnectionSpeed::Slow2g,
            "2g" => ConnectionSpeed::TwoG,
            "3g" => ConnectionSpeed::ThreeG,
            "4g" => ConnectionSpeed::FourG,
            _ => ConnectionSpeed::Unknown,
        }
    }

    fn base_quality(self) -> i32 {
        match self {
            ConnectionSpeed::Slow2g => 60,
            ConnectionSpeed::TwoG => 70,
            ConnectionSpeed::ThreeG => 80,
            ConnectionSpeed::FourG => 90,
            ConnectionSpeed::Unknown => 85,
        }
    }
}

const LARGE_IMAGE_BYTES: u64 = 1024 * 1024;
const SMALL_IMAGE_BYTES: u64 = 100 * 1024;

/// Compression quality for an image of `bytes` over `speed`, in 60..=95.
pub fn optimal_quality(bytes: u64, speed: ConnectionSpeed) -> u8 {
    let mut quality = speed.base_quality();
    if bytes > LARGE_IMAGE_BYTES {
        quality -= 10;
    } else if bytes < SMALL_IMAGE_BYTES {
        quality += 5;
    }
    quality.clamp(60, 95) as u8
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FetchPriority {
    High,
    Low,
}

impl FetchPriority {
    pub fn as_str(self) -> &'static str {
        match self {
            FetchPriority::High => "high",
            FetchPriority::Low => "low",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LoadingPlan {
    pub loading: Loading,
    pub priority: bool,
    pub fetch_priority: FetchPriority,
}

/// Above-the-fold images load eagerly; large ones also get priority.
pub fn loading_strategy(top: f64, width: f64, height: f64, viewport_height: f64) -> LoadingPlan {
    let above_fold = top < viewport_height;
    let large = width > 300.0 || height > 300.0;
    LoadingPlan {
        loading: if above_fold { Loading::Eager } else { Loading::Lazy },
        priority: above_fold && large,
        fetch_priority: if above_fold {
            FetchPriority::High
        } else {
            FetchPriority::Low
        },
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ImageFormat {
    #[default]
    Auto,
    Webp,
    Avif,
}

impl fmt::Display for ImageFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            ImageFormat::Auto => "auto",
            ImageFormat::Webp => "webp",
            ImageFormat::Avif => "avif",
        })
    }
}

/// Image CDN resize/transcode parameters.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CdnOptions {
    pub width: Option<u32>,
    pub height: Option<u32>,
    pub quality: u8,
    pub format: ImageFormat,
}

impl Default for CdnOptions {
    fn default() -> Self {
        Self {
            width: None,
            height: None,
            quality: 85,
            format: ImageFormat::Auto,
        }
    }
}

/// Appends `w`, `h`, `q`, `f` query parameters in production builds.
/// Development builds get the original URL back.
pub fn optimized_url(url: &str, options: &CdnOptions, mode: BuildMode) -> String {
    if mode == BuildMode::Development {
        return url.to_string();
    }
    let mut params = Vec::with_capacity(4);
    if let Some(w) = options.width {
        params.push(format!("w={w}"));
    }
    if let Some(h) = options.height {
        params.push(format!("h={h}"));
    }
    params.push(format!("q={}", options.quality));
    if options.format != ImageFormat::Auto {
        params.push(format!("f={}", options.format));
    }
    let sep = if url.contains('?') { '&' } else { '?' };
    format!("{url}{sep}{}", params.join("&"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn lazy_image_waits_for_the_observer() {
        let mut load = ImageLoad::new(Loading::Lazy, false);
        assert!(!load.is_in_view());
        assert!(load.show_placeholder());
        load.enter_view();
        load.on_load();
        assert!(load.is_in_view());
        assert!(!load.show_placeholder());
    }

    #[test]
    fn eager_or_priority_starts_in_view() {
        assert!(ImageLoad::new(Loading::Eager, false).starts_visible());
        assert!(ImageLoad::new(Loading::Lazy, true).starts_visible());
    }

    #[test]
    fn error_swaps_in_the_fallback() {
        let mut load = ImageLoad::new(Loading::Eager, false);
        assert_eq!(load.current_src("a.png", Some("b.png")), "a.png");
        load.on_error();
        assert!(load.is_loaded());
        assert!(load.has_error());
        assert_eq!(load.current_src("a.png", Some("b.png")), "b.png");
        assert_eq!(load.current_src("a.png", None), "a.png");
    }

    #[test]
    fn avif_comes_before_webp() {
        assert_eq!(
            picture_sources(Some("a.avif"), Some("a.webp")),
            vec![(SourceFormat::Avif, "a.avif"), (SourceFormat::Webp, "a.webp")]
        );
        assert_eq!(picture_sources(None, Some("a.webp")).len(), 1);
        assert!(picture_sources(None, None).is_empty());
    }

    #[test]
    fn srcset_inserts_width_before_extension() {
        assert_eq!(
            responsive_srcset("/img/hero.png", &[320, 640]),
            "/img/hero-320w.png 320w, /img/hero-640w.png 640w"
        );
        assert_eq!(
            responsive_srcset("/v1.2/logo", &[320]),
            "/v1.2/logo-320w 320w"
        );
        assert_eq!(responsive_srcset("a.b.jpg", &[1920]), "a.b-1920w.jpg 1920w");
    }

    #[test]
    fn quality_tracks_size_and_connection() {
        assert_eq!(optimal_quality(500 * 1024, ConnectionSpeed::Unknown), 85);
        assert_eq!(optimal_quality(2 * 1024 * 1024, ConnectionSpeed::Slow2g), 60);
        assert_eq!(optimal_quality(10 * 1024, ConnectionSpeed::FourG), 95);
        assert_eq!(optimal_quality(10 * 1024, ConnectionSpeed::parse("3g")), 85);
        assert_eq!(ConnectionSpeed::parse("5g"), ConnectionSpeed::Unknown);
    }

    #[test]
    fn above_the_fold_loads_eagerly() {
        let plan = loading_strategy(100.0, 400.0, 200.0, 800.0);
        assert_eq!(plan.loading, Loading::Eager);
        assert!(plan.priority);
        assert_eq!(plan.fetch_priority, FetchPriority::High);

        let plan = loading_strategy(100.0, 64.0, 64.0, 800.0);
        assert!(!plan.priority);

        let plan = loading_strategy(1200.0, 400.0, 400.0, 800.0);
        assert_eq!(plan.loading, Loading::Lazy);
        assert_eq!(plan.fetch_priority, FetchPriority::Low);
    }

    #[test]
    fn cdn_url_only_in_production() {
        let opts = CdnOptions {
            width: Some(640),
            format: ImageFormat::Webp,
            ..CdnOptions::default()
        };
        assert_eq!(optimized_url("/a.png", &opts, BuildMode::Development), "/a.png");
        assert_eq!(
            optimized_url("/a.png", &opts, BuildMode::Production),
            "/a.png?w=640&q=85&f=webp"
        );
        assert_eq!(
            optimized_url("/a.png?v=2", &CdnOptions::default(), BuildMode::Production),
            "/a.png?v=2&q=85"
        );
    }
}
