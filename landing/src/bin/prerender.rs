//! # prerender
//!
//! Renders the landing page to static HTML and splices it into the mount
//! container of Trunk's built `index.html`, so the page has content before
//! the wasm bundle loads. Run it after `trunk build`:
//!
//! ```bash
//! trunk build --release
//! cargo run -p kiro-landing --no-default-features --features ssr --bin prerender
//! ```

use std::fs;
use std::path::PathBuf;
use std::sync::Arc;

use anyhow::{Context, Result};
use clap::Parser;
use tracing::info;

use kiro_landing::{logging, render_with, BuildMode, Navigation, SiteConfig, MOUNT_ID};

const BUILD_MODE_ATTR: &str = "data-build-mode";

#[derive(Parser, Debug)]
#[command(name = "prerender")]
#[command(about = "Render the Kiro landing page to static HTML")]
#[command(version)]
struct Args {
    /// Where to write the rendered page
    #[arg(short, long, default_value = "dist/index.html")]
    output: PathBuf,

    /// Page built by `trunk build`, with the empty mount container
    #[arg(long, default_value = "dist/index.html")]
    template: PathBuf,

    /// Site config to render with (default: bundled site.toml)
    #[arg(long)]
    config: Option<PathBuf>,

    /// Build mode: dev | prod
    #[arg(long, default_value = "prod")]
    mode: BuildMode,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long, default_value = "info")]
    log_level: tracing::Level,
}

fn main() -> Result<()> {
    let args = Args::parse();
    logging::init_with_level(args.log_level);

    let config = match &args.config {
        Some(path) => {
            let raw = fs::read_to_string(path)
                .with_context(|| format!("reading config {}", path.display()))?;
            SiteConfig::from_toml(&raw).with_context(|| format!("parsing {}", path.display()))?
        }
        None => SiteConfig::load(),
    };
    let template = fs::read_to_string(&args.template).with_context(|| {
        format!(
            "reading template {} (run `trunk build` first)",
            args.template.display()
        )
    })?;

    let body = render_with(Arc::new(config), Navigation::browser());
    let page = splice(&template, &body, args.mode)?;

    if let Some(parent) = args.output.parent() {
        fs::create_dir_all(parent)
            .with_context(|| format!("creating {}", parent.display()))?;
    }
    fs::write(&args.output, &page)
        .with_context(|| format!("writing {}", args.output.display()))?;

    info!(
        output = %args.output.display(),
        mode = ?args.mode,
        bytes = page.len(),
        "page prerendered"
    );
    Ok(())
}

/// Fills the mount container with the rendered body and stamps the build
/// mode on the document.
///
/// Refuses raw Trunk sources (their `data-trunk` links only resolve during
/// `trunk build`) and pages that were already prerendered.
fn splice(template: &str, body: &str, mode: BuildMode) -> Result<String> {
    if template.contains("data-trunk") {
        anyhow::bail!("template still has data-trunk links; pass the `trunk build` output");
    }
    if template.contains(BUILD_MODE_ATTR) {
        anyhow::bail!("template is already prerendered");
    }
    let at = container_end(template)
        .with_context(|| format!("template has no element with id \"{MOUNT_ID}\""))?;
    let mode = match mode {
        BuildMode::Development => "development",
        BuildMode::Production => "production",
    };

    let mut page = String::with_capacity(template.len() + body.len());
    page.push_str(&template[..at]);
    page.push_str(body);
    page.push_str(&template[at..]);
    Ok(page.replacen("<html", &format!("<html {BUILD_MODE_ATTR}=\"{mode}\""), 1))
}

/// Byte offset just past the opening tag of the mount container. Accepts
/// the quoted attribute and the unquoted form minified output uses.
fn container_end(template: &str) -> Option<usize> {
    let quoted = format!("id=\"{MOUNT_ID}\"");
    let bare = format!("id={MOUNT_ID}");
    let attr = template.find(&quoted).or_else(|| {
        template.match_indices(&bare).map(|(at, _)| at).find(|&at| {
            template[at + bare.len()..]
                .chars()
                .next()
                .is_some_and(|c| c == '>' || c == '/' || c.is_whitespace())
        })
    })?;
    let close = template[attr..].find('>')?;
    Some(attr + close + 1)
}
