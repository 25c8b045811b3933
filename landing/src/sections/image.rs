use leptos::html;
use leptos::prelude::*;
use web_sys::HtmlElement;

use crate::config::use_config;
use crate::dom::{observe_once, use_motion};
use crate::media::{ImageLoad, Loading};

/// Image with modern-format sources, lazy loading and a fallback.
///
/// Lazy images render only a placeholder until the wrapper comes within
/// the configured margin of the viewport.
#[component]
pub fn OptimizedImage(
    src: &'static str,
    alt: &'static str,
    #[prop(optional)] class: &'static str,
    #[prop(optional)] width: Option<u32>,
    #[prop(optional)] height: Option<u32>,
    #[prop(optional)] loading: Loading,
    #[prop(optional)] priority: bool,
    #[prop(optional)] fallback: Option<&'static str>,
    #[prop(optional)] webp: Option<&'static str>,
    #[prop(optional)] avif: Option<&'static str>,
) -> impl IntoView {
    let config = use_config();
    let wrapper = NodeRef::<html::Div>::new();
    let load = RwSignal::new(ImageLoad::new(loading, priority));

    if !load.with_untracked(ImageLoad::starts_visible) {
        let root_margin = config.images.root_margin.clone();
        let threshold = config.images.threshold;
        use_motion(
            move || {
                if load.with(ImageLoad::is_in_view) {
                    return None;
                }
                wrapper.get().map(HtmlElement::from)
            },
            move |element: &HtmlElement, scope| {
                observe_once(scope, element, &root_margin, threshold, move || {
                    load.update(ImageLoad::enter_view);
                });
            },
        );
    }

    let size = format!(
        "{}{}",
        width.map(|w| format!("width: {w}px;")).unwrap_or_default(),
        height.map(|h| format!("height: {h}px;")).unwrap_or_default(),
    );
    let placeholder_size = size.clone();
    let current_src = move || load.with(|l| l.current_src(src, fallback));

    view! {
        <div node_ref=wrapper class=format!("optimized-image {class}") style=size>
            <Show when=move || load.with(ImageLoad::show_placeholder)>
                <div class="image-placeholder" style=placeholder_size.clone()>
                    <div class="image-placeholder-icon"></div>
                </div>
            </Show>
            <Show when=move || load.with(ImageLoad::is_in_view)>
                <picture>
                    {move || {
                        load.with(|l| l.sources(avif, webp))
                            .into_iter()
                            .map(|(format, srcset)| view! { <source srcset=srcset type=format.mime() /> })
                            .collect::<Vec<_>>()
                    }}
                    <img
                        src=current_src
                        alt=alt
                        width=width
                        height=height
                        loading=loading.as_str()
                        decoding="async"
                        class=format!("image-fade {class}")
                        class:is-loaded=move || load.with(ImageLoad::is_loaded)
                        on:load=move |_| load.update(ImageLoad::on_load)
                        on:error=move |_| {
                            tracing::debug!(src, "image failed to load");
                            load.update(ImageLoad::on_error);
                        }
                    />
                </picture>
            </Show>
        </div>
    }
}
