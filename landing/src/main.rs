use kiro_landing::{logging, motion, App, MOUNT_ID};
use leptos::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::HtmlElement;

fn main() {
    console_error_panic_hook::set_once();
    logging::init();
    motion::plugins::init();
    tracing::info!(mode = ?kiro_landing::BuildMode::current(), "mounting landing page");

    let container = web_sys::window()
        .and_then(|w| w.document())
        .and_then(|d| d.get_element_by_id(MOUNT_ID))
        .and_then(|el| el.dyn_into::<HtmlElement>().ok());

    match container {
        Some(container) => {
            // Prerendered markup is replaced by the live tree.
            container.set_inner_html("");
            leptos::mount::mount_to(container, || view! { <App /> }).forget();
        }
        None => {
            tracing::warn!(id = MOUNT_ID, "mount container missing, mounting to body");
            leptos::mount::mount_to_body(|| view! { <App /> });
        }
    }
}
