use std::time::Duration;

use leptos::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::KeyboardEvent;

use super::cta::press_then;
use super::image::OptimizedImage;
use crate::config::use_config;
use crate::content::{ById, Feature, FEATURES};
use crate::dom::{listen, set_body_scroll_locked, use_motion};
use crate::state::{
    is_dismiss_key, FeatureFocus, PressState, CLEAR_SELECTION_MS, CLOSE_ANIMATION_MS,
};

const ILLUSTRATION_FALLBACK: &str = "/assets/kiro.svg";

/// Plays the close animation, hides the sheet, then forgets the selection.
/// Does nothing if the sheet is closed or already closing.
pub fn close_sheet(focus: RwSignal<FeatureFocus>) {
    close_sheet_with(focus, after_timeout);
}

/// [`close_sheet`] with the two delays handed to `schedule` instead of
/// `set_timeout`.
pub fn close_sheet_with<S>(focus: RwSignal<FeatureFocus>, schedule: S)
where
    S: Fn(Duration, Box<dyn FnOnce()>) + Clone + 'static,
{
    let started = focus.try_update(FeatureFocus::request_close).unwrap_or(false);
    if !started {
        return;
    }
    let then = schedule.clone();
    schedule(
        Duration::from_millis(CLOSE_ANIMATION_MS),
        Box::new(move || {
            focus.update(FeatureFocus::finish_close);
            then(
                Duration::from_millis(CLEAR_SELECTION_MS),
                Box::new(move || focus.update(FeatureFocus::clear_selection)),
            );
        }),
    );
}

fn after_timeout(delay: Duration, task: Box<dyn FnOnce()>) {
    set_timeout(task, delay);
}

#[component]
pub fn Features() -> impl IntoView {
    let focus = RwSignal::new(FeatureFocus::default());
    let press = RwSignal::new(PressState::default());
    let max_width = use_config().layout.max_width.clone();

    view! {
        <section class="features" style=format!("max-width: {max_width}; margin: 0 auto;")>
            <div class="section-header">
                <h2 class="section-title">"주요 기능"</h2>
                <p class="section-lead">
                    "KIRO만의 독특한 기능들로" <br /> "개발 효율성을 극대화하세요"
                </p>
            </div>
            <div class="feature-list">
                {FEATURES
                    .iter()
                    .map(|feature| view! { <FeatureCard feature=feature press=press focus=focus /> })
                    .collect::<Vec<_>>()}
            </div>
        </section>
        <FeatureSheet focus=focus />
    }
}

#[component]
fn FeatureCard(
    feature: &'static Feature,
    press: RwSignal<PressState>,
    focus: RwSignal<FeatureFocus>,
) -> impl IntoView {
    let id = feature.id;
    let open = move |_| press_then(press, id, move || focus.update(|f| f.open(id)));

    view! {
        <div class="feature-card-wrap">
            <button
                class="feature-card"
                class:is-pressed=move || press.with(|p| p.is_pressed(id))
                aria-label=feature.aria_label()
                on:click=open
            >
                <div class="feature-card-body">
                    <div class="feature-icon">{feature.icon}</div>
                    <div class="feature-text">
                        <h3 class="feature-title">{feature.title}</h3>
                        <p class="feature-description">{feature.description}</p>
                        <div class="feature-more">
                            <span>"자세히 보기"</span>
                            <span class="feature-more-arrow">"→"</span>
                        </div>
                    </div>
                </div>
                <div class="feature-card-overlay"></div>
            </button>
        </div>
    }
}

/// Bottom sheet with a feature's details. Closed by the close buttons, the
/// overlay or Escape.
#[component]
fn FeatureSheet(focus: RwSignal<FeatureFocus>) -> impl IntoView {
    let max_width = use_config().layout.max_width.clone();
    let is_open = Memo::new(move |_| focus.with(FeatureFocus::is_open));
    let close = move |_| close_sheet(focus);

    use_motion(
        move || is_open.get().then_some(()),
        move |_: &(), scope| {
            set_body_scroll_locked(true);
            scope.defer(|| set_body_scroll_locked(false));

            let Some(document) = web_sys::window().and_then(|w| w.document()) else {
                return;
            };
            listen(scope, &document, "keydown", move |event| {
                let dismiss = event
                    .dyn_ref::<KeyboardEvent>()
                    .is_some_and(|key| is_dismiss_key(&key.key()));
                if dismiss {
                    close_sheet(focus);
                }
            });
        },
    );

    let feature = move || focus.with(|f| f.selected()).and_then(Feature::find);

    view! {
        <Show when=move || is_open.get()>
            {
                let max_width = max_width.clone();
                move || {
                    feature()
                        .map(|feature| {
                            view! {
                                <div
                                    class="sheet"
                                    class:is-closing=move || focus.with(FeatureFocus::is_closing)
                                >
                                    <div class="sheet-overlay" on:click=close></div>
                                    <div
                                        class="sheet-panel"
                                        role="dialog"
                                        aria-modal="true"
                                        style=format!("max-width: {max_width}; max-height: 85vh;")
                                    >
                                        <div class="sheet-handle"><div></div></div>
                                        <div class="sheet-header">
                                            <div class="feature-icon">{feature.icon}</div>
                                            <h2 class="sheet-title">{feature.title}</h2>
                                            <button class="sheet-close" aria-label="모달 닫기" on:click=close>
                                                "✕"
                                            </button>
                                        </div>
                                        <div class="sheet-body">
                                            <h3 class="sheet-heading">"기능 설명"</h3>
                                            <p class="sheet-details">{feature.details}</p>
                                            <h3 class="sheet-heading">"사용 예시"</h3>
                                            <ol class="sheet-examples">
                                                {feature
                                                    .examples
                                                    .iter()
                                                    .enumerate()
                                                    .map(|(index, example)| {
                                                        view! {
                                                            <li class="sheet-example">
                                                                <span class="sheet-example-index">{index + 1}</span>
                                                                <p>{*example}</p>
                                                            </li>
                                                        }
                                                    })
                                                    .collect::<Vec<_>>()}
                                            </ol>
                                            {feature
                                                .illustration
                                                .map(|src| {
                                                    view! {
                                                        <OptimizedImage
                                                            src=src
                                                            alt=feature.title
                                                            class="sheet-illustration"
                                                            fallback=ILLUSTRATION_FALLBACK
                                                        />
                                                    }
                                                })}
                                            <button class="sheet-dismiss" on:click=close>"닫기"</button>
                                        </div>
                                    </div>
                                </div>
                            }
                        })
                }
            }
        </Show>
    }
}
