use std::time::Duration;

use leptos::html;
use leptos::prelude::*;
use web_sys::HtmlElement;

use crate::config::{use_config, Links};
use crate::content::CallToAction;
use crate::dom::{bind_hover, use_motion, Animator};
use crate::motion::presets::HoverLift;
use crate::navigate::{use_navigation, Navigation};
use crate::state::{PressState, PRESS_FEEDBACK_MS};

/// Opens the CTA's configured destination.
pub fn follow(cta: &CallToAction, links: &Links, navigation: &Navigation) {
    navigation.open_external(cta.url(links));
}

/// Shows `id` as pressed, then releases it and runs `action` once the press
/// feedback has played.
pub fn press_then(press: RwSignal<PressState>, id: &'static str, action: impl FnOnce() + 'static) {
    press.update(|p| p.press(id));
    set_timeout(
        move || {
            press.update(PressState::release);
            action();
        },
        Duration::from_millis(PRESS_FEEDBACK_MS),
    );
}

/// Outbound button.
///
/// With `press` the button joins a press-feedback group and navigates after
/// the pressed state has shown; without it navigation is immediate. `hover`
/// lifts the wrapper on pointer-enter, leaving the button's own transform to
/// the press feedback.
#[component]
pub fn CtaButton(
    cta: &'static CallToAction,
    #[prop(optional)] class: &'static str,
    #[prop(optional)] press: Option<RwSignal<PressState>>,
    #[prop(optional)] hover: Option<HoverLift>,
) -> impl IntoView {
    let config = use_config();
    let links = config.links.clone();
    let navigation = use_navigation();
    let lift_ref = NodeRef::<html::Span>::new();

    if let Some(hover) = hover {
        let motion = config.motion;
        use_motion(
            move || lift_ref.get().map(HtmlElement::from),
            move |wrapper: &HtmlElement, scope| {
                let lift = Animator::new(scope, hover.timeline(), vec![wrapper.clone()], &motion);
                bind_hover(scope, wrapper, lift);
            },
        );
    }

    let on_click = move |_| {
        let links = links.clone();
        let navigation = navigation.clone();
        match press {
            Some(press) => press_then(press, cta.id, move || follow(cta, &links, &navigation)),
            None => follow(cta, &links, &navigation),
        }
    };
    let is_pressed = move || press.is_some_and(|p| p.with(|p| p.is_pressed(cta.id)));

    view! {
        <span node_ref=lift_ref class="cta-lift">
            <button
                class=format!("cta {class}")
                class:is-pressed=is_pressed
                aria-label=cta.aria_label
                on:click=on_click
            >
                <span class="cta-fill"></span>
                <span class="cta-label">
                    {cta.icon.map(|icon| view! { <span class="cta-icon">{icon}</span> })}
                    {cta.label}
                </span>
            </button>
        </span>
    }
}
