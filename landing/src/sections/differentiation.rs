use leptos::html;
use leptos::prelude::*;
use web_sys::{HtmlElement, KeyboardEvent};

use super::cta::CtaButton;
use super::layout::{Background, Section, SectionHeader, HEADER_TRIGGER};
use crate::config::use_config;
use crate::content::{DifferentiationPoint, DIFFERENTIATION, DIFFERENTIATION_START};
use crate::dom::{bind_hover, scroll_reveal, use_motion, Animator};
use crate::motion::presets::{slide_in, CardEntrance, HoverLift};
use crate::motion::TriggerSpec;
use crate::state::is_activate_key;

const CARD_TRIGGER: TriggerSpec =
    TriggerSpec::new("top center", "bottom 15%", "play none none reverse");

const TIP_SLIDE: f64 = 50.0;

#[component]
pub fn Differentiation() -> impl IntoView {
    let section = NodeRef::<html::Section>::new();
    let tip = NodeRef::<html::Div>::new();
    let active = RwSignal::new(0usize);
    let motion = use_config().motion;

    use_motion(
        move || tip.get().map(HtmlElement::from),
        move |tip: &HtmlElement, scope| {
            scroll_reveal(
                scope,
                tip,
                vec![tip.clone()],
                slide_in(TIP_SLIDE),
                HEADER_TRIGGER,
                &motion,
            );
        },
    );

    view! {
        <Section node_ref=section background=Background::Muted class="differentiation">
            <SectionHeader title="다른 AI 도구와 뭐가 다른가요?">
                "KIRO만의 핵심 차별화 요소로 " <br />
                <span class="text-primary text-strong">"복잡한 설정 없이도 효율적인 개발 환경"</span>
                "을 " <br /> "구축하세요"
            </SectionHeader>

            <div class="diff-list">
                {DIFFERENTIATION
                    .iter()
                    .enumerate()
                    .map(|(index, point)| view! { <DiffCard point=point index=index active=active /> })
                    .collect::<Vec<_>>()}
            </div>

            <div node_ref=tip class="diff-tip">
                <span class="diff-tip-check" aria-hidden="true">"✓"</span>
                <div>
                    <h5 class="diff-tip-title">"주니어 개발자에게 특히 유용한 이유"</h5>
                    <p class="diff-tip-body">
                        "복잡한 설정이나 깊은 도구 지식 없이도 요구사항을 곧바로 UI·로직·테스트 코드로 바꾸고 반복 작업을 자동화할 수 있어요."
                    </p>
                </div>
            </div>

            <div class="diff-cta">
                <h3 class="diff-cta-title">"지금 바로 KIRO의 차별화된 기능을 경험해보세요"</h3>
                <p class="diff-cta-lead">
                    "복잡한 설정 없이 바로 시작할 수 있는 스마트한 개발 환경을 만나보세요"
                </p>
                <CtaButton cta=&DIFFERENTIATION_START class="cta-primary" hover=HoverLift::PRIMARY_BUTTON />
            </div>
        </Section>
    }
}

/// One comparison card. The outer wrapper carries the scroll entrance and the
/// inner card the hover lift, so the two never write the same transform.
#[component]
fn DiffCard(
    point: &'static DifferentiationPoint,
    index: usize,
    active: RwSignal<usize>,
) -> impl IntoView {
    let wrapper = NodeRef::<html::Div>::new();
    let card = NodeRef::<html::Div>::new();
    let motion = use_config().motion;

    use_motion(
        move || wrapper.get().map(HtmlElement::from),
        move |wrapper: &HtmlElement, scope| {
            scroll_reveal(
                scope,
                wrapper,
                vec![wrapper.clone()],
                CardEntrance::DIFFERENTIATION.timeline(index),
                CARD_TRIGGER,
                &motion,
            );
        },
    );

    use_motion(
        move || card.get().map(HtmlElement::from),
        move |card: &HtmlElement, scope| {
            let lift = Animator::new(
                scope,
                HoverLift::FEATURE_CARD.timeline(),
                vec![card.clone()],
                &motion,
            );
            bind_hover(scope, card, lift);
        },
    );

    let on_keydown = move |event: KeyboardEvent| {
        if is_activate_key(&event.key()) {
            event.prevent_default();
            active.set(index);
        }
    };

    view! {
        <div node_ref=wrapper class="diff-card-wrap">
            <div
                node_ref=card
                class="diff-card"
                class:is-active=move || active.get() == index
                role="button"
                tabindex="0"
                aria-pressed=move || (active.get() == index).to_string()
                on:click=move |_| active.set(index)
                on:keydown=on_keydown
            >
                <div class="diff-icon">{point.icon}</div>
                <div class="diff-text">
                    <h3 class="diff-title">{point.title}</h3>
                    <p class="diff-description">{point.description}</p>
                </div>
            </div>
        </div>
    }
}
