use leptos::html;
use leptos::prelude::*;
use web_sys::HtmlElement;

use super::cta::CtaButton;
use super::layout::{Background, Section};
use crate::config::use_config;
use crate::content::PRICING_WAITLIST;
use crate::dom::{scroll_reveal, use_motion, Animator};
use crate::motion::presets::{fade_in, pulse, stagger_fade_in, HoverLift};
use crate::motion::TriggerSpec;

const TITLE_TRIGGER: TriggerSpec = TriggerSpec::new("top 80%", "bottom 20%", "play none none none");
const BLOCK_TRIGGER: TriggerSpec = TriggerSpec::once("top 80%");

const BANNER_DELAY: f64 = 0.3;
const BUBBLE_DELAY: f64 = 0.5;
const CTA_DELAY: f64 = 0.7;

/// Fades `node` in `delay` seconds after it reaches the block trigger line.
fn use_delayed_fade(node: NodeRef<html::Div>, delay: f64) {
    let motion = use_config().motion;
    use_motion(
        move || node.get().map(HtmlElement::from),
        move |element: &HtmlElement, scope| {
            scroll_reveal(
                scope,
                element,
                vec![element.clone()],
                fade_in(&motion, delay),
                BLOCK_TRIGGER,
                &motion,
            );
        },
    );
}

#[component]
pub fn Pricing() -> impl IntoView {
    let section = NodeRef::<html::Section>::new();
    let title = NodeRef::<html::H2>::new();
    let subtitle = NodeRef::<html::P>::new();
    let banner = NodeRef::<html::Div>::new();
    let bubble = NodeRef::<html::Div>::new();
    let bubble_body = NodeRef::<html::Span>::new();
    let cta = NodeRef::<html::Div>::new();
    let motion = use_config().motion;

    use_motion(
        move || {
            let section: HtmlElement = section.get()?;
            let title: HtmlElement = title.get()?.into();
            let subtitle: HtmlElement = subtitle.get()?.into();
            Some((section, [title, subtitle]))
        },
        move |(section, lines): &(HtmlElement, [HtmlElement; 2]), scope| {
            scroll_reveal(
                scope,
                section,
                lines.to_vec(),
                stagger_fade_in(&motion, lines.len()),
                TITLE_TRIGGER,
                &motion,
            );
        },
    );

    use_delayed_fade(banner, BANNER_DELAY);
    use_delayed_fade(bubble, BUBBLE_DELAY);
    use_delayed_fade(cta, CTA_DELAY);

    use_motion(
        move || bubble_body.get().map(HtmlElement::from),
        move |body: &HtmlElement, scope| {
            Animator::new(scope, pulse(1.05, 1.5), vec![body.clone()], &motion).play();
        },
    );

    view! {
        <Section node_ref=section background=Background::Highlight class="pricing">
            <h2 node_ref=title class="pricing-title">"Kiro가 드리는 첫 14일의 선물"</h2>
            <p node_ref=subtitle class="pricing-subtitle">
                "빠르게 시작해도 완성도 있게. Kiro와 시작해보세요."
            </p>

            <div node_ref=banner class="pricing-banner">
                <div node_ref=bubble class="discount-bubble">
                    <div class="discount-bubble-tilt">
                        <span node_ref=bubble_body class="discount-bubble-body">
                            "첫 달 할인 중! 🎉"
                            <span class="discount-bubble-tail"></span>
                        </span>
                    </div>
                </div>
                <h3 class="pricing-banner-title">"신규 사용자 특별 혜택"</h3>
                <div class="pricing-offer">
                    <div class="pricing-offer-headline">"14일 무료 체험"</div>
                    <div class="pricing-offer-detail">
                        <span class="text-primary">"100개"</span>
                        "의 spec 요청 + "
                        <span class="text-primary">"100개"</span>
                        "의 vibe 요청"
                    </div>
                    <div class="pricing-offer-note">"복잡한 설정 없이 바로 시작하세요"</div>
                </div>
            </div>

            <div node_ref=cta class="pricing-cta">
                <CtaButton cta=&PRICING_WAITLIST class="cta-primary cta-wide" hover=HoverLift::PRIMARY_BUTTON />
            </div>
        </Section>
    }
}
