use leptos::html;
use leptos::prelude::*;
use web_sys::HtmlElement;

use super::cta::CtaButton;
use super::layout::{Background, Section, SectionHeader};
use crate::config::use_config;
use crate::content::{BlogPost, BLOG_DOCS, POSTS};
use crate::dom::{bind_hover, scroll_reveal, use_motion, Animator};
use crate::motion::presets::{CardEntrance, HoverLift};
use crate::motion::TriggerSpec;
use crate::navigate::use_navigation;

const CARD_TRIGGER: TriggerSpec =
    TriggerSpec::new("top 85%", "bottom 15%", "play none none reverse");

#[component]
pub fn Blog() -> impl IntoView {
    let section = NodeRef::<html::Section>::new();

    view! {
        <Section node_ref=section background=Background::Muted class="blog">
            <SectionHeader title="KIRO와 함께하는 개발 여정" rise=50.0>
                "KIRO를 더 효과적으로 활용하고 개발 실력을 향상시킬 수 있는 " <br class="wide-only" />
                <span class="text-primary text-strong">"유용한 가이드와 팁들을 확인해보세요"</span>
            </SectionHeader>

            <div class="blog-list">
                {POSTS
                    .iter()
                    .enumerate()
                    .map(|(index, post)| view! { <BlogCard post=post index=index /> })
                    .collect::<Vec<_>>()}
            </div>

            <div class="blog-cta">
                <h3 class="blog-cta-title">"더 많은 KIRO 활용법이" <br /> "궁금하신가요?"</h3>
                <p class="blog-cta-lead">
                    "DOCS에서 더 자세한 사용법과 고급 기능들을 확인할 수 있습니다. "
                    <br class="wide-only" />
                    "지금 바로 확인해보세요!"
                </p>
                <CtaButton cta=&BLOG_DOCS class="cta-ghost" />
            </div>
        </Section>
    }
}

#[component]
fn BlogCard(post: &'static BlogPost, index: usize) -> impl IntoView {
    let wrapper = NodeRef::<html::Div>::new();
    let card = NodeRef::<html::Article>::new();
    let motion = use_config().motion;
    let navigation = use_navigation();

    use_motion(
        move || wrapper.get().map(HtmlElement::from),
        move |wrapper: &HtmlElement, scope| {
            scroll_reveal(
                scope,
                wrapper,
                vec![wrapper.clone()],
                CardEntrance::BLOG.timeline(index),
                CARD_TRIGGER,
                &motion,
            );
        },
    );

    use_motion(
        move || card.get().map(HtmlElement::from),
        move |card: &HtmlElement, scope| {
            let lift = Animator::new(scope, HoverLift::BLOG_CARD.timeline(), vec![card.clone()], &motion);
            bind_hover(scope, card, lift);
        },
    );

    view! {
        <div node_ref=wrapper class="blog-card-wrap">
            <article
                node_ref=card
                class="blog-card"
                on:click=move |_| navigation.open_external(post.link)
            >
                <div class="blog-card-meta">
                    <span class="blog-category">{post.category}</span>
                    <span class="blog-read-time">{post.read_time}</span>
                </div>
                <h3 class="blog-title">{post.title}</h3>
                <p class="blog-summary">{post.summary}</p>
                <div class="blog-card-footer">
                    <time class="blog-date" datetime=post.date>{post.display_date().into_owned()}</time>
                    <span class="blog-read-more">"읽어보기" <span aria-hidden="true">"›"</span></span>
                </div>
            </article>
        </div>
    }
}
