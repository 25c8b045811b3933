use leptos::prelude::*;

use super::cta::CtaButton;
use super::image::OptimizedImage;
use super::typing::TypingHeadline;
use crate::config::use_config;
use crate::content::{HERO_PRICING, HERO_START};
use crate::media::Loading;
use crate::motion::presets::HoverLift;
use crate::state::PressState;

pub const LOGO_SRC: &str = "/assets/kiro.svg";

#[component]
pub fn Hero() -> impl IntoView {
    let press = RwSignal::new(PressState::default());
    let max_width = use_config().layout.max_width.clone();

    view! {
        <section class="hero" style=format!("max-width: {max_width}; margin: 0 auto;")>
            <div class="hero-glow" aria-hidden="true">
                <div class="hero-glow-violet"></div>
                <div class="hero-glow-cyan"></div>
                <div class="hero-glow-coral"></div>
            </div>
            <div class="hero-content">
                <div class="hero-logo">
                    <OptimizedImage
                        src=LOGO_SRC
                        alt="Kiro Logo"
                        width=64
                        height=64
                        loading=Loading::Eager
                        priority=true
                    />
                </div>
                <TypingHeadline />
                <p class="hero-subtitle">
                    "스펙 중심 개발로 AI 코딩에 구조를 도입하여 최고의 작업을 수행할 수 있도록 도와줍니다."
                </p>
                <div class="hero-actions">
                    <CtaButton cta=&HERO_START class="cta-primary cta-large" press=press hover=HoverLift::PRIMARY_BUTTON />
                    <CtaButton cta=&HERO_PRICING class="cta-accent cta-large" press=press />
                </div>
            </div>
        </section>
    }
}
