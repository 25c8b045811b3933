use std::time::Duration;

use leptos::prelude::*;

use crate::config::use_config;
use crate::content::{Testimonial, TESTIMONIALS};
use crate::state::CLICK_FEEDBACK_MS;

#[component]
pub fn Testimonials() -> impl IntoView {
    let max_width = use_config().layout.max_width.clone();

    view! {
        <section class="testimonials bg-secondary" style=format!("max-width: {max_width}; margin: 0 auto;")>
            <div class="section-header">
                <h2 class="section-title">"글로벌 엔지니어에게도 사랑받는 KIRO"</h2>
                <p class="section-lead">
                    "실제 개발자들이 KIRO를 사용하며" <br /> "경험한 생생한 후기를 확인해보세요"
                </p>
            </div>
            <div class="testimonial-list">
                {TESTIMONIALS
                    .iter()
                    .map(|testimonial| view! { <TestimonialCard testimonial=testimonial /> })
                    .collect::<Vec<_>>()}
            </div>
        </section>
    }
}

/// Review card; a click flashes the pressed style for a moment.
#[component]
fn TestimonialCard(testimonial: &'static Testimonial) -> impl IntoView {
    let pressed = RwSignal::new(false);
    let on_click = move |_| {
        pressed.set(true);
        set_timeout(move || pressed.set(false), Duration::from_millis(CLICK_FEEDBACK_MS));
    };

    view! {
        <div class="testimonial-card" class:is-pressed=move || pressed.get() on:click=on_click>
            <p class="testimonial-quote">{format!("\"{}\"", testimonial.quote)}</p>
            <div class="testimonial-author">
                <h4 class="testimonial-name">{testimonial.name}</h4>
                <p class="testimonial-byline">{testimonial.byline()}</p>
            </div>
            <div class="testimonial-overlay"></div>
        </div>
    }
}
