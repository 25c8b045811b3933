use std::cell::RefCell;
use std::rc::Rc;

use leptos::html;
use leptos::prelude::*;
use web_sys::HtmlElement;

use crate::config::use_config;
use crate::dom::{use_motion, FrameLoop};
use crate::motion::typewriter::CURSOR;
use crate::motion::{Ticker, TypeEvent, TypeLine, Typewriter};

pub const HEADLINE: &str = "아이디어 스케치에서,";
pub const HEADLINE_ACCENT: &str = "서비스 런칭까지.";
pub const TAGLINE: &str = "Kiro와 함께 시작해보세요.";

/// Two headline lines at 50ms per character, then the tagline at 30ms,
/// with 0.3s and 0.5s pauses in between.
pub fn hero_typewriter() -> Typewriter {
    Typewriter::new(vec![
        TypeLine::new(HEADLINE, 0.05).pause_after(0.3),
        TypeLine::new(HEADLINE_ACCENT, 0.05).pause_after(0.5),
        TypeLine::new(TAGLINE, 0.03),
    ])
}

/// Typed hero headline. Server output carries the full text; the
/// animation clears and retypes it once mounted.
#[component]
pub fn TypingHeadline(#[prop(optional)] on_complete: Option<Callback<()>>) -> impl IntoView {
    let heading = NodeRef::<html::H1>::new();
    let lines = [
        RwSignal::new(HEADLINE.to_string()),
        RwSignal::new(HEADLINE_ACCENT.to_string()),
        RwSignal::new(TAGLINE.to_string()),
    ];
    let cursor = RwSignal::new(None::<f64>);
    let motion = use_config().motion;

    let apply = move |event: TypeEvent| match event {
        TypeEvent::Prefix { line, text } => {
            if let Some(signal) = lines.get(line) {
                signal.set(text);
            }
        }
        TypeEvent::CursorShown => cursor.set(Some(1.0)),
        TypeEvent::CursorRemoved => cursor.set(None),
        TypeEvent::Completed => {
            tracing::debug!("hero headline typed");
            if let Some(on_complete) = on_complete {
                on_complete.run(());
            }
        }
    };

    use_motion(
        move || heading.get().map(HtmlElement::from),
        move |_: &HtmlElement, scope| {
            let typewriter = Rc::new(RefCell::new(hero_typewriter()));
            typewriter.borrow_mut().start().into_iter().for_each(apply);

            let frames = FrameLoop::new(Ticker::new(motion.lag_threshold, motion.adjusted_lag), {
                let typewriter = Rc::clone(&typewriter);
                move |dt| {
                    let mut tw = typewriter.borrow_mut();
                    tw.advance(dt).into_iter().for_each(apply);
                    if tw.cursor_visible() {
                        cursor.set(Some(tw.cursor_opacity()));
                    }
                    !tw.is_done()
                }
            });
            frames.start();
            scope.defer(move || {
                frames.stop();
                cursor.set(None);
            });
        },
    );

    view! {
        <div class="typing">
            <h1 node_ref=heading class="typing-headline">
                <span class="typing-line">{move || lines[0].get()}</span>
                <br />
                <span class="typing-line text-primary">{move || lines[1].get()}</span>
            </h1>
            <p class="typing-tagline">
                {move || lines[2].get()}
                {move || {
                    cursor
                        .get()
                        .map(|opacity| {
                            view! {
                                <span class="typing-cursor text-primary" style=format!("opacity: {opacity:.3}")>
                                    {CURSOR}
                                </span>
                            }
                        })
                }}
            </p>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hero_typewriter_timing() {
        let tw = hero_typewriter();
        let typing = 11.0 * 0.05 + 0.3 + 9.0 * 0.05 + 0.5 + 16.0 * 0.03;
        let blink = 0.5 * 6.0;
        assert!((tw.duration() - (typing + blink)).abs() < 1e-9);
    }
}
