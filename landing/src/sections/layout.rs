use leptos::html;
use leptos::prelude::*;
use web_sys::HtmlElement;

use crate::config::use_config;
use crate::dom::{children_of, scroll_reveal, use_motion};
use crate::motion::presets::header_reveal;
use crate::motion::TriggerSpec;

/// Header reveal window shared by every section header.
pub const HEADER_TRIGGER: TriggerSpec =
    TriggerSpec::new("top 80%", "bottom 20%", "play none none reverse");

/// Background variants for [`Section`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Background {
    #[default]
    Base,
    Muted,
    Highlight,
}

impl Background {
    pub fn class(self) -> &'static str {
        match self {
            Background::Base => "bg-gradient-1",
            Background::Muted => "bg-gradient-2",
            Background::Highlight => "bg-gradient-3",
        }
    }
}

/// Page shell: a single centred column.
#[component]
pub fn Layout(children: Children) -> impl IntoView {
    let max_width = use_config().layout.max_width.clone();
    view! {
        <div class="page bg-gradient-1">
            <main class="page-main" style=format!("max-width: {max_width}; margin: 0 auto;")>
                {children()}
            </main>
        </div>
    }
}

#[component]
pub fn Section(
    node_ref: NodeRef<html::Section>,
    #[prop(optional)] background: Background,
    #[prop(optional)] class: &'static str,
    #[prop(optional)] id: Option<&'static str>,
    children: Children,
) -> impl IntoView {
    let max_width = use_config().layout.max_width.clone();
    view! {
        <section
            node_ref=node_ref
            id=id
            class=format!("section {} {class}", background.class())
            style=format!("max-width: {max_width}; margin: 0 auto;")
        >
            <div class="section-inner">{children()}</div>
        </section>
    }
}

/// Section title and lead paragraph. Both rise `rise` px into place, 0.2s
/// apart, when the header scrolls into view.
#[component]
pub fn SectionHeader(
    title: &'static str,
    #[prop(default = 20.0)] rise: f64,
    children: Children,
) -> impl IntoView {
    let header = NodeRef::<html::Div>::new();
    let motion = use_config().motion;

    use_motion(
        move || header.get().map(HtmlElement::from),
        move |header: &HtmlElement, scope| {
            let lines = children_of(header);
            let timeline = header_reveal(lines.len(), rise);
            scroll_reveal(scope, header, lines, timeline, HEADER_TRIGGER, &motion);
        },
    );

    view! {
        <div node_ref=header class="section-header">
            <h2 class="section-title">{title}</h2>
            <p class="section-lead">{children()}</p>
        </div>
    }
}
