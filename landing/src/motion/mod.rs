//! Motion engine: easing, tweens, timelines, scroll triggers and the
//! typewriter effect.
//!
//! Everything in here is plain data and arithmetic. Browser glue (frame
//! loop, listeners, style writes) lives in [`crate::dom`].

pub mod ease;
pub mod plugins;
pub mod presets;
pub mod scope;
pub mod scroll;
pub mod ticker;
pub mod timeline;
pub mod tween;
pub mod typewriter;

pub use ease::Ease;
pub use presets::{CardEntrance, HoverLift, MotionDefaults};
pub use scope::{Scope, ScopeId, ScopeRegistry, ScopeStats};
pub use scroll::{
    Bounds, ScrollTrigger, ToggleAction, ToggleActions, TriggerPoint, TriggerSpec, Zone,
};
pub use ticker::Ticker;
pub use timeline::{Phase, Position, Timeline};
pub use tween::{Repeat, Tween, VisualState};
pub use typewriter::{CursorBlink, TypeEvent, TypeLine, Typewriter};
