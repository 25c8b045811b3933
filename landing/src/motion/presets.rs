//! Ready-made timelines used by the page sections.

use serde::Deserialize;

use super::ease::Ease;
use super::timeline::{Position, Timeline};
use super::tween::{Repeat, Tween, VisualState};

/// Engine-wide defaults, overridable from `site.toml`.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
#[serde(default)]
pub struct MotionDefaults {
    pub duration: f64,
    pub ease: Ease,
    pub stagger: f64,
    /// Frame gaps above this (seconds) are treated as `adjusted_lag`.
    pub lag_threshold: f64,
    pub adjusted_lag: f64,
}

impl Default for MotionDefaults {
    fn default() -> Self {
        Self {
            duration: 0.6,
            ease: Ease::POWER2_OUT,
            stagger: 0.1,
            lag_threshold: 0.5,
            adjusted_lag: 0.033,
        }
    }
}

/// Hidden pose for fade-ins: transparent and 30px low.
const FADE_FROM: VisualState = VisualState::hidden().with_y(30.0);

/// Single element fading up into place after `delay` seconds.
pub fn fade_in(defaults: &MotionDefaults, delay: f64) -> Timeline {
    let mut tl = Timeline::new(1);
    tl.add(
        Tween::new(0, FADE_FROM, VisualState::REST, defaults.duration, defaults.ease),
        Position::At(delay),
    );
    tl
}

/// `count` elements fading up one after another.
pub fn stagger_fade_in(defaults: &MotionDefaults, count: usize) -> Timeline {
    let mut tl = Timeline::new(count);
    tl.add_staggered(
        0..count,
        FADE_FROM,
        VisualState::REST,
        defaults.duration,
        defaults.ease,
        defaults.stagger,
        Position::At(0.0),
    );
    tl
}

/// Section header children rising by `rise` px, 0.2s apart.
pub fn header_reveal(count: usize, rise: f64) -> Timeline {
    let mut tl = Timeline::new(count);
    tl.add_staggered(
        0..count,
        VisualState::hidden().with_y(rise),
        VisualState::REST,
        0.8,
        Ease::POWER3_OUT,
        0.2,
        Position::At(0.0),
    );
    tl
}

/// Entrance for one card of a list; later cards wait `index × each`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CardEntrance {
    pub from: VisualState,
    pub duration: f64,
    pub each: f64,
    pub ease: Ease,
}

impl CardEntrance {
    /// Blog cards: 60px low, slightly shrunk, 0.1s apart.
    pub const BLOG: CardEntrance = CardEntrance {
        from: VisualState::hidden().with_y(60.0).with_scale(0.95),
        duration: 0.8,
        each: 0.1,
        ease: Ease::back_out(1.7),
    };

    /// Differentiation cards: 30px low, shrunk to 90%, 0.05s apart.
    pub const DIFFERENTIATION: CardEntrance = CardEntrance {
        from: VisualState::hidden().with_y(30.0).with_scale(0.9),
        duration: 0.6,
        each: 0.05,
        ease: Ease::back_out(1.7),
    };

    pub fn timeline(&self, index: usize) -> Timeline {
        let mut tl = Timeline::new(1);
        tl.add(
            Tween::new(0, self.from, VisualState::REST, self.duration, self.ease),
            Position::At(self.each * index as f64),
        );
        tl
    }
}

/// Content block sliding in from the right.
pub fn slide_in(distance: f64) -> Timeline {
    let mut tl = Timeline::new(1);
    tl.add(
        Tween::new(0, VisualState::hidden().with_x(distance), VisualState::REST, 0.8, Ease::POWER3_OUT),
        Position::At(0.0),
    );
    tl
}

/// Pose an element lifts into while hovered.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HoverLift {
    pub lift: f64,
    pub scale: f64,
    pub glow: f64,
}

impl HoverLift {
    pub const BLOG_CARD: HoverLift = HoverLift {
        lift: -8.0,
        scale: 1.02,
        glow: 0.15,
    };

    pub const FEATURE_CARD: HoverLift = HoverLift {
        lift: -5.0,
        scale: 1.0,
        glow: 0.15,
    };

    pub const PRIMARY_BUTTON: HoverLift = HoverLift {
        lift: -3.0,
        scale: 1.08,
        glow: 0.4,
    };

    /// Paused timeline; play on pointer-enter, reverse on pointer-leave.
    pub fn timeline(&self) -> Timeline {
        let to = VisualState::REST
            .with_y(self.lift)
            .with_scale(self.scale)
            .with_glow(self.glow);
        let mut tl = Timeline::new(1);
        tl.add(
            Tween::new(0, VisualState::REST, to, 0.3, Ease::POWER2_OUT),
            Position::At(0.0),
        );
        tl
    }
}

/// Endless gentle scale pulse.
pub fn pulse(scale: f64, half_cycle: f64) -> Timeline {
    let mut tl = Timeline::new(1);
    tl.add(
        Tween::new(
            0,
            VisualState::REST,
            VisualState::REST.with_scale(scale),
            half_cycle,
            Ease::POWER2_IN_OUT,
        )
        .repeat(Repeat::Infinite)
        .yoyo(true),
        Position::At(0.0),
    );
    tl
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::motion::timeline::Phase;

    #[test]
    fn fade_in_respects_delay() {
        let tl = fade_in(&MotionDefaults::default(), 0.3);
        assert!((tl.duration() - 0.9).abs() < 1e-9);
        assert_eq!(tl.state_of(0), FADE_FROM);
    }

    #[test]
    fn stagger_uses_configured_gap() {
        let defaults = MotionDefaults {
            stagger: 0.25,
            ..MotionDefaults::default()
        };
        let tl = stagger_fade_in(&defaults, 2);
        assert!((tl.duration() - 0.85).abs() < 1e-9);
    }

    #[test]
    fn card_entrance_delays_by_index() {
        let tl = CardEntrance::BLOG.timeline(3);
        assert!((tl.duration() - 1.1).abs() < 1e-9);
        let tl = CardEntrance::DIFFERENTIATION.timeline(0);
        assert!((tl.duration() - 0.6).abs() < 1e-9);
    }

    #[test]
    fn hover_lift_round_trip() {
        let mut tl = HoverLift::BLOG_CARD.timeline();
        tl.play();
        tl.tick(1.0);
        let lifted = tl.state_of(0);
        assert_eq!(lifted.y, -8.0);
        assert_eq!(lifted.scale, 1.02);
        tl.reverse();
        tl.tick(1.0);
        assert_eq!(tl.phase(), Phase::Idle);
        assert_eq!(tl.state_of(0), VisualState::REST);
    }

    #[test]
    fn primary_button_lift_matches_button_hover() {
        let mut tl = HoverLift::PRIMARY_BUTTON.timeline();
        assert!((tl.duration() - 0.3).abs() < 1e-9);
        tl.play();
        tl.tick(1.0);
        let lifted = tl.state_of(0);
        assert_eq!(lifted.y, -3.0);
        assert_eq!(lifted.scale, 1.08);
        assert!(lifted.shadow_css().is_some());
    }

    #[test]
    fn pulse_never_settles() {
        let mut tl = pulse(1.05, 1.5);
        tl.play();
        tl.tick(1_000.0);
        assert!(tl.is_playing());
    }
}
