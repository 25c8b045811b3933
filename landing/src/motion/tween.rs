//! Visual state and single-property-set interpolation.

use super::ease::Ease;

/// Everything the motion engine is allowed to touch on an element.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct VisualState {
    /// Horizontal offset in px.
    pub x: f64,
    /// Vertical offset in px.
    pub y: f64,
    pub scale: f64,
    pub opacity: f64,
    /// Accent shadow strength, 0 = no shadow.
    pub glow: f64,
}

impl VisualState {
    /// The resting state every entrance animation settles into.
    pub const REST: VisualState = VisualState {
        x: 0.0,
        y: 0.0,
        scale: 1.0,
        opacity: 1.0,
        glow: 0.0,
    };

    pub const fn hidden() -> Self {
        Self {
            opacity: 0.0,
            ..Self::REST
        }
    }

    pub const fn with_x(self, x: f64) -> Self {
        Self { x, ..self }
    }

    pub const fn with_y(self, y: f64) -> Self {
        Self { y, ..self }
    }

    pub const fn with_scale(self, scale: f64) -> Self {
        Self { scale, ..self }
    }

    pub const fn with_opacity(self, opacity: f64) -> Self {
        Self { opacity, ..self }
    }

    pub const fn with_glow(self, glow: f64) -> Self {
        Self { glow, ..self }
    }

    pub fn lerp(&self, to: &Self, t: f64) -> Self {
        let mix = |a: f64, b: f64| a + (b - a) * t;
        Self {
            x: mix(self.x, to.x),
            y: mix(self.y, to.y),
            scale: mix(self.scale, to.scale),
            opacity: mix(self.opacity, to.opacity),
            glow: mix(self.glow, to.glow),
        }
    }

    pub fn transform_css(&self) -> String {
        format!(
            "translate({:.2}px, {:.2}px) scale({:.4})",
            self.x, self.y, self.scale
        )
    }

    pub fn opacity_css(&self) -> String {
        format!("{:.4}", self.opacity.clamp(0.0, 1.0))
    }

    /// `None` when there is nothing to draw, so callers can clear the property.
    pub fn shadow_css(&self) -> Option<String> {
        (self.glow > 0.0).then(|| {
            format!(
                "0 20px 40px rgba(143, 70, 255, {:.3})",
                self.glow.clamp(0.0, 1.0)
            )
        })
    }
}

impl Default for VisualState {
    fn default() -> Self {
        Self::REST
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Repeat {
    Count(u32),
    Infinite,
}

impl Default for Repeat {
    fn default() -> Self {
        Repeat::Count(0)
    }
}

/// One `from → to` interpolation of a single target.
#[derive(Debug, Clone, PartialEq)]
pub struct Tween {
    pub target: usize,
    pub from: VisualState,
    pub to: VisualState,
    pub duration: f64,
    pub ease: Ease,
    pub repeat: Repeat,
    pub yoyo: bool,
}

impl Tween {
    pub fn new(target: usize, from: VisualState, to: VisualState, duration: f64, ease: Ease) -> Self {
        Self {
            target,
            from,
            to,
            duration: duration.max(0.0),
            ease,
            repeat: Repeat::default(),
            yoyo: false,
        }
    }

    pub fn repeat(mut self, repeat: Repeat) -> Self {
        self.repeat = repeat;
        self
    }

    pub fn yoyo(mut self, yoyo: bool) -> Self {
        self.yoyo = yoyo;
        self
    }

    /// Length of all iterations together; infinite repeats never end.
    pub fn total_duration(&self) -> f64 {
        match self.repeat {
            Repeat::Infinite => f64::INFINITY,
            Repeat::Count(n) => self.duration * f64::from(n + 1),
        }
    }

    /// Sample at `local` seconds after the tween's own start.
    pub fn state_at(&self, local: f64) -> VisualState {
        if local <= 0.0 {
            return self.from;
        }
        if self.duration <= 0.0 {
            return self.end_state();
        }

        let total = self.total_duration();
        if local >= total {
            return self.end_state();
        }

        let iteration = (local / self.duration).floor();
        let mut progress = (local - iteration * self.duration) / self.duration;
        if self.yoyo && iteration % 2.0 == 1.0 {
            progress = 1.0 - progress;
        }
        self.from.lerp(&self.to, self.ease.apply(progress))
    }

    fn end_state(&self) -> VisualState {
        match self.repeat {
            Repeat::Count(n) if self.yoyo && n % 2 == 1 => self.from,
            _ => self.to,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fade(duration: f64) -> Tween {
        Tween::new(0, VisualState::hidden().with_y(30.0), VisualState::REST, duration, Ease::LINEAR)
    }

    #[test]
    fn clamps_outside_its_window() {
        let t = fade(1.0);
        assert_eq!(t.state_at(-1.0), t.from);
        assert_eq!(t.state_at(2.0), VisualState::REST);
    }

    #[test]
    fn linear_midpoint() {
        let s = fade(1.0).state_at(0.5);
        assert!((s.opacity - 0.5).abs() < 1e-9);
        assert!((s.y - 15.0).abs() < 1e-9);
    }

    #[test]
    fn zero_duration_jumps_to_end() {
        assert_eq!(fade(0.0).state_at(0.001), VisualState::REST);
    }

    #[test]
    fn yoyo_runs_backwards_on_odd_iterations() {
        let t = fade(1.0).repeat(Repeat::Count(1)).yoyo(true);
        assert_eq!(t.total_duration(), 2.0);
        let s = t.state_at(1.25);
        assert!((s.opacity - 0.75).abs() < 1e-9);
        // odd repeat count with yoyo ends where it started
        assert_eq!(t.state_at(5.0), t.from);
    }

    #[test]
    fn infinite_repeat_never_finishes() {
        let t = fade(1.0).repeat(Repeat::Infinite).yoyo(true);
        assert!(t.total_duration().is_infinite());
        let s = t.state_at(1000.5);
        assert!((s.opacity - 0.5).abs() < 1e-9);
    }

    #[test]
    fn css_output() {
        let s = VisualState::REST.with_y(-3.0).with_scale(1.08);
        assert_eq!(s.transform_css(), "translate(0.00px, -3.00px) scale(1.0800)");
        assert_eq!(s.shadow_css(), None);
        assert!(s.with_glow(0.4).shadow_css().unwrap().ends_with("0.400)"));
    }
}
