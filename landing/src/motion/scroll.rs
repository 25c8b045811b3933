//! Scroll-position triggers.
//!
//! A trigger watches one element's bounding box against the viewport and
//! reports which toggle action to run when the element crosses its start
//! and end lines. Positions use the familiar `"<element edge> <viewport
//! line>"` form, e.g. `"top 85%"` or `"bottom 15%"`.

use std::fmt;
use std::str::FromStr;

use crate::error::SiteError;

/// A point along an axis: keyword, percentage or absolute pixels.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Offset {
    /// Fraction of the element/viewport height (`top` = 0, `bottom` = 1).
    Fraction(f64),
    Pixels(f64),
}

impl Offset {
    fn resolve(&self, extent: f64) -> f64 {
        match *self {
            Offset::Fraction(f) => f * extent,
            Offset::Pixels(px) => px,
        }
    }

    fn parse(token: &str) -> Option<Self> {
        match token {
            "top" => Some(Offset::Fraction(0.0)),
            "center" => Some(Offset::Fraction(0.5)),
            "bottom" => Some(Offset::Fraction(1.0)),
            _ => {
                if let Some(pct) = token.strip_suffix('%') {
                    pct.parse::<f64>().ok().map(|p| Offset::Fraction(p / 100.0))
                } else if let Some(px) = token.strip_suffix("px") {
                    px.parse::<f64>().ok().map(Offset::Pixels)
                } else {
                    token.parse::<f64>().ok().map(Offset::Pixels)
                }
            }
        }
    }
}

/// Where on the element and where in the viewport the two must meet.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TriggerPoint {
    pub element: Offset,
    pub viewport: Offset,
}

impl TriggerPoint {
    /// `true` once the element's edge has scrolled up to (or past) the
    /// viewport line.
    pub fn reached(&self, bounds: Bounds, viewport_height: f64) -> bool {
        let edge = bounds.top + self.element.resolve(bounds.height);
        let line = self.viewport.resolve(viewport_height);
        edge <= line
    }
}

impl FromStr for TriggerPoint {
    type Err = SiteError;

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        let mut tokens = raw.split_whitespace();
        let element = tokens.next().and_then(Offset::parse);
        // A lone edge keyword means "meets the same line of the viewport".
        let viewport = match tokens.next() {
            Some(token) => Offset::parse(token),
            None => element,
        };
        match (element, viewport, tokens.next()) {
            (Some(element), Some(viewport), None) => Ok(Self { element, viewport }),
            _ => Err(SiteError::TriggerPosition(raw.to_owned())),
        }
    }
}

/// Element bounds relative to the viewport top, as from `getBoundingClientRect`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Bounds {
    pub top: f64,
    pub height: f64,
}

impl Bounds {
    pub fn new(top: f64, height: f64) -> Self {
        Self { top, height }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToggleAction {
    Play,
    Pause,
    Resume,
    Reverse,
    Restart,
    Reset,
    Complete,
    None,
}

impl FromStr for ToggleAction {
    type Err = SiteError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(match s {
            "play" => ToggleAction::Play,
            "pause" => ToggleAction::Pause,
            "resume" => ToggleAction::Resume,
            "reverse" => ToggleAction::Reverse,
            "restart" => ToggleAction::Restart,
            "reset" => ToggleAction::Reset,
            "complete" => ToggleAction::Complete,
            "none" => ToggleAction::None,
            other => return Err(SiteError::ToggleActions(other.to_owned(), "unknown action")),
        })
    }
}

impl fmt::Display for ToggleAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ToggleAction::Play => "play",
            ToggleAction::Pause => "pause",
            ToggleAction::Resume => "resume",
            ToggleAction::Reverse => "reverse",
            ToggleAction::Restart => "restart",
            ToggleAction::Reset => "reset",
            ToggleAction::Complete => "complete",
            ToggleAction::None => "none",
        };
        f.write_str(name)
    }
}

/// Actions for `onEnter onLeave onEnterBack onLeaveBack`, in that order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ToggleActions {
    pub enter: ToggleAction,
    pub leave: ToggleAction,
    pub enter_back: ToggleAction,
    pub leave_back: ToggleAction,
}

impl ToggleActions {
    /// `play none none none`
    pub const PLAY_ONCE: ToggleActions = ToggleActions {
        enter: ToggleAction::Play,
        leave: ToggleAction::None,
        enter_back: ToggleAction::None,
        leave_back: ToggleAction::None,
    };

    /// `play none none reverse`
    pub const PLAY_REVERSE: ToggleActions = ToggleActions {
        enter: ToggleAction::Play,
        leave: ToggleAction::None,
        enter_back: ToggleAction::None,
        leave_back: ToggleAction::Reverse,
    };
}

impl Default for ToggleActions {
    fn default() -> Self {
        Self::PLAY_ONCE
    }
}

impl FromStr for ToggleActions {
    type Err = SiteError;

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        let parts = raw
            .split_whitespace()
            .map(str::parse::<ToggleAction>)
            .collect::<Result<Vec<_>, _>>()?;
        match parts.as_slice() {
            [enter, leave, enter_back, leave_back] => Ok(Self {
                enter: *enter,
                leave: *leave,
                enter_back: *enter_back,
                leave_back: *leave_back,
            }),
            _ => Err(SiteError::ToggleActions(raw.to_owned(), "expected four actions")),
        }
    }
}

/// Which side of the trigger window the element is on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Zone {
    Before,
    Active,
    After,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Crossing {
    Enter,
    Leave,
    EnterBack,
    LeaveBack,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ScrollTrigger {
    start: TriggerPoint,
    end: TriggerPoint,
    actions: ToggleActions,
    zone: Zone,
}

impl ScrollTrigger {
    pub fn new(start: TriggerPoint, end: TriggerPoint, actions: ToggleActions) -> Self {
        Self {
            start,
            end,
            actions,
            zone: Zone::Before,
        }
    }

    /// Build from the string form, e.g. `("top 85%", "bottom 15%", "play none none reverse")`.
    pub fn parse(start: &str, end: &str, actions: &str) -> Result<Self, SiteError> {
        Ok(Self::new(start.parse()?, end.parse()?, actions.parse()?))
    }

    pub fn zone(&self) -> Zone {
        self.zone
    }

    pub fn actions(&self) -> ToggleActions {
        self.actions
    }

    fn zone_for(&self, bounds: Bounds, viewport_height: f64) -> Zone {
        if !self.start.reached(bounds, viewport_height) {
            Zone::Before
        } else if self.end.reached(bounds, viewport_height) {
            Zone::After
        } else {
            Zone::Active
        }
    }

    /// Feed the current element bounds. Returns the crossings that happened
    /// since the last update, in scroll order. Jumping over the whole window
    /// reports both crossings.
    pub fn update(&mut self, bounds: Bounds, viewport_height: f64) -> Vec<Crossing> {
        let next = self.zone_for(bounds, viewport_height);
        let crossings = match (self.zone, next) {
            (Zone::Before, Zone::Active) => vec![Crossing::Enter],
            (Zone::Before, Zone::After) => vec![Crossing::Enter, Crossing::Leave],
            (Zone::Active, Zone::After) => vec![Crossing::Leave],
            (Zone::After, Zone::Active) => vec![Crossing::EnterBack],
            (Zone::After, Zone::Before) => vec![Crossing::EnterBack, Crossing::LeaveBack],
            (Zone::Active, Zone::Before) => vec![Crossing::LeaveBack],
            _ => Vec::new(),
        };
        self.zone = next;
        crossings
    }

    /// Like [`update`](Self::update) but mapped through the toggle actions,
    /// with `none` actions dropped.
    pub fn actions_for(&mut self, bounds: Bounds, viewport_height: f64) -> Vec<ToggleAction> {
        let actions = self.actions;
        self.update(bounds, viewport_height)
            .into_iter()
            .map(|crossing| match crossing {
                Crossing::Enter => actions.enter,
                Crossing::Leave => actions.leave,
                Crossing::EnterBack => actions.enter_back,
                Crossing::LeaveBack => actions.leave_back,
            })
            .filter(|action| *action != ToggleAction::None)
            .collect()
    }
}

/// A trigger as written in section code. Parsed when the view mounts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TriggerSpec {
    pub start: &'static str,
    pub end: &'static str,
    pub actions: &'static str,
}

impl TriggerSpec {
    /// Ends when the element's bottom leaves the top of the viewport.
    pub const DEFAULT_END: &'static str = "bottom top";

    pub const fn new(start: &'static str, end: &'static str, actions: &'static str) -> Self {
        Self { start, end, actions }
    }

    /// Start line only, played once.
    pub const fn once(start: &'static str) -> Self {
        Self::new(start, Self::DEFAULT_END, "play none none none")
    }

    pub fn build(&self) -> Result<ScrollTrigger, SiteError> {
        ScrollTrigger::parse(self.start, self.end, self.actions)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    const VH: f64 = 1000.0;

    #[test]
    fn parses_positions() {
        let p: TriggerPoint = "top 85%".parse().unwrap();
        assert_eq!(p.element, Offset::Fraction(0.0));
        assert_eq!(p.viewport, Offset::Fraction(0.85));

        let p: TriggerPoint = "top center".parse().unwrap();
        assert_eq!(p.viewport, Offset::Fraction(0.5));

        let p: TriggerPoint = "bottom 100px".parse().unwrap();
        assert_eq!(p.viewport, Offset::Pixels(100.0));

        let p: TriggerPoint = "center".parse().unwrap();
        assert_eq!(p.viewport, Offset::Fraction(0.5));

        assert!("".parse::<TriggerPoint>().is_err());
        assert!("top 85% extra".parse::<TriggerPoint>().is_err());
        assert!("middle 10%".parse::<TriggerPoint>().is_err());
    }

    #[test]
    fn parses_toggle_actions() {
        let a: ToggleActions = "play none none reverse".parse().unwrap();
        assert_eq!(a, ToggleActions::PLAY_REVERSE);
        assert!("play none".parse::<ToggleActions>().is_err());
        assert!("play none none rewind".parse::<ToggleActions>().is_err());
        assert_eq!(ToggleActions::default(), ToggleActions::PLAY_ONCE);
    }

    #[test]
    fn start_line_is_measured_against_the_viewport() {
        let p: TriggerPoint = "top 85%".parse().unwrap();
        assert!(!p.reached(Bounds::new(900.0, 200.0), VH));
        assert!(p.reached(Bounds::new(850.0, 200.0), VH));
        assert!(p.reached(Bounds::new(-50.0, 200.0), VH));
    }

    #[test]
    fn play_then_reverse_on_the_way_back() {
        let mut t = ScrollTrigger::parse("top 85%", "bottom 15%", "play none none reverse").unwrap();

        // below the fold
        assert_eq!(t.actions_for(Bounds::new(1200.0, 300.0), VH), vec![]);
        assert_eq!(t.zone(), Zone::Before);

        // scrolled into view
        assert_eq!(t.actions_for(Bounds::new(800.0, 300.0), VH), vec![ToggleAction::Play]);
        // still inside: nothing new
        assert_eq!(t.actions_for(Bounds::new(600.0, 300.0), VH), vec![]);

        // bottom passes 15% line: leave action is none
        assert_eq!(t.actions_for(Bounds::new(-200.0, 300.0), VH), vec![]);
        assert_eq!(t.zone(), Zone::After);

        // back up into the window: enterBack is none
        assert_eq!(t.actions_for(Bounds::new(400.0, 300.0), VH), vec![]);
        // and below the start line again
        assert_eq!(t.actions_for(Bounds::new(950.0, 300.0), VH), vec![ToggleAction::Reverse]);
        assert_eq!(t.zone(), Zone::Before);
    }

    #[test]
    fn jumping_over_the_window_reports_both_crossings() {
        let start: TriggerPoint = "top 80%".parse().unwrap();
        let end: TriggerPoint = "bottom 20%".parse().unwrap();
        let mut t = ScrollTrigger::new(start, end, ToggleActions::PLAY_REVERSE);
        assert_eq!(
            t.update(Bounds::new(-2000.0, 300.0), VH),
            vec![Crossing::Enter, Crossing::Leave]
        );
        assert_eq!(
            t.update(Bounds::new(2000.0, 300.0), VH),
            vec![Crossing::EnterBack, Crossing::LeaveBack]
        );
    }

    #[test]
    fn already_visible_on_first_check_enters() {
        let mut t = ScrollTrigger::parse("top 80%", "bottom 20%", "play none none none").unwrap();
        assert_eq!(t.actions_for(Bounds::new(100.0, 500.0), VH), vec![ToggleAction::Play]);
    }

    #[test]
    fn trigger_spec_defaults() {
        let trigger = TriggerSpec::once("top 80%").build().unwrap();
        assert_eq!(trigger.actions(), ToggleActions::PLAY_ONCE);
        assert!(TriggerSpec::new("top 80%", "bottom 20%", "play none").build().is_err());
    }
}
