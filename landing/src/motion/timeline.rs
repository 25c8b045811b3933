//! Timelines: positioned tweens over a shared playhead, playable both ways.

use std::ops::Range;

use super::ease::Ease;
use super::scroll::ToggleAction;
use super::tween::{Tween, VisualState};

/// Where a new tween is placed on the timeline.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Position {
    /// Absolute time in seconds.
    At(f64),
    /// Right after everything added so far.
    AfterPrevious,
    /// Same start as the previously added tween.
    WithPrevious,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Forward,
    Backward,
}

/// `Idle → Entering → Settled ⇄ Reversing → Idle`, plus `Paused` mid-way.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Idle,
    Entering,
    Settled,
    Reversing,
    Paused,
}

#[derive(Debug, Clone, PartialEq)]
struct Entry {
    start: f64,
    tween: Tween,
}

#[derive(Debug, Clone)]
pub struct Timeline {
    entries: Vec<Entry>,
    targets: usize,
    playhead: f64,
    direction: Direction,
    playing: bool,
}

impl Timeline {
    /// A paused timeline over `targets` elements, playhead at zero.
    pub fn new(targets: usize) -> Self {
        Self {
            entries: Vec::new(),
            targets,
            playhead: 0.0,
            direction: Direction::Forward,
            playing: false,
        }
    }

    pub fn targets(&self) -> usize {
        self.targets
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn add(&mut self, tween: Tween, position: Position) -> &mut Self {
        debug_assert!(tween.target < self.targets, "tween target out of range");
        let start = match position {
            Position::At(t) => t.max(0.0),
            Position::AfterPrevious => self.end_of_entries(),
            Position::WithPrevious => self.entries.last().map_or(0.0, |e| e.start),
        };
        self.entries.push(Entry { start, tween });
        self
    }

    /// Same tween shape for each target in `targets`, each starting
    /// `each` seconds after the one before.
    #[allow(clippy::too_many_arguments)]
    pub fn add_staggered(
        &mut self,
        targets: Range<usize>,
        from: VisualState,
        to: VisualState,
        duration: f64,
        ease: Ease,
        each: f64,
        position: Position,
    ) -> &mut Self {
        let base = match position {
            Position::At(t) => t.max(0.0),
            Position::AfterPrevious => self.end_of_entries(),
            Position::WithPrevious => self.entries.last().map_or(0.0, |e| e.start),
        };
        for (i, target) in targets.enumerate() {
            let start = base + stagger_delay(each, i);
            self.add(Tween::new(target, from, to, duration, ease), Position::At(start));
        }
        self
    }

    fn end_of_entries(&self) -> f64 {
        self.entries
            .iter()
            .map(|e| e.start + e.tween.total_duration())
            .fold(0.0, f64::max)
    }

    pub fn duration(&self) -> f64 {
        self.end_of_entries()
    }

    pub fn playhead(&self) -> f64 {
        self.playhead
    }

    pub fn direction(&self) -> Direction {
        self.direction
    }

    pub fn is_playing(&self) -> bool {
        self.playing
    }

    /// Fraction of a finite timeline already played; infinite ones report 0.
    pub fn progress(&self) -> f64 {
        let total = self.duration();
        if !total.is_finite() {
            return 0.0;
        }
        if total <= 0.0 {
            return if self.playhead > 0.0 { 1.0 } else { 0.0 };
        }
        (self.playhead / total).clamp(0.0, 1.0)
    }

    pub fn phase(&self) -> Phase {
        match (self.playing, self.direction) {
            (true, Direction::Forward) => Phase::Entering,
            (true, Direction::Backward) => Phase::Reversing,
            (false, _) if self.playhead <= 0.0 => Phase::Idle,
            (false, _) if self.playhead >= self.duration() => Phase::Settled,
            (false, _) => Phase::Paused,
        }
    }

    pub fn play(&mut self) {
        self.direction = Direction::Forward;
        self.playing = self.playhead < self.duration();
    }

    pub fn reverse(&mut self) {
        self.direction = Direction::Backward;
        self.playing = self.playhead > 0.0;
    }

    pub fn pause(&mut self) {
        self.playing = false;
    }

    pub fn resume(&mut self) {
        self.playing = match self.direction {
            Direction::Forward => self.playhead < self.duration(),
            Direction::Backward => self.playhead > 0.0,
        };
    }

    pub fn restart(&mut self) {
        self.playhead = 0.0;
        self.play();
    }

    pub fn reset(&mut self) {
        self.playhead = 0.0;
        self.direction = Direction::Forward;
        self.playing = false;
    }

    /// Jump to the end. Infinite timelines stay where they are.
    pub fn complete(&mut self) {
        let total = self.duration();
        if total.is_finite() {
            self.playhead = total;
        }
        self.playing = false;
    }

    pub fn apply(&mut self, action: ToggleAction) {
        match action {
            ToggleAction::Play => self.play(),
            ToggleAction::Pause => self.pause(),
            ToggleAction::Resume => self.resume(),
            ToggleAction::Reverse => self.reverse(),
            ToggleAction::Restart => self.restart(),
            ToggleAction::Reset => self.reset(),
            ToggleAction::Complete => self.complete(),
            ToggleAction::None => {}
        }
    }

    /// Advance the playhead by `dt` seconds. Returns `true` if it moved.
    pub fn tick(&mut self, dt: f64) -> bool {
        if !self.playing || dt <= 0.0 {
            return false;
        }
        let before = self.playhead;
        match self.direction {
            Direction::Forward => {
                let total = self.duration();
                self.playhead = (self.playhead + dt).min(total);
                if self.playhead >= total {
                    self.playing = false;
                }
            }
            Direction::Backward => {
                self.playhead = (self.playhead - dt).max(0.0);
                if self.playhead <= 0.0 {
                    self.playing = false;
                }
            }
        }
        self.playhead != before
    }

    /// Current visual state of every target, indexed by target.
    ///
    /// Targets whose first tween has not started yet render that tween's
    /// `from` state, so elements sit in their hidden pose until triggered.
    pub fn states(&self) -> Vec<VisualState> {
        (0..self.targets).map(|target| self.state_of(target)).collect()
    }

    pub fn state_of(&self, target: usize) -> VisualState {
        let mut first: Option<&Entry> = None;
        let mut current: Option<&Entry> = None;
        for entry in self.entries.iter().filter(|e| e.tween.target == target) {
            if first.is_none_or(|f| entry.start < f.start) {
                first = Some(entry);
            }
            if entry.start <= self.playhead && current.is_none_or(|c| entry.start >= c.start) {
                current = Some(entry);
            }
        }
        match (current, first) {
            (Some(entry), _) => entry.tween.state_at(self.playhead - entry.start),
            (None, Some(entry)) => entry.tween.from,
            (None, None) => VisualState::REST,
        }
    }
}

/// Start offset of the `index`-th element in a staggered group.
pub fn stagger_delay(each: f64, index: usize) -> f64 {
    each * index as f64
}
