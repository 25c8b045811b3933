//! Typewriter text effect.
//!
//! Lines are typed one after another; each reveals `floor(progress × chars)`
//! characters of its text and is followed by a fixed pause. Once the last
//! line is done a blinking cursor is shown, removed after its blink cycles,
//! and completion is reported.

use super::ease::Ease;
use super::tween::{Repeat, Tween, VisualState};

/// Cursor glyph appended after the last line.
pub const CURSOR: &str = "|";

#[derive(Debug, Clone, PartialEq)]
pub struct TypeLine {
    text: String,
    chars: usize,
    per_char: f64,
    pause_after: f64,
}

impl TypeLine {
    pub fn new(text: impl Into<String>, per_char: f64) -> Self {
        let text = text.into();
        Self {
            chars: text.chars().count(),
            text,
            per_char: per_char.max(0.0),
            pause_after: 0.0,
        }
    }

    pub fn pause_after(mut self, seconds: f64) -> Self {
        self.pause_after = seconds.max(0.0);
        self
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn typing_duration(&self) -> f64 {
        self.chars as f64 * self.per_char
    }

    /// First `count` characters, cut on a char boundary.
    fn prefix(&self, count: usize) -> &str {
        match self.text.char_indices().nth(count) {
            Some((idx, _)) => &self.text[..idx],
            None => &self.text,
        }
    }
}

/// Blink settings for the trailing cursor.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CursorBlink {
    pub half_cycle: f64,
    pub repeats: u32,
}

impl Default for CursorBlink {
    fn default() -> Self {
        Self {
            half_cycle: 0.5,
            repeats: 5,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum TypeEvent {
    /// Visible text of line `line` changed.
    Prefix { line: usize, text: String },
    CursorShown,
    CursorRemoved,
    Completed,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Stage {
    Pending,
    Typing,
    Blinking,
    Done,
}

#[derive(Debug, Clone)]
pub struct Typewriter {
    lines: Vec<TypeLine>,
    starts: Vec<f64>,
    shown: Vec<usize>,
    elapsed: f64,
    typing_end: f64,
    cursor: Tween,
    stage: Stage,
}

impl Typewriter {
    pub fn new(lines: Vec<TypeLine>) -> Self {
        Self::with_cursor(lines, CursorBlink::default())
    }

    pub fn with_cursor(lines: Vec<TypeLine>, blink: CursorBlink) -> Self {
        let mut starts = Vec::with_capacity(lines.len());
        let mut at = 0.0;
        for line in &lines {
            starts.push(at);
            at += line.typing_duration() + line.pause_after;
        }
        // The last pause is not waited for before the cursor appears.
        let typing_end = lines
            .last()
            .zip(starts.last())
            .map_or(0.0, |(line, start)| start + line.typing_duration());

        let cursor = Tween::new(
            0,
            VisualState::REST,
            VisualState::hidden(),
            blink.half_cycle,
            Ease::POWER2_IN_OUT,
        )
        .repeat(Repeat::Count(blink.repeats))
        .yoyo(true);

        Self {
            shown: vec![0; lines.len()],
            lines,
            starts,
            elapsed: 0.0,
            typing_end,
            cursor,
            stage: Stage::Pending,
        }
    }

    pub fn lines(&self) -> &[TypeLine] {
        &self.lines
    }

    /// Total time from start until completion is reported.
    pub fn duration(&self) -> f64 {
        self.typing_end + self.cursor.total_duration()
    }

    pub fn is_done(&self) -> bool {
        self.stage == Stage::Done
    }

    pub fn cursor_visible(&self) -> bool {
        self.stage == Stage::Blinking
    }

    /// Opacity of the cursor glyph right now (0 when not shown).
    pub fn cursor_opacity(&self) -> f64 {
        if self.stage != Stage::Blinking {
            return 0.0;
        }
        self.cursor.state_at(self.elapsed - self.typing_end).opacity
    }

    pub fn visible(&self, line: usize) -> &str {
        match (self.lines.get(line), self.shown.get(line)) {
            (Some(l), Some(count)) => l.prefix(*count),
            _ => "",
        }
    }

    /// Clear every line. Emits the empty prefix for each one.
    pub fn start(&mut self) -> Vec<TypeEvent> {
        self.elapsed = 0.0;
        self.shown.iter_mut().for_each(|c| *c = 0);
        self.stage = Stage::Typing;
        let mut events: Vec<TypeEvent> = (0..self.lines.len())
            .map(|line| TypeEvent::Prefix {
                line,
                text: String::new(),
            })
            .collect();
        // Nothing to type: go straight to the cursor.
        events.extend(self.advance(0.0));
        events
    }

    /// Advance by `dt` seconds. Every prefix between the previous and the new
    /// position is emitted, in order, so slow frames never skip characters.
    pub fn advance(&mut self, dt: f64) -> Vec<TypeEvent> {
        let mut events = Vec::new();
        if matches!(self.stage, Stage::Pending | Stage::Done) {
            return events;
        }
        self.elapsed += dt.max(0.0);

        if self.stage == Stage::Typing {
            for line in 0..self.lines.len() {
                let target = self.target_count(line);
                while self.shown[line] < target {
                    self.shown[line] += 1;
                    events.push(TypeEvent::Prefix {
                        line,
                        text: self.visible(line).to_owned(),
                    });
                }
            }
            if self.elapsed >= self.typing_end {
                self.stage = Stage::Blinking;
                events.push(TypeEvent::CursorShown);
            }
        }

        if self.stage == Stage::Blinking && self.elapsed >= self.duration() {
            self.stage = Stage::Done;
            events.push(TypeEvent::CursorRemoved);
            events.push(TypeEvent::Completed);
        }
        events
    }

    fn target_count(&self, line: usize) -> usize {
        let spec = &self.lines[line];
        let local = self.elapsed - self.starts[line];
        if local <= 0.0 {
            return 0;
        }
        let duration = spec.typing_duration();
        if duration <= 0.0 || local >= duration {
            return spec.chars;
        }
        let progress = local / duration;
        ((progress * spec.chars as f64).floor() as usize).min(spec.chars)
    }
}
