use std::cell::{Cell, RefCell};
use std::rc::Rc;
use std::time::Duration;

use kiro_landing::media::{picture_sources, ImageLoad, Loading, SourceFormat};
use kiro_landing::state::{
    is_activate_key, is_dismiss_key, FeatureFocus, PressState, SheetPhase, CLEAR_SELECTION_MS,
    CLOSE_ANIMATION_MS, PRESS_FEEDBACK_MS,
};
use kiro_landing::sections::close_sheet_with;
use leptos::prelude::*;
use pretty_assertions::assert_eq;

/// Timers that only fire when the test moves the clock.
#[derive(Clone, Default)]
struct FakeClock {
    now: Rc<Cell<u64>>,
    pending: Rc<RefCell<Vec<(u64, Box<dyn FnOnce()>)>>>,
}

impl FakeClock {
    fn scheduler(&self) -> impl Fn(Duration, Box<dyn FnOnce()>) + Clone + 'static {
        let clock = self.clone();
        move |delay, task| {
            let due = clock.now.get() + delay.as_millis() as u64;
            clock.pending.borrow_mut().push((due, task));
        }
    }

    fn pending(&self) -> usize {
        self.pending.borrow().len()
    }

    /// Fires every timer due at or before `ms`, earliest first.
    fn advance_to(&self, ms: u64) {
        loop {
            let next = {
                let mut pending = self.pending.borrow_mut();
                let earliest = pending
                    .iter()
                    .enumerate()
                    .filter(|(_, (due, _))| *due <= ms)
                    .min_by_key(|(_, (due, _))| *due)
                    .map(|(index, _)| index);
                earliest.map(|index| pending.remove(index))
            };
            let Some((due, task)) = next else { break };
            self.now.set(due);
            task();
        }
        self.now.set(ms);
    }
}

#[test]
fn opening_a_feature_focuses_it() {
    let mut focus = FeatureFocus::default();
    focus.open("visual-hooks");
    assert_eq!(focus.selected(), Some("visual-hooks"));
    assert_eq!(focus.phase(), SheetPhase::Open);
    assert!(focus.locks_scroll());
}

#[test]
fn close_sheet_hides_then_clears_after_both_timers() {
    let owner = Owner::new();
    owner.with(|| {
        let clock = FakeClock::default();
        let focus = RwSignal::new(FeatureFocus::default());
        focus.update(|f| f.open("spec-management"));

        close_sheet_with(focus, clock.scheduler());
        assert_eq!(focus.get_untracked().phase(), SheetPhase::Closing);
        assert_eq!(clock.pending(), 1);

        clock.advance_to(CLOSE_ANIMATION_MS - 1);
        assert_eq!(focus.get_untracked().phase(), SheetPhase::Closing);

        clock.advance_to(CLOSE_ANIMATION_MS);
        assert_eq!(focus.get_untracked().phase(), SheetPhase::Closed);
        assert!(!focus.get_untracked().locks_scroll());
        assert_eq!(focus.get_untracked().selected(), Some("spec-management"));

        clock.advance_to(499);
        assert_eq!(focus.get_untracked().selected(), Some("spec-management"));

        clock.advance_to(500);
        assert_eq!(focus.get_untracked().selected(), None);
        assert_eq!(clock.pending(), 0);
        assert_eq!(CLOSE_ANIMATION_MS + CLEAR_SELECTION_MS, 500);
    });
}

#[test]
fn close_sheet_schedules_once_while_closing() {
    let owner = Owner::new();
    owner.with(|| {
        let clock = FakeClock::default();
        let focus = RwSignal::new(FeatureFocus::default());

        close_sheet_with(focus, clock.scheduler());
        assert_eq!(clock.pending(), 0);

        focus.update(|f| f.open("visual-hooks"));
        close_sheet_with(focus, clock.scheduler());
        close_sheet_with(focus, clock.scheduler());
        assert_eq!(clock.pending(), 1);

        clock.advance_to(500);
        assert_eq!(focus.get_untracked().selected(), None);
    });
}

#[test]
fn second_close_request_while_closing_is_ignored() {
    let mut focus = FeatureFocus::default();
    focus.open("natural-language");
    assert!(focus.request_close());
    assert!(focus.is_closing());
    assert!(!focus.request_close());
    assert_eq!(focus.selected(), Some("natural-language"));
}

#[test]
fn reopening_before_selection_clears_keeps_new_feature() {
    let mut focus = FeatureFocus::default();
    focus.open("spec-management");
    focus.request_close();
    focus.finish_close();
    focus.open("visual-hooks");
    focus.clear_selection();
    assert_eq!(focus.selected(), Some("visual-hooks"));
    assert!(focus.is_open());
}

#[test]
fn press_feedback_tracks_one_id() {
    let mut press = PressState::default();
    press.press("hero-start");
    assert!(press.is_pressed("hero-start"));
    assert!(!press.is_pressed("hero-pricing"));
    press.release();
    assert_eq!(press.pressed(), None);
    assert_eq!(PRESS_FEEDBACK_MS, 150);
}

#[test]
fn keys() {
    assert!(is_dismiss_key("Escape"));
    assert!(!is_dismiss_key("Enter"));
    assert!(is_activate_key("Enter"));
    assert!(is_activate_key(" "));
    assert!(!is_activate_key("Tab"));
}

#[test]
fn failing_image_ends_loaded_on_fallback() {
    let mut load = ImageLoad::new(Loading::Lazy, false);
    assert!(!load.is_in_view());
    load.enter_view();
    assert!(load.show_placeholder());
    load.on_error();
    assert!(load.is_loaded());
    assert!(load.has_error());
    assert!(!load.show_placeholder());
    assert_eq!(load.current_src("/broken.png", Some("/assets/kiro.svg")), "/assets/kiro.svg");
}

#[test]
fn failing_image_without_fallback_keeps_primary() {
    let mut load = ImageLoad::new(Loading::Eager, false);
    assert!(load.is_in_view());
    load.on_error();
    assert_eq!(load.current_src("/broken.png", None), "/broken.png");
}

#[test]
fn priority_images_skip_the_observer() {
    assert!(ImageLoad::new(Loading::Lazy, true).starts_visible());
    assert!(!ImageLoad::new(Loading::Lazy, false).starts_visible());
}

#[test]
fn avif_is_offered_before_webp() {
    let sources = picture_sources(Some("/a.avif"), Some("/a.webp"));
    let formats: Vec<_> = sources.iter().map(|(format, _)| *format).collect();
    assert_eq!(formats, vec![SourceFormat::Avif, SourceFormat::Webp]);
}

#[test]
fn failed_image_stops_offering_modern_sources() {
    let mut load = ImageLoad::new(Loading::Eager, false);
    assert_eq!(load.sources(Some("/a.avif"), Some("/a.webp")).len(), 2);
    load.on_error();
    assert!(load.sources(Some("/a.avif"), Some("/a.webp")).is_empty());
    assert_eq!(load.current_src("/a.png", Some("/assets/kiro.svg")), "/assets/kiro.svg");
}
