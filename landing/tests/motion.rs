use kiro_landing::motion::presets::{CardEntrance, HoverLift};
use kiro_landing::motion::{
    Bounds, Phase, Scope, ScopeRegistry, ScrollTrigger, ToggleAction, TriggerSpec, TypeEvent,
    TypeLine, Typewriter, VisualState,
};
use pretty_assertions::assert_eq;
use proptest::prelude::*;
use std::cell::Cell;
use std::rc::Rc;

const VH: f64 = 1000.0;

fn card_at(top: f64) -> Bounds {
    Bounds::new(top, 200.0)
}

fn typed_prefixes(tw: &mut Typewriter, frames: &[f64]) -> Vec<Vec<String>> {
    let mut events = tw.start();
    for dt in frames.iter().cycle() {
        if tw.is_done() {
            break;
        }
        events.extend(tw.advance(*dt));
    }
    let mut per_line = vec![Vec::new(); tw.lines().len()];
    for event in events {
        if let TypeEvent::Prefix { line, text } = event {
            per_line[line].push(text);
        }
    }
    per_line
}

#[test]
fn blog_card_trigger_plays_then_reverses_on_leave_back() {
    let mut trigger = ScrollTrigger::parse("top 85%", "bottom 15%", "play none none reverse").unwrap();

    assert!(trigger.actions_for(card_at(1200.0), VH).is_empty());
    assert_eq!(trigger.actions_for(card_at(800.0), VH), vec![ToggleAction::Play]);
    assert!(trigger.actions_for(card_at(700.0), VH).is_empty());
    // leave and enter-back are `none`
    assert!(trigger.actions_for(card_at(-100.0), VH).is_empty());
    assert!(trigger.actions_for(card_at(800.0), VH).is_empty());
    assert_eq!(trigger.actions_for(card_at(1200.0), VH), vec![ToggleAction::Reverse]);
    assert!(trigger.actions_for(card_at(1200.0), VH).is_empty());
}

#[test]
fn play_once_trigger_fires_a_single_time() {
    let mut trigger = TriggerSpec::once("top 80%").build().unwrap();
    let mut fired = Vec::new();
    for top in [1000.0, 700.0, -500.0, 700.0, 1000.0, 700.0] {
        fired.extend(trigger.actions_for(card_at(top), VH));
    }
    assert_eq!(fired, vec![ToggleAction::Play]);
}

#[test]
fn entrance_driven_by_trigger_settles_and_returns() {
    let mut trigger = ScrollTrigger::parse("top center", "bottom 15%", "play none none reverse").unwrap();
    let mut timeline = CardEntrance::DIFFERENTIATION.timeline(2);

    for action in trigger.actions_for(card_at(400.0), VH) {
        timeline.apply(action);
    }
    assert_eq!(timeline.phase(), Phase::Entering);
    timeline.tick(5.0);
    assert_eq!(timeline.phase(), Phase::Settled);
    assert_eq!(timeline.state_of(0), VisualState::REST);

    for action in trigger.actions_for(card_at(900.0), VH) {
        timeline.apply(action);
    }
    assert_eq!(timeline.phase(), Phase::Reversing);
    timeline.tick(5.0);
    assert_eq!(timeline.phase(), Phase::Idle);
    assert_eq!(timeline.state_of(0), CardEntrance::DIFFERENTIATION.from);
}

#[test]
fn hover_lift_reverses_from_midway() {
    let mut timeline = HoverLift::FEATURE_CARD.timeline();
    timeline.play();
    timeline.tick(0.1);
    let midway = timeline.state_of(0).y;
    assert!(midway < 0.0 && midway > HoverLift::FEATURE_CARD.lift);
    timeline.reverse();
    timeline.tick(1.0);
    assert_eq!(timeline.state_of(0), VisualState::REST);
}

#[test]
fn typewriter_reports_completion_once() {
    let mut tw = Typewriter::new(vec![TypeLine::new("안녕", 0.05).pause_after(0.1), TypeLine::new("hi", 0.05)]);
    let mut events = tw.start();
    for _ in 0..2_000 {
        events.extend(tw.advance(1.0 / 60.0));
    }
    let completed = events.iter().filter(|e| **e == TypeEvent::Completed).count();
    assert_eq!(completed, 1);
    assert_eq!(tw.visible(0), "안녕");
    assert_eq!(tw.visible(1), "hi");
    assert!(!tw.cursor_visible());
}

#[test]
fn scope_registry_balances_setup_and_teardown() {
    let mut registry = ScopeRegistry::new();
    let disposed = Rc::new(Cell::new(0));
    let ids: Vec<_> = (0..3).map(|_| registry.reserve()).collect();

    for (n, id) in ids.iter().enumerate() {
        let mut scope = Scope::new();
        for _ in 0..=n {
            let disposed = Rc::clone(&disposed);
            scope.defer(move || disposed.set(disposed.get() + 1));
        }
        assert!(registry.attach(*id, scope).is_none());
    }
    assert_eq!(registry.live(), 3);

    for id in ids {
        if let Some(mut scope) = registry.detach(id) {
            let ran = scope.revert();
            registry.record_revert(ran);
        }
    }
    let stats = registry.stats();
    assert_eq!(registry.live(), 0);
    assert_eq!(stats.attached, stats.reverted);
    assert_eq!(stats.disposers_run, 6);
    assert_eq!(disposed.get(), 6);
}

proptest! {
    #[test]
    fn typewriter_emits_every_prefix_in_order(
        text in "[a-z가-힣 ]{0,24}",
        per_char in 0.01f64..0.2,
        frames in prop::collection::vec(0.001f64..0.5, 1..8),
    ) {
        let mut tw = Typewriter::new(vec![TypeLine::new(text.clone(), per_char)]);
        let lines = typed_prefixes(&mut tw, &frames);

        let expected: Vec<String> = (0..=text.chars().count())
            .map(|n| text.chars().take(n).collect())
            .collect();
        prop_assert_eq!(&lines[0], &expected);
        prop_assert!(tw.is_done());
    }
}
