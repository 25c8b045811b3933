//! Browser glue for the motion engine.
//!
//! Everything here touches `web_sys` and only runs inside effects and event
//! handlers, so nothing is executed during server rendering. Each binding
//! registers its teardown with the [`Scope`] it was given.

use std::cell::RefCell;
use std::rc::{Rc, Weak};

use leptos::prelude::{on_cleanup, untrack, Effect};
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{
    Event, EventTarget, HtmlElement, IntersectionObserver, IntersectionObserverEntry,
    IntersectionObserverInit,
};

use crate::motion::{
    Bounds, MotionDefaults, Scope, ScopeId, ScopeRegistry, ScopeStats, Ticker, Timeline,
    ToggleAction, TriggerSpec, VisualState,
};

thread_local! {
    static SCOPES: RefCell<ScopeRegistry> = RefCell::new(ScopeRegistry::new());
}

pub fn reserve_scope() -> ScopeId {
    SCOPES.with_borrow_mut(ScopeRegistry::reserve)
}

/// Stores `scope` under `id`. A scope already stored there is reverted.
pub fn install_scope(id: ScopeId, scope: Scope) {
    let previous = SCOPES.with_borrow_mut(|registry| registry.attach(id, scope));
    if let Some(mut previous) = previous {
        let ran = previous.revert();
        SCOPES.with_borrow_mut(|registry| registry.record_revert(ran));
    }
}

/// Reverts and forgets the scope stored under `id`, if any.
///
/// The scope is taken out of the registry before its disposers run, so a
/// disposer may itself touch the registry.
pub fn revert_scope(id: ScopeId) {
    let scope = SCOPES.with_borrow_mut(|registry| registry.detach(id));
    if let Some(mut scope) = scope {
        let ran = scope.revert();
        SCOPES.with_borrow_mut(|registry| registry.record_revert(ran));
        tracing::trace!(?id, disposers = ran, "motion scope reverted");
    }
}

pub fn scope_stats() -> ScopeStats {
    SCOPES.with_borrow(ScopeRegistry::stats)
}

pub fn live_scopes() -> usize {
    SCOPES.with_borrow(ScopeRegistry::live)
}

/// Runs `setup` against whatever `resolve` returns once the view is
/// mounted, inside a fresh [`Scope`].
///
/// `resolve` is tracked: when it reads a `NodeRef` or signal that changes,
/// the previous scope is reverted and `setup` runs again. If `resolve`
/// yields `None` nothing is set up. The last scope is reverted when the
/// owning component unmounts.
pub fn use_motion<T, R, S>(resolve: R, setup: S)
where
    T: 'static,
    R: Fn() -> Option<T> + 'static,
    S: Fn(&T, &mut Scope) + 'static,
{
    let id = reserve_scope();

    Effect::new(move |_| {
        revert_scope(id);
        let Some(target) = resolve() else {
            tracing::trace!(?id, "motion target not mounted");
            return;
        };
        let mut scope = Scope::new();
        untrack(|| setup(&target, &mut scope));
        install_scope(id, scope);
    });

    on_cleanup(move || revert_scope(id));
}

/// Adds an event listener and defers its removal to `scope`.
pub fn listen<F>(scope: &mut Scope, target: &EventTarget, event: &'static str, handler: F)
where
    F: FnMut(Event) + 'static,
{
    let closure = Closure::<dyn FnMut(Event)>::new(handler);
    if target
        .add_event_listener_with_callback(event, closure.as_ref().unchecked_ref())
        .is_err()
    {
        tracing::debug!(event, "failed to add listener");
        return;
    }
    let target = target.clone();
    scope.defer(move || {
        let _ = target.remove_event_listener_with_callback(event, closure.as_ref().unchecked_ref());
    });
}

pub fn viewport_height() -> f64 {
    web_sys::window()
        .and_then(|w| w.inner_height().ok())
        .and_then(|h| h.as_f64())
        .unwrap_or(0.0)
}

pub fn bounds_of(element: &HtmlElement) -> Bounds {
    let rect = element.get_bounding_client_rect();
    Bounds::new(rect.top(), rect.height())
}

/// Element children that are `HtmlElement`s, in document order.
pub fn children_of(element: &HtmlElement) -> Vec<HtmlElement> {
    let children = element.children();
    (0..children.length())
        .filter_map(|i| children.item(i))
        .filter_map(|child| child.dyn_into::<HtmlElement>().ok())
        .collect()
}

/// Locks or releases page scrolling behind an overlay.
pub fn set_body_scroll_locked(locked: bool) {
    let Some(body) = web_sys::window()
        .and_then(|w| w.document())
        .and_then(|d| d.body())
    else {
        return;
    };
    let value = if locked { "hidden" } else { "unset" };
    let _ = body.style().set_property("overflow", value);
}

/// Repaints a timeline's targets every animation frame while `step` says so.
#[derive(Clone)]
pub struct FrameLoop {
    inner: Rc<RefCell<FrameInner>>,
}

struct FrameInner {
    ticker: Ticker,
    handle: Option<i32>,
    step: Box<dyn FnMut(f64) -> bool>,
    callback: Option<Closure<dyn FnMut(f64)>>,
}

impl FrameLoop {
    /// `step` receives the smoothed frame delta in seconds and returns
    /// whether another frame is wanted.
    pub fn new(ticker: Ticker, step: impl FnMut(f64) -> bool + 'static) -> Self {
        let inner = Rc::new(RefCell::new(FrameInner {
            ticker,
            handle: None,
            step: Box::new(step),
            callback: None,
        }));
        let weak: Weak<RefCell<FrameInner>> = Rc::downgrade(&inner);
        let callback = Closure::<dyn FnMut(f64)>::new(move |now: f64| {
            if let Some(inner) = weak.upgrade() {
                FrameInner::on_frame(&inner, now);
            }
        });
        inner.borrow_mut().callback = Some(callback);
        Self { inner }
    }

    pub fn start(&self) {
        let mut inner = self.inner.borrow_mut();
        if inner.handle.is_none() {
            inner.request();
        }
    }

    /// Cancels the pending frame. Safe to call repeatedly.
    pub fn stop(&self) {
        let mut inner = self.inner.borrow_mut();
        if let Some(handle) = inner.handle.take() {
            if let Some(window) = web_sys::window() {
                let _ = window.cancel_animation_frame(handle);
            }
        }
        inner.ticker.reset();
    }

    pub fn is_running(&self) -> bool {
        self.inner.borrow().handle.is_some()
    }
}

impl FrameInner {
    fn request(&mut self) {
        let (Some(window), Some(callback)) = (web_sys::window(), self.callback.as_ref()) else {
            return;
        };
        match window.request_animation_frame(callback.as_ref().unchecked_ref()) {
            Ok(handle) => self.handle = Some(handle),
            Err(_) => tracing::debug!("requestAnimationFrame failed"),
        }
    }

    fn on_frame(inner: &RefCell<FrameInner>, now: f64) {
        let mut inner = inner.borrow_mut();
        inner.handle = None;
        let dt = inner.ticker.delta(now);
        if (inner.step)(dt) {
            inner.request();
        } else {
            inner.ticker.reset();
        }
    }
}

/// One timeline driving inline styles on its target elements.
#[derive(Clone)]
pub struct Animator {
    timeline: Rc<RefCell<Timeline>>,
    targets: Rc<Vec<HtmlElement>>,
    frames: FrameLoop,
}

impl Animator {
    /// Paints the timeline's initial pose and ties the animator's lifetime
    /// to `scope`: on revert the frame loop stops and inline styles go.
    pub fn new(
        scope: &mut Scope,
        timeline: Timeline,
        targets: Vec<HtmlElement>,
        defaults: &MotionDefaults,
    ) -> Self {
        let timeline = Rc::new(RefCell::new(timeline));
        let targets = Rc::new(targets);
        let frames = FrameLoop::new(Ticker::new(defaults.lag_threshold, defaults.adjusted_lag), {
            let timeline = Rc::clone(&timeline);
            let targets = Rc::clone(&targets);
            move |dt| {
                let mut tl = timeline.borrow_mut();
                tl.tick(dt);
                paint(&targets, &tl);
                tl.is_playing()
            }
        });
        paint(&targets, &timeline.borrow());

        let animator = Self {
            timeline,
            targets,
            frames,
        };
        let teardown = animator.clone();
        scope.defer(move || teardown.dispose());
        animator
    }

    pub fn apply(&self, action: ToggleAction) {
        let playing = {
            let mut tl = self.timeline.borrow_mut();
            tl.apply(action);
            paint(&self.targets, &tl);
            tl.is_playing()
        };
        if playing {
            self.frames.start();
        }
    }

    pub fn play(&self) {
        self.apply(ToggleAction::Play);
    }

    pub fn reverse(&self) {
        self.apply(ToggleAction::Reverse);
    }

    fn dispose(&self) {
        self.frames.stop();
        for element in self.targets.iter() {
            let style = element.style();
            for property in ["transform", "opacity", "box-shadow"] {
                let _ = style.remove_property(property);
            }
        }
    }
}

fn paint(targets: &[HtmlElement], timeline: &Timeline) {
    for (index, element) in targets.iter().enumerate() {
        write_state(element, &timeline.state_of(index));
    }
}

fn write_state(element: &HtmlElement, state: &VisualState) {
    let style = element.style();
    let _ = style.set_property("transform", &state.transform_css());
    let _ = style.set_property("opacity", &state.opacity_css());
    match state.shadow_css() {
        Some(shadow) => {
            let _ = style.set_property("box-shadow", &shadow);
        }
        None => {
            let _ = style.remove_property("box-shadow");
        }
    }
}

/// Runs the animator's toggle actions as `trigger_element` scrolls through
/// the trigger window. Checks once immediately, then on scroll and resize.
pub fn bind_scroll_trigger(
    scope: &mut Scope,
    trigger_element: &HtmlElement,
    spec: TriggerSpec,
    animator: Animator,
) {
    let trigger = match spec.build() {
        Ok(trigger) => Rc::new(RefCell::new(trigger)),
        Err(err) => {
            tracing::warn!(%err, "scroll trigger skipped");
            return;
        }
    };
    let Some(window) = web_sys::window() else {
        return;
    };

    let element = trigger_element.clone();
    let check = move || {
        let actions = trigger
            .borrow_mut()
            .actions_for(bounds_of(&element), viewport_height());
        for action in actions {
            animator.apply(action);
        }
    };
    check();

    let on_scroll = check.clone();
    listen(scope, &window, "scroll", move |_| on_scroll());
    listen(scope, &window, "resize", move |_| check());
}

/// Convenience for the common case: animate `targets` with `timeline` when
/// `trigger_element` enters its window.
pub fn scroll_reveal(
    scope: &mut Scope,
    trigger_element: &HtmlElement,
    targets: Vec<HtmlElement>,
    timeline: Timeline,
    spec: TriggerSpec,
    defaults: &MotionDefaults,
) -> Animator {
    let animator = Animator::new(scope, timeline, targets, defaults);
    bind_scroll_trigger(scope, trigger_element, spec, animator.clone());
    animator
}

/// Pointer-enter plays `animator`, pointer-leave reverses it.
pub fn bind_hover(scope: &mut Scope, element: &HtmlElement, animator: Animator) {
    let enter = animator.clone();
    listen(scope, element, "mouseenter", move |_| enter.play());
    listen(scope, element, "mouseleave", move |_| animator.reverse());
}

/// Calls `on_visible` the first time `element` intersects the viewport
/// (grown by `root_margin`) by at least `threshold`, then disconnects.
pub fn observe_once<F>(
    scope: &mut Scope,
    element: &HtmlElement,
    root_margin: &str,
    threshold: f64,
    on_visible: F,
) where
    F: FnOnce() + 'static,
{
    let mut on_visible = Some(on_visible);
    let callback = Closure::<dyn FnMut(js_sys::Array, IntersectionObserver)>::new(
        move |entries: js_sys::Array, observer: IntersectionObserver| {
            let hit = entries
                .iter()
                .filter_map(|entry| entry.dyn_into::<IntersectionObserverEntry>().ok())
                .any(|entry| entry.is_intersecting());
            if hit {
                observer.disconnect();
                if let Some(on_visible) = on_visible.take() {
                    on_visible();
                }
            }
        },
    );

    let options = IntersectionObserverInit::new();
    options.set_root_margin(root_margin);
    options.set_threshold(&JsValue::from_f64(threshold));
    let observer =
        match IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &options) {
            Ok(observer) => observer,
            Err(_) => {
                tracing::debug!("IntersectionObserver unavailable");
                return;
            }
        };
    observer.observe(element);
    scope.defer(move || {
        observer.disconnect();
        drop(callback);
    });
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;

    #[test]
    fn installed_scopes_revert_once() {
        let ran = Rc::new(Cell::new(0));
        let before = scope_stats();

        let id = reserve_scope();
        let mut scope = Scope::new();
        for _ in 0..3 {
            let ran = Rc::clone(&ran);
            scope.defer(move || ran.set(ran.get() + 1));
        }
        install_scope(id, scope);
        assert_eq!(live_scopes(), 1);

        revert_scope(id);
        revert_scope(id);
        assert_eq!(ran.get(), 3);
        assert_eq!(live_scopes(), 0);

        let after = scope_stats();
        assert_eq!(after.attached - before.attached, 1);
        assert_eq!(after.reverted - before.reverted, 1);
        assert_eq!(after.disposers_run - before.disposers_run, 3);
    }

    #[test]
    fn reinstall_reverts_previous_scope() {
        let ran = Rc::new(Cell::new(0));
        let id = reserve_scope();
        for _ in 0..2 {
            let mut scope = Scope::new();
            let ran = Rc::clone(&ran);
            scope.defer(move || ran.set(ran.get() + 1));
            install_scope(id, scope);
        }
        assert_eq!(ran.get(), 1);
        revert_scope(id);
        assert_eq!(ran.get(), 2);
    }
}
