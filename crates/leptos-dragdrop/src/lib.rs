//! Leptos DragDrop Utilities
//!
//! Mouse- and touch-driven drag-and-drop for Leptos.
//! A mouse press only arms a drag; the drag is lifted once the pointer travels
//! past an activation distance, so a short press still reads as a click.
//! A touch press lifts after being held for a delay without wandering past a
//! small tolerance; moving further first lets the page scroll instead.
//!
//! The state machine ([`DragMachine`]) is plain data and carries no DOM
//! types. [`DndSignals`] wraps it in reactive signals and the `make_on_*` /
//! `bind_global_*` helpers wire it to DOM events. Document listeners are
//! removed again when the owning component is cleaned up.

use std::cell::RefCell;
use std::collections::HashMap;

use leptos::prelude::*;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;

/// Default mouse activation distance in pixels
pub const DEFAULT_ACTIVATION_DISTANCE_PX: i32 = 10;

/// Default touch hold before a drag lifts, in milliseconds
pub const DEFAULT_TOUCH_DELAY_MS: i32 = 250;

/// Default touch movement allowed during the hold, in pixels
pub const DEFAULT_TOUCH_TOLERANCE_PX: i32 = 5;

/// How long clicks are suppressed after a drop, in milliseconds
const CLICK_SUPPRESS_MS: i32 = 100;

/// Input that armed a pending drag
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Sensor {
    Mouse,
    /// `press` identifies this touch so an old hold timer cannot lift a newer press
    Touch { press: u32 },
}

/// Where the machine currently is
#[derive(Clone, Debug, PartialEq)]
pub enum DragPhase<I, T> {
    Idle,
    /// Pointer is down on a draggable but the drag has not lifted yet
    Pending { id: I, start_x: i32, start_y: i32, sensor: Sensor },
    /// Drag is lifted; `over` is the registered target under the pointer
    Dragging { id: I, over: Option<T> },
}

/// Activation thresholds per sensor
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Activation {
    pub distance: i32,
    pub touch_delay_ms: i32,
    pub touch_tolerance: i32,
}

impl Default for Activation {
    fn default() -> Self {
        Self {
            distance: DEFAULT_ACTIVATION_DISTANCE_PX,
            touch_delay_ms: DEFAULT_TOUCH_DELAY_MS,
            touch_tolerance: DEFAULT_TOUCH_TOLERANCE_PX,
        }
    }
}

/// Drag state machine, generic over the dragged id `I` and the target `T`
#[derive(Clone, Debug, PartialEq)]
pub struct DragMachine<I, T> {
    phase: DragPhase<I, T>,
    activation: Activation,
    touch_presses: u32,
}

impl<I, T> Default for DragMachine<I, T> {
    fn default() -> Self {
        Self {
            phase: DragPhase::Idle,
            activation: Activation::default(),
            touch_presses: 0,
        }
    }
}

fn beyond(dx: i32, dy: i32, limit: i32) -> bool {
    let (dx, dy, limit) = (i64::from(dx), i64::from(dy), i64::from(limit));
    dx * dx + dy * dy > limit * limit
}

impl<I: Clone + PartialEq, T: Clone + PartialEq> DragMachine<I, T> {
    /// Mouse distance as given, touch thresholds at their defaults
    pub fn new(activation_distance: i32) -> Self {
        Self::with_activation(Activation { distance: activation_distance, ..Activation::default() })
    }

    pub fn with_activation(activation: Activation) -> Self {
        Self {
            phase: DragPhase::Idle,
            activation: Activation {
                distance: activation.distance.max(0),
                touch_delay_ms: activation.touch_delay_ms.max(0),
                touch_tolerance: activation.touch_tolerance.max(0),
            },
            touch_presses: 0,
        }
    }

    pub fn activation(&self) -> Activation {
        self.activation
    }

    pub fn phase(&self) -> &DragPhase<I, T> {
        &self.phase
    }

    pub fn is_dragging(&self) -> bool {
        matches!(self.phase, DragPhase::Dragging { .. })
    }

    /// Id of the lifted item, `None` while idle or pending
    pub fn dragging_id(&self) -> Option<&I> {
        match &self.phase {
            DragPhase::Dragging { id, .. } => Some(id),
            _ => None,
        }
    }

    pub fn drop_target(&self) -> Option<&T> {
        match &self.phase {
            DragPhase::Dragging { over, .. } => over.as_ref(),
            _ => None,
        }
    }

    /// Arm a pending mouse drag. Ignored while a drag is already lifted.
    pub fn press(&mut self, id: I, x: i32, y: i32) {
        if self.is_dragging() {
            return;
        }
        self.phase = DragPhase::Pending { id, start_x: x, start_y: y, sensor: Sensor::Mouse };
    }

    /// Arm a pending touch drag. Returns the press token to hand to
    /// [`hold_elapsed`](Self::hold_elapsed) once the delay has passed.
    pub fn press_touch(&mut self, id: I, x: i32, y: i32) -> Option<u32> {
        if self.is_dragging() {
            return None;
        }
        self.touch_presses = self.touch_presses.wrapping_add(1);
        let press = self.touch_presses;
        self.phase = DragPhase::Pending { id, start_x: x, start_y: y, sensor: Sensor::Touch { press } };
        Some(press)
    }

    /// Whether moving to `(x, y)` would lift a pending mouse drag
    pub fn should_lift(&self, x: i32, y: i32) -> bool {
        match &self.phase {
            DragPhase::Pending { start_x, start_y, sensor: Sensor::Mouse, .. } => {
                beyond(x - start_x, y - start_y, self.activation.distance)
            }
            _ => false,
        }
    }

    /// Whether moving to `(x, y)` changes anything: lifts a mouse press, or
    /// cancels a touch press that wandered past the tolerance
    pub fn reacts_to_move(&self, x: i32, y: i32) -> bool {
        match &self.phase {
            DragPhase::Pending { start_x, start_y, sensor: Sensor::Touch { .. }, .. } => {
                beyond(x - start_x, y - start_y, self.activation.touch_tolerance)
            }
            _ => self.should_lift(x, y),
        }
    }

    /// Feed a pointer position. Returns true when this move lifted the drag.
    /// A touch press moved past the tolerance goes back to idle.
    pub fn pointer_move(&mut self, x: i32, y: i32) -> bool {
        match &self.phase {
            DragPhase::Pending { id, sensor: Sensor::Mouse, .. } if self.should_lift(x, y) => {
                self.phase = DragPhase::Dragging { id: id.clone(), over: None };
                true
            }
            DragPhase::Pending { sensor: Sensor::Touch { .. }, .. } if self.reacts_to_move(x, y) => {
                self.phase = DragPhase::Idle;
                false
            }
            _ => false,
        }
    }

    /// The touch hold for `press` has run its delay. Lifts the drag if that
    /// press is still pending; returns true when it did.
    pub fn hold_elapsed(&mut self, press: u32) -> bool {
        match &self.phase {
            DragPhase::Pending { id, sensor: Sensor::Touch { press: current }, .. } if *current == press => {
                self.phase = DragPhase::Dragging { id: id.clone(), over: None };
                true
            }
            _ => false,
        }
    }

    /// Pointer entered a registered target
    pub fn enter(&mut self, target: T) {
        if let DragPhase::Dragging { over, .. } = &mut self.phase {
            *over = Some(target);
        }
    }

    /// Pointer left `target`. A leave for a target that is no longer the
    /// current one (enter of the next target fired first) is ignored.
    pub fn leave(&mut self, target: &T) {
        if let DragPhase::Dragging { over, .. } = &mut self.phase {
            if over.as_ref() == Some(target) {
                *over = None;
            }
        }
    }

    /// Set the target under a touch point directly (touch has no enter/leave)
    pub fn hover(&mut self, target: Option<T>) {
        if let DragPhase::Dragging { over, .. } = &mut self.phase {
            *over = target;
        }
    }

    /// Pointer released. Always returns to idle; yields the drop only when a
    /// lifted drag ends over a target.
    pub fn release(&mut self) -> Option<(I, T)> {
        match std::mem::replace(&mut self.phase, DragPhase::Idle) {
            DragPhase::Dragging { id, over: Some(target) } => Some((id, target)),
            _ => None,
        }
    }
}

/// DnD state signals
pub struct DndSignals<I: 'static, T: 'static> {
    pub machine: RwSignal<DragMachine<I, T>>,
    /// Set for a short moment after a drop so the trailing click is ignored
    pub drag_just_ended: RwSignal<bool>,
}

impl<I, T> Clone for DndSignals<I, T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<I, T> Copy for DndSignals<I, T> {}

impl<I, T> DndSignals<I, T>
where
    I: Clone + PartialEq + Send + Sync + 'static,
    T: Clone + PartialEq + Send + Sync + 'static,
{
    pub fn dragging_id(&self) -> Option<I> {
        self.machine.with(|m| m.dragging_id().cloned())
    }

    pub fn drop_target(&self) -> Option<T> {
        self.machine.with(|m| m.drop_target().cloned())
    }

    pub fn is_dragging(&self) -> bool {
        self.machine.with(|m| m.is_dragging())
    }

    pub fn just_ended(&self) -> bool {
        self.drag_just_ended.get_untracked()
    }
}

pub fn create_dnd_signals<I, T>(activation: Activation) -> DndSignals<I, T>
where
    I: Clone + PartialEq + Send + Sync + 'static,
    T: Clone + PartialEq + Send + Sync + 'static,
{
    DndSignals {
        machine: RwSignal::new(DragMachine::with_activation(activation)),
        drag_just_ended: RwSignal::new(false),
    }
}

fn set_timeout(ms: i32, f: impl FnOnce() + 'static) {
    let Some(win) = web_sys::window() else { return };
    let cb = Closure::once(f);
    let _ = win.set_timeout_with_callback_and_timeout_and_arguments_0(cb.as_ref().unchecked_ref(), ms);
    cb.forget();
}

/// Flag the end of a lifted drag and clear the flag after a short delay
pub fn end_drag<I, T>(dnd: &DndSignals<I, T>)
where
    I: Clone + PartialEq + Send + Sync + 'static,
    T: Clone + PartialEq + Send + Sync + 'static,
{
    dnd.drag_just_ended.set(true);
    let clear = dnd.drag_just_ended;
    set_timeout(CLICK_SUPPRESS_MS, move || {
        clear.try_set(false);
    });
}

fn is_form_control(target: Option<web_sys::EventTarget>) -> bool {
    let Some(target) = target else { return false };
    target.dyn_ref::<web_sys::HtmlInputElement>().is_some()
        || target.dyn_ref::<web_sys::HtmlButtonElement>().is_some()
        || target.dyn_ref::<web_sys::HtmlSelectElement>().is_some()
        || target.dyn_ref::<web_sys::HtmlTextAreaElement>().is_some()
}

fn first_touch(ev: &web_sys::TouchEvent) -> Option<(i32, i32)> {
    let touch = ev.touches().get(0).or_else(|| ev.changed_touches().get(0))?;
    Some((touch.client_x(), touch.client_y()))
}

/// Create mousedown handler for draggable elements
pub fn make_on_mousedown<I, T>(dnd: DndSignals<I, T>, id: I) -> impl Fn(web_sys::MouseEvent) + Clone + 'static
where
    I: Clone + PartialEq + Send + Sync + 'static,
    T: Clone + PartialEq + Send + Sync + 'static,
{
    move |ev: web_sys::MouseEvent| {
        if ev.button() != 0 || is_form_control(ev.target()) {
            return;
        }
        let id = id.clone();
        dnd.machine.update(|m| m.press(id, ev.client_x(), ev.client_y()));
    }
}

/// Create touchstart handler for draggable elements. Starts the hold timer.
pub fn make_on_touchstart<I, T>(dnd: DndSignals<I, T>, id: I) -> impl Fn(web_sys::TouchEvent) + Clone + 'static
where
    I: Clone + PartialEq + Send + Sync + 'static,
    T: Clone + PartialEq + Send + Sync + 'static,
{
    move |ev: web_sys::TouchEvent| {
        if ev.touches().length() != 1 || is_form_control(ev.target()) {
            return;
        }
        let Some((x, y)) = first_touch(&ev) else { return };
        let id = id.clone();
        let Some(press) = dnd.machine.try_update(|m| m.press_touch(id, x, y)).flatten() else {
            return;
        };
        let delay = dnd.machine.with_untracked(|m| m.activation().touch_delay_ms);
        set_timeout(delay, move || {
            dnd.machine.try_update(|m| m.hold_elapsed(press));
        });
    }
}

/// Create mouseenter handler for a drop target
pub fn make_on_target_mouseenter<I, T>(dnd: DndSignals<I, T>, target: T) -> impl Fn(web_sys::MouseEvent) + Clone + 'static
where
    I: Clone + PartialEq + Send + Sync + 'static,
    T: Clone + PartialEq + Send + Sync + 'static,
{
    move |_ev: web_sys::MouseEvent| {
        if dnd.machine.with_untracked(|m| m.is_dragging()) {
            let target = target.clone();
            dnd.machine.update(|m| m.enter(target));
        }
    }
}

/// Create mouseleave handler for a drop target
pub fn make_on_target_mouseleave<I, T>(dnd: DndSignals<I, T>, target: T) -> impl Fn(web_sys::MouseEvent) + Clone + 'static
where
    I: Clone + PartialEq + Send + Sync + 'static,
    T: Clone + PartialEq + Send + Sync + 'static,
{
    move |_ev: web_sys::MouseEvent| {
        if dnd.machine.with_untracked(|m| m.drop_target() == Some(&target)) {
            dnd.machine.update(|m| m.leave(&target));
        }
    }
}

// ========================
// Document listeners
// ========================

type Listener = Closure<dyn FnMut(web_sys::Event)>;

/// Listeners added by one `bind_global_*` call, removed together
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Binding(u64);

/// Live document listeners grouped by binding
struct Registry<L> {
    next: u64,
    bindings: HashMap<Binding, Vec<(&'static str, L)>>,
}

impl<L> Registry<L> {
    fn new() -> Self {
        Self { next: 0, bindings: HashMap::new() }
    }

    fn open(&mut self) -> Binding {
        let binding = Binding(self.next);
        self.next = self.next.wrapping_add(1);
        binding
    }

    fn add(&mut self, binding: Binding, event: &'static str, listener: L) {
        self.bindings.entry(binding).or_default().push((event, listener));
    }

    /// Remove and hand back everything registered under `binding`
    fn take(&mut self, binding: Binding) -> Vec<(&'static str, L)> {
        self.bindings.remove(&binding).unwrap_or_default()
    }

    fn len(&self) -> usize {
        self.bindings.values().map(Vec::len).sum()
    }
}

thread_local! {
    static LISTENERS: RefCell<Registry<Listener>> = RefCell::new(Registry::new());
}

impl Binding {
    /// Detach every listener of this binding from the document
    pub fn unbind(self) {
        let listeners = LISTENERS.with(|r| r.borrow_mut().take(self));
        if listeners.is_empty() {
            return;
        }
        let Some(doc) = web_sys::window().and_then(|w| w.document()) else { return };
        for (event, listener) in &listeners {
            let _ = doc.remove_event_listener_with_callback(event, listener.as_ref().unchecked_ref());
        }
    }
}

/// Number of document listeners currently attached by this crate
pub fn live_listener_count() -> usize {
    LISTENERS.with(|r| r.borrow().len())
}

fn listen(binding: Binding, doc: &web_sys::Document, event: &'static str, passive: bool, listener: Listener) {
    let options = web_sys::AddEventListenerOptions::new();
    options.set_passive(passive);
    let _ = doc.add_event_listener_with_callback_and_add_event_listener_options(
        event,
        listener.as_ref().unchecked_ref(),
        &options,
    );
    LISTENERS.with(|r| r.borrow_mut().add(binding, event, listener));
}

/// Release the machine; runs `on_drop` only for a lifted drag over a target
fn finish<I, T>(dnd: &DndSignals<I, T>, on_drop: &impl Fn(I, T))
where
    I: Clone + PartialEq + Send + Sync + 'static,
    T: Clone + PartialEq + Send + Sync + 'static,
{
    // Signals are gone once the board unmounts
    let Some(was_dragging) = dnd.machine.try_with_untracked(|m| m.is_dragging()) else {
        return;
    };
    let dropped = dnd.machine.try_update(|m| m.release()).flatten();
    if was_dragging {
        end_drag(dnd);
    }
    if let Some((id, target)) = dropped {
        on_drop(id, target);
    }
}

/// Bind document mouse and touch listeners for moving and dropping.
///
/// `on_drop` only runs when a lifted drag is released over a target.
/// `target_at` maps a touch point to a target, since touch events do not
/// fire enter/leave on the elements under the finger. The listeners are
/// removed when the calling component's owner is cleaned up.
pub fn bind_global_listeners<I, T, F, R>(dnd: DndSignals<I, T>, on_drop: F, target_at: R) -> Binding
where
    I: Clone + PartialEq + Send + Sync + 'static,
    T: Clone + PartialEq + Send + Sync + 'static,
    F: Fn(I, T) + Clone + 'static,
    R: Fn(i32, i32) -> Option<T> + 'static,
{
    let binding = LISTENERS.with(|r| r.borrow_mut().open());
    let Some(doc) = web_sys::window().and_then(|w| w.document()) else {
        return binding;
    };

    let on_mousemove = Closure::<dyn FnMut(web_sys::Event)>::new(move |ev: web_sys::Event| {
        let Some(ev) = ev.dyn_ref::<web_sys::MouseEvent>() else { return };
        let (x, y) = (ev.client_x(), ev.client_y());
        if dnd.machine.try_with_untracked(|m| m.should_lift(x, y)).unwrap_or(false) {
            dnd.machine.update(|m| {
                m.pointer_move(x, y);
            });
        }
    });

    let mouse_drop = on_drop.clone();
    let on_mouseup = Closure::<dyn FnMut(web_sys::Event)>::new(move |_ev: web_sys::Event| {
        finish(&dnd, &mouse_drop);
    });

    let on_touchmove = Closure::<dyn FnMut(web_sys::Event)>::new(move |ev: web_sys::Event| {
        let Some(touch_ev) = ev.dyn_ref::<web_sys::TouchEvent>() else { return };
        let Some((x, y)) = first_touch(touch_ev) else { return };
        let Some(dragging) = dnd.machine.try_with_untracked(|m| m.is_dragging()) else {
            return;
        };
        if dragging {
            // Keep the page from scrolling under a lifted drag
            ev.prevent_default();
            let over = target_at(x, y);
            if dnd.machine.with_untracked(|m| m.drop_target() != over.as_ref()) {
                dnd.machine.update(|m| m.hover(over));
            }
        } else if dnd.machine.with_untracked(|m| m.reacts_to_move(x, y)) {
            dnd.machine.update(|m| {
                m.pointer_move(x, y);
            });
        }
    });

    let on_touchend = Closure::<dyn FnMut(web_sys::Event)>::new(move |_ev: web_sys::Event| {
        finish(&dnd, &on_drop);
    });

    // A cancelled touch still returns the machine to idle but never drops
    let on_touchcancel = Closure::<dyn FnMut(web_sys::Event)>::new(move |_ev: web_sys::Event| {
        finish(&dnd, &|_: I, _: T| {});
    });

    listen(binding, &doc, "mousemove", true, on_mousemove);
    listen(binding, &doc, "mouseup", true, on_mouseup);
    listen(binding, &doc, "touchmove", false, on_touchmove);
    listen(binding, &doc, "touchend", true, on_touchend);
    listen(binding, &doc, "touchcancel", true, on_touchcancel);

    on_cleanup(move || binding.unbind());
    binding
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Clone, Copy, Debug, PartialEq)]
    enum Column {
        Left,
        Right,
    }

    fn lifted() -> DragMachine<u32, Column> {
        let mut m = DragMachine::new(10);
        m.press(7, 100, 100);
        assert!(m.pointer_move(100, 111));
        m
    }

    #[test]
    fn test_click_without_movement_is_not_a_drag() {
        let mut m: DragMachine<u32, Column> = DragMachine::new(10);
        m.press(7, 100, 100);
        m.enter(Column::Left);
        assert!(!m.is_dragging());
        assert_eq!(m.release(), None);
        assert_eq!(m.phase(), &DragPhase::Idle);
    }

    #[test]
    fn test_movement_within_activation_distance_stays_pending() {
        let mut m: DragMachine<u32, Column> = DragMachine::new(10);
        m.press(7, 100, 100);
        assert!(!m.pointer_move(106, 108)); // exactly 10px away
        assert!(matches!(m.phase(), DragPhase::Pending { id: 7, .. }));
        assert!(m.pointer_move(107, 108));
        assert_eq!(m.dragging_id(), Some(&7));
    }

    #[test]
    fn test_release_over_target_yields_drop() {
        let mut m = lifted();
        m.enter(Column::Right);
        assert_eq!(m.drop_target(), Some(&Column::Right));
        assert_eq!(m.release(), Some((7, Column::Right)));
        assert_eq!(m.phase(), &DragPhase::Idle);
    }

    #[test]
    fn test_release_outside_targets_yields_nothing() {
        let mut m = lifted();
        m.enter(Column::Left);
        m.leave(&Column::Left);
        assert_eq!(m.release(), None);
    }

    #[test]
    fn test_stale_leave_does_not_clear_new_target() {
        let mut m = lifted();
        m.enter(Column::Left);
        m.enter(Column::Right);
        m.leave(&Column::Left);
        assert_eq!(m.drop_target(), Some(&Column::Right));
    }

    #[test]
    fn test_press_while_dragging_is_ignored() {
        let mut m = lifted();
        m.press(9, 0, 0);
        assert_eq!(m.dragging_id(), Some(&7));
        assert_eq!(m.press_touch(9, 0, 0), None);
    }

    #[test]
    fn test_touch_hold_lifts_after_delay() {
        let mut m: DragMachine<u32, Column> = DragMachine::new(10);
        let press = m.press_touch(3, 50, 50).unwrap();

        // Jitter within the tolerance neither lifts nor cancels
        assert!(!m.pointer_move(53, 54)); // exactly 5px away
        assert!(matches!(m.phase(), DragPhase::Pending { id: 3, sensor: Sensor::Touch { .. }, .. }));

        assert!(m.hold_elapsed(press));
        assert_eq!(m.dragging_id(), Some(&3));
        m.hover(Some(Column::Right));
        assert_eq!(m.release(), Some((3, Column::Right)));
    }

    #[test]
    fn test_touch_moved_past_tolerance_is_a_scroll() {
        let mut m: DragMachine<u32, Column> = DragMachine::new(10);
        let press = m.press_touch(3, 50, 50).unwrap();
        assert!(m.reacts_to_move(50, 56));
        assert!(!m.pointer_move(50, 56));
        assert_eq!(m.phase(), &DragPhase::Idle);
        assert!(!m.hold_elapsed(press));
        assert!(!m.is_dragging());
    }

    #[test]
    fn test_touch_never_lifts_by_distance_alone() {
        let mut m: DragMachine<u32, Column> = DragMachine::new(10);
        m.press_touch(3, 0, 0);
        assert!(!m.should_lift(0, 4));
        assert!(!m.is_dragging());
    }

    #[test]
    fn test_stale_hold_timer_does_not_lift_newer_press() {
        let mut m: DragMachine<u32, Column> = DragMachine::new(10);
        let first = m.press_touch(3, 0, 0).unwrap();
        assert_eq!(m.release(), None);
        let second = m.press_touch(4, 0, 0).unwrap();

        assert!(!m.hold_elapsed(first));
        assert!(matches!(m.phase(), DragPhase::Pending { id: 4, .. }));
        assert!(m.hold_elapsed(second));
        assert_eq!(m.dragging_id(), Some(&4));
    }

    #[test]
    fn test_unbind_releases_only_its_own_listeners() {
        let mut registry = Registry::new();
        let board = registry.open();
        let other = registry.open();
        assert_ne!(board, other);

        registry.add(board, "mousemove", 1);
        registry.add(board, "mouseup", 2);
        registry.add(other, "touchend", 3);
        assert_eq!(registry.len(), 3);

        assert_eq!(registry.take(board), vec![("mousemove", 1), ("mouseup", 2)]);
        assert_eq!(registry.len(), 1);

        // A second cleanup of the same binding has nothing left to remove
        assert!(registry.take(board).is_empty());
        assert_eq!(registry.take(other), vec![("touchend", 3)]);
        assert_eq!(registry.len(), 0);
    }

    #[test]
    fn test_unbind_of_unknown_binding_is_a_no_op() {
        Binding(u64::MAX).unbind();
        assert_eq!(live_listener_count(), 0);
    }

    #[test]
    fn test_activation_thresholds_are_clamped() {
        let m: DragMachine<u32, Column> =
            DragMachine::with_activation(Activation { distance: -3, touch_delay_ms: -1, touch_tolerance: -2 });
        assert_eq!(m.activation(), Activation { distance: 0, touch_delay_ms: 0, touch_tolerance: 0 });
    }
}
