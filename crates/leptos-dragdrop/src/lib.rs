//! Leptos DragDrop Utilities
//!
//! Simple drag-and-drop for Leptos using mouse events.
//! Uses movement threshold to distinguish click from drag.
//!
//! This crate only tracks pointer mechanics: which key was pressed, where,
//! and which drop target the pointer is over. What is being dragged is the
//! caller's state; it learns about it through `DndHandlers`.

use leptos::prelude::*;
use wasm_bindgen::JsCast;

/// Default movement threshold in pixels to start dragging
pub const DRAG_THRESHOLD_PX: i32 = 5;

/// Where the pointer is in the press/drag cycle
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum PointerPhase {
    #[default]
    Idle,
    /// Button down on a draggable, not moved far enough yet
    Pressed,
    Dragging,
}

/// Whether the pointer moved far enough from the press point to start a drag
pub fn exceeds_threshold(start: (i32, i32), now: (i32, i32), threshold: i32) -> bool {
    let dx = (now.0 - start.0).abs();
    let dy = (now.1 - start.1).abs();
    dx > threshold || dy > threshold
}

/// DnD state signals
///
/// `K` identifies a draggable, `T` a drop target.
pub struct DndSignals<K: Send + Sync + 'static, T: Send + Sync + 'static> {
    pub phase_read: ReadSignal<PointerPhase>,
    pub phase_write: WriteSignal<PointerPhase>,
    /// Pressed draggable (mousedown but not yet dragging)
    pub pending_read: ReadSignal<Option<K>>,
    pub pending_write: WriteSignal<Option<K>>,
    pub drop_target_read: ReadSignal<Option<T>>,
    pub drop_target_write: WriteSignal<Option<T>>,
    /// True for a moment after a drag ends, so the trailing click can be ignored
    pub drag_just_ended_read: ReadSignal<bool>,
    pub drag_just_ended_write: WriteSignal<bool>,
    /// Start position for movement detection
    pub start_read: ReadSignal<(i32, i32)>,
    pub start_write: WriteSignal<(i32, i32)>,
    pub threshold: i32,
}

impl<K: Send + Sync + 'static, T: Send + Sync + 'static> Clone for DndSignals<K, T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<K: Send + Sync + 'static, T: Send + Sync + 'static> Copy for DndSignals<K, T> {}

impl<K, T> DndSignals<K, T>
where
    K: Clone + Send + Sync + 'static,
    T: Clone + PartialEq + Send + Sync + 'static,
{
    pub fn is_dragging(&self) -> bool {
        self.phase_read.get() == PointerPhase::Dragging
    }

    /// Is `target` the one under the pointer right now
    pub fn is_over(&self, target: &T) -> bool {
        self.drop_target_read.with(|t| t.as_ref() == Some(target))
    }
}

/// Callbacks fired on drag lifecycle transitions
pub struct DndHandlers<K, T, S, D, C>
where
    S: Fn(K) + 'static,
    D: Fn(T) + 'static,
    C: Fn() + 'static,
{
    /// Pointer moved past the threshold while pressing `K`
    pub on_start: S,
    /// Released over a target
    pub on_drop: D,
    /// Released outside any target
    pub on_cancel: C,
    _marker: std::marker::PhantomData<fn(K, T)>,
}

impl<K, T, S, D, C> DndHandlers<K, T, S, D, C>
where
    S: Fn(K) + 'static,
    D: Fn(T) + 'static,
    C: Fn() + 'static,
{
    pub fn new(on_start: S, on_drop: D, on_cancel: C) -> Self {
        Self { on_start, on_drop, on_cancel, _marker: std::marker::PhantomData }
    }
}

pub fn create_dnd_signals_with_threshold<K, T>(threshold: i32) -> DndSignals<K, T>
where
    K: Send + Sync + 'static,
    T: Send + Sync + 'static,
{
    let (phase_read, phase_write) = signal(PointerPhase::Idle);
    let (pending_read, pending_write) = signal(None::<K>);
    let (drop_target_read, drop_target_write) = signal(None::<T>);
    let (drag_just_ended_read, drag_just_ended_write) = signal(false);
    let (start_read, start_write) = signal((0i32, 0i32));
    DndSignals {
        phase_read,
        phase_write,
        pending_read,
        pending_write,
        drop_target_read,
        drop_target_write,
        drag_just_ended_read,
        drag_just_ended_write,
        start_read,
        start_write,
        threshold,
    }
}

/// End drag operation
pub fn end_drag<K, T>(dnd: &DndSignals<K, T>)
where
    K: Send + Sync + 'static,
    T: Send + Sync + 'static,
{
    let was_dragging = dnd.phase_read.get_untracked() == PointerPhase::Dragging;
    dnd.phase_write.set(PointerPhase::Idle);
    dnd.drop_target_write.set(None);
    dnd.pending_write.set(None);
    if !was_dragging {
        return;
    }
    dnd.drag_just_ended_write.set(true);

    if let Some(win) = web_sys::window() {
        let clear = dnd.drag_just_ended_write;
        let cb = wasm_bindgen::closure::Closure::<dyn FnMut()>::new(move || {
            clear.set(false);
        });
        let _ = win.set_timeout_with_callback_and_timeout_and_arguments_0(cb.as_ref().unchecked_ref(), 100);
        cb.forget();
    }
}

/// Create mousedown handler for draggable items
/// Records pending drag with start position
pub fn make_on_mousedown<K, T>(dnd: DndSignals<K, T>, key: K) -> impl Fn(web_sys::MouseEvent) + Clone + 'static
where
    K: Clone + Send + Sync + 'static,
    T: Send + Sync + 'static,
{
    move |ev: web_sys::MouseEvent| {
        if ev.button() != 0 {
            return;
        }
        // Ignore if target is input or button
        if let Some(target) = ev.target() {
            if target.dyn_ref::<web_sys::HtmlInputElement>().is_some() { return; }
            if target.dyn_ref::<web_sys::HtmlButtonElement>().is_some() { return; }
        }
        // Keep the browser from starting a text selection
        ev.prevent_default();
        dnd.pending_write.set(Some(key.clone()));
        dnd.phase_write.set(PointerPhase::Pressed);
        dnd.start_write.set((ev.client_x(), ev.client_y()));
    }
}

/// Create mouseenter handler for drop targets
pub fn make_on_target_mouseenter<K, T>(dnd: DndSignals<K, T>, target: T) -> impl Fn(web_sys::MouseEvent) + Clone + 'static
where
    K: Send + Sync + 'static,
    T: Clone + Send + Sync + 'static,
{
    move |_ev: web_sys::MouseEvent| {
        if dnd.phase_read.get_untracked() == PointerPhase::Dragging {
            dnd.drop_target_write.set(Some(target.clone()));
        }
    }
}

/// Create mouseleave handler
pub fn make_on_mouseleave<K, T>(dnd: DndSignals<K, T>) -> impl Fn(web_sys::MouseEvent) + Copy + 'static
where
    K: Send + Sync + 'static,
    T: Send + Sync + 'static,
{
    move |_ev: web_sys::MouseEvent| {
        if dnd.phase_read.get_untracked() == PointerPhase::Dragging {
            dnd.drop_target_write.set(None);
        }
    }
}

/// Bind global mousemove: starts the drag once the pointer passes the threshold
fn bind_global_mousemove<K, T, S>(dnd: DndSignals<K, T>, on_start: S)
where
    K: Clone + Send + Sync + 'static,
    T: Send + Sync + 'static,
    S: Fn(K) + 'static,
{
    use wasm_bindgen::closure::Closure;

    let on_mousemove = Closure::<dyn FnMut(web_sys::MouseEvent)>::new(move |ev: web_sys::MouseEvent| {
        if dnd.phase_read.get_untracked() != PointerPhase::Pressed {
            return;
        }
        let start = dnd.start_read.get_untracked();
        if !exceeds_threshold(start, (ev.client_x(), ev.client_y()), dnd.threshold) {
            return;
        }
        if let Some(key) = dnd.pending_read.get_untracked() {
            dnd.pending_write.set(None);
            dnd.phase_write.set(PointerPhase::Dragging);
            log::trace!("drag started after moving past {}px", dnd.threshold);
            on_start(key);
        }
    });

    if let Some(win) = web_sys::window() {
        if let Some(doc) = win.document() {
            let _ = doc.add_event_listener_with_callback("mousemove", on_mousemove.as_ref().unchecked_ref());
        }
    }
    on_mousemove.forget();
}

/// Bind global mouseup handler for drop detection, plus the mousemove
/// handler that starts drags.
pub fn bind_global_handlers<K, T, S, D, C>(dnd: DndSignals<K, T>, handlers: DndHandlers<K, T, S, D, C>)
where
    K: Clone + Send + Sync + 'static,
    T: Clone + Send + Sync + 'static,
    S: Fn(K) + 'static,
    D: Fn(T) + 'static,
    C: Fn() + 'static,
{
    use wasm_bindgen::closure::Closure;

    let DndHandlers { on_start, on_drop, on_cancel, .. } = handlers;

    let on_mouseup = Closure::<dyn FnMut(web_sys::MouseEvent)>::new(move |_ev: web_sys::MouseEvent| {
        let phase = dnd.phase_read.get_untracked();
        let drop_target = dnd.drop_target_read.get_untracked();
        end_drag(&dnd);

        // Not dragging - click event will fire naturally on the element
        if phase != PointerPhase::Dragging {
            return;
        }
        match drop_target {
            Some(target) => on_drop(target),
            None => {
                log::debug!("drag released outside any drop target");
                on_cancel();
            }
        }
    });

    if let Some(win) = web_sys::window() {
        if let Some(doc) = win.document() {
            let _ = doc.add_event_listener_with_callback("mouseup", on_mouseup.as_ref().unchecked_ref());
        }
    }
    on_mouseup.forget();

    bind_global_mousemove(dnd, on_start);
}
