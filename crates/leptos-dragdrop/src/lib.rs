//! Leptos DragDrop Utilities
//!
//! Drag-to-reorder for flat Leptos lists using mouse events.
//! Uses movement threshold to distinguish click from drag.

use leptos::prelude::*;
use wasm_bindgen::JsCast;

/// DnD state signals
#[derive(Clone, Copy)]
pub struct DndSignals {
    /// Index of the row being dragged
    pub dragging_read: ReadSignal<Option<usize>>,
    pub dragging_write: WriteSignal<Option<usize>>,
    /// Insertion position among the rows not being dragged
    pub drop_at_read: ReadSignal<Option<usize>>,
    pub drop_at_write: WriteSignal<Option<usize>>,
    /// Pending row index (mousedown but not yet dragging)
    pub pending_read: ReadSignal<Option<usize>>,
    pub pending_write: WriteSignal<Option<usize>>,
    /// Start position for movement detection
    pub start_x_read: ReadSignal<i32>,
    pub start_x_write: WriteSignal<i32>,
    pub start_y_read: ReadSignal<i32>,
    pub start_y_write: WriteSignal<i32>,
}

/// Movement threshold in pixels to start dragging
const DRAG_THRESHOLD_PX: i32 = 5;

pub fn create_dnd_signals() -> DndSignals {
    let (dragging_read, dragging_write) = signal(None::<usize>);
    let (drop_at_read, drop_at_write) = signal(None::<usize>);
    let (pending_read, pending_write) = signal(None::<usize>);
    let (start_x_read, start_x_write) = signal(0i32);
    let (start_y_read, start_y_write) = signal(0i32);
    DndSignals {
        dragging_read,
        dragging_write,
        drop_at_read,
        drop_at_write,
        pending_read,
        pending_write,
        start_x_read,
        start_x_write,
        start_y_read,
        start_y_write,
    }
}

impl DndSignals {
    /// Whether the row at `index` shows the drop marker above it.
    ///
    /// `drop_at` counts rows with the dragged one removed, so rows after the
    /// dragged row are shifted back by one before comparing.
    pub fn marks_before(&self, index: usize) -> bool {
        match (self.dragging_read.get(), self.drop_at_read.get()) {
            (Some(dragged), Some(drop_at)) if dragged != index => {
                let position = if index > dragged { index - 1 } else { index };
                position == drop_at
            }
            _ => false,
        }
    }

    /// Whether the drop marker sits after the last of `row_count` rows.
    pub fn marks_end(&self, row_count: usize) -> bool {
        match (self.dragging_read.get(), self.drop_at_read.get()) {
            (Some(_), Some(drop_at)) => drop_at + 1 >= row_count,
            _ => false,
        }
    }
}

/// End drag operation
pub fn end_drag(dnd: &DndSignals) {
    dnd.dragging_write.set(None);
    dnd.drop_at_write.set(None);
    dnd.pending_write.set(None);
}

/// Vertical extent `(top, height)` of every element matching `selector`
/// inside `container`, in document order and client coordinates.
pub fn row_extents(container: &web_sys::Element, selector: &str) -> Vec<(f64, f64)> {
    let mut extents = Vec::new();
    let Ok(nodes) = container.query_selector_all(selector) else {
        return extents;
    };
    for i in 0..nodes.length() {
        if let Some(el) = nodes.item(i).and_then(|n| n.dyn_into::<web_sys::Element>().ok()) {
            let rect = el.get_bounding_client_rect();
            extents.push((rect.top(), rect.height()));
        }
    }
    extents
}

/// Create mousedown handler for draggable rows
/// Records pending drag with start position
pub fn make_on_mousedown(dnd: DndSignals, index: usize) -> impl Fn(web_sys::MouseEvent) + Copy + 'static {
    move |ev: web_sys::MouseEvent| {
        if ev.button() == 0 {
            // Ignore if target is input or button
            if let Some(target) = ev.target() {
                if target.dyn_ref::<web_sys::HtmlInputElement>().is_some() { return; }
                if target.dyn_ref::<web_sys::HtmlButtonElement>().is_some() { return; }
            }
            ev.prevent_default();
            dnd.pending_write.set(Some(index));
            dnd.start_x_write.set(ev.client_x());
            dnd.start_y_write.set(ev.client_y());
        }
    }
}

/// Bind document mousemove: starts a drag once the pointer leaves the
/// threshold, then keeps `drop_at` updated through `locate`.
///
/// `locate(dragged, client_y)` returns the insertion position among the
/// other rows.
pub fn bind_global_mousemove<L>(dnd: DndSignals, locate: L)
where
    L: Fn(usize, i32) -> Option<usize> + 'static,
{
    use wasm_bindgen::closure::Closure;

    let on_mousemove = Closure::<dyn FnMut(web_sys::MouseEvent)>::new(move |ev: web_sys::MouseEvent| {
        let pending = dnd.pending_read.get_untracked();

        // If we have a pending drag and haven't started dragging yet
        if pending.is_some() && dnd.dragging_read.get_untracked().is_none() {
            let dx = (ev.client_x() - dnd.start_x_read.get_untracked()).abs();
            let dy = (ev.client_y() - dnd.start_y_read.get_untracked()).abs();

            if dx > DRAG_THRESHOLD_PX || dy > DRAG_THRESHOLD_PX {
                dnd.dragging_write.set(pending);
            }
        }

        if let Some(dragged) = dnd.dragging_read.get_untracked() {
            let target = locate(dragged, ev.client_y());
            if target != dnd.drop_at_read.get_untracked() {
                dnd.drop_at_write.set(target);
            }
        }
    });

    if let Some(win) = web_sys::window() {
        if let Some(doc) = win.document() {
            let _ = doc.add_event_listener_with_callback("mousemove", on_mousemove.as_ref().unchecked_ref());
        }
    }
    on_mousemove.forget();
}

/// Bind global mouseup handler for drop detection.
///
/// `on_drop(from, to)` receives the dragged index and its insertion position
/// among the other rows. Also binds the global mousemove handler.
pub fn bind_global_mouseup<L, F>(dnd: DndSignals, locate: L, on_drop: F)
where
    L: Fn(usize, i32) -> Option<usize> + Clone + 'static,
    F: Fn(usize, usize) + 'static,
{
    use wasm_bindgen::closure::Closure;

    let locate_on_drop = locate.clone();
    let on_mouseup = Closure::<dyn FnMut(web_sys::MouseEvent)>::new(move |ev: web_sys::MouseEvent| {
        let dragging = dnd.dragging_read.get_untracked();

        // If we were actually dragging (not just clicking)
        if let Some(dragged) = dragging {
            let target = locate_on_drop(dragged, ev.client_y())
                .or_else(|| dnd.drop_at_read.get_untracked());
            end_drag(&dnd);
            if let Some(to) = target {
                on_drop(dragged, to);
            }
        } else {
            // Click event will fire naturally on the element
            end_drag(&dnd);
        }
    });

    if let Some(win) = web_sys::window() {
        if let Some(doc) = win.document() {
            let _ = doc.add_event_listener_with_callback("mouseup", on_mouseup.as_ref().unchecked_ref());
        }
    }
    on_mouseup.forget();

    bind_global_mousemove(dnd, locate);
}
