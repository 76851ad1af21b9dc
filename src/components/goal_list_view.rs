//! Goal List View Component
//!
//! Displays goals in order with drag-to-reorder support.
//! Uses leptos-dragdrop for pointer tracking; the drop position comes from
//! comparing the pointer against the midpoints of the other rows.

use leptos::html::Ul;
use leptos::prelude::*;

use goal_core::{drop_position, Command, RowSpan};
use leptos_dragdrop::*;

use crate::components::GoalRow;
use crate::store::{self, use_app_store};

/// Rows measured for drop geometry
const ROW_SELECTOR: &str = "li.goal-item";

/// Sortable goal list
#[component]
pub fn GoalListView() -> impl IntoView {
    let app_store = use_app_store();
    let list_ref = NodeRef::<Ul>::new();

    // Create DnD signals
    let dnd = create_dnd_signals();

    let locate = move |dragged: usize, client_y: i32| -> Option<usize> {
        let list = list_ref.get_untracked()?;
        let rows: Vec<RowSpan> = row_extents(&list, ROW_SELECTOR)
            .into_iter()
            .map(|(top, height)| RowSpan::new(top, height))
            .collect();
        if dragged >= rows.len() {
            return None;
        }
        Some(drop_position(dragged, f64::from(client_y), &rows))
    };

    bind_global_mouseup(dnd, locate, move |from, to| {
        log::debug!("[DND] Drop: from={}, to={}", from, to);
        store::dispatch_or_alert(&app_store, Command::Move { from, to });
    });

    let rows = move || {
        store::goal_texts(&app_store)
            .into_iter()
            .enumerate()
            .collect::<Vec<_>>()
    };
    let row_count = move || store::goal_texts(&app_store).len();

    view! {
        <ul class="goal-list" node_ref=list_ref>
            <For
                each=rows
                key=|(index, text)| (*index, text.clone())
                children=move |(index, text)| {
                    let on_mousedown = make_on_mousedown(dnd, index);

                    let row_class = move || {
                        let mut c = String::from("goal-item");
                        if dnd.dragging_read.get() == Some(index) { c.push_str(" dragging"); }
                        if dnd.marks_before(index) { c.push_str(" drop-before"); }
                        c
                    };

                    view! {
                        <li class=row_class on:mousedown=on_mousedown>
                            <GoalRow index=index text=text />
                        </li>
                    }
                }
            />
        </ul>
        <div class=move || {
            if dnd.marks_end(row_count()) { "drop-zone active" } else { "drop-zone hidden" }
        } />
    }
}
