//! Goal Row Component
//!
//! A single goal in the list with its delete control.

use leptos::prelude::*;

use goal_core::Command;

use crate::store::{self, use_app_store};

/// Contents of one list row
#[component]
pub fn GoalRow(index: usize, text: String) -> impl IntoView {
    let app_store = use_app_store();

    view! {
        <span class="drag-handle">"⠿"</span>
        <span class="goal-text">{text}</span>
        <button class="delete-btn" on:click=move |ev| {
            ev.stop_propagation();
            store::dispatch_or_alert(&app_store, Command::Remove(index));
        }>"Delete"</button>
    }
}
