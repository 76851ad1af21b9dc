//! New Goal Form Component
//!
//! Text entry for appending goals to the end of the list.

use leptos::prelude::*;
use wasm_bindgen::JsCast;

use goal_core::Command;

use crate::store::{self, use_app_store};

/// Form for appending a new goal
#[component]
pub fn NewGoalForm() -> impl IntoView {
    let app_store = use_app_store();

    let (new_text, set_new_text) = signal(String::new());

    let add_goal = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        let text = new_text.get_untracked();
        if text.trim().is_empty() { return; }

        store::dispatch_or_alert(&app_store, Command::Append(text));
        set_new_text.set(String::new());
    };

    view! {
        <form class="new-goal-form" on:submit=add_goal>
            <input
                type="text"
                placeholder="Add a new goal..."
                prop:value=move || new_text.get()
                on:input=move |ev| {
                    if let Some(input) = ev.target().and_then(|t| t.dyn_into::<web_sys::HtmlInputElement>().ok()) {
                        set_new_text.set(input.value());
                    }
                }
            />
            <button type="submit">"Add"</button>
        </form>
    }
}
