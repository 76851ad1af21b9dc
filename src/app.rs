//! Goal List App
//!
//! Main application component: entry form, sortable list, import/export.

use leptos::prelude::*;
use reactive_stores::Store;

use crate::components::{GoalListView, NewGoalForm, TransferBar};
use crate::store::AppState;

#[component]
pub fn App() -> impl IntoView {
    // Seed from localStorage once, then share through context
    let app_store = Store::new(AppState::open());
    provide_context(app_store);

    view! {
        <main class="main-content">
            <h1>"Goals"</h1>

            <NewGoalForm />

            <GoalListView />

            <TransferBar />
        </main>
    }
}
