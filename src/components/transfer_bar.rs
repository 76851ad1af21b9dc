//! Transfer Bar Component
//!
//! Download the goals as `goals.json` or replace them from an uploaded file.

use leptos::html::Input;
use leptos::prelude::*;
use leptos::task::spawn_local;

use goal_core::Command;

use crate::browser;
use crate::store::{self, use_app_store};

#[component]
pub fn TransferBar() -> impl IntoView {
    let app_store = use_app_store();
    let file_input = NodeRef::<Input>::new();

    let on_file_change = move |ev: web_sys::Event| {
        let input = event_target::<web_sys::HtmlInputElement>(&ev);
        let Some(file) = input.files().and_then(|files| files.get(0)) else { return };
        // Allow picking the same file again
        input.set_value("");

        spawn_local(async move {
            match browser::read_text(&file).await {
                Ok(contents) => store::dispatch_or_alert(&app_store, Command::Import(contents)),
                Err(e) => {
                    log::error!("[UPLOAD] Failed to read {}: {}", file.name(), e);
                    browser::alert("Could not read the selected file. Please try again.");
                }
            }
        });
    };

    view! {
        <div class="transfer-bar">
            <button type="button" on:click=move |_| store::export_goals(&app_store)>
                "Download"
            </button>
            <button
                type="button"
                class="upload-label"
                on:click=move |_| {
                    if let Some(input) = file_input.get() {
                        input.click();
                    }
                }
            >
                "Upload"
            </button>
            <input
                type="file"
                accept="application/json,.json"
                style="display: none;"
                node_ref=file_input
                on:change=on_file_change
            />
        </div>
    }
}
