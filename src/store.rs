//! Global Application State Store
//!
//! Uses Leptos reactive_stores; the goal board lives in a single field so
//! every command re-renders the list.

use leptos::prelude::*;
use reactive_stores::Store;

use goal_core::{BoardConfig, Command, GoalBoard, GoalResult};

use crate::browser::{self, BrowserStorage};

/// Global application state with field-level reactivity
#[derive(Clone, Debug, Store)]
pub struct AppState {
    /// Goals and their localStorage slot
    pub board: GoalBoard<BrowserStorage>,
}

impl AppState {
    /// Open the board from the saved slot.
    pub fn open() -> Self {
        Self {
            board: GoalBoard::open(BrowserStorage, BoardConfig::default()),
        }
    }
}

/// Type alias for the store
pub type AppStore = Store<AppState>;

/// Get the app store from context
pub fn use_app_store() -> AppStore {
    expect_context::<AppStore>()
}

// ========================
// Store Helper Functions
// ========================

/// Current goal texts, tracked
pub fn goal_texts(store: &AppStore) -> Vec<String> {
    store.board().read().goals().iter().map(|g| g.text().to_string()).collect()
}

/// Apply a command to the board (persisting it)
pub fn dispatch(store: &AppStore, command: Command) -> GoalResult<()> {
    store.board().write().apply(command)
}

/// Apply a command; rejected user content is shown in an alert
pub fn dispatch_or_alert(store: &AppStore, command: Command) {
    if let Err(e) = dispatch(store, command) {
        log::error!("[STORE] Command failed: {}", e);
        if e.is_user_facing() {
            browser::alert(&e.to_string());
        }
    }
}

/// Download the current goals as a file
pub fn export_goals(store: &AppStore) {
    let file = match store.board().read_untracked().export() {
        Ok(file) => file,
        Err(e) => {
            log::error!("[STORE] Export failed: {}", e);
            return;
        }
    };
    if let Err(e) = browser::download(&file) {
        log::error!("[STORE] Download failed: {}", e);
    }
}
