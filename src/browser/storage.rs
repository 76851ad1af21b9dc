//! localStorage backend for the goal snapshot slot.

use goal_core::{GoalError, GoalResult, SnapshotStore};
use wasm_bindgen::JsValue;

/// `window.localStorage`, looked up on every access.
#[derive(Debug, Clone, Copy, Default)]
pub struct BrowserStorage;

fn js_err(e: JsValue) -> GoalError {
    GoalError::Storage(format!("{:?}", e))
}

fn local_storage() -> GoalResult<web_sys::Storage> {
    web_sys::window()
        .ok_or_else(|| GoalError::Storage("no window".to_string()))?
        .local_storage()
        .map_err(js_err)?
        .ok_or_else(|| GoalError::Storage("localStorage unavailable".to_string()))
}

impl SnapshotStore for BrowserStorage {
    fn read(&self, key: &str) -> GoalResult<Option<String>> {
        local_storage()?.get_item(key).map_err(js_err)
    }

    fn write(&mut self, key: &str, snapshot: &str) -> GoalResult<()> {
        local_storage()?.set_item(key, snapshot).map_err(js_err)
    }
}
