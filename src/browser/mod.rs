//! Browser API Bindings
//!
//! Thin wrappers over localStorage, file download/upload and alerts.

mod files;
mod storage;

pub use files::{download, read_text};
pub use storage::BrowserStorage;

/// Show a blocking notification to the user.
pub fn alert(message: &str) {
    if let Some(win) = web_sys::window() {
        let _ = win.alert_with_message(message);
    }
}
