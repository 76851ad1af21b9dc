//! Goal List Frontend Entry Point

mod app;
mod browser;
mod components;
mod store;

use app::App;
use leptos::prelude::*;

fn main() {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Debug).expect("Failed to init logger");
    log::info!("Goal list starting...");
    mount_to_body(App);
}
