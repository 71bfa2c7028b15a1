//! One Sip One Brush Frontend Entry Point

use leptos::prelude::*;
use sipbrush_ui::App;

fn main() {
    console_error_panic_hook::set_once();
    if let Err(err) = console_log::init_with_level(log::Level::Debug) {
        web_sys::console::error_1(&format!("logger init failed: {}", err).into());
    }
    mount_to_body(App);
}
