#![allow(warnings)]
//! PackUpPal Frontend Entry Point

mod app;
mod auth;
mod components;
mod context;
mod store;

use app::App;
use leptos::prelude::*;

fn main() {
    console_error_panic_hook::set_once();
    console_log::init_with_level(if cfg!(debug_assertions) {
        log::Level::Debug
    } else {
        log::Level::Info
    })
    .ok();
    mount_to_body(App);
}
