#![allow(warnings)]
//! Reactor Panel Frontend Entry Point

mod models;
mod config;
mod logging;
mod storage;
mod bindings;
mod protocol;
mod calculator;
mod keyboard;
mod theme;
mod context;
mod store;
mod live;
mod export;
mod components;
mod app;

use app::App;
use leptos::prelude::*;

fn main() {
    console_error_panic_hook::set_once();
    logging::init(log::LevelFilter::Info);
    mount_to_body(App);
}
