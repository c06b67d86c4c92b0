#![allow(warnings)]
//! Time Records Dashboard Entry Point

mod models;
mod error;
mod config;
mod storage;
mod filter;
mod debounce;
mod query;
mod records;
mod shortcuts;
mod commands;
mod store;
mod context;
mod components;
mod app;

use app::App;
use leptos::prelude::*;
use log::LevelFilter;

fn main() {
    console_error_panic_hook::set_once();
    let level = if cfg!(debug_assertions) { LevelFilter::Debug } else { LevelFilter::Info };
    if console_logger::init(level).is_err() {
        web_sys::console::warn_1(&"logger already installed".into());
    }
    mount_to_body(App);
}
