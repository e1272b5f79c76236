#![allow(warnings)]
//! LMS Frontend Entry Point

mod app;
mod auth;
mod commands;
mod components;
mod config;
mod context;
mod course;
mod error;
mod hooks;
mod models;
mod roadmap;
mod store;

use app::App;
use leptos::prelude::*;

fn main() {
    console_error_panic_hook::set_once();
    tracing_wasm::set_as_global_default();
    mount_to_body(App);
}
