#![allow(warnings)]
//! QuickBite Frontend Entry Point

mod app;
mod cart;
mod commands;
mod components;
mod context;
mod favorites;
mod models;
mod store;

use app::App;
use leptos::prelude::*;

fn main() {
    console_error_panic_hook::set_once();
    mount_to_body(App);
}
