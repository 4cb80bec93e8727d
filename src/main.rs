#![allow(non_snake_case)]

mod app;
mod browser;
mod components;
pub mod context;
mod pages;
mod theme;

use tracing::Level;

fn main() {
    // Routes `tracing` output to the browser console.
    if let Err(e) = dioxus::logger::init(Level::INFO) {
        eprintln!("logger already initialised: {e}");
    }

    tracing::info!("Starting video portfolio");

    dioxus::launch(app::App);
}
