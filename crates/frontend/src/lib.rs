//! EduManage - Yew WASM Frontend
//!
//! This crate provides the web UI for the EduManage tutoring dashboard.

mod app;
mod auth;
mod components;
mod pages;

pub use app::App;

use wasm_bindgen::prelude::*;

/// WASM entry point.
#[wasm_bindgen(start)]
pub fn main() {
    yew::Renderer::<App>::new().render();
}
