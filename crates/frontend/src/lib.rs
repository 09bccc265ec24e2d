//! Showcases Dashboard - Yew WASM Frontend
//!
//! Lists the showcase projects and hosts the email composer page.

mod app;
mod components;
mod context;
mod pages;
#[cfg(test)]
mod test_utils;

pub use app::{App, Route, ServerApp, ServerAppProps};
pub use context::{DeliveryHandle, SessionAction, SessionContext, SessionState};

use wasm_bindgen::prelude::*;

/// WASM entry point.
#[wasm_bindgen(start)]
pub fn main() {
    yew::Renderer::<App>::new().render();
}
