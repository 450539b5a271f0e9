pub mod api;
pub mod app;
pub mod components;
pub mod state;
pub mod types;

use wasm_bindgen::prelude::*;

use crate::app::App;

#[wasm_bindgen(start)]
pub fn run_app() {
    let document = web_sys::window()
        .expect("window not available")
        .document()
        .expect("document not available");
    let root = document
        .get_element_by_id("root")
        .expect("missing #root element");
    yew::Renderer::<App>::with_root(root).render();
}
