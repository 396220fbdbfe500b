//! ==============================================================================
//! lib.rs - wellsite helper page header (wasm)
//! ==============================================================================
//!
//! purpose:
//!     browser side of the page header. loading the wasm module defines the
//!     `<header-component>` custom element, so any static page can place the
//!     banner declaratively.
//!
//! architecture:
//!     - custom element defined through window.customElements (element.rs)
//!     - leptos csr view of the same header for leptos apps (components/)
//!     - log records forwarded to the browser console (logging.rs)
//!
//! ==============================================================================

use wasm_bindgen::prelude::*;

mod components;
mod element;
mod logging;

pub use components::{NavBar, PageHeader};
pub use element::define_header_element;

// ==============================================================================
// main entry point
// ==============================================================================

#[wasm_bindgen(start)]
pub fn main() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    logging::init();
    define_header_element()?;
    Ok(())
}

/// mount the leptos header view as the last child of `parent`
#[wasm_bindgen(js_name = mountPageHeader)]
pub fn mount_page_header(parent: web_sys::HtmlElement) {
    leptos::mount::mount_to(parent, PageHeader).forget();
}
