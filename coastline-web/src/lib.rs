//! Browser entry point for the Coastline travel site.
//!
//! The platform-neutral pieces (`controller`, `render`, `state`) build and test
//! on any target; the DOM bindings only exist on `wasm32`.

pub mod controller;
pub mod error;
pub mod render;
pub mod state;

#[cfg(target_arch = "wasm32")]
mod booking;
#[cfg(target_arch = "wasm32")]
mod carousel;
#[cfg(target_arch = "wasm32")]
mod contact;
#[cfg(target_arch = "wasm32")]
pub mod dom;
#[cfg(target_arch = "wasm32")]
mod faq;
#[cfg(target_arch = "wasm32")]
pub mod page;
#[cfg(target_arch = "wasm32")]
mod timer;

pub use controller::{submit_contact, BookingController, BookingTrigger};
pub use error::PageError;
pub use render::{apply, apply_outcome, Surface};
pub use state::PageState;

#[cfg(target_arch = "wasm32")]
mod entry {
    use crate::dom::listen;
    use crate::page;
    use wasm_bindgen::prelude::*;

    fn run() {
        if let Err(e) = page::boot() {
            tracing::error!("Page boot failed: {}", e);
        }
    }

    #[wasm_bindgen(start)]
    pub fn start() -> Result<(), JsValue> {
        console_error_panic_hook::set_once();
        tracing_wasm::set_as_global_default();

        let document = web_sys::window()
            .and_then(|window| window.document())
            .ok_or_else(|| JsValue::from_str("No document available"))?;

        if document.ready_state() == "loading" {
            listen(&document, "DOMContentLoaded", |_| run())?;
        } else {
            run();
        }
        Ok(())
    }
}
