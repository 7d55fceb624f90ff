//! # portfolio
//!
//! WebAssembly interactivity for the static portfolio pages: time-of-day
//! greeting, persisted light/dark theme, "Read More" toggles, the skill
//! description panel and the contact form's inline feedback.
//!
//! ## Module layout
//!
//! | Module | Role |
//! |--------|------|
//! | [`state`] | Pure widget state, events and ports (tested natively) |
//! | [`page`] | Page identity and which widgets each page mounts |
//! | [`config`] | User-facing copy, colours, selectors and thresholds |
//! | `dom` | `web-sys` bindings, built with the `hydrate` feature |

pub mod config;
#[cfg(feature = "hydrate")]
pub mod dom;
pub mod page;
pub mod state;

/// WASM entry point: install logging and mount the page's widgets once the
/// document is ready.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();
    let level = if cfg!(debug_assertions) { log::Level::Debug } else { log::Level::Info };
    if let Err(err) = console_log::init_with_level(level) {
        log::warn!("logger already installed: {err}");
    }
    dom::boot_when_ready();
}
