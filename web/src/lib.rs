//! Browser host for `magic-cards`.
//!
//! The core crate decides poses, activation and particle motion; this crate
//! wires it to the page:
//!
//! | Module | Role |
//! |--------|------|
//! | [`host`] | `MagicCards` handle: pointer listener, frame loop, events |
//! | [`dom`] | Card elements and particle canvases behind the core's surface traits |
//! | [`util`] | Seed, id and coordinate conversions |
//!
//! ```js
//! const cards = new MagicCards('{"activeCardScale": 1.5}');
//! const id = cards.attach(host, body, background, canvas, 30);
//! host.addEventListener("active-change", (e) => console.log(e.detail));
//! ```

pub mod dom;
pub mod host;
pub mod util;

pub use host::MagicCards;

use wasm_bindgen::prelude::*;

/// Module entry point: install the panic hook and route `log` to the console.
#[wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();
    if console_log::init_with_level(log::Level::Info).is_ok() {
        log::debug!("magic cards host loaded");
    }
}
