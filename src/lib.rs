mod utils;

pub mod canvas;
pub mod color;
pub mod counter;
pub mod error;
pub mod field;
pub mod frames;
pub mod page;
pub mod particle;
pub mod scroll;
pub mod surface;
#[cfg(test)]
mod testing;
pub mod theme;
pub mod tilt;

extern crate nalgebra_glm as glm;

use wasm_bindgen::prelude::*;

// When the `wee_alloc` feature is enabled, use `wee_alloc` as the global
// allocator.
#[cfg(feature = "wee_alloc")]
#[global_allocator]
static ALLOC: wee_alloc::WeeAlloc = wee_alloc::WeeAlloc::INIT;

/// Entry point called by the page script once the DOM is ready.
#[wasm_bindgen]
pub fn initialize() -> Result<(), JsValue> {
    utils::set_panic_hook();
    // a second call keeps the logger from the first
    console_log::init_with_level(log::Level::Info).ok();

    let window = web_sys::window().ok_or(error::Error::NoWindow)?;
    page::mount(&window)?;
    Ok(())
}
