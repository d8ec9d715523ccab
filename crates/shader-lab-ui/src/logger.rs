//! Browser console logging.
//!
//! Routes `log` records to the browser console through `wasm-logger`, so
//! shader compile errors from the core show up as console errors.

use std::sync::Once;

use log::Level;

/// Most verbose level passed to the console.
#[cfg(debug_assertions)]
pub const DEFAULT_LEVEL: Level = Level::Debug;
#[cfg(not(debug_assertions))]
pub const DEFAULT_LEVEL: Level = Level::Warn;

static INIT: Once = Once::new();

/// Install the console logger and the panic hook. Safe to call more than once.
pub fn init() {
    console_error_panic_hook::set_once();
    INIT.call_once(|| wasm_logger::init(wasm_logger::Config::new(DEFAULT_LEVEL)));
}
