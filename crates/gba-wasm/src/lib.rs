#![cfg(target_arch = "wasm32")]
#![warn(clippy::all, rust_2018_idioms)]
use bootstrap::StartGuard;
use gba_boot::BootConfig;
use log::Level;
use wasm_bindgen::prelude::*;

pub mod bootstrap;
pub mod mgba;
pub mod web_host;

static STARTED: StartGuard = StartGuard::new();

#[cfg(feature = "autostart")]
#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    launch(BootConfig::default())
}

/// Boot with options from the page, e.g. `boot({ canvasId: "screen", romUrl: "demo.gba" })`.
/// Missing keys fall back to the defaults.
///
/// Build with `--no-default-features` to use this. With `autostart` the module
/// boots on load and this call is ignored, unless that first start failed.
#[wasm_bindgen]
pub fn boot(options: JsValue) -> Result<(), JsValue> {
    let config = bootstrap::parse_options(options)?;
    launch(config)
}

fn launch(config: BootConfig) -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    let level = if cfg!(feature = "debug-log") {
        Level::Debug
    } else {
        Level::Info
    };
    console_log::init_with_level(level).ok();

    STARTED.run_once(|| bootstrap::launch(config))
}
