use crate::mgba::Mgba;
use crate::web_host::WebHost;
use gba_boot::prelude::*;
use std::cell::RefCell;
use std::sync::atomic::{AtomicBool, Ordering};
use wasm_bindgen::JsValue;
use web_sys::HtmlCanvasElement;

thread_local! {
    // Keeps the running module reachable for the lifetime of the page
    static RUNNING: RefCell<Option<Mgba>> = const { RefCell::new(None) };
}

/// One emulator per page. A start that fails before anything was spawned
/// leaves the guard open for another attempt.
pub struct StartGuard {
    started: AtomicBool,
}

impl StartGuard {
    pub const fn new() -> Self {
        Self {
            started: AtomicBool::new(false),
        }
    }

    pub fn run_once<F>(&self, start: F) -> Result<(), JsValue>
    where
        F: FnOnce() -> Result<(), JsValue>,
    {
        if self.started.swap(true, Ordering::SeqCst) {
            log::warn!("Already started, skipping");
            return Ok(());
        }

        let result = start();
        if result.is_err() {
            self.started.store(false, Ordering::SeqCst);
        }
        result
    }
}

/// Page supplied options; `undefined` or `null` means all defaults.
pub fn parse_options(options: JsValue) -> Result<BootConfig, JsValue> {
    if options.is_undefined() || options.is_null() {
        return Ok(BootConfig::default());
    }
    serde_wasm_bindgen::from_value(options)
        .map_err(|err| js_error(&BootError::InvalidConfig(err.to_string())))
}

/// The synchronous half of startup: validate the config and find the canvas.
/// Nothing has been fetched or constructed when this fails.
pub fn prepare(
    config: BootConfig,
) -> Result<(Bootstrapper<WebHost>, HtmlCanvasElement), JsValue> {
    let boot = Bootstrapper::new(WebHost::new(), config).with_diagnostics(|err| {
        web_sys::console::error_1(&js_error(err));
    });

    let canvas = boot.acquire_surface().map_err(|err| js_error(&err))?;
    Ok((boot, canvas))
}

/// Find the canvas right away and run the rest of startup on the event loop.
///
/// A missing canvas is thrown back to the caller. Anything that fails later
/// is written to `console.error` and goes no further.
pub fn launch(config: BootConfig) -> Result<(), JsValue> {
    let (boot, canvas) = prepare(config)?;

    wasm_bindgen_futures::spawn_local(async move {
        if let BootOutcome::Running(module) = boot.run_and_report(canvas).await {
            RUNNING.with(|cell| *cell.borrow_mut() = Some(module));
        }
    });
    Ok(())
}

pub fn js_error(err: &BootError) -> JsValue {
    js_sys::Error::new(&err.to_string()).into()
}
