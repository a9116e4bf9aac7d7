#![cfg(target_arch = "wasm32")]

// Nothing here constructs the mGBA module: the test runner has no bundler to
// resolve the npm import, so only the page-facing half of startup is covered.

wasm_bindgen_test::wasm_bindgen_test_configure!(run_in_browser);

use gba_boot::prelude::*;
use gba_wasm::bootstrap::{StartGuard, parse_options, prepare};
use gba_wasm::web_host::WebHost;
use std::cell::Cell;
use wasm_bindgen::JsValue;
use wasm_bindgen_test::wasm_bindgen_test;
use web_sys::Element;

fn insert(tag: &str, id: &str) -> Element {
    let document = web_sys::window().unwrap().document().unwrap();
    let element = document.create_element(tag).unwrap();
    element.set_id(id);
    document.body().unwrap().append_child(&element).unwrap();
    element
}

fn config_for(canvas_id: &str) -> BootConfig {
    BootConfig {
        canvas_id: canvas_id.to_owned(),
        ..Default::default()
    }
}

#[wasm_bindgen_test]
fn finds_canvas_by_id() {
    let canvas = insert("canvas", "gba-screen");
    assert!(WebHost::new().find_surface("gba-screen").is_some());
    canvas.remove();
}

#[wasm_bindgen_test]
fn element_that_is_not_a_canvas_counts_as_missing() {
    let div = insert("div", "canvas");
    assert!(WebHost::new().find_surface("canvas").is_none());
    div.remove();
}

#[wasm_bindgen_test]
fn missing_id_counts_as_missing() {
    assert!(WebHost::new().find_surface("no-such-element").is_none());
}

#[wasm_bindgen_test]
fn prepare_throws_when_canvas_is_missing() {
    let err = prepare(config_for("absent-screen"))
        .err()
        .expect("prepare should fail without a canvas");
    let err: js_sys::Error = err.into();
    assert!(String::from(err.message()).starts_with("No canvas"));
}

#[wasm_bindgen_test]
fn prepare_throws_on_invalid_config() {
    let config = BootConfig {
        games_dir: "relative/games".into(),
        ..config_for("gba-config-check")
    };
    let canvas = insert("canvas", "gba-config-check");
    let err = prepare(config).err().expect("invalid config should be refused");
    let err: js_sys::Error = err.into();
    assert!(String::from(err.message()).starts_with("Invalid boot configuration"));
    canvas.remove();
}

#[wasm_bindgen_test]
fn prepare_returns_the_canvas() {
    let canvas = insert("canvas", "gba-prepare");
    let (_boot, surface) = prepare(config_for("gba-prepare")).expect("canvas is present");
    assert_eq!(surface.id(), "gba-prepare");
    canvas.remove();
}

#[wasm_bindgen_test]
async fn http_error_status_fails_the_fetch() {
    let result = WebHost::new().fetch_rom("/no-such-rom-9f1c.gba").await;
    match result {
        Err(BootError::Fetch(msg)) => assert!(msg.contains("HTTP 404"), "{}", msg),
        Err(other) => panic!("expected a fetch error, got {:?}", other),
        Ok(_) => panic!("fetch of a missing ROM succeeded"),
    }
}

#[wasm_bindgen_test]
fn failed_start_can_be_retried() {
    let guard = StartGuard::new();
    let calls = Cell::new(0);

    let first = guard.run_once(|| {
        calls.set(calls.get() + 1);
        Err(JsValue::from_str("No canvas"))
    });
    assert!(first.is_err());

    let second = guard.run_once(|| {
        calls.set(calls.get() + 1);
        Ok(())
    });
    assert!(second.is_ok());
    assert_eq!(calls.get(), 2);
}

#[wasm_bindgen_test]
fn second_start_is_ignored() {
    let guard = StartGuard::new();
    let calls = Cell::new(0);

    guard
        .run_once(|| {
            calls.set(calls.get() + 1);
            Ok(())
        })
        .unwrap();
    let again = guard.run_once(|| {
        calls.set(calls.get() + 1);
        Err(JsValue::from_str("should not run"))
    });

    assert!(again.is_ok());
    assert_eq!(calls.get(), 1);
}

#[wasm_bindgen_test]
fn missing_options_mean_defaults() {
    assert_eq!(parse_options(JsValue::UNDEFINED).unwrap(), BootConfig::default());
    assert_eq!(parse_options(JsValue::NULL).unwrap(), BootConfig::default());
}

#[wasm_bindgen_test]
fn partial_options_keep_defaults() {
    let options = js_sys::Object::new();
    js_sys::Reflect::set(&options, &"canvasId".into(), &"screen".into()).unwrap();
    let config = parse_options(options.into()).unwrap();
    assert_eq!(config.canvas_id, "screen");
    assert_eq!(config.rom_path(), "/data/games/game.gba");
}

#[wasm_bindgen_test]
fn malformed_options_are_an_invalid_config() {
    let options = js_sys::Object::new();
    js_sys::Reflect::set(&options, &"romUrl".into(), &JsValue::from_f64(7.0)).unwrap();
    let err: js_sys::Error = parse_options(options.into())
        .err()
        .expect("a numeric romUrl should be refused")
        .into();
    assert!(String::from(err.message()).starts_with("Invalid boot configuration: "));
}
