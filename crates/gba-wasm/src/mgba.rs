use wasm_bindgen::prelude::*;

#[wasm_bindgen(module = "@thenick775/mgba-wasm")]
extern "C" {
    /// Emscripten factory, the package's default export. Called as `mGBA({ canvas })`.
    #[wasm_bindgen(js_name = default, catch)]
    pub async fn js_create_mgba(options: JsValue) -> Result<JsValue, JsValue>;

    #[derive(Clone)]
    pub type Mgba;

    #[wasm_bindgen(method, js_name = FSInit, catch)]
    pub async fn js_fs_init(this: &Mgba) -> Result<JsValue, JsValue>;

    #[wasm_bindgen(method, js_name = uploadRom, catch)]
    pub fn js_upload_rom(
        this: &Mgba,
        file: &web_sys::File,
        callback: &JsValue,
    ) -> Result<(), JsValue>;

    #[wasm_bindgen(method, js_name = FSSync, catch)]
    pub async fn js_fs_sync(this: &Mgba) -> Result<JsValue, JsValue>;

    #[wasm_bindgen(method, js_name = loadGame)]
    pub fn js_load_game(this: &Mgba, path: &str) -> bool;
}
