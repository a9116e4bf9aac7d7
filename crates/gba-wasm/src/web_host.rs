use crate::mgba::{Mgba, js_create_mgba};
use gba_boot::prelude::*;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::JsFuture;
use web_sys::{Blob, File, HtmlCanvasElement, Response};

/// The page itself: DOM lookups, `fetch`, and the mGBA module.
pub struct WebHost {
    window: Option<web_sys::Window>,
}

impl WebHost {
    pub fn new() -> Self {
        Self {
            window: web_sys::window(),
        }
    }

    fn window(&self) -> Result<&web_sys::Window, BootError> {
        self.window
            .as_ref()
            .ok_or_else(|| BootError::Fetch("no global `window`".into()))
    }
}

impl BootHost for WebHost {
    type Surface = HtmlCanvasElement;
    type Rom = Blob;
    type Module = Mgba;

    fn find_surface(&self, id: &str) -> Option<HtmlCanvasElement> {
        // An element with the id that isn't a canvas is as good as none
        self.window
            .as_ref()?
            .document()?
            .get_element_by_id(id)?
            .dyn_into()
            .ok()
    }

    async fn fetch_rom(&self, url: &str) -> Result<Blob, BootError> {
        let response = JsFuture::from(self.window()?.fetch_with_str(url))
            .await
            .map_err(|err| BootError::Fetch(describe(&err)))?;
        let response: Response = response
            .dyn_into()
            .map_err(|_| BootError::Fetch("fetch did not resolve to a Response".into()))?;

        if !response.ok() {
            return Err(BootError::Fetch(format!(
                "HTTP {} {} for {}",
                response.status(),
                response.status_text(),
                url
            )));
        }

        let body = response
            .blob()
            .map_err(|err| BootError::Fetch(describe(&err)))?;
        let blob = JsFuture::from(body)
            .await
            .map_err(|err| BootError::Fetch(describe(&err)))?;
        log::debug!("fetched {} ({} bytes)", url, blob.unchecked_ref::<Blob>().size());
        Ok(blob.unchecked_into())
    }

    async fn create_module(&self, canvas: HtmlCanvasElement) -> Result<Mgba, BootError> {
        let options = js_sys::Object::new();
        js_sys::Reflect::set(&options, &"canvas".into(), &canvas)
            .map_err(|err| BootError::ModuleInit(describe(&err)))?;

        let module = js_create_mgba(options.into())
            .await
            .map_err(|err| BootError::ModuleInit(describe(&err)))?;
        Ok(module.unchecked_into())
    }
}

impl EmulatorModule for Mgba {
    type Rom = Blob;

    async fn fs_init(&self) -> Result<(), BootError> {
        self.js_fs_init()
            .await
            .map(|_| ())
            .map_err(|err| BootError::ModuleInit(format!("FSInit: {}", describe(&err))))
    }

    fn upload_rom(&self, rom: Blob, file_name: &str, done: UploadDone) -> Result<(), BootError> {
        let parts = js_sys::Array::of1(&rom);
        let file = File::new_with_blob_sequence(&parts, file_name)
            .map_err(|err| BootError::Upload(describe(&err)))?;

        // Frees itself once the module calls it
        let callback = Closure::once_into_js(move || done());
        self.js_upload_rom(&file, &callback)
            .map_err(|err| BootError::Upload(describe(&err)))
    }

    async fn fs_sync(&self) -> Result<(), BootError> {
        self.js_fs_sync()
            .await
            .map(|_| ())
            .map_err(|err| BootError::Sync(describe(&err)))
    }

    fn load_game(&self, path: &str) -> bool {
        self.js_load_game(path)
    }
}

fn describe(value: &JsValue) -> String {
    if let Some(err) = value.dyn_ref::<js_sys::Error>() {
        return String::from(err.message());
    }
    value.as_string().unwrap_or_else(|| format!("{:?}", value))
}
