//! Capabilities the startup sequence borrows from its environment.
//!
//! In the browser these are the DOM, `fetch` and the prebuilt emulator module.
//! Everything runs on one event loop, so none of the futures are `Send`.
#![allow(async_fn_in_trait)]

use crate::error::BootError;

/// Completion signal handed to [`EmulatorModule::upload_rom`]. Fired once the
/// module has written the file.
pub type UploadDone = Box<dyn FnOnce() + 'static>;

pub trait BootHost {
    /// Rendering target the module is bound to
    type Surface;
    /// ROM bytes as the host fetched them
    type Rom;
    type Module: EmulatorModule<Rom = Self::Rom>;

    fn find_surface(&self, id: &str) -> Option<Self::Surface>;

    async fn fetch_rom(&self, url: &str) -> Result<Self::Rom, BootError>;

    /// Construct the module bound to `surface`. Its filesystem is not usable
    /// until [`EmulatorModule::fs_init`] resolves.
    async fn create_module(&self, surface: Self::Surface) -> Result<Self::Module, BootError>;
}

pub trait EmulatorModule {
    type Rom;

    async fn fs_init(&self) -> Result<(), BootError>;

    /// Schedule `rom` to be written into the module's games directory as
    /// `file_name`. Returning `Ok` only means the upload was accepted.
    fn upload_rom(
        &self,
        rom: Self::Rom,
        file_name: &str,
        done: UploadDone,
    ) -> Result<(), BootError>;

    /// Flush pending writes so path based lookups can see them.
    async fn fs_sync(&self) -> Result<(), BootError>;

    fn load_game(&self, path: &str) -> bool;
}
