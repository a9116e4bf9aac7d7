use crate::config::BootConfig;
use crate::error::BootError;
use crate::host::{BootHost, EmulatorModule};
use crate::upload::upload_and_wait;
use futures::future::try_join;
use log::{debug, error, info};

/// Where startup failures end up. Called at most once per boot.
pub type DiagnosticSink = Box<dyn Fn(&BootError) + 'static>;

/// Terminal state of a boot.
#[derive(Debug)]
pub enum BootOutcome<M> {
    /// The game loaded; the module drives everything from here on.
    Running(M),
    /// The error has already been handed to the diagnostic sink.
    Failed(BootError),
}

impl<M> BootOutcome<M> {
    pub fn is_running(&self) -> bool {
        matches!(self, BootOutcome::Running(_))
    }
}

/// Fetches the ROM, brings up the emulator module and starts the game.
///
/// The fetch and the module initialization run concurrently. Once both are
/// done the ROM is uploaded, the module filesystem synced and the game loaded
/// from its virtual path, strictly in that order.
pub struct Bootstrapper<H: BootHost> {
    host: H,
    config: BootConfig,
    diagnostics: DiagnosticSink,
}

impl<H: BootHost> Bootstrapper<H> {
    pub fn new(host: H, config: BootConfig) -> Self {
        Self {
            host,
            config,
            diagnostics: Box::new(|err: &BootError| error!("{}", err)),
        }
    }

    pub fn with_diagnostics<F>(mut self, f: F) -> Self
    where
        F: Fn(&BootError) + 'static,
    {
        self.diagnostics = Box::new(f);
        self
    }

    /// Look up the rendering surface. Nothing else has been started when this
    /// fails.
    pub fn acquire_surface(&self) -> Result<H::Surface, BootError> {
        self.config.validate()?;

        let id = &self.config.canvas_id;
        self.host
            .find_surface(id)
            .ok_or_else(|| BootError::SurfaceMissing(id.clone()))
    }

    /// Everything after the surface lookup. Resolves with the running module.
    pub async fn run(&self, surface: H::Surface) -> Result<H::Module, BootError> {
        let (module, rom) = try_join(self.init_module(surface), self.fetch_rom()).await?;

        debug!("uploading ROM as `{}`", self.config.rom_file_name);
        upload_and_wait(&module, rom, &self.config.rom_file_name).await?;

        debug!("syncing module filesystem");
        module.fs_sync().await?;

        let path = self.config.rom_path();
        if !module.load_game(&path) {
            return Err(BootError::LoadFailed);
        }

        info!("loaded {}, emulator running", path);
        Ok(module)
    }

    pub async fn boot(&self) -> Result<H::Module, BootError> {
        let surface = self.acquire_surface()?;
        self.run(surface).await
    }

    /// [`Bootstrapper::boot`], with a failure reported to the diagnostic sink.
    pub async fn boot_and_report(&self) -> BootOutcome<H::Module> {
        let result = self.boot().await;
        self.settle(result)
    }

    /// [`Bootstrapper::run`], with a failure reported to the diagnostic sink.
    pub async fn run_and_report(&self, surface: H::Surface) -> BootOutcome<H::Module> {
        let result = self.run(surface).await;
        self.settle(result)
    }

    pub fn report(&self, err: &BootError) {
        debug!("startup failed during {}", err.stage());
        (self.diagnostics)(err);
    }

    fn settle(&self, result: Result<H::Module, BootError>) -> BootOutcome<H::Module> {
        match result {
            Ok(module) => BootOutcome::Running(module),
            Err(err) => {
                self.report(&err);
                BootOutcome::Failed(err)
            }
        }
    }

    async fn fetch_rom(&self) -> Result<H::Rom, BootError> {
        debug!("fetching ROM from {}", self.config.rom_url);
        let rom = self.host.fetch_rom(&self.config.rom_url).await?;
        debug!("ROM fetched");
        Ok(rom)
    }

    async fn init_module(&self, surface: H::Surface) -> Result<H::Module, BootError> {
        debug!("creating emulator module");
        let module = self.host.create_module(surface).await?;
        module.fs_init().await?;
        debug!("emulator module ready");
        Ok(module)
    }
}
