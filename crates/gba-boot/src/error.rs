use std::fmt;
use thiserror::Error;

/// The step of the startup sequence an error came from.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum BootStage {
    Configure,
    AcquireSurface,
    Fetch,
    ModuleInit,
    Upload,
    Sync,
    Load,
}

impl fmt::Display for BootStage {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let name = match *self {
            BootStage::Configure => "configure",
            BootStage::AcquireSurface => "acquire surface",
            BootStage::Fetch => "fetch",
            BootStage::ModuleInit => "module init",
            BootStage::Upload => "upload",
            BootStage::Sync => "sync",
            BootStage::Load => "load",
        };
        write!(f, "{}", name)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BootError {
    #[error("No canvas (no element with id `{0}`)")]
    SurfaceMissing(String),

    #[error("Failed to fetch ROM: {0}")]
    Fetch(String),

    #[error("Emulator module failed to initialize: {0}")]
    ModuleInit(String),

    #[error("ROM upload failed: {0}")]
    Upload(String),

    #[error("Filesystem sync failed: {0}")]
    Sync(String),

    // Message is matched verbatim by pages scraping the console
    #[error("Could not load game")]
    LoadFailed,

    #[error("Invalid boot configuration: {0}")]
    InvalidConfig(String),
}

impl BootError {
    pub fn stage(&self) -> BootStage {
        match self {
            BootError::SurfaceMissing(_) => BootStage::AcquireSurface,
            BootError::Fetch(_) => BootStage::Fetch,
            BootError::ModuleInit(_) => BootStage::ModuleInit,
            BootError::Upload(_) => BootStage::Upload,
            BootError::Sync(_) => BootStage::Sync,
            BootError::LoadFailed => BootStage::Load,
            BootError::InvalidConfig(_) => BootStage::Configure,
        }
    }
}
