// Startup sequencing for the GBA web loader
pub mod boot;
pub mod config;
pub mod error;
pub mod host;
pub mod prelude;
pub mod upload;

// Re-exports
pub use boot::{BootOutcome, Bootstrapper};
pub use config::BootConfig;
pub use error::{BootError, BootStage};
pub use host::{BootHost, EmulatorModule, UploadDone};
