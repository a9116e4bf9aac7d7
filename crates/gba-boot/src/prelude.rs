//! Convenient imports for hosts driving the startup sequence
//!
//! ```rust
//! use gba_boot::prelude::*;
//! ```

// Orchestration
pub use crate::boot::{BootOutcome, Bootstrapper};
pub use crate::config::BootConfig;

// Traits a host has to implement
pub use crate::host::{BootHost, EmulatorModule, UploadDone};

// Errors
pub use crate::error::{BootError, BootStage};
