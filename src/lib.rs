// fastadb - wrapper around the adb and fastboot command-line tools.
// Locates the executables, runs them as subprocesses and parses their
// device listings. No ADB protocol implementation, no daemon of its own.

pub mod client;
pub mod device;
pub mod error;
pub mod locate;
pub mod runner;
pub mod types;


// Re-export the main types for easy access
pub use client::Client;
pub use device::Device;
pub use error::{Error, Result};
pub use locate::{Tool, is_available, locate};
pub use runner::{CommandResult, Runner};
pub use types::{DeviceRecord, DeviceState};
