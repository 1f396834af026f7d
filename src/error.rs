use std::time::Duration;
use thiserror::Error;

use crate::locate::Tool;
use crate::types::DeviceState;

/// A specialized `Result` type for adb/fastboot operations.
pub type Result<T> = std::result::Result<T, Error>;

/// The error type for all adb/fastboot operations.
#[derive(Debug, Error)]
pub enum Error {
    #[error("{tool} executable not found: pass a valid path to {tool} or add it to PATH")]
    ToolNotFound { tool: Tool },

    #[error("failed to launch {tool}: {source}")]
    Launch {
        tool: Tool,
        #[source]
        source: std::io::Error,
    },

    /// Non-zero exit from the tool. The message is the captured stderr, verbatim.
    #[error("{stderr}")]
    CommandFailed { stderr: String },

    #[error("invalid device state '{0}', expected device/recovery/sideload/bootloader")]
    InvalidState(String),

    #[error("timed out after {duration:?} waiting for state '{state}'")]
    WaitTimeout {
        duration: Duration,
        state: DeviceState,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_command_failed_message_is_stderr_verbatim() {
        let err = Error::CommandFailed {
            stderr: "error: no devices/emulators found\n".to_string(),
        };
        assert_eq!(err.to_string(), "error: no devices/emulators found\n");
    }

    #[test]
    fn test_tool_not_found_names_tool() {
        let err = Error::ToolNotFound { tool: Tool::Fastboot };
        assert!(err.to_string().contains("fastboot"), "should name the tool");
    }
}
