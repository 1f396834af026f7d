// Core device types shared by the client and device layers.

use std::fmt;
use std::str::FromStr;

use serde::Serialize;

use crate::error::Error;

/// One row of a device listing: serial plus the state column as reported
/// by the tool. Produced per enumeration call, never cached.
#[derive(Debug, PartialEq, Serialize, Clone)]
pub struct DeviceRecord {
    pub serial: String,
    pub state: String,
}

/// The operating modes a device can be waited for. Closed enumeration:
/// anything outside these four is rejected at parse time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum DeviceState {
    Device,
    Recovery,
    Sideload,
    Bootloader,
}

impl DeviceState {
    /// adb's native blocking wait sub-command, if the tool has one.
    /// Bootloader mode has none; it is reached by polling fastboot.
    pub(crate) fn wait_subcommand(self) -> Option<&'static str> {
        match self {
            DeviceState::Device => Some("wait-for-device"),
            DeviceState::Recovery => Some("wait-for-recovery"),
            DeviceState::Sideload => Some("wait-for-sideload"),
            DeviceState::Bootloader => None,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            DeviceState::Device => "device",
            DeviceState::Recovery => "recovery",
            DeviceState::Sideload => "sideload",
            DeviceState::Bootloader => "bootloader",
        }
    }
}

impl fmt::Display for DeviceState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for DeviceState {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "device" => Ok(DeviceState::Device),
            "recovery" => Ok(DeviceState::Recovery),
            "sideload" => Ok(DeviceState::Sideload),
            "bootloader" => Ok(DeviceState::Bootloader),
            other => Err(Error::InvalidState(other.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_state_roundtrip() {
        for name in ["device", "recovery", "sideload", "bootloader"] {
            let state: DeviceState = name.parse().unwrap();
            assert_eq!(state.to_string(), name);
        }
    }

    #[test]
    fn test_state_rejects_unknown() {
        let err = "bogus".parse::<DeviceState>().unwrap_err();
        assert!(
            matches!(err, Error::InvalidState(ref s) if s == "bogus"),
            "unexpected error: {err}"
        );
    }

    #[test]
    fn test_wait_subcommands() {
        assert_eq!(
            DeviceState::Device.wait_subcommand(),
            Some("wait-for-device")
        );
        assert_eq!(
            DeviceState::Recovery.wait_subcommand(),
            Some("wait-for-recovery")
        );
        assert_eq!(
            DeviceState::Sideload.wait_subcommand(),
            Some("wait-for-sideload")
        );
        assert_eq!(DeviceState::Bootloader.wait_subcommand(), None);
    }
}
