use std::path::Path;

use crate::device::Device;
use crate::error::{Error, Result};
use crate::locate::{Tool, locate};
use crate::runner::Runner;
use crate::types::DeviceRecord;

/// Entry point: owns one runner per tool, both validated at construction.
/// A `Client` is either fully usable or never constructed.
#[derive(Debug)]
pub struct Client {
    adb: Runner,
    fastboot: Runner,
}

impl Client {
    /// Resolve both tools from the PATH environment variable.
    pub fn new() -> Result<Self> {
        Self::with_paths(None::<&Path>, None::<&Path>)
    }

    /// Resolve with optional custom paths, each either the executable file
    /// itself or a directory containing it. Fails with
    /// [`Error::ToolNotFound`] naming whichever tool cannot be resolved;
    /// adb is checked first.
    pub fn with_paths(
        adb_path: Option<impl AsRef<Path>>,
        fastboot_path: Option<impl AsRef<Path>>,
    ) -> Result<Self> {
        let adb = locate(Tool::Adb, adb_path.as_ref().map(AsRef::as_ref))
            .ok_or(Error::ToolNotFound { tool: Tool::Adb })?;
        let fastboot = locate(Tool::Fastboot, fastboot_path.as_ref().map(AsRef::as_ref))
            .ok_or(Error::ToolNotFound {
                tool: Tool::Fastboot,
            })?;
        log::debug!("resolved adb={adb:?} fastboot={fastboot:?}");
        Ok(Self {
            adb: Runner::new(Tool::Adb, adb),
            fastboot: Runner::new(Tool::Fastboot, fastboot),
        })
    }

    pub fn adb(&self) -> &Runner {
        &self.adb
    }

    pub fn fastboot(&self) -> &Runner {
        &self.fastboot
    }

    /// Devices visible to adb (normal, recovery and sideload states all
    /// appear here). An empty vector means no devices are attached.
    pub async fn list_devices(&self) -> Result<Vec<DeviceRecord>> {
        let res = self.adb.run(["devices"]).await?;
        Ok(Self::parse_adb_devices(&res.stdout))
    }

    /// Devices visible to fastboot, i.e. in bootloader mode.
    pub async fn list_bootloader_devices(&self) -> Result<Vec<DeviceRecord>> {
        let res = self.fastboot.run(["devices"]).await?;
        Ok(Self::parse_fastboot_devices(&res.stdout))
    }

    /// Parse `adb devices` output: one header line, then one
    /// whitespace-separated `serial state` row per device.
    pub fn parse_adb_devices(output: &str) -> Vec<DeviceRecord> {
        parse_device_table(output, true)
    }

    /// Parse `fastboot devices` output: same rows, no header line.
    pub fn parse_fastboot_devices(output: &str) -> Vec<DeviceRecord> {
        parse_device_table(output, false)
    }

    /// Start the adb daemon. Success is "did not error".
    pub async fn start_server(&self) -> Result<()> {
        self.adb.run(["start-server"]).await?;
        Ok(())
    }

    /// Stop the adb daemon.
    pub async fn kill_server(&self) -> Result<()> {
        self.adb.run(["kill-server"]).await?;
        Ok(())
    }

    /// Handle for one attached device. The serial is taken on trust: it is
    /// not checked against the current device list, and the handle goes
    /// stale silently if the device disconnects.
    pub fn device(&self, serial: impl Into<String>) -> Device<'_> {
        Device::new(self, serial.into())
    }
}

fn parse_device_table(output: &str, skip_header: bool) -> Vec<DeviceRecord> {
    output
        .trim()
        .lines()
        .skip(if skip_header { 1 } else { 0 })
        .filter_map(|line| {
            let mut parts = line.split_whitespace();
            match (parts.next(), parts.next()) {
                (Some(serial), Some(state)) => Some(DeviceRecord {
                    serial: serial.to_string(),
                    state: state.to_string(),
                }),
                _ => None,
            }
        })
        .collect()
}
