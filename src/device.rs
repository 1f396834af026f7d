use std::ffi::OsStr;
use std::path::Path;
use std::time::Duration;

use crate::client::Client;
use crate::error::{Error, Result};
use crate::runner::Runner;
use crate::types::DeviceState;

/// Interval between fastboot listing rounds while waiting for bootloader mode.
const BOOTLOADER_POLL_INTERVAL: Duration = Duration::from_millis(250);

/// One attached device, addressed by serial. All operations are
/// device-scoped adb invocations (`-s <serial>`); fastboot-mode devices are
/// only enumerated through [`Client::list_bootloader_devices`], not driven
/// from here.
pub struct Device<'c> {
    client: &'c Client,
    serial: String,
    adb: Runner,
}

impl<'c> Device<'c> {
    pub(crate) fn new(client: &'c Client, serial: String) -> Self {
        let adb = client.adb().clone();
        Self {
            client,
            serial,
            adb,
        }
    }

    pub fn serial(&self) -> &str {
        &self.serial
    }

    /// Reboot the device. `mode` is passed through unvalidated: "" for a
    /// normal reboot, or any target the tool accepts ("bootloader",
    /// "recovery", ...). An unknown mode surfaces as the tool's own error.
    pub async fn reboot(&self, mode: &str) -> Result<()> {
        let args: &[&str] = if mode.is_empty() {
            &["reboot"]
        } else {
            &["reboot", mode]
        };
        self.adb.run_on_device(&self.serial, args).await?;
        Ok(())
    }

    /// Block until the device reaches `state`.
    ///
    /// Device, recovery and sideload delegate to adb's native
    /// `wait-for-*` sub-commands. Bootloader has no native wait, so it
    /// polls the fastboot device listing every 250 ms until this serial
    /// appears.
    ///
    /// With `timeout` of `None` the wait is unbounded and can only be
    /// stopped by dropping the future or exiting the process; pass
    /// `Some(duration)` to get [`Error::WaitTimeout`] instead.
    pub async fn wait_for_state(
        &self,
        state: DeviceState,
        timeout: Option<Duration>,
    ) -> Result<()> {
        match timeout {
            Some(duration) => tokio::time::timeout(duration, self.wait_inner(state))
                .await
                .map_err(|_| Error::WaitTimeout { duration, state })?,
            None => self.wait_inner(state).await,
        }
    }

    async fn wait_inner(&self, state: DeviceState) -> Result<()> {
        match state.wait_subcommand() {
            Some(sub) => {
                self.adb.run_on_device(&self.serial, [sub]).await?;
                Ok(())
            }
            None => self.wait_for_bootloader().await,
        }
    }

    async fn wait_for_bootloader(&self) -> Result<()> {
        loop {
            let devices = self.client.list_bootloader_devices().await?;
            if devices.iter().any(|d| d.serial == self.serial) {
                return Ok(());
            }
            log::trace!("{} not in fastboot listing yet, retrying", self.serial);
            tokio::time::sleep(BOOTLOADER_POLL_INTERVAL).await;
        }
    }

    /// Copy a local file or directory to the device. Paths are passed as
    /// real argument-vector entries, so spaces in either survive.
    pub async fn push(&self, source: &Path, destination: &str) -> Result<()> {
        self.adb
            .run_on_device(
                &self.serial,
                [
                    OsStr::new("push"),
                    source.as_os_str(),
                    OsStr::new(destination),
                ],
            )
            .await?;
        Ok(())
    }

    /// Copy a file or directory from the device to a local path.
    pub async fn pull(&self, source: &str, destination: &Path) -> Result<()> {
        self.adb
            .run_on_device(
                &self.serial,
                [
                    OsStr::new("pull"),
                    OsStr::new(source),
                    destination.as_os_str(),
                ],
            )
            .await?;
        Ok(())
    }
}
