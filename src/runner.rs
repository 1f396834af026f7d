// Subprocess invocation for one resolved tool executable.
// Every call spawns a fresh process; there is no pooling and no
// persistent connection beyond whatever the adb daemon keeps itself.

use std::ffi::OsStr;
use std::path::{Path, PathBuf};
use std::process::ExitStatus;

use tokio::process::Command;

use crate::error::{Error, Result};
use crate::locate::Tool;

/// Captured output of one subprocess invocation.
#[derive(Debug, Clone)]
pub struct CommandResult {
    pub stdout: String,
    pub stderr: String,
    pub status: ExitStatus,
}

/// Runs a located adb or fastboot executable.
#[derive(Debug, Clone)]
pub struct Runner {
    tool: Tool,
    path: PathBuf,
}

impl Runner {
    pub(crate) fn new(tool: Tool, path: PathBuf) -> Self {
        Self { tool, path }
    }

    pub fn tool(&self) -> Tool {
        self.tool
    }

    /// The resolved executable this runner invokes.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Run the tool with an argument vector. Blocks (asynchronously) until
    /// the process exits. A non-zero exit status fails with
    /// [`Error::CommandFailed`] carrying the captured stderr verbatim.
    pub async fn run<I, S>(&self, args: I) -> Result<CommandResult>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<OsStr>,
    {
        let mut cmd = Command::new(&self.path);
        cmd.args(args);
        self.exec(cmd).await
    }

    /// Convenience for whole command lines: splits on whitespace and
    /// delegates to [`Runner::run`]. Arguments containing embedded spaces
    /// cannot be expressed this way; use `run` with a vector for those.
    pub async fn run_line(&self, command: &str) -> Result<CommandResult> {
        self.run(command.split_whitespace()).await
    }

    /// Device-scoped variant: inserts `-s <serial>` before the arguments.
    pub async fn run_on_device<I, S>(&self, serial: &str, args: I) -> Result<CommandResult>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<OsStr>,
    {
        let mut cmd = Command::new(&self.path);
        cmd.arg("-s").arg(serial).args(args);
        self.exec(cmd).await
    }

    async fn exec(&self, mut cmd: Command) -> Result<CommandResult> {
        log::debug!(
            "running {} {:?}",
            self.tool,
            cmd.as_std().get_args().collect::<Vec<_>>()
        );
        let output = cmd.output().await.map_err(|source| Error::Launch {
            tool: self.tool,
            source,
        })?;
        let stdout = String::from_utf8_lossy(&output.stdout).into_owned();
        let stderr = String::from_utf8_lossy(&output.stderr).into_owned();
        if !output.status.success() {
            log::debug!("{} exited with {}: {}", self.tool, output.status, stderr);
            return Err(Error::CommandFailed { stderr });
        }
        Ok(CommandResult {
            stdout,
            stderr,
            status: output.status,
        })
    }
}
