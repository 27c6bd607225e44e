//! External tool execution
//!
//! This module contains:
//! - Running `xsig` and capturing its report ([`direct`], [`watched_dir`])
//! - Background processes with merged output capture ([`background`])
//! - Loading firmware through `xrun` ([`xrun`])
//!
//! Every wait on a child process is bounded by a timeout.

pub mod background;
pub mod direct;
pub mod watched_dir;
pub mod xrun;

pub use background::{BackgroundCapture, BackgroundProcess, StoppedCapture};
pub use direct::DirectRunner;
pub use watched_dir::WatchedDirRunner;
pub use xrun::Xrun;

use std::io::{BufRead, BufReader, Read};
use std::path::Path;
use std::process::{Command, ExitStatus, Stdio};
use std::time::Duration;
use thiserror::Error;

/// How long to wait for a killed child to be reaped
const REAP_TIMEOUT: Duration = Duration::from_secs(2);

/// Errors running an external tool
#[derive(Error, Debug)]
pub enum ToolError {
    #[error("Failed to start {program}: {source}")]
    Spawn {
        program: String,
        #[source]
        source: std::io::Error,
    },

    #[error("{program} did not finish within {}s", .timeout.as_secs())]
    Timeout { program: String, timeout: Duration },

    #[error("{program} exited with {status}")]
    Failed {
        program: String,
        status: ExitStatus,
        /// Whatever output was captured before exit
        output: String,
    },

    #[error(
        "{program} output still open {}s after stop, {} line(s) captured",
        .timeout.as_secs(),
        .partial.lines().count()
    )]
    OutputOpen {
        program: String,
        timeout: Duration,
        /// Lines received before the deadline
        partial: String,
    },

    #[error("I/O error running {program}: {source}")]
    Io {
        program: String,
        #[source]
        source: std::io::Error,
    },
}

/// Runs a signal tool and returns its standard output
pub trait ToolRunner {
    /// Run `program` with `args`, failing if it runs longer than `timeout`
    fn run_capturing(
        &self,
        timeout: Duration,
        program: &Path,
        args: &[String],
    ) -> Result<String, ToolError>;

    /// Short name for logs
    fn name(&self) -> &'static str;
}

/// Whether tools must be launched through the watched directory
///
/// On macOS CI agents (`JENKINS` set) child processes do not get microphone
/// access, so capture has to be run by the supervisor outside the agent.
pub fn needs_watched_dir() -> bool {
    cfg!(target_os = "macos") && std::env::var_os("JENKINS").is_some()
}

/// Pick the runner for this platform
pub fn select_tool_runner(config: &crate::HarnessConfig) -> Box<dyn ToolRunner> {
    if needs_watched_dir() {
        let dir = config.watched_dir();
        tracing::info!(dir = %dir.display(), "Launching tools through watched directory");
        Box::new(WatchedDirRunner::new(dir))
    } else {
        Box::new(DirectRunner)
    }
}

pub(crate) fn program_name(program: &Path) -> String {
    program
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| program.display().to_string())
}

/// Command for `program` with stdin closed, leading its own process group
///
/// Tools such as `xrun --xscope` start helpers that inherit the output pipes.
/// Signalling the group stops them together with the tool.
pub(crate) fn tool_command(program: &Path, args: &[String]) -> Command {
    let mut command = Command::new(program);
    command.args(args).stdin(Stdio::null());
    #[cfg(unix)]
    {
        use std::os::unix::process::CommandExt;
        command.process_group(0);
    }
    command
}

/// Send SIGKILL to the process group led by `pid`
#[cfg(unix)]
pub(crate) fn kill_process_group(pid: u32) -> std::io::Result<()> {
    let pgid = libc::pid_t::try_from(pid).map_err(std::io::Error::other)?;
    // A negative pid addresses the whole group
    let rc = unsafe { libc::kill(-pgid, libc::SIGKILL) };
    if rc == 0 {
        Ok(())
    } else {
        Err(std::io::Error::last_os_error())
    }
}

#[cfg(not(unix))]
pub(crate) fn kill_process_group(_pid: u32) -> std::io::Result<()> {
    Ok(())
}

/// Runtime driving one tool's child process and its timers
pub(crate) fn tool_runtime() -> std::io::Result<tokio::runtime::Runtime> {
    tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()
}

/// Kill the group led by `pid`, then reap the child
pub(crate) async fn terminate(child: &mut tokio::process::Child, pid: Option<u32>, program: &str) {
    if let Some(pid) = pid {
        if let Err(e) = kill_process_group(pid) {
            tracing::debug!(program, error = %e, "Process group already gone");
        }
    }
    let _ = child.start_kill();
    if tokio::time::timeout(REAP_TIMEOUT, child.wait()).await.is_err() {
        tracing::warn!(program, "Killed process was not reaped");
    }
}

/// Read `reader` line by line, passing each line without its terminator to `sink`
///
/// Stops at end of input, on a read error, or when `sink` returns false.
pub(crate) fn for_each_line<R, F>(reader: R, mut sink: F)
where
    R: Read,
    F: FnMut(String) -> bool,
{
    let mut reader = BufReader::new(reader);
    let mut buf = Vec::new();
    loop {
        buf.clear();
        match reader.read_until(b'\n', &mut buf) {
            Ok(0) | Err(_) => break,
            Ok(_) => {
                let line = String::from_utf8_lossy(&buf);
                let line = line.trim_end_matches(['\n', '\r']);
                if !sink(line.to_string()) {
                    break;
                }
            }
        }
    }
}
