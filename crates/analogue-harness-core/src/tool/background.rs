//! Background processes
//!
//! [`BackgroundCapture`] runs a process whose stdout and stderr are merged line
//! by line into one buffer. The buffer is only handed out by
//! [`StoppedCapture::join`], which is reachable only after
//! [`BackgroundCapture::signal_stop`], so a partially written buffer is never read.
//!
//! [`BackgroundProcess`] runs a process whose output is not needed and waits
//! for it with a timeout.
//!
//! Both lead their own process group; stopping one stops everything it started.

use super::{
    for_each_line, kill_process_group, program_name, terminate, tool_command, tool_runtime,
    ToolError,
};
use crossbeam_channel::{Receiver, RecvTimeoutError};
use std::path::Path;
use std::process::{Child, ExitStatus, Stdio};
use std::thread::JoinHandle;
use std::time::{Duration, Instant};

/// Running process with merged output capture
pub struct BackgroundCapture {
    program: String,
    child: Option<Child>,
    lines: Receiver<String>,
    readers: Vec<JoinHandle<()>>,
}

impl BackgroundCapture {
    /// Spawn `program`, capturing stdout and stderr
    pub fn spawn(program: &Path, args: &[String]) -> Result<Self, ToolError> {
        let name = program_name(program);
        tracing::debug!(program = %program.display(), ?args, "Spawning background capture");

        let mut child = tool_command(program, args)
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .spawn()
            .map_err(|source| ToolError::Spawn {
                program: name.clone(),
                source,
            })?;

        let (tx, lines) = crossbeam_channel::unbounded();
        let mut readers = Vec::with_capacity(2);

        if let Some(stdout) = child.stdout.take() {
            let tx = tx.clone();
            readers.push(std::thread::spawn(move || {
                for_each_line(stdout, |line| tx.send(line).is_ok())
            }));
        }
        if let Some(stderr) = child.stderr.take() {
            let tx = tx.clone();
            readers.push(std::thread::spawn(move || {
                for_each_line(stderr, |line| tx.send(line).is_ok())
            }));
        }

        Ok(Self {
            program: name,
            child: Some(child),
            lines,
            readers,
        })
    }

    /// Whether the process is still running
    pub fn is_running(&mut self) -> bool {
        match self.child.as_mut() {
            Some(child) => matches!(child.try_wait(), Ok(None)),
            None => false,
        }
    }

    /// Kill the process group and reap the process
    ///
    /// A process that already exited is not an error; its status is kept.
    pub fn signal_stop(mut self) -> StoppedCapture {
        let status = self.child.take().and_then(|mut child| {
            stop_child(&mut child, &self.program);
            child.wait().ok()
        });
        tracing::debug!(program = %self.program, ?status, "Background capture stopped");

        StoppedCapture {
            program: std::mem::take(&mut self.program),
            status,
            lines: self.lines.clone(),
            readers: std::mem::take(&mut self.readers),
        }
    }
}

impl Drop for BackgroundCapture {
    fn drop(&mut self) {
        if let Some(mut child) = self.child.take() {
            stop_child(&mut child, &self.program);
            let _ = child.wait();
        }
    }
}

fn stop_child(child: &mut Child, program: &str) {
    if let Err(e) = kill_process_group(child.id()) {
        tracing::debug!(program, error = %e, "Process group already gone");
    }
    if let Err(e) = child.kill() {
        tracing::debug!(program, error = %e, "Kill failed, process already exited");
    }
}

/// A stopped capture whose output can be collected
pub struct StoppedCapture {
    program: String,
    status: Option<ExitStatus>,
    lines: Receiver<String>,
    readers: Vec<JoinHandle<()>>,
}

impl StoppedCapture {
    /// Exit status of the stopped process, if it could be reaped
    pub fn exit_status(&self) -> Option<ExitStatus> {
        self.status
    }

    /// Wait for the output pipes to close and return everything captured
    ///
    /// Lines are joined with `\n` in the order they arrived. If the pipes are
    /// still open after `timeout` the lines received so far come back inside
    /// [`ToolError::OutputOpen`].
    pub fn join(self, timeout: Duration) -> Result<String, ToolError> {
        let deadline = Instant::now() + timeout;
        let mut captured = Vec::new();

        loop {
            match self.lines.recv_deadline(deadline) {
                Ok(line) => captured.push(line),
                Err(RecvTimeoutError::Disconnected) => break,
                Err(RecvTimeoutError::Timeout) => {
                    tracing::warn!(
                        program = %self.program,
                        lines = captured.len(),
                        "Output still open after stop"
                    );
                    return Err(ToolError::OutputOpen {
                        program: self.program,
                        timeout,
                        partial: captured.join("\n"),
                    });
                }
            }
        }

        for reader in self.readers {
            let _ = reader.join();
        }

        tracing::debug!(program = %self.program, lines = captured.len(), "Background output collected");
        Ok(captured.join("\n"))
    }
}

/// Running process whose output is discarded
pub struct BackgroundProcess {
    program: String,
    pid: Option<u32>,
    child: tokio::process::Child,
    runtime: tokio::runtime::Runtime,
}

impl BackgroundProcess {
    /// Spawn `program` with stdio detached
    pub fn spawn(program: &Path, args: &[String]) -> Result<Self, ToolError> {
        let name = program_name(program);
        tracing::debug!(program = %program.display(), ?args, "Spawning background process");

        let runtime = tool_runtime().map_err(|source| ToolError::Io {
            program: name.clone(),
            source,
        })?;
        let mut command = tool_command(program, args);
        command.stdout(Stdio::null()).stderr(Stdio::null());
        let child = {
            let _guard = runtime.enter();
            tokio::process::Command::from(command).kill_on_drop(true).spawn()
        }
        .map_err(|source| ToolError::Spawn {
            program: name.clone(),
            source,
        })?;

        Ok(Self {
            program: name,
            pid: child.id(),
            child,
            runtime,
        })
    }

    /// Wait for the process to exit successfully within `timeout`
    ///
    /// A process still running at the deadline is killed with its group.
    pub fn wait(mut self, timeout: Duration) -> Result<ExitStatus, ToolError> {
        let program = std::mem::take(&mut self.program);
        let child = &mut self.child;
        let pid = self.pid;

        let status = self.runtime.block_on(async {
            match tokio::time::timeout(timeout, child.wait()).await {
                Ok(status) => Some(status),
                Err(_) => {
                    terminate(&mut *child, pid, &program).await;
                    None
                }
            }
        });
        self.pid = None;

        match status {
            Some(Ok(status)) if status.success() => Ok(status),
            Some(Ok(status)) => Err(ToolError::Failed {
                program,
                status,
                output: String::new(),
            }),
            Some(Err(source)) => Err(ToolError::Io { program, source }),
            None => Err(ToolError::Timeout { program, timeout }),
        }
    }
}

impl Drop for BackgroundProcess {
    fn drop(&mut self) {
        if let Some(pid) = self.pid.take() {
            let _ = kill_process_group(pid);
        }
    }
}
