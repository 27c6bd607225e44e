//! Running a tool as a plain child process

use super::{program_name, terminate, tool_command, tool_runtime, ToolError, ToolRunner};
use std::path::Path;
use std::process::{ExitStatus, Stdio};
use std::time::Duration;
use tokio::io::AsyncReadExt;

/// Runs tools as direct children, capturing stdout through a pipe
#[derive(Debug, Clone, Copy, Default)]
pub struct DirectRunner;

impl ToolRunner for DirectRunner {
    fn run_capturing(
        &self,
        timeout: Duration,
        program: &Path,
        args: &[String],
    ) -> Result<String, ToolError> {
        let (status, output) = run_to_completion(timeout, program, args)?;
        if !status.success() {
            return Err(ToolError::Failed {
                program: program_name(program),
                status,
                output,
            });
        }
        Ok(output)
    }

    fn name(&self) -> &'static str {
        "direct"
    }
}

/// Run a child to completion with a wall-clock limit
///
/// The limit covers both the child's exit and the end of its stdout, so a
/// helper left holding the pipe cannot stretch the run. At the deadline the
/// child's whole process group is killed.
pub(crate) fn run_to_completion(
    timeout: Duration,
    program: &Path,
    args: &[String],
) -> Result<(ExitStatus, String), ToolError> {
    let name = program_name(program);
    tracing::debug!(program = %program.display(), ?args, timeout_secs = timeout.as_secs(), "Running tool");

    let io_error = |source: std::io::Error| ToolError::Io {
        program: name.clone(),
        source,
    };

    let runtime = tool_runtime().map_err(io_error)?;

    let mut command = tool_command(program, args);
    command.stdout(Stdio::piped()).stderr(Stdio::inherit());
    let mut child = {
        let _guard = runtime.enter();
        tokio::process::Command::from(command).kill_on_drop(true).spawn()
    }
    .map_err(|source| ToolError::Spawn {
        program: name.clone(),
        source,
    })?;
    let pid = child.id();
    let mut stdout = child.stdout.take();
    let mut output = Vec::new();

    let finished = runtime.block_on(async {
        let run = async {
            let read = async {
                match stdout.as_mut() {
                    Some(pipe) => pipe.read_to_end(&mut output).await.map(|_| ()),
                    None => Ok(()),
                }
            };
            let (status, read) = tokio::join!(child.wait(), read);
            read.and(status)
        };
        tokio::time::timeout(timeout, run).await
    });

    match finished {
        Ok(status) => {
            let status = status.map_err(io_error)?;
            Ok((status, String::from_utf8_lossy(&output).into_owned()))
        }
        Err(_) => {
            tracing::warn!(program = %name, timeout_secs = timeout.as_secs(), "Tool timed out, killing");
            runtime.block_on(terminate(&mut child, pid, &name));
            Err(ToolError::Timeout {
                program: name.clone(),
                timeout,
            })
        }
    }
}
