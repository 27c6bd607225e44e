//! Running a tool through a directory watched by an outside supervisor
//!
//! On macOS CI agents a child process cannot get microphone access. A
//! supervisor running in the user session executes every script dropped into
//! the watched directory. The runner writes a script that redirects the tool's
//! stdout into a temporary file, waits for the run to finish, and reads the
//! file back.
//!
//! There is no handshake with the supervisor: if it is missing, the capture
//! simply comes back empty.

use super::{program_name, ToolError, ToolRunner};
use std::io::Write;
use std::path::{Path, PathBuf};
use std::time::Duration;

/// Extra time allowed for the supervisor to pick up the script
const SUPERVISOR_GRACE: Duration = Duration::from_secs(2);

/// Launches tools by dropping scripts into a watched directory
#[derive(Debug, Clone)]
pub struct WatchedDirRunner {
    dir: PathBuf,
    grace: Duration,
}

impl WatchedDirRunner {
    /// Create a runner using `dir` as the watched directory
    pub fn new(dir: PathBuf) -> Self {
        Self {
            dir,
            grace: SUPERVISOR_GRACE,
        }
    }

    /// Override the supervisor grace period
    pub fn with_grace(mut self, grace: Duration) -> Self {
        self.grace = grace;
        self
    }
}

impl ToolRunner for WatchedDirRunner {
    fn run_capturing(
        &self,
        timeout: Duration,
        program: &Path,
        args: &[String],
    ) -> Result<String, ToolError> {
        let name = program_name(program);
        let io_error = |source: std::io::Error| ToolError::Io {
            program: name.clone(),
            source,
        };

        let output = tempfile::NamedTempFile::new().map_err(io_error)?;
        let script_text = render_script(program, args, output.path());

        let mut script = tempfile::Builder::new()
            .prefix("analogue-harness-")
            .suffix(".sh")
            .tempfile_in(&self.dir)
            .map_err(io_error)?;
        script
            .write_all(script_text.as_bytes())
            .and_then(|_| script.flush())
            .map_err(io_error)?;
        let (_, script_path) = script.keep().map_err(|e| io_error(e.error))?;
        make_executable(&script_path).map_err(io_error)?;

        tracing::info!(
            script = %script_path.display(),
            wait_secs = (timeout + self.grace).as_secs(),
            "Waiting for supervisor to run tool"
        );
        std::thread::sleep(timeout + self.grace);

        let captured = std::fs::read(output.path()).map_err(io_error)?;
        if captured.is_empty() {
            tracing::warn!(program = %name, "Watched directory run produced no output");
        }
        Ok(String::from_utf8_lossy(&captured).into_owned())
    }

    fn name(&self) -> &'static str {
        "watched-dir"
    }
}

/// Bash script running `program` with stdout redirected to `output`
pub fn render_script(program: &Path, args: &[String], output: &Path) -> String {
    let mut command = shell_quote(&program.display().to_string());
    for arg in args {
        command.push(' ');
        command.push_str(&shell_quote(arg));
    }
    format!(
        "#!/bin/bash\n{} > {}\n",
        command,
        shell_quote(&output.display().to_string())
    )
}

/// Quote a word for bash, leaving plain words untouched
fn shell_quote(word: &str) -> String {
    let plain = !word.is_empty()
        && word
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || "/._-+=:,@%".contains(c));
    if plain {
        word.to_string()
    } else {
        format!("'{}'", word.replace('\'', r"'\''"))
    }
}

#[cfg(unix)]
fn make_executable(path: &Path) -> std::io::Result<()> {
    use std::os::unix::fs::PermissionsExt;
    std::fs::set_permissions(path, std::fs::Permissions::from_mode(0o700))
}

#[cfg(not(unix))]
fn make_executable(_path: &Path) -> std::io::Result<()> {
    Ok(())
}
