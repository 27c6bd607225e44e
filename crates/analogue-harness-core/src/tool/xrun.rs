//! Loading firmware onto boards with `xrun`

use super::direct::run_to_completion;
use super::{program_name, BackgroundCapture, ToolError};
use std::path::{Path, PathBuf};
use std::time::Duration;

/// The `xrun` loader, addressed by xTAG adapter id
#[derive(Debug, Clone)]
pub struct Xrun {
    program: PathBuf,
    timeout: Duration,
}

impl Xrun {
    /// Create a loader using `program`, allowing `timeout` per load
    pub fn new(program: PathBuf, timeout: Duration) -> Self {
        Self { program, timeout }
    }

    /// Load `firmware` onto the board behind `adapter_id` and return once loaded
    pub fn load(&self, adapter_id: &str, firmware: &Path) -> Result<(), ToolError> {
        tracing::info!(adapter = adapter_id, firmware = %firmware.display(), "Loading firmware");
        let args = load_args(adapter_id, firmware, false);
        let (status, output) = run_to_completion(self.timeout, &self.program, &args)?;
        if !status.success() {
            return Err(ToolError::Failed {
                program: program_name(&self.program),
                status,
                output,
            });
        }
        Ok(())
    }

    /// Load `firmware` with xSCOPE attached, capturing the board's output
    ///
    /// `xrun --xscope` stays attached until stopped.
    pub fn load_with_xscope(
        &self,
        adapter_id: &str,
        firmware: &Path,
    ) -> Result<BackgroundCapture, ToolError> {
        tracing::info!(adapter = adapter_id, firmware = %firmware.display(), "Loading firmware with xSCOPE");
        BackgroundCapture::spawn(&self.program, &load_args(adapter_id, firmware, true))
    }
}

fn load_args(adapter_id: &str, firmware: &Path, xscope: bool) -> Vec<String> {
    let mut args = vec!["--adapter-id".to_string(), adapter_id.to_string()];
    if xscope {
        args.push("--xscope".to_string());
    }
    args.push(firmware.display().to_string());
    args
}
