//! Output direction: `xsig` plays tones out of the device and the harness
//! board reports what it measured over xSCOPE.

use super::{xsig_args, AdapterLease, Harness};
use crate::analysis::{verify, Verdict};
use crate::scenario::Scenario;
use crate::tool::BackgroundProcess;
use anyhow::{Context, Result};
use std::time::Duration;

/// xsig keeps playing this long after the capture window closes
const XSIG_OVERRUN: Duration = Duration::from_secs(2);

/// Bound on collecting the harness output once it is stopped
const CAPTURE_JOIN_TIMEOUT: Duration = Duration::from_secs(5);

/// Bound on xsig exiting after the capture window
const XSIG_EXIT_TIMEOUT: Duration = Duration::from_secs(5);

impl Harness {
    pub(super) fn run_output(&mut self, scenario: &Scenario, lease: &AdapterLease<'_>) -> Result<Verdict> {
        let prepared = self.prepare(scenario)?;

        self.xrun
            .load(lease.dut(), &prepared.firmware)
            .context("Loading device firmware")?;
        self.wait_for(prepared.product)?;

        let capture = self
            .xrun
            .load_with_xscope(lease.harness(), &self.harness_firmware())
            .context("Starting harness capture")?;

        let duration = Duration::from_secs(u64::from(scenario.duration_secs));
        let args = xsig_args(
            scenario.sample_rate,
            (duration + XSIG_OVERRUN).as_millis() as u64,
            &prepared.xsig_config,
        );
        tracing::info!(?args, "Playing output with xsig");
        let xsig = BackgroundProcess::spawn(&self.xsig, &args).context("Starting xsig")?;

        std::thread::sleep(duration);

        let output = capture
            .signal_stop()
            .join(CAPTURE_JOIN_TIMEOUT)
            .context("Collecting harness output")?;
        xsig.wait(XSIG_EXIT_TIMEOUT).context("Waiting for xsig")?;

        let lines: Vec<&str> = output.lines().collect();
        tracing::debug!(lines = lines.len(), "Harness output captured");
        Ok(verify(&lines, &prepared.expected))
    }
}
