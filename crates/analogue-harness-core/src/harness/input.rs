//! Input direction: the harness plays tones into the device's analogue inputs
//! and `xsig` analyses what arrives over USB.

use super::{xsig_args, AdapterLease, Harness};
use crate::analysis::{verify, Verdict};
use crate::scenario::Scenario;
use anyhow::{Context, Result};
use std::time::Duration;

/// Slack on top of the signal duration before xsig is considered hung
const XSIG_SLACK: Duration = Duration::from_secs(5);

impl Harness {
    pub(super) fn run_input(&mut self, scenario: &Scenario, lease: &AdapterLease<'_>) -> Result<Verdict> {
        let prepared = self.prepare(scenario)?;

        self.xrun
            .load(lease.harness(), &self.harness_firmware())
            .context("Loading harness firmware")?;
        self.xrun
            .load(lease.dut(), &prepared.firmware)
            .context("Loading device firmware")?;
        self.wait_for(prepared.product)?;

        let duration = Duration::from_secs(u64::from(scenario.duration_secs));
        let args = xsig_args(
            scenario.sample_rate,
            duration.as_millis() as u64,
            &prepared.xsig_config,
        );
        tracing::info!(runner = self.runner.name(), ?args, "Capturing input with xsig");
        let output = self
            .runner
            .run_capturing(duration + XSIG_SLACK, &self.xsig, &args)
            .context("Running xsig")?;

        let lines: Vec<&str> = output.lines().collect();
        tracing::debug!(lines = lines.len(), "xsig output captured");
        Ok(verify(&lines, &prepared.expected))
    }
}
