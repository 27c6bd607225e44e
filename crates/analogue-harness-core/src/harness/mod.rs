//! Scenario orchestration
//!
//! This module contains:
//! - Exclusive allocation of the two xTAG adapters ([`adapters`])
//! - The input-direction run: xsig captures what the harness generates
//! - The output-direction run: the harness captures what xsig generates
//!
//! Every run resolves its product name and expectations before touching any
//! hardware, so a bad scenario never leaves a board half flashed.

pub mod adapters;
mod input;
mod output;

pub use adapters::{AdapterLease, AdapterPool};

use crate::analysis::{Direction, ExpectationSet, Verdict};
use crate::config::{ConfigError, HarnessConfig};
use crate::device::{default_enumerator, wait_for_device, DeviceEnumerator};
use crate::report::{RunReport, ScenarioOutcome, ScenarioReport};
use crate::scenario::{harness_firmware_path, Scenario};
use crate::tool::{select_tool_runner, ToolRunner, Xrun};
use anyhow::{Context, Result};
use std::path::{Path, PathBuf};
use std::time::{Duration, Instant};

/// Drives both boards and the signal tool through test scenarios
pub struct Harness {
    xrun: Xrun,
    xsig: PathBuf,
    xmos_root: PathBuf,
    xsig_config_root: PathBuf,
    device_timeout: Duration,
    enumerator: Box<dyn DeviceEnumerator>,
    runner: Box<dyn ToolRunner>,
}

/// Everything a run needs, resolved up front
struct Prepared {
    product: &'static str,
    firmware: PathBuf,
    xsig_config: PathBuf,
    expected: Vec<u32>,
}

impl Harness {
    /// Create a harness from config using the platform's enumerator and tool runner
    pub fn new(config: &HarnessConfig) -> Result<Self, ConfigError> {
        Ok(Self {
            xrun: Xrun::new(config.xrun_path.clone(), config.flash_timeout()),
            xsig: config.xsig_path.clone(),
            xmos_root: config.xmos_root()?.to_path_buf(),
            xsig_config_root: config.xsig_config_root()?,
            device_timeout: config.device_timeout(),
            enumerator: default_enumerator(),
            runner: select_tool_runner(config),
        })
    }

    /// Replace the audio host enumerator
    pub fn with_enumerator(mut self, enumerator: Box<dyn DeviceEnumerator>) -> Self {
        self.enumerator = enumerator;
        self
    }

    /// Replace the runner used to launch `xsig` in input runs
    pub fn with_runner(mut self, runner: Box<dyn ToolRunner>) -> Self {
        self.runner = runner;
        self
    }

    pub fn xmos_root(&self) -> &Path {
        &self.xmos_root
    }

    /// Run one scenario with both adapters held
    ///
    /// `Ok` carries the analyser verdict; `Err` means the run could not be
    /// completed (configuration, flashing, enumeration or tool failure).
    pub fn run_scenario(&mut self, scenario: &Scenario, lease: &AdapterLease<'_>) -> Result<Verdict> {
        tracing::info!(scenario = %scenario, "Starting scenario");
        let verdict = match scenario.direction {
            Direction::Input => self.run_input(scenario, lease)?,
            Direction::Output => self.run_output(scenario, lease)?,
        };
        if verdict.is_pass() {
            tracing::info!(scenario = %scenario, "Scenario passed");
        } else {
            tracing::warn!(scenario = %scenario, failures = verdict.failures().len(), "Scenario failed");
        }
        Ok(verdict)
    }

    /// Run scenarios one after another, recording every outcome
    ///
    /// A scenario that errors does not stop the run.
    pub fn run_all(&mut self, scenarios: &[Scenario], pool: &mut AdapterPool) -> RunReport {
        let mut report = RunReport::new();
        for scenario in scenarios {
            let start = Instant::now();
            let result = {
                let lease = pool.acquire();
                self.run_scenario(scenario, &lease)
            };
            let outcome = match result {
                Ok(verdict) => ScenarioOutcome::from(verdict),
                Err(e) => {
                    let reason = format!("{:#}", e);
                    tracing::error!(scenario = %scenario, error = %reason, "Scenario errored");
                    ScenarioOutcome::Errored { reason }
                }
            };
            report.record(ScenarioReport::new(scenario, outcome, start.elapsed()));
        }
        report.finish();
        report
    }

    fn prepare(&self, scenario: &Scenario) -> Result<Prepared> {
        let product = scenario
            .product_name()
            .with_context(|| format!("Resolving product name for {}", scenario))?;
        let xsig_config = scenario.expectation_path(&self.xsig_config_root);
        let expected = ExpectationSet::load(&xsig_config)?
            .frequencies(scenario.direction)?
            .to_vec();

        Ok(Prepared {
            product,
            firmware: scenario.firmware_path(&self.xmos_root),
            xsig_config,
            expected,
        })
    }

    fn harness_firmware(&self) -> PathBuf {
        harness_firmware_path(&self.xmos_root, crate::HARNESS_BOARD, None)
    }

    fn wait_for(&mut self, product: &str) -> Result<()> {
        wait_for_device(self.enumerator.as_mut(), product, self.device_timeout)?;
        Ok(())
    }
}

/// Arguments for `xsig`: sample rate, duration in milliseconds, config file
fn xsig_args(sample_rate: u32, duration_ms: u64, config: &Path) -> Vec<String> {
    vec![
        sample_rate.to_string(),
        duration_ms.to_string(),
        config.display().to_string(),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_xsig_args() {
        assert_eq!(
            xsig_args(48000, 10000, Path::new("/cfg/mc_analogue_input_2ch.json")),
            vec!["48000", "10000", "/cfg/mc_analogue_input_2ch.json"]
        );
    }

    #[test]
    fn test_new_requires_xmos_root() {
        let err = Harness::new(&HarnessConfig::default()).err();
        assert_eq!(err, Some(ConfigError::MissingXmosRoot));
    }
}
