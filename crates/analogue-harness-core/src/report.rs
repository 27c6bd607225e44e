//! Run reports
//!
//! One [`ScenarioReport`] per scenario, collected into a [`RunReport`] that
//! renders as text for the terminal and serializes to JSON for CI artifacts.

use crate::analysis::{Direction, Verdict};
use crate::scenario::{Scenario, Tier};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt::Write as _;
use std::path::Path;
use std::time::Duration;

/// How a scenario ended
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum ScenarioOutcome {
    /// Analyser output matched the expectations
    Passed,
    /// Analyser output was checked and did not match
    Failed { failures: Vec<String> },
    /// The run could not be completed
    Errored { reason: String },
}

impl ScenarioOutcome {
    pub fn is_passed(&self) -> bool {
        matches!(self, ScenarioOutcome::Passed)
    }

    pub fn label(&self) -> &'static str {
        match self {
            ScenarioOutcome::Passed => "PASS",
            ScenarioOutcome::Failed { .. } => "FAIL",
            ScenarioOutcome::Errored { .. } => "ERROR",
        }
    }
}

impl From<Verdict> for ScenarioOutcome {
    fn from(verdict: Verdict) -> Self {
        if verdict.is_pass() {
            ScenarioOutcome::Passed
        } else {
            ScenarioOutcome::Failed {
                failures: verdict.messages(),
            }
        }
    }
}

/// Result of a single scenario
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScenarioReport {
    pub id: String,
    pub direction: Direction,
    pub tier: Tier,
    #[serde(flatten)]
    pub outcome: ScenarioOutcome,
    pub elapsed_ms: u64,
}

impl ScenarioReport {
    pub fn new(scenario: &Scenario, outcome: ScenarioOutcome, elapsed: Duration) -> Self {
        Self {
            id: scenario.id(),
            direction: scenario.direction,
            tier: scenario.tier,
            outcome,
            elapsed_ms: elapsed.as_millis() as u64,
        }
    }
}

/// Results of a whole run
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RunReport {
    pub started_at: DateTime<Utc>,
    pub finished_at: Option<DateTime<Utc>>,
    pub scenarios: Vec<ScenarioReport>,
}

impl Default for RunReport {
    fn default() -> Self {
        Self::new()
    }
}

impl RunReport {
    /// Start a report timestamped now
    pub fn new() -> Self {
        Self {
            started_at: Utc::now(),
            finished_at: None,
            scenarios: Vec::new(),
        }
    }

    pub fn record(&mut self, report: ScenarioReport) {
        self.scenarios.push(report);
    }

    /// Stamp the end time
    pub fn finish(&mut self) {
        self.finished_at = Some(Utc::now());
    }

    pub fn passed(&self) -> usize {
        self.count(|o| matches!(o, ScenarioOutcome::Passed))
    }

    pub fn failed(&self) -> usize {
        self.count(|o| matches!(o, ScenarioOutcome::Failed { .. }))
    }

    pub fn errored(&self) -> usize {
        self.count(|o| matches!(o, ScenarioOutcome::Errored { .. }))
    }

    /// True when every recorded scenario passed (vacuously true when empty)
    pub fn all_passed(&self) -> bool {
        self.scenarios.iter().all(|s| s.outcome.is_passed())
    }

    fn count(&self, pred: impl Fn(&ScenarioOutcome) -> bool) -> usize {
        self.scenarios.iter().filter(|s| pred(&s.outcome)).count()
    }

    /// Human-readable summary, one line per scenario followed by its reasons
    pub fn render(&self) -> String {
        let mut out = String::new();
        for scenario in &self.scenarios {
            let _ = writeln!(
                out,
                "{:<5} {} ({:.1}s)",
                scenario.outcome.label(),
                scenario.id,
                scenario.elapsed_ms as f64 / 1000.0
            );
            match &scenario.outcome {
                ScenarioOutcome::Passed => {}
                ScenarioOutcome::Failed { failures } => {
                    for failure in failures {
                        let _ = writeln!(out, "      {}", failure);
                    }
                }
                ScenarioOutcome::Errored { reason } => {
                    let _ = writeln!(out, "      {}", reason);
                }
            }
        }
        let _ = writeln!(
            out,
            "{} passed, {} failed, {} errored",
            self.passed(),
            self.failed(),
            self.errored()
        );
        out
    }

    /// Write the report as pretty JSON, creating parent directories if needed
    pub fn save(&self, path: &Path) -> anyhow::Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(path, serde_json::to_string_pretty(self)?)?;
        tracing::info!(path = %path.display(), scenarios = self.scenarios.len(), "Run report saved");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analysis::verify;
    use crate::scenario::Board;

    fn scenario() -> Scenario {
        Scenario {
            direction: Direction::Input,
            tier: Tier::Smoke,
            board: Board::Xk216Mc,
            config: "2i8o8xxxxx_tdm8",
            sample_rate: 48000,
            duration_secs: 10,
            expectation_file: "mc_analogue_input_8ch.json",
        }
    }

    #[test]
    fn test_outcome_from_verdict() {
        let pass = verify(&["Channel 0: Frequency 1000 Hz"], &[1000]);
        assert_eq!(ScenarioOutcome::from(pass), ScenarioOutcome::Passed);

        let fail = verify::<&str>(&[], &[1000]);
        assert_eq!(
            ScenarioOutcome::from(fail),
            ScenarioOutcome::Failed {
                failures: vec!["No signal seen on channel 0".to_string()]
            }
        );
    }

    #[test]
    fn test_counts_and_render() {
        let mut report = RunReport::new();
        report.record(ScenarioReport::new(
            &scenario(),
            ScenarioOutcome::Passed,
            Duration::from_millis(12_500),
        ));
        report.record(ScenarioReport::new(
            &scenario(),
            ScenarioOutcome::Errored {
                reason: "Loading device firmware: xrun exited with exit status: 1".into(),
            },
            Duration::from_millis(300),
        ));
        report.finish();

        assert_eq!(report.passed(), 1);
        assert_eq!(report.failed(), 0);
        assert_eq!(report.errored(), 1);
        assert!(!report.all_passed());

        let text = report.render();
        assert!(text.contains("PASS  in-xk_216_mc-2i8o8xxxxx_tdm8-48000-10s (12.5s)"));
        assert!(text.contains("      Loading device firmware"));
        assert!(text.ends_with("1 passed, 0 failed, 1 errored\n"));
    }

    #[test]
    fn test_json_shape() {
        let report = ScenarioReport::new(
            &scenario(),
            ScenarioOutcome::Failed {
                failures: vec!["Channel 3: Lost signal".into()],
            },
            Duration::from_secs(1),
        );
        let json = serde_json::to_value(&report).unwrap();
        assert_eq!(json["status"], "failed");
        assert_eq!(json["direction"], "in");
        assert_eq!(json["tier"], "smoke");
        assert_eq!(json["failures"][0], "Channel 3: Lost signal");
        assert_eq!(json["elapsed_ms"], 1000);
    }

    #[test]
    fn test_save_and_reload() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("reports").join("run.json");

        let mut report = RunReport::new();
        report.record(ScenarioReport::new(
            &scenario(),
            ScenarioOutcome::Passed,
            Duration::from_secs(11),
        ));
        report.finish();
        report.save(&path).unwrap();

        let loaded: RunReport =
            serde_json::from_str(&std::fs::read_to_string(&path).unwrap()).unwrap();
        assert_eq!(loaded, report);
    }
}
