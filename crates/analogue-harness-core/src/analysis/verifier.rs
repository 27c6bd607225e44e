//! Pass/fail verification of a captured `xsig` report
//!
//! Every rule scans the whole report and failures accumulate, so a single run
//! reports every problem at once:
//!
//! 1. Problem lines (`error`/`problem` in any case) are reported verbatim.
//! 2. Each expected channel must have a frequency line starting with the
//!    expected frequency. If it only has other frequencies, the last one seen
//!    is reported. If it has none, the channel is reported as silent.
//! 3. `Lost signal` lines are reported verbatim, for any channel.
//! 4. `Signal detected` lines outside the expected channels are reported.
//! 5. Frequency lines outside the expected channels are reported.

use std::fmt;

use thiserror::Error;

use super::line::{self, ChannelReport};

/// A single reason an analyser report fails verification
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum AnalyserFailure {
    /// Line mentioning an error or problem, kept verbatim
    #[error("{0}")]
    ProblemReported(String),

    #[error("No signal seen on channel {channel}")]
    NoSignal { channel: usize },

    #[error("Incorrect frequency seen on channel {channel}. Expected {expected}, got {got}.")]
    WrongFrequency {
        channel: usize,
        expected: u32,
        /// First token after the frequency prefix of the last mismatching line
        got: String,
    },

    /// `Lost signal` line, kept verbatim
    #[error("{0}")]
    LostSignal(String),

    #[error("Unexpected signal detected on channel {channel}")]
    UnexpectedSignal { channel: u32 },

    #[error("Unexpected frequency reported on channel {channel}")]
    UnexpectedFrequency { channel: u32 },
}

/// Outcome of verifying one report: empty means pass
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Verdict {
    failures: Vec<AnalyserFailure>,
}

impl Verdict {
    /// True when no failure was recorded
    pub fn is_pass(&self) -> bool {
        self.failures.is_empty()
    }

    /// Failures in the order they were recorded
    pub fn failures(&self) -> &[AnalyserFailure] {
        &self.failures
    }

    /// Failure reasons rendered as strings
    pub fn messages(&self) -> Vec<String> {
        self.failures.iter().map(ToString::to_string).collect()
    }
}

impl fmt::Display for Verdict {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_pass() {
            return write!(f, "Analyser output OK");
        }
        write!(f, "Checking analyser output failed:")?;
        for failure in &self.failures {
            write!(f, "\n{}", failure)?;
        }
        Ok(())
    }
}

/// Verify captured report lines against the expected frequency of each channel
///
/// # Arguments
/// * `lines` - Report lines in capture order
/// * `expected_frequencies` - Expected tone in Hz, indexed by channel
///
/// # Returns
/// All failures found; an empty verdict is a pass
pub fn verify<S: AsRef<str>>(lines: &[S], expected_frequencies: &[u32]) -> Verdict {
    let mut failures = Vec::new();

    for line in lines.iter().map(AsRef::as_ref) {
        if line::is_problem_line(line) {
            failures.push(AnalyserFailure::ProblemReported(line.to_string()));
        }
    }

    for (channel, &expected) in expected_frequencies.iter().enumerate() {
        if let Some(failure) = check_channel(lines, channel, expected) {
            failures.push(failure);
        }
    }

    let channel_count = expected_frequencies.len();
    let is_expected = |channel: u32| (channel as usize) < channel_count;

    for line in lines.iter().map(AsRef::as_ref) {
        match line::classify(line) {
            ChannelReport::LostSignal { .. } => {
                failures.push(AnalyserFailure::LostSignal(line.to_string()));
            }
            ChannelReport::SignalDetected { channel } if !is_expected(channel) => {
                failures.push(AnalyserFailure::UnexpectedSignal { channel });
            }
            ChannelReport::Frequency { channel } if !is_expected(channel) => {
                failures.push(AnalyserFailure::UnexpectedFrequency { channel });
            }
            _ => {}
        }
    }

    if !failures.is_empty() {
        tracing::debug!(count = failures.len(), "Analyser output has failures");
    }

    Verdict { failures }
}

/// Check one expected channel, scanning every line
fn check_channel<S: AsRef<str>>(
    lines: &[S],
    channel: usize,
    expected: u32,
) -> Option<AnalyserFailure> {
    let mut found = false;
    let mut wrong_frequency: Option<String> = None;

    for line in lines.iter().map(AsRef::as_ref) {
        let Some(rest) = line::frequency_text(line, channel) else {
            continue;
        };
        if line::reports_frequency(line, channel, expected) {
            found = true;
        } else {
            // Later mismatches overwrite earlier ones
            wrong_frequency = Some(rest.split_whitespace().next().unwrap_or("").to_string());
        }
    }

    if found {
        return None;
    }

    Some(match wrong_frequency {
        Some(got) => AnalyserFailure::WrongFrequency {
            channel,
            expected,
            got,
        },
        None => AnalyserFailure::NoSignal { channel },
    })
}
