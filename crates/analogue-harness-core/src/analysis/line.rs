//! Classification of `xsig` report lines
//!
//! `xsig` prints one observation per line, for example:
//!
//! ```text
//! Channel 0: Signal detected at 1000 Hz
//! Channel 0: Frequency 1000 (all good)
//! Channel 3: Lost signal
//! ERROR: glitch detected on channel 2
//! ```
//!
//! A line may be both a problem line and a channel report, so the problem
//! check ([`is_problem_line`]) is kept separate from [`classify`].
//!
//! Channel indices for signal-detected and frequency reports are taken from the
//! first digit character of the line. A report for channel 12 is therefore
//! attributed to channel 1. Expectation files never describe more than ten
//! channels, and the checks built on top rely on this exact behaviour.

use regex::Regex;
use std::sync::LazyLock;

static PROBLEM: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)error|problem").expect("problem pattern is valid"));

static LOST_SIGNAL: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^Channel ([0-9]+): Lost signal").expect("lost signal pattern is valid")
});

static SIGNAL_DETECTED: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^Channel [0-9]+: Signal detected ").expect("signal detected pattern is valid")
});

static FREQUENCY: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^Channel [0-9]+: Frequency [0-9]* ").expect("frequency pattern is valid")
});

/// Channel-level observation carried by a report line
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChannelReport {
    /// `Channel {i}: Frequency {f} ...` (channel is the first digit of the line)
    Frequency { channel: u32 },
    /// `Channel {i}: Lost signal` (full channel number)
    LostSignal { channel: u32 },
    /// `Channel {i}: Signal detected ...` (channel is the first digit of the line)
    SignalDetected { channel: u32 },
    /// Anything else
    Other,
}

/// Whether the line reports an error or a problem, in any letter case
pub fn is_problem_line(line: &str) -> bool {
    PROBLEM.is_match(line)
}

/// Classify a report line by the channel observation it carries
pub fn classify(line: &str) -> ChannelReport {
    if let Some(caps) = LOST_SIGNAL.captures(line) {
        let channel = caps[1].parse().unwrap_or(u32::MAX);
        return ChannelReport::LostSignal { channel };
    }

    // Both patterns require at least one digit, so first_digit always finds one
    if SIGNAL_DETECTED.is_match(line) {
        if let Some(channel) = first_digit(line) {
            return ChannelReport::SignalDetected { channel };
        }
    }

    if FREQUENCY.is_match(line) {
        if let Some(channel) = first_digit(line) {
            return ChannelReport::Frequency { channel };
        }
    }

    ChannelReport::Other
}

/// Value of the first decimal digit character in the line
pub fn first_digit(line: &str) -> Option<u32> {
    line.chars().find_map(|c| c.to_digit(10))
}

/// Text following `"Channel {channel}: Frequency "`, if the line starts with it
pub fn frequency_text(line: &str, channel: usize) -> Option<&str> {
    line.strip_prefix(&format!("Channel {}: Frequency ", channel))
}

/// Whether the line starts with `"Channel {channel}: Frequency {frequency}"`
///
/// This is a prefix check, trailing text after the number is ignored.
pub fn reports_frequency(line: &str, channel: usize, frequency: u32) -> bool {
    line.starts_with(&format!("Channel {}: Frequency {}", channel, frequency))
}
