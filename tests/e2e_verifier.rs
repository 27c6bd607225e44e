//! E2E tests for analyser output verification
//!
//! Exercises `verify` through the public API with report lines shaped like
//! real `xsig` and harness output.

use analogue_harness::{verify, AnalyserFailure};

fn frequency_line(channel: usize, frequency: u32) -> String {
    format!("Channel {}: Frequency {} (all good)", channel, frequency)
}

fn tones(n: usize) -> Vec<u32> {
    (0..n as u32).map(|i| 1000 + 250 * i).collect()
}

/// An empty report yields one no-signal failure per channel, in channel order
#[test]
fn test_empty_report_no_signal_everywhere() {
    for n in 1..=10 {
        let expected = tones(n);
        let verdict = verify::<&str>(&[], &expected);

        let wanted: Vec<AnalyserFailure> = (0..n)
            .map(|channel| AnalyserFailure::NoSignal { channel })
            .collect();
        assert_eq!(verdict.failures(), wanted.as_slice(), "n = {}", n);
    }
}

/// One correct frequency line per channel passes
#[test]
fn test_one_line_per_channel_passes() {
    for n in 1..=10 {
        let expected = tones(n);
        let lines: Vec<String> = expected
            .iter()
            .enumerate()
            .map(|(channel, &f)| frequency_line(channel, f))
            .collect();

        let verdict = verify(&lines, &expected);
        assert!(verdict.is_pass(), "n = {}: {}", n, verdict);
    }
}

/// Report lines in any order still pass
#[test]
fn test_channel_order_in_report_is_irrelevant() {
    let expected = [1000, 2000, 3000];
    let lines = [
        frequency_line(2, 3000),
        frequency_line(0, 1000),
        frequency_line(1, 2000),
    ];
    assert!(verify(&lines, &expected).is_pass());
}

/// The last wrong frequency is reported, not the first
#[test]
fn test_wrong_frequency_last_wins() {
    let lines = [
        "Channel 0: Frequency 100 (all good)",
        "Channel 0: Frequency 200 (all good)",
    ];
    let verdict = verify(&lines, &[997]);
    assert_eq!(
        verdict.messages(),
        vec!["Incorrect frequency seen on channel 0. Expected 997, got 200."]
    );
}

/// A correct line anywhere outweighs wrong ones on the same channel
#[test]
fn test_correct_line_masks_wrong_ones() {
    let lines = [
        "Channel 0: Frequency 100 (all good)",
        "Channel 0: Frequency 997 (all good)",
        "Channel 0: Frequency 200 (all good)",
    ];
    assert!(verify(&lines, &[997]).is_pass());
}

/// Any line mentioning an error, in any letter case, fails verbatim
#[test]
fn test_error_lines_surface_verbatim() {
    for line in [
        "ERROR: glitch detected",
        "xscope: Error opening endpoint",
        "Channel 0: Frequency 1000 (terror)",
        "clock problem on PLL",
        "PROBLEM",
    ] {
        let lines = [line, "Channel 0: Frequency 1000 (all good)"];
        let verdict = verify(&lines, &[1000]);
        assert_eq!(
            verdict.failures(),
            &[AnalyserFailure::ProblemReported(line.to_string())],
            "line {:?}",
            line
        );
    }
}

/// Lost signal fails even when the channel was correctly reported first
#[test]
fn test_lost_signal_on_good_channel() {
    let expected = tones(4);
    let mut lines: Vec<String> = expected
        .iter()
        .enumerate()
        .map(|(channel, &f)| frequency_line(channel, f))
        .collect();
    lines.push("Channel 3: Lost signal".to_string());

    let verdict = verify(&lines, &expected);
    assert_eq!(
        verdict.failures(),
        &[AnalyserFailure::LostSignal("Channel 3: Lost signal".into())]
    );
}

/// Lost signal on a channel outside the expected range also fails
#[test]
fn test_lost_signal_on_unexpected_channel() {
    let lines = ["Channel 0: Frequency 1000 (all good)", "Channel 14: Lost signal"];
    let verdict = verify(&lines, &[1000]);
    assert_eq!(verdict.messages(), vec!["Channel 14: Lost signal"]);
}

/// A signal on a single-digit channel past the expected range is flagged once
#[test]
fn test_unexpected_signal_single_digit() {
    let lines = [
        "Channel 0: Frequency 1000 (all good)",
        "Channel 1: Frequency 2000 (all good)",
        "Channel 9: Signal detected at 1000 Hz",
    ];
    let verdict = verify(&lines, &[1000, 2000]);
    assert_eq!(
        verdict.failures(),
        &[AnalyserFailure::UnexpectedSignal { channel: 9 }]
    );
    assert_eq!(
        verdict.messages(),
        vec!["Unexpected signal detected on channel 9"]
    );
}

/// Multi-digit channels are attributed to their first digit
#[test]
fn test_unexpected_signal_multi_digit_truncated() {
    // Channel 12 reads as channel 1: in range for two channels
    let lines = [
        "Channel 0: Frequency 1000 (all good)",
        "Channel 1: Frequency 2000 (all good)",
        "Channel 12: Signal detected at 1000 Hz",
    ];
    assert!(verify(&lines, &[1000, 2000]).is_pass());

    // ...and out of range for one
    let lines = [
        "Channel 0: Frequency 1000 (all good)",
        "Channel 12: Signal detected at 1000 Hz",
    ];
    assert_eq!(
        verify(&lines, &[1000]).failures(),
        &[AnalyserFailure::UnexpectedSignal { channel: 1 }]
    );
}

/// Frequency reports past the expected range are flagged
#[test]
fn test_unexpected_frequency() {
    let lines = ["Channel 4: Frequency 1000 (all good)"];
    let verdict = verify(&lines, &[1000, 2000]);
    assert_eq!(
        verdict.failures(),
        &[
            AnalyserFailure::NoSignal { channel: 0 },
            AnalyserFailure::NoSignal { channel: 1 },
            AnalyserFailure::UnexpectedFrequency { channel: 4 },
        ]
    );
}

/// Failures come in scan order: errors, channels, then per-line scans
#[test]
fn test_failure_order() {
    let lines = [
        "Channel 5: Lost signal",
        "xscope error",
        "Channel 7: Signal detected at 500 Hz",
    ];
    let verdict = verify(&lines, &[1000]);
    assert_eq!(
        verdict.failures(),
        &[
            AnalyserFailure::ProblemReported("xscope error".into()),
            AnalyserFailure::NoSignal { channel: 0 },
            AnalyserFailure::LostSignal("Channel 5: Lost signal".into()),
            AnalyserFailure::UnexpectedSignal { channel: 7 },
        ]
    );
}

/// The frequency match is a literal prefix check
#[test]
fn test_frequency_prefix_match() {
    assert!(verify(&["Channel 0: Frequency 4400 (all good)"], &[440]).is_pass());
    assert!(!verify(&["Channel 0: Frequency 44 (all good)"], &[440]).is_pass());
}

/// Failing verdicts render with a header and one reason per line
#[test]
fn test_verdict_display() {
    let verdict = verify(&["Channel 1: Lost signal"], &[1000]);
    assert_eq!(
        verdict.to_string(),
        "Checking analyser output failed:\nNo signal seen on channel 0\nChannel 1: Lost signal"
    );
}

/// Two channels reported correctly pass
#[test]
fn test_scenario_two_channel_pass() {
    let lines = ["Channel 0: Frequency 440 Hz", "Channel 1: Frequency 997 Hz"];
    assert!(verify(&lines, &[440, 997]).is_pass());
}

/// A near miss reports both expected and observed frequency
#[test]
fn test_scenario_near_miss() {
    let verdict = verify(&["Channel 0: Frequency 441 Hz"], &[440]);
    let messages = verdict.messages();
    assert_eq!(messages.len(), 1);
    assert!(messages[0].contains("Expected 440"));
    assert!(messages[0].contains("got 441"));
}
