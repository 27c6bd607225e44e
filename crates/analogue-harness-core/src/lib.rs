//! Analogue Harness Core - scenario table, device control and analyser verification
//!
//! This library drives analogue regression tests of multichannel USB audio
//! firmware. A device-under-test and a measurement harness board are flashed
//! through `xrun`, the external `xsig` signal tool generates or captures tones,
//! and the tool's textual report is checked channel by channel against the
//! frequencies listed in a JSON expectation file.

pub mod analysis;
pub mod config;
pub mod device;
pub mod harness;
pub mod report;
pub mod scenario;
pub mod tool;

pub use analysis::{verify, AnalyserFailure, Direction, ExpectationSet, Verdict};
pub use config::HarnessConfig;
pub use harness::Harness;
pub use scenario::{Board, Scenario, ScenarioFilter, Tier};

/// Library version from Cargo.toml
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Date the library was built, set by build.rs
pub const BUILD_DATE: &str = env!("BUILD_DATE");

/// Board image the measurement harness always runs
pub const HARNESS_BOARD: &str = "xcore200_mc";

/// Seconds to wait for the device to show up in the audio host
pub const DEFAULT_DEVICE_TIMEOUT_SECS: u64 = 10;
