//! Analogue Harness - analogue regression tests for USB audio firmware
//!
//! This library re-exports the scenario table, device control, tool runners
//! and analyser verification from `analogue-harness-core`.

pub use analogue_harness_core::analysis;
pub use analogue_harness_core::config;
pub use analogue_harness_core::device;
pub use analogue_harness_core::harness;
pub use analogue_harness_core::report;
pub use analogue_harness_core::scenario;
pub use analogue_harness_core::tool;

pub use analogue_harness_core::{verify, AnalyserFailure, Direction, ExpectationSet, Verdict};
pub use analogue_harness_core::{Board, Harness, HarnessConfig, Scenario, ScenarioFilter, Tier};
pub use analogue_harness_core::{BUILD_DATE, DEFAULT_DEVICE_TIMEOUT_SECS, HARNESS_BOARD, VERSION};
