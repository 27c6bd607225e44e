//! Analyser output verification
//!
//! This module contains:
//! - Report line classification ([`line`])
//! - The pass/fail verifier over a captured report ([`verifier`])
//! - JSON expectation sets naming the tone expected per channel ([`expectations`])

pub mod expectations;
pub mod line;
pub mod verifier;

pub use expectations::{Direction, ExpectationError, ExpectationSet, UnknownDirection};
pub use line::{classify, is_problem_line, ChannelReport};
pub use verifier::{verify, AnalyserFailure, Verdict};
