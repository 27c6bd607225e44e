//! Test scenarios
//!
//! This module contains:
//! - Board types, firmware paths and product names ([`board`])
//! - The static scenario table ([`table`])
//!
//! A scenario is one combination of board, firmware config, sample rate,
//! duration and expectation file, run in one signal direction.

pub mod board;
pub mod table;

pub use board::{firmware_path, harness_firmware_path, Board, BoardError};

use crate::analysis::Direction;
use globset::{Glob, GlobMatcher};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::{Path, PathBuf};
use std::str::FromStr;
use thiserror::Error;

/// Error parsing a tier name
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("Unknown tier {0}, expected smoke, nightly or weekend")]
pub struct UnknownTier(pub String);

/// How often a scenario runs
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Tier {
    /// Quick check on every change
    Smoke,
    /// Ten minute runs, once a night
    Nightly,
    /// Half hour soak runs over the weekend
    Weekend,
}

impl Tier {
    /// All tiers, shortest first
    pub const ALL: [Tier; 3] = [Tier::Smoke, Tier::Nightly, Tier::Weekend];

    pub fn name(self) -> &'static str {
        match self {
            Tier::Smoke => "smoke",
            Tier::Nightly => "nightly",
            Tier::Weekend => "weekend",
        }
    }
}

impl fmt::Display for Tier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Tier {
    type Err = UnknownTier;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "smoke" | "quick" => Ok(Tier::Smoke),
            "nightly" => Ok(Tier::Nightly),
            "weekend" | "extended" => Ok(Tier::Weekend),
            _ => Err(UnknownTier(s.to_string())),
        }
    }
}

/// One row of the scenario table
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Scenario {
    pub direction: Direction,
    pub tier: Tier,
    pub board: Board,
    /// Firmware build config, e.g. `2i8o8xxxxx_tdm8`
    pub config: &'static str,
    /// Sample rate in Hz
    pub sample_rate: u32,
    /// Signal duration in seconds
    pub duration_secs: u32,
    /// Expectation file name, relative to the xsig config directory
    pub expectation_file: &'static str,
}

impl Scenario {
    /// Identifier such as `in-xk_216_mc-2i8o8xxxxx_tdm8-96000-10s`
    pub fn id(&self) -> String {
        format!(
            "{}-{}-{}-{}-{}s",
            self.direction, self.board, self.config, self.sample_rate, self.duration_secs
        )
    }

    /// Product name the device enumerates with
    pub fn product_name(&self) -> Result<&'static str, BoardError> {
        self.board.product_name(self.config)
    }

    /// Firmware image for the device under test
    pub fn firmware_path(&self, xmos_root: &Path) -> PathBuf {
        firmware_path(xmos_root, self.board, self.config)
    }

    /// Expectation file resolved against the xsig config directory
    pub fn expectation_path(&self, xsig_config_root: &Path) -> PathBuf {
        xsig_config_root.join(self.expectation_file)
    }
}

impl fmt::Display for Scenario {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.id())
    }
}

/// Selects scenarios by tier, direction and a glob over the scenario id
#[derive(Debug, Clone, Default)]
pub struct ScenarioFilter {
    tiers: Vec<Tier>,
    direction: Option<Direction>,
    pattern: Option<GlobMatcher>,
}

impl ScenarioFilter {
    /// Filter accepting every scenario
    pub fn new() -> Self {
        Self::default()
    }

    /// Only accept these tiers (an empty list accepts all)
    pub fn tiers(mut self, tiers: &[Tier]) -> Self {
        self.tiers = tiers.to_vec();
        self
    }

    /// Only accept one direction
    pub fn direction(mut self, direction: Option<Direction>) -> Self {
        self.direction = direction;
        self
    }

    /// Only accept ids matching a glob pattern
    pub fn pattern(mut self, pattern: Option<&str>) -> Result<Self, globset::Error> {
        self.pattern = pattern
            .map(|p| Glob::new(p).map(|g| g.compile_matcher()))
            .transpose()?;
        Ok(self)
    }

    pub fn matches(&self, scenario: &Scenario) -> bool {
        (self.tiers.is_empty() || self.tiers.contains(&scenario.tier))
            && self.direction.map_or(true, |d| d == scenario.direction)
            && self
                .pattern
                .as_ref()
                .map_or(true, |g| g.is_match(scenario.id()))
    }

    /// Matching scenarios from the table, in table order
    pub fn select(&self) -> Vec<Scenario> {
        table::all()
            .into_iter()
            .filter(|s| self.matches(s))
            .collect()
    }
}
