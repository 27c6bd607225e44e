//! Expected tones per channel, loaded from `xsig` JSON config files
//!
//! The same file configures `xsig` and tells the harness what to look for:
//!
//! ```json
//! {
//!     "in":  [["sine", 1000], ["sine", 2000]],
//!     "out": [["sine", 1000], ["sine", 2000]]
//! }
//! ```
//!
//! Only the second element of each entry is used. Entries are listed in
//! channel order.

use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::fmt;
use std::path::Path;
use std::str::FromStr;
use thiserror::Error;

/// Errors that can occur while loading an expectation set
#[derive(Error, Debug)]
pub enum ExpectationError {
    #[error("Failed to read expectation file {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid expectation JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("No \"{0}\" section in expectation file")]
    MissingDirection(Direction),

    #[error("Entry {index} of \"{direction}\" has no valid frequency: {entry}")]
    InvalidEntry {
        direction: Direction,
        index: usize,
        entry: String,
    },
}

/// Signal direction, as seen from the USB host
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Direction {
    /// Analogue input of the device, captured by `xsig` over USB
    #[serde(rename = "in")]
    Input,
    /// Analogue output of the device, generated by `xsig` and captured by the harness
    #[serde(rename = "out")]
    Output,
}

impl Direction {
    /// Key of this direction in the expectation file
    pub fn key(self) -> &'static str {
        match self {
            Direction::Input => "in",
            Direction::Output => "out",
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

/// Error parsing a direction name
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("Unknown direction {0}, expected in or out")]
pub struct UnknownDirection(pub String);

impl FromStr for Direction {
    type Err = UnknownDirection;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "in" | "input" => Ok(Direction::Input),
            "out" | "output" => Ok(Direction::Output),
            _ => Err(UnknownDirection(s.to_string())),
        }
    }
}

#[derive(Debug, Deserialize)]
struct RawExpectations {
    #[serde(rename = "in", default)]
    input: Option<Vec<Value>>,
    #[serde(rename = "out", default)]
    output: Option<Vec<Value>>,
}

/// Expected frequencies for both directions
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ExpectationSet {
    input: Option<Vec<u32>>,
    output: Option<Vec<u32>>,
}

impl ExpectationSet {
    /// Load an expectation set from a JSON file
    pub fn load(path: &Path) -> Result<Self, ExpectationError> {
        let contents = std::fs::read_to_string(path).map_err(|source| ExpectationError::Io {
            path: path.display().to_string(),
            source,
        })?;
        let set = Self::from_json(&contents)?;
        tracing::debug!(path = %path.display(), "Loaded expectation set");
        Ok(set)
    }

    /// Parse an expectation set from JSON text
    pub fn from_json(json: &str) -> Result<Self, ExpectationError> {
        let raw: RawExpectations = serde_json::from_str(json)?;
        Ok(Self {
            input: raw
                .input
                .map(|entries| frequencies(Direction::Input, &entries))
                .transpose()?,
            output: raw
                .output
                .map(|entries| frequencies(Direction::Output, &entries))
                .transpose()?,
        })
    }

    /// Expected frequency of each channel for the given direction
    pub fn frequencies(&self, direction: Direction) -> Result<&[u32], ExpectationError> {
        let section = match direction {
            Direction::Input => &self.input,
            Direction::Output => &self.output,
        };
        section
            .as_deref()
            .ok_or(ExpectationError::MissingDirection(direction))
    }
}

fn frequencies(direction: Direction, entries: &[Value]) -> Result<Vec<u32>, ExpectationError> {
    entries
        .iter()
        .enumerate()
        .map(|(index, entry)| {
            entry
                .get(1)
                .and_then(Value::as_u64)
                .and_then(|f| u32::try_from(f).ok())
                .ok_or_else(|| ExpectationError::InvalidEntry {
                    direction,
                    index,
                    entry: entry.to_string(),
                })
        })
        .collect()
}
