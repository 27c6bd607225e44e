//! Boards under test, firmware image locations and USB product names

use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::{Path, PathBuf};
use std::str::FromStr;
use thiserror::Error;

/// Errors resolving a board or firmware configuration
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum BoardError {
    #[error("Unrecognised board {0}")]
    UnrecognisedBoard(String),

    #[error("Unrecognised config {config} for {board}")]
    UnrecognisedConfig { board: Board, config: String },
}

/// Device-under-test board type
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Board {
    /// xCORE-200 multichannel audio board
    #[serde(rename = "xk_216_mc")]
    Xk216Mc,
    /// xcore.ai evaluation kit
    #[serde(rename = "xk_evk_xu316")]
    XkEvkXu316,
}

impl Board {
    /// All known boards
    pub const ALL: [Board; 2] = [Board::Xk216Mc, Board::XkEvkXu316];

    /// Board name as used in application and firmware file names
    pub fn name(self) -> &'static str {
        match self {
            Board::Xk216Mc => "xk_216_mc",
            Board::XkEvkXu316 => "xk_evk_xu316",
        }
    }

    /// USB product string the audio host shows once `config` has booted
    ///
    /// Only the first character of the config (the USB Audio Class version)
    /// selects the name.
    pub fn product_name(self, config: &str) -> Result<&'static str, BoardError> {
        let name = match (self, config.chars().next()) {
            (Board::Xk216Mc, Some('1')) => "XMOS xCORE-200 MC (UAC1.0)",
            (Board::Xk216Mc, Some('2')) => "XMOS xCORE-200 MC (UAC2.0)",
            (Board::XkEvkXu316, Some('1')) => "XMOS xCORE (UAC1.0)",
            (Board::XkEvkXu316, Some('2')) => "XMOS xCORE (UAC2.0)",
            _ => {
                return Err(BoardError::UnrecognisedConfig {
                    board: self,
                    config: config.to_string(),
                })
            }
        };
        Ok(name)
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Board {
    type Err = BoardError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Board::ALL
            .into_iter()
            .find(|b| b.name() == s)
            .ok_or_else(|| BoardError::UnrecognisedBoard(s.to_string()))
    }
}

/// Path of the USB audio firmware image for a board and config
///
/// `{root}/sw_usb_audio/app_usb_aud_{board}/bin/{config}/app_usb_aud_{board}_{config}.xe`
///
/// The file is not required to exist.
pub fn firmware_path(xmos_root: &Path, board: Board, config: &str) -> PathBuf {
    let app = format!("app_usb_aud_{}", board);
    xmos_root
        .join("sw_usb_audio")
        .join(&app)
        .join("bin")
        .join(config)
        .join(format!("{}_{}.xe", app, config))
}

/// Path of the audio analyzer firmware run on the measurement harness
///
/// Without a config this is the default image,
/// `{root}/sw_audio_analyzer/app_audio_analyzer_{board}/bin/app_audio_analyzer_{board}.xe`.
pub fn harness_firmware_path(xmos_root: &Path, board: &str, config: Option<&str>) -> PathBuf {
    let app = format!("app_audio_analyzer_{}", board);
    let bin = xmos_root.join("sw_audio_analyzer").join(&app).join("bin");
    match config {
        None => bin.join(format!("{}.xe", app)),
        Some(config) => bin.join(config).join(format!("{}_{}.xe", app, config)),
    }
}
