pub mod devices;
pub mod list;
pub mod resolve;
pub mod run;
pub mod verify;

use analogue_harness::HarnessConfig;
use std::path::Path;

/// Config from `path` (or the default location) with environment overrides
pub fn load_config(path: Option<&Path>) -> HarnessConfig {
    let file = match path {
        Some(path) => HarnessConfig::load_from(path),
        None => HarnessConfig::load_from(&HarnessConfig::path()),
    };
    file.with_env_overrides(|key| std::env::var(key).ok())
}
