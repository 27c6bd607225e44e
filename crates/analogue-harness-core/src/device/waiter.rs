//! Waiting for a device to enumerate after its firmware boots

use super::enumerator::DeviceEnumerator;
use std::time::Duration;
use thiserror::Error;

/// Interval between enumeration polls
pub const POLL_INTERVAL: Duration = Duration::from_secs(1);

/// Errors waiting for a device
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DeviceError {
    #[error("Device not available via audio host in {timeout_secs}s: {name}")]
    NotAvailable { name: String, timeout_secs: u64 },
}

/// Block until `name` is listed by the audio host
///
/// Polls once per second, refreshing the host before every query, for at most
/// `timeout` (rounded down to whole seconds).
pub fn wait_for_device(
    enumerator: &mut dyn DeviceEnumerator,
    name: &str,
    timeout: Duration,
) -> Result<(), DeviceError> {
    let polls = timeout.as_secs().max(1) as u32;
    poll_for_device(enumerator, name, polls, POLL_INTERVAL)
        .map(|_| ())
        .map_err(|_| DeviceError::NotAvailable {
            name: name.to_string(),
            timeout_secs: timeout.as_secs(),
        })
}

/// Poll `polls` times, sleeping `interval` before each refresh and query
///
/// Returns the number of polls taken when the device was found.
pub fn poll_for_device(
    enumerator: &mut dyn DeviceEnumerator,
    name: &str,
    polls: u32,
    interval: Duration,
) -> Result<u32, DeviceError> {
    for attempt in 1..=polls {
        std::thread::sleep(interval);

        if let Err(e) = enumerator.refresh() {
            tracing::warn!(error = %e, attempt, "Failed to refresh audio host");
            continue;
        }

        match enumerator.list_devices() {
            Ok(devices) if devices.iter().any(|d| d == name) => {
                tracing::info!(device = name, attempt, "Device available");
                return Ok(attempt);
            }
            Ok(devices) => {
                tracing::debug!(device = name, attempt, visible = devices.len(), "Device not listed yet");
            }
            Err(e) => {
                tracing::warn!(error = %e, attempt, "Failed to list audio devices");
            }
        }
    }

    Err(DeviceError::NotAvailable {
        name: name.to_string(),
        timeout_secs: (interval * polls).as_secs(),
    })
}
