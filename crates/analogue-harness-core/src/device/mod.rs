//! Audio device discovery
//!
//! This module contains:
//! - The enumeration handle over the OS audio host ([`enumerator`])
//! - Polling until a freshly booted device appears ([`waiter`])

pub mod enumerator;
pub mod waiter;

pub use enumerator::{default_enumerator, ensure_host_audio, DeviceEnumerator, HOST_AUDIO};
pub use waiter::{wait_for_device, DeviceError};
