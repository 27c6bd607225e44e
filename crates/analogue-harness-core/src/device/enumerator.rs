//! Enumeration of audio devices visible to the OS audio host
//!
//! Host backends may cache the device list they saw when they were opened, so
//! callers must [`refresh`](DeviceEnumerator::refresh) before each
//! [`list_devices`](DeviceEnumerator::list_devices) to see a device that was
//! just flashed.

use anyhow::Result;

/// Handle onto the audio host's device list
pub trait DeviceEnumerator {
    /// Drop any cached host state and reopen the host
    fn refresh(&mut self) -> Result<()>;

    /// Names of all currently visible devices
    fn list_devices(&self) -> Result<Vec<String>>;
}

#[cfg(feature = "host-audio")]
pub use host::HostEnumerator;

#[cfg(feature = "host-audio")]
mod host {
    use super::DeviceEnumerator;
    use anyhow::Result;
    use cpal::traits::{DeviceTrait, HostTrait};

    /// Enumerator over the platform's default cpal host
    pub struct HostEnumerator {
        host: cpal::Host,
    }

    impl HostEnumerator {
        pub fn new() -> Self {
            Self {
                host: cpal::default_host(),
            }
        }
    }

    impl Default for HostEnumerator {
        fn default() -> Self {
            Self::new()
        }
    }

    impl DeviceEnumerator for HostEnumerator {
        fn refresh(&mut self) -> Result<()> {
            self.host = cpal::default_host();
            tracing::debug!(host = ?self.host.id(), "Audio host reopened");
            Ok(())
        }

        fn list_devices(&self) -> Result<Vec<String>> {
            let mut names = Vec::new();
            for device in self.host.devices()? {
                names.push(device.name().unwrap_or_else(|_| "Unknown".to_string()));
            }
            Ok(names)
        }
    }
}

/// Whether this build can see devices on the OS audio host
pub const HOST_AUDIO: bool = cfg!(feature = "host-audio");

const NO_HOST_AUDIO: &str = "Audio host support not built in, rebuild with --features host-audio";

/// Fail unless this build can enumerate the OS audio host
///
/// Without it no device ever appears, so a run would flash boards only to
/// time out waiting for them.
pub fn ensure_host_audio() -> Result<()> {
    if HOST_AUDIO {
        Ok(())
    } else {
        anyhow::bail!(NO_HOST_AUDIO)
    }
}

/// Enumerator used when the crate is built without `host-audio`
#[cfg(not(feature = "host-audio"))]
pub struct UnavailableEnumerator;

#[cfg(not(feature = "host-audio"))]
impl DeviceEnumerator for UnavailableEnumerator {
    fn refresh(&mut self) -> Result<()> {
        Ok(())
    }

    fn list_devices(&self) -> Result<Vec<String>> {
        anyhow::bail!(NO_HOST_AUDIO)
    }
}

/// Enumerator for the platform's audio host
pub fn default_enumerator() -> Box<dyn DeviceEnumerator> {
    #[cfg(feature = "host-audio")]
    {
        Box::new(HostEnumerator::new())
    }
    #[cfg(not(feature = "host-audio"))]
    {
        Box::new(UnavailableEnumerator)
    }
}
