//! xTAG adapter allocation
//!
//! Both boards are claimed for the whole of one scenario. A lease mutably
//! borrows the pool, so two scenarios can never hold the adapters at once.

use crate::config::{ConfigError, HarnessConfig};

/// The pair of adapters wired to the device under test and the harness
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AdapterPool {
    dut: String,
    harness: String,
    leases: u64,
}

impl AdapterPool {
    pub fn new(dut: impl Into<String>, harness: impl Into<String>) -> Self {
        Self {
            dut: dut.into(),
            harness: harness.into(),
            leases: 0,
        }
    }

    /// Pool from the configured adapter ids
    pub fn from_config(config: &HarnessConfig) -> Result<Self, ConfigError> {
        let (dut, harness) = config.adapters()?;
        Ok(Self::new(dut, harness))
    }

    /// Claim both adapters until the lease is dropped
    pub fn acquire(&mut self) -> AdapterLease<'_> {
        self.leases += 1;
        tracing::debug!(dut = %self.dut, harness = %self.harness, lease = self.leases, "Adapters acquired");
        AdapterLease { pool: self }
    }

    /// Number of leases handed out so far
    pub fn leases(&self) -> u64 {
        self.leases
    }
}

/// Exclusive claim on both adapters
#[derive(Debug)]
pub struct AdapterLease<'a> {
    pool: &'a AdapterPool,
}

impl AdapterLease<'_> {
    /// Adapter of the device under test
    pub fn dut(&self) -> &str {
        &self.pool.dut
    }

    /// Adapter of the measurement harness
    pub fn harness(&self) -> &str {
        &self.pool.harness
    }
}

impl Drop for AdapterLease<'_> {
    fn drop(&mut self) {
        tracing::debug!(dut = %self.pool.dut, harness = %self.pool.harness, "Adapters released");
    }
}
