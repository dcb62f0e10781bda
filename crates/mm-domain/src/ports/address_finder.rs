//! Address-Lookup Capability

use crate::error::Result;
use crate::value_objects::{Address, AddressCriteria};
use crate::wiring::CapabilityId;
use async_trait::async_trait;

/// Capability id under which providers of [`AddressFinder`] register
pub const ADDRESS_LOOKUP: CapabilityId = CapabilityId::new("address-lookup");

/// Can look up addresses by criteria
#[async_trait]
pub trait AddressFinder: Send + Sync {
    /// Addresses matching the criteria; no match is an empty list
    async fn find_addresses(&self, criteria: &AddressCriteria) -> Result<Vec<Address>>;
}
