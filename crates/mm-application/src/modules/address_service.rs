//! Address Module
//!
//! Pure provider: answers address lookups from a directory fixed at
//! construction. Declares no dependency slots.

use async_trait::async_trait;
use mm_domain::error::Result;
use mm_domain::ports::{ADDRESS_LOOKUP, AddressFinder};
use mm_domain::value_objects::{Address, AddressCriteria};
use mm_domain::wiring::{ModuleId, ModuleManifest};
use tracing::debug;

/// Field selector paired with the lowercase needle to look for
type Filter = (fn(&Address) -> &str, String);

/// Address lookup module
#[derive(Debug, Clone, Default)]
pub struct AddressService {
    directory: Vec<Address>,
}

impl AddressService {
    /// Module id
    pub const ID: ModuleId = ModuleId::new("address");

    /// Create the module over a fixed directory
    pub fn new(directory: Vec<Address>) -> Self {
        Self { directory }
    }

    /// Provides `address-lookup`, needs nothing
    pub fn manifest() -> ModuleManifest {
        ModuleManifest::new(Self::ID).provides(ADDRESS_LOOKUP)
    }

    /// Number of known addresses
    pub fn directory_len(&self) -> usize {
        self.directory.len()
    }

    fn filters(criteria: &AddressCriteria) -> Vec<Filter> {
        let fields: [(fn(&Address) -> &str, &Option<String>); 4] = [
            (|a| &a.street, &criteria.street),
            (|a| &a.postal_code, &criteria.postal_code),
            (|a| &a.city, &criteria.city),
            (|a| &a.country, &criteria.country),
        ];
        fields
            .into_iter()
            .filter_map(|(field, value)| {
                let needle = value.as_deref()?.trim();
                (!needle.is_empty()).then(|| (field, needle.to_lowercase()))
            })
            .collect()
    }
}

#[async_trait]
impl AddressFinder for AddressService {
    async fn find_addresses(&self, criteria: &AddressCriteria) -> Result<Vec<Address>> {
        let filters = Self::filters(criteria);
        if filters.is_empty() {
            debug!("Address criteria carry no filter, returning no match");
            return Ok(Vec::new());
        }

        let matches: Vec<Address> = self
            .directory
            .iter()
            .filter(|address| {
                filters
                    .iter()
                    .all(|(field, needle)| field(address).to_lowercase().contains(needle.as_str()))
            })
            .cloned()
            .collect();

        debug!(
            filters = filters.len(),
            matches = matches.len(),
            "Address lookup completed"
        );
        Ok(matches)
    }
}
