//! Static module declarations

use std::fmt;

/// Identity of a module in the composition graph
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ModuleId(&'static str);

impl ModuleId {
    /// Create a module id
    pub const fn new(id: &'static str) -> Self {
        Self(id)
    }

    /// Module id as a string
    pub const fn as_str(&self) -> &'static str {
        self.0
    }
}

impl fmt::Display for ModuleId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.0)
    }
}

/// Name of a single-operation capability
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct CapabilityId(&'static str);

impl CapabilityId {
    /// Create a capability id
    pub const fn new(id: &'static str) -> Self {
        Self(id)
    }

    /// Capability id as a string
    pub const fn as_str(&self) -> &'static str {
        self.0
    }
}

impl fmt::Display for CapabilityId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.0)
    }
}

/// Whether the composition root must bind a slot before publishing
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Requirement {
    /// Leaving the slot unbound is a construction error
    #[default]
    Required,
    /// The slot may stay unbound; operations that need it fail at call time
    Optional,
}

/// A capability a module consumes, under a slot name unique within the module
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DependencySlot {
    /// Slot name
    pub name: &'static str,
    /// Capability the slot accepts
    pub capability: CapabilityId,
    /// Whether wiring must fill the slot
    pub requirement: Requirement,
}

impl DependencySlot {
    /// Whether the slot must be bound for the graph to be valid
    pub fn is_required(&self) -> bool {
        self.requirement == Requirement::Required
    }
}

/// What a module provides and what it needs
///
/// # Example
///
/// ```
/// use mm_domain::{CapabilityId, ModuleId, ModuleManifest};
///
/// const SENDING: CapabilityId = CapabilityId::new("document-sending");
///
/// let manifest = ModuleManifest::new(ModuleId::new("user"))
///     .requires("document_sender", SENDING);
/// assert!(manifest.provides.is_empty());
/// assert_eq!(manifest.slot("document_sender").map(|s| s.capability), Some(SENDING));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ModuleManifest {
    /// Module identity
    pub id: ModuleId,
    /// Capabilities this module can be bound as
    pub provides: Vec<CapabilityId>,
    /// Slots this module declares
    pub requires: Vec<DependencySlot>,
}

impl ModuleManifest {
    /// Manifest with no capabilities and no slots
    pub fn new(id: ModuleId) -> Self {
        Self {
            id,
            provides: Vec::new(),
            requires: Vec::new(),
        }
    }

    /// Declare a provided capability
    #[must_use]
    pub fn provides(mut self, capability: CapabilityId) -> Self {
        if !self.provides.contains(&capability) {
            self.provides.push(capability);
        }
        self
    }

    /// Declare a required slot
    #[must_use]
    pub fn requires(self, slot: &'static str, capability: CapabilityId) -> Self {
        self.with_slot(slot, capability, Requirement::Required)
    }

    /// Declare an optional slot
    #[must_use]
    pub fn optional(self, slot: &'static str, capability: CapabilityId) -> Self {
        self.with_slot(slot, capability, Requirement::Optional)
    }

    fn with_slot(
        mut self,
        name: &'static str,
        capability: CapabilityId,
        requirement: Requirement,
    ) -> Self {
        let slot = DependencySlot {
            name,
            capability,
            requirement,
        };
        match self.requires.iter_mut().find(|s| s.name == name) {
            Some(existing) => *existing = slot,
            None => self.requires.push(slot),
        }
        self
    }

    /// Look up a declared slot by name
    pub fn slot(&self, name: &str) -> Option<&DependencySlot> {
        self.requires.iter().find(|s| s.name == name)
    }

    /// Whether this module provides the capability
    pub fn provides_capability(&self, capability: CapabilityId) -> bool {
        self.provides.contains(&capability)
    }
}
