//! Module wiring primitives
//!
//! A module describes itself with a [`ModuleManifest`]: the capabilities it
//! provides and the dependency slots it needs filled. Inside the module each
//! declared slot is a typed [`Slot`] that the composition root binds.

mod manifest;
mod slot;

pub use manifest::{CapabilityId, DependencySlot, ModuleId, ModuleManifest, Requirement};
pub use slot::Slot;
