//! # Domain Layer
//!
//! Core contracts of the micro monolith. Nothing in this crate knows about a
//! concrete module: it only defines what modules exchange with each other.
//!
//! ## Contents
//!
//! | Module | Description |
//! |--------|-------------|
//! | [`ports`] | Capabilities: single-operation traits one module consumes from another |
//! | [`wiring`] | Module manifests and the typed dependency [`Slot`](wiring::Slot) |
//! | [`value_objects`] | Addresses, documents, receipts and user profiles |
//! | [`error`] | Error taxonomy shared by every layer |
//!
//! ## Capability slicing
//!
//! A consumer never holds another module's full interface. It names the one
//! operation it needs as a capability trait, and the composition root binds
//! whichever module provides that capability.

pub mod error;
pub mod ports;
pub mod value_objects;
pub mod wiring;

pub use error::{ConstructionError, Error, Result};
pub use ports::{ADDRESS_LOOKUP, AddressFinder, DOCUMENT_SENDING, DocumentSender};
pub use value_objects::{
    Address, AddressCriteria, DeliveryReceipt, Document, DocumentFormat, UserProfile,
};
pub use wiring::{CapabilityId, DependencySlot, ModuleId, ModuleManifest, Requirement, Slot};
