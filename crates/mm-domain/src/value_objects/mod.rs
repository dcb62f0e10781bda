//! Value Objects
//!
//! Immutable data exchanged through capabilities. None of these types carry
//! behavior beyond construction helpers.

/// Addresses and lookup criteria
pub mod address;
/// Documents and delivery receipts
pub mod document;
/// User profile
pub mod user;

pub use address::{Address, AddressCriteria};
pub use document::{DeliveryReceipt, Document, DocumentFormat};
pub use user::UserProfile;
