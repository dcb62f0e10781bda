//! Capability Ports
//!
//! Each capability is a trait with exactly one operation. A consumer module
//! depends on the capability, never on the module that implements it. When a
//! consumer needs a second behavior from the same provider, that behavior
//! gets its own capability.
//!
//! | Capability | Trait | Operation |
//! |------------|-------|-----------|
//! | [`ADDRESS_LOOKUP`] | [`AddressFinder`] | `find_addresses(criteria)` |
//! | [`DOCUMENT_SENDING`] | [`DocumentSender`] | `send_document(document)` |

/// Address lookup by criteria
pub mod address_finder;
/// Document delivery
pub mod document_sender;

pub use address_finder::{ADDRESS_LOOKUP, AddressFinder};
pub use document_sender::{DOCUMENT_SENDING, DocumentSender};
