//! Module Wiring - explicit composition root
//!
//! Wiring is static: every module, slot and binding is named in code or
//! configuration, validated as a plan, and applied once at startup.
//!
//! ```text
//! WiringPlan
//! ├── address      provides address-lookup
//! ├── notification provides document-sending
//! └── user         requires document_sender: document-sending ← notification
//! ```
//!
//! - [`plan`]: manifests and bindings, validated into a [`WiringOrder`]
//! - [`bootstrap`]: constructs modules in that order and returns [`AppContext`]

pub mod bootstrap;
pub mod plan;

pub use bootstrap::{AppContext, init_app, wiring_plan};
pub use plan::{WiringOrder, WiringPlan};
