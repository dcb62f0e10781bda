//! Application Layer - Micro Monolith
//!
//! The business modules of the monolith. Each module owns one bounded area
//! and talks to the others only through capabilities from
//! `mm_domain::ports`.
//!
//! ## Modules
//!
//! | Module | Id | Provides | Needs |
//! |--------|----|----------|-------|
//! | [`AddressService`] | `address` | `address-lookup` | nothing |
//! | [`EmailService`] | `notification` | `document-sending` | nothing |
//! | [`UserService`] | `user` | nothing | `document-sending` |
//!
//! ## Dependencies
//!
//! This crate depends only on:
//! - `mm-domain`: capability traits, manifests and value objects
//! - `tracing` and `async-trait`

pub mod modules;

pub use modules::*;
