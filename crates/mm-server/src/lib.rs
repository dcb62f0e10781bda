//! # Micro Monolith Server
//!
//! The externally reachable surface of the micro monolith. Callers receive a
//! [`RestService`] and nothing else: the modules behind it are built and
//! wired once by the composition root in `mm-infrastructure`.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use mm_server::{Operation, run};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let outcome = run(None, Operation::MoreUserStuff { recipient: None }).await?;
//!     println!("{}", serde_json::to_string_pretty(&outcome)?);
//!     Ok(())
//! }
//! ```
//!
//! ## Core Types
//!
//! | Type | Description |
//! |------|-------------|
//! | [`RestService`] | Facade delegating to the wired modules |
//! | [`Operation`] | One facade call selected by the caller |
//! | [`OperationOutcome`] | Serializable result of an [`Operation`] |

pub mod init;
pub mod rest_service;

pub use init::{
    Operation, OperationOutcome, WiringBinding, create_rest_service, execute, load_config, run,
};
pub use rest_service::RestService;
