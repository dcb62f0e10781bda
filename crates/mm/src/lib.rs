//! # Micro Monolith
//!
//! Three modules in one process, each depending on the others only through
//! single-operation capabilities, wired once by an explicit composition
//! root.
//!
//! ## Example
//!
//! ```no_run
//! use mm::infrastructure::config::AppConfig;
//! use mm::server::create_rest_service;
//!
//! # async fn demo() -> mm::Result<()> {
//! let service = create_rest_service(AppConfig::default())?;
//! let receipt = service.do_more_user_stuff().await?;
//! println!("sent {} via {}", receipt.title, receipt.provider);
//! # Ok(())
//! # }
//! ```
//!
//! ## Architecture
//!
//! - `domain` - Capabilities, manifests, slots, value objects and errors
//! - `application` - Address, notification and user modules
//! - `infrastructure` - Config, logging and the composition root
//! - `server` - The facade and runtime entry

/// Domain layer - capabilities, manifests and value objects
///
/// Re-exports from the domain crate for convenience
pub mod domain {
    pub use mm_domain::*;
}

/// Application layer - the concrete modules
///
/// Re-exports from the application crate for convenience
pub mod application {
    pub use mm_application::*;
}

/// Infrastructure layer - config, logging and module wiring
///
/// Re-exports from the infrastructure crate for convenience
pub mod infrastructure {
    pub use mm_infrastructure::*;
}

/// Server layer - facade and entry point
///
/// Re-exports from the server crate for convenience
pub mod server {
    pub use mm_server::*;
}

// Re-export commonly used domain types at the crate root
pub use domain::*;

// Re-export main entry point at the crate root
pub use server::{Operation, OperationOutcome, RestService, run};
