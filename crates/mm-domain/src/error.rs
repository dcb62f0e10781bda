//! Error handling types
//!
//! Three kinds matter to callers: construction errors from the composition
//! root, unbound-dependency errors from modules whose slots were never wired,
//! and capability failures that travel unchanged from a provider to the
//! caller.

use crate::wiring::{CapabilityId, ModuleId};
use thiserror::Error;

/// Result type alias for operations that can fail
pub type Result<T> = std::result::Result<T, Error>;

/// Main error type for the micro monolith
#[derive(Error, Debug)]
pub enum Error {
    /// The module graph could not be assembled
    #[error("Construction error: {0}")]
    Construction(#[from] ConstructionError),

    /// A module operation needed a dependency slot that was never bound
    #[error("Unbound dependency: slot '{slot}' of module '{module}' was never bound")]
    UnboundDependency {
        /// Module owning the slot
        module: ModuleId,
        /// Name of the unbound slot
        slot: &'static str,
    },

    /// A capability provider failed; consumers treat this opaquely
    #[error("Capability '{capability}' failed: {message}")]
    Capability {
        /// Capability whose operation failed
        capability: CapabilityId,
        /// Provider supplied description
        message: String,
        /// Optional source error
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    /// Invalid argument provided to an operation
    #[error("Invalid argument: {message}")]
    InvalidArgument {
        /// Description of the invalid argument
        message: String,
    },

    /// Configuration-related error
    #[error("Configuration error: {message}")]
    Configuration {
        /// Description of the configuration error
        message: String,
        /// Optional source error
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    /// I/O operation error
    #[error("I/O error: {source}")]
    Io {
        /// The underlying I/O error
        #[from]
        source: std::io::Error,
    },

    /// Infrastructure operation error
    #[error("Infrastructure error: {message}")]
    Infrastructure {
        /// Description of the infrastructure error
        message: String,
        /// Optional source error
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    /// Internal system error
    #[error("Internal error: {message}")]
    Internal {
        /// Description of the internal error
        message: String,
    },
}

/// Reasons the composition root refuses to build a module graph
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConstructionError {
    /// Two manifests share the same module id
    #[error("module '{module}' is registered more than once")]
    DuplicateModule {
        /// Duplicated module id
        module: String,
    },

    /// A binding or lookup named a module that was never registered
    #[error("module '{module}' is not registered")]
    UnknownModule {
        /// Name that failed to resolve
        module: String,
    },

    /// A binding targeted a slot the consumer does not declare
    #[error("module '{module}' declares no dependency slot '{slot}'")]
    UnknownSlot {
        /// Consumer module
        module: String,
        /// Slot name used in the binding
        slot: String,
    },

    /// The bound provider does not offer the capability the slot needs
    #[error(
        "module '{provider}' does not provide capability '{capability}' needed by slot '{slot}' of module '{consumer}'"
    )]
    CapabilityMismatch {
        /// Consumer module
        consumer: String,
        /// Consumer slot
        slot: String,
        /// Module named as provider
        provider: String,
        /// Capability the slot requires
        capability: String,
    },

    /// A required slot was left without a provider
    #[error("required slot '{slot}' of module '{module}' has no provider for capability '{capability}'")]
    MissingProvider {
        /// Consumer module
        module: String,
        /// Unbound slot
        slot: String,
        /// Capability the slot requires
        capability: String,
    },

    /// Providers and consumers form a loop
    #[error("dependency cycle between modules: {}", .modules.join(" -> "))]
    DependencyCycle {
        /// Modules on the cycle in provider-to-consumer order, first module repeated at the end
        modules: Vec<String>,
    },
}

impl Error {
    /// Create a capability failure without a source
    pub fn capability<S: Into<String>>(capability: CapabilityId, message: S) -> Self {
        Self::Capability {
            capability,
            message: message.into(),
            source: None,
        }
    }

    /// Create a capability failure preserving the provider's cause
    pub fn capability_with_source<S, E>(capability: CapabilityId, message: S, source: E) -> Self
    where
        S: Into<String>,
        E: std::error::Error + Send + Sync + 'static,
    {
        Self::Capability {
            capability,
            message: message.into(),
            source: Some(Box::new(source)),
        }
    }

    /// Create an invalid argument error
    pub fn invalid_argument<S: Into<String>>(message: S) -> Self {
        Self::InvalidArgument {
            message: message.into(),
        }
    }

    /// Create a configuration error
    pub fn configuration<S: Into<String>>(message: S) -> Self {
        Self::Configuration {
            message: message.into(),
            source: None,
        }
    }

    /// Create a configuration error with source
    pub fn configuration_with_source<S, E>(message: S, source: E) -> Self
    where
        S: Into<String>,
        E: std::error::Error + Send + Sync + 'static,
    {
        Self::Configuration {
            message: message.into(),
            source: Some(Box::new(source)),
        }
    }

    /// Create an infrastructure error with source
    pub fn infrastructure_with_source<S, E>(message: S, source: E) -> Self
    where
        S: Into<String>,
        E: std::error::Error + Send + Sync + 'static,
    {
        Self::Infrastructure {
            message: message.into(),
            source: Some(Box::new(source)),
        }
    }

    /// Create an internal error
    pub fn internal<S: Into<String>>(message: S) -> Self {
        Self::Internal {
            message: message.into(),
        }
    }

    /// Whether this is an unbound-dependency error
    pub fn is_unbound_dependency(&self) -> bool {
        matches!(self, Self::UnboundDependency { .. })
    }

    /// Whether this is a construction error
    pub fn is_construction(&self) -> bool {
        matches!(self, Self::Construction(_))
    }

    /// Whether this is a capability failure
    pub fn is_capability(&self) -> bool {
        matches!(self, Self::Capability { .. })
    }
}
