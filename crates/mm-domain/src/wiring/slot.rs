//! Typed dependency slot

use crate::error::{Error, Result};
use crate::wiring::ModuleId;
use std::fmt;
use std::sync::Arc;

/// A module's reference to one capability provider
///
/// Starts unbound. Binding requires `&mut`, so once a module is shared
/// behind an `Arc` its slots can no longer change.
///
/// # Example
///
/// ```
/// use mm_domain::{ModuleId, Slot};
/// use std::sync::Arc;
///
/// let mut slot: Slot<str> = Slot::new(ModuleId::new("user"), "greeting");
/// assert!(slot.get().is_err());
///
/// assert!(!slot.bind(Arc::from("hello")));
/// assert!(slot.bind(Arc::from("hi")));
/// assert_eq!(&**slot.get().unwrap(), "hi");
/// ```
pub struct Slot<C: ?Sized> {
    module: ModuleId,
    name: &'static str,
    provider: Option<Arc<C>>,
}

impl<C: ?Sized> Slot<C> {
    /// Create an unbound slot owned by `module`
    pub const fn new(module: ModuleId, name: &'static str) -> Self {
        Self {
            module,
            name,
            provider: None,
        }
    }

    /// Bind a provider, overwriting any previous one
    ///
    /// Returns `true` when an earlier binding was replaced.
    pub fn bind(&mut self, provider: Arc<C>) -> bool {
        self.provider.replace(provider).is_some()
    }

    /// The bound provider, or [`Error::UnboundDependency`]
    pub fn get(&self) -> Result<&Arc<C>> {
        self.provider.as_ref().ok_or(Error::UnboundDependency {
            module: self.module,
            slot: self.name,
        })
    }

    /// Whether a provider is bound
    pub fn is_bound(&self) -> bool {
        self.provider.is_some()
    }

    /// Slot name
    pub fn name(&self) -> &'static str {
        self.name
    }

    /// Owning module
    pub fn module(&self) -> ModuleId {
        self.module
    }
}

impl<C: ?Sized> fmt::Debug for Slot<C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Slot")
            .field("module", &self.module)
            .field("name", &self.name)
            .field("bound", &self.is_bound())
            .finish()
    }
}
