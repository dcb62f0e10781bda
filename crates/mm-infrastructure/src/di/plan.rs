//! Wiring Plan - inspectable module graph
//!
//! Collects module manifests and slot bindings, then validates them into a
//! [`WiringOrder`] before any module is constructed.
//!
//! ```text
//! register(manifest)*  ─┐
//!                       ├─► validate() ─► WiringOrder (topological)
//! bind(consumer, slot, provider)* ─┘          │
//!                                             └─► ConstructionError
//! ```
//!
//! Edges run from provider to consumer: a provider must exist before it can
//! be bound into a consumer's slot. Iteration over modules and slots is
//! ordered, so the same plan always yields the same order and the same
//! error.

use mm_domain::error::{ConstructionError, Result};
use mm_domain::wiring::{ModuleId, ModuleManifest};
use std::collections::{BTreeMap, BTreeSet};
use std::fmt;
use tracing::debug;

/// `(consumer, slot)` key of a binding
type BindingKey = (ModuleId, &'static str);

/// Module manifests plus slot bindings, not yet validated
#[derive(Debug, Clone, Default)]
pub struct WiringPlan {
    modules: BTreeMap<ModuleId, ModuleManifest>,
    bindings: BTreeMap<BindingKey, ModuleId>,
}

impl WiringPlan {
    /// Empty plan
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a module manifest
    pub fn register(&mut self, manifest: ModuleManifest) -> Result<()> {
        if self.modules.contains_key(&manifest.id) {
            return Err(ConstructionError::DuplicateModule {
                module: manifest.id.to_string(),
            }
            .into());
        }
        self.modules.insert(manifest.id, manifest);
        Ok(())
    }

    /// Bind `provider` into `consumer`'s `slot`
    ///
    /// Binding the same slot again overwrites the earlier provider; the
    /// previous provider, if any, is returned.
    pub fn bind(
        &mut self,
        consumer: ModuleId,
        slot: &'static str,
        provider: ModuleId,
    ) -> Option<ModuleId> {
        let previous = self.bindings.insert((consumer, slot), provider);
        if let Some(previous) = previous {
            debug!(%consumer, slot, %previous, %provider, "Overwrote slot binding");
        }
        previous
    }

    /// Resolve a configured module name to a registered module id
    pub fn resolve_module(&self, name: &str) -> Result<ModuleId> {
        let name = name.trim();
        self.modules
            .keys()
            .copied()
            .find(|id| id.as_str() == name)
            .ok_or_else(|| {
                ConstructionError::UnknownModule {
                    module: name.to_string(),
                }
                .into()
            })
    }

    /// Registered manifests in id order
    pub fn manifests(&self) -> impl Iterator<Item = &ModuleManifest> {
        self.modules.values()
    }

    /// Validate bindings, required slots and acyclicity
    pub fn validate(&self) -> Result<WiringOrder> {
        self.check_bindings()?;
        self.check_required_slots()?;
        let order = self.topological_order()?;
        Ok(WiringOrder {
            order,
            bindings: self.bindings.clone(),
        })
    }

    fn check_bindings(&self) -> Result<()> {
        for (&(consumer, slot_name), &provider) in &self.bindings {
            let manifest =
                self.modules
                    .get(&consumer)
                    .ok_or_else(|| ConstructionError::UnknownModule {
                        module: consumer.to_string(),
                    })?;
            let slot = manifest
                .slot(slot_name)
                .ok_or_else(|| ConstructionError::UnknownSlot {
                    module: consumer.to_string(),
                    slot: slot_name.to_string(),
                })?;
            let provider_manifest =
                self.modules
                    .get(&provider)
                    .ok_or_else(|| ConstructionError::UnknownModule {
                        module: provider.to_string(),
                    })?;
            if !provider_manifest.provides_capability(slot.capability) {
                return Err(ConstructionError::CapabilityMismatch {
                    consumer: consumer.to_string(),
                    slot: slot_name.to_string(),
                    provider: provider.to_string(),
                    capability: slot.capability.to_string(),
                }
                .into());
            }
        }
        Ok(())
    }

    fn check_required_slots(&self) -> Result<()> {
        for manifest in self.modules.values() {
            let mut slots: Vec<_> = manifest.requires.iter().collect();
            slots.sort_by_key(|slot| slot.name);
            for slot in slots {
                if slot.is_required() && !self.bindings.contains_key(&(manifest.id, slot.name)) {
                    return Err(ConstructionError::MissingProvider {
                        module: manifest.id.to_string(),
                        slot: slot.name.to_string(),
                        capability: slot.capability.to_string(),
                    }
                    .into());
                }
            }
        }
        Ok(())
    }

    /// Kahn's algorithm, ready modules taken in id order
    fn topological_order(&self) -> Result<Vec<ModuleId>> {
        let mut consumers: BTreeMap<ModuleId, BTreeSet<ModuleId>> = BTreeMap::new();
        let mut providers: BTreeMap<ModuleId, BTreeSet<ModuleId>> = BTreeMap::new();
        for &id in self.modules.keys() {
            consumers.entry(id).or_default();
            providers.entry(id).or_default();
        }
        for (&(consumer, _), &provider) in &self.bindings {
            consumers.entry(provider).or_default().insert(consumer);
            providers.entry(consumer).or_default().insert(provider);
        }

        let mut in_degree: BTreeMap<ModuleId, usize> = providers
            .iter()
            .map(|(&id, deps)| (id, deps.len()))
            .collect();
        let mut ready: BTreeSet<ModuleId> = in_degree
            .iter()
            .filter(|&(_, &degree)| degree == 0)
            .map(|(&id, _)| id)
            .collect();
        let mut order = Vec::with_capacity(self.modules.len());

        while let Some(id) = ready.pop_first() {
            order.push(id);
            in_degree.remove(&id);
            for consumer in &consumers[&id] {
                if let Some(degree) = in_degree.get_mut(consumer) {
                    *degree -= 1;
                    if *degree == 0 {
                        ready.insert(*consumer);
                    }
                }
            }
        }

        if in_degree.is_empty() {
            Ok(order)
        } else {
            Err(ConstructionError::DependencyCycle {
                modules: find_cycle(&in_degree, &providers),
            }
            .into())
        }
    }
}

/// Trace one cycle among the modules Kahn's algorithm could not order
///
/// Every remaining module still has a remaining provider, so walking
/// backwards through the smallest remaining provider must revisit a module.
fn find_cycle(
    remaining: &BTreeMap<ModuleId, usize>,
    providers: &BTreeMap<ModuleId, BTreeSet<ModuleId>>,
) -> Vec<String> {
    let Some(&start) = remaining.keys().next() else {
        return Vec::new();
    };

    let mut walk = vec![start];
    let mut current = start;
    loop {
        let Some(&next) = providers[&current]
            .iter()
            .find(|provider| remaining.contains_key(*provider))
        else {
            break;
        };
        if let Some(pos) = walk.iter().position(|&id| id == next) {
            // walk[pos..] follows consumer -> provider; reverse it and rotate
            // so the smallest module leads
            let mut cycle: Vec<ModuleId> = walk[pos..].iter().rev().copied().collect();
            if let Some(min_pos) = cycle
                .iter()
                .enumerate()
                .min_by_key(|&(_, id)| *id)
                .map(|(i, _)| i)
            {
                cycle.rotate_left(min_pos);
            }
            let first = cycle[0];
            cycle.push(first);
            return cycle.into_iter().map(|id| id.to_string()).collect();
        }
        walk.push(next);
        current = next;
    }

    remaining.keys().map(ToString::to_string).collect()
}

/// Validated construction order plus the bindings to apply
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WiringOrder {
    order: Vec<ModuleId>,
    bindings: BTreeMap<BindingKey, ModuleId>,
}

impl WiringOrder {
    /// Modules in construction order: every provider precedes its consumers
    pub fn modules(&self) -> &[ModuleId] {
        &self.order
    }

    /// Provider bound into `consumer`'s `slot`, if any
    pub fn provider_for(&self, consumer: ModuleId, slot: &str) -> Option<ModuleId> {
        self.bindings
            .iter()
            .find(|((c, s), _)| *c == consumer && *s == slot)
            .map(|(_, &provider)| provider)
    }

    /// All bindings as `(consumer, slot, provider)` in key order
    pub fn bindings(&self) -> impl Iterator<Item = (ModuleId, &'static str, ModuleId)> + '_ {
        self.bindings
            .iter()
            .map(|(&(consumer, slot), &provider)| (consumer, slot, provider))
    }

    /// Position of a module in the construction order
    pub fn position(&self, module: ModuleId) -> Option<usize> {
        self.order.iter().position(|&id| id == module)
    }
}

impl fmt::Display for WiringOrder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let names: Vec<&str> = self.order.iter().map(ModuleId::as_str).collect();
        f.write_str(&names.join(" -> "))
    }
}
