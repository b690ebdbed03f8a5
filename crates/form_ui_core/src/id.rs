//! Element identity generation.
//!
//! Every element instance gets a unique DOM `id` and `name` at construction.
//! Identity carries no meaning beyond DOM uniqueness, so the generator is a
//! trait: UUIDs in production, sequential ids in tests.

use std::sync::atomic::{AtomicU64, Ordering};

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Source of process-wide-unique element identifiers.
pub trait IdGenerator {
    /// Returns an identifier never returned before by this generator.
    fn next_id(&self) -> String;
}

#[derive(Debug, Clone, Copy, Default)]
/// Random v4 UUID identifiers.
pub struct UuidIds;

impl IdGenerator for UuidIds {
    fn next_id(&self) -> String {
        Uuid::new_v4().to_string()
    }
}

#[derive(Debug)]
/// Deterministic `prefix-N` identifiers.
pub struct SequentialIds {
    prefix: &'static str,
    next: AtomicU64,
}

impl SequentialIds {
    /// Creates a generator starting at `prefix-1`.
    pub const fn new(prefix: &'static str) -> Self {
        Self {
            prefix,
            next: AtomicU64::new(1),
        }
    }
}

impl IdGenerator for SequentialIds {
    fn next_id(&self) -> String {
        let n = self.next.fetch_add(1, Ordering::Relaxed);
        format!("{}-{n}", self.prefix)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
/// DOM `id` and `name` pair rendered onto an element's native control.
pub struct ElementIdentity {
    /// Value of the control's `id` attribute.
    pub id: String,
    /// Value of the control's `name` attribute.
    pub name: String,
}

impl ElementIdentity {
    /// Draws a fresh id and name from `ids`.
    pub fn generate(ids: &impl IdGenerator) -> Self {
        Self {
            id: ids.next_id(),
            name: ids.next_id(),
        }
    }

    /// Keeps caller-supplied values and generates whatever is missing.
    pub fn resolve(id: Option<String>, name: Option<String>, ids: &impl IdGenerator) -> Self {
        Self {
            id: id.filter(|id| !id.is_empty()).unwrap_or_else(|| ids.next_id()),
            name: name
                .filter(|name| !name.is_empty())
                .unwrap_or_else(|| ids.next_id()),
        }
    }
}

impl Default for ElementIdentity {
    fn default() -> Self {
        Self::generate(&UuidIds)
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn sequential_ids_are_deterministic() {
        let ids = SequentialIds::new("el");
        let identity = ElementIdentity::generate(&ids);
        assert_eq!(identity.id, "el-1");
        assert_eq!(identity.name, "el-2");
        assert_eq!(ids.next_id(), "el-3");
    }

    #[test]
    fn resolve_keeps_supplied_values_and_fills_gaps() {
        let ids = SequentialIds::new("x");
        let identity = ElementIdentity::resolve(Some("email".to_string()), None, &ids);
        assert_eq!(identity.id, "email");
        assert_eq!(identity.name, "x-1");

        let identity = ElementIdentity::resolve(Some(String::new()), Some("n".to_string()), &ids);
        assert_eq!(identity.id, "x-2");
        assert_eq!(identity.name, "n");
    }

    #[test]
    fn default_identities_are_unique() {
        let first = ElementIdentity::default();
        let second = ElementIdentity::default();
        assert_ne!(first.id, second.id);
        assert_ne!(first.id, first.name);
    }
}
