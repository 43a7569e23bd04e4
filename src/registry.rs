//! Entity registry and per-entity totals.
//!
//! The registry remembers the order in which codes first appeared in the
//! definition file; reports are written in that order.

use crate::amount::Amount;
use std::collections::HashMap;

/// A defined entity: a branch or a commodity.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Entity {
    /// Validated entity code.
    pub code: String,

    /// Display name written back into the report.
    pub name: String,
}

/// Insertion-ordered mapping from entity code to display name.
#[derive(Debug, Clone, Default)]
pub struct EntityRegistry {
    entries: Vec<Entity>,
    index: HashMap<String, usize>,
}

impl EntityRegistry {
    /// Creates an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts or renames an entity.
    ///
    /// A repeated code keeps its original position and takes the new name.
    pub fn insert(&mut self, code: String, name: String) {
        match self.index.get(&code) {
            Some(&pos) => self.entries[pos].name = name,
            None => {
                self.index.insert(code.clone(), self.entries.len());
                self.entries.push(Entity { code, name });
            }
        }
    }

    /// Returns `true` if `code` is defined.
    pub fn contains(&self, code: &str) -> bool {
        self.index.contains_key(code)
    }

    /// Looks up the display name of a code.
    pub fn name(&self, code: &str) -> Option<&str> {
        self.index
            .get(code)
            .map(|&pos| self.entries[pos].name.as_str())
    }

    /// Iterates entities in first-seen order.
    pub fn iter(&self) -> impl Iterator<Item = &Entity> {
        self.entries.iter()
    }

    /// Number of defined entities.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns `true` if no entity is defined.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Running totals keyed by entity code.
///
/// # Invariants
///
/// - Every code of the matching registry has an entry, starting at zero
/// - Every value stays below [`Amount::CEILING`]
#[derive(Debug, Clone, Default)]
pub struct TotalsMap {
    totals: HashMap<String, Amount>,
}

impl TotalsMap {
    /// Creates a map with a zero total for every code in `registry`.
    pub fn zeroed(registry: &EntityRegistry) -> Self {
        TotalsMap {
            totals: registry
                .iter()
                .map(|entity| (entity.code.clone(), Amount::ZERO))
                .collect(),
        }
    }

    /// Current total of `code`, if the code is known.
    pub fn get(&self, code: &str) -> Option<Amount> {
        self.totals.get(code).copied()
    }

    /// Computes what the total of `code` would become after adding `amount`.
    ///
    /// Returns `None` for unknown codes and for sums that reach the ceiling.
    /// Nothing is stored.
    pub fn candidate(&self, code: &str, amount: Amount) -> Option<Amount> {
        self.get(code)?.checked_add(amount)
    }

    /// Stores a total previously produced by [`TotalsMap::candidate`].
    pub(crate) fn commit(&mut self, code: &str, total: Amount) {
        if let Some(slot) = self.totals.get_mut(code) {
            *slot = total;
        }
    }

    /// Number of tracked totals.
    pub fn len(&self) -> usize {
        self.totals.len()
    }

    /// Returns `true` if no total is tracked.
    pub fn is_empty(&self) -> bool {
        self.totals.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn registry(pairs: &[(&str, &str)]) -> EntityRegistry {
        let mut registry = EntityRegistry::new();
        for (code, name) in pairs {
            registry.insert(code.to_string(), name.to_string());
        }
        registry
    }

    #[test]
    fn test_registry_preserves_insertion_order() {
        let registry = registry(&[("003", "Osaka"), ("001", "Tokyo"), ("002", "Nagoya")]);
        let codes: Vec<_> = registry.iter().map(|e| e.code.as_str()).collect();
        assert_eq!(codes, vec!["003", "001", "002"]);
    }

    #[test]
    fn test_duplicate_code_keeps_position_and_takes_new_name() {
        let registry = registry(&[("001", "Tokyo"), ("002", "Osaka"), ("001", "Shinjuku")]);
        assert_eq!(registry.len(), 2);
        assert_eq!(registry.name("001"), Some("Shinjuku"));
        assert_eq!(registry.iter().next().unwrap().code, "001");
    }

    #[test]
    fn test_zeroed_totals_cover_every_code() {
        let registry = registry(&[("001", "Tokyo"), ("002", "Osaka")]);
        let totals = TotalsMap::zeroed(&registry);
        assert_eq!(totals.len(), 2);
        assert_eq!(totals.get("001"), Some(Amount::ZERO));
        assert_eq!(totals.get("002"), Some(Amount::ZERO));
        assert_eq!(totals.get("003"), None);
    }

    #[test]
    fn test_candidate_does_not_mutate() {
        let registry = registry(&[("001", "Tokyo")]);
        let mut totals = TotalsMap::zeroed(&registry);

        let next = totals.candidate("001", Amount::new(700)).unwrap();
        assert_eq!(totals.get("001"), Some(Amount::ZERO));

        totals.commit("001", next);
        assert_eq!(totals.get("001"), Some(Amount::new(700)));
    }

    #[test]
    fn test_candidate_rejects_unknown_code_and_ceiling() {
        let registry = registry(&[("001", "Tokyo")]);
        let mut totals = TotalsMap::zeroed(&registry);
        totals.commit("001", Amount::new(9_999_999_999));

        assert!(totals.candidate("001", Amount::new(1)).is_none());
        assert!(totals.candidate("999", Amount::new(1)).is_none());
    }
}
