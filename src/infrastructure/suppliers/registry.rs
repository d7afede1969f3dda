//! # Supplier Registry
//!
//! The fixed set of suppliers an aggregator queries.
//!
//! Order matters: it is the order in which supplier results are pooled,
//! which decides ties between equally priced options.

use crate::domain::value_objects::SupplierId;

/// Suppliers queried when none is configured.
pub const DEFAULT_SUPPLIERS: [&str; 3] = ["dave", "eric", "jeff"];

/// Ordered, duplicate-free list of configured suppliers.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SupplierRegistry {
    suppliers: Vec<SupplierId>,
}

impl SupplierRegistry {
    /// Creates a registry, dropping blank and repeated identifiers.
    #[must_use]
    pub fn new<I, S>(suppliers: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut unique: Vec<SupplierId> = Vec::new();
        for id in suppliers.into_iter().filter_map(|s| SupplierId::parse(s).ok()) {
            if !unique.contains(&id) {
                unique.push(id);
            }
        }
        Self { suppliers: unique }
    }

    /// Looks up a supplier by caller-supplied name, ignoring case.
    #[must_use]
    pub fn resolve(&self, name: &str) -> Option<&SupplierId> {
        let wanted = SupplierId::new(name);
        self.suppliers.iter().find(|id| **id == wanted)
    }

    /// Returns true if `name` is a configured supplier.
    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.resolve(name).is_some()
    }

    /// Returns the suppliers in configured order.
    #[must_use]
    pub fn suppliers(&self) -> &[SupplierId] {
        &self.suppliers
    }

    /// Returns the number of suppliers.
    #[must_use]
    pub fn len(&self) -> usize {
        self.suppliers.len()
    }

    /// Returns true if no supplier is configured.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.suppliers.is_empty()
    }
}

impl Default for SupplierRegistry {
    fn default() -> Self {
        Self::new(DEFAULT_SUPPLIERS)
    }
}

#[cfg(test)]
#[allow(clippy::indexing_slicing)]
mod tests {
    use super::*;

    #[test]
    fn default_has_three_suppliers() {
        let registry = SupplierRegistry::default();
        assert_eq!(registry.len(), 3);
        assert_eq!(registry.suppliers()[0].as_str(), "dave");
    }

    #[test]
    fn resolve_ignores_case() {
        let registry = SupplierRegistry::default();
        assert_eq!(registry.resolve("ERIC").map(SupplierId::as_str), Some("eric"));
        assert!(registry.resolve("bob").is_none());
        assert!(!registry.contains(""));
    }

    #[test]
    fn duplicates_and_blanks_are_dropped() {
        let registry = SupplierRegistry::new(["dave", " ", "Dave", "jeff"]);
        let names: Vec<_> = registry.suppliers().iter().map(SupplierId::as_str).collect();
        assert_eq!(names, vec!["dave", "jeff"]);
    }
}
