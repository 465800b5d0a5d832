//! Static category registry.
//!
//! The registry holds the fixed `RecordCategory -> [adapter]` mapping built
//! once at process start from injected configuration. It performs no I/O and
//! never mutates after construction; multiple independent registries with
//! different credential sets can coexist in one process.

use std::collections::BTreeMap;
use std::sync::Arc;

use crate::providers::RecordProvider;
use crate::types::RecordCategory;

/// Fixed mapping from category to the adapters serving it.
///
/// Adapter order within a category is significant: the dispatcher merges
/// per-category outcomes first-success-wins in this order.
pub struct CategoryRegistry {
    bindings: BTreeMap<RecordCategory, Vec<Arc<dyn RecordProvider>>>,
}

impl CategoryRegistry {
    pub fn builder() -> RegistryBuilder {
        RegistryBuilder::default()
    }

    /// The supported categories of this registry, in fixed order.
    pub fn list_categories(&self) -> Vec<RecordCategory> {
        self.bindings.keys().copied().collect()
    }

    /// Adapters bound to `category`, in declaration order. Empty for a
    /// category this registry does not serve; never an error.
    pub fn adapters_for(&self, category: RecordCategory) -> &[Arc<dyn RecordProvider>] {
        self.bindings
            .get(&category)
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    /// True if at least one adapter for the category has real credentials.
    pub fn is_configured(&self, category: RecordCategory) -> bool {
        self.adapters_for(category)
            .iter()
            .any(|adapter| adapter.is_configured())
    }

    /// Status report: one configuration flag per registered category.
    /// Pure read, safe to call frequently.
    pub fn status(&self) -> BTreeMap<RecordCategory, bool> {
        self.bindings
            .keys()
            .map(|&category| (category, self.is_configured(category)))
            .collect()
    }
}

/// Explicit, versioned construction of a registry; no runtime discovery.
#[derive(Default)]
pub struct RegistryBuilder {
    bindings: BTreeMap<RecordCategory, Vec<Arc<dyn RecordProvider>>>,
}

impl RegistryBuilder {
    pub fn bind(mut self, category: RecordCategory, provider: Arc<dyn RecordProvider>) -> Self {
        self.bindings.entry(category).or_default().push(provider);
        self
    }

    pub fn build(self) -> CategoryRegistry {
        CategoryRegistry {
            bindings: self.bindings,
        }
    }
}
