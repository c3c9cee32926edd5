//! Read-only access to the built-in tables keyed by [`Category`].
//!
//! The catalog is process-wide constant data. Lookups hand out `'static`
//! references so callers can hold matched entries without cloning and any
//! number of threads can read concurrently.

use crate::catalog::identity::Category;
use crate::catalog::model::CapabilityOption;
use crate::catalog::tables::{
    DISCOVERY_OPTIONS, ENCRYPTION_OPTIONS, MULTIPLEXER_OPTIONS, PROTOCOL_OPTIONS,
    TRANSPORT_OPTIONS,
};
use serde::Serialize;

#[derive(Debug, Clone, Copy)]
/// Handle over the five capability tables.
pub struct Catalog {
    _private: (),
}

/// The built-in catalog.
pub static CATALOG: Catalog = Catalog { _private: () };

#[derive(Debug, Clone, Serialize)]
/// Serializable listing of one table, used by `p2p-wizard catalog`.
pub struct CategoryListing {
    pub category: Category,
    pub field: &'static str,
    pub options: &'static [CapabilityOption],
}

impl Catalog {
    /// Every row of a table, in declaration order.
    pub fn options(&self, category: Category) -> &'static [CapabilityOption] {
        match category {
            Category::Transport => TRANSPORT_OPTIONS,
            Category::Multiplexer => MULTIPLEXER_OPTIONS,
            Category::Encryption => ENCRYPTION_OPTIONS,
            Category::Discovery => DISCOVERY_OPTIONS,
            Category::Protocol => PROTOCOL_OPTIONS,
        }
    }

    /// First row of `category` whose `value` equals `value` exactly.
    ///
    /// Returns `None` instead of erroring; unmatched requests are dropped by
    /// the selector rather than reported.
    pub fn find(&self, category: Category, value: &str) -> Option<&'static CapabilityOption> {
        self.options(category)
            .iter()
            .find(|option| option.value == value)
    }

    /// Listings for the requested categories, or for all of them when the
    /// filter is empty.
    pub fn listings(&self, filter: &[Category]) -> Vec<CategoryListing> {
        Category::ALL
            .into_iter()
            .filter(|category| filter.is_empty() || filter.contains(category))
            .map(|category| CategoryListing {
                category,
                field: category.selection_field(),
                options: self.options(category),
            })
            .collect()
    }
}
