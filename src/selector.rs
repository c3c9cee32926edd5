//! Resolve requested identifiers against the catalog.
//!
//! Unknown identifiers are dropped without error. Duplicates that match are
//! kept; deduplication happens later and only where the output calls for it.

use crate::catalog::{CATALOG, CapabilityOption, Category};
use crate::selection::Selection;
use tracing::trace;

/// Matched entries for one category, in request order.
pub type Matches = Vec<&'static CapabilityOption>;

/// Resolve `requested` against one table.
pub fn select<S: AsRef<str>>(category: Category, requested: &[S]) -> Matches {
    requested
        .iter()
        .filter_map(|raw| {
            let raw = raw.as_ref();
            let found = CATALOG.find(category, raw);
            if found.is_none() {
                trace!(%category, requested = raw, "dropping unknown identifier");
            }
            found
        })
        .collect()
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
/// The selector's output for every category of a selection.
pub struct MatchedSelection {
    pub transports: Matches,
    pub stream_muxers: Matches,
    pub connection_encryption: Matches,
    pub peer_discovery: Matches,
    pub protocols: Matches,
}

impl MatchedSelection {
    /// Run the selector once per category.
    pub fn resolve(selection: &Selection) -> Self {
        Self {
            transports: select(Category::Transport, &selection.transports),
            stream_muxers: select(Category::Multiplexer, &selection.stream_muxers),
            connection_encryption: select(
                Category::Encryption,
                &selection.connection_encryption,
            ),
            peer_discovery: select(Category::Discovery, &selection.peer_discovery),
            protocols: select(Category::Protocol, &selection.protocols),
        }
    }

    pub fn get(&self, category: Category) -> &[&'static CapabilityOption] {
        match category {
            Category::Transport => &self.transports,
            Category::Multiplexer => &self.stream_muxers,
            Category::Encryption => &self.connection_encryption,
            Category::Discovery => &self.peer_discovery,
            Category::Protocol => &self.protocols,
        }
    }

    /// Every matched entry tagged with its category, categories in
    /// [`Category::ALL`] order and entries in request order.
    pub fn iter(&self) -> impl Iterator<Item = (Category, &'static CapabilityOption)> + '_ {
        Category::ALL.into_iter().flat_map(move |category| {
            self.get(category)
                .iter()
                .map(move |option| (category, *option))
        })
    }

    pub fn total(&self) -> usize {
        Category::ALL.iter().map(|c| self.get(*c).len()).sum()
    }
}
