//! Collection tracker: the set of catalog identities ever acquired.

use std::collections::BTreeSet;

use super::DefinitionId;

/// Monotonically growing set of discovered definitions.
///
/// Purely additive; nothing removes entries short of a full session reset.
/// A `BTreeSet` keeps iteration order deterministic for the collection UI
/// and for serialization.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CollectionState {
    unlocked: BTreeSet<DefinitionId>,
}

impl CollectionState {
    /// Records the identity, returning `true` only on first discovery.
    ///
    /// Idempotent: re-unlocking a known identity changes nothing and must
    /// not trigger another reveal.
    pub fn unlock(&mut self, id: DefinitionId) -> bool {
        self.unlocked.insert(id)
    }

    pub fn is_unlocked(&self, id: &DefinitionId) -> bool {
        self.unlocked.contains(id)
    }

    pub fn len(&self) -> usize {
        self.unlocked.len()
    }

    pub fn is_empty(&self) -> bool {
        self.unlocked.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &DefinitionId> {
        self.unlocked.iter()
    }
}
