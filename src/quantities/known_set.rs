// src/quantities/known_set.rs

use std::collections::BTreeSet;
use crate::quantities::{QuantityId, QuantitySet};

/// The quantities the user has actually provided for this pass.
///
/// Recomputed on every validation and never stored on the session.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct KnownSet {
    ids: BTreeSet<QuantityId>,
}

impl KnownSet {
    /// Scans the set in registry order and collects every provided quantity.
    ///
    /// # Example
    /// ```
    /// use rs_kinematics::quantities::{KnownSet, QuantityId, QuantitySet};
    ///
    /// let mut set = QuantitySet::new();
    /// set.set(QuantityId::Time, 3.0);
    /// set.set(QuantityId::YInitial, 0.0);
    ///
    /// let known = KnownSet::extract(&set);
    /// assert!(known.contains(QuantityId::Time));
    /// assert!(known.contains(QuantityId::YInitial));
    /// assert!(known.contains(QuantityId::Angle));
    /// assert!(!known.contains(QuantityId::Range));
    /// ```
    pub fn extract(set: &QuantitySet) -> Self {
        set.iter()
            .filter(|(_, value)| value.is_provided())
            .map(|(id, _)| id)
            .collect()
    }

    pub fn contains(&self, id: QuantityId) -> bool {
        self.ids.contains(&id)
    }

    pub fn len(&self) -> usize {
        self.ids.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }

    /// Known quantities in registry order.
    pub fn iter(&self) -> impl Iterator<Item = QuantityId> + '_ {
        self.ids.iter().copied()
    }
}

impl FromIterator<QuantityId> for KnownSet {
    fn from_iter<I: IntoIterator<Item = QuantityId>>(iter: I) -> Self {
        Self { ids: iter.into_iter().collect() }
    }
}
