//! Boyce-Codd normal form decomposition.
//!
//! The result always covers the input schema exactly. Dependency
//! preservation is not guaranteed.

mod decompose;
mod split_tree;

pub use decompose::{decompose, decompose_with_trace, find_violation, is_bcnf};
pub use split_tree::SplitTree;

use crate::fd::{Attr, AttributeSet};
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

/// The attribute set of one table.
pub type Relation<T> = AttributeSet<T>;

/// The tables produced by a decomposition.
#[derive(
    Debug,
    Clone,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    derive_more::Deref,
    derive_more::AsRef,
    derive_more::From,
)]
#[serde(transparent)]
#[as_ref(forward)]
#[from(forward)]
pub struct RelationSet<T: Attr>(BTreeSet<Relation<T>>);

impl<T: Attr> RelationSet<T> {
    pub fn new() -> Self {
        Default::default()
    }

    /// Union of the attributes of every relation.
    pub fn attributes(&self) -> AttributeSet<T> {
        self.iter().flat_map(|r| r.iter()).cloned().collect()
    }
}

impl<T: Attr> Default for RelationSet<T> {
    fn default() -> Self {
        Self(BTreeSet::new())
    }
}

impl<T: Attr> FromIterator<Relation<T>> for RelationSet<T> {
    fn from_iter<I: IntoIterator<Item = Relation<T>>>(iter: I) -> Self {
        Self(BTreeSet::from_iter(iter))
    }
}

impl<T: Attr> IntoIterator for RelationSet<T> {
    type Item = <BTreeSet<Relation<T>> as IntoIterator>::Item;
    type IntoIter = <BTreeSet<Relation<T>> as IntoIterator>::IntoIter;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}
