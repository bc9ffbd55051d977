use super::{Attr, AttributeSet};
use serde::{Deserialize, Serialize};

/// A functional dependency `lhs -> rhs`.
#[derive(
    Debug,
    Clone,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    Serialize,
    Deserialize,
    derive_more::Constructor,
)]
pub struct FunctionalDependency<T: Attr> {
    lhs: AttributeSet<T>,
    rhs: AttributeSet<T>,
}

impl<T: Attr> FunctionalDependency<T> {
    pub fn lhs(&self) -> &AttributeSet<T> {
        &self.lhs
    }

    pub fn rhs(&self) -> &AttributeSet<T> {
        &self.rhs
    }

    /// A dependency is trivial if its RHS is already part of its LHS.
    pub fn is_trivial(&self) -> bool {
        self.rhs.is_subset(&self.lhs)
    }

    /// All attributes mentioned by the dependency.
    pub fn attributes(&self) -> AttributeSet<T> {
        &self.lhs | &self.rhs
    }

    /// Whether both sides are contained in `relation`.
    pub fn is_within(&self, relation: &AttributeSet<T>) -> bool {
        self.lhs.is_subset(relation) && self.rhs.is_subset(relation)
    }

    /// `gamma ∪ lhs -> gamma ∪ rhs`
    pub fn augment(&self, gamma: &AttributeSet<T>) -> Self {
        Self::new(gamma | &self.lhs, gamma | &self.rhs)
    }
}

#[macro_export]
macro_rules! fd {
    ($($l: literal)* => $($r: literal)*) => {
        $crate::fd::FunctionalDependency::new(
            $crate::fd::AttributeSet::from_iter([$($l),*]),
            $crate::fd::AttributeSet::from_iter([$($r),*]),
        )
    };
}
