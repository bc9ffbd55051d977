use super::Attr;
use serde::{Deserialize, Serialize};
use std::{
    collections::BTreeSet,
    ops::{BitOr, Sub},
};

/// A set of attributes, used both as a side of a dependency and as the
/// schema of a relation.
///
/// Equality, ordering and hashing only depend on the members, never on the
/// order in which they were supplied. The set is immutable once built.
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
    derive_more::Deref,
    derive_more::AsRef,
    derive_more::From,
    ref_cast::RefCast,
)]
#[cfg_attr(test, derive(proptest_derive::Arbitrary))]
#[serde(transparent)]
#[as_ref(forward)]
#[from(forward)]
#[repr(transparent)]
pub struct AttributeSet<T: Attr>(BTreeSet<T>);

impl<T: Attr> AttributeSet<T> {
    pub fn new() -> Self {
        Default::default()
    }

    pub fn single(attr: T) -> Self {
        Self(BTreeSet::from([attr]))
    }

    pub fn into_inner(self) -> BTreeSet<T> {
        self.0
    }

    pub fn is_subset(&self, other: &AttributeSet<T>) -> bool {
        self.0.is_subset(&other.0)
    }

    pub fn is_superset(&self, other: &AttributeSet<T>) -> bool {
        self.0.is_superset(&other.0)
    }
}

impl<T: Attr> Default for AttributeSet<T> {
    fn default() -> Self {
        Self(BTreeSet::new())
    }
}

impl<T: Attr> FromIterator<T> for AttributeSet<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self(BTreeSet::from_iter(iter))
    }
}

impl<T: Attr> IntoIterator for AttributeSet<T> {
    type Item = <BTreeSet<T> as IntoIterator>::Item;
    type IntoIter = <BTreeSet<T> as IntoIterator>::IntoIter;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl<'a, T: Attr> IntoIterator for &'a AttributeSet<T> {
    type Item = &'a T;
    type IntoIter = std::collections::btree_set::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

impl<'a, 'b, T: Attr> BitOr<&'b AttributeSet<T>> for &'a AttributeSet<T> {
    type Output = AttributeSet<T>;

    fn bitor(self, rhs: &'b AttributeSet<T>) -> Self::Output {
        let (to_clone, to_extend) = if self.len() < rhs.len() {
            (rhs, self)
        } else {
            (self, rhs)
        };
        let mut ans = to_clone.0.clone();
        ans.extend(to_extend.iter().cloned());
        AttributeSet(ans)
    }
}

impl<'a, 'b, T: Attr> Sub<&'b AttributeSet<T>> for &'a AttributeSet<T> {
    type Output = AttributeSet<T>;

    fn sub(self, rhs: &'b AttributeSet<T>) -> Self::Output {
        self.0.difference(&rhs.0).cloned().collect()
    }
}

#[macro_export]
macro_rules! attrs {
    () => {
        $crate::fd::AttributeSet::new()
    };
    ($($x: literal)+) => {{
        $crate::fd::AttributeSet::from_iter([$($x),+])
    }};
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::attrs;

    #[test]
    fn test_order_independent() {
        let a = AttributeSet::from([3, 1, 2]);
        let b: AttributeSet<i32> = [2, 3, 1, 1].into_iter().collect();
        assert_eq!(a, b);
        assert_eq!(a, attrs!(1 2 3));
        assert_eq!(b.len(), 3);

        let mut seen = std::collections::HashSet::new();
        seen.insert(a);
        assert!(seen.contains(&b));
    }

    #[test]
    fn test_arithmetic() {
        assert_eq!(attrs!(1 2 3), &attrs!(1 2) | &attrs!(2 3));
        assert_eq!(attrs!(1), &attrs!(1 2) - &attrs!(2 3));
        assert_eq!(AttributeSet::<i32>::new(), &attrs!(1) - &attrs!(1 2));
        assert!(attrs!(1).is_subset(&attrs!(1 2)));
        assert!(attrs!(1 2).is_superset(&attrs!(2)));
        assert!(!attrs!(1 3).is_subset(&attrs!(1 2)));
    }

    #[test]
    fn test_string_attributes() {
        let a = AttributeSet::from(["name", "id"]);
        let b = AttributeSet::single("id");
        assert!(b.is_subset(&a));
        assert_eq!(vec!["id", "name"], a.into_iter().collect::<Vec<_>>());
    }
}
