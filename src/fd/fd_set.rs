use super::{Attr, AttributeSet, FdError, FunctionalDependency};
use crate::render::render;
use ref_cast::RefCast;
use serde::{Deserialize, Serialize};
use std::{collections::BTreeSet, fmt::Display};

/// A set of functional dependencies.
///
/// Dependencies are kept sorted by `(lhs, rhs)`, which is also the order in
/// which every routine in this crate scans them.
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
pub struct FdSet<T: Attr>(BTreeSet<FunctionalDependency<T>>);

impl<T: Attr> FdSet<T> {
    pub fn new() -> Self {
        Default::default()
    }

    /// Build a set from `deps`, rejecting any dependency that mentions an
    /// attribute outside `schema`.
    pub fn validated(
        schema: &AttributeSet<T>,
        deps: impl IntoIterator<Item = FunctionalDependency<T>>,
    ) -> Result<Self, FdError>
    where
        T: Display,
    {
        let ans: Self = deps.into_iter().collect();
        ans.validate(schema)?;
        Ok(ans)
    }

    /// Check that every dependency only mentions attributes of `schema`.
    pub fn validate(&self, schema: &AttributeSet<T>) -> Result<(), FdError>
    where
        T: Display,
    {
        for dep in self.iter() {
            let missing: BTreeSet<T> = dep
                .lhs()
                .iter()
                .chain(dep.rhs().iter())
                .filter(|attr| !schema.contains(*attr))
                .cloned()
                .collect();
            if !missing.is_empty() {
                return Err(FdError::InvalidDependency {
                    dependency: render(dep).to_string(),
                    missing: render(AttributeSet::ref_cast(&missing)).to_string(),
                    schema: render(schema).to_string(),
                });
            }
        }
        Ok(())
    }

    /// Return a set of all attributes mentioned by the dependencies.
    pub fn attributes(&self) -> AttributeSet<T> {
        self.iter()
            .flat_map(|dep| dep.lhs().iter().chain(dep.rhs().iter()))
            .cloned()
            .collect()
    }

    pub fn is_superset(&self, other: &FdSet<T>) -> bool {
        self.0.is_superset(&other.0)
    }

    pub fn into_inner(self) -> BTreeSet<FunctionalDependency<T>> {
        self.0
    }
}

impl<T: Attr> Default for FdSet<T> {
    fn default() -> Self {
        Self(BTreeSet::new())
    }
}

impl<T: Attr> FromIterator<FunctionalDependency<T>> for FdSet<T> {
    fn from_iter<I: IntoIterator<Item = FunctionalDependency<T>>>(iter: I) -> Self {
        Self(BTreeSet::from_iter(iter))
    }
}

impl<T: Attr> IntoIterator for FdSet<T> {
    type Item = <BTreeSet<FunctionalDependency<T>> as IntoIterator>::Item;
    type IntoIter = <BTreeSet<FunctionalDependency<T>> as IntoIterator>::IntoIter;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl<'a, T: Attr> IntoIterator for &'a FdSet<T> {
    type Item = &'a FunctionalDependency<T>;
    type IntoIter = std::collections::btree_set::Iter<'a, FunctionalDependency<T>>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

#[macro_export]
macro_rules! fds {
    () => {
        $crate::fd::FdSet::new()
    };
    ($($($l: literal)* => $($r: literal)*);+ $(;)?) => {{
        $crate::fd::FdSet::from_iter([$($crate::fd!($($l)* => $($r)*)),+])
    }};
}
