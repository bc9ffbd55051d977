use crate::{
    attrs,
    bcnf::{decompose, is_bcnf, RelationSet},
    fd::{Attr, AttributeSet, FdSet, FunctionalDependency},
    fds,
};
use once_cell::sync::Lazy;
use proptest::prelude::*;

pub(crate) static SCENARIO: Lazy<(AttributeSet<i32>, FdSet<i32>)> = Lazy::new(|| {
    (
        attrs!(1 2 3 4 5 7),
        fds!(1 => 3 4; 2 => 5; 3 => 4; 1 2 => 1 2 3 4 5 7),
    )
});

#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    derive_more::Display,
    proptest_derive::Arbitrary,
)]
pub(crate) enum Column {
    A,
    B,
    C,
    D,
    E,
    F,
}

impl Column {
    pub(crate) const ALL: [Column; 6] = [
        Column::A,
        Column::B,
        Column::C,
        Column::D,
        Column::E,
        Column::F,
    ];

    pub(crate) fn all() -> AttributeSet<Column> {
        Self::ALL.into_iter().collect()
    }
}

/// Dependency sets over the first `columns` columns, with small sides.
pub(crate) fn fd_set_strategy(
    columns: usize,
    max_len: usize,
) -> impl Strategy<Value = FdSet<Column>> {
    let column = prop::sample::select(Column::ALL[..columns].to_vec());
    let side = prop::collection::btree_set(column, 0..3);
    prop::collection::vec((side.clone(), side), 0..max_len).prop_map(|pairs| {
        pairs
            .into_iter()
            .map(|(l, r)| FunctionalDependency::new(l.into(), r.into()))
            .collect()
    })
}

/// Check that `relations` exactly covers `schema`, that no relation has a
/// violation left, and that decomposing any relation again is a no-op.
pub(crate) fn assert_bcnf_decomposition<T: Attr>(
    schema: &AttributeSet<T>,
    fds: &FdSet<T>,
    relations: &RelationSet<T>,
) {
    assert_eq!(schema, &relations.attributes());
    for relation in relations.iter() {
        assert!(is_bcnf(relation, fds), "{relation:?} is not in BCNF");
        assert_eq!(
            RelationSet::from_iter([relation.clone()]),
            decompose(relation, fds)
        );
    }
}
