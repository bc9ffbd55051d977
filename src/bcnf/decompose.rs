use super::{Relation, RelationSet, SplitTree};
use crate::fd::{is_superkey, Attr, AttributeSet, FdSet, FunctionalDependency};

/// A relation that went through the worklist, and how it was split if it was.
#[derive(Debug, Clone)]
pub(crate) struct Candidate<T: Attr> {
    pub(crate) relation: Relation<T>,
    pub(crate) split: Option<Split<T>>,
}

#[derive(Debug, Clone)]
pub(crate) struct Split<T: Attr> {
    pub(crate) by: FunctionalDependency<T>,
    /// Arena ids of `relation - rhs` and `lhs ∪ rhs`.
    pub(crate) children: [usize; 2],
}

/// Find the first dependency of `fds` that violates BCNF on `relation`: it is
/// non-trivial, lies within `relation`, and its LHS is not a superkey.
pub fn find_violation<'a, T: Attr>(
    relation: &AttributeSet<T>,
    fds: &'a FdSet<T>,
) -> Option<&'a FunctionalDependency<T>> {
    fds.iter().find(|dep| {
        !dep.is_trivial() && dep.is_within(relation) && !is_superkey(dep.lhs(), relation, fds)
    })
}

pub fn is_bcnf<T: Attr>(relation: &AttributeSet<T>, fds: &FdSet<T>) -> bool {
    find_violation(relation, fds).is_none()
}

/// Decompose `schema` into relations that have no BCNF violation under `fds`.
///
/// The shape of the result depends on the order in which violations are
/// found, but the relations always cover `schema` exactly.
pub fn decompose<T: Attr>(schema: &AttributeSet<T>, fds: &FdSet<T>) -> RelationSet<T> {
    let ans: RelationSet<T> = run(schema, fds)
        .into_iter()
        .filter(|c| c.split.is_none())
        .map(|c| c.relation)
        .collect();
    debug!(
        "decomposed {} attributes into {} relations",
        schema.len(),
        ans.len()
    );
    ans
}

/// Same as [`decompose`], but keep every split that was made.
pub fn decompose_with_trace<T: Attr>(schema: &AttributeSet<T>, fds: &FdSet<T>) -> SplitTree<T> {
    SplitTree::from_arena(&run(schema, fds))
}

/// Run the worklist. Every relation ever pushed ends up in the returned arena;
/// the input schema has id 0.
fn run<T: Attr>(schema: &AttributeSet<T>, fds: &FdSet<T>) -> Vec<Candidate<T>> {
    let mut arena = vec![Candidate {
        relation: schema.clone(),
        split: None,
    }];
    let mut worklist = vec![0];

    while let Some(id) = worklist.pop() {
        let relation = &arena[id].relation;
        let dep = match find_violation(relation, fds) {
            Some(dep) => dep,
            None => {
                trace!("relation #{} is in BCNF", id);
                continue;
            }
        };

        let t1 = relation - dep.rhs();
        let t2 = dep.attributes();
        debug_assert!(t1.len() < relation.len() && t2.len() < relation.len());

        let children = [arena.len(), arena.len() + 1];
        debug!(
            "split relation #{} ({} attributes) into #{} and #{}",
            id,
            relation.len(),
            children[0],
            children[1]
        );
        arena.push(Candidate {
            relation: t1,
            split: None,
        });
        arena.push(Candidate {
            relation: t2,
            split: None,
        });
        arena[id].split = Some(Split {
            by: dep.clone(),
            children,
        });
        worklist.extend(children);
    }

    arena
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        attrs, fd, fds,
        tests::{assert_bcnf_decomposition, fd_set_strategy, Column, SCENARIO},
    };
    use once_cell::sync::Lazy;
    use proptest::prelude::*;

    #[test]
    fn test_find_violation() {
        let (schema, fds) = Lazy::force(&SCENARIO);
        assert_eq!(Some(&fd!(1 => 3 4)), find_violation(schema, fds));
        assert_eq!(Some(&fd!(3 => 4)), find_violation(&attrs!(1 3 4), fds));
        assert!(is_bcnf(&attrs!(1 2 7), fds));
        assert!(is_bcnf(&attrs!(3 4), fds));
        assert!(is_bcnf(&attrs!(1), fds));
        assert!(is_bcnf(&AttributeSet::new(), fds));
    }

    #[test]
    fn test_decompose() {
        let (schema, fds) = Lazy::force(&SCENARIO);
        let relations = decompose(schema, fds);
        assert!(relations.len() > 1);
        assert_bcnf_decomposition(schema, fds, &relations);
    }

    #[test]
    fn test_decompose_already_bcnf() {
        let schema = attrs!(1 2);
        let fds = fds!(1 => 2; 2 => 1);
        assert_eq!(RelationSet::from_iter([schema.clone()]), decompose(&schema, &fds));

        let schema = attrs!(1 2 3);
        assert_eq!(
            RelationSet::from_iter([schema.clone()]),
            decompose(&schema, &fds!())
        );
    }

    #[test]
    fn test_trivial_and_irrelevant_dependencies() {
        let schema = attrs!(1 2 3);
        let fds = fds!(1 2 => 1; 3 => 3; 1 2 3 => 2 3; 4 => 1; 1 => 4);
        assert_eq!(RelationSet::from_iter([schema.clone()]), decompose(&schema, &fds));
    }

    #[test]
    fn test_decompose_chain() {
        let schema = attrs!(1 2 3 4);
        let fds = fds!(1 => 2; 2 => 3; 3 => 4);
        let relations = decompose(&schema, &fds);
        assert_bcnf_decomposition(&schema, &fds, &relations);
    }

    #[test]
    fn test_trace() {
        let (schema, fds) = Lazy::force(&SCENARIO);
        let tree = decompose_with_trace(schema, fds);
        assert_eq!(schema, tree.relation());
        assert_eq!(decompose(schema, fds), tree.leaves());
        assert!(tree.num_of_splits() > 0);
        assert_split_tree(&tree, fds);

        let single = decompose_with_trace(&attrs!(1 2), &fds!(1 => 2));
        assert_eq!(SplitTree::Final(attrs!(1 2)), single);
    }

    fn assert_split_tree<T: Attr>(tree: &SplitTree<T>, fds: &FdSet<T>) {
        match tree {
            SplitTree::Final(relation) => assert!(is_bcnf(relation, fds)),
            SplitTree::Split {
                relation,
                by,
                children,
            } => {
                assert_eq!(Some(by), find_violation(relation, fds));
                assert_eq!(2, children.len());
                let covered = children[0].relation() | children[1].relation();
                assert_eq!(relation, &covered);
                for child in children {
                    assert!(child.relation().len() < relation.len());
                    assert_split_tree(child, fds);
                }
            }
        }
    }

    proptest! {
        #[test]
        fn test_decompose_props(fds in fd_set_strategy(Column::ALL.len(), 8)) {
            let schema = Column::all();
            let relations = decompose(&schema, &fds);
            assert_bcnf_decomposition(&schema, &fds, &relations);
            assert_split_tree(&decompose_with_trace(&schema, &fds), &fds);
        }
    }
}
