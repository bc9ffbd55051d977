use super::{non_empty_subsets, Attr, AttributeSet, FdSet, FunctionalDependency};
use itertools::Itertools;
use ref_cast::RefCast;
use std::collections::BTreeSet;

type DepSet<T> = BTreeSet<FunctionalDependency<T>>;

/// Compute the closure of `seed` under `fds`, i.e. all attributes that `seed`
/// functionally determines.
pub fn attribute_closure<T: Attr>(seed: &AttributeSet<T>, fds: &FdSet<T>) -> AttributeSet<T> {
    let mut closure = seed.clone();
    while let Some(grown) = closure_pass(&closure, fds) {
        debug_assert!(grown.len() > closure.len(), "infinite loop detected");
        closure = grown;
    }
    closure
}

/// Scan every dependency once, absorbing the RHS of each one whose LHS is
/// already covered.
///
/// Return None if `current` is closed under `fds`.
fn closure_pass<T: Attr>(current: &AttributeSet<T>, fds: &FdSet<T>) -> Option<AttributeSet<T>> {
    let mut ans: BTreeSet<T> = current.iter().cloned().collect();
    for dep in fds {
        if dep.lhs().is_subset(AttributeSet::ref_cast(&ans)) {
            ans.extend(dep.rhs().iter().cloned());
        }
    }

    if ans.len() == current.len() {
        None
    } else {
        Some(ans.into())
    }
}

/// Superkey test: `candidate` determines every attribute of `relation`.
pub fn is_superkey<T: Attr>(
    candidate: &AttributeSet<T>,
    relation: &AttributeSet<T>,
    fds: &FdSet<T>,
) -> bool {
    attribute_closure(candidate, fds).is_superset(relation)
}

/// Whether `dep` follows from `fds`.
pub fn implies<T: Attr>(fds: &FdSet<T>, dep: &FunctionalDependency<T>) -> bool {
    attribute_closure(dep.lhs(), fds).is_superset(dep.rhs())
}

/// All minimal non-empty superkeys of `relation`, smallest first.
pub fn candidate_keys<T: Attr>(
    relation: &AttributeSet<T>,
    fds: &FdSet<T>,
) -> Vec<AttributeSet<T>> {
    let mut subsets = non_empty_subsets(relation);
    subsets.sort_by_key(|s| s.len());

    let mut keys: Vec<AttributeSet<T>> = Vec::new();
    for s in subsets {
        if keys.iter().any(|k| k.is_subset(&s)) {
            continue;
        }
        if is_superkey(&s, relation, fds) {
            keys.push(s);
        }
    }
    keys
}

/// Derive the closure of `fds` over the attribute universe `attrs` using
/// Armstrong's axioms.
///
/// Transitivity only chains `a -> b` and `c -> d` when `b == c` exactly, so
/// the result can be smaller than the textbook F+.
pub fn fd_set_closure<T: Attr>(attrs: &AttributeSet<T>, fds: &FdSet<T>) -> FdSet<T> {
    let subsets = non_empty_subsets(attrs);
    let mut ans = reflexive(&subsets);
    ans.extend(fds.iter().cloned());
    debug!(
        "fd closure over {} attributes: {} seed dependencies",
        attrs.len(),
        ans.len()
    );

    let mut pass = 0;
    loop {
        let before = ans.len();
        let augmented = augment(&ans, &subsets);
        ans.extend(augmented);
        let transitive = transitive(&ans);
        ans.extend(transitive);

        pass += 1;
        trace!("pass #{}: {} -> {} dependencies", pass, before, ans.len());
        if ans.len() == before {
            break;
        }
    }

    debug!("fd closure done in {} passes: {} dependencies", pass, ans.len());
    FdSet::from(ans)
}

/// `alpha -> beta` for every non-empty `beta ⊆ alpha`.
fn reflexive<T: Attr>(subsets: &[AttributeSet<T>]) -> DepSet<T> {
    subsets
        .iter()
        .flat_map(|alpha| {
            non_empty_subsets(alpha)
                .into_iter()
                .map(move |beta| FunctionalDependency::new(alpha.clone(), beta))
        })
        .collect()
}

/// `gamma ∪ alpha -> gamma ∪ beta` for every `alpha -> beta` and every gamma.
fn augment<T: Attr>(
    deps: &DepSet<T>,
    subsets: &[AttributeSet<T>],
) -> Vec<FunctionalDependency<T>> {
    deps.iter()
        .cartesian_product(subsets.iter())
        .map(|(dep, gamma)| dep.augment(gamma))
        .filter(|dep| !deps.contains(dep))
        .collect()
}

/// `a -> d` for every pair `a -> b`, `b -> d`.
fn transitive<T: Attr>(deps: &DepSet<T>) -> Vec<FunctionalDependency<T>> {
    let by_lhs = deps
        .iter()
        .map(|dep| (dep.lhs(), dep.rhs()))
        .into_group_map();

    deps.iter()
        .flat_map(|first| {
            by_lhs
                .get(first.rhs())
                .into_iter()
                .flatten()
                .map(move |&rhs| FunctionalDependency::new(first.lhs().clone(), rhs.clone()))
        })
        .filter(|dep| !deps.contains(dep))
        .collect()
}
