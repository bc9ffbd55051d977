use super::{Attr, AttributeSet};

/// Enumerate all `2^n - 1` non-empty subsets of `set`.
///
/// Each call builds a fresh list, so the result can be iterated as often as
/// needed. The order follows a depth-first include/exclude walk over the
/// members in ascending order.
pub fn non_empty_subsets<T: Attr>(set: &AttributeSet<T>) -> Vec<AttributeSet<T>> {
    let elements: Vec<&T> = set.iter().collect();
    let mut ans = Vec::new();
    let mut selection = Vec::with_capacity(elements.len());
    include_or_exclude(&elements, &mut selection, &mut ans);
    ans
}

fn include_or_exclude<'a, T: Attr>(
    rest: &[&'a T],
    selection: &mut Vec<&'a T>,
    ans: &mut Vec<AttributeSet<T>>,
) {
    match rest.split_first() {
        Some((&first, rest)) => {
            selection.push(first);
            include_or_exclude(rest, selection, ans);
            selection.pop();
            include_or_exclude(rest, selection, ans);
        }
        None => {
            if !selection.is_empty() {
                ans.push(selection.iter().map(|&attr| attr.clone()).collect());
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::attrs;
    use std::collections::BTreeSet;

    #[test]
    fn test_power_set_minus_empty() {
        let subsets = non_empty_subsets(&attrs!(1 2 3));
        assert_eq!(subsets.len(), 7);

        let actual: BTreeSet<_> = subsets.into_iter().collect();
        let expect: BTreeSet<AttributeSet<i32>> = BTreeSet::from([
            attrs!(1),
            attrs!(2),
            attrs!(3),
            attrs!(1 2),
            attrs!(1 3),
            attrs!(2 3),
            attrs!(1 2 3),
        ]);
        assert_eq!(actual, expect);
    }

    #[test]
    fn test_degenerate() {
        assert!(non_empty_subsets(&AttributeSet::<i32>::new()).is_empty());
        assert_eq!(vec![attrs!(5)], non_empty_subsets(&attrs!(5)));
    }

    #[test]
    fn test_restartable() {
        let set = attrs!(4 2 8 6);
        let first = non_empty_subsets(&set);
        let second = non_empty_subsets(&AttributeSet::from([8, 6, 4, 2]));
        assert_eq!(first, second);
        assert_eq!(first.len(), 15);
        assert!(first.iter().all(|s| !s.is_empty() && s.is_subset(&set)));
    }
}
