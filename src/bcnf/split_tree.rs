use super::{decompose::Candidate, Relation, RelationSet};
use crate::{
    fd::{Attr, FunctionalDependency},
    render::render,
};
use ptree::{Style, TreeItem};
use std::{borrow::Cow, fmt::Display, io};

/// Record of a decomposition run: every relation that was split, the
/// dependency it was split by, and the two resulting pieces.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SplitTree<T: Attr> {
    Final(Relation<T>),
    Split {
        relation: Relation<T>,
        by: FunctionalDependency<T>,
        children: Vec<SplitTree<T>>,
    },
}

impl<T: Attr> SplitTree<T> {
    pub(crate) fn from_arena(arena: &[Candidate<T>]) -> Self {
        Self::build(arena, 0)
    }

    fn build(arena: &[Candidate<T>], id: usize) -> Self {
        let candidate = &arena[id];
        match &candidate.split {
            None => Self::Final(candidate.relation.clone()),
            Some(split) => Self::Split {
                relation: candidate.relation.clone(),
                by: split.by.clone(),
                children: split
                    .children
                    .iter()
                    .map(|&child| Self::build(arena, child))
                    .collect(),
            },
        }
    }

    pub fn relation(&self) -> &Relation<T> {
        match self {
            Self::Final(relation) | Self::Split { relation, .. } => relation,
        }
    }

    /// The final relations, the same set `decompose` returns.
    pub fn leaves(&self) -> RelationSet<T> {
        let mut ans = Vec::new();
        self.collect_leaves(&mut ans);
        ans.into_iter().cloned().collect()
    }

    fn collect_leaves<'a>(&'a self, ans: &mut Vec<&'a Relation<T>>) {
        match self {
            Self::Final(relation) => ans.push(relation),
            Self::Split { children, .. } => {
                for child in children {
                    child.collect_leaves(ans);
                }
            }
        }
    }

    pub fn num_of_splits(&self) -> usize {
        match self {
            Self::Final(_) => 0,
            Self::Split { children, .. } => {
                1 + children.iter().map(|c| c.num_of_splits()).sum::<usize>()
            }
        }
    }
}

impl<T: Attr + Display> TreeItem for SplitTree<T> {
    type Child = Self;

    fn write_self<W: io::Write>(&self, f: &mut W, style: &Style) -> io::Result<()> {
        match self {
            Self::Final(relation) => write!(f, "{}", style.paint(render(relation))),
            Self::Split { relation, by, .. } => write!(
                f,
                "{} by {}",
                style.paint(render(relation)),
                render(by)
            ),
        }
    }

    fn children(&self) -> Cow<[Self::Child]> {
        match self {
            Self::Final(_) => Cow::from(vec![]),
            Self::Split { children, .. } => Cow::from(children),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{attrs, bcnf::decompose_with_trace, fd, fds};

    #[test]
    fn test_leaves() {
        let tree = SplitTree::Split {
            relation: attrs!(1 2 3),
            by: fd!(2 => 3),
            children: vec![
                SplitTree::Final(attrs!(1 2)),
                SplitTree::Final(attrs!(2 3)),
            ],
        };
        assert_eq!(
            RelationSet::from_iter([attrs!(1 2), attrs!(2 3)]),
            tree.leaves()
        );
        assert_eq!(1, tree.num_of_splits());
        assert_eq!(&attrs!(1 2 3), tree.relation());
    }

    #[test]
    fn test_write_tree() {
        let tree = decompose_with_trace(&attrs!(1 2 3), &fds!(2 => 3));
        let mut out = Vec::new();
        ptree::write_tree(&tree, &mut out).unwrap();
        let out = String::from_utf8(out).unwrap();
        assert!(out.starts_with("123 by 2 -> 3"));
        assert!(out.contains("12"));
        assert!(out.contains("23"));
    }
}
