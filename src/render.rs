//! Human-readable rendering, kept apart from the value types themselves.

use crate::{
    bcnf::RelationSet,
    fd::{Attr, AttributeSet, FdSet, FunctionalDependency},
};
use std::fmt;

/// Borrowing wrapper that renders a value through [`fmt::Display`].
#[derive(Debug, Clone, Copy)]
pub struct Render<'a, V: ?Sized>(&'a V);

pub fn render<V: ?Sized>(value: &V) -> Render<'_, V> {
    Render(value)
}

/// Members concatenated, e.g. `134`. The empty set renders as `{}`.
impl<T: Attr + fmt::Display> fmt::Display for Render<'_, AttributeSet<T>> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.0.is_empty() {
            return write!(f, "{{}}");
        }

        for attr in self.0.iter() {
            write!(f, "{attr}")?;
        }
        Ok(())
    }
}

impl<T: Attr + fmt::Display> fmt::Display for Render<'_, FunctionalDependency<T>> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} -> {}", render(self.0.lhs()), render(self.0.rhs()))
    }
}

/// One dependency per line.
impl<T: Attr + fmt::Display> fmt::Display for Render<'_, FdSet<T>> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, dep) in self.0.iter().enumerate() {
            if i != 0 {
                writeln!(f)?;
            }
            write!(f, "{}", render(dep))?;
        }
        Ok(())
    }
}

impl<T: Attr + fmt::Display> fmt::Display for Render<'_, RelationSet<T>> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{{")?;
        for (i, relation) in self.0.iter().enumerate() {
            if i != 0 {
                write!(f, " ")?;
            }
            write!(f, "{}", render(relation))?;
        }
        write!(f, "}}")
    }
}
