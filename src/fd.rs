//! Functional dependencies and their closures.
//!
//! Ref: W. W. Armstrong, Dependency Structures of Data Base Relationships, 1974

mod attribute_set;
mod closure;
mod dependency;
mod error;
mod fd_set;
mod subsets;

pub use attribute_set::AttributeSet;
pub use closure::{attribute_closure, candidate_keys, fd_set_closure, implies, is_superkey};
pub use dependency::FunctionalDependency;
pub use error::FdError;
pub use fd_set::FdSet;
pub use subsets::non_empty_subsets;

/// Trait for schema attribute.
pub trait Attr: Clone + Ord + Eq + std::hash::Hash + std::fmt::Debug {}
impl<T: Clone + Ord + Eq + std::hash::Hash + std::fmt::Debug> Attr for T {}
