use serde::{Deserialize, Serialize};

/// Attribute identifier used by problem files.
#[derive(
    Debug,
    Default,
    Clone,
    Copy,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    Serialize,
    Deserialize,
    derive_more::Display,
    derive_more::Constructor,
    derive_more::Deref,
    derive_more::From,
    derive_more::Into,
)]
#[serde(transparent)]
pub struct AttrId(pub u32);

pub type Schema = crate::fd::AttributeSet<AttrId>;
pub type Dependencies = crate::fd::FdSet<AttrId>;

impl FromIterator<u32> for Schema {
    fn from_iter<T: IntoIterator<Item = u32>>(iter: T) -> Self {
        iter.into_iter().map(AttrId).collect()
    }
}
