#[macro_use]
extern crate tracing;

use serde::{Deserialize, Serialize};
use std::time::Duration;

pub mod attribute;
pub mod bcnf;
pub mod fd;
pub mod render;
pub mod utils;

pub mod problem;
pub use problem::*;

#[cfg(test)]
pub(crate) mod tests;

pub use attribute::{AttrId, Dependencies, Schema};
pub use bcnf::{decompose, RelationSet};
pub use fd::{
    attribute_closure, fd_set_closure, non_empty_subsets, AttributeSet, FdSet,
    FunctionalDependency,
};

/// What a computation produced for one problem.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Outcome {
    Closure { seed: Schema, closure: Schema },
    FdClosure(Dependencies),
    Bcnf(RelationSet<AttrId>),
    Keys(Vec<Schema>),
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Report {
    pub name: String,
    pub method: String,
    #[serde(with = "serde_time")]
    pub load_time: Duration,
    #[serde(with = "serde_time")]
    pub cal_time: Duration,
    pub outcome: Outcome,
}

mod serde_time {
    use super::*;
    use serde::{de::Deserializer, ser::Serializer};

    pub fn serialize<S: Serializer>(t: &Duration, s: S) -> Result<S::Ok, S::Error> {
        s.serialize_f64(t.as_secs_f64())
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(d: D) -> Result<Duration, D::Error> {
        let t = <f64>::deserialize(d)?;
        Ok(Duration::from_secs_f64(t))
    }
}
