use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum FdError {
    /// A dependency mentions attributes that the governing schema does not have.
    #[error("invalid dependency `{dependency}`: attributes `{missing}` are not in schema `{schema}`")]
    InvalidDependency {
        dependency: String,
        missing: String,
        schema: String,
    },
}
