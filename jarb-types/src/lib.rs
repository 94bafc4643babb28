//! Core type definitions for jarb form annotation.
//!
//! This crate defines the shapes that flow between the constraints store,
//! the field transformer and the form renderer:
//! - [`ValidationRule`] — the server-declared rule for one entity property
//! - [`EntityConstraints`] / [`ConstraintMap`] — rules keyed by property, then by entity
//! - [`InputKind`] — the closed set of input widgets, ordered by specificity
//! - [`FieldDescriptor`] / [`EntityContext`] — the renderer's field metadata and form options
//!
//! Field and rule member names follow the JSON the server and renderer
//! exchange (`javaType`, `fractionLength`, `templateOptions`, ...).

mod constraints;
mod field;
mod input_kind;

pub use constraints::{ConstraintMap, EntityConstraints, ValidationRule, DATE_TIME_TYPE, DATE_TYPE};
pub use field::{EntityContext, FieldDescriptor, IGNORE_CONSTRAINTS_FLAG};
pub use input_kind::InputKind;

/// Result type alias using the crate's error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur when building or casting constraint types.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// A caller-supplied value is structurally invalid (e.g. a lookup key without `.`).
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    /// An untyped payload does not have the shape of a constraint map.
    #[error("invalid constraints payload: {0}")]
    InvalidPayload(String),
}

/// Deserializes an explicit JSON `null` as the type's default, the same as
/// an absent member.
pub(crate) fn null_as_default<'de, D, T>(deserializer: D) -> std::result::Result<T, D::Error>
where
    D: serde::Deserializer<'de>,
    T: Default + serde::Deserialize<'de>,
{
    Ok(<Option<T> as serde::Deserialize>::deserialize(deserializer)?.unwrap_or_default())
}
