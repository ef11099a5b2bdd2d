//! Enum definition error types.

use thiserror::Error;
use ward_core::DataKind;

/// Result type for enum definition operations.
pub type EnumResult<T> = Result<T, EnumError>;

/// Errors raised while registering or loading enum definitions.
#[derive(Debug, Error)]
pub enum EnumError {
    #[error("Enum definition has an empty name")]
    EmptyName,

    #[error("Duplicate enum type: {0}")]
    DuplicateType(String),

    #[error("Duplicate member '{member}' in enum {type_name}")]
    DuplicateMember { type_name: String, member: String },

    #[error("Enum {type_name}: member name '{member}' must be non-empty and free of '='")]
    InvalidMemberName { type_name: String, member: String },

    #[error("Enum {type_name}: underlying kind {kind} is not an integer kind")]
    NotIntegerKind { type_name: String, kind: DataKind },

    #[error("Enum {type_name}: member '{member}' value {value} does not fit {kind}")]
    ValueOutOfRange {
        type_name: String,
        member: String,
        value: i128,
        kind: DataKind,
    },

    #[error("Invalid enum catalog: {0}")]
    Json(#[from] serde_json::Error),
}

impl EnumError {
    pub fn duplicate_member(type_name: impl Into<String>, member: impl Into<String>) -> Self {
        Self::DuplicateMember {
            type_name: type_name.into(),
            member: member.into(),
        }
    }
}
