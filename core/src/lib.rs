//! Ward Core Types
//!
//! This crate provides the foundational types used throughout Ward:
//! - The closed data kind catalog (`DataKind`)
//! - Typed values (the `Value` enum, one variant per data kind)
//! - The `Version` value type
//! - Symbolic error identifiers and the numeric error-code facility
//! - The message provider seam used to render validation messages
//! - Configuration and conversion error types

mod code;
mod error;
mod kind;
mod messages;
mod value;
mod version;

pub use code::*;
pub use error::*;
pub use kind::*;
pub use messages::*;
pub use value::*;
pub use version::*;
