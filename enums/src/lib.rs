//! Ward Enums
//!
//! Derive name/value tables, flags mode and flag masks for enumerations.
//!
//! Enumerations come from two sources:
//! - an explicit caller-supplied table (`EnumDescriptor::from_table`)
//! - a definition resolved by type identifier through a `TypeResolver`,
//!   typically an `EnumCatalog` filled through its registration API, from a
//!   JSON configuration file, or from Rust enums implementing `DescribeEnum`
//!
//! `EnumDescriptor::accepts` implements the membership rule shared by every
//! enum-backed constraint.

mod catalog;
mod definition;
mod descriptor;
mod error;

pub use catalog::{EnumCatalog, TypeResolver};
pub use definition::{DescribeEnum, EnumDefinition, EnumMember};
pub use descriptor::EnumDescriptor;
pub use error::{EnumError, EnumResult};
