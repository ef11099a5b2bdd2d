//! Ward Registry
//!
//! The constraint registry maps a case-sensitive constraint name to a
//! factory producing an unconfigured instance. It is built once through
//! `RegistryBuilder` and is immutable afterwards.
//!
//! The registry also owns the `TypeResolver` handed to constraints that
//! resolve enumerations by name, and the `ConstraintState` envelope used to
//! persist a configured constraint in any serde format.

mod builder;
mod registry;
mod state;

pub use builder::{is_valid_name, RegistryBuilder, RegistryError};
pub use registry::{ConstraintFactory, FactoryContext, Registry};
pub use state::ConstraintState;
