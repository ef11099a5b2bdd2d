//! Ward Constraint
//!
//! The constraint contract and the built-in constraint kinds.
//!
//! A constraint is configured once through `set_parameters` (or
//! `import_state`) and is then read-only: `validate` may be called
//! concurrently from many threads. Validation failures come back as
//! `ValidationResult`s; misuse (wrong data kind, null where not tolerated)
//! is a `ConfigError`.

mod context;
mod contract;
pub mod kinds;
mod params;
mod result;

pub use context::ValidationContext;
pub use contract::Constraint;
pub use kinds::{
    EnumConstraint, LowerCaseConstraint, MaxLengthConstraint, MinLengthConstraint,
    RangeConstraint, RegexConstraint, RequiredConstraint, TypeConstraint, UpperCaseConstraint,
};
pub use result::ValidationResult;
