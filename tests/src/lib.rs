//! Ward Scenario Test Framework
//!
//! A fluent API for end-to-end tests: notation is parsed through the
//! registry, values are converted from canonical text, and every step's
//! results are checked.
//!
//! # Example
//!
//! ```ignore
//! use ward_tests::prelude::*;
//!
//! pub fn scenario() -> Scenario {
//!     Scenario::new("length")
//!         .kind(DataKind::String)
//!         .constraints("[MinLength(2)][MaxLength(4)]")
//!         .step("inside", "abc", |a| a.valid())
//!         .step("short", "a", |a| a.ids(&[ErrorId::TooShort]))
//! }
//!
//! #[test]
//! fn test() {
//!     scenario().run().unwrap();
//! }
//! ```

mod error;
mod runner;
mod scenario;

pub use assertion::{Assertion, AssertionBuilder};
pub use error::{ScenarioError, ScenarioResult};
pub use scenario::{Input, Scenario, Step};

/// Prelude for convenient imports.
pub mod prelude {
    pub use crate::assertion::{Assertion, AssertionBuilder};
    pub use crate::error::{ScenarioError, ScenarioResult};
    pub use crate::scenario::Scenario;
    pub use ward_core::{DataKind, ErrorId, Value};
    pub use ward_enums::{EnumCatalog, EnumDefinition};
}
