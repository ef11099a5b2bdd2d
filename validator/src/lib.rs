//! Ward Validator
//!
//! Runs an ordered list of configured constraints against one value and
//! collects every failure.

mod validator;

pub use validator::Validator;
