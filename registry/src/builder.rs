//! RegistryBuilder for constructing an immutable Registry.

use std::collections::HashMap;
use std::sync::Arc;

use thiserror::Error;
use ward_constraint::{
    Constraint, EnumConstraint, LowerCaseConstraint, MaxLengthConstraint, MinLengthConstraint,
    RangeConstraint, RegexConstraint, RequiredConstraint, TypeConstraint, UpperCaseConstraint,
};
use ward_enums::{EnumCatalog, TypeResolver};

use crate::{ConstraintFactory, FactoryContext, Registry};

/// Errors that can occur during registry construction.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum RegistryError {
    #[error("Duplicate constraint name: {0}")]
    DuplicateName(String),

    #[error("Invalid constraint name '{0}': expected a letter followed by letters or digits")]
    InvalidName(String),
}

/// Whether `name` matches `letter (letter | digit)*`.
pub fn is_valid_name(name: &str) -> bool {
    let mut chars = name.chars();
    match chars.next() {
        Some(first) if first.is_ascii_alphabetic() => chars.all(|c| c.is_ascii_alphanumeric()),
        _ => false,
    }
}

/// The built-in table. Its names are fixed and valid.
pub(crate) fn builtin_factories() -> HashMap<String, ConstraintFactory> {
    RegistryBuilder::new()
        .with_builtins()
        .entries
        .into_iter()
        .collect()
}

/// Builder for constructing an immutable Registry.
#[derive(Default)]
pub struct RegistryBuilder {
    /// Factories in registration order.
    entries: Vec<(String, ConstraintFactory)>,
    /// Resolver for `Type` constraints; an empty catalog when unset.
    resolver: Option<Arc<dyn TypeResolver>>,
}

impl RegistryBuilder {
    /// Create a new builder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add the built-in constraint kinds.
    pub fn with_builtins(self) -> Self {
        self.register(MinLengthConstraint::NAME, |_| {
            Box::new(MinLengthConstraint::default())
        })
        .register(MaxLengthConstraint::NAME, |_| {
            Box::new(MaxLengthConstraint::default())
        })
        .register(UpperCaseConstraint::NAME, |_| {
            Box::new(UpperCaseConstraint::new())
        })
        .register(LowerCaseConstraint::NAME, |_| {
            Box::new(LowerCaseConstraint::new())
        })
        .register(RegexConstraint::NAME, |_| Box::new(RegexConstraint::new()))
        .register(RangeConstraint::NAME, |_| Box::new(RangeConstraint::new()))
        .register(EnumConstraint::NAME, |_| Box::new(EnumConstraint::new()))
        .register(TypeConstraint::NAME, |ctx| {
            Box::new(TypeConstraint::new(ctx.resolver.clone()))
        })
        .register(RequiredConstraint::NAME, |_| {
            Box::new(RequiredConstraint::new())
        })
    }

    /// Add a constraint kind. Names are checked when the registry is built.
    pub fn register<F>(mut self, name: impl Into<String>, factory: F) -> Self
    where
        F: Fn(&FactoryContext) -> Box<dyn Constraint> + Send + Sync + 'static,
    {
        self.entries.push((name.into(), Arc::new(factory)));
        self
    }

    /// Set the resolver used by `Type` constraints.
    pub fn type_resolver(mut self, resolver: Arc<dyn TypeResolver>) -> Self {
        self.resolver = Some(resolver);
        self
    }

    /// Build the immutable Registry.
    pub fn build(self) -> Result<Registry, RegistryError> {
        let mut factories: HashMap<String, ConstraintFactory> = HashMap::new();
        for (name, factory) in self.entries {
            if !is_valid_name(&name) {
                return Err(RegistryError::InvalidName(name));
            }
            if factories.contains_key(&name) {
                return Err(RegistryError::DuplicateName(name));
            }
            factories.insert(name, factory);
        }

        let resolver = self
            .resolver
            .unwrap_or_else(|| Arc::new(EnumCatalog::new()));

        tracing::debug!(kinds = factories.len(), "constraint registry built");
        Ok(Registry::new(factories, resolver))
    }
}
