//! The Registry - immutable constraint lookup.

use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;

use ward_constraint::Constraint;
use ward_core::{ConfigError, ConfigResult};
use ward_enums::TypeResolver;

use crate::builder::builtin_factories;

/// What a factory may draw on when creating a constraint.
#[derive(Debug, Clone)]
pub struct FactoryContext {
    pub resolver: Arc<dyn TypeResolver>,
}

/// Produces an unconfigured constraint instance.
pub type ConstraintFactory = Arc<dyn Fn(&FactoryContext) -> Box<dyn Constraint> + Send + Sync>;

/// The Registry provides name-to-factory lookup.
/// It is immutable after construction.
pub struct Registry {
    /// Factories by case-sensitive name.
    factories: HashMap<String, ConstraintFactory>,
    /// Context passed to every factory.
    context: FactoryContext,
}

impl Registry {
    pub(crate) fn new(
        factories: HashMap<String, ConstraintFactory>,
        resolver: Arc<dyn TypeResolver>,
    ) -> Self {
        Self {
            factories,
            context: FactoryContext { resolver },
        }
    }

    /// The built-in kinds with no type resolver (every `Type` stays
    /// unresolved).
    pub fn standard() -> Self {
        Self::with_resolver(Arc::new(ward_enums::EnumCatalog::new()))
    }

    /// The built-in kinds resolving `Type` identifiers through `resolver`.
    pub fn with_resolver(resolver: Arc<dyn TypeResolver>) -> Self {
        Self::new(builtin_factories(), resolver)
    }

    // ==================== Lookups ====================

    /// Create an unconfigured constraint by exact name.
    pub fn create(&self, name: &str) -> ConfigResult<Box<dyn Constraint>> {
        self.factories
            .get(name)
            .map(|factory| factory(&self.context))
            .ok_or_else(|| ConfigError::unknown_constraint(name))
    }

    /// Check if a constraint name is registered.
    pub fn contains(&self, name: &str) -> bool {
        self.factories.contains_key(name)
    }

    /// Registered names, sorted.
    pub fn names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.factories.keys().map(String::as_str).collect();
        names.sort_unstable();
        names
    }

    /// Get the number of registered kinds.
    pub fn len(&self) -> usize {
        self.factories.len()
    }

    /// Check if no kinds are registered.
    pub fn is_empty(&self) -> bool {
        self.factories.is_empty()
    }

    /// The resolver handed to `Type` constraints.
    pub fn resolver(&self) -> &Arc<dyn TypeResolver> {
        &self.context.resolver
    }
}

impl Default for Registry {
    fn default() -> Self {
        Self::standard()
    }
}

impl fmt::Debug for Registry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Registry")
            .field("names", &self.names())
            .field("resolver", &self.context.resolver)
            .finish()
    }
}
