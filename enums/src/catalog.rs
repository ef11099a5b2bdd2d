//! Type resolution: named enum definitions available at runtime.

use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;

use crate::definition::{DescribeEnum, EnumDefinition};
use crate::error::{EnumError, EnumResult};

/// Resolves a type identifier to an enum definition.
///
/// `None` means "unresolved"; callers treat it as a normal state that
/// disables checks depending on the type.
pub trait TypeResolver: fmt::Debug + Send + Sync {
    fn resolve(&self, type_name: &str) -> Option<Arc<EnumDefinition>>;
}

/// An explicit registry of enum definitions keyed by type identifier.
#[derive(Debug, Clone, Default)]
pub struct EnumCatalog {
    definitions: HashMap<String, Arc<EnumDefinition>>,
}

impl EnumCatalog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a definition. Fails if it is malformed or its name is taken.
    pub fn register(&mut self, definition: EnumDefinition) -> EnumResult<()> {
        definition.check()?;
        if self.definitions.contains_key(&definition.name) {
            return Err(EnumError::DuplicateType(definition.name));
        }
        tracing::debug!(
            type_name = %definition.name,
            members = definition.members.len(),
            flags = definition.flags,
            "registered enum type"
        );
        self.definitions
            .insert(definition.name.clone(), Arc::new(definition));
        Ok(())
    }

    /// Register a Rust enum that describes itself.
    pub fn register_type<T: DescribeEnum>(&mut self) -> EnumResult<()> {
        self.register(T::definition())
    }

    /// Load a catalog from a JSON array of definitions.
    pub fn from_json(json: &str) -> EnumResult<Self> {
        let definitions: Vec<EnumDefinition> = serde_json::from_str(json)?;
        let mut catalog = Self::new();
        for definition in definitions {
            catalog.register(definition)?;
        }
        Ok(catalog)
    }

    pub fn get(&self, type_name: &str) -> Option<&Arc<EnumDefinition>> {
        self.definitions.get(type_name)
    }

    pub fn len(&self) -> usize {
        self.definitions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.definitions.is_empty()
    }

    /// Registered type names, sorted.
    pub fn names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.definitions.keys().map(String::as_str).collect();
        names.sort_unstable();
        names
    }
}

impl TypeResolver for EnumCatalog {
    fn resolve(&self, type_name: &str) -> Option<Arc<EnumDefinition>> {
        self.definitions.get(type_name).cloned()
    }
}
