//! Ward CLI library.
//!
//! Subcommands of the `ward` binary, each writing to a caller-supplied
//! sink so they can be driven from tests:
//!
//! - `check`: validate values against a notation string
//! - `normalize`: print the canonical notation or exported states
//! - `kinds`: list registered constraint kinds and catalog types

pub mod check;
mod format;
pub mod kinds;
pub mod normalize;

use std::fs;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use anyhow::{Context, Result};
use clap::Args;
use ward_core::DataKind;
use ward_enums::EnumCatalog;
use ward_registry::Registry;
use ward_validator::Validator;

/// Arguments shared by every subcommand that reads notation.
#[derive(Args, Debug, Clone)]
pub struct NotationArgs {
    /// Data kind the constraints apply to (e.g. String, Int32).
    #[arg(long)]
    pub kind: DataKind,

    /// Constraint notation, e.g. "[MinLength(2)][MaxLength(4)]".
    #[arg(long)]
    pub constraints: String,

    /// JSON enum catalog used to resolve `Type` constraints.
    #[arg(long)]
    pub enums: Option<PathBuf>,
}

impl NotationArgs {
    /// Parse the notation into a validator.
    pub fn validator(&self) -> Result<Validator> {
        let registry = load_registry(self.enums.as_deref())?;
        Validator::from_notation(&self.constraints, self.kind, &registry)
            .with_context(|| format!("invalid constraints for {}", self.kind))
    }
}

/// Load an enum catalog from a JSON file.
pub fn load_catalog(path: &Path) -> Result<EnumCatalog> {
    let json = fs::read_to_string(path)
        .with_context(|| format!("failed to read enum catalog {}", path.display()))?;
    let catalog = EnumCatalog::from_json(&json)
        .with_context(|| format!("invalid enum catalog {}", path.display()))?;
    tracing::info!(path = %path.display(), types = catalog.len(), "loaded enum catalog");
    Ok(catalog)
}

/// The standard registry, resolving `Type` through the catalog when given.
pub fn load_registry(enums: Option<&Path>) -> Result<Registry> {
    match enums {
        Some(path) => Ok(Registry::with_resolver(Arc::new(load_catalog(path)?))),
        None => Ok(Registry::standard()),
    }
}
