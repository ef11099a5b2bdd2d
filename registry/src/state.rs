//! Format-independent persistence of a configured constraint.

use serde::{Deserialize, Serialize};
use ward_constraint::Constraint;
use ward_core::{ConfigResult, DataKind};

use crate::Registry;

/// A constraint's name, data kind and exported state.
///
/// Any serde format can carry this envelope; `restore` rebuilds the
/// constraint through the registry and `import_state`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConstraintState {
    pub name: String,
    pub data_kind: DataKind,
    pub entries: Vec<(String, String)>,
}

impl ConstraintState {
    /// Capture a configured constraint.
    pub fn capture(constraint: &dyn Constraint, data_kind: DataKind) -> Self {
        Self {
            name: constraint.name().to_string(),
            data_kind,
            entries: constraint.export_state(),
        }
    }

    /// Rebuild the constraint.
    pub fn restore(&self, registry: &Registry) -> ConfigResult<Box<dyn Constraint>> {
        let mut constraint = registry.create(&self.name)?;
        constraint.import_state(&self.entries, self.data_kind)?;
        Ok(constraint)
    }
}
