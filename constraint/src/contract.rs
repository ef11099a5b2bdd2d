//! The contract every constraint kind implements.

use std::fmt;

use ward_core::{ConfigError, ConfigResult, DataKind, Value};

use crate::{ValidationContext, ValidationResult};

/// A named, parameterized validation rule.
///
/// Implementors supply identity, parameter (de)serialization, state
/// export/import and the kind-specific check (`on_validation`). The provided
/// methods carry the shared preconditions: no `None` kind, an allowed kind,
/// a non-null value unless the kind tolerates null.
pub trait Constraint: fmt::Debug + Send + Sync {
    /// Registry name, e.g. `MinLength`.
    fn name(&self) -> &'static str;

    /// Data kinds this constraint can be applied to.
    fn allowed_kinds(&self) -> &'static [DataKind];

    /// Whether `validate` accepts a null value.
    fn tolerates_null(&self) -> bool {
        false
    }

    /// The kind the parameters were parsed for, when they hold typed values
    /// of that kind.
    fn configured_kind(&self) -> Option<DataKind> {
        None
    }

    /// Append this constraint's parameters in notation order.
    fn get_parameters(&self, out: &mut Vec<String>);

    /// Kind-specific half of `set_parameters`; the data kind has already been
    /// checked.
    fn apply_parameters(&mut self, params: &[String], kind: DataKind) -> ConfigResult<()>;

    /// Kind-specific check. Appends zero or more results.
    fn on_validation<'c>(
        &'c self,
        results: &mut Vec<ValidationResult<'c>>,
        value: &Value,
        ctx: &ValidationContext<'_>,
    );

    /// Configuration as ordered key/value pairs, independent of any wire
    /// format.
    fn export_state(&self) -> Vec<(String, String)>;

    /// Kind-specific half of `import_state`.
    fn apply_state(&mut self, state: &[(String, String)], kind: DataKind) -> ConfigResult<()>;

    // ==================== Provided ====================

    /// Parameters as a fresh vector.
    fn parameters(&self) -> Vec<String> {
        let mut out = Vec::new();
        self.get_parameters(&mut out);
        out
    }

    /// Fail unless `kind` is a real kind this constraint allows.
    fn assert_data_kind(&self, kind: DataKind) -> ConfigResult<()> {
        if kind.is_none() {
            return Err(ConfigError::none_kind(self.name()));
        }
        if !self.allowed_kinds().contains(&kind) {
            return Err(ConfigError::disallowed_kind(self.name(), kind));
        }
        Ok(())
    }

    /// Fail when typed parameters were parsed for a kind other than `kind`.
    fn assert_configured_kind(&self, kind: DataKind) -> ConfigResult<()> {
        match self.configured_kind() {
            Some(configured) if configured != kind => Err(ConfigError::value_kind_mismatch(
                self.name(),
                configured,
                kind.name(),
            )),
            _ => Ok(()),
        }
    }

    /// Configure from raw notation parameters.
    fn set_parameters(&mut self, params: &[String], kind: DataKind) -> ConfigResult<()> {
        self.assert_data_kind(kind)?;
        self.apply_parameters(params, kind)
    }

    /// Configure from pairs produced by `export_state`.
    fn import_state(&mut self, state: &[(String, String)], kind: DataKind) -> ConfigResult<()> {
        self.assert_data_kind(kind)?;
        self.apply_state(state, kind)
    }

    /// Validate one value.
    ///
    /// Precondition failures (disallowed kind, parameters parsed for another
    /// kind, null value, value of another kind) are configuration errors.
    /// Otherwise the results of `on_validation` are returned, possibly empty.
    fn validate<'c>(
        &'c self,
        value: &Value,
        ctx: &ValidationContext<'_>,
    ) -> ConfigResult<Vec<ValidationResult<'c>>> {
        self.assert_data_kind(ctx.kind)?;
        self.assert_configured_kind(ctx.kind)?;
        if value.is_null() {
            if !self.tolerates_null() {
                return Err(ConfigError::null_value(self.name()));
            }
        } else if value.kind() != Some(ctx.kind) {
            return Err(ConfigError::value_kind_mismatch(
                self.name(),
                ctx.kind,
                value.type_name(),
            ));
        }

        let mut results = Vec::new();
        self.on_validation(&mut results, value, ctx);
        Ok(results)
    }
}
