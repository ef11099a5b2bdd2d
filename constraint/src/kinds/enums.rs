//! Enum (explicit table) and Type (resolved by identifier).
//!
//! Both share `EnumDescriptor::accepts` for membership. `Enum` is built
//! eagerly from its table; `Type` resolves its identifier on first use and
//! caches the outcome, resolved or not, for its lifetime.

use std::fmt;
use std::sync::{Arc, OnceLock};

use ward_core::{ConfigError, ConfigResult, ConversionError, DataKind, ErrorId, Value};
use ward_enums::{DescribeEnum, EnumDescriptor, EnumError, TypeResolver};

use super::ENUM_KINDS;
use crate::params::{entry, expect_count, reject_unknown_keys, state_value};
use crate::{Constraint, ValidationContext, ValidationResult};

/// Leading parameter that switches an `Enum` table to flags mode.
const FLAGS_MARKER: &str = "Flags";

fn enum_config_error(error: EnumError) -> ConfigError {
    match error {
        EnumError::EmptyName => ConfigError::empty_argument("type"),
        EnumError::DuplicateType(name) => {
            ConfigError::out_of_range("type", name, "type is already registered")
        }
        EnumError::DuplicateMember { member, .. } => {
            ConfigError::out_of_range("member", member, "duplicate member name")
        }
        EnumError::InvalidMemberName { member, .. } if member.is_empty() => {
            ConfigError::empty_argument("member")
        }
        EnumError::InvalidMemberName { member, .. } => {
            ConfigError::out_of_range("member", member, "member name must not contain '='")
        }
        EnumError::NotIntegerKind { type_name, kind } => ConfigError::disallowed_kind(type_name, kind),
        EnumError::ValueOutOfRange {
            member, value, kind, ..
        } => ConfigError::out_of_range(member, value, format!("does not fit {kind}")),
        EnumError::Json(e) => ConfigError::out_of_range("catalog", e, "invalid enum catalog"),
    }
}

/// The width an enum table is examined with: the integer kind itself, or
/// 64 bits for `Enum` values.
fn underlying_for(kind: DataKind) -> DataKind {
    if kind == DataKind::Enum {
        DataKind::Int64
    } else {
        kind
    }
}

/// Report a failed membership test against `descriptor`.
fn check_membership<'c>(
    descriptor: &EnumDescriptor,
    results: &mut Vec<ValidationResult<'c>>,
    value: &Value,
    ctx: &ValidationContext<'_>,
    constraint: &'c dyn Constraint,
) {
    let Some(v) = value.as_integer() else {
        return;
    };
    if !descriptor.accepts(v) {
        let id = if descriptor.is_flags() {
            ErrorId::InvalidFlags
        } else {
            ErrorId::NotEnumMember
        };
        results.push(ctx.report(id, &[&descriptor.name()], constraint));
    }
}

// ==================== Enum ====================

/// Membership in an explicit `Name=Value` table, optionally in flags mode.
///
/// Notation: `[Enum(Flags,Read=1,Write=2)]`. Values use the enum-value
/// grammar (decimal or `0x` hex); parameters are written back in decimal.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EnumConstraint {
    descriptor: Option<EnumDescriptor>,
}

impl EnumConstraint {
    pub const NAME: &'static str = "Enum";

    pub fn new() -> Self {
        Self::default()
    }

    /// Build from an explicit table.
    pub fn from_table<I, S>(kind: DataKind, flags: bool, table: I) -> ConfigResult<Self>
    where
        I: IntoIterator<Item = (S, i128)>,
        S: Into<String>,
    {
        let mut constraint = Self::new();
        constraint.assert_data_kind(kind)?;
        let descriptor =
            EnumDescriptor::from_table(Self::NAME, underlying_for(kind), flags, table)
                .map_err(enum_config_error)?;
        constraint.descriptor = Some(descriptor);
        Ok(constraint)
    }

    /// Build eagerly from a Rust enum that describes itself.
    pub fn from_type<T: DescribeEnum>() -> ConfigResult<Self> {
        let descriptor =
            EnumDescriptor::examine(&T::definition(), true).map_err(enum_config_error)?;
        Ok(Self {
            descriptor: Some(descriptor),
        })
    }

    pub fn descriptor(&self) -> Option<&EnumDescriptor> {
        self.descriptor.as_ref()
    }

    fn parse_entry(index: usize, raw: &str) -> ConfigResult<(String, i128)> {
        let malformed = |source| ConfigError::malformed_parameter(Self::NAME, index, raw, source);
        let (name, value) = raw.split_once('=').ok_or_else(|| {
            malformed(ConversionError::invalid(DataKind::Enum, raw, "expected Name=Value"))
        })?;
        if name.is_empty() {
            return Err(ConfigError::empty_argument("name"));
        }
        let value = ward_convert::parse_enum_value(value).map_err(malformed)?;
        Ok((name.to_string(), value))
    }

    fn configure(&mut self, flags: bool, entries: &[(usize, &str)], kind: DataKind) -> ConfigResult<()> {
        if entries.is_empty() {
            let given = usize::from(flags);
            return Err(ConfigError::too_few_parameters(Self::NAME, given + 1, given));
        }
        let table = entries
            .iter()
            .map(|(index, raw)| Self::parse_entry(*index, raw))
            .collect::<ConfigResult<Vec<_>>>()?;
        let descriptor = EnumDescriptor::from_table(Self::NAME, underlying_for(kind), flags, table)
            .map_err(enum_config_error)?;
        self.descriptor = Some(descriptor);
        Ok(())
    }
}

impl Constraint for EnumConstraint {
    fn name(&self) -> &'static str {
        Self::NAME
    }

    fn allowed_kinds(&self) -> &'static [DataKind] {
        ENUM_KINDS
    }

    fn get_parameters(&self, out: &mut Vec<String>) {
        let Some(descriptor) = &self.descriptor else {
            return;
        };
        if descriptor.is_flags() {
            out.push(FLAGS_MARKER.to_string());
        }
        out.extend(
            descriptor
                .values()
                .iter()
                .map(|(name, value)| format!("{name}={value}")),
        );
    }

    fn apply_parameters(&mut self, params: &[String], kind: DataKind) -> ConfigResult<()> {
        expect_count(Self::NAME, params, 1, usize::MAX)?;
        let flags = params[0] == FLAGS_MARKER;
        let entries: Vec<(usize, &str)> = params
            .iter()
            .enumerate()
            .skip(usize::from(flags))
            .map(|(i, p)| (i, p.as_str()))
            .collect();
        self.configure(flags, &entries, kind)
    }

    fn on_validation<'c>(
        &'c self,
        results: &mut Vec<ValidationResult<'c>>,
        value: &Value,
        ctx: &ValidationContext<'_>,
    ) {
        if let Some(descriptor) = &self.descriptor {
            check_membership(descriptor, results, value, ctx, self);
        }
    }

    fn export_state(&self) -> Vec<(String, String)> {
        let Some(descriptor) = &self.descriptor else {
            return Vec::new();
        };
        let mut state = vec![entry("flags", descriptor.is_flags())];
        state.extend(
            descriptor
                .values()
                .iter()
                .map(|(name, value)| entry("member", format!("{name}={value}"))),
        );
        state
    }

    fn apply_state(&mut self, state: &[(String, String)], kind: DataKind) -> ConfigResult<()> {
        reject_unknown_keys(Self::NAME, state, &["flags", "member"])?;
        let flags = match state_value(state, "flags") {
            Ok(raw) => match ward_convert::parse(raw, DataKind::Boolean) {
                Ok(Value::Boolean(b)) => b,
                _ => return Err(ConfigError::out_of_range("flags", raw, "expected true or false")),
            },
            Err(_) => false,
        };
        let entries: Vec<(usize, &str)> = state
            .iter()
            .enumerate()
            .filter(|(_, (k, _))| k == "member")
            .map(|(i, (_, v))| (i, v.as_str()))
            .collect();
        self.configure(flags, &entries, kind)
    }
}

// ==================== Type ====================

/// Membership in an enumeration resolved by type identifier.
///
/// Resolution happens on first validation and is published once; an
/// identifier the resolver does not know disables the check. Hidden members
/// are not part of the resolved table.
pub struct TypeConstraint {
    resolver: Arc<dyn TypeResolver>,
    type_name: String,
    resolved: OnceLock<Option<EnumDescriptor>>,
}

impl TypeConstraint {
    pub const NAME: &'static str = "Type";

    pub fn new(resolver: Arc<dyn TypeResolver>) -> Self {
        Self {
            resolver,
            type_name: String::new(),
            resolved: OnceLock::new(),
        }
    }

    pub fn type_name(&self) -> &str {
        &self.type_name
    }

    /// The resolved descriptor, resolving on first call.
    pub fn descriptor(&self) -> Option<&EnumDescriptor> {
        self.resolved.get_or_init(|| self.resolve()).as_ref()
    }

    fn resolve(&self) -> Option<EnumDescriptor> {
        if self.type_name.is_empty() {
            return None;
        }
        let Some(definition) = self.resolver.resolve(&self.type_name) else {
            tracing::debug!(type_name = %self.type_name, "type unresolved, check disabled");
            return None;
        };
        match EnumDescriptor::examine(&definition, false) {
            Ok(descriptor) => {
                tracing::debug!(
                    type_name = %self.type_name,
                    flags = descriptor.is_flags(),
                    members = descriptor.values().len(),
                    "type resolved"
                );
                Some(descriptor)
            }
            Err(e) => {
                tracing::debug!(type_name = %self.type_name, error = %e, "type rejected, check disabled");
                None
            }
        }
    }

    fn configure(&mut self, type_name: &str) -> ConfigResult<()> {
        if type_name.is_empty() {
            return Err(ConfigError::empty_argument("type"));
        }
        self.type_name = type_name.to_string();
        self.resolved = OnceLock::new();
        Ok(())
    }
}

impl fmt::Debug for TypeConstraint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TypeConstraint")
            .field("type_name", &self.type_name)
            .field("resolved", &self.resolved.get().map(Option::is_some))
            .finish()
    }
}

impl Constraint for TypeConstraint {
    fn name(&self) -> &'static str {
        Self::NAME
    }

    fn allowed_kinds(&self) -> &'static [DataKind] {
        ENUM_KINDS
    }

    fn get_parameters(&self, out: &mut Vec<String>) {
        if !self.type_name.is_empty() {
            out.push(self.type_name.clone());
        }
    }

    fn apply_parameters(&mut self, params: &[String], _kind: DataKind) -> ConfigResult<()> {
        expect_count(Self::NAME, params, 1, 1)?;
        self.configure(&params[0])
    }

    fn on_validation<'c>(
        &'c self,
        results: &mut Vec<ValidationResult<'c>>,
        value: &Value,
        ctx: &ValidationContext<'_>,
    ) {
        if let Some(descriptor) = self.descriptor() {
            check_membership(descriptor, results, value, ctx, self);
        }
    }

    fn export_state(&self) -> Vec<(String, String)> {
        if self.type_name.is_empty() {
            Vec::new()
        } else {
            vec![entry("type", &self.type_name)]
        }
    }

    fn apply_state(&mut self, state: &[(String, String)], _kind: DataKind) -> ConfigResult<()> {
        reject_unknown_keys(Self::NAME, state, &["type"])?;
        let type_name = state_value(state, "type")?;
        self.configure(type_name)
    }
}
