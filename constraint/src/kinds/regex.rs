//! Regex: unanchored pattern match.

use regex_lite::{Regex, RegexBuilder};
use ward_core::{ConfigError, ConfigResult, DataKind, ErrorId, Value};

use crate::params::{entry, expect_count, reject_unknown_keys, state_value};
use crate::{Constraint, ValidationContext, ValidationResult};

const REGEX_KINDS: &[DataKind] = &[DataKind::String, DataKind::Xml, DataKind::Uri];

/// Recognized option letters: case-insensitive, multi-line, dot matches
/// newline, ignore whitespace, swap greed.
const FLAG_LETTERS: &str = "imsxU";

/// Fails when the text contains no match for the pattern.
///
/// The pattern is compiled when parameters are set, so a syntax error is a
/// configuration error and validation shares the compiled form.
#[derive(Debug, Clone, Default)]
pub struct RegexConstraint {
    pattern: String,
    flags: String,
    compiled: Option<Regex>,
}

impl RegexConstraint {
    pub const NAME: &'static str = "Regex";

    pub fn new() -> Self {
        Self::default()
    }

    /// Create and compile in one step.
    pub fn with_pattern(pattern: &str, flags: &str) -> ConfigResult<Self> {
        let mut constraint = Self::new();
        constraint.configure(pattern, flags)?;
        Ok(constraint)
    }

    pub fn pattern(&self) -> &str {
        &self.pattern
    }

    pub fn flags(&self) -> &str {
        &self.flags
    }

    fn configure(&mut self, pattern: &str, flags: &str) -> ConfigResult<()> {
        if pattern.is_empty() {
            return Err(ConfigError::empty_argument("pattern"));
        }
        if let Some(bad) = flags.chars().find(|c| !FLAG_LETTERS.contains(*c)) {
            return Err(ConfigError::out_of_range(
                "flags",
                flags,
                format!("unknown flag '{bad}', expected letters from '{FLAG_LETTERS}'"),
            ));
        }

        let compiled = RegexBuilder::new(pattern)
            .case_insensitive(flags.contains('i'))
            .multi_line(flags.contains('m'))
            .dot_matches_new_line(flags.contains('s'))
            .ignore_whitespace(flags.contains('x'))
            .swap_greed(flags.contains('U'))
            .build()
            .map_err(|e| ConfigError::invalid_pattern(Self::NAME, pattern, e))?;

        self.pattern = pattern.to_string();
        self.flags = flags.to_string();
        self.compiled = Some(compiled);
        Ok(())
    }
}

impl PartialEq for RegexConstraint {
    fn eq(&self, other: &Self) -> bool {
        self.pattern == other.pattern && self.flags == other.flags
    }
}

impl Constraint for RegexConstraint {
    fn name(&self) -> &'static str {
        Self::NAME
    }

    fn allowed_kinds(&self) -> &'static [DataKind] {
        REGEX_KINDS
    }

    fn get_parameters(&self, out: &mut Vec<String>) {
        out.push(self.pattern.clone());
        if !self.flags.is_empty() {
            out.push(self.flags.clone());
        }
    }

    fn apply_parameters(&mut self, params: &[String], _kind: DataKind) -> ConfigResult<()> {
        expect_count(Self::NAME, params, 1, 2)?;
        let flags = params.get(1).map(String::as_str).unwrap_or("");
        self.configure(&params[0], flags)
    }

    fn on_validation<'c>(
        &'c self,
        results: &mut Vec<ValidationResult<'c>>,
        value: &Value,
        ctx: &ValidationContext<'_>,
    ) {
        let (Some(regex), Some(text)) = (&self.compiled, value.as_text()) else {
            return;
        };
        if !regex.is_match(text) {
            results.push(ctx.report(ErrorId::PatternMismatch, &[&self.pattern], self));
        }
    }

    fn export_state(&self) -> Vec<(String, String)> {
        let mut state = vec![entry("pattern", &self.pattern)];
        if !self.flags.is_empty() {
            state.push(entry("flags", &self.flags));
        }
        state
    }

    fn apply_state(&mut self, state: &[(String, String)], _kind: DataKind) -> ConfigResult<()> {
        reject_unknown_keys(Self::NAME, state, &["pattern", "flags"])?;
        let pattern = state_value(state, "pattern")?;
        let flags = state_value(state, "flags").unwrap_or("");
        self.configure(pattern, flags)
    }
}
