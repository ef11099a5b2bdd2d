//! `ward check`: validate values against constraint notation.

use std::io::Write;

use anyhow::{Context, Result};
use clap::Args;
use ward_constraint::ValidationContext;
use ward_core::Value;

use crate::format::format_result;
use crate::NotationArgs;

/// Exit code when at least one value fails validation.
pub const EXIT_INVALID: u8 = 2;

#[derive(Args, Debug)]
pub struct CheckArgs {
    #[command(flatten)]
    pub notation: NotationArgs,

    /// Member name reported with each result.
    #[arg(long)]
    pub member: Option<String>,

    /// Name used in messages instead of the member name.
    #[arg(long)]
    pub display: Option<String>,

    /// Validate a null value.
    #[arg(long, conflicts_with = "values")]
    pub null: bool,

    /// Values in canonical text form.
    #[arg(required_unless_present = "null")]
    pub values: Vec<String>,
}

/// Execute the check subcommand. Returns the process exit code.
pub fn run_check(args: &CheckArgs, out: &mut impl Write) -> Result<u8> {
    let validator = args.notation.validator()?;
    let kind = validator.kind();

    let mut ctx = ValidationContext::new(kind);
    if let Some(member) = &args.member {
        ctx = ctx.with_member(member);
    }
    if let Some(display) = &args.display {
        ctx = ctx.with_display_name(display);
    }

    let inputs: Vec<(String, Value)> = if args.null {
        vec![("null".to_string(), Value::Null)]
    } else {
        args.values
            .iter()
            .map(|text| {
                ward_convert::parse(text, kind)
                    .map(|value| (text.clone(), value))
                    .with_context(|| format!("'{}' is not a valid {} value", text, kind))
            })
            .collect::<Result<_>>()?
    };

    let mut failed = false;
    for (text, value) in &inputs {
        let results = validator.validate_with(value, &ctx)?;
        if results.is_empty() {
            writeln!(out, "ok    {}", text)?;
            continue;
        }
        failed = true;
        writeln!(out, "fail  {}", text)?;
        for result in &results {
            writeln!(out, "      {}", format_result(result))?;
        }
    }

    tracing::debug!(values = inputs.len(), failed, "check finished");
    Ok(if failed { EXIT_INVALID } else { 0 })
}
