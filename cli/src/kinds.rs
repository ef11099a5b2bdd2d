//! `ward kinds`: list what the registry and catalog provide.

use std::io::Write;
use std::path::PathBuf;

use anyhow::Result;
use clap::Args;

use crate::format::format_kinds;
use crate::{load_catalog, load_registry};

#[derive(Args, Debug)]
pub struct KindsArgs {
    /// Also list the enum types in this JSON catalog.
    #[arg(long)]
    pub enums: Option<PathBuf>,
}

pub fn run_kinds(args: &KindsArgs, out: &mut impl Write) -> Result<u8> {
    let registry = load_registry(None)?;

    writeln!(out, "Constraints:")?;
    for name in registry.names() {
        let constraint = registry.create(name)?;
        let null = if constraint.tolerates_null() { " (accepts null)" } else { "" };
        writeln!(
            out,
            "  {:<10} {}{}",
            name,
            format_kinds(constraint.allowed_kinds()),
            null
        )?;
    }

    if let Some(path) = &args.enums {
        let catalog = load_catalog(path)?;
        writeln!(out)?;
        writeln!(out, "Types:")?;
        for name in catalog.names() {
            let Some(definition) = catalog.get(name) else {
                continue;
            };
            let flags = if definition.flags { " [Flags]" } else { "" };
            let members: Vec<_> = definition
                .members
                .iter()
                .map(|m| format!("{}={}", m.name, m.value))
                .collect();
            writeln!(
                out,
                "  {} : {}{} {{ {} }}",
                name,
                definition.underlying,
                flags,
                members.join(", ")
            )?;
        }
    }

    Ok(0)
}
