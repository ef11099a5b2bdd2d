//! `ward normalize`: print the canonical form of a notation string.

use std::io::Write;

use anyhow::Result;
use clap::Args;

use crate::NotationArgs;

#[derive(Args, Debug)]
pub struct NormalizeArgs {
    #[command(flatten)]
    pub notation: NotationArgs,

    /// Print the exported constraint states as JSON instead.
    #[arg(long)]
    pub json: bool,
}

pub fn run_normalize(args: &NormalizeArgs, out: &mut impl Write) -> Result<u8> {
    let validator = args.notation.validator()?;
    if args.json {
        let json = serde_json::to_string_pretty(&validator.states())?;
        writeln!(out, "{}", json)?;
    } else {
        writeln!(out, "{}", validator.to_notation())?;
    }
    Ok(0)
}
