//! Command dispatch

use std::io;

use clap::CommandFactory;
use clap_complete::generate;
use tracing::instrument;

use crate::cli::args::{Cli, Commands};
use crate::cli::error::CliResult;
use crate::display::OrgChartConvert;
use crate::roster::sample_org;

pub fn execute_command(cli: &Cli) -> CliResult<()> {
    match &cli.command {
        None | Some(Commands::Counts) => print_counts(),
        Some(Commands::Tree) => print_tree(),
        Some(Commands::Completion { shell }) => {
            let mut cmd = Cli::command();
            let name = cmd.get_name().to_string();
            generate(*shell, &mut cmd, name, &mut io::stdout());
            Ok(())
        }
    }
}

/// Prints the subordinate counts for Sasu, Emilia and Antti, one per line.
#[instrument(level = "debug")]
fn print_counts() -> CliResult<()> {
    let org = sample_org()?;
    for idx in [org.sasu, org.emilia, org.antti] {
        println!("{}", org.arena.count_subordinates(idx)?);
    }
    Ok(())
}

#[instrument(level = "debug")]
fn print_tree() -> CliResult<()> {
    let org = sample_org()?;
    // Counting doubles as a cycle check before the recursive rendering
    org.arena.count_subordinates(org.sasu)?;
    println!("{}", org.arena.to_org_chart(org.sasu));
    Ok(())
}
