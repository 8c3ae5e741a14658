//! CLI module - argument parsing and command dispatch

pub mod commands;

use clap::{Parser, Subcommand, ValueEnum};

#[derive(Parser, Debug)]
#[command(
    name = "rfcas",
    about = "RF cascade analysis - cascaded gain and noise figure for series signal chains",
    version
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Run a cascade analysis over a component chain file
    Run(commands::run::RunArgs),

    /// Parse a netlist file and display its net connections
    Netlist(commands::netlist::NetlistArgs),
}

/// Output format for analysis results
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum OutputFormat {
    #[default]
    Table,
    Json,
}
