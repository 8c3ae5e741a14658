//! `rfcas netlist` command - parse and display a netlist file

use std::path::PathBuf;

use clap::Args;
use console::style;
use miette::{IntoDiagnostic, Result};

use crate::core::netlist::parse_netlist;

#[derive(Args, Debug)]
pub struct NetlistArgs {
    /// Netlist file to parse
    pub path: PathBuf,
}

pub fn run(args: NetlistArgs) -> Result<()> {
    let text = std::fs::read_to_string(&args.path).into_diagnostic()?;
    let nets = parse_netlist(&text).into_diagnostic()?;

    println!(
        "{}",
        style(format!("{} net(s) in {}", nets.len(), args.path.display())).bold()
    );
    for net in &nets {
        let sinks = net
            .outputs
            .iter()
            .map(|n| n.to_string())
            .collect::<Vec<_>>()
            .join(", ");
        println!("  {} -> {}", net.input, sinks);
    }

    Ok(())
}
