//! `rfcas run` command - cascade analysis over a chain file

use std::path::PathBuf;

use clap::Args;
use console::style;
use miette::{IntoDiagnostic, Result};
use serde::Serialize;
use tabled::{settings::Style, Table, Tabled};

use crate::cli::OutputFormat;
use crate::core::engine::CascadeEngine;
use crate::schema::descriptor::{build_components, ChainFile};
use crate::yaml::parse_yaml_file;

#[derive(Args, Debug)]
pub struct RunArgs {
    /// Chain file describing the ordered component list
    #[arg(long, short)]
    pub chain: PathBuf,

    /// Simulation frequencies in MHz
    #[arg(long, short, value_delimiter = ',', required = true)]
    pub freqs: Vec<f64>,

    /// Output format
    #[arg(long, value_enum, default_value_t)]
    pub format: OutputFormat,
}

#[derive(Debug, Serialize, Tabled)]
struct StageRow {
    #[tabled(rename = "UID")]
    uid: String,

    #[tabled(rename = "NAME")]
    name: String,

    #[tabled(rename = "GAIN (dB)")]
    gain_db: f64,

    #[tabled(rename = "NF (dB)")]
    nf_db: f64,
}

#[derive(Debug, Serialize)]
struct FreqReport {
    freq: f64,
    stages: Vec<StageRow>,
}

pub fn run(args: RunArgs) -> Result<()> {
    let chain: ChainFile = parse_yaml_file(&args.chain)?;
    let components = build_components(&chain).into_diagnostic()?;
    let mut engine = CascadeEngine::new(components);

    let mut reports = Vec::with_capacity(args.freqs.len());
    for &freq in &args.freqs {
        engine.run(freq).into_diagnostic()?;

        let mut stages = Vec::new();
        for data in engine.data() {
            stages.push(StageRow {
                uid: data.uid.clone(),
                name: data.name.clone(),
                gain_db: data.value("gain", freq).into_diagnostic()?,
                nf_db: data.value("NF", freq).into_diagnostic()?,
            });
        }
        reports.push(FreqReport { freq, stages });
    }

    match args.format {
        OutputFormat::Table => {
            for report in &reports {
                println!(
                    "{}",
                    style(format!("Cascade @ {} MHz", report.freq)).bold()
                );
                let table = Table::new(&report.stages).with(Style::sharp()).to_string();
                println!("{table}");
                println!();
            }
        }
        OutputFormat::Json => {
            println!(
                "{}",
                serde_json::to_string_pretty(&reports).into_diagnostic()?
            );
        }
    }

    Ok(())
}
