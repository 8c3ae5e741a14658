//! Shared test helpers for integration tests

#![allow(dead_code)]

use std::fs;
use std::path::PathBuf;

use assert_cmd::cargo;
use assert_cmd::Command;
use tempfile::TempDir;

/// Helper to get an rfcas command
pub fn rfcas() -> Command {
    Command::new(cargo::cargo_bin!("rfcas"))
}

/// A filter + amplifier chain matching the worked two-stage example
pub const FILTER_AMP_CHAIN: &str = "\
components:
  - uid: '1'
    name: Preselector
    type: Filter
    params:
      gain:
        name: gain
        freqs: [10.0, 20.0]
        values: [-0.5, -1.0]
  - uid: '2'
    name: LNA
    type: Amplifier
    params:
      gain:
        name: gain
        freqs: [10.0, 20.0]
        values: [20.0, 20.0]
      NF:
        name: NF
        freqs: [10.0, 20.0]
        values: [3.0, 6.0]
";

/// Write a chain file into a temp directory and return its path
pub fn write_chain(tmp: &TempDir, content: &str) -> PathBuf {
    let path = tmp.path().join("chain.yaml");
    fs::write(&path, content).unwrap();
    path
}

/// Write a netlist file into a temp directory and return its path
pub fn write_netlist(tmp: &TempDir, content: &str) -> PathBuf {
    let path = tmp.path().join("netlist.txt");
    fs::write(&path, content).unwrap();
    path
}
