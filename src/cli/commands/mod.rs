//! CLI command implementations

pub mod netlist;
pub mod run;
