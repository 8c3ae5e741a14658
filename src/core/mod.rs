//! Core module - parameter curves, tolerances, and the cascade engine

pub mod engine;
pub mod error;
pub mod netlist;
pub mod parameter;
pub mod tolerance;
pub mod units;

pub use engine::CascadeEngine;
pub use error::CoreError;
pub use netlist::{parse_netlist, Net, NetlistError, Node, Part};
pub use parameter::Parameter;
pub use tolerance::{Distribution, Tolerance, ToleranceKind, ToleranceSpec};
pub use units::{db_to_linear, linear_to_db, round2};
