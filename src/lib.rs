//! rfcas: RF cascade analysis toolkit
//!
//! Models a series chain of RF components (filters, amplifiers, mixers, ...)
//! and computes cascaded gain and noise figure versus frequency, with
//! optional statistical tolerances on component parameters.

pub mod cli;
pub mod core;
pub mod entities;
pub mod schema;
pub mod yaml;
