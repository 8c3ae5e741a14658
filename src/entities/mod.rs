//! Entity types - components and their per-run simulation data

pub mod component;

pub use component::{Component, ComponentData, ComponentKind};
