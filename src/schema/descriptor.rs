//! Component descriptors as parsed from a chain file
//!
//! A chain file holds an ordered `components` list; each entry carries a
//! uid, a display name, a type name validated against [`ComponentKind`],
//! and a map of parameter curves with optional tolerance configuration.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::core::error::CoreError;
use crate::core::tolerance::{Tolerance, ToleranceSpec};
use crate::entities::component::{Component, ComponentKind};

/// Top-level chain file: ordered list of component descriptors
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChainFile {
    pub components: Vec<ComponentDescriptor>,
}

/// One component descriptor
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ComponentDescriptor {
    pub uid: String,
    pub name: String,

    /// Component type name, e.g. "Filter" or "Amplifier"
    #[serde(rename = "type")]
    pub kind: String,

    /// Parameter curves keyed by parameter name
    #[serde(default)]
    pub params: BTreeMap<String, ParameterDescriptor>,
}

/// One parameter curve descriptor
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ParameterDescriptor {
    pub name: String,
    pub freqs: Vec<f64>,
    pub values: Vec<f64>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tolerance: Option<ToleranceSpec>,
}

/// Build a typed component from its descriptor.
///
/// The type name is dispatched through the closed [`ComponentKind`] set; an
/// unrecognized name is an invalid-argument error naming the valid set.
pub fn build_component(desc: &ComponentDescriptor) -> Result<Component, CoreError> {
    let kind: ComponentKind = desc.kind.parse()?;
    let mut comp = Component::new(&desc.uid, &desc.name, kind);

    for (key, param) in &desc.params {
        if *key != param.name {
            return Err(CoreError::ParameterKeyMismatch {
                key: key.clone(),
                name: param.name.clone(),
            });
        }
        let tolerance = param
            .tolerance
            .as_ref()
            .map(Tolerance::from_spec)
            .transpose()?;
        comp.add_parameter(
            &param.name,
            param.freqs.clone(),
            param.values.clone(),
            tolerance,
        )?;
    }

    Ok(comp)
}

/// Build every component of a chain file, preserving file order
pub fn build_components(chain: &ChainFile) -> Result<Vec<Component>, CoreError> {
    chain.components.iter().map(build_component).collect()
}
