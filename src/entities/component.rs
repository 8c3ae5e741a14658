//! Component entity types - chain stages and their per-run cascade data

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::core::error::CoreError;
use crate::core::parameter::Parameter;
use crate::core::tolerance::Tolerance;

/// Closed set of component types.
///
/// Passive kinds are lossy or neutral parts whose noise figure equals their
/// insertion loss; active kinds supply gain and NF independently.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ComponentKind {
    Filter,
    Attenuator,
    Mixer,
    Coupler,
    Tap,
    Splitter,
    Amplifier,
    ActiveMixer,
    Switch,
}

impl ComponentKind {
    pub const ALL: [ComponentKind; 9] = [
        ComponentKind::Filter,
        ComponentKind::Attenuator,
        ComponentKind::Mixer,
        ComponentKind::Coupler,
        ComponentKind::Tap,
        ComponentKind::Splitter,
        ComponentKind::Amplifier,
        ComponentKind::ActiveMixer,
        ComponentKind::Switch,
    ];

    pub fn is_passive(self) -> bool {
        matches!(
            self,
            ComponentKind::Filter
                | ComponentKind::Attenuator
                | ComponentKind::Mixer
                | ComponentKind::Coupler
                | ComponentKind::Tap
                | ComponentKind::Splitter
        )
    }

    pub fn is_active(self) -> bool {
        !self.is_passive()
    }

    fn valid_set() -> String {
        Self::ALL
            .iter()
            .map(|k| k.to_string())
            .collect::<Vec<_>>()
            .join(", ")
    }
}

impl std::fmt::Display for ComponentKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            ComponentKind::Filter => "Filter",
            ComponentKind::Attenuator => "Attenuator",
            ComponentKind::Mixer => "Mixer",
            ComponentKind::Coupler => "Coupler",
            ComponentKind::Tap => "Tap",
            ComponentKind::Splitter => "Splitter",
            ComponentKind::Amplifier => "Amplifier",
            ComponentKind::ActiveMixer => "ActiveMixer",
            ComponentKind::Switch => "Switch",
        };
        write!(f, "{}", name)
    }
}

impl std::str::FromStr for ComponentKind {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Filter" => Ok(ComponentKind::Filter),
            "Attenuator" => Ok(ComponentKind::Attenuator),
            "Mixer" => Ok(ComponentKind::Mixer),
            "Coupler" => Ok(ComponentKind::Coupler),
            "Tap" => Ok(ComponentKind::Tap),
            "Splitter" => Ok(ComponentKind::Splitter),
            "Amplifier" => Ok(ComponentKind::Amplifier),
            "ActiveMixer" => Ok(ComponentKind::ActiveMixer),
            "Switch" => Ok(ComponentKind::Switch),
            _ => Err(CoreError::InvalidArgument {
                what: "component type",
                value: s.to_string(),
                valid: ComponentKind::valid_set(),
            }),
        }
    }
}

/// A chain stage: uid, display name, type tag, and its own parameter curves
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Component {
    /// Unique identifier, externally assigned
    pub uid: String,

    /// Display label
    pub name: String,

    /// Type tag controlling the parameter-addition policy
    pub kind: ComponentKind,

    parameters: BTreeMap<String, Parameter>,
}

impl Component {
    pub fn new(uid: &str, name: &str, kind: ComponentKind) -> Self {
        Self {
            uid: uid.to_string(),
            name: name.to_string(),
            kind,
            parameters: BTreeMap::new(),
        }
    }

    /// Add a named parameter curve.
    ///
    /// Re-adding an existing name is an error. On passive kinds, adding
    /// `gain` also derives an `NF` parameter with negated values at the same
    /// frequencies (overwriting any explicit `NF`): a lossy passive stage's
    /// noise figure is its insertion loss.
    pub fn add_parameter(
        &mut self,
        name: &str,
        freqs: Vec<f64>,
        values: Vec<f64>,
        tolerance: Option<Tolerance>,
    ) -> Result<(), CoreError> {
        if self.parameters.contains_key(name) {
            return Err(CoreError::DuplicateParameter {
                name: name.to_string(),
                component: self.name.clone(),
            });
        }

        let derive_nf = self.kind.is_passive() && name == "gain";
        let param = Parameter::new(name, freqs, values, tolerance)?;

        if derive_nf {
            let nf_values = param.values().iter().map(|v| -v).collect();
            let nf = Parameter::new("NF", param.freqs().to_vec(), nf_values, None)?;
            self.parameters.insert(nf.name.clone(), nf);
        }
        self.parameters.insert(param.name.clone(), param);

        Ok(())
    }

    pub fn parameter(&self, name: &str) -> Result<&Parameter, CoreError> {
        self.parameters
            .get(name)
            .ok_or_else(|| CoreError::UnknownParameter {
                name: name.to_string(),
                component: self.name.clone(),
            })
    }

    /// Interpolated value of a named parameter at `freq`
    pub fn value(&self, name: &str, freq: f64) -> Result<f64, CoreError> {
        Ok(self.parameter(name)?.value_at(freq))
    }
}

/// Per-run counterpart to a [`Component`]: same uid/name, but its parameter
/// map is grown one frequency sample at a time as the cascade engine runs
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ComponentData {
    pub uid: String,
    pub name: String,

    parameters: BTreeMap<String, Parameter>,
}

impl ComponentData {
    pub fn new(uid: &str, name: &str) -> Self {
        Self {
            uid: uid.to_string(),
            name: name.to_string(),
            parameters: BTreeMap::new(),
        }
    }

    /// Upsert a cascaded value: create the parameter on first write,
    /// otherwise update the sample at `freq` in place
    pub fn update_parameter(&mut self, name: &str, freq: f64, value: f64) {
        match self.parameters.get_mut(name) {
            Some(param) => param.update_value(freq, value),
            None => {
                self.parameters
                    .insert(name.to_string(), Parameter::single(name, freq, value));
            }
        }
    }

    pub fn parameter(&self, name: &str) -> Result<&Parameter, CoreError> {
        self.parameters
            .get(name)
            .ok_or_else(|| CoreError::UnknownParameter {
                name: name.to_string(),
                component: self.name.clone(),
            })
    }

    /// Interpolated cascaded value of a named parameter at `freq`
    pub fn value(&self, name: &str, freq: f64) -> Result<f64, CoreError> {
        Ok(self.parameter(name)?.value_at(freq))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_kind_parsing() {
        assert_eq!("Filter".parse::<ComponentKind>().unwrap(), ComponentKind::Filter);
        assert_eq!(
            "ActiveMixer".parse::<ComponentKind>().unwrap(),
            ComponentKind::ActiveMixer
        );

        let err = "Oscillator".parse::<ComponentKind>().unwrap_err();
        let msg = err.to_string();
        assert!(msg.contains("Oscillator"));
        assert!(msg.contains("Filter"));
        assert!(msg.contains("Switch"));
    }

    #[test]
    fn test_passive_active_split() {
        assert!(ComponentKind::Filter.is_passive());
        assert!(ComponentKind::Splitter.is_passive());
        assert!(ComponentKind::Amplifier.is_active());
        assert!(ComponentKind::Switch.is_active());
    }

    #[test]
    fn test_passive_gain_derives_nf() {
        let mut filt = Component::new("1", "Preselector", ComponentKind::Filter);
        filt.add_parameter("gain", vec![10.0, 20.0], vec![-0.5, -1.0], None)
            .unwrap();

        let nf = filt.parameter("NF").unwrap();
        assert_eq!(nf.freqs(), &[10.0, 20.0]);
        assert_eq!(nf.values(), &[0.5, 1.0]);
    }

    #[test]
    fn test_passive_gain_overwrites_explicit_nf() {
        let mut filt = Component::new("1", "Preselector", ComponentKind::Filter);
        filt.add_parameter("NF", vec![10.0], vec![9.0], None).unwrap();
        filt.add_parameter("gain", vec![10.0], vec![-2.0], None).unwrap();

        assert_eq!(filt.parameter("NF").unwrap().values(), &[2.0]);
    }

    #[test]
    fn test_active_adds_verbatim() {
        let mut amp = Component::new("2", "LNA", ComponentKind::Amplifier);
        amp.add_parameter("gain", vec![10.0, 20.0], vec![20.0, 20.0], None)
            .unwrap();

        let err = amp.parameter("NF").unwrap_err();
        assert!(matches!(err, CoreError::UnknownParameter { .. }));
    }

    #[test]
    fn test_duplicate_parameter_rejected() {
        let mut amp = Component::new("2", "LNA", ComponentKind::Amplifier);
        amp.add_parameter("gain", vec![10.0], vec![20.0], None).unwrap();
        let err = amp
            .add_parameter("gain", vec![10.0], vec![21.0], None)
            .unwrap_err();
        assert!(matches!(err, CoreError::DuplicateParameter { .. }));
    }

    #[test]
    fn test_missing_parameter_lookup() {
        let amp = Component::new("2", "LNA", ComponentKind::Amplifier);
        let err = amp.value("gain", 10.0).unwrap_err();
        assert!(err.to_string().contains("LNA"));
        assert!(err.to_string().contains("gain"));
    }

    #[test]
    fn test_component_data_upsert() {
        let mut data = ComponentData::new("1", "Preselector");
        data.update_parameter("gain", 10.0, -0.5);
        data.update_parameter("gain", 20.0, -1.0);
        data.update_parameter("gain", 10.0, -0.6);

        let gain = data.parameter("gain").unwrap();
        assert_eq!(gain.freqs(), &[10.0, 20.0]);
        assert_eq!(gain.values(), &[-0.6, -1.0]);
    }
}
