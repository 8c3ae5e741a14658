//! Cascade engine - sequential gain/NF accumulation over an ordered chain

use crate::core::error::CoreError;
use crate::core::units::{db_to_linear, linear_to_db, round2};
use crate::entities::component::{Component, ComponentData};

/// Walks an ordered component list and records cascaded gain and noise
/// figure per stage, one frequency at a time.
///
/// One [`ComponentData`] entry is appended per stage the first time it is
/// processed, in list order, so `data[idx]` always mirrors `components[idx]`.
/// The cascade math depends on that positional alignment: stage `idx` reads
/// stage `idx - 1`'s just-written cascaded values.
#[derive(Debug)]
pub struct CascadeEngine {
    components: Vec<Component>,
    data: Vec<ComponentData>,
}

impl CascadeEngine {
    pub fn new(components: Vec<Component>) -> Self {
        Self {
            components,
            data: Vec::new(),
        }
    }

    pub fn components(&self) -> &[Component] {
        &self.components
    }

    /// Per-stage cascaded results accumulated so far, in chain order
    pub fn data(&self) -> &[ComponentData] {
        &self.data
    }

    /// Cascaded results for a single stage, by uid
    pub fn stage(&self, uid: &str) -> Result<&ComponentData, CoreError> {
        self.data
            .iter()
            .find(|d| d.uid == uid)
            .ok_or_else(|| CoreError::UnknownComponent {
                uid: uid.to_string(),
            })
    }

    /// Compute cascaded gain and NF for every stage at `freq`.
    ///
    /// Re-running an already-seen frequency overwrites that frequency's
    /// recorded values. A stage missing its own `gain` or `NF` parameter
    /// aborts the call; stages after it get no data for this frequency.
    pub fn run(&mut self, freq: f64) -> Result<(), CoreError> {
        for idx in 0..self.components.len() {
            self.ensure_stage(idx);
            self.cascade_gain(idx, freq)?;
            self.cascade_nf(idx, freq)?;
        }
        Ok(())
    }

    fn ensure_stage(&mut self, idx: usize) {
        if self.data.len() <= idx {
            let comp = &self.components[idx];
            self.data.push(ComponentData::new(&comp.uid, &comp.name));
        }
    }

    /// Cascaded gain at stage `idx`: the previous stage's cascaded gain
    /// (0 dB for the first stage) plus this stage's own gain
    fn cascade_gain(&mut self, idx: usize, freq: f64) -> Result<(), CoreError> {
        let prev_gain = if idx == 0 {
            0.0
        } else {
            self.data[idx - 1].value("gain", freq)?
        };

        let gain = prev_gain + self.components[idx].value("gain", freq)?;
        self.data[idx].update_parameter("gain", freq, gain);
        Ok(())
    }

    /// Cascaded NF at stage `idx` via the Friis recurrence.
    ///
    /// The stage's own noise contribution is divided by the linear gain
    /// accumulated *before* it. The first stage sees a prior gain and NF of
    /// 0 dB, i.e. a linear divisor of exactly 1.
    fn cascade_nf(&mut self, idx: usize, freq: f64) -> Result<(), CoreError> {
        let (prev_gain, prev_nf) = if idx == 0 {
            (0.0, 0.0)
        } else {
            let prev = &self.data[idx - 1];
            (prev.value("gain", freq)?, prev.value("NF", freq)?)
        };

        let own_nf = self.components[idx].value("NF", freq)?;

        let nf_linear =
            db_to_linear(prev_nf) + (db_to_linear(own_nf) - 1.0) / db_to_linear(prev_gain);
        let cascaded_nf = round2(linear_to_db(nf_linear));

        self.data[idx].update_parameter("NF", freq, cascaded_nf);
        Ok(())
    }
}
