//! Frequency-indexed parameter curves with linear interpolation

use serde::{Deserialize, Serialize};

use crate::core::error::CoreError;
use crate::core::tolerance::Tolerance;

/// A named numeric curve over frequency (MHz), with an optional tolerance
/// model for statistical exploration.
///
/// `freqs` and `values` are parallel vectors; `freqs` is kept ascending and
/// duplicate-free by [`Parameter::update_value`].
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Parameter {
    /// Parameter name, unique within its owning component
    pub name: String,

    freqs: Vec<f64>,
    values: Vec<f64>,

    /// Optional tolerance model (not used by the deterministic cascade path)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    tolerance: Option<Tolerance>,
}

impl Parameter {
    /// Create a parameter from parallel frequency/value vectors
    pub fn new(
        name: &str,
        freqs: Vec<f64>,
        values: Vec<f64>,
        tolerance: Option<Tolerance>,
    ) -> Result<Self, CoreError> {
        if freqs.len() != values.len() {
            return Err(CoreError::LengthMismatch {
                name: name.to_string(),
                freqs: freqs.len(),
                values: values.len(),
            });
        }
        // value_at is infallible and indexes into the curve, so an empty
        // curve must never be constructed
        if freqs.is_empty() {
            return Err(CoreError::EmptyCurve {
                name: name.to_string(),
            });
        }

        Ok(Self {
            name: name.to_string(),
            freqs,
            values,
            tolerance,
        })
    }

    /// Create a parameter holding a single sample, as the engine does on
    /// first write of a cascaded value
    pub fn single(name: &str, freq: f64, value: f64) -> Self {
        Self {
            name: name.to_string(),
            freqs: vec![freq],
            values: vec![value],
            tolerance: None,
        }
    }

    pub fn freqs(&self) -> &[f64] {
        &self.freqs
    }

    pub fn values(&self) -> &[f64] {
        &self.values
    }

    pub fn tolerance(&self) -> Option<&Tolerance> {
        self.tolerance.as_ref()
    }

    /// Value at `freq`, piecewise-linearly interpolated.
    ///
    /// A single-sample curve is flat: the one value is returned for any
    /// frequency. Otherwise queries outside the sampled range saturate to
    /// the boundary sample rather than extrapolating.
    pub fn value_at(&self, freq: f64) -> f64 {
        if self.freqs.len() == 1 {
            return self.values[0];
        }

        let lo = self.freqs[0];
        let hi = self.freqs[self.freqs.len() - 1];
        let f = freq.clamp(lo, hi);

        // find the bracketing window [freqs[i], freqs[i+1]]
        let mut i = 0;
        while i + 2 < self.freqs.len() && f > self.freqs[i + 1] {
            i += 1;
        }

        let (f0, f1) = (self.freqs[i], self.freqs[i + 1]);
        let (v0, v1) = (self.values[i], self.values[i + 1]);
        if (f1 - f0).abs() < f64::EPSILON {
            v0
        } else {
            v0 + (v1 - v0) * (f - f0) / (f1 - f0)
        }
    }

    /// Overwrite the value at an existing frequency, or insert a new
    /// `(freq, value)` sample at the position that keeps `freqs` ascending
    pub fn update_value(&mut self, freq: f64, value: f64) {
        if let Some(idx) = self.freqs.iter().position(|&f| f == freq) {
            self.values[idx] = value;
        } else {
            let idx = self.freqs.iter().filter(|&&f| f < freq).count();
            self.freqs.insert(idx, freq);
            self.values.insert(idx, value);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn param(freqs: Vec<f64>, values: Vec<f64>) -> Parameter {
        Parameter::new("gain", freqs, values, None).unwrap()
    }

    #[test]
    fn test_length_mismatch_rejected() {
        let err = Parameter::new("gain", vec![10.0, 20.0], vec![1.0], None).unwrap_err();
        assert!(err.to_string().contains("2 frequencies but 1 values"));
    }

    #[test]
    fn test_empty_curve_rejected() {
        let err = Parameter::new("gain", vec![], vec![], None).unwrap_err();
        assert!(matches!(err, crate::core::error::CoreError::EmptyCurve { .. }));
        assert!(err.to_string().contains("gain"));
    }

    #[test]
    fn test_single_sample_is_flat() {
        let p = param(vec![100.0], vec![-3.5]);
        assert_eq!(p.value_at(1.0), -3.5);
        assert_eq!(p.value_at(100.0), -3.5);
        assert_eq!(p.value_at(9999.0), -3.5);
    }

    #[test]
    fn test_interpolation_between_samples() {
        let p = param(vec![10.0, 20.0], vec![-0.5, -1.0]);
        assert!((p.value_at(15.0) - (-0.75)).abs() < 1e-12);
        assert!((p.value_at(12.5) - (-0.625)).abs() < 1e-12);
    }

    #[test]
    fn test_exact_sample_hits() {
        let p = param(vec![10.0, 20.0, 30.0], vec![1.0, 2.0, 4.0]);
        assert_eq!(p.value_at(10.0), 1.0);
        assert_eq!(p.value_at(20.0), 2.0);
        assert_eq!(p.value_at(30.0), 4.0);
        assert!((p.value_at(25.0) - 3.0).abs() < 1e-12);
    }

    #[test]
    fn test_out_of_range_clamps() {
        let p = param(vec![10.0, 20.0], vec![-0.5, -1.0]);
        assert_eq!(p.value_at(5.0), -0.5);
        assert_eq!(p.value_at(50.0), -1.0);
    }

    #[test]
    fn test_update_overwrites_existing_freq() {
        let mut p = param(vec![10.0, 20.0], vec![1.0, 2.0]);
        p.update_value(10.0, 7.0);
        p.update_value(10.0, 9.0);
        assert_eq!(p.freqs(), &[10.0, 20.0]);
        assert_eq!(p.values(), &[9.0, 2.0]);
    }

    #[test]
    fn test_update_inserts_sorted() {
        let mut p = Parameter::single("gain", 20.0, 2.0);
        p.update_value(10.0, 1.0);
        p.update_value(15.0, 1.5);
        assert_eq!(p.freqs(), &[10.0, 15.0, 20.0]);
        assert_eq!(p.values(), &[1.0, 1.5, 2.0]);
    }

    #[test]
    fn test_update_appends_above_range() {
        let mut p = param(vec![10.0, 20.0], vec![1.0, 2.0]);
        p.update_value(30.0, 3.0);
        assert_eq!(p.freqs(), &[10.0, 20.0, 30.0]);
        assert_eq!(p.values(), &[1.0, 2.0, 3.0]);
    }
}
