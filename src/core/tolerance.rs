//! Parameter tolerances - bounded random sampling for variance exploration
//!
//! A tolerance describes how a nominal parameter value is allowed to vary in
//! manufacturing: a unit family (dB or percent), a distribution, and a hard
//! `[lower, upper]` limit pair. Sampling is rejection-based so every returned
//! value lies within the limits.

use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::core::error::CoreError;
use crate::core::units::round2;

/// Draws attempted before rejection sampling gives up. Only reachable with
/// pathological configuration (e.g. a normal mean far outside a tight band).
const MAX_DRAWS: u32 = 10_000;

/// Unit family of a tolerance
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ToleranceKind {
    Db,
    Per,
}

impl ToleranceKind {
    const VALID: &'static str = "DB, PER";
}

impl std::fmt::Display for ToleranceKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ToleranceKind::Db => write!(f, "DB"),
            ToleranceKind::Per => write!(f, "PER"),
        }
    }
}

impl std::str::FromStr for ToleranceKind {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_uppercase().as_str() {
            "DB" => Ok(ToleranceKind::Db),
            "PER" => Ok(ToleranceKind::Per),
            _ => Err(CoreError::InvalidArgument {
                what: "tolerance kind",
                value: s.to_string(),
                valid: ToleranceKind::VALID.to_string(),
            }),
        }
    }
}

/// Statistical distribution used when sampling a tolerance
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Distribution {
    #[default]
    Uniform,
    Normal,
}

impl Distribution {
    const VALID: &'static str = "UNIFORM, NORMAL";
}

impl std::fmt::Display for Distribution {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Distribution::Uniform => write!(f, "UNIFORM"),
            Distribution::Normal => write!(f, "NORMAL"),
        }
    }
}

impl std::str::FromStr for Distribution {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_uppercase().as_str() {
            "UNIFORM" => Ok(Distribution::Uniform),
            "NORMAL" => Ok(Distribution::Normal),
            _ => Err(CoreError::InvalidArgument {
                what: "tolerance distribution",
                value: s.to_string(),
                valid: Distribution::VALID.to_string(),
            }),
        }
    }
}

/// Optional tolerance configuration as it appears in a chain file.
///
/// Vocabulary fields are free-form strings validated (case-insensitively)
/// by [`Tolerance::from_spec`]; absence of the whole structure means the
/// parameter simply has no tolerance.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ToleranceSpec {
    /// Tolerance unit family: "db" or "per"
    pub kind: String,

    /// Distribution: "uniform" (default) or "normal"
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub distribution: Option<String>,

    /// Hard `[lower, upper]` bound pair
    pub limits: [f64; 2],

    /// Standard deviations the limit range spans for normal sampling
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub std_dev_count: Option<u32>,
}

/// A validated tolerance model attached to a [`Parameter`](crate::core::Parameter)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Tolerance {
    kind: ToleranceKind,
    distribution: Distribution,
    limits: [f64; 2],
    std_dev_count: u32,
}

impl Tolerance {
    /// Standard deviations the limit range is presumed to span; with the
    /// default of 3, 99.7% of normal draws land within the limits.
    pub const DEFAULT_STD_DEV_COUNT: u32 = 3;

    pub fn new(
        kind: ToleranceKind,
        distribution: Distribution,
        limits: [f64; 2],
        std_dev_count: u32,
    ) -> Result<Self, CoreError> {
        let [lower, upper] = limits;
        if lower > upper {
            return Err(CoreError::InvertedLimits { lower, upper });
        }
        if std_dev_count == 0 {
            return Err(CoreError::BadStdDevCount(std_dev_count));
        }

        Ok(Self {
            kind,
            distribution,
            limits,
            std_dev_count,
        })
    }

    /// Validate and build a tolerance from its chain-file configuration
    pub fn from_spec(spec: &ToleranceSpec) -> Result<Self, CoreError> {
        let kind = spec.kind.parse()?;
        let distribution = match &spec.distribution {
            Some(d) => d.parse()?,
            None => Distribution::default(),
        };
        let std_dev_count = spec.std_dev_count.unwrap_or(Self::DEFAULT_STD_DEV_COUNT);
        Self::new(kind, distribution, spec.limits, std_dev_count)
    }

    pub fn kind(&self) -> ToleranceKind {
        self.kind
    }

    pub fn distribution(&self) -> Distribution {
        self.distribution
    }

    pub fn limits(&self) -> [f64; 2] {
        self.limits
    }

    /// Draw a random value within the limits.
    ///
    /// Uniform draws come straight from the limit range. Normal draws use
    /// `sigma = (upper - lower) / std_dev_count` around `mean` (required for
    /// normal distributions) and discard anything outside the limits. The
    /// result is rounded to 2 decimal places.
    pub fn sample(&self, mean: Option<f64>) -> Result<f64, CoreError> {
        let [lower, upper] = self.limits;
        let mut rng = rand::rng();

        match self.distribution {
            Distribution::Uniform => {
                for _ in 0..MAX_DRAWS {
                    let value = rng.random_range(lower..=upper);
                    if self.within_limits(value) {
                        return Ok(round2(value));
                    }
                }
            }
            Distribution::Normal => {
                let mean = mean.ok_or(CoreError::MeanRequired)?;
                let sigma = (upper - lower) / self.std_dev_count as f64;
                for _ in 0..MAX_DRAWS {
                    // Box-Muller transform
                    let u1: f64 = rng.random();
                    let u2: f64 = rng.random();
                    let z = (-2.0_f64 * u1.ln()).sqrt()
                        * (2.0_f64 * std::f64::consts::PI * u2).cos();
                    let value = mean + sigma * z;
                    if self.within_limits(value) {
                        return Ok(round2(value));
                    }
                }
            }
        }

        Err(CoreError::SamplingExhausted {
            attempts: MAX_DRAWS,
            lower,
            upper,
        })
    }

    fn within_limits(&self, value: f64) -> bool {
        self.limits[0] <= value && value <= self.limits[1]
    }
}
