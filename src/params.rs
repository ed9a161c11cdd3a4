// src/params.rs

use crate::error::ConfigError;

/// Blend composition parameters: degrees of polymerisation of the two
/// components. Shared, sweep-wide invariants.
#[derive(Debug, Clone, Copy)]
pub struct BlendParams {
    pub n_a: f64,
    pub n_b: f64,
}

impl BlendParams {
    pub fn new(n_a: f64, n_b: f64) -> Result<Self, ConfigError> {
        let params = Self { n_a, n_b };
        params.validate()?;
        Ok(params)
    }

    /// Fail fast on non-physical chain lengths, naming the offending field.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(self.n_a > 0.0) || !self.n_a.is_finite() {
            return Err(ConfigError::InvalidChainLengthA(self.n_a));
        }
        if !(self.n_b > 0.0) || !self.n_b.is_finite() {
            return Err(ConfigError::InvalidChainLengthB(self.n_b));
        }
        Ok(())
    }

    /// Mean-field critical interaction parameter,
    /// chi_c = (1/sqrt(N_A) + 1/sqrt(N_B))^2 / 2.
    pub fn chi_critical(&self) -> f64 {
        0.5 * (1.0 / self.n_a.sqrt() + 1.0 / self.n_b.sqrt()).powi(2)
    }
}

/// Interaction-parameter sweep axis, generated from (start, end, step).
#[derive(Debug, Clone, Copy)]
pub struct ChiRange {
    pub start: f64,
    pub end: f64,
    pub step: f64,
}

impl ChiRange {
    /// Materialise the ascending chi list, inclusive of `end` when it is a
    /// float-exact multiple of `step` away from `start`. start == end yields
    /// exactly one value.
    pub fn values(&self) -> Result<Vec<f64>, ConfigError> {
        if !self.start.is_finite() || !self.end.is_finite() {
            return Err(ConfigError::NonFiniteChiRange {
                start: self.start,
                end: self.end,
            });
        }
        if !(self.step > 0.0) || !self.step.is_finite() {
            return Err(ConfigError::InvalidChiStep(self.step));
        }
        if self.start > self.end {
            return Err(ConfigError::EmptyChiSweep {
                start: self.start,
                end: self.end,
            });
        }
        // Small slack so an end that lands on the sweep axis up to roundoff
        // is still included.
        let n = ((self.end - self.start) / self.step + 1e-9).floor() as usize;
        Ok((0..=n).map(|i| self.start + i as f64 * self.step).collect())
    }
}
