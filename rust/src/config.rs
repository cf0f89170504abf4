//! Configuration for the network analysis pipeline.

use pyo3::prelude::*;

/// Tunables for a single analysis run.
#[pyclass]
#[derive(Clone, Debug)]
pub struct AnalysisConfig {
    /// Tolerance for treating a floating-point total float as zero.
    #[pyo3(get, set)]
    pub tolerance: f64,
    /// Verbosity level: 0=silent, 1=stages, 2=checks, 3=debug.
    #[pyo3(get, set)]
    pub verbosity: u8,
}

impl Default for AnalysisConfig {
    fn default() -> Self {
        Self {
            tolerance: 1e-6,
            verbosity: 0,
        }
    }
}

#[pymethods]
impl AnalysisConfig {
    #[new]
    #[pyo3(signature = (tolerance=None, verbosity=None))]
    fn new(tolerance: Option<f64>, verbosity: Option<u8>) -> Self {
        let defaults = Self::default();
        Self {
            tolerance: tolerance.unwrap_or(defaults.tolerance),
            verbosity: verbosity.unwrap_or(defaults.verbosity),
        }
    }

    fn __repr__(&self) -> String {
        format!(
            "AnalysisConfig(tolerance={}, verbosity={})",
            self.tolerance, self.verbosity
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_defaults() {
        let config = AnalysisConfig::default();
        assert!((config.tolerance - 1e-6).abs() < 1e-12);
        assert_eq!(config.verbosity, 0);
    }
}
