//! Rust implementation of the critpath network analysis core.
//!
//! Computes the Critical Path Method schedule of a project activity
//! network: early/late start and finish times, free and total float,
//! the minimum project duration, and every zero-float path from the
//! project start to its terminal tasks. Parsing, persistence and
//! rendering live in the Python collaborator layer; this crate only
//! sees validated task records.

use pyo3::prelude::*;

pub mod config;
pub mod interner;
pub mod logging;
mod models;
pub mod network;

pub use config::AnalysisConfig;
pub use interner::{TaskId, TaskInterner};
pub use models::{NetworkAnalysis, Task, TaskReport};
pub use network::{analyze, NetworkError, TaskGraph, TaskNetwork};

/// Run the full network analysis pipeline.
///
/// # Arguments
/// * `tasks` - Validated task records (unique names, non-negative
///   durations, predecessor names)
/// * `config` - Optional tuning (tolerance, verbosity); defaults apply
///   when omitted
///
/// # Returns
/// * NetworkAnalysis with per-task schedule rows, the minimum project
///   duration, critical tasks and all critical paths
///
/// # Raises
/// * ValueError for any structural defect: duplicate or unknown task
///   names, invalid durations, cycles, ambiguous start, missing terminal
#[pyfunction]
#[pyo3(signature = (tasks, config=None))]
fn analyze_network(tasks: Vec<Task>, config: Option<AnalysisConfig>) -> PyResult<NetworkAnalysis> {
    let config = config.unwrap_or_default();

    match network::analyze(&tasks, &config) {
        Ok(analysis) => Ok(analysis),
        Err(e) => Err(pyo3::exceptions::PyValueError::new_err(e.to_string())),
    }
}

/// The critpath.rust Python module.
#[pymodule]
fn rust(m: &Bound<'_, PyModule>) -> PyResult<()> {
    // Core data types
    m.add_class::<Task>()?;
    m.add_class::<TaskReport>()?;
    m.add_class::<NetworkAnalysis>()?;

    // Config types
    m.add_class::<AnalysisConfig>()?;

    // Algorithms
    m.add_function(wrap_pyfunction!(analyze_network, m)?)?;

    Ok(())
}
