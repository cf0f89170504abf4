//! Boundary data types for the network analysis core.
//!
//! The input layer hands the core fully validated `Task` records; the
//! core hands back a `NetworkAnalysis` for the output layer to render.

use pyo3::prelude::*;

// Note: Python-facing collections stay as plain Vec for PyO3 interface
// compatibility; internal stages use interned ids instead.

/// A task in the project activity network.
#[pyclass]
#[derive(Clone, Debug)]
pub struct Task {
    /// Unique task name (non-empty).
    #[pyo3(get, set)]
    pub name: String,
    /// Duration in whatever unit the project uses (weeks, days); must be
    /// non-negative and finite. Zero marks a milestone.
    #[pyo3(get, set)]
    pub duration: f64,
    /// Names of tasks that must finish before this one starts.
    #[pyo3(get, set)]
    pub predecessors: Vec<String>,
}

#[pymethods]
impl Task {
    #[new]
    #[pyo3(signature = (name, duration, predecessors=Vec::new()))]
    fn new(name: String, duration: f64, predecessors: Vec<String>) -> Self {
        Self {
            name,
            duration,
            predecessors,
        }
    }

    fn __repr__(&self) -> String {
        format!(
            "Task(name={:?}, duration={}, predecessors={:?})",
            self.name, self.duration, self.predecessors
        )
    }
}

/// Computed schedule row for a single task.
#[pyclass]
#[derive(Clone, Debug)]
pub struct TaskReport {
    #[pyo3(get)]
    pub name: String,
    #[pyo3(get)]
    pub duration: f64,
    #[pyo3(get)]
    pub predecessors: Vec<String>,
    /// Early start: earliest the task can begin given predecessor finishes.
    #[pyo3(get)]
    pub early_start: f64,
    /// Early finish: `early_start + duration`.
    #[pyo3(get)]
    pub early_finish: f64,
    /// Late start: latest begin that does not delay the project.
    #[pyo3(get)]
    pub late_start: f64,
    /// Late finish: `late_start + duration`.
    #[pyo3(get)]
    pub late_finish: f64,
    /// Slack relative to immediate successors only.
    #[pyo3(get)]
    pub free_float: f64,
    /// Slack relative to the whole project (`late_start - early_start`).
    #[pyo3(get)]
    pub total_float: f64,
    /// True when the task lies on at least one critical path.
    #[pyo3(get)]
    pub on_critical_path: bool,
}

#[pymethods]
impl TaskReport {
    /// Predecessor names joined with commas, for tabular renderers.
    fn predecessors_joined(&self) -> String {
        self.predecessors.join(",")
    }

    fn __repr__(&self) -> String {
        format!(
            "TaskReport(name={:?}, ES={}, EF={}, LS={}, LF={}, TF={}, critical={})",
            self.name,
            self.early_start,
            self.early_finish,
            self.late_start,
            self.late_finish,
            self.total_float,
            self.on_critical_path
        )
    }
}

/// Full result of a network analysis run.
#[pyclass]
#[derive(Clone, Debug)]
pub struct NetworkAnalysis {
    /// Minimum total project duration (max early finish over terminals).
    #[pyo3(get)]
    pub project_duration: f64,
    /// One report per task, in declaration order.
    #[pyo3(get)]
    pub tasks: Vec<TaskReport>,
    /// Names of tasks on at least one critical path, in declaration order.
    #[pyo3(get)]
    pub critical_tasks: Vec<String>,
    /// Every start-to-terminal zero-float path, in discovery order.
    #[pyo3(get)]
    pub critical_paths: Vec<Vec<String>>,
}

#[pymethods]
impl NetworkAnalysis {
    fn __repr__(&self) -> String {
        format!(
            "NetworkAnalysis(project_duration={}, tasks={}, critical_paths={})",
            self.project_duration,
            self.tasks.len(),
            self.critical_paths.len()
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_predecessors_joined() {
        let report = TaskReport {
            name: "D".to_string(),
            duration: 1.0,
            predecessors: vec!["B".to_string(), "C".to_string()],
            early_start: 7.0,
            early_finish: 8.0,
            late_start: 7.0,
            late_finish: 8.0,
            free_float: 0.0,
            total_float: 0.0,
            on_critical_path: true,
        };
        assert_eq!(report.predecessors_joined(), "B,C");
    }
}
