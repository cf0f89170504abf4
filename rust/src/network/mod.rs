//! Critical Path Method analysis of a project activity network.
//!
//! The pipeline runs leaf-first: [`TaskGraph`] validates the task set
//! and derives adjacency, [`topological_order`] linearizes it,
//! [`compute_schedule`] runs the forward and backward passes,
//! [`compute_floats`] derives slack, and [`find_critical_paths`]
//! enumerates the zero-float paths. Each stage consumes only the
//! previous stage's output.

mod analysis;
mod floats;
mod graph;
mod ordering;
mod paths;
mod schedule;

use thiserror::Error;

pub use analysis::analyze;
pub use floats::compute_floats;
pub use graph::{TaskGraph, TaskNetwork};
pub use ordering::topological_order;
pub use paths::{critical_tasks, find_critical_paths};
pub use schedule::{compute_schedule, Schedule, TaskTiming};

/// Structural defects in the task network. All are fatal to the run;
/// no partial schedule is produced.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum NetworkError {
    #[error("Task {name:?} is declared more than once")]
    DuplicateTask { name: String },
    #[error("Task {name:?} has invalid duration {duration} (must be finite and >= 0)")]
    InvalidDuration { name: String, duration: f64 },
    #[error("Task {task:?} has predecessor {predecessor:?} which is not defined")]
    UnknownPredecessor { task: String, predecessor: String },
    #[error("Network contains a cycle or tasks unreachable from the start")]
    CycleDetected,
    #[error("Expected exactly one start task (no predecessors), found: {candidates:?}")]
    AmbiguousStart { candidates: Vec<String> },
    #[error("No terminal task found (task with no successors)")]
    NoTerminalTask,
}
