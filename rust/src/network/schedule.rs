//! Forward and backward schedule passes over the topological order.

use crate::interner::TaskId;

use super::{NetworkError, TaskNetwork};

/// Per-task timing computed by the schedule passes.
///
/// The two float fields stay zero until the float stage fills them in.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct TaskTiming {
    /// Earliest possible start (forward pass).
    pub early_start: f64,
    /// Earliest possible finish (forward pass).
    pub early_finish: f64,
    /// Latest allowable start (backward pass).
    pub late_start: f64,
    /// Latest allowable finish (backward pass).
    pub late_finish: f64,
    /// Slack against immediate successors only.
    pub free_float: f64,
    /// Slack against the whole project: `late_start - early_start`.
    pub total_float: f64,
}

/// Output of the schedule passes: one timing per task, indexed by id,
/// plus the minimum total project duration.
#[derive(Clone, Debug, PartialEq)]
pub struct Schedule {
    pub timings: Vec<TaskTiming>,
    pub project_duration: f64,
}

/// Run the forward pass (ES/EF), derive the project duration, then run
/// the backward pass (LS/LF) in reverse topological order.
///
/// Both passes read only already-computed neighbor values, so
/// correctness rests entirely on `topo_order` being a valid
/// topological order of `network`.
pub fn compute_schedule(
    network: &TaskNetwork,
    topo_order: &[TaskId],
) -> Result<Schedule, NetworkError> {
    let n = network.len();
    let mut timings = vec![TaskTiming::default(); n];

    // Forward pass: ES = max EF over predecessors, 0 without any
    for &id in topo_order {
        let idx = id as usize;
        let mut early_start: f64 = 0.0;
        for &pred in &network.predecessors[idx] {
            early_start = early_start.max(timings[pred as usize].early_finish);
        }
        timings[idx].early_start = early_start;
        timings[idx].early_finish = early_start + network.durations[idx];
    }

    let terminals = network.terminal_tasks();
    if terminals.is_empty() {
        // Structurally impossible once a topological order exists,
        // checked anyway
        return Err(NetworkError::NoTerminalTask);
    }
    let project_duration = terminals
        .iter()
        .map(|&t| timings[t as usize].early_finish)
        .fold(0.0, f64::max);

    // Backward pass: LF = min LS over successors, project duration at
    // the terminals
    for &id in topo_order.iter().rev() {
        let idx = id as usize;
        let mut late_finish = f64::MAX;
        for &succ in &network.successors[idx] {
            late_finish = late_finish.min(timings[succ as usize].late_start);
        }
        if late_finish == f64::MAX {
            late_finish = project_duration;
        }
        timings[idx].late_finish = late_finish;
        timings[idx].late_start = late_finish - network.durations[idx];
    }

    Ok(Schedule {
        timings,
        project_duration,
    })
}
