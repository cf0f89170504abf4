//! Critical task identification and critical path enumeration.

use crate::interner::TaskId;

use super::{Schedule, TaskNetwork};

fn is_critical(schedule: &Schedule, id: TaskId, tolerance: f64) -> bool {
    schedule.timings[id as usize].total_float.abs() < tolerance
}

/// Every task whose total float is within `tolerance` of zero, in
/// declaration order.
///
/// This is the union of all critical path members, read directly off
/// the float table without any traversal.
pub fn critical_tasks(schedule: &Schedule, tolerance: f64) -> Vec<TaskId> {
    (0..schedule.timings.len() as TaskId)
        .filter(|&id| is_critical(schedule, id, tolerance))
        .collect()
}

/// Enumerate every start-to-terminal path consisting entirely of tasks
/// with total float within `tolerance` of zero.
///
/// The search is a depth-first walk that only enters critical tasks;
/// successors are visited in lexicographic name order so discovery
/// order is reproducible regardless of declaration order. A start task
/// that is itself non-critical (a symptom of an upstream computation
/// bug) yields zero paths rather than an error.
pub fn find_critical_paths(
    network: &TaskNetwork,
    schedule: &Schedule,
    start: TaskId,
    tolerance: f64,
) -> Vec<Vec<TaskId>> {
    let mut paths: Vec<Vec<TaskId>> = Vec::new();
    if !is_critical(schedule, start, tolerance) {
        return paths;
    }
    let mut path = vec![start];
    walk(network, schedule, start, tolerance, &mut path, &mut paths);
    paths
}

fn walk(
    network: &TaskNetwork,
    schedule: &Schedule,
    current: TaskId,
    tolerance: f64,
    path: &mut Vec<TaskId>,
    paths: &mut Vec<Vec<TaskId>>,
) {
    let successors = &network.successors[current as usize];
    if successors.is_empty() {
        paths.push(path.clone());
        return;
    }

    let mut ordered = successors.clone();
    ordered.sort_by(|&a, &b| network.name(a).cmp(network.name(b)));

    for succ in ordered {
        if is_critical(schedule, succ, tolerance) {
            path.push(succ);
            walk(network, schedule, succ, tolerance, path, paths);
            path.pop();
        }
    }
}
