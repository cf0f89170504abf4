//! Topological ordering of the task network using Kahn's algorithm.

use std::collections::VecDeque;

use crate::interner::TaskId;

use super::{NetworkError, TaskNetwork};

/// Produce a total order in which every predecessor precedes all of its
/// dependents.
///
/// Ready tasks go through a FIFO queue seeded, and later fed, in
/// declaration order, so the order is stable across runs with identical
/// input. The numeric schedule does not depend on the tie-break; only
/// reproducibility does.
pub fn topological_order(network: &TaskNetwork) -> Result<Vec<TaskId>, NetworkError> {
    let n = network.len();
    let mut in_degree: Vec<usize> = network.predecessors.iter().map(|p| p.len()).collect();

    let mut queue: VecDeque<TaskId> = (0..n as TaskId)
        .filter(|&id| in_degree[id as usize] == 0)
        .collect();

    let mut order: Vec<TaskId> = Vec::with_capacity(n);
    while let Some(id) = queue.pop_front() {
        order.push(id);
        for &succ in &network.successors[id as usize] {
            let degree = &mut in_degree[succ as usize];
            *degree -= 1;
            if *degree == 0 {
                queue.push_back(succ);
            }
        }
    }

    // A short order means some task never reached in-degree zero
    if order.len() != n {
        return Err(NetworkError::CycleDetected);
    }

    Ok(order)
}
