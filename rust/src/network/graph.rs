//! Task set storage, referential-integrity validation and adjacency.

use crate::interner::{TaskId, TaskInterner};

use super::NetworkError;

/// Builder for a task network.
///
/// Tasks are registered one at a time with [`TaskGraph::add_task`] and
/// the set is sealed with [`TaskGraph::finalize`], which checks every
/// declared predecessor and derives the successor adjacency. Traversal
/// lives on [`TaskNetwork`] only, so it cannot run on an unsealed graph.
#[derive(Debug, Default)]
pub struct TaskGraph {
    index: TaskInterner,
    durations: Vec<f64>,
    /// Declared predecessor names, resolved to ids at finalize time.
    predecessor_names: Vec<Vec<String>>,
}

impl TaskGraph {
    pub fn new() -> Self {
        Self::with_capacity(0)
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            index: TaskInterner::with_capacity(capacity),
            durations: Vec::with_capacity(capacity),
            predecessor_names: Vec::with_capacity(capacity),
        }
    }

    /// Register a task. Predecessor names are only recorded here;
    /// existence is checked in [`TaskGraph::finalize`].
    pub fn add_task(
        &mut self,
        name: &str,
        duration: f64,
        predecessors: &[String],
    ) -> Result<TaskId, NetworkError> {
        if self.index.get(name).is_some() {
            return Err(NetworkError::DuplicateTask {
                name: name.to_string(),
            });
        }
        if !duration.is_finite() || duration < 0.0 {
            return Err(NetworkError::InvalidDuration {
                name: name.to_string(),
                duration,
            });
        }
        let id = self.index.intern(name);
        self.durations.push(duration);
        self.predecessor_names.push(predecessors.to_vec());
        Ok(id)
    }

    /// Seal the task set: resolve every predecessor name to an id and
    /// build the reverse successor edges.
    pub fn finalize(self) -> Result<TaskNetwork, NetworkError> {
        let n = self.index.len();
        let mut predecessors: Vec<Vec<TaskId>> = vec![Vec::new(); n];
        let mut successors: Vec<Vec<TaskId>> = vec![Vec::new(); n];

        for (idx, names) in self.predecessor_names.iter().enumerate() {
            for pred_name in names {
                let Some(pred_id) = self.index.get(pred_name) else {
                    return Err(NetworkError::UnknownPredecessor {
                        task: self.index.resolve(idx as TaskId).unwrap_or("").to_string(),
                        predecessor: pred_name.clone(),
                    });
                };
                // A predecessor listed twice is a single edge
                if predecessors[idx].contains(&pred_id) {
                    continue;
                }
                predecessors[idx].push(pred_id);
                successors[pred_id as usize].push(idx as TaskId);
            }
        }

        Ok(TaskNetwork {
            index: self.index,
            durations: self.durations,
            predecessors,
            successors,
        })
    }
}

/// A validated, immutable task network.
///
/// All adjacency uses dense ids; string names exist only at the
/// boundary. Ids are assigned in declaration order.
#[derive(Debug)]
pub struct TaskNetwork {
    /// Task name <-> dense id mapping.
    pub index: TaskInterner,
    /// Task durations indexed by id.
    pub durations: Vec<f64>,
    /// Predecessor ids per task, in declared order.
    pub predecessors: Vec<Vec<TaskId>>,
    /// Successor ids per task (transpose of `predecessors`).
    pub successors: Vec<Vec<TaskId>>,
}

impl TaskNetwork {
    /// Number of tasks.
    pub fn len(&self) -> usize {
        self.durations.len()
    }

    /// Check if empty.
    pub fn is_empty(&self) -> bool {
        self.durations.is_empty()
    }

    /// Resolve an id handed out by this network back to its name.
    pub fn name(&self, id: TaskId) -> &str {
        self.index.resolve(id).unwrap_or("")
    }

    /// The single task with no predecessors (the project start).
    pub fn start_task(&self) -> Result<TaskId, NetworkError> {
        let candidates: Vec<TaskId> = (0..self.len() as TaskId)
            .filter(|&id| self.predecessors[id as usize].is_empty())
            .collect();

        match candidates.as_slice() {
            [start] => Ok(*start),
            _ => Err(NetworkError::AmbiguousStart {
                candidates: candidates
                    .iter()
                    .map(|&id| self.name(id).to_string())
                    .collect(),
            }),
        }
    }

    /// All tasks with no successors (project terminals), in declaration order.
    pub fn terminal_tasks(&self) -> Vec<TaskId> {
        (0..self.len() as TaskId)
            .filter(|&id| self.successors[id as usize].is_empty())
            .collect()
    }
}
