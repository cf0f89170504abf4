//! Task name interning for dense, arena-style storage.
//!
//! Maps task name strings to dense `u32` ids so that adjacency and
//! per-task computed fields can live in plain `Vec`s indexed by id.
//! Ids are assigned in declaration order, which makes every id-ordered
//! iteration reproduce the caller's insertion order.

use rustc_hash::FxHashMap;

/// Dense task id (u32 for compact storage and fast indexing).
pub type TaskId = u32;

/// Interner that maps task names to dense ids and back.
#[derive(Debug, Clone, Default)]
pub struct TaskInterner {
    to_id: FxHashMap<String, TaskId>,
    names: Vec<String>,
}

impl TaskInterner {
    /// Create a new interner with pre-allocated capacity.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            to_id: FxHashMap::with_capacity_and_hasher(capacity, Default::default()),
            names: Vec::with_capacity(capacity),
        }
    }

    /// Intern a name, returning its id; existing names keep their id.
    pub fn intern(&mut self, name: &str) -> TaskId {
        if let Some(&id) = self.to_id.get(name) {
            return id;
        }
        let id = self.names.len() as TaskId;
        self.names.push(name.to_string());
        self.to_id.insert(name.to_string(), id);
        id
    }

    /// Look up the id for a name, if it has been interned.
    #[inline]
    pub fn get(&self, name: &str) -> Option<TaskId> {
        self.to_id.get(name).copied()
    }

    /// Resolve an id back to its name.
    #[inline]
    pub fn resolve(&self, id: TaskId) -> Option<&str> {
        self.names.get(id as usize).map(|s| s.as_str())
    }

    /// Number of interned names.
    pub fn len(&self) -> usize {
        self.names.len()
    }

    /// Check if empty.
    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }
}
