#[cfg(test)]
#[path = "../../tests/unit/search/explored_test.rs"]
mod explored_test;

use crate::models::{Assignment, AssignmentKey};
use crate::utils::GenericResult;
use rustc_hash::FxHashSet;
use std::collections::VecDeque;

/// Specifies how visited assignments are remembered.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub enum ExploredPolicy {
    /// Keeps every visited assignment till the end of the run.
    #[default]
    Unbounded,
    /// Keeps at most `capacity` assignments, the oldest one is forgotten first.
    Bounded {
        /// Maximum amount of remembered assignments.
        capacity: usize,
    },
    /// Does not remember anything: every assignment is considered as new.
    Disabled,
}

/// A set of visited assignments compared by their content.
pub struct ExploredSet {
    policy: ExploredPolicy,
    keys: FxHashSet<AssignmentKey>,
    order: VecDeque<AssignmentKey>,
}

impl ExploredSet {
    /// Creates a new instance of `ExploredSet`.
    pub fn new(policy: ExploredPolicy) -> GenericResult<Self> {
        if let ExploredPolicy::Bounded { capacity: 0 } = policy {
            return Err("explored set capacity should be positive".into());
        }

        Ok(Self { policy, keys: FxHashSet::default(), order: VecDeque::default() })
    }

    /// Checks whether the assignment was visited before.
    pub fn contains(&self, assignment: &Assignment) -> bool {
        match self.policy {
            ExploredPolicy::Disabled => false,
            _ => self.keys.contains(&assignment.key()),
        }
    }

    /// Remembers the assignment. Returns true if it was not visited before.
    pub fn insert(&mut self, assignment: &Assignment) -> bool {
        let key = assignment.key();

        match self.policy {
            ExploredPolicy::Disabled => true,
            ExploredPolicy::Unbounded => self.keys.insert(key),
            ExploredPolicy::Bounded { capacity } => {
                if self.keys.contains(&key) {
                    return false;
                }

                if self.order.len() >= capacity {
                    if let Some(oldest) = self.order.pop_front() {
                        self.keys.remove(&oldest);
                    }
                }

                self.order.push_back(key.clone());
                self.keys.insert(key)
            }
        }
    }

    /// Returns amount of remembered assignments.
    pub fn len(&self) -> usize {
        self.keys.len()
    }

    /// Returns true if nothing is remembered.
    pub fn is_empty(&self) -> bool {
        self.keys.is_empty()
    }
}
