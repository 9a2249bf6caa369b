#[cfg(test)]
#[path = "../../tests/unit/models/solution_test.rs"]
mod solution_test;

use crate::models::Problem;
use crate::utils::GenericResult;
use std::fmt::{Debug, Formatter};
use std::hash::{Hash, Hasher};
use std::sync::Arc;

/// A canonical encoding of assignment: a space id (or none) per attraction id. It does not depend
/// on insertion order inside spaces, so equal space contents always produce equal keys.
pub type AssignmentKey = Box<[Option<usize>]>;

/// Represents a mutable distribution of attractions over spaces.
///
/// Keeps, per space, attraction ids in insertion order and remaining capacity. Cloning produces
/// a fully independent copy, only the problem definition is shared.
#[derive(Clone)]
pub struct Assignment {
    problem: Arc<Problem>,
    spaces: Vec<Vec<usize>>,
    remaining: Vec<usize>,
    locations: Vec<Option<usize>>,
}

impl Assignment {
    /// Creates an empty assignment: all spaces are empty and have full capacity.
    pub fn new(problem: Arc<Problem>) -> Self {
        let spaces = vec![Vec::new(); problem.spaces()];
        let remaining = vec![problem.capacity(); problem.spaces()];
        let locations = vec![None; problem.attractions().len()];

        Self { problem, spaces, remaining, locations }
    }

    /// Returns problem definition.
    pub fn problem(&self) -> &Arc<Problem> {
        &self.problem
    }

    /// Returns attraction ids per space.
    pub fn spaces(&self) -> &[Vec<usize>] {
        self.spaces.as_slice()
    }

    /// Returns attraction ids placed in given space.
    pub fn space(&self, space: usize) -> &[usize] {
        self.spaces.get(space).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Returns remaining capacity of given space.
    pub fn remaining(&self, space: usize) -> usize {
        self.remaining.get(space).copied().unwrap_or(0)
    }

    /// Returns space where attraction is placed.
    pub fn location(&self, attraction: usize) -> Option<usize> {
        self.locations.get(attraction).copied().flatten()
    }

    /// Returns a canonical key used to compare assignments by their content.
    pub fn key(&self) -> AssignmentKey {
        self.locations.clone().into_boxed_slice()
    }

    /// Returns amount of placed attractions.
    pub fn assigned(&self) -> usize {
        self.locations.iter().filter(|location| location.is_some()).count()
    }

    /// Returns ids of attractions which are not placed in any space.
    pub fn unassigned(&self) -> Vec<usize> {
        self.locations.iter().enumerate().filter(|(_, location)| location.is_none()).map(|(idx, _)| idx).collect()
    }

    /// Checks whether the space holds at least one attraction of given theme.
    pub fn has_theme(&self, space: usize, theme: usize) -> bool {
        self.space(space).iter().any(|&id| self.problem.attraction(id).is_some_and(|a| a.theme == theme))
    }

    /// Checks whether the space has enough remaining capacity for the attraction.
    pub fn can_accept(&self, space: usize, attraction: usize) -> bool {
        self.problem
            .attraction(attraction)
            .is_some_and(|a| self.remaining.get(space).is_some_and(|&remaining| remaining >= a.size))
    }

    /// Places an unassigned attraction into the space.
    pub fn assign(&mut self, space: usize, attraction: usize) -> GenericResult<()> {
        let size = self.get_size(attraction)?;

        if let Some(current) = self.location(attraction) {
            return Err(format!("attraction {attraction} is already placed in space {current}").into());
        }

        self.ensure_capacity(space, attraction, size)?;

        self.spaces[space].push(attraction);
        self.remaining[space] -= size;
        self.locations[attraction] = Some(space);

        Ok(())
    }

    /// Moves a placed attraction from its current space to another one. Order of the rest
    /// attractions is preserved, moved one is appended to the target space.
    pub fn relocate(&mut self, attraction: usize, to: usize) -> GenericResult<()> {
        let size = self.get_size(attraction)?;
        let from = self.location(attraction).ok_or_else(|| format!("attraction {attraction} is not placed"))?;

        if from == to {
            return Err(format!("attraction {attraction} is already in space {to}").into());
        }

        self.ensure_capacity(to, attraction, size)?;

        let position = self.spaces[from]
            .iter()
            .position(|&id| id == attraction)
            .ok_or_else(|| format!("attraction {attraction} is missing in space {from}"))?;

        self.spaces[from].remove(position);
        self.remaining[from] += size;

        self.spaces[to].push(attraction);
        self.remaining[to] -= size;
        self.locations[attraction] = Some(to);

        Ok(())
    }

    /// Verifies assignment invariants: remaining capacity is consistent with placed attractions
    /// and every attraction is placed at most once.
    pub fn check(&self) -> GenericResult<()> {
        let mut seen = vec![false; self.locations.len()];

        for (space, ids) in self.spaces.iter().enumerate() {
            let mut used = 0_usize;
            for &id in ids {
                let size = self.get_size(id)?;
                if std::mem::replace(&mut seen[id], true) {
                    return Err(format!("attraction {id} is placed more than once").into());
                }
                if self.locations[id] != Some(space) {
                    return Err(format!("attraction {id} has inconsistent location").into());
                }
                used += size;
            }

            if used > self.problem.capacity() || self.remaining[space] != self.problem.capacity() - used {
                return Err(format!(
                    "space {space} has remaining capacity {} while {used} of {} is used",
                    self.remaining[space],
                    self.problem.capacity()
                )
                .into());
            }
        }

        match seen.iter().zip(self.locations.iter()).position(|(seen, location)| *seen != location.is_some()) {
            Some(id) => Err(format!("attraction {id} has dangling location").into()),
            None => Ok(()),
        }
    }

    fn get_size(&self, attraction: usize) -> GenericResult<usize> {
        self.problem
            .attraction(attraction)
            .map(|attraction| attraction.size)
            .ok_or_else(|| format!("unknown attraction: {attraction}").into())
    }

    fn ensure_capacity(&self, space: usize, attraction: usize, size: usize) -> GenericResult<()> {
        match self.remaining.get(space) {
            None => Err(format!("unknown space: {space}").into()),
            Some(&remaining) if remaining < size => Err(format!(
                "space {space} has remaining capacity {remaining}, attraction {attraction} requires {size}"
            )
            .into()),
            Some(_) => Ok(()),
        }
    }
}

impl PartialEq for Assignment {
    fn eq(&self, other: &Self) -> bool {
        self.locations == other.locations
    }
}

impl Eq for Assignment {}

impl Hash for Assignment {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.locations.hash(state);
    }
}

impl Debug for Assignment {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Assignment").field("spaces", &self.spaces).field("remaining", &self.remaining).finish()
    }
}
