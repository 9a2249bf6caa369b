#[cfg(test)]
#[path = "../../tests/unit/models/problem_test.rs"]
mod problem_test;

use crate::utils::GenericResult;

/// An item which has to be placed into a space.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Attraction {
    /// A theme id, starts from 1.
    pub theme: usize,
    /// An amount of floor space consumed by the attraction.
    pub size: usize,
}

/// Defines an immutable problem instance: spaces with equal capacity and a list of attractions.
/// Attraction id is its position in the list, space id is its position in `0..spaces`.
#[derive(Clone, Debug)]
pub struct Problem {
    spaces: usize,
    capacity: usize,
    themes: usize,
    attractions: Vec<Attraction>,
    max_theme: usize,
}

impl Problem {
    /// Creates a new instance of `Problem` checking that counts are consistent.
    pub fn new(spaces: usize, capacity: usize, themes: usize, attractions: Vec<Attraction>) -> GenericResult<Self> {
        if spaces == 0 {
            return Err("amount of spaces should be positive".into());
        }

        if capacity == 0 {
            return Err("space capacity should be positive".into());
        }

        if themes == 0 {
            return Err("amount of themes should be positive".into());
        }

        if let Some((idx, attraction)) =
            attractions.iter().enumerate().find(|(_, attraction)| attraction.theme == 0 || attraction.size == 0)
        {
            return Err(format!("attraction {idx} has non-positive theme or size: {attraction:?}").into());
        }

        let max_theme = attractions.iter().map(|attraction| attraction.theme).max().unwrap_or(0);
        if max_theme > themes {
            return Err(format!("theme id {max_theme} exceeds amount of themes {themes}").into());
        }

        Ok(Self { spaces, capacity, themes, attractions, max_theme })
    }

    /// Returns amount of spaces.
    pub fn spaces(&self) -> usize {
        self.spaces
    }

    /// Returns capacity of every space.
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Returns declared amount of themes.
    pub fn themes(&self) -> usize {
        self.themes
    }

    /// Returns the largest theme id used by attractions, zero when there are no attractions.
    pub fn max_theme(&self) -> usize {
        self.max_theme
    }

    /// Returns all attractions.
    pub fn attractions(&self) -> &[Attraction] {
        self.attractions.as_slice()
    }

    /// Returns attraction by its id.
    pub fn attraction(&self, id: usize) -> Option<&Attraction> {
        self.attractions.get(id)
    }

    /// Returns ids of attractions which are larger than space capacity and cannot be placed at all.
    pub fn unplaceable(&self) -> Vec<usize> {
        self.attractions
            .iter()
            .enumerate()
            .filter(|(_, attraction)| attraction.size > self.capacity)
            .map(|(idx, _)| idx)
            .collect()
    }
}
