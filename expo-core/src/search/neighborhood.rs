#[cfg(test)]
#[path = "../../tests/unit/search/neighborhood_test.rs"]
mod neighborhood_test;

use crate::models::Assignment;
use crate::utils::{GenericResult, Random};
use rand::seq::index::sample;

/// Specifies which destinations are considered for every attraction.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub enum NeighborhoodPolicy {
    /// All feasible destinations.
    #[default]
    All,
    /// A random subset of feasible destinations of `max(1, floor(n * ratio))` size.
    Sampled {
        /// A ratio of destinations kept, in `(0, 1]` range.
        ratio: f64,
    },
}

/// A single relocation move: an attraction is moved from one space to another.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Relocation {
    /// Attraction id.
    pub attraction: usize,
    /// Current space.
    pub from: usize,
    /// Target space.
    pub to: usize,
}

/// Generates assignments reachable by exactly one relocation move.
pub struct RelocationNeighborhood {
    policy: NeighborhoodPolicy,
}

impl RelocationNeighborhood {
    /// Creates a new instance of `RelocationNeighborhood`.
    pub fn new(policy: NeighborhoodPolicy) -> GenericResult<Self> {
        if let NeighborhoodPolicy::Sampled { ratio } = policy {
            if ratio.is_nan() || ratio <= 0. || ratio > 1. {
                return Err(format!("neighborhood sample ratio should be in (0, 1] range, got: {ratio}").into());
            }
        }

        Ok(Self { policy })
    }

    /// Returns all feasible relocation moves: spaces and their attractions are visited in
    /// order, destinations are visited in ascending order.
    pub fn moves(&self, assignment: &Assignment, random: &dyn Random) -> Vec<Relocation> {
        let spaces = assignment.problem().spaces();

        assignment
            .spaces()
            .iter()
            .enumerate()
            .flat_map(|(from, ids)| ids.iter().map(move |&attraction| (from, attraction)))
            .flat_map(|(from, attraction)| {
                let destinations = (0..spaces)
                    .filter(|&to| to != from && assignment.can_accept(to, attraction))
                    .collect::<Vec<_>>();

                self.select_destinations(destinations, random)
                    .into_iter()
                    .map(move |to| Relocation { attraction, from, to })
            })
            .collect()
    }

    /// Returns neighbors of the assignment, each is an independent copy with one move applied.
    pub fn neighbors<'a>(
        &'a self,
        assignment: &'a Assignment,
        random: &dyn Random,
    ) -> impl Iterator<Item = Assignment> + 'a {
        self.moves(assignment, random).into_iter().filter_map(move |relocation| apply(assignment, &relocation))
    }

    fn select_destinations(&self, destinations: Vec<usize>, random: &dyn Random) -> Vec<usize> {
        match self.policy {
            NeighborhoodPolicy::All => destinations,
            NeighborhoodPolicy::Sampled { .. } if destinations.is_empty() => destinations,
            NeighborhoodPolicy::Sampled { ratio } => {
                let amount = ((destinations.len() as f64 * ratio).floor() as usize).clamp(1, destinations.len());
                let mut indices = sample(&mut random.get_rng(), destinations.len(), amount).into_vec();
                indices.sort_unstable();

                indices.into_iter().map(|idx| destinations[idx]).collect()
            }
        }
    }
}

/// Applies the relocation to a copy of the assignment.
fn apply(assignment: &Assignment, relocation: &Relocation) -> Option<Assignment> {
    let mut neighbor = assignment.clone();

    neighbor.relocate(relocation.attraction, relocation.to).ok().map(|_| neighbor)
}
