#[cfg(test)]
#[path = "../../tests/unit/search/local_search_test.rs"]
mod local_search_test;

use crate::models::{Assignment, calculate_dispersion};
use crate::search::{ExploredSet, RelocationNeighborhood};
use crate::utils::Random;

/// A first improvement hill climbing over relocation neighborhood.
///
/// Neighbors are inspected in generation order, each inspected neighbor is remembered in the
/// explored set, the ones remembered earlier are skipped. The first neighbor with strictly lower
/// dispersion becomes current one and the scan restarts from it.
pub struct LocalSearch {
    neighborhood: RelocationNeighborhood,
    max_depth: Option<usize>,
}

impl LocalSearch {
    /// Creates a new instance of `LocalSearch`. `max_depth` limits amount of accepted moves per call.
    pub fn new(neighborhood: RelocationNeighborhood, max_depth: Option<usize>) -> Self {
        Self { neighborhood, max_depth }
    }

    /// Improves the assignment till local optimum or depth limit is reached.
    pub fn improve(&self, assignment: Assignment, explored: &mut ExploredSet, random: &dyn Random) -> Assignment {
        let mut current = assignment;
        let mut current_dispersion = calculate_dispersion(&current);
        let mut depth = 0;

        while self.max_depth.is_none_or(|max_depth| depth < max_depth) {
            let improved = self
                .neighborhood
                .neighbors(&current, random)
                .filter(|neighbor| explored.insert(neighbor))
                .map(|neighbor| {
                    let dispersion = calculate_dispersion(&neighbor);
                    (neighbor, dispersion)
                })
                .find(|(_, dispersion)| *dispersion < current_dispersion);

            match improved {
                Some((neighbor, dispersion)) => {
                    current = neighbor;
                    current_dispersion = dispersion;
                    depth += 1;
                }
                None => break,
            }
        }

        current
    }
}
