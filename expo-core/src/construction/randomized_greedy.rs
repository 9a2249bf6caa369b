#[cfg(test)]
#[path = "../../tests/unit/construction/randomized_greedy_test.rs"]
mod randomized_greedy_test;

use super::*;
use rand::seq::SliceRandom;
use std::cmp::Reverse;

/// A randomized greedy construction with restricted candidate list (RCL).
///
/// Attractions are processed in random order. Feasible spaces are ranked by thematic affinity
/// first (space already hosts the same theme) and by remaining capacity second, then one space
/// is chosen uniformly from the best `max(1, floor(n * alpha))` candidates. An attraction without
/// any feasible space stays unassigned.
pub struct RandomizedGreedy {
    alpha: f64,
}

impl RandomizedGreedy {
    /// Creates a new instance of `RandomizedGreedy`. Alpha should be in `(0, 1]` range:
    /// values close to zero give pure greedy choice, one gives random choice among feasible spaces.
    pub fn new(alpha: f64) -> GenericResult<Self> {
        if alpha.is_nan() || alpha <= 0. || alpha > 1. {
            return Err(format!("alpha should be in (0, 1] range, got: {alpha}").into());
        }

        Ok(Self { alpha })
    }

    /// Returns feasible spaces for the attraction, best first.
    pub(crate) fn get_ranked_candidates(&self, assignment: &Assignment, attraction: usize) -> Vec<usize> {
        let theme = assignment.problem().attraction(attraction).map(|a| a.theme);

        let mut candidates = (0..assignment.problem().spaces())
            .filter(|&space| assignment.can_accept(space, attraction))
            .map(|space| {
                let affinity = theme.is_some_and(|theme| assignment.has_theme(space, theme));
                (space, affinity, assignment.remaining(space))
            })
            .collect::<Vec<_>>();

        // NOTE stable sort keeps lower space ids first among equal candidates
        candidates.sort_by_key(|&(_, affinity, remaining)| Reverse((affinity, remaining)));

        candidates.into_iter().map(|(space, _, _)| space).collect()
    }

    /// Returns size of restricted candidate list for given amount of candidates.
    pub(crate) fn get_rcl_size(&self, candidates: usize) -> usize {
        ((candidates as f64 * self.alpha).floor() as usize).clamp(1, candidates.max(1))
    }
}

impl Construction for RandomizedGreedy {
    fn fill(&self, assignment: &mut Assignment, random: &dyn Random) -> GenericResult<()> {
        let mut attractions = assignment.unassigned();
        attractions.shuffle(&mut random.get_rng());

        attractions.into_iter().try_for_each(|attraction| {
            let candidates = self.get_ranked_candidates(assignment, attraction);
            if candidates.is_empty() {
                return Ok(());
            }

            let limit = self.get_rcl_size(candidates.len());
            let selected = random.uniform_int(0, limit as i32 - 1) as usize;

            assignment.assign(candidates[selected], attraction)
        })
    }
}
