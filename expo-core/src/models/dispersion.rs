#[cfg(test)]
#[path = "../../tests/unit/models/dispersion_test.rs"]
mod dispersion_test;

use crate::models::Assignment;

/// Calculates theme dispersion: for every theme, amount of spaces which host at least one
/// attraction of that theme, summed over all themes. Lower is better, empty assignment has zero.
pub fn calculate_dispersion(assignment: &Assignment) -> usize {
    let problem = assignment.problem();
    let mut present = vec![false; problem.max_theme() + 1];

    assignment
        .spaces()
        .iter()
        .map(|ids| {
            present.iter_mut().for_each(|flag| *flag = false);

            ids.iter()
                .filter_map(|&id| problem.attraction(id))
                .filter(|attraction| !std::mem::replace(&mut present[attraction.theme], true))
                .count()
        })
        .sum()
}
