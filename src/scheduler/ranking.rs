use super::state::RunState;
use crate::model::DayCategory;

/// Trie les éligibles par nombre total de gardes croissant puis, un samedi ou
/// un dimanche, par nombre de gardes de week-end. Tri stable : les égalités
/// restantes gardent l'ordre du mélange initial.
pub(super) fn rank_by_load(eligible: &mut [usize], state: &RunState, day: DayCategory) {
    let weekend = day.is_weekend();
    eligible.sort_by_key(|&idx| {
        let load = state.load(idx);
        (load.counts.total, if weekend { load.counts.weekends() } else { 0 })
    });
}

/// Les deux moins chargés : le premier prend le site 1, le second le site 2.
pub(super) fn pick_pair(ranked: &[usize]) -> Option<(usize, usize)> {
    match ranked {
        [first, second, ..] => Some((*first, *second)),
        _ => None,
    }
}
