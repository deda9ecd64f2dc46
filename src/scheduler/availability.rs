use super::{calendar::days_between, state::RunState};
use crate::model::{Doctor, DutyType, LeaveCalendar};
use chrono::NaiveDate;

/// Médecins éligibles pour `date`, dans l'ordre de `order`.
///
/// Exclus : congé ce jour-là, ou repos insuffisant depuis la dernière garde.
/// Le repos exigé dépend du type de garde du jour considéré, pas de celui de
/// la garde précédente.
pub(super) fn eligible_doctors(
    order: &[usize],
    doctors: &[Doctor],
    leave: &LeaveCalendar,
    state: &RunState,
    date: NaiveDate,
    duty: DutyType,
) -> Vec<usize> {
    order
        .iter()
        .copied()
        .filter(|&idx| !leave.is_on_leave(&doctors[idx], date))
        .filter(|&idx| has_rested(state.load(idx).last_duty, date, duty))
        .collect()
}

fn has_rested(last_duty: Option<NaiveDate>, date: NaiveDate, duty: DutyType) -> bool {
    match last_duty {
        Some(last) => days_between(last, date) >= duty.required_rest_days(),
        None => true,
    }
}
