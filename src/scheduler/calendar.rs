use super::SchedError;
use crate::model::DayCategory;
use chrono::{Months, NaiveDate};

/// Fin (exclue) de la fenêtre : `start` avancé de `months` mois. Un jour
/// inexistant dans le mois cible est ramené au dernier jour de ce mois.
pub(super) fn window_end(start: NaiveDate, months: u32) -> Result<NaiveDate, SchedError> {
    if months < 1 {
        return Err(SchedError::InvalidDuration(months));
    }
    start
        .checked_add_months(Months::new(months))
        .ok_or(SchedError::WindowOverflow)
}

/// Jours de `[start, end)` en ordre croissant, avec leur catégorie.
pub(super) fn expand_range(
    start: NaiveDate,
    end: NaiveDate,
) -> Result<Vec<(NaiveDate, DayCategory)>, SchedError> {
    if end <= start {
        return Err(SchedError::InvalidDate(format!(
            "window end {end} must be after start {start}"
        )));
    }
    let mut days = Vec::new();
    let mut current = start;
    while current < end {
        days.push((current, DayCategory::of(current)));
        current = current.succ_opt().ok_or(SchedError::WindowOverflow)?;
    }
    Ok(days)
}

/// Jours de `[start, start + months)`.
pub(super) fn expand_window(
    start: NaiveDate,
    months: u32,
) -> Result<Vec<(NaiveDate, DayCategory)>, SchedError> {
    expand_range(start, window_end(start, months)?)
}

pub(super) fn days_between(earlier: NaiveDate, later: NaiveDate) -> i64 {
    later.signed_duration_since(earlier).num_days()
}

