mod availability;
mod calendar;
mod ranking;
mod state;
mod types;

pub use types::{SchedError, Schedule, ScheduleOptions};

use crate::model::{Doctor, LeaveCalendar, LeaveRecord};
use rand::{rngs::StdRng, seq::SliceRandom, SeedableRng};
use state::RunState;
use std::collections::HashSet;

/// Scheduler : roster et congés figés, à partir desquels on calcule des
/// plannings. Chaque appel à [`Scheduler::run`] part d'un état vierge.
#[derive(Debug, Clone)]
pub struct Scheduler {
    doctors: Vec<Doctor>,
    leave: LeaveCalendar,
}

impl Scheduler {
    /// Les noms en double sont fusionnés (première occurrence conservée).
    pub fn new<I>(doctors: I, leave: LeaveCalendar) -> Result<Self, SchedError>
    where
        I: IntoIterator<Item = Doctor>,
    {
        let mut seen = HashSet::new();
        let doctors: Vec<Doctor> = doctors
            .into_iter()
            .filter(|d| seen.insert(d.clone()))
            .collect();
        if doctors.len() < 2 {
            return Err(SchedError::NotEnoughDoctors(doctors.len()));
        }
        Ok(Self { doctors, leave })
    }

    pub fn with_leave_records<I, L>(doctors: I, leave: L) -> Result<Self, SchedError>
    where
        I: IntoIterator<Item = Doctor>,
        L: IntoIterator<Item = LeaveRecord>,
    {
        Self::new(doctors, leave.into_iter().collect())
    }

    pub fn doctors(&self) -> &[Doctor] {
        &self.doctors
    }

    pub fn leave(&self) -> &LeaveCalendar {
        &self.leave
    }

    /// Affecte deux médecins par jour, jour après jour, sur toute la fenêtre.
    ///
    /// Un jour avec moins de deux médecins éligibles est sauté sans toucher
    /// aux compteurs ; il n'apparaît que dans [`Schedule::skipped`].
    pub fn run(&self, opts: &ScheduleOptions) -> Result<Schedule, SchedError> {
        let days = match opts.until {
            Some(end) => calendar::expand_range(opts.start, end)?,
            None => calendar::expand_window(opts.start, opts.months)?,
        };

        let mut order: Vec<usize> = (0..self.doctors.len()).collect();
        let mut rng = StdRng::seed_from_u64(opts.seed);
        order.shuffle(&mut rng);

        let mut state = RunState::new(self.doctors.len());
        let mut records = Vec::with_capacity(days.len());
        let mut skipped = Vec::new();

        for (date, day) in days {
            let duty = opts.overrides.resolve(date, opts.default_duty);
            let mut eligible = availability::eligible_doctors(
                &order,
                &self.doctors,
                &self.leave,
                &state,
                date,
                duty,
            );
            ranking::rank_by_load(&mut eligible, &state, day);

            let Some(pair) = ranking::pick_pair(&eligible) else {
                #[cfg(feature = "logging")]
                tracing::debug!(%date, eligible = eligible.len(), "day skipped: fewer than 2 eligible doctors");
                skipped.push(date);
                continue;
            };

            records.push(state.commit(&self.doctors, pair, date, day, duty));
        }

        #[cfg(feature = "logging")]
        tracing::info!(
            start = %opts.start,
            months = opts.months,
            seed = opts.seed,
            assigned = records.len(),
            skipped = skipped.len(),
            "schedule computed"
        );

        Ok(Schedule {
            records,
            report: state.into_report(&self.doctors),
            skipped,
        })
    }
}
