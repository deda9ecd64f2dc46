use crate::model::{DutyOverrides, DutyRecord, DutyType};
use crate::report::DistributionReport;
use chrono::NaiveDate;
#[cfg(feature = "serde")]
use serde::Serialize;
use thiserror::Error;

/// Paramètres d'un calcul de planning.
#[derive(Debug, Clone)]
pub struct ScheduleOptions {
    pub start: NaiveDate,
    pub months: u32,
    /// Fin exclue explicite ; prioritaire sur `months` si présente.
    pub until: Option<NaiveDate>,
    pub default_duty: DutyType,
    pub overrides: DutyOverrides,
    /// Graine du mélange initial des médecins (départage des égalités).
    pub seed: u64,
}

impl ScheduleOptions {
    pub fn new(start: NaiveDate) -> Self {
        Self {
            start,
            months: 1,
            until: None,
            default_duty: DutyType::TwelveHour,
            overrides: DutyOverrides::new(),
            seed: 0,
        }
    }

    pub fn months(mut self, months: u32) -> Self {
        self.months = months;
        self
    }

    pub fn until(mut self, end: NaiveDate) -> Self {
        self.until = Some(end);
        self
    }

    pub fn default_duty(mut self, duty: DutyType) -> Self {
        self.default_duty = duty;
        self
    }

    pub fn overrides(mut self, overrides: DutyOverrides) -> Self {
        self.overrides = overrides;
        self
    }

    pub fn seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }
}

/// Résultat d'un calcul : lignes du planning, répartition par médecin et
/// jours restés sans garde faute de deux médecins disponibles.
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(Serialize))]
pub struct Schedule {
    pub records: Vec<DutyRecord>,
    pub report: DistributionReport,
    pub skipped: Vec<NaiveDate>,
}

#[derive(Error, Debug)]
pub enum SchedError {
    #[error("invalid duration: at least one month is required (got {0})")]
    InvalidDuration(u32),
    #[error("not enough doctors: at least 2 are required (got {0})")]
    NotEnoughDoctors(usize),
    #[error("invalid date: {0}")]
    InvalidDate(String),
    #[error("invalid duty type: {0}")]
    InvalidDutyType(String),
    #[error("scheduling window overflows the calendar")]
    WindowOverflow,
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}
