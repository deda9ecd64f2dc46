use crate::scheduler::SchedError;
use chrono::{Datelike, NaiveDate, Weekday};
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, HashMap, HashSet};
use std::fmt;
use std::str::FromStr;

/// Médecin de garde, identifié uniquement par son nom affiché.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct Doctor(String);

impl Doctor {
    pub fn new<S: Into<String>>(name: S) -> Self {
        Self(name.into())
    }
    pub fn name(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Doctor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Jour d'indisponibilité d'un médecin.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct LeaveRecord {
    pub doctor: Doctor,
    pub date: NaiveDate,
}

impl LeaveRecord {
    pub fn new<S: Into<String>>(doctor: S, date: NaiveDate) -> Self {
        Self {
            doctor: Doctor::new(doctor),
            date,
        }
    }
}

/// Ensemble des congés, indexé par médecin. Le test est une égalité stricte
/// sur la date : aucune fusion d'intervalles.
#[derive(Debug, Clone, Default)]
pub struct LeaveCalendar {
    by_doctor: HashMap<String, HashSet<NaiveDate>>,
}

impl LeaveCalendar {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, record: LeaveRecord) {
        self.by_doctor
            .entry(record.doctor.0)
            .or_default()
            .insert(record.date);
    }

    pub fn is_on_leave(&self, doctor: &Doctor, date: NaiveDate) -> bool {
        self.by_doctor
            .get(doctor.name())
            .is_some_and(|dates| dates.contains(&date))
    }
}

impl FromIterator<LeaveRecord> for LeaveCalendar {
    fn from_iter<I: IntoIterator<Item = LeaveRecord>>(iter: I) -> Self {
        let mut calendar = Self::new();
        for record in iter {
            calendar.insert(record);
        }
        calendar
    }
}

/// Durée d'une garde.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum DutyType {
    #[default]
    #[cfg_attr(feature = "serde", serde(rename = "12-hour"))]
    TwelveHour,
    #[cfg_attr(feature = "serde", serde(rename = "24-hour"))]
    TwentyFourHour,
}

impl DutyType {
    /// Libellé stocké dans la table `Schedule`.
    pub fn label(self) -> &'static str {
        match self {
            Self::TwelveHour => "12-hour",
            Self::TwentyFourHour => "24-hour",
        }
    }

    /// Repos minimal (jours pleins) exigé avant une garde de ce type.
    pub fn required_rest_days(self) -> i64 {
        match self {
            Self::TwelveHour => 1,
            Self::TwentyFourHour => 2,
        }
    }

    pub fn is_full_day(self) -> bool {
        self == Self::TwentyFourHour
    }
}

impl fmt::Display for DutyType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Accepte `12h`/`24h`, `12`/`24` et les libellés `12-hour`/`24-hour`.
impl FromStr for DutyType {
    type Err = SchedError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "12h" | "12" | "12-hour" => Ok(Self::TwelveHour),
            "24h" | "24" | "24-hour" => Ok(Self::TwentyFourHour),
            other => Err(SchedError::InvalidDutyType(other.to_string())),
        }
    }
}

/// Catégorie du jour, dérivée du jour de la semaine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum DayCategory {
    Weekday,
    Saturday,
    Sunday,
}

impl DayCategory {
    pub fn of(date: NaiveDate) -> Self {
        match date.weekday() {
            Weekday::Sat => Self::Saturday,
            Weekday::Sun => Self::Sunday,
            _ => Self::Weekday,
        }
    }

    pub fn is_weekend(self) -> bool {
        matches!(self, Self::Saturday | Self::Sunday)
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::Weekday => "Weekday",
            Self::Saturday => "Saturday",
            Self::Sunday => "Sunday",
        }
    }
}

impl fmt::Display for DayCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for DayCategory {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "Weekday" => Ok(Self::Weekday),
            "Saturday" => Ok(Self::Saturday),
            "Sunday" => Ok(Self::Sunday),
            other => Err(format!("unknown day category: {other}")),
        }
    }
}

/// Type de garde imposé pour certaines dates, prioritaire sur le type par défaut.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct DutyOverrides(BTreeMap<NaiveDate, DutyType>);

impl DutyOverrides {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set(&mut self, date: NaiveDate, duty: DutyType) {
        self.0.insert(date, duty);
    }

    pub fn get(&self, date: NaiveDate) -> Option<DutyType> {
        self.0.get(&date).copied()
    }

    /// Type effectif pour `date`.
    pub fn resolve(&self, date: NaiveDate, default: DutyType) -> DutyType {
        self.get(date).unwrap_or(default)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl FromIterator<(NaiveDate, DutyType)> for DutyOverrides {
    fn from_iter<I: IntoIterator<Item = (NaiveDate, DutyType)>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

/// Ligne du planning : une date, deux médecins distincts (un par site).
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct DutyRecord {
    pub date: NaiveDate,
    pub day: DayCategory,
    pub campus1: Doctor,
    pub campus2: Doctor,
    pub duty: DutyType,
}

impl DutyRecord {
    pub fn involves(&self, doctor: &Doctor) -> bool {
        &self.campus1 == doctor || &self.campus2 == doctor
    }
}
