//! Répartition des gardes par médecin, pour vérifier l'équité d'un planning.

use crate::model::{DayCategory, Doctor, DutyRecord, DutyType};
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Compteurs de gardes d'un médecin.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct DutyCounts {
    pub total: u32,
    pub weekdays: u32,
    pub saturdays: u32,
    pub sundays: u32,
    pub twelve_hour: u32,
    pub twenty_four_hour: u32,
}

impl DutyCounts {
    /// Compte une garde : exactement un compteur de jour et un de durée.
    pub fn record(&mut self, day: DayCategory, duty: DutyType) {
        self.total += 1;
        match day {
            DayCategory::Weekday => self.weekdays += 1,
            DayCategory::Saturday => self.saturdays += 1,
            DayCategory::Sunday => self.sundays += 1,
        }
        match duty {
            DutyType::TwelveHour => self.twelve_hour += 1,
            DutyType::TwentyFourHour => self.twenty_four_hour += 1,
        }
    }

    /// Gardes du samedi et du dimanche.
    pub fn weekends(&self) -> u32 {
        self.saturdays + self.sundays
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct DistributionRow {
    pub doctor: Doctor,
    #[cfg_attr(feature = "serde", serde(flatten))]
    pub counts: DutyCounts,
}

/// Une ligne par médecin du roster, y compris ceux jamais affectés.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct DistributionReport {
    pub rows: Vec<DistributionRow>,
}

impl DistributionReport {
    /// Recalcule la répartition à partir d'un planning déjà produit.
    ///
    /// Les médecins du roster sortent dans l'ordre du roster ; un nom présent
    /// dans le planning mais absent du roster est ajouté à la suite.
    pub fn from_records(roster: &[Doctor], records: &[DutyRecord]) -> Self {
        let mut report = Self {
            rows: Vec::with_capacity(roster.len()),
        };
        for doctor in roster {
            report.row_mut(doctor);
        }
        for record in records {
            for doctor in [&record.campus1, &record.campus2] {
                report.row_mut(doctor).counts.record(record.day, record.duty);
            }
        }
        report
    }

    pub fn get(&self, doctor: &Doctor) -> Option<&DutyCounts> {
        self.rows
            .iter()
            .find(|row| &row.doctor == doctor)
            .map(|row| &row.counts)
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    fn row_mut(&mut self, doctor: &Doctor) -> &mut DistributionRow {
        let pos = match self.rows.iter().position(|row| &row.doctor == doctor) {
            Some(pos) => pos,
            None => {
                self.rows.push(DistributionRow {
                    doctor: doctor.clone(),
                    counts: DutyCounts::default(),
                });
                self.rows.len() - 1
            }
        };
        &mut self.rows[pos]
    }
}
