use crate::model::{DayCategory, Doctor, DutyRecord, DutyType};
use crate::report::{DistributionReport, DistributionRow, DutyCounts};
use chrono::{Days, NaiveDate};

/// Charge courante d'un médecin pendant un calcul.
#[derive(Debug, Clone, Default)]
pub(super) struct DoctorLoad {
    pub counts: DutyCounts,
    /// Dernier jour couvert par une garde (décalé d'un jour après une 24h).
    pub last_duty: Option<NaiveDate>,
}

/// État propre à un calcul, indexé comme le roster. Jamais persisté.
#[derive(Debug)]
pub(super) struct RunState {
    loads: Vec<DoctorLoad>,
}

impl RunState {
    pub fn new(doctors: usize) -> Self {
        Self {
            loads: vec![DoctorLoad::default(); doctors],
        }
    }

    pub fn load(&self, idx: usize) -> &DoctorLoad {
        &self.loads[idx]
    }

    /// Enregistre la paire retenue pour `date` et renvoie la ligne du planning.
    pub fn commit(
        &mut self,
        doctors: &[Doctor],
        pair: (usize, usize),
        date: NaiveDate,
        day: DayCategory,
        duty: DutyType,
    ) -> DutyRecord {
        let covered_until = if duty.is_full_day() {
            date.checked_add_days(Days::new(1)).unwrap_or(date)
        } else {
            date
        };

        for idx in [pair.0, pair.1] {
            let load = &mut self.loads[idx];
            load.counts.record(day, duty);
            load.last_duty = Some(covered_until);
        }

        DutyRecord {
            date,
            day,
            campus1: doctors[pair.0].clone(),
            campus2: doctors[pair.1].clone(),
            duty,
        }
    }

    /// Photographie finale : une ligne par médecin, dans l'ordre du roster.
    pub fn into_report(self, doctors: &[Doctor]) -> DistributionReport {
        DistributionReport {
            rows: doctors
                .iter()
                .zip(self.loads)
                .map(|(doctor, load)| DistributionRow {
                    doctor: doctor.clone(),
                    counts: load.counts,
                })
                .collect(),
        }
    }
}
