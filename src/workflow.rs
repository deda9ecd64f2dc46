//! Opérations de haut niveau sur un [`TableStore`] : roster, congés, planning.
//!
//! Toute sortie est construite en mémoire avant l'unique écriture ; une
//! erreur de stockage est propagée telle quelle, sans nouvel essai.

use crate::model::{Doctor, DutyRecord, LeaveRecord};
use crate::report::DistributionReport;
use crate::scheduler::{Schedule, ScheduleOptions, Scheduler};
use crate::storage::{Table, TableStore, WriteMode};
use crate::tables;
use anyhow::{bail, Context, Result};

/// Remplace la table `Doctors`. Les noms sont nettoyés ; il en faut au moins un.
pub fn save_doctors<S, I, N>(store: &S, names: I) -> Result<Vec<Doctor>>
where
    S: TableStore + ?Sized,
    I: IntoIterator<Item = N>,
    N: AsRef<str>,
{
    let rows: Vec<_> = names
        .into_iter()
        .map(|n| vec![n.as_ref().trim().to_string()])
        .collect();
    let doctors = tables::doctors_from_rows(&rows);
    if doctors.is_empty() {
        bail!("at least one doctor is required");
    }
    store
        .write(
            Table::Doctors,
            &tables::doctors_to_rows(&doctors),
            WriteMode::Replace,
        )
        .context("saving doctors")?;
    Ok(doctors)
}

pub fn load_doctors<S: TableStore + ?Sized>(store: &S) -> Result<Vec<Doctor>> {
    let rows = store.read(Table::Doctors).context("loading doctors")?;
    Ok(tables::doctors_from_rows(&rows))
}

pub fn add_leave<S: TableStore + ?Sized>(store: &S, record: &LeaveRecord) -> Result<()> {
    add_leaves(store, std::slice::from_ref(record))
}

/// Ajoute plusieurs congés en une seule écriture : tout ou rien.
pub fn add_leaves<S: TableStore + ?Sized>(store: &S, records: &[LeaveRecord]) -> Result<()> {
    if let Some(pos) = records
        .iter()
        .position(|r| r.doctor.name().trim().is_empty())
    {
        bail!("leave {} requires a doctor name", pos + 1);
    }
    let rows: Vec<_> = records.iter().map(tables::leave_to_row).collect();
    store
        .write(Table::LeaveDates, &rows, WriteMode::Append)
        .context("adding leave dates")
}

pub fn load_leave<S: TableStore + ?Sized>(store: &S) -> Result<Vec<LeaveRecord>> {
    let rows = store.read(Table::LeaveDates).context("loading leave dates")?;
    tables::leave_from_rows(&rows)
}

pub fn clear_leave<S: TableStore + ?Sized>(store: &S) -> Result<()> {
    store
        .write(Table::LeaveDates, &[], WriteMode::Replace)
        .context("clearing leave dates")
}

/// Lit roster et congés, calcule le planning puis remplace la table `Schedule`.
pub fn generate_schedule<S: TableStore + ?Sized>(
    store: &S,
    opts: &ScheduleOptions,
) -> Result<Schedule> {
    let doctors = load_doctors(store)?;
    let leave = load_leave(store)?;
    let scheduler = Scheduler::with_leave_records(doctors, leave)?;
    let schedule = scheduler.run(opts)?;

    store
        .write(
            Table::Schedule,
            &tables::schedule_to_rows(&schedule.records),
            WriteMode::Replace,
        )
        .context("saving schedule")?;
    Ok(schedule)
}

pub fn load_schedule<S: TableStore + ?Sized>(store: &S) -> Result<Vec<DutyRecord>> {
    let rows = store.read(Table::Schedule).context("loading schedule")?;
    tables::schedule_from_rows(&rows)
}

/// Répartition recalculée depuis les tables `Doctors` et `Schedule`.
pub fn load_distribution<S: TableStore + ?Sized>(store: &S) -> Result<DistributionReport> {
    let doctors = load_doctors(store)?;
    let records = load_schedule(store)?;
    Ok(DistributionReport::from_records(&doctors, &records))
}

pub fn clear_schedule<S: TableStore + ?Sized>(store: &S) -> Result<()> {
    store
        .write(Table::Schedule, &[], WriteMode::Replace)
        .context("clearing schedule")
}
