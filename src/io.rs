use crate::model::{Doctor, LeaveRecord};
use crate::report::DistributionReport;
use crate::scheduler::Schedule;
use crate::tables;
use anyhow::Context;
use csv::{ReaderBuilder, WriterBuilder};
use std::fs;
use std::path::Path;

/// Import de médecins depuis CSV: header `name`
pub fn import_doctors_csv<P: AsRef<Path>>(path: P) -> anyhow::Result<Vec<Doctor>> {
    let mut rdr = ReaderBuilder::new().has_headers(true).from_path(path)?;
    let mut out = Vec::new();
    for rec in rdr.records() {
        let rec = rec?;
        let name = rec.get(0).context("missing name")?.trim();
        if name.is_empty() {
            continue;
        }
        out.push(Doctor::new(name));
    }
    Ok(out)
}

/// Import de congés: header `doctor,date` (YYYY-MM-DD). Les lignes
/// incomplètes sont ignorées, comme dans la table `LeaveDates`.
pub fn import_leave_csv<P: AsRef<Path>>(path: P) -> anyhow::Result<Vec<LeaveRecord>> {
    let mut rdr = ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .from_path(path)?;
    let mut out = Vec::new();
    for rec in rdr.records() {
        let rec = rec?;
        let doctor = rec.get(0).unwrap_or("").trim();
        let date = rec.get(1).unwrap_or("").trim();
        if doctor.is_empty() || date.is_empty() {
            continue;
        }
        let date = tables::parse_date(date)
            .with_context(|| format!("invalid leave date for {doctor}"))?;
        out.push(LeaveRecord::new(doctor, date));
    }
    Ok(out)
}

/// Export JSON du résultat complet (jolie mise en forme)
pub fn export_schedule_json<P: AsRef<Path>>(path: P, schedule: &Schedule) -> anyhow::Result<()> {
    let s = serde_json::to_string_pretty(schedule)?;
    fs::write(path, s)?;
    Ok(())
}

/// Export CSV de la répartition: header `Doctor,Total Duties,...`
pub fn export_distribution_csv<P: AsRef<Path>>(
    path: P,
    report: &DistributionReport,
) -> anyhow::Result<()> {
    let mut w = WriterBuilder::new().has_headers(false).from_path(path)?;
    for row in tables::distribution_to_rows(report) {
        w.write_record(&row)?;
    }
    w.flush()?;
    Ok(())
}
