//! Conversion entre lignes de tables (cellules texte) et types du modèle.
//!
//! Formes attendues :
//! - `Doctors` : `[nom]`
//! - `LeaveDates` : `[nom, YYYY-MM-DD]`
//! - `Schedule` : en-tête [`SCHEDULE_HEADER`] puis une ligne par garde.

use crate::model::{DayCategory, Doctor, DutyRecord, DutyType, LeaveRecord};
use crate::report::DistributionReport;
use crate::storage::Row;
use anyhow::{bail, Context};
use chrono::NaiveDate;
use std::collections::HashSet;

pub const DATE_FORMAT: &str = "%Y-%m-%d";

pub const SCHEDULE_HEADER: [&str; 5] = [
    "Date",
    "Day",
    "Campus 1 Doctor",
    "Campus 2 Doctor",
    "Duty Type",
];

pub const DISTRIBUTION_HEADER: [&str; 7] = [
    "Doctor",
    "Total Duties",
    "Weekdays",
    "Saturdays",
    "Sundays",
    "12-hour",
    "24-hour",
];

pub fn parse_date(raw: &str) -> anyhow::Result<NaiveDate> {
    NaiveDate::parse_from_str(raw.trim(), DATE_FORMAT)
        .with_context(|| format!("invalid date (expected YYYY-MM-DD): {raw}"))
}

pub fn format_date(date: NaiveDate) -> String {
    date.format(DATE_FORMAT).to_string()
}

fn cell(row: &Row, idx: usize) -> &str {
    row.get(idx).map(|c| c.trim()).unwrap_or("")
}

/// Noms non vides de la table `Doctors`, sans doublons, dans l'ordre.
pub fn doctors_from_rows(rows: &[Row]) -> Vec<Doctor> {
    let mut seen = HashSet::new();
    rows.iter()
        .map(|row| cell(row, 0))
        .filter(|name| !name.is_empty())
        .filter(|name| seen.insert(name.to_string()))
        .map(Doctor::new)
        .collect()
}

pub fn doctors_to_rows(doctors: &[Doctor]) -> Vec<Row> {
    doctors.iter().map(|d| vec![d.name().to_string()]).collect()
}

/// Les lignes incomplètes sont ignorées ; une date mal formée est une erreur.
pub fn leave_from_rows(rows: &[Row]) -> anyhow::Result<Vec<LeaveRecord>> {
    let mut out = Vec::new();
    for (line, row) in rows.iter().enumerate() {
        let name = cell(row, 0);
        let date = cell(row, 1);
        if name.is_empty() || date.is_empty() {
            continue;
        }
        let date = parse_date(date)
            .with_context(|| format!("LeaveDates row {} ({name})", line + 1))?;
        out.push(LeaveRecord::new(name, date));
    }
    Ok(out)
}

pub fn leave_to_row(record: &LeaveRecord) -> Row {
    vec![record.doctor.name().to_string(), format_date(record.date)]
}

pub fn schedule_to_rows(records: &[DutyRecord]) -> Vec<Row> {
    let mut rows: Vec<Row> = Vec::with_capacity(records.len() + 1);
    rows.push(SCHEDULE_HEADER.iter().map(|h| h.to_string()).collect());
    rows.extend(records.iter().map(|r| {
        vec![
            format_date(r.date),
            r.day.label().to_string(),
            r.campus1.name().to_string(),
            r.campus2.name().to_string(),
            r.duty.label().to_string(),
        ]
    }));
    rows
}

fn is_schedule_header(row: &Row) -> bool {
    row.len() >= SCHEDULE_HEADER.len()
        && row
            .iter()
            .zip(SCHEDULE_HEADER.iter())
            .all(|(c, h)| c.trim() == *h)
}

/// Relit une table `Schedule`. Une table vide (ou réduite à l'en-tête) donne
/// un planning vide.
pub fn schedule_from_rows(rows: &[Row]) -> anyhow::Result<Vec<DutyRecord>> {
    let body = match rows.first() {
        Some(first) if is_schedule_header(first) => &rows[1..],
        _ => rows,
    };
    let mut out = Vec::with_capacity(body.len());
    for (line, row) in body.iter().enumerate() {
        if row.iter().all(|c| c.trim().is_empty()) {
            continue;
        }
        let record = parse_schedule_row(row)
            .with_context(|| format!("Schedule row {}", line + 1))?;
        out.push(record);
    }
    Ok(out)
}

fn parse_schedule_row(row: &Row) -> anyhow::Result<DutyRecord> {
    if row.len() < SCHEDULE_HEADER.len() {
        bail!(
            "expected {} cells, found {}",
            SCHEDULE_HEADER.len(),
            row.len()
        );
    }
    let date = parse_date(cell(row, 0))?;
    let day: DayCategory = cell(row, 1).parse().map_err(anyhow::Error::msg)?;
    let campus1 = cell(row, 2);
    let campus2 = cell(row, 3);
    if campus1.is_empty() || campus2.is_empty() {
        bail!("missing doctor name");
    }
    if campus1 == campus2 {
        bail!("same doctor on both campuses: {campus1}");
    }
    let duty: DutyType = cell(row, 4).parse()?;
    Ok(DutyRecord {
        date,
        day,
        campus1: Doctor::new(campus1),
        campus2: Doctor::new(campus2),
        duty,
    })
}

/// Rendu tabulaire de la répartition, en-tête compris.
pub fn distribution_to_rows(report: &DistributionReport) -> Vec<Row> {
    let mut buf = itoa::Buffer::new();
    let mut rows: Vec<Row> = Vec::with_capacity(report.len() + 1);
    rows.push(DISTRIBUTION_HEADER.iter().map(|h| h.to_string()).collect());
    for row in &report.rows {
        let c = &row.counts;
        let mut out = vec![row.doctor.name().to_string()];
        for n in [
            c.total,
            c.weekdays,
            c.saturdays,
            c.sundays,
            c.twelve_hour,
            c.twenty_four_hour,
        ] {
            out.push(buf.format(n).to_owned());
        }
        rows.push(out);
    }
    rows
}

/// `YYYY-MM-DD=12h|24h`
pub fn parse_override(raw: &str) -> anyhow::Result<(NaiveDate, DutyType)> {
    let (date, duty) = raw
        .split_once('=')
        .with_context(|| format!("invalid override (expected DATE=TYPE): {raw}"))?;
    let date = parse_date(date)?;
    let duty: DutyType = duty.parse()?;
    Ok((date, duty))
}
