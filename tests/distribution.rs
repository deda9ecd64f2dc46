#![forbid(unsafe_code)]
use chrono::NaiveDate;
use gardes::{tables, DistributionReport, Doctor, DutyType, ScheduleOptions, Scheduler};

fn rows(raw: &[&[&str]]) -> Vec<Vec<String>> {
    raw.iter()
        .map(|r| r.iter().map(|c| c.to_string()).collect())
        .collect()
}

fn roster() -> Vec<Doctor> {
    ["A", "B", "C", "D"].into_iter().map(Doctor::new).collect()
}

fn stored_schedule() -> Vec<Vec<String>> {
    rows(&[
        &["Date", "Day", "Campus 1 Doctor", "Campus 2 Doctor", "Duty Type"],
        &["2025-10-03", "Weekday", "A", "B", "12-hour"],
        &["2025-10-04", "Saturday", "C", "A", "24-hour"],
        &["2025-10-05", "Sunday", "B", "C", "12-hour"],
        &["2025-10-06", "Weekday", "Z", "A", "12-hour"],
    ])
}

#[test]
fn distribution_from_stored_schedule() {
    let records = tables::schedule_from_rows(&stored_schedule()).unwrap();
    let report = DistributionReport::from_records(&roster(), &records);

    let text = tables::distribution_to_rows(&report)
        .iter()
        .map(|r| r.join(","))
        .collect::<Vec<_>>()
        .join("\n");
    insta::assert_snapshot!(text, @r"
    Doctor,Total Duties,Weekdays,Saturdays,Sundays,12-hour,24-hour
    A,3,2,1,0,2,1
    B,2,1,0,1,2,0
    C,2,0,1,1,1,1
    D,0,0,0,0,0,0
    Z,1,1,0,0,1,0
    ");
}

#[test]
fn aggregation_is_idempotent() {
    let records = tables::schedule_from_rows(&stored_schedule()).unwrap();
    let first = DistributionReport::from_records(&roster(), &records);
    let second = DistributionReport::from_records(&roster(), &records);
    assert_eq!(first, second);
}

#[test]
fn stored_schedule_reproduces_run_report() {
    let s = Scheduler::with_leave_records(roster(), vec![]).unwrap();
    let opts = ScheduleOptions::new(NaiveDate::from_ymd_opt(2025, 4, 1).unwrap())
        .months(2)
        .default_duty(DutyType::TwentyFourHour)
        .seed(3);
    let schedule = s.run(&opts).unwrap();

    let stored = tables::schedule_to_rows(&schedule.records);
    assert_eq!(stored[0], tables::SCHEDULE_HEADER.map(String::from).to_vec());
    let reread = tables::schedule_from_rows(&stored).unwrap();
    assert_eq!(reread, schedule.records);
    assert_eq!(
        DistributionReport::from_records(s.doctors(), &reread),
        schedule.report
    );
}

#[test]
fn empty_schedule_table_gives_zero_rows() {
    assert!(tables::schedule_from_rows(&[]).unwrap().is_empty());
    let header_only = rows(&[&["Date", "Day", "Campus 1 Doctor", "Campus 2 Doctor", "Duty Type"]]);
    assert!(tables::schedule_from_rows(&header_only).unwrap().is_empty());
}

#[test]
fn malformed_schedule_rows_are_rejected() {
    let bad_date = rows(&[&["2025-13-01", "Weekday", "A", "B", "12-hour"]]);
    assert!(tables::schedule_from_rows(&bad_date).is_err());
    let same_doctor = rows(&[&["2025-10-03", "Weekday", "A", "A", "12-hour"]]);
    assert!(tables::schedule_from_rows(&same_doctor).is_err());
    let short = rows(&[&["2025-10-03", "Weekday", "A"]]);
    assert!(tables::schedule_from_rows(&short).is_err());
}

#[test]
fn leave_rows_skip_incomplete_entries() {
    let raw = rows(&[&["A", "2025-10-03"], &["", "2025-10-04"], &["B"], &["C", " 2025-10-05 "]]);
    let leave = tables::leave_from_rows(&raw).unwrap();
    assert_eq!(leave.len(), 2);
    assert_eq!(leave[1].doctor, Doctor::new("C"));

    let invalid = rows(&[&["A", "03/10/2025"]]);
    assert!(tables::leave_from_rows(&invalid).is_err());
}

#[test]
fn overrides_parse_from_cli_syntax() {
    let (date, duty) = tables::parse_override("2025-10-04=24h").unwrap();
    assert_eq!(date, NaiveDate::from_ymd_opt(2025, 10, 4).unwrap());
    assert_eq!(duty, DutyType::TwentyFourHour);
    assert!(tables::parse_override("2025-10-04").is_err());
    assert!(tables::parse_override("2025-10-04=36h").is_err());
}
