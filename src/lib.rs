#![forbid(unsafe_code)]
//! Gardes — répartition des gardes de médecins sur deux sites (sans BD).
//!
//! - Deux médecins distincts par jour, un par site.
//! - Contraintes dures : congés, repos minimal selon le type de garde (12h/24h).
//! - Équité gloutonne : nombre total de gardes, puis gardes de week-end.
//! - Stockage tabulaire externe (CSV ou mémoire) ; dates locales `YYYY-MM-DD`.

#[cfg(feature = "serde")]
pub mod io;
pub mod model;
pub mod report;
pub mod scheduler;
pub mod storage;
pub mod tables;
pub mod workflow;

pub use model::{
    DayCategory, Doctor, DutyOverrides, DutyRecord, DutyType, LeaveCalendar, LeaveRecord,
};
pub use report::{DistributionReport, DistributionRow, DutyCounts};
pub use scheduler::{SchedError, Schedule, ScheduleOptions, Scheduler};
#[cfg(feature = "serde")]
pub use storage::CsvDirStore;
pub use storage::{MemoryStore, Row, Table, TableStore, WriteMode};
