#![forbid(unsafe_code)]
use anyhow::{bail, Result};
use clap::{Parser, Subcommand};
use gardes::{
    io,
    model::{DutyOverrides, DutyType, LeaveRecord},
    scheduler::ScheduleOptions,
    storage::CsvDirStore,
    tables, workflow, DistributionReport,
};
#[cfg(feature = "logging")]
use tracing_subscriber::{fmt::Subscriber, EnvFilter};

/// CLI de répartition des gardes (tables CSV locales, sans base de données)
#[derive(Parser, Debug)]
#[command(author, version, about)]
struct Cli {
    /// Active les logs (feature `logging`)
    #[arg(long, global = true)]
    log: bool,

    /// Répertoire des tables CSV (Doctors, LeaveDates, Schedule)
    #[arg(long, global = true, default_value = "gardes-data")]
    data_dir: String,

    #[command(subcommand)]
    cmd: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Remplacer la liste des médecins
    SetDoctors {
        /// liste "nom1,nom2,..."
        #[arg(long, conflicts_with = "csv")]
        names: Option<String>,
        /// CSV avec en-tête `name`
        #[arg(long)]
        csv: Option<String>,
    },

    /// Ajouter un ou plusieurs jours de congé
    AddLeave {
        #[arg(long, requires = "date", conflicts_with = "csv")]
        doctor: Option<String>,
        /// YYYY-MM-DD
        #[arg(long, requires = "doctor")]
        date: Option<String>,
        /// CSV avec en-tête `doctor,date`
        #[arg(long)]
        csv: Option<String>,
    },

    /// Supprimer tous les congés
    ClearLeave,

    /// Calculer le planning et remplacer la table Schedule
    Generate {
        /// Premier jour (YYYY-MM-DD)
        #[arg(long)]
        start: String,
        /// Durée en mois
        #[arg(long, default_value_t = 1)]
        months: u32,
        /// Dernier jour exclu (YYYY-MM-DD), prioritaire sur --months
        #[arg(long)]
        until: Option<String>,
        /// Type de garde par défaut : 12h ou 24h
        #[arg(long, default_value = "12h")]
        duty: String,
        /// Type imposé pour une date : YYYY-MM-DD=12h|24h (répétable)
        #[arg(long = "override")]
        overrides: Vec<String>,
        /// Graine du départage aléatoire (tirée au hasard si absente)
        #[arg(long)]
        seed: Option<u64>,
        #[arg(long)]
        out_json: Option<String>,
    },

    /// Afficher le planning enregistré
    Show,

    /// Répartition des gardes par médecin
    Distribution {
        #[arg(long)]
        out_csv: Option<String>,
    },

    /// Vider la table Schedule
    ClearSchedule,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    #[cfg(feature = "logging")]
    if cli.log {
        let _ = Subscriber::builder()
            .with_env_filter(EnvFilter::from_default_env())
            .try_init();
    }

    let store = CsvDirStore::open(&cli.data_dir)?;

    let code = match cli.cmd {
        Commands::SetDoctors { names, csv } => {
            let names: Vec<String> = match (names, csv) {
                (Some(list), _) => list.split(',').map(|s| s.trim().to_string()).collect(),
                (None, Some(path)) => io::import_doctors_csv(path)?
                    .into_iter()
                    .map(|d| d.name().to_string())
                    .collect(),
                (None, None) => bail!("--names or --csv is required"),
            };
            let saved = workflow::save_doctors(&store, names)?;
            println!("{} doctor(s) saved", saved.len());
            0
        }
        Commands::AddLeave { doctor, date, csv } => {
            let records = match (doctor, date, csv) {
                (Some(doctor), Some(date), _) => {
                    vec![LeaveRecord::new(doctor.trim(), tables::parse_date(&date)?)]
                }
                (_, _, Some(path)) => io::import_leave_csv(path)?,
                _ => bail!("--doctor with --date, or --csv, is required"),
            };
            workflow::add_leaves(&store, &records)?;
            println!("{} leave date(s) added", records.len());
            0
        }
        Commands::ClearLeave => {
            workflow::clear_leave(&store)?;
            println!("Leave dates cleared");
            0
        }
        Commands::Generate {
            start,
            months,
            until,
            duty,
            overrides,
            seed,
            out_json,
        } => {
            if months < 1 && until.is_none() {
                bail!("duration must be at least one month");
            }
            let start = tables::parse_date(&start)?;
            let duty: DutyType = duty.parse()?;
            let overrides = overrides
                .iter()
                .map(|raw| tables::parse_override(raw))
                .collect::<Result<DutyOverrides>>()?;
            let seed = seed.unwrap_or_else(rand::random);

            let mut opts = ScheduleOptions::new(start)
                .months(months)
                .default_duty(duty)
                .overrides(overrides)
                .seed(seed);
            if let Some(end) = until {
                opts = opts.until(tables::parse_date(&end)?);
            }
            let schedule = workflow::generate_schedule(&store, &opts)?;

            if let Some(path) = out_json {
                io::export_schedule_json(path, &schedule)?;
            }
            println!(
                "{} day(s) scheduled, {} skipped (seed {seed})",
                schedule.records.len(),
                schedule.skipped.len()
            );
            if schedule.skipped.is_empty() {
                0
            } else {
                for date in &schedule.skipped {
                    eprintln!("Not enough available doctors on {}", tables::format_date(*date));
                }
                // Code 2 = WARNING/INCOMPLETE
                2
            }
        }
        Commands::Show => {
            let records = workflow::load_schedule(&store)?;
            if records.is_empty() {
                println!("No schedule generated yet");
            }
            for r in &records {
                println!(
                    "{} | {} | {} | {} | {}",
                    tables::format_date(r.date),
                    r.day,
                    r.campus1,
                    r.campus2,
                    r.duty
                );
            }
            0
        }
        Commands::Distribution { out_csv } => {
            let doctors = workflow::load_doctors(&store)?;
            let records = workflow::load_schedule(&store)?;
            if doctors.is_empty() || records.is_empty() {
                println!("No data available");
            } else {
                let report = DistributionReport::from_records(&doctors, &records);
                if let Some(path) = out_csv {
                    io::export_distribution_csv(path, &report)?;
                }
                for row in tables::distribution_to_rows(&report) {
                    println!("{}", row.join(" | "));
                }
            }
            0
        }
        Commands::ClearSchedule => {
            workflow::clear_schedule(&store)?;
            println!("Schedule cleared");
            0
        }
    };

    std::process::exit(code);
}
