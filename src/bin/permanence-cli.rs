#![forbid(unsafe_code)]
use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use permanence::{
    io::{self, PlanStep},
    scheduler::{ScheduleOptions, Scheduler},
    time,
};
#[cfg(feature = "logging")]
use tracing_subscriber::{fmt::Subscriber, EnvFilter};

/// CLI de planification de permanences (en mémoire, un plan par exécution)
#[derive(Parser, Debug)]
#[command(author, version, about)]
struct Cli {
    /// Active les logs (feature `logging`)
    #[arg(long, global = true)]
    log: bool,

    /// Décalage UTC en heures pour l'affichage (défaut : fuseau local)
    #[arg(long, global = true, allow_hyphen_values = true)]
    utc_offset: Option<i32>,

    #[command(subcommand)]
    cmd: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Exécuter un plan CSV puis afficher le planning
    Run {
        #[arg(long)]
        plan: String,
        /// Début de la fenêtre (YYYY-MM-DD)
        #[arg(long, requires = "days")]
        from: Option<String>,
        /// Nombre de jours de la fenêtre
        #[arg(long, requires = "from")]
        days: Option<u32>,
        /// Afficher le planning complet
        #[arg(long)]
        full: bool,
        #[arg(long)]
        out_json: Option<String>,
        #[arg(long)]
        out_csv: Option<String>,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    #[cfg(feature = "logging")]
    if cli.log {
        let _ = Subscriber::builder()
            .with_env_filter(EnvFilter::from_default_env())
            .try_init();
    }

    let opts = match cli.utc_offset {
        Some(hours) => ScheduleOptions::with_offset_hours(hours)?,
        None => ScheduleOptions::default(),
    };
    let mut scheduler = Scheduler::with_options(opts);

    let code = match cli.cmd {
        Commands::Run {
            plan,
            from,
            days,
            full,
            out_json,
            out_csv,
        } => {
            let steps = io::import_plan_csv(&plan).with_context(|| format!("loading {plan}"))?;
            let mut failures = 0usize;
            for (idx, step) in steps.into_iter().enumerate() {
                let result = match step {
                    PlanStep::Schedule(req) => scheduler.schedule_event(req).map(|_| ()),
                    PlanStep::Override(req) => scheduler.override_event(req),
                };
                if let Err(err) = result {
                    eprintln!("step {}: {err}", idx + 1);
                    failures += 1;
                }
            }

            if let (Some(from), Some(days)) = (from, days) {
                let start = time::parse_date(&from)?;
                println!("{}", scheduler.render_range(start, days));
            }
            if full {
                println!("{}", scheduler.render_full());
            }
            if let Some(path) = out_json {
                io::export_schedule_json(path, scheduler.schedule())?;
            }
            if let Some(path) = out_csv {
                io::export_shifts_csv(path, scheduler.schedule())?;
            }

            // Code 2 = au moins une étape rejetée
            if failures > 0 {
                2
            } else {
                0
            }
        }
    };

    std::process::exit(code);
}
