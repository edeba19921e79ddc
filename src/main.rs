//! liftwise - Personal strength training coach

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use chrono::{DateTime, Utc};
use clap::{Parser, Subcommand};
use serde::Serialize;

use liftwise::config::EngineConfig;
use liftwise::engine::{next_set_recommendations, Coach, StrengthEstimator};
use liftwise::exercises::{builtin_catalog, load_catalog, Catalog};
use liftwise::history::{load_history, CompletedWorkout};

#[derive(Parser)]
#[command(name = "liftwise")]
#[command(author, version, about = "Next-set and next-session recommendations from your lifting log")]
struct Cli {
    /// JSON file overriding the engine tables
    #[arg(long, global = true, env = "LIFTWISE_CONFIG")]
    config: Option<PathBuf>,

    /// Print results as JSON
    #[arg(long, global = true)]
    json: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(clap::Args)]
struct SnapshotArgs {
    /// Workout history (JSON array of completed workouts)
    #[arg(long, env = "LIFTWISE_HISTORY")]
    history: PathBuf,

    /// Exercise catalog (JSON array); built-in catalog if omitted
    #[arg(long, env = "LIFTWISE_CATALOG")]
    catalog: Option<PathBuf>,

    /// Evaluate as of this time (RFC 3339) instead of now
    #[arg(long)]
    now: Option<DateTime<Utc>>,
}

#[derive(Subcommand)]
enum Commands {
    /// Estimate 1RM from a single set
    Estimate {
        weight: f64,
        reps: u32,

        /// Perceived effort of the set (1-10)
        #[arg(short, long)]
        rpe: Option<u8>,

        /// Also suggest a working weight for this many reps at RPE 8
        #[arg(short, long)]
        target_reps: Option<u32>,
    },

    /// Suggest the next set from the last one
    NextSet {
        weight: f64,
        reps: u32,
        rpe: u8,
    },

    /// Weekly volume and recovery per muscle
    Status {
        #[command(flatten)]
        snapshot: SnapshotArgs,
    },

    /// Recommend the next session
    Recommend {
        #[command(flatten)]
        snapshot: SnapshotArgs,
    },

    /// Best estimated 1RM on record for an exercise
    Best {
        exercise_id: String,

        #[command(flatten)]
        snapshot: SnapshotArgs,
    },
}

struct Snapshot {
    catalog: Catalog,
    workouts: Vec<CompletedWorkout>,
    now: DateTime<Utc>,
}

impl Snapshot {
    fn load(args: &SnapshotArgs) -> Result<Self> {
        let catalog = match &args.catalog {
            Some(path) => load_catalog(path)?,
            None => builtin_catalog(),
        };
        let workouts = load_history(&args.history)?;
        Ok(Self {
            catalog,
            workouts,
            now: args.now.unwrap_or_else(Utc::now),
        })
    }

    fn coach<'a>(&'a self, config: &'a EngineConfig) -> Coach<'a> {
        Coach::new(config, &self.catalog, &self.workouts, self.now)
    }
}

fn load_config(path: Option<&Path>) -> Result<EngineConfig> {
    match path {
        Some(path) => EngineConfig::load(path),
        None => Ok(EngineConfig::default()),
    }
}

fn print_json<T: Serialize>(value: &T) -> Result<()> {
    let out = serde_json::to_string_pretty(value).context("serializing output")?;
    println!("{}", out);
    Ok(())
}

fn main() -> Result<()> {
    // Load .env file if present
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt::init();

    let cli = Cli::parse();
    let config = load_config(cli.config.as_deref())?;

    match cli.command {
        Commands::Estimate { weight, reps, rpe, target_reps } => {
            let estimator = StrengthEstimator::new(&config);
            let e1rm = estimator.estimate_1rm_with_rpe(weight, reps, rpe);
            let working = target_reps.map(|r| (r, estimator.weight_for_reps(e1rm, r, None)));

            if cli.json {
                print_json(&serde_json::json!({
                    "estimated_1rm": e1rm,
                    "target": working.map(|(reps, weight)| serde_json::json!({ "reps": reps, "weight": weight })),
                }))?;
            } else {
                println!("Estimated 1RM: {:.1}", e1rm);
                if let Some((reps, weight)) = working {
                    println!("For {} reps @ RPE 8: {:.1}", reps, weight);
                }
            }
        }

        Commands::NextSet { weight, reps, rpe } => {
            let options = next_set_recommendations(weight, reps, rpe);
            if cli.json {
                print_json(&options)?;
            } else {
                println!("Next set after {}x{} @ RPE {}:", weight, reps, rpe);
                for (i, option) in options.iter().enumerate() {
                    let marker = if i == 0 { "*" } else { " " };
                    println!("{} {:>6.1} x {:<3} {}", marker, option.weight, option.reps, option.reason);
                }
            }
        }

        Commands::Status { snapshot } => {
            let snapshot = Snapshot::load(&snapshot)?;
            let coach = snapshot.coach(&config);
            if cli.json {
                print_json(&coach.muscle_volume_status())?;
            } else {
                println!("{}", coach.format_volume_report());
            }
        }

        Commands::Recommend { snapshot } => {
            let snapshot = Snapshot::load(&snapshot)?;
            let coach = snapshot.coach(&config);
            let recommendation = coach
                .smart_recommendation()
                .context("no candidate splits configured")?;

            if cli.json {
                print_json(&recommendation)?;
            } else {
                println!("{} (score {})", recommendation.split_name, recommendation.score);
                println!("Why: {}", recommendation.reason);
                println!("{:-<40}", "");
                for exercise in &recommendation.exercises {
                    println!("{:24} | {}", exercise.name, exercise.muscle_groups.join(", "));
                }
            }
        }

        Commands::Best { exercise_id, snapshot } => {
            let snapshot = Snapshot::load(&snapshot)?;
            let coach = snapshot.coach(&config);
            let best = coach.best_estimated_1rm(&exercise_id);

            if cli.json {
                print_json(&serde_json::json!({ "exercise_id": exercise_id, "estimated_1rm": best }))?;
            } else {
                match best {
                    Some(e1rm) => println!("{}: best estimated 1RM {:.1}", exercise_id, e1rm),
                    None => println!("{}: no weighted sets on record", exercise_id),
                }
            }
        }
    }

    Ok(())
}
