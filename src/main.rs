use std::path::PathBuf;

use anyhow::Context;
use chrono::{Local, NaiveDate};
use clap::{ArgGroup, Args, Parser, Subcommand, ValueEnum};
use tracing_subscriber::EnvFilter;

use weekly_insights::import::{load_checkins, write_sample_csv};
use weekly_insights::insights::{build_insights, InsightInputs, WeeklyInsights};
use weekly_insights::models::Stage;
use weekly_insights::report::build_report;
use weekly_insights::EngineConfig;

#[derive(Parser)]
#[command(name = "weekly-insights")]
#[command(about = "Weekly mood, energy and symptom insights for the partner summary", long_about = None)]
struct Cli {
    /// JSON file overriding the engine's thresholds
    #[arg(long, global = true)]
    config: Option<PathBuf>,
    #[command(subcommand)]
    command: Commands,
}

#[derive(Args)]
struct InputArgs {
    /// Check-ins as CSV (date,mood,energy,symptoms,slot) or a JSON array
    #[arg(long)]
    input: PathBuf,
    /// Last day of the current week (defaults to today)
    #[arg(long)]
    today: Option<NaiveDate>,
}

#[derive(Args)]
#[command(group(
    ArgGroup::new("stage")
        .args(["trimester", "postpartum_week"])
        .required(true)
        .multiple(false)
))]
struct StageArgs {
    #[arg(long, value_parser = clap::value_parser!(u8).range(1..=3))]
    trimester: Option<u8>,
    #[arg(long)]
    postpartum_week: Option<u32>,
    /// An appointment is coming up
    #[arg(long)]
    appointment_upcoming: bool,
}

impl StageArgs {
    fn stage(&self) -> Stage {
        match (self.trimester, self.postpartum_week) {
            (_, Some(week)) => Stage::Postpartum { week },
            (Some(trimester), None) => Stage::Pregnancy { trimester },
            (None, None) => Stage::Pregnancy { trimester: 1 },
        }
    }
}

#[derive(Clone, Copy, ValueEnum)]
enum ReportFormat {
    Markdown,
    Json,
}

#[derive(Subcommand)]
enum Commands {
    /// Write two weeks of sample check-ins
    Sample {
        #[arg(long, default_value = "checkins.csv")]
        out: PathBuf,
        #[arg(long)]
        today: Option<NaiveDate>,
    },
    /// Summarize the current week
    Aggregate {
        #[command(flatten)]
        input: InputArgs,
        #[arg(long)]
        json: bool,
    },
    /// Compare the current week with the previous one
    Trends {
        #[command(flatten)]
        input: InputArgs,
        #[arg(long)]
        json: bool,
    },
    /// Weigh this week's symptoms and look for red flags
    Analyze {
        #[command(flatten)]
        input: InputArgs,
        #[arg(long)]
        json: bool,
    },
    /// Rank supportive suggestions
    Suggest {
        #[command(flatten)]
        input: InputArgs,
        #[command(flatten)]
        stage: StageArgs,
        #[arg(long)]
        json: bool,
    },
    /// Generate the full weekly report
    Report {
        #[command(flatten)]
        input: InputArgs,
        #[command(flatten)]
        stage: StageArgs,
        #[arg(long, value_enum, default_value_t = ReportFormat::Markdown)]
        format: ReportFormat,
        #[arg(long, default_value = "weekly-insights.md")]
        out: PathBuf,
    },
}

fn load_config(path: Option<&PathBuf>) -> anyhow::Result<EngineConfig> {
    match path {
        Some(path) => EngineConfig::from_path(path)
            .with_context(|| format!("failed to load config from {}", path.display())),
        None => Ok(EngineConfig::default()),
    }
}

fn run_pipeline(
    input: &InputArgs,
    stage: Option<&StageArgs>,
    config: &EngineConfig,
) -> anyhow::Result<WeeklyInsights> {
    let checkins = load_checkins(&input.input)?;
    let inputs = InsightInputs {
        stage: stage
            .map(StageArgs::stage)
            .unwrap_or(Stage::Pregnancy { trimester: 1 }),
        appointment_upcoming: stage.is_some_and(|s| s.appointment_upcoming),
        today: input.today.unwrap_or_else(|| Local::now().date_naive()),
    };
    Ok(build_insights(&checkins, &inputs, config))
}

fn print_json<T: serde::Serialize>(value: &T) -> anyhow::Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let config = load_config(cli.config.as_ref())?;

    match cli.command {
        Commands::Sample { out, today } => {
            let today = today.unwrap_or_else(|| Local::now().date_naive());
            let written = write_sample_csv(&out, today)?;
            println!("Wrote {written} sample check-ins to {}.", out.display());
        }
        Commands::Aggregate { input, json } => {
            let insights = run_pipeline(&input, None, &config)?;
            let week = &insights.current;
            if json {
                return print_json(week);
            }
            println!(
                "Week of {} to {}: {} check-ins",
                insights.window.start, insights.window.end, week.total_checkins
            );
            println!(
                "Mood: {} happy, {} neutral, {} sad",
                week.mood_counts.happy, week.mood_counts.neutral, week.mood_counts.sad
            );
            println!(
                "Energy: {} high, {} medium, {} low",
                week.energy_counts.high, week.energy_counts.medium, week.energy_counts.low
            );
            if week.top_symptoms.is_empty() {
                println!("No symptoms logged.");
            }
            for symptom in &week.top_symptoms {
                println!("- {} x{}", symptom.symptom, symptom.count);
            }
        }
        Commands::Trends { input, json } => {
            let insights = run_pipeline(&input, None, &config)?;
            if json {
                return print_json(&serde_json::json!({
                    "deltas": insights.deltas,
                    "trends": insights.trends,
                }));
            }
            let trends = &insights.trends;
            println!("Mood: {:?} ({:+})", trends.mood, trends.mood_score);
            println!("Energy: {:?} ({:+})", trends.energy, trends.energy_score);
            println!("Symptoms: {:?} ({:+})", trends.symptoms, trends.symptom_score);
            println!(
                "Overall wellbeing: {:?} ({:+})",
                trends.overall_wellbeing, trends.overall_score
            );
        }
        Commands::Analyze { input, json } => {
            let insights = run_pipeline(&input, None, &config)?;
            let analysis = &insights.analysis;
            if json {
                return print_json(analysis);
            }
            println!(
                "Severity: {:?} (score {}, average weight {:.2})",
                analysis.severity_level, analysis.total_score, analysis.average_weight
            );
            for symptom in &analysis.weighted_symptoms {
                println!(
                    "- {} x{} weight {} score {}",
                    symptom.symptom, symptom.count, symptom.weight, symptom.score
                );
            }
            if analysis.has_red_flags {
                println!("Red flags: {}", analysis.red_flag_symptoms.join(", "));
            }
        }
        Commands::Suggest { input, stage, json } => {
            let insights = run_pipeline(&input, Some(&stage), &config)?;
            if json {
                return print_json(&insights.suggestions);
            }
            for suggestion in &insights.suggestions {
                println!(
                    "[{}] ({}) {}",
                    suggestion.icon, suggestion.priority, suggestion.text
                );
            }
        }
        Commands::Report {
            input,
            stage,
            format,
            out,
        } => {
            let insights = run_pipeline(&input, Some(&stage), &config)?;
            let rendered = match format {
                ReportFormat::Markdown => build_report(&insights),
                ReportFormat::Json => serde_json::to_string_pretty(&insights)?,
            };
            std::fs::write(&out, rendered)
                .with_context(|| format!("failed to write {}", out.display()))?;
            println!("Report written to {}.", out.display());
        }
    }

    Ok(())
}
