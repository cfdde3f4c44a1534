use std::collections::HashSet;
use std::fs;
use std::path::{Path, PathBuf};

use chrono::{Local, NaiveDate};
use clap::{Args, Parser, Subcommand};
use matchbook::config::AppConfig;
use matchbook::error::AppError;
use matchbook::prospects::{
    calculate_compatibility, expiry_date, months_until_expiry, retention_status, score_breakdown,
    AttributeCategory, CompatibilityScore, InAppPrompt, PromptEngine, Prospect, ProspectStatus,
    ProspectSummary, RetentionStatus, Strictness,
};
use matchbook::telemetry;
use serde::Serialize;
use tracing::info;

#[derive(Parser, Debug)]
#[command(
    name = "Matchbook Insights",
    about = "Score prospect exports and preview in-app prompts from the command line",
    version
)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Compute compatibility scores for every prospect in a JSON export
    Score(ScoreArgs),
    /// Preview home-screen and per-prospect prompt suggestions for an export
    Prompts(PromptArgs),
}

#[derive(Args, Debug)]
struct ScoreArgs {
    /// JSON export containing an array of prospects
    file: PathBuf,
    /// Override the configured strictness preset (gentle, normal, strict)
    #[arg(long, value_parser = parse_strictness)]
    strictness: Option<Strictness>,
    /// Evaluation date for retention figures (defaults to today)
    #[arg(long, value_parser = parse_date)]
    today: Option<NaiveDate>,
    /// Include the per-category breakdown alongside each summary score
    #[arg(long)]
    breakdown: bool,
}

#[derive(Args, Debug)]
struct PromptArgs {
    /// JSON export containing an array of prospects
    file: PathBuf,
    /// Date the user joined, for the onboarding tip rotation (YYYY-MM-DD)
    #[arg(long, value_parser = parse_date)]
    joined: NaiveDate,
    /// Evaluation date (defaults to today)
    #[arg(long, value_parser = parse_date)]
    today: Option<NaiveDate>,
    /// Dismissal key to suppress; repeat for multiple keys
    #[arg(long = "dismissed")]
    dismissed: Vec<String>,
}

#[derive(Debug, Serialize)]
struct ProspectScoreView {
    id: String,
    name: String,
    status: ProspectStatus,
    status_label: &'static str,
    compatibility: CompatibilityScore,
    #[serde(skip_serializing_if = "Option::is_none")]
    breakdown: Option<Vec<BreakdownView>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    retention: Option<RetentionView>,
}

#[derive(Debug, Serialize)]
struct BreakdownView {
    category: AttributeCategory,
    category_label: &'static str,
    total: usize,
    confirmed: usize,
    yes_count: usize,
    no_count: usize,
    score: u8,
}

#[derive(Debug, Serialize)]
struct RetentionView {
    expires_on: NaiveDate,
    months_until_expiry: u32,
    status: RetentionStatus,
    status_label: &'static str,
}

#[derive(Debug, Serialize)]
struct PromptReport {
    today: NaiveDate,
    joined: NaiveDate,
    home: Vec<InAppPrompt>,
    prospects: Vec<ProspectPromptsView>,
}

#[derive(Debug, Serialize)]
struct ProspectPromptsView {
    prospect_id: String,
    prompts: Vec<InAppPrompt>,
}

fn main() {
    if let Err(err) = run_cli() {
        eprintln!("application error: {err}");
        std::process::exit(1);
    }
}

fn run_cli() -> Result<(), AppError> {
    let cli = Cli::parse();
    let config = AppConfig::load()?;
    telemetry::init(&config.telemetry)?;

    match cli.command {
        Command::Score(args) => run_score(args, &config),
        Command::Prompts(args) => run_prompts(args),
    }
}

fn parse_date(raw: &str) -> Result<NaiveDate, String> {
    NaiveDate::parse_from_str(raw.trim(), "%Y-%m-%d")
        .map_err(|err| format!("failed to parse '{raw}' as YYYY-MM-DD ({err})"))
}

fn parse_strictness(raw: &str) -> Result<Strictness, String> {
    Strictness::parse(raw)
        .ok_or_else(|| format!("'{raw}' is not one of gentle, normal, or strict"))
}

fn read_export(path: &Path) -> Result<Vec<Prospect>, AppError> {
    let raw = fs::read_to_string(path)?;
    Ok(serde_json::from_str(&raw)?)
}

fn run_score(args: ScoreArgs, config: &AppConfig) -> Result<(), AppError> {
    let strictness = args.strictness.unwrap_or(config.scoring.strictness);
    let today = args.today.unwrap_or_else(|| Local::now().date_naive());
    let prospects = read_export(&args.file)?;

    let views: Vec<ProspectScoreView> = prospects
        .iter()
        .map(|prospect| {
            let retention = prospect.archived_at.map(|archived_at| {
                let status = retention_status(archived_at, today);
                RetentionView {
                    expires_on: expiry_date(archived_at),
                    months_until_expiry: months_until_expiry(archived_at, today),
                    status,
                    status_label: status.label(),
                }
            });

            ProspectScoreView {
                id: prospect.id.clone(),
                name: prospect.name.clone(),
                status: prospect.status,
                status_label: prospect.status.label(),
                compatibility: calculate_compatibility(&prospect.traits, strictness),
                breakdown: args.breakdown.then(|| {
                    score_breakdown(&prospect.traits, strictness)
                        .into_iter()
                        .map(|entry| BreakdownView {
                            category: entry.category,
                            category_label: entry.category.label(),
                            total: entry.total,
                            confirmed: entry.confirmed,
                            yes_count: entry.yes_count,
                            no_count: entry.no_count,
                            score: entry.score,
                        })
                        .collect()
                }),
                retention,
            }
        })
        .collect();

    info!(
        count = views.len(),
        strictness = strictness.label(),
        "scored prospect export"
    );
    println!("{}", serde_json::to_string_pretty(&views)?);
    Ok(())
}

fn run_prompts(args: PromptArgs) -> Result<(), AppError> {
    let today = args.today.unwrap_or_else(|| Local::now().date_naive());
    let dismissed: HashSet<String> = args.dismissed.into_iter().collect();
    let prospects = read_export(&args.file)?;

    let engine = PromptEngine::with_defaults();
    let summaries: Vec<ProspectSummary> = prospects.iter().map(Prospect::summary).collect();
    let home = engine.home_prompts(&summaries, args.joined, &dismissed, today);

    let prospect_views: Vec<ProspectPromptsView> = prospects
        .iter()
        .map(|prospect| ProspectPromptsView {
            prospect_id: prospect.id.clone(),
            prompts: engine.prospect_prompts(prospect, &dismissed, today),
        })
        .collect();

    let emitted = home.len()
        + prospect_views
            .iter()
            .map(|view| view.prompts.len())
            .sum::<usize>();
    info!(count = emitted, "generated prompt suggestions");

    let report = PromptReport {
        today,
        joined: args.joined,
        home,
        prospects: prospect_views,
    };
    println!("{}", serde_json::to_string_pretty(&report)?);
    Ok(())
}
