mod output;
mod shell;

use anyhow::{Context, Result, bail};
use app::{AppConfig, Controller, LensStatus};
use catalog::{Catalog, SKILL_VOCABULARY};
use clap::{Parser, Subcommand};
use colored::Colorize;
use pipeline::{TrialFilterEngine, available_skills};
use selection::FilterState;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::time::{Duration, Instant};

/// CareerForge - job trials and resume suggestions
#[derive(Parser)]
#[command(name = "careerforge")]
#[command(about = "Browse job trials and improve your resume", long_about = None)]
struct Cli {
    /// JSON file of job trials (defaults to the built-in listing)
    #[arg(short, long, global = true)]
    catalog: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List the trials matching the given filters
    Trials {
        /// Selected skill (repeatable); a trial needs any one of them
        #[arg(long = "skill")]
        skills: Vec<String>,

        /// Case-insensitive text to look for in title, company, description or skills
        #[arg(long, default_value = "")]
        search: String,

        /// Print the matching trials as JSON
        #[arg(long)]
        json: bool,
    },

    /// Show skills that can still be added to the filter
    Skills {
        /// Case-insensitive substring the skill must contain
        #[arg(long, default_value = "")]
        search: String,

        /// Skill already selected (repeatable)
        #[arg(long = "selected")]
        selected: Vec<String>,
    },

    /// Process a resume and work through its suggestions
    Lens {
        /// Resume file (.pdf, .doc, .docx or .txt)
        #[arg(long)]
        file: PathBuf,

        /// Suggestion id to apply (repeatable)
        #[arg(long = "apply")]
        apply: Vec<String>,

        /// Apply every suggestion
        #[arg(long)]
        apply_all: bool,

        /// Download the improved resume afterwards
        #[arg(long)]
        download: bool,

        /// Simulated processing time
        #[arg(long, default_value = "1500")]
        delay_ms: u64,

        /// Largest accepted resume, in bytes
        #[arg(long, default_value_t = app::config::DEFAULT_MAX_UPLOAD_BYTES)]
        max_bytes: u64,
    },

    /// Interactive session reading commands from stdin
    Shell {
        /// Simulated processing time
        #[arg(long, default_value = "1500")]
        delay_ms: u64,
    },

    /// Time random filter queries against the catalog
    Bench {
        /// Number of queries to run
        #[arg(long, default_value = "1000")]
        iterations: usize,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Interactive front ends keep the terminal for their own output
    let default_level = match cli.command {
        Commands::Lens { .. } | Commands::Shell { .. } => "warn",
        _ => "info",
    };
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(default_level)),
        )
        .with_writer(std::io::stderr)
        .init();

    let catalog = Arc::new(load_catalog(cli.catalog.as_deref())?);

    match cli.command {
        Commands::Trials {
            skills,
            search,
            json,
        } => handle_trials(&catalog, skills, search, json)?,
        Commands::Skills { search, selected } => handle_skills(search, selected),
        Commands::Lens {
            file,
            apply,
            apply_all,
            download,
            delay_ms,
            max_bytes,
        } => {
            let config = AppConfig::default()
                .with_processing_delay(Duration::from_millis(delay_ms))
                .with_max_upload_bytes(max_bytes);
            handle_lens(catalog, config, file, apply, apply_all, download).await?
        }
        Commands::Shell { delay_ms } => {
            let config =
                AppConfig::default().with_processing_delay(Duration::from_millis(delay_ms));
            handle_shell(catalog, config).await?
        }
        Commands::Bench { iterations } => handle_bench(&catalog, iterations)?,
    }

    Ok(())
}

fn load_catalog(path: Option<&Path>) -> Result<Catalog> {
    match path {
        Some(path) => {
            let start = Instant::now();
            let catalog = Catalog::load_from_file(path)
                .with_context(|| format!("Failed to load trial catalog from {}", path.display()))?;
            tracing::info!(
                trials = catalog.len(),
                "Loaded catalog from {} in {:?}",
                path.display(),
                start.elapsed()
            );
            Ok(catalog)
        }
        None => Ok(Catalog::builtin()),
    }
}

/// Handle the 'trials' command
fn handle_trials(
    catalog: &Arc<Catalog>,
    skills: Vec<String>,
    search: String,
    json: bool,
) -> Result<()> {
    let engine = TrialFilterEngine::new(catalog.clone());
    let state = FilterState::new()
        .with_skills(skills)
        .with_search_term(search);
    let visible = engine.visible_trials(&state)?;

    if json {
        println!(
            "{}",
            serde_json::to_string_pretty(&visible).context("Failed to serialize trials")?
        );
        return Ok(());
    }

    println!(
        "{}",
        format!("Job Trials ({} of {}):\n", visible.len(), catalog.len())
            .bold()
            .blue()
    );
    output::print_trials(&visible);
    Ok(())
}

/// Handle the 'skills' command
fn handle_skills(search: String, selected: Vec<String>) {
    let state = FilterState::new()
        .with_skills(selected)
        .with_search_term(search);
    output::print_skills(&available_skills(&SKILL_VOCABULARY, &state));
}

/// Handle the 'lens' command
async fn handle_lens(
    catalog: Arc<Catalog>,
    config: AppConfig,
    file: PathBuf,
    apply: Vec<String>,
    apply_all: bool,
    download: bool,
) -> Result<()> {
    let session = Controller::spawn(catalog, config);

    session.upload(Some(file.clone())).await?;
    println!("Analyzing {}...", file.display());
    let mut state = session.wait_until_idle().await?;

    if let LensStatus::Failed(reason) = state.lens_status() {
        session.shutdown().await?;
        bail!("Resume processing failed: {}", reason);
    }

    for id in apply {
        if state.suggestions().get(&id).is_none() {
            tracing::warn!("No suggestion with id {}", id);
            println!("{} No suggestion with id {}", "!".yellow(), id);
            continue;
        }
        state = session.dispatch(app::Action::ApplySuggestion(id)).await?;
    }
    if apply_all {
        state = session.dispatch(app::Action::ApplyAllSuggestions).await?;
    }

    output::print_lens(&state);

    if download {
        println!("{} {}", "✓".green(), session.download());
    }

    session.shutdown().await?;
    Ok(())
}

/// Handle the 'shell' command
async fn handle_shell(catalog: Arc<Catalog>, config: AppConfig) -> Result<()> {
    let session = Controller::spawn(catalog, config);
    let result = shell::run(&session).await;
    session.shutdown().await?;
    result
}

/// Handle the 'bench' command
fn handle_bench(catalog: &Arc<Catalog>, iterations: usize) -> Result<()> {
    if iterations == 0 {
        bail!("--iterations must be at least 1");
    }

    let skills = catalog.skills();
    let terms = ["", "tech", "design", "data", "acme", "product", "zzz"];

    // Random queries: up to three skills plus a search term
    let queries: Vec<FilterState> = (0..iterations)
        .map(|_| {
            let picks = rand::random::<u32>() % 4;
            let chosen: Vec<&str> = if skills.is_empty() {
                Vec::new()
            } else {
                (0..picks)
                    .map(|_| skills[rand::random::<u32>() as usize % skills.len()])
                    .collect()
            };
            let term = terms[rand::random::<u32>() as usize % terms.len()];
            FilterState::new().with_skills(chosen).with_search_term(term)
        })
        .collect();

    let engine = TrialFilterEngine::new(catalog.clone());
    let mut timings = Vec::with_capacity(iterations);
    let mut matched = 0usize;
    for query in &queries {
        let start = Instant::now();
        matched += engine.visible_trials(query)?.len();
        timings.push(start.elapsed());
    }

    let total_time: Duration = timings.iter().sum();
    let avg_latency = total_time / timings.len() as u32;
    timings.sort();
    let p50 = timings[timings.len() / 2];
    let p95 = timings[((timings.len() as f32 * 0.95) as usize).min(timings.len() - 1)];
    let p99 = timings[((timings.len() as f32 * 0.99) as usize).min(timings.len() - 1)];
    let throughput = iterations as f64 / total_time.as_secs_f64().max(f64::EPSILON);

    println!("{}", "Benchmark results:".bold().blue());
    println!("Catalog size: {} trials", catalog.len());
    println!("Queries: {}", iterations);
    println!("Average matches: {:.2}", matched as f64 / iterations as f64);
    println!("Total time: {:?}", total_time);
    println!("Average latency: {:?}", avg_latency);
    println!("P50 latency: {:?}", p50);
    println!("P95 latency: {:?}", p95);
    println!("P99 latency: {:?}", p99);
    println!("Throughput: {:.2} queries/second", throughput);

    Ok(())
}
