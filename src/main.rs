// PlacePrep - main.rs
//
// Application entry point. Handles:
// 1. CLI argument parsing
// 2. config.toml loading and logging initialisation (debug mode support)
// 3. Dispatch of the analyze / history / show / mark / export / clear commands
//    against the file-backed history store

pub use placeprep::app;
pub use placeprep::core;
pub use placeprep::platform;
pub use placeprep::util;

use clap::{Parser, Subcommand, ValueEnum};
use placeprep::app::history::HistoryStore;
use placeprep::core::model::{Analysis, Confidence};
use placeprep::platform::fs::FileBackend;
use placeprep::util::error::{PrepError, Result};
use std::io::{BufWriter, Read, Write};
use std::path::{Path, PathBuf};
use std::process::ExitCode;

/// Placement readiness planner: analyse job descriptions and track prep.
#[derive(Parser, Debug)]
#[command(name = "placeprep", version, about)]
struct Cli {
    #[command(subcommand)]
    command: Command,

    /// Directory holding the saved history (overrides config and platform default).
    #[arg(long = "data-dir", global = true)]
    data_dir: Option<PathBuf>,

    /// Enable debug logging (equivalent to RUST_LOG=debug).
    #[arg(short = 'd', long = "debug", global = true)]
    debug: bool,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Analyse a job description and save the result.
    Analyze {
        #[arg(short, long, default_value = "")]
        company: String,

        #[arg(short, long, default_value = "")]
        role: String,

        /// Job description text. Reads stdin when neither --jd nor --jd-file is given.
        #[arg(long, conflicts_with = "jd_file")]
        jd: Option<String>,

        /// Read the job description from a file.
        #[arg(long = "jd-file")]
        jd_file: Option<PathBuf>,
    },

    /// List saved analyses, newest first.
    History,

    /// Print the full report for one analysis.
    Show { id: String },

    /// Mark a detected skill as known or needing practice, or clear the mark.
    Mark {
        id: String,
        skill: String,
        /// One of: know, practice, clear.
        state: String,
    },

    /// Export one analysis.
    Export {
        id: String,

        #[arg(short, long, value_enum, default_value_t = ExportFormat::Text)]
        format: ExportFormat,

        /// Write to this file instead of stdout.
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Delete the whole history.
    Clear {
        /// Confirm deletion.
        #[arg(long)]
        yes: bool,
    },
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
enum ExportFormat {
    Text,
    Json,
    Csv,
}

/// Exit code for user errors that are not failures (unknown id, missing flag).
const EXIT_USAGE: u8 = 2;

fn main() -> ExitCode {
    let cli = Cli::parse();

    let platform_paths = platform::config::PlatformPaths::resolve();
    let (config, config_warnings) = platform::config::load_config(&platform_paths.config_dir);

    util::logging::init(
        cli.debug,
        config.log_level.as_deref(),
        config.log_file.as_deref(),
    );

    tracing::info!(
        version = util::constants::APP_VERSION,
        debug = cli.debug,
        "PlacePrep starting"
    );
    for warning in &config_warnings {
        tracing::warn!(warning = %warning, "Config warning");
        eprintln!("Warning: {warning}");
    }

    // Data directory: CLI override > config.toml > platform default
    let data_dir = cli
        .data_dir
        .clone()
        .or_else(|| config.data_dir.clone())
        .unwrap_or_else(|| platform_paths.data_dir.clone());
    tracing::debug!(data_dir = %data_dir.display(), "Using data directory");

    let store = HistoryStore::new(FileBackend::new(data_dir));

    match run(cli.command, store, config.short_jd_warning_chars) {
        Ok(code) => code,
        Err(e) => {
            tracing::error!(error = %e, "Command failed");
            eprintln!("Error: {e}");
            ExitCode::FAILURE
        }
    }
}

fn run(
    command: Command,
    mut store: HistoryStore<FileBackend>,
    short_jd_chars: usize,
) -> Result<ExitCode> {
    match command {
        Command::Analyze {
            company,
            role,
            jd,
            jd_file,
        } => {
            let job_text = read_job_text(jd, jd_file.as_deref())?;
            for warning in crate::core::analyzer::input_warnings(&job_text, short_jd_chars) {
                eprintln!("Warning: {warning}");
            }
            let analysis = crate::core::analyzer::analyze(&company, &role, &job_text)?;
            store.create(analysis.clone())?;
            print_summary(&analysis);
            Ok(ExitCode::SUCCESS)
        }

        Command::History => {
            let analyses = store.list();
            if analyses.is_empty() {
                println!("No saved analyses.");
            }
            for a in &analyses {
                println!(
                    "{:<18} {}  {:>3}/100  {} / {}",
                    a.id,
                    a.created_at.format("%Y-%m-%d %H:%M"),
                    a.final_score,
                    blank_as_dash(&a.company),
                    blank_as_dash(&a.role),
                );
            }
            Ok(ExitCode::SUCCESS)
        }

        Command::Show { id } => {
            let Some(analysis) = store.get_by_id(&id) else {
                return Ok(not_found(&id));
            };
            let stdout = std::io::stdout();
            crate::core::export::export_text(&analysis, stdout.lock(), Path::new("<stdout>"))?;
            Ok(ExitCode::SUCCESS)
        }

        Command::Mark { id, skill, state } => {
            let skill = skill.trim();
            let confidence = if state.eq_ignore_ascii_case("clear") {
                None
            } else {
                match state.parse::<Confidence>() {
                    Ok(c) => Some(c),
                    Err(msg) => {
                        eprintln!("Error: {msg}, or 'clear'");
                        return Ok(ExitCode::from(EXIT_USAGE));
                    }
                }
            };

            let Some(existing) = store.get_by_id(&id) else {
                return Ok(not_found(&id));
            };
            if !existing.has_skill(skill) {
                let skills: Vec<&str> = existing.all_skills().collect();
                eprintln!(
                    "Error: '{skill}' is not a detected skill of {id}. Detected: {}",
                    skills.join(", ")
                );
                return Ok(ExitCode::from(EXIT_USAGE));
            }

            match store.set_skill_confidence(&id, skill, confidence)? {
                Some(updated) => {
                    println!(
                        "Readiness for {id}: {}/100 (base {})",
                        updated.final_score, updated.base_score
                    );
                    Ok(ExitCode::SUCCESS)
                }
                None => Ok(not_found(&id)),
            }
        }

        Command::Export { id, format, output } => {
            let Some(analysis) = store.get_by_id(&id) else {
                return Ok(not_found(&id));
            };
            export(&analysis, format, output.as_deref())?;
            Ok(ExitCode::SUCCESS)
        }

        Command::Clear { yes } => {
            if !yes {
                eprintln!("Refusing to delete the history without --yes.");
                return Ok(ExitCode::from(EXIT_USAGE));
            }
            store.clear_all()?;
            println!("History cleared.");
            Ok(ExitCode::SUCCESS)
        }
    }
}

/// Job description source: --jd > --jd-file > stdin.
fn read_job_text(jd: Option<String>, jd_file: Option<&Path>) -> Result<String> {
    if let Some(text) = jd {
        return Ok(text);
    }
    if let Some(path) = jd_file {
        return std::fs::read_to_string(path).map_err(|e| PrepError::Io {
            path: path.to_path_buf(),
            operation: "read job description",
            source: e,
        });
    }
    let mut text = String::new();
    std::io::stdin()
        .read_to_string(&mut text)
        .map_err(|e| PrepError::Io {
            path: PathBuf::from("<stdin>"),
            operation: "read job description",
            source: e,
        })?;
    Ok(text)
}

fn export(analysis: &Analysis, format: ExportFormat, output: Option<&Path>) -> Result<()> {
    let path = output.map_or_else(|| PathBuf::from("<stdout>"), Path::to_path_buf);
    let writer: Box<dyn Write> = match output {
        Some(out) => Box::new(std::fs::File::create(out).map_err(|e| PrepError::Io {
            path: out.to_path_buf(),
            operation: "create export file",
            source: e,
        })?),
        None => Box::new(std::io::stdout().lock()),
    };
    let writer = BufWriter::new(writer);

    match format {
        ExportFormat::Text => crate::core::export::export_text(analysis, writer, &path)?,
        ExportFormat::Json => crate::core::export::export_json(analysis, writer, &path)?,
        ExportFormat::Csv => {
            let rows = crate::core::export::export_plan_csv(analysis, writer, &path)?;
            tracing::debug!(rows, "Plan CSV written");
        }
    }

    if output.is_some() {
        tracing::info!(id = %analysis.id, path = %path.display(), ?format, "Analysis exported");
        eprintln!("Exported to {}", path.display());
    }
    Ok(())
}

fn print_summary(analysis: &Analysis) {
    println!("Saved analysis {}", analysis.id);
    println!(
        "Readiness: {}/100  ({} {})",
        analysis.final_score,
        analysis.company_intel.category,
        blank_as_dash(&analysis.company)
    );
    for (category, skills) in analysis.extracted_skills.iter() {
        println!("  {:<14} {}", category.label(), skills.join(", "));
    }
    println!(
        "{} rounds, {}-day plan, {} questions. Run `placeprep show {}` for the full report.",
        analysis.round_count(),
        analysis.plan.len(),
        analysis.questions.len(),
        analysis.id
    );
}

fn not_found(id: &str) -> ExitCode {
    eprintln!("No saved analysis with id '{id}'. Run `placeprep history` to list ids.");
    ExitCode::from(EXIT_USAGE)
}

fn blank_as_dash(s: &str) -> &str {
    let trimmed = s.trim();
    if trimmed.is_empty() {
        "-"
    } else {
        trimmed
    }
}
