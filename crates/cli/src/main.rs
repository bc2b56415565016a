// ABOUTME: CLI for batch-converting scripture sources with canon-core.
// ABOUTME: Runs USFX and structured-JSON conversions and prints per-document summaries.

use std::fs;
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use anyhow::{Context, Result};
use canon_structured::parse_structured_bytes;
use canon_usfx::{extract_translation, Translation};
use clap::{Parser, Subcommand};
use serde::Deserialize;

/// Convert scripture sources into the canon verse schema.
#[derive(Parser, Debug)]
#[command(name = "canon")]
#[command(about = "Convert scripture sources to verse-keyed JSON", long_about = None)]
struct Args {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Convert one USFX XML document.
    Usfx {
        /// Path to the USFX XML input.
        input: PathBuf,

        /// Path of the JSON output.
        #[arg(short, long)]
        output: PathBuf,

        /// Version tag stored in the output (e.g. KJV).
        #[arg(long)]
        version: String,

        /// Human-readable description stored in the output.
        #[arg(long)]
        description: String,
    },
    /// Convert one pre-structured JSON document.
    Structured {
        /// Path to the structured JSON input.
        input: PathBuf,

        /// Path of the JSON output.
        #[arg(short, long)]
        output: PathBuf,

        /// Version tag stored in the output.
        #[arg(long, default_value = "Korean")]
        version: String,

        /// Human-readable description stored in the output.
        #[arg(long, default_value = "개역성경")]
        description: String,
    },
    /// Run every conversion job listed in a JSON manifest.
    Batch {
        /// Path to a JSON array of jobs:
        /// [{"format": "usfx"|"structured", "input", "output", "version", "description"}, ...]
        manifest: PathBuf,
    },
}

/// One conversion job.
#[derive(Debug, Clone, Deserialize)]
struct Job {
    format: JobFormat,
    input: PathBuf,
    output: PathBuf,
    version: String,
    description: String,
}

#[derive(Debug, Clone, Copy, Deserialize)]
#[serde(rename_all = "lowercase")]
enum JobFormat {
    Usfx,
    Structured,
}

fn main() -> ExitCode {
    let args = Args::parse();

    let jobs = match collect_jobs(&args.command) {
        Ok(jobs) => jobs,
        Err(err) => {
            eprintln!("error: {err:#}");
            return ExitCode::from(1);
        }
    };

    let mut converted = 0usize;
    let mut complete = 0usize;
    for job in &jobs {
        match run_job(job) {
            Ok(job_complete) => {
                converted += 1;
                if job_complete {
                    complete += 1;
                }
            }
            Err(err) => {
                eprintln!("❌ {}: {err:#}", job.input.display());
            }
        }
    }

    if jobs.len() > 1 {
        println!();
        println!(
            "{}/{} converted, {} complete",
            converted,
            jobs.len(),
            complete
        );
    }

    if converted < jobs.len() {
        ExitCode::from(1)
    } else {
        ExitCode::SUCCESS
    }
}

/// Expands the invoked subcommand into a list of jobs to run.
fn collect_jobs(command: &Command) -> Result<Vec<Job>> {
    match command {
        Command::Usfx {
            input,
            output,
            version,
            description,
        } => Ok(vec![Job {
            format: JobFormat::Usfx,
            input: input.clone(),
            output: output.clone(),
            version: version.clone(),
            description: description.clone(),
        }]),
        Command::Structured {
            input,
            output,
            version,
            description,
        } => Ok(vec![Job {
            format: JobFormat::Structured,
            input: input.clone(),
            output: output.clone(),
            version: version.clone(),
            description: description.clone(),
        }]),
        Command::Batch { manifest } => {
            let data = fs::read(manifest)
                .with_context(|| format!("reading manifest {}", manifest.display()))?;
            let jobs: Vec<Job> = serde_json::from_slice(&data)
                .with_context(|| format!("parsing manifest {}", manifest.display()))?;
            Ok(jobs)
        }
    }
}

/// Converts one document and writes its output. Returns whether the result
/// cleared the completeness bar.
fn run_job(job: &Job) -> Result<bool> {
    println!("{}", job.input.display());

    let data = fs::read(&job.input).with_context(|| format!("reading {}", job.input.display()))?;
    let translation = match job.format {
        JobFormat::Usfx => {
            let xml = String::from_utf8_lossy(&data);
            extract_translation(&xml, &job.version, &job.description)?
        }
        JobFormat::Structured => parse_structured_bytes(&data, &job.version, &job.description)?,
    };

    let json = serde_json::to_string_pretty(&translation)?;
    fs::write(&job.output, json).with_context(|| format!("writing {}", job.output.display()))?;

    print_summary(&job.output, &translation);
    Ok(translation.stats().is_complete())
}

fn print_summary(output: &Path, translation: &Translation) {
    let stats = translation.stats();
    println!("  → {}", output.display());
    println!(
        "  {} verses, {} empty, {} short, {:.1} avg chars, {} books",
        stats.verses,
        stats.empty,
        stats.short,
        stats.avg_chars,
        translation.books.len()
    );
    for reference in ["GEN.1.5", "GEN.2.2", "JHN.3.16"] {
        if let Some(text) = translation.verses.get(reference) {
            println!("  {} {}", reference, preview(text));
        }
    }
    println!(
        "  {}",
        if stats.is_complete() {
            "✅ complete"
        } else {
            "❌ incomplete"
        }
    );
}

/// First 70 characters of a verse for the summary line.
fn preview(text: &str) -> String {
    const MAX_CHARS: usize = 70;
    if text.chars().count() > MAX_CHARS {
        let cut: String = text.chars().take(MAX_CHARS).collect();
        format!("{cut}...")
    } else {
        text.to_string()
    }
}
