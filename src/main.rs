//! Clarity: Content Quality Analyzer CLI

use anyhow::{Context, Result};
use clap::Parser;
use clarity::ai::AiClient;
use clarity::analyzer::{AnalysisEngine, AnalysisRequest, EngineOptions};
use clarity::config::load_config;
use clarity::reporter::{ConsoleReporter, JsonReporter, TextReporter};
use colored::Colorize;
use std::io::Read;
use std::path::{Path, PathBuf};
use std::process::ExitCode;

/// Clarity: Content Quality Analyzer for Markdown and plain text
#[derive(Parser, Debug)]
#[command(name = "clarity")]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Content file to analyze (omit or use "-" to read stdin)
    path: Option<PathBuf>,

    /// Target keyword carried through to the results
    #[arg(long, short)]
    keyword: Option<String>,

    /// Output as JSON
    #[arg(long, short)]
    json: bool,

    /// Pretty-print JSON output
    #[arg(long, requires = "json")]
    pretty: bool,

    /// Output as a plain-text report
    #[arg(long, conflicts_with = "json")]
    report: bool,

    /// Extended mode: engagement dimension plus projection sections
    #[arg(long, short)]
    extended: bool,

    /// Minimum overall score threshold (exit 1 if below)
    #[arg(long, short)]
    threshold: Option<u8>,

    /// API key for the AI-assisted analyzers
    /// (default: CLARITY_API_KEY or OPENAI_API_KEY)
    #[arg(long)]
    api_key: Option<String>,

    /// Completion model override
    #[arg(long)]
    model: Option<String>,

    /// Completions endpoint override
    #[arg(long)]
    base_url: Option<String>,

    /// Skip the external AI calls; SERP and Differentiation degrade
    #[arg(long)]
    no_ai: bool,

    /// Quiet mode (print the overall score only)
    #[arg(long, short)]
    quiet: bool,

    /// Disable colored output
    #[arg(long)]
    no_color: bool,

    /// Show per-dimension metrics in console output
    #[arg(long, short)]
    verbose: bool,

    /// Path to config file (default: search .clarityrc.json in current dir and parents)
    #[arg(long)]
    config: Option<PathBuf>,
}

fn main() -> ExitCode {
    match run() {
        Ok(code) => code,
        Err(e) => {
            eprintln!("{} {:#}", "error:".red().bold(), e);
            ExitCode::FAILURE
        }
    }
}

fn run() -> Result<ExitCode> {
    let args = Args::parse();

    let work_dir = std::env::current_dir().context("Cannot determine working directory")?;
    let config = load_config(&work_dir, args.config.as_deref())?;

    let content = read_content(args.path.as_deref())?;

    // Resolve the credential once, here, and pass it down explicitly.
    let api_key = args
        .api_key
        .clone()
        .or_else(|| config.api_key.clone())
        .or_else(|| std::env::var("CLARITY_API_KEY").ok())
        .or_else(|| std::env::var("OPENAI_API_KEY").ok());

    let client = if args.no_ai {
        None
    } else {
        api_key.map(|key| {
            let mut client = AiClient::new(key);
            if let Some(model) = args.model.as_deref().or(config.model.as_deref()) {
                client = client.model(model);
            }
            if let Some(base_url) = args.base_url.as_deref().or(config.base_url.as_deref()) {
                client = client.base_url(base_url);
            }
            client
        })
    };

    let engine = AnalysisEngine::new(EngineOptions {
        client,
        extended: args.extended || config.extended,
        degrade_without_ai: args.no_ai,
    });

    let mut request = AnalysisRequest::new(content);
    if let Some(keyword) = args.keyword.clone() {
        request = request.with_keyword(keyword);
    }

    let results = engine.analyze(&request)?;

    if args.json {
        let reporter = if args.pretty {
            JsonReporter::new().pretty()
        } else {
            JsonReporter::new()
        };
        println!("{}", reporter.report(&results));
    } else if args.report {
        print!("{}", TextReporter::new().report(&results));
    } else {
        let mut reporter = ConsoleReporter::new();
        if args.no_color {
            reporter = reporter.without_colors();
        }
        if args.verbose {
            reporter = reporter.verbose();
        }
        if args.quiet {
            reporter.report_quiet(&results);
        } else {
            reporter.report(&results);
        }
    }

    let threshold = args.threshold.or(config.threshold);
    if let Some(threshold) = threshold {
        let overall = results.overall_score();
        if overall < threshold {
            if !args.quiet {
                eprintln!(
                    "Overall score {} is below the threshold of {}",
                    overall, threshold
                );
            }
            return Ok(ExitCode::FAILURE);
        }
    }

    Ok(ExitCode::SUCCESS)
}

fn read_content(path: Option<&Path>) -> Result<String> {
    match path {
        Some(p) if p != Path::new("-") => std::fs::read_to_string(p)
            .with_context(|| format!("Failed to read content file: {}", p.display())),
        _ => {
            let mut content = String::new();
            std::io::stdin()
                .read_to_string(&mut content)
                .context("Failed to read content from stdin")?;
            Ok(content)
        }
    }
}
