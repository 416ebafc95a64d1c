mod catalog;
mod chart;
mod cli;
mod config;
mod error;
mod recommend;
mod report;
mod sample;
mod types;

use crate::catalog::{RecommendationTable, TOOL_CATALOG};
use crate::error::TechfitError;
use crate::recommend::RuleEngine;
use crate::types::config::RunSettings;
use crate::types::report::AssessmentReport;
use crate::types::scoring::format_score;
use clap::Parser;
use std::path::Path;
use tracing_subscriber::EnvFilter;

pub mod exit_code {
    pub const SUCCESS: i32 = 0;
    pub const RUNTIME_FAILURE: i32 = 3;
}

fn init_tracing(verbose: u8, quiet: bool) {
    let default_level = if quiet {
        "error"
    } else {
        match verbose {
            0 => "warn",
            1 => "info",
            _ => "debug",
        }
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn output_format(format: cli::ReportFormat) -> report::OutputFormat {
    match format {
        cli::ReportFormat::Text => report::OutputFormat::Text,
        cli::ReportFormat::Json => report::OutputFormat::Json,
    }
}

fn resolve_settings(cmd: &cli::RunCommand) -> Result<RunSettings, TechfitError> {
    let loaded = config::load_config(Path::new("."))?;
    let mut settings = loaded.run_settings();
    if cmd.seed.is_some() {
        settings.seed = cmd.seed;
    }
    if let Some(dir) = &cmd.output_dir {
        settings.output_dir = dir.clone();
    }
    if cmd.no_chart {
        settings.chart.enabled = false;
    }
    Ok(settings)
}

fn run_pipeline(cmd: &cli::RunCommand) -> Result<i32, TechfitError> {
    let settings = resolve_settings(cmd)?;
    tracing::info!(seed = ?settings.seed, dir = %settings.output_dir.display(), "starting assessment");

    let mut rng = sample::rng_from_seed(settings.seed);
    let sampled = sample::generate(&mut rng);
    let engine = RuleEngine::new(&RecommendationTable::default())?;
    let records = engine.assess(&sampled);

    let assessment = AssessmentReport::new(settings.seed, records);
    let format = output_format(cmd.format);
    let rendered = report::render(&assessment, format)?;
    println!("{rendered}");

    let csv_path = settings.csv_path();
    report::csv::write_csv(&csv_path, &assessment.departments)?;
    if matches!(format, report::OutputFormat::Text) {
        println!("📁 Report saved as {}", csv_path.display());
    }

    if settings.chart.enabled {
        let chart_path = settings.chart_path();
        chart::render_distribution(&assessment.departments, &chart_path, &settings.chart)?;
        if matches!(format, report::OutputFormat::Text) {
            println!("📊 Bar chart saved as {}", chart_path.display());
        }
    } else {
        tracing::info!("chart rendering disabled");
    }

    Ok(exit_code::SUCCESS)
}

fn run() -> Result<i32, TechfitError> {
    let cli = cli::Cli::parse();
    init_tracing(cli.verbose, cli.quiet);

    match cli.command.unwrap_or_else(|| cli::Commands::Run(cli::RunCommand::default())) {
        cli::Commands::Run(cmd) => run_pipeline(&cmd),
        cli::Commands::Catalog(cmd) => {
            let entries = catalog::describe(&TOOL_CATALOG);
            let rendered = report::render_catalog(&entries, output_format(cmd.format))?;
            println!("{rendered}");
            Ok(exit_code::SUCCESS)
        }
        cli::Commands::Recommend(cmd) => {
            let engine = RuleEngine::new(&RecommendationTable::default())?;
            let recommendation = engine.recommend(&cmd.tool, &cmd.pain);
            println!(
                "{} (Score: {}/10)",
                recommendation.tool,
                format_score(recommendation.score)
            );
            println!("rule: {}", recommendation.rationale);
            Ok(exit_code::SUCCESS)
        }
    }
}

fn main() {
    match run() {
        Ok(code) => {
            if code != 0 {
                std::process::exit(code);
            }
        }
        Err(e) => {
            eprintln!("error: {}", e);
            std::process::exit(exit_code::RUNTIME_FAILURE);
        }
    }
}
