use clap::{Args, Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

#[derive(Parser)]
#[command(
    name = "techfit",
    version,
    about = "Department technology fit assessment and tool recommendation CLI"
)]
pub struct Cli {
    /// Increase verbosity (-v for info, -vv for debug)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Only log errors; reports still print to stdout
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    pub quiet: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Simulate departments, recommend tools, write the CSV report and chart
    Run(RunCommand),
    /// Show the tool catalog with averaged scores
    Catalog(CatalogCommand),
    /// Evaluate the recommendation rules for a single department
    Recommend(RecommendCommand),
}

#[derive(Args, Default)]
pub struct RunCommand {
    /// Seed for department sampling; omit for a fresh random draw
    #[arg(long)]
    pub seed: Option<u64>,
    /// Directory receiving the CSV report and chart image
    #[arg(long)]
    pub output_dir: Option<PathBuf>,
    #[arg(short, long, value_enum, default_value = "text")]
    pub format: ReportFormat,
    #[arg(long)]
    pub no_chart: bool,
}

#[derive(Args)]
pub struct CatalogCommand {
    #[arg(short, long, value_enum, default_value = "text")]
    pub format: ReportFormat,
}

#[derive(Args)]
pub struct RecommendCommand {
    /// Tool the department currently uses
    #[arg(long)]
    pub tool: String,
    /// Pain point reported by the department
    #[arg(long)]
    pub pain: String,
}

#[derive(Clone, Copy, Debug, Default, ValueEnum)]
pub enum ReportFormat {
    #[default]
    Text,
    Json,
}
