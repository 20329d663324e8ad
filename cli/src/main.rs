//! benchdiff CLI - benchstat report post-processing tool

use std::path::{Path, PathBuf};

use clap::{Parser, Subcommand};
use colored::Colorize;

use benchdiff::data::{self, CommitInfo, HistoryOptions};
use benchdiff::{BenchDiff, RealignOutcome, RealignStats, DEFAULT_REPORT};

const REPORT_ENV: &str = "BENCHDIFF_REPORT";

#[derive(Parser)]
#[command(name = "benchdiff")]
#[command(author = "iyulab")]
#[command(version)]
#[command(about = "Realign benchstat comparison reports and manage benchmark data", long_about = None)]
struct Cli {
    /// Comparison report to realign when no subcommand is given
    #[arg(value_name = "FILE")]
    input: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Realign the Diff column of a comparison report in place
    Realign {
        /// Comparison report
        #[arg(value_name = "FILE", env = REPORT_ENV, default_value = DEFAULT_REPORT)]
        file: PathBuf,

        /// Spaces between the widest row and the Diff column
        #[arg(long, default_value_t = benchdiff::render::DEFAULT_COLUMN_PADDING)]
        padding: usize,

        /// Width reserved for the Diff column
        #[arg(long, default_value_t = benchdiff::render::DEFAULT_ANNOTATION_WIDTH)]
        annotation_width: usize,

        /// Percent change flagged as regression or improvement
        #[arg(long, env = "BENCHDIFF_THRESHOLD", default_value_t = benchdiff::render::DEFAULT_THRESHOLD)]
        threshold: f64,
    },

    /// Convert `go test -bench` output to dashboard JSON
    Format {
        /// Raw benchmark output
        #[arg(value_name = "INPUT")]
        input: PathBuf,

        /// JSON file to write
        #[arg(value_name = "OUTPUT")]
        output: PathBuf,
    },

    /// Merge benchmark JSON files into one
    Merge {
        /// JSON file to write
        #[arg(value_name = "OUTPUT")]
        output: PathBuf,

        /// JSON files or glob patterns to merge, in order
        #[arg(value_name = "INPUTS")]
        inputs: Vec<PathBuf>,
    },

    /// Append a benchmark run to the data.js history
    History {
        /// Merged benchmark JSON
        #[arg(value_name = "BENCH_JSON")]
        bench_json: PathBuf,

        /// History script to update
        #[arg(value_name = "DATA_JS")]
        data_js: PathBuf,

        /// Group the run is appended to
        #[arg(long, default_value = data::DEFAULT_GROUP)]
        group: String,

        /// Tool name recorded on the run
        #[arg(long, default_value = data::DEFAULT_TOOL)]
        tool: String,

        /// Repository URL for a new history file
        #[arg(long, default_value = data::DEFAULT_REPO_URL)]
        repo_url: String,
    },

    /// Show version information
    Version,
}

fn main() {
    env_logger::init();

    let cli = Cli::parse();

    let result = match cli.command {
        Some(Commands::Realign {
            file,
            padding,
            annotation_width,
            threshold,
        }) => cmd_realign(&file, padding, annotation_width, threshold),
        Some(Commands::Format { input, output }) => cmd_format(&input, &output),
        Some(Commands::Merge { output, inputs }) => cmd_merge(&output, &inputs),
        Some(Commands::History {
            bench_json,
            data_js,
            group,
            tool,
            repo_url,
        }) => {
            let options = HistoryOptions::new()
                .with_group(group)
                .with_tool(tool)
                .with_repo_url(repo_url);
            cmd_history(&bench_json, &data_js, &options)
        }
        Some(Commands::Version) => {
            cmd_version();
            Ok(())
        }
        None => {
            // Default behavior: realign the report with default settings
            let file = cli.input.unwrap_or_else(default_report);
            cmd_realign(
                &file,
                benchdiff::render::DEFAULT_COLUMN_PADDING,
                benchdiff::render::DEFAULT_ANNOTATION_WIDTH,
                benchdiff::render::DEFAULT_THRESHOLD,
            )
        }
    };

    if let Err(e) = result {
        eprintln!("{}: {}", "Error".red().bold(), e);
        std::process::exit(1);
    }
}

fn cmd_realign(
    file: &Path,
    padding: usize,
    annotation_width: usize,
    threshold: f64,
) -> Result<(), Box<dyn std::error::Error>> {
    log::debug!("Realigning {} with threshold {}%", file.display(), threshold);
    let outcome = BenchDiff::new()
        .with_column_padding(padding)
        .with_annotation_width(annotation_width)
        .with_threshold(threshold)
        .realign_file(file)?;

    match outcome {
        RealignOutcome::Skipped => {
            println!("{} not found, skipping post-processing.", display_name(file));
        }
        RealignOutcome::Rewritten(stats) => print_stats(file, &stats),
    }

    Ok(())
}

/// Report path from `BENCHDIFF_REPORT`, else the default name.
fn default_report() -> PathBuf {
    std::env::var_os(REPORT_ENV)
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from(DEFAULT_REPORT))
}

/// File name as given, falling back to the full path.
fn display_name(path: &Path) -> String {
    path.file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string())
}

fn print_stats(file: &Path, stats: &RealignStats) {
    println!("{} {}", "Realigned".green(), file.display());
    println!(
        "  {} Diff column at {}",
        "├─".dimmed(),
        stats.alignment.diff_column_start
    );
    println!(
        "  {} {} rows recomputed, {} zero pairs, {} geomean n/a",
        "├─".dimmed(),
        stats.recomputed,
        stats.zero_pairs,
        stats.geomean_undefined
    );
    println!(
        "  {} {} carried, {} malformed, {} unchanged",
        "└─".dimmed(),
        stats.carried,
        stats.malformed,
        stats.passed_through
    );
}

fn cmd_format(input: &Path, output: &Path) -> Result<(), Box<dyn std::error::Error>> {
    let report = data::format_file(input, output, CommitInfo::from_env())?;

    println!(
        "{} {} benchmarks to {}",
        "Formatted".green(),
        report.benches.len(),
        output.display()
    );
    Ok(())
}

fn cmd_merge(output: &Path, inputs: &[PathBuf]) -> Result<(), Box<dyn std::error::Error>> {
    match data::merge_files(output, inputs)? {
        Some(count) => println!(
            "{} {} benchmarks into {}",
            "Merged".green(),
            count,
            output.display()
        ),
        None => println!("{}", "No input files matched, nothing to merge".yellow()),
    }
    Ok(())
}

fn cmd_history(
    bench_json: &Path,
    data_js: &Path,
    options: &HistoryOptions,
) -> Result<(), Box<dyn std::error::Error>> {
    let count = data::update_history(bench_json, data_js, options)?;

    println!(
        "{} {} with {} benchmarks.",
        "Updated".green(),
        data_js.display(),
        count
    );
    Ok(())
}

fn cmd_version() {
    println!("{} {}", "benchdiff".cyan().bold(), env!("CARGO_PKG_VERSION"));
    println!("benchstat report post-processing tool");
    println!();
    println!("License: MIT");
}
