use std::path::PathBuf;

use antsweep::{App, Report, init_logging, load_labels};
use antsweep_core::BenchmarkSpec;
use antsweep_core::benchmark::{DEFAULT_CAPACITY, DEFAULT_ITEM_COUNT, write_instance_file};
use clap::{Parser, Subcommand};
use color_eyre::eyre::WrapErr;

#[derive(Parser, Debug)]
#[command(name = "antsweep")]
#[command(about = "Charts for ant-colony optimizer parameter sweeps")]
struct Args {
    /// Directory containing the optimizer's `csv/` results folder
    #[arg(short, long, default_value = ".", global = true)]
    data_dir: PathBuf,

    /// YAML file overriding the summary chart's configuration labels
    #[arg(long, global = true)]
    labels: Option<PathBuf>,

    /// Log level (debug, info, warn, error)
    #[arg(short, long, default_value = "info", global = true)]
    log_level: String,

    /// Directory for the log file (default: ~/.antsweep/)
    #[arg(long, global = true)]
    log_dir: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Show the trend and summary figures (default)
    View,
    /// Print the cross-parameter summary as a table
    Summary,
    /// Generate a knapsack benchmark instance for the optimizer
    Generate {
        /// Number of bags
        #[arg(short = 'n', long, default_value_t = DEFAULT_ITEM_COUNT)]
        items: usize,

        /// Security van capacity
        #[arg(short, long, default_value_t = DEFAULT_CAPACITY)]
        capacity: u32,

        /// Seed for a reproducible instance
        #[arg(short, long)]
        seed: Option<u64>,

        /// Output file (default: problem<items>.txt)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
}

fn default_log_dir() -> PathBuf {
    dirs::home_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(".antsweep")
}

fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;

    let args = Args::parse();
    let log_dir = args.log_dir.clone().unwrap_or_else(default_log_dir);
    init_logging(&log_dir, &args.log_level)?;

    match args.command.unwrap_or(Command::View) {
        Command::View => {
            let report = build_report(&args.data_dir, args.labels.as_deref())?;
            let mut app = App::new(report, args.data_dir);

            ratatui::run(|terminal| app.run(terminal))?;
            tracing::info!("Viewer closed");
        }
        Command::Summary => {
            let report = build_report(&args.data_dir, args.labels.as_deref())?;
            print!("{}", report.summary_table());
        }
        Command::Generate {
            items,
            capacity,
            seed,
            output,
        } => {
            let spec = BenchmarkSpec {
                capacity,
                item_count: items,
            };
            let path = output.unwrap_or_else(|| PathBuf::from(spec.default_file_name()));
            write_instance_file(&path, &spec, seed)
                .wrap_err_with(|| format!("failed to write benchmark to {}", path.display()))?;
            println!("Wrote {} bags to {}", items, path.display());
        }
    }

    Ok(())
}

/// Everything that can fail happens here, before the terminal enters raw mode.
fn build_report(
    data_dir: &std::path::Path,
    labels: Option<&std::path::Path>,
) -> color_eyre::Result<Report> {
    let labels = load_labels(labels)?;
    Report::load(data_dir, &labels)
        .wrap_err_with(|| format!("failed to build report from {}", data_dir.display()))
}
