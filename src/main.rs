//! CLI entry point for filelister

use std::path::{Path, PathBuf};
use std::process;

use clap::{CommandFactory, Parser, Subcommand};
use filelister::{
    OutputConfig, OutputFormat, Scan, ScanConfig, ScanStats, TreeBuilder, print_error, print_stats,
    print_tree,
};
use tracing::debug;

const TOOL: &str = "filelister";

#[derive(Parser, Debug)]
#[command(name = "filelister")]
#[command(about = "filelister will list files in a file system.")]
#[command(version)]
#[command(disable_help_subcommand = true)]
struct Args {
    /// Path to folder, required
    #[arg(short, long, value_name = "PATH")]
    path: Option<PathBuf>,

    /// List files recursively (default is off)
    #[arg(short, long)]
    recursive: bool,

    /// Output format
    #[arg(short, long, value_enum, default_value_t = OutputFormat::Text)]
    output: OutputFormat,

    /// Use color coding in text output if the terminal supports it
    #[arg(short, long)]
    color: bool,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Print help
    #[command(visible_alias = "h")]
    Help,
}

fn init_tracing() {
    // Recoverable scan errors are already reported on stderr, so only
    // surface tracing output when asked for through RUST_LOG.
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("error")),
        )
        .init();
}

fn main() {
    init_tracing();
    let args = Args::parse();

    if let Some(Command::Help) = args.command {
        if let Err(e) = Args::command().print_help() {
            eprintln!("{}: error writing help: {}", TOOL, e);
            process::exit(1);
        }
        return;
    }

    let Some(path) = args.path.as_deref() else {
        eprintln!("Path is required");
        process::exit(1);
    };

    let output_config = OutputConfig {
        use_color: args.color,
    };

    eprintln!("Reading files from {}", path.display());
    let stats = run(path, &args, &output_config);

    if let Err(e) = print_stats(&stats) {
        eprintln!("{}: error writing output: {}", TOOL, e);
        process::exit(1);
    }
}

/// Scan, report recoverable errors and render. Every failure is reported
/// here; the caller always goes on to print the closing statistics.
fn run(path: &Path, args: &Args, output_config: &OutputConfig) -> ScanStats {
    let builder = TreeBuilder::new(ScanConfig {
        recursive: args.recursive,
    });

    let Scan { root, stats } = match builder.build(path) {
        Ok(scan) => scan,
        Err(e) => {
            print_error(TOOL, &e, output_config.use_color);
            return ScanStats::new();
        }
    };

    debug!(
        nodes = root.descendant_count(),
        errors = stats.errors.len(),
        "scan complete"
    );
    for err in &stats.errors {
        print_error(TOOL, err, output_config.use_color);
    }

    if let Err(e) = print_tree(&root, args.output, output_config) {
        print_error(TOOL, &e, output_config.use_color);
    }

    stats
}
