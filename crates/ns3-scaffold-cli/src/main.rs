//! create-ns3-project: scaffold the directory tree of a new ns-3 simulation project.
//!
//! The tool only writes files. It never downloads, links or builds ns-3; the
//! version given with `--ns3-version` is a label used in generated names and docs.

mod commands;
mod output;

use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use tracing_subscriber::EnvFilter;

use ns3_scaffold_core::project::DEFAULT_NS3_VERSION;

use crate::commands::create::CreateOptions;

const EXAMPLES: &str = "\
Examples:
  # Create 'my-proj' for ns-3.45 in ~/projects
  create-ns3-project --project-name my-proj --output-path ~/projects --ns3-version 3.45

  # Create 'another-proj' with the default ns-3 version in ./work
  create-ns3-project -p another-proj -o ./work

  # Show what would be created without touching the disk
  create-ns3-project -p my-proj --dry-run";

#[derive(Parser, Debug)]
#[command(
    name = "create-ns3-project",
    about = "Create a standard directory structure for an ns-3 based project",
    version,
    after_help = EXAMPLES
)]
struct Cli {
    /// Name of the new project (a directory with this name is created)
    #[arg(short = 'p', long)]
    project_name: String,

    /// Directory in which the project folder is created
    #[arg(short = 'o', long, default_value = ".")]
    output_path: PathBuf,

    /// ns-3 version label used in the generated scaffolding (e.g., 3.46)
    #[arg(short = 'v', long = "ns3-version", default_value = DEFAULT_NS3_VERSION)]
    ns3_version: String,

    /// JSON file replacing the built-in directory layout
    #[arg(long, value_name = "FILE")]
    layout: Option<PathBuf>,

    /// Print the planned tree and exit without creating anything
    #[arg(long)]
    dry_run: bool,

    /// Verbosity level (--verbose, repeat for more)
    #[arg(long, action = clap::ArgAction::Count)]
    verbose: u8,
}

impl Cli {
    fn create_options(self) -> CreateOptions {
        CreateOptions {
            project_name: self.project_name,
            output_path: self.output_path,
            ns3_version: self.ns3_version,
            layout: self.layout,
            dry_run: self.dry_run,
        }
    }
}

fn init_tracing(verbose: u8) {
    let level = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    match commands::create::run(&cli.create_options()) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            output::print_error(&format!("{e:#}"));
            ExitCode::FAILURE
        }
    }
}
