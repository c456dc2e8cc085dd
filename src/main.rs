use clap::Parser;
use tally::merge::{self, MergeCommand};
use tracing::{debug, error, trace};

/// Merge scattered CSV listing exports with zero configuration
#[derive(Parser)]
#[command(name = "tally")]
#[command(
    about = "Merge duplicated listing rows from CSV exports into one summary",
    long_about = None
)]
struct Cli {
    /// Enable verbose output (-v for debug, -vv for trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn main() {
    let cli = Cli::parse();

    let log_level = match cli.verbose {
        0 => "info",
        1 => "debug",
        _ => "trace",
    };

    tracing_subscriber::fmt()
        .with_env_filter(log_level)
        .with_target(cli.verbose >= 2) // Show target module for -vv and above
        .init();

    debug!("tally started with verbosity level: {}", cli.verbose);
    trace!("Full CLI args: {:?}", std::env::args().collect::<Vec<_>>());

    match merge::run(MergeCommand::default()) {
        Ok(summary) => {
            println!(
                "✅ Merged {} row(s) from {} file(s): {} distinct listing(s) written to {}",
                summary.rows,
                summary.files,
                summary.distinct,
                summary.output.display()
            );
        }
        Err(e) => {
            error!("Fatal error: {}", e);
            eprintln!("Error: {e}");
            std::process::exit(1);
        }
    }
}
