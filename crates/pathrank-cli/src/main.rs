use std::path::PathBuf;
use std::time::Instant;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::{EnvFilter, FmtSubscriber};

use pathrank_cli::commands::inspect::handle_inspect_command;
use pathrank_cli::commands::interactive::handle_interactive_command;
use pathrank_cli::commands::route::{handle_route_command, RouteCommandArgs};
use pathrank_cli::output::{print_footer, print_logo, OutputFormat};
use pathrank_lib::{EnumerationStrategy, VertexId};

#[derive(Parser, Debug)]
#[command(
    author,
    version,
    about = "Rank every simple path between two vertices of a weighted graph"
)]
struct Cli {
    /// Output format for reports.
    #[arg(long, value_enum, global = true, default_value_t = OutputFormat::Text)]
    format: OutputFormat,

    /// Suppress the banner.
    #[arg(long, global = true)]
    no_logo: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Rank all simple paths between two vertices of a matrix file.
    Route {
        /// Adjacency matrix file (text, or JSON with a .json extension).
        #[arg(long)]
        matrix: PathBuf,
        /// Starting vertex (1-based).
        #[arg(long = "from")]
        from: VertexId,
        /// Ending vertex (1-based).
        #[arg(long = "to")]
        to: VertexId,
        /// Enumeration strategy: backtracking, permutation or parallel.
        #[arg(long)]
        strategy: Option<EnumerationStrategy>,
        /// Abort the search after this many milliseconds.
        #[arg(long)]
        timeout_ms: Option<u64>,
        /// Refuse graphs with more vertices than this.
        #[arg(long)]
        max_vertices: Option<usize>,
        /// Print only the minimum-weight path.
        #[arg(long)]
        min_only: bool,
    },
    /// Validate a matrix file and summarise its graph.
    Inspect {
        /// Adjacency matrix file.
        #[arg(long)]
        matrix: PathBuf,
    },
    /// Enter graphs at the prompt and rank paths until end of input.
    Interactive,
}

fn main() -> Result<()> {
    init_tracing();
    let cli = Cli::parse();
    let started = Instant::now();
    let decorated = cli.format.is_decorated();

    if decorated && !cli.no_logo {
        print_logo();
    }

    match cli.command {
        Command::Route {
            matrix,
            from,
            to,
            strategy,
            timeout_ms,
            max_vertices,
            min_only,
        } => {
            let args = RouteCommandArgs {
                matrix,
                from,
                to,
                strategy,
                timeout_ms,
                max_vertices,
                min_only,
            };
            handle_route_command(&args, cli.format)?;
        }
        Command::Inspect { matrix } => handle_inspect_command(&matrix, cli.format)?,
        Command::Interactive => return handle_interactive_command(cli.format),
    }

    if decorated {
        print_footer(started.elapsed());
    }
    Ok(())
}

fn init_tracing() {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let subscriber = FmtSubscriber::builder()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .finish();

    let _ = tracing::subscriber::set_global_default(subscriber);
}
