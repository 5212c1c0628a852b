mod commands;

use clap::{ArgAction, Parser, Subcommand};
use colored::*;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

#[derive(Parser)]
#[command(name = "framelink")]
#[command(about = "Framelink - MTU-bounded framing over a line-oriented link", long_about = None)]
#[command(version)]
struct Cli {
    /// Enable diagnostic traces (use --debug=false for raw frames only)
    #[arg(short = 'd', long, global = true, default_value_t = true, action = ArgAction::Set)]
    debug: bool,

    /// Line that signals end of input
    #[arg(long, global = true, default_value = ".")]
    stop: String,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Read messages from stdin, one per line, and emit frames to stdout
    Send {
        /// Maximum transfer unit (frame length limit)
        #[arg(short, long, default_value = "12")]
        mtu: usize,
    },

    /// Read frames from stdin, one per line, and print reassembled messages
    Recv {
        /// Maximum transfer unit (frame length limit)
        #[arg(short, long, default_value = "20")]
        mtu: usize,
    },
}

fn main() {
    let cli = Cli::parse();

    // Setup logging; traces go to stderr so stdout stays a clean frame stream
    let filter = if cli.debug {
        EnvFilter::new("debug")
    } else {
        EnvFilter::new("info")
    };

    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(filter)
        .init();

    // Execute command
    let result = match cli.command {
        Commands::Send { mtu } => commands::send::execute(mtu, &cli.stop, cli.debug),
        Commands::Recv { mtu } => commands::recv::execute(mtu, &cli.stop, cli.debug),
    };

    if let Err(e) = result {
        eprintln!("{} {e:#}", "✗".red());
        std::process::exit(1);
    }
}
