// crates/qvarint-cli/src/main.rs

use std::io::IsTerminal;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

mod cmd;
mod io;

#[derive(Parser)]
#[command(name = "qvarint-cli")]
#[command(about = "62-bit varint encode/decode tools", long_about = None)]
pub struct Cli {
    /// Log filter (overrides RUST_LOG), e.g. "qvarint_cli=debug"
    #[arg(long, global = true)]
    pub log_level: Option<String>,

    #[command(subcommand)]
    pub cmd: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Encode decimal values (one per line) into a varint stream
    Encode(cmd::encode::EncodeArgs),

    /// Decode a varint stream back to decimal values
    Decode(cmd::decode::DecodeArgs),

    /// Print encoded length and bytes for each value
    Len(cmd::len::LenArgs),

    /// Walk a varint stream and report offset/tag/length per value
    Inspect(cmd::inspect::InspectArgs),
}

fn init_logging(level: Option<&str>) {
    let filter = match level {
        Some(l) => EnvFilter::new(l),
        None => EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| EnvFilter::new("qvarint_cli=info")),
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_ansi(std::io::stderr().is_terminal())
        .with_target(false)
        .init();
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_logging(cli.log_level.as_deref());

    match cli.cmd {
        Commands::Encode(args) => cmd::encode::run(args),
        Commands::Decode(args) => cmd::decode::run(args),
        Commands::Len(args) => cmd::len::run(args),
        Commands::Inspect(args) => cmd::inspect::run(args),
    }
}
