use std::path::PathBuf;

use clap::Parser;
use version_board::config::{DEFAULT_CONFIG_FILE, DEFAULT_LISTEN_ADDR, log_path};
use version_board::logging;
use version_board::server::{ServerOptions, run_server};

#[derive(Parser)]
#[command(name = "version-board")]
#[command(version, about = "Status board comparing deployed tool versions with their latest releases")]
struct Cli {
    /// Path to the JSON config file
    #[arg(short, long, default_value = DEFAULT_CONFIG_FILE)]
    config: PathBuf,

    /// Address to serve the status board on
    #[arg(short, long, default_value = DEFAULT_LISTEN_ADDR)]
    listen: String,

    /// Write logs to this file instead of stderr
    #[arg(long)]
    log_file: Option<PathBuf>,

    /// Write logs to version-board.log in the data directory
    #[arg(long, conflicts_with = "log_file")]
    log_to_data_dir: bool,

    /// Emit logs as JSON lines
    #[arg(long)]
    json_logs: bool,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let log_file = match (cli.log_file, cli.log_to_data_dir) {
        (Some(path), _) => Some(path),
        (None, true) => Some(log_path()),
        (None, false) => None,
    };
    let _guard = logging::init(log_file.as_deref(), cli.json_logs)?;

    tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .build()?
        .block_on(run_server(ServerOptions {
            config_path: cli.config,
            listen: cli.listen,
        }))
}
