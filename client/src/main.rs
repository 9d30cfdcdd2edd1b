mod config;
mod console;
mod controller;
mod screens;

use std::path::PathBuf;

use clap::Parser;
use common::games::SessionRng;
use common::logger::{self, LogSink};
use common::log;

use config::{FirstPlayerConfig, get_config_manager};
use console::TerminalConsole;
use controller::{ControllerSettings, GameController};

#[derive(Parser)]
#[command(name = "tictactoe", version, about = "Two-player Tic-Tac-Toe in the terminal")]
struct Args {
    /// YAML config file, defaults to tictactoe_config.yaml in the working directory
    #[arg(long)]
    config: Option<PathBuf>,

    /// Seed for the first-player coin flips
    #[arg(long)]
    seed: Option<u64>,

    /// Who moves first in every game
    #[arg(long, value_enum)]
    first_player: Option<FirstPlayerConfig>,

    /// Append log lines to this file
    #[arg(long)]
    log_file: Option<PathBuf>,

    #[arg(long)]
    use_log_prefix: bool,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    let mut config = get_config_manager(args.config).get_config()?;
    if let Some(first_player) = args.first_player {
        config.first_player = first_player;
    }

    let sink = match args.log_file.or_else(|| config.log_file.as_ref().map(PathBuf::from)) {
        Some(path) => LogSink::File(path),
        None => LogSink::Disabled,
    };
    let prefix = if args.use_log_prefix {
        Some("Client".to_string())
    } else {
        None
    };
    logger::init_logger(prefix, sink)?;

    let rng = match args.seed {
        Some(seed) => SessionRng::new(seed),
        None => SessionRng::from_random(),
    };

    let console = TerminalConsole::new(config.display.clear_screen);
    let mut controller = GameController::new(console, ControllerSettings::from(&config), rng);
    let summary = controller.run()?;

    log!(
        "Session finished: {} game(s) played, quit: {}",
        summary.games_played,
        summary.quit
    );

    Ok(())
}
