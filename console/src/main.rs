mod config;
mod input;
mod render;
mod runner;

use std::io;
use std::path::PathBuf;

use clap::Parser;
use ttt_common::games::SessionRng;
use ttt_common::games::tictactoe::FirstPlayer;
use ttt_common::{log, logger};

use config::get_config_manager;
use runner::GameRunner;

#[derive(Parser)]
#[command(name = "tictactoe", about = "Tic-tac-toe against an unbeatable minimax opponent")]
struct Args {
    /// YAML config file; defaults to tictactoe_config.yaml next to the executable
    #[arg(long)]
    config: Option<PathBuf>,

    /// Who moves first: human, computer, random or ask
    #[arg(long)]
    first: Option<FirstPlayer>,

    /// Seed for the random first-player draw
    #[arg(long)]
    seed: Option<u64>,

    #[arg(long)]
    use_log_prefix: bool,

    /// Print search diagnostics to stderr
    #[arg(long)]
    verbose: bool,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    let prefix = if args.use_log_prefix {
        Some("Console".to_string())
    } else {
        None
    };
    logger::init_logger(prefix, args.verbose);

    let config_manager = get_config_manager(args.config);
    log!(
        "Loading config from {}",
        config_manager.content_provider().path().display()
    );
    let mut config = config_manager.get_config()?;
    if let Some(first) = args.first {
        config.first_player = first;
    }

    let rng = match args.seed {
        Some(seed) => SessionRng::new(seed),
        None => SessionRng::from_random(),
    };
    log!("Session seed {}", rng.seed());

    let stdin = io::stdin();
    let stdout = io::stdout();
    GameRunner::new(stdin.lock(), stdout.lock(), config, rng).run()?;

    log!("Session finished");
    Ok(())
}
