mod app;
mod config;
mod input;
mod renderer;

use std::path::PathBuf;

use clap::Parser;
use common::config::Validate;
use common::games::SessionRng;
use common::games::tictactoe::{BotType, Mark, TicTacToeSession};
use common::{log, logger};

use config::get_config_manager;
use renderer::TerminalRenderer;

#[derive(Parser)]
#[command(name = "tictactoe_client", about = "Play tic-tac-toe against the computer")]
struct Args {
    /// Config file; defaults to tictactoe_client_config.yaml next to the executable
    #[arg(long)]
    config: Option<PathBuf>,
    /// Computer opponent: minimax or random
    #[arg(long)]
    bot: Option<BotType>,
    /// Pick a side up front: x or o
    #[arg(long)]
    side: Option<String>,
    /// Board side length
    #[arg(long)]
    size: Option<u32>,
    /// Seed for the random bot
    #[arg(long)]
    seed: Option<u64>,
    #[arg(long)]
    use_log_prefix: bool,
    #[arg(long)]
    quiet: bool,
    /// Write the effective settings back to the config file
    #[arg(long)]
    save_config: bool,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    let config_manager = get_config_manager(args.config.as_deref());
    let mut config = config_manager.get_config()?;

    if let Some(bot) = args.bot {
        config.game.bot = bot;
    }
    if let Some(size) = args.size {
        config.game.board_side = size;
    }
    if let Some(side) = &args.side {
        let mark = Mark::from_side_value(side)
            .ok_or_else(|| format!("Invalid side '{}', expected x or o", side))?;
        config.game.default_side = Some(mark);
    }
    config.validate()?;

    let prefix = if args.use_log_prefix || config.log_prefix {
        Some("Client".to_string())
    } else {
        None
    };
    logger::init_logger(prefix);
    logger::set_enabled(!args.quiet);

    if args.save_config {
        config_manager.set_config(&config)?;
        log!(
            "Saved config to {}",
            config_manager.content_provider().file_path().display()
        );
    }

    let rng = args.seed.map(SessionRng::new).unwrap_or_else(SessionRng::from_random);
    log!(
        "Starting {0}x{0} game against the {1} bot (seed {2})",
        config.game.board_side,
        config.game.bot,
        rng.seed()
    );

    let mut session = TicTacToeSession::new(config.game.session_settings(), rng)?;
    session.subscribe(Box::new(TerminalRenderer::new(std::io::stdout())));

    let stdin = std::io::stdin();
    app::run(
        &mut session,
        config.game.default_side,
        stdin.lock(),
        &mut std::io::stdout(),
    )?;

    log!("Bye");
    Ok(())
}
