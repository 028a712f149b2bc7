use std::io;

use clap::Parser;
use env_logger::Env;
use log::info;

use rust_klondike::cli::{Args, RenderStyle, TerminalInput};
use rust_klondike::{Game, GameOutcome};

fn main() {
    let args = Args::parse();

    let level = if args.debug { "debug" } else { "warn" };
    env_logger::Builder::from_env(Env::default().default_filter_or(level)).init();

    let config = args.to_config();
    info!("Configuration: {:?}", config);

    let style = RenderStyle {
        color: !args.no_color,
    };
    let stdin = io::stdin();
    let mut input = TerminalInput::new(stdin.lock(), io::stdout())
        .with_style(style)
        .with_clear_screen(!args.no_clear);

    let mut game = Game::new(&config);
    match game.play(&mut input) {
        GameOutcome::Won => info!("Game won after {} turns", game.turns()),
        GameOutcome::Abandoned => info!("Game abandoned after {} turns", game.turns()),
    }
}
