mod app;
mod config;
mod game;
mod input;
mod render;

use ggez::{event, GameError, GameResult};
use log::{info, warn};
use simplelog::{ColorChoice, Config, TermLogger, TerminalMode};

use app::App;
use config::{BOARD_HEIGHT, BOARD_WIDTH, LOG_LEVEL_ENV, UNIT_SIZE, WINDOW_TITLE};

fn main() -> GameResult {
    // Set up logging before anything else
    let raw_level = std::env::var(LOG_LEVEL_ENV).ok();
    let (level, rejected) = config::resolve_log_level(raw_level.as_deref());
    TermLogger::init(level, Config::default(), TerminalMode::Mixed, ColorChoice::Auto)
        .map_err(|e| GameError::CustomError(format!("failed to initialize logger: {}", e)))?;
    if let Some(value) = rejected {
        warn!("Ignoring unknown {} value {:?}", LOG_LEVEL_ENV, value);
    }

    info!(
        "Starting snake on a {}x{} board, {} px cells",
        BOARD_WIDTH, BOARD_HEIGHT, UNIT_SIZE
    );

    let window_setup = ggez::conf::WindowSetup::default()
        .title(WINDOW_TITLE)
        .vsync(true);
    let window_mode = ggez::conf::WindowMode::default()
        .dimensions(BOARD_WIDTH as f32, BOARD_HEIGHT as f32)
        .resizable(false);

    let (ctx, event_loop) = ggez::ContextBuilder::new("snake", "snake_panel")
        .window_setup(window_setup)
        .window_mode(window_mode)
        .build()?;

    let app = App::new();
    event::run(ctx, event_loop, app)
}
