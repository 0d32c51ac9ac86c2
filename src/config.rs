use std::time::Duration;

use ggez::graphics::Color;
use simplelog::LevelFilter;

pub const BOARD_WIDTH: i32 = 600;
pub const BOARD_HEIGHT: i32 = 600;
pub const UNIT_SIZE: i32 = 20;

/// Number of cells across and down the board.
pub const COLUMNS: i32 = BOARD_WIDTH / UNIT_SIZE;
pub const ROWS: i32 = BOARD_HEIGHT / UNIT_SIZE;

pub const TICK_INTERVAL: Duration = Duration::from_millis(100);
/// Upper bound on ticks run in a single frame after a stall (window drag, etc).
pub const MAX_CATCH_UP_TICKS: u32 = 3;

pub const WINDOW_TITLE: &str = "Snake Game";

// Colors
pub const BACKGROUND_COLOR: Color = Color::BLACK;
pub const SNAKE_COLOR: Color = Color::GREEN;
pub const FOOD_COLOR: Color = Color::RED;
pub const TEXT_COLOR: Color = Color::WHITE;

pub const HUD_TEXT_SIZE: f32 = 18.0;
pub const BANNER_TEXT_SIZE: f32 = 32.0;
pub const BANNER_LINE_GAP: f32 = 40.0;

pub const LOG_LEVEL_ENV: &str = "SNAKE_LOG";
pub const DEFAULT_LOG_LEVEL: LevelFilter = LevelFilter::Info;

/// Resolve the log level from the raw `SNAKE_LOG` value.
///
/// Returns the level plus the rejected value when it could not be parsed, so
/// the caller can warn about it once the logger is up.
pub fn resolve_log_level(raw: Option<&str>) -> (LevelFilter, Option<String>) {
    match raw.map(str::trim) {
        None | Some("") => (DEFAULT_LOG_LEVEL, None),
        Some(value) => match value.parse::<LevelFilter>() {
            Ok(level) => (level, None),
            Err(_) => (DEFAULT_LOG_LEVEL, Some(value.to_string())),
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_board_is_whole_cells() {
        assert_eq!(BOARD_WIDTH % UNIT_SIZE, 0);
        assert_eq!(BOARD_HEIGHT % UNIT_SIZE, 0);
        assert_eq!(COLUMNS, 30);
        assert_eq!(ROWS, 30);
    }

    #[test]
    fn test_log_level_defaults() {
        assert_eq!(resolve_log_level(None), (LevelFilter::Info, None));
        assert_eq!(resolve_log_level(Some("  ")), (LevelFilter::Info, None));
    }

    #[test]
    fn test_log_level_parsing() {
        assert_eq!(resolve_log_level(Some("debug")).0, LevelFilter::Debug);
        assert_eq!(resolve_log_level(Some("WARN")).0, LevelFilter::Warn);
        assert_eq!(resolve_log_level(Some("off")).0, LevelFilter::Off);
    }

    #[test]
    fn test_log_level_rejects_garbage() {
        let (level, rejected) = resolve_log_level(Some("loud"));
        assert_eq!(level, LevelFilter::Info);
        assert_eq!(rejected.as_deref(), Some("loud"));
    }
}
