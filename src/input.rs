use ggez::input::keyboard::KeyCode;

use crate::game::{Command, Direction, Status};

/// What a key press means for the running window.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyAction {
    Game(Command),
    Quit,
    None,
}

/// Translate a key press into a game command, given the game's current status.
pub fn map_key(keycode: KeyCode, status: Status) -> KeyAction {
    if keycode == KeyCode::Escape {
        return KeyAction::Quit;
    }

    match status {
        Status::Running | Status::Paused => match keycode {
            KeyCode::Up => KeyAction::Game(Command::Turn(Direction::Up)),
            KeyCode::Down => KeyAction::Game(Command::Turn(Direction::Down)),
            KeyCode::Left => KeyAction::Game(Command::Turn(Direction::Left)),
            KeyCode::Right => KeyAction::Game(Command::Turn(Direction::Right)),
            KeyCode::Space => KeyAction::Game(Command::TogglePause),
            _ => KeyAction::None,
        },
        Status::GameOver => match keycode {
            KeyCode::Return | KeyCode::NumpadEnter => KeyAction::Game(Command::Restart),
            _ => KeyAction::None,
        },
    }
}
