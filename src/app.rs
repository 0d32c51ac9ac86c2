use std::time::Duration;

use ggez::event::EventHandler;
use ggez::graphics::Canvas;
use ggez::input::keyboard::KeyInput;
use ggez::{Context, GameResult};
use log::{debug, info};

use crate::config::{BACKGROUND_COLOR, MAX_CATCH_UP_TICKS, TICK_INTERVAL};
use crate::game::{Command, GameState, Status, TickOutcome};
use crate::input::{map_key, KeyAction};
use crate::render;

/// Fixed-interval timer fed with frame deltas.
#[derive(Debug)]
pub struct TickClock {
    interval: Duration,
    pending: Duration,
    armed: bool,
}

impl TickClock {
    pub fn new(interval: Duration) -> Self {
        Self {
            interval,
            pending: Duration::ZERO,
            armed: true,
        }
    }

    /// Add `dt` of elapsed time and return how many ticks are due now.
    pub fn advance(&mut self, dt: Duration) -> u32 {
        if !self.armed {
            return 0;
        }
        self.pending += dt;

        let mut due = 0;
        while self.pending >= self.interval && due < MAX_CATCH_UP_TICKS {
            self.pending -= self.interval;
            due += 1;
        }
        // Drop whatever backlog the cap left behind instead of replaying it later.
        if self.pending >= self.interval {
            self.pending = Duration::ZERO;
        }
        due
    }

    pub fn arm(&mut self) {
        self.armed = true;
        self.pending = Duration::ZERO;
    }

    pub fn disarm(&mut self) {
        self.armed = false;
        self.pending = Duration::ZERO;
    }

    pub fn is_armed(&self) -> bool {
        self.armed
    }
}

pub struct App {
    state: GameState,
    clock: TickClock,
}

impl App {
    pub fn new() -> Self {
        let state = GameState::new();
        info!("New game, food at ({}, {})", state.food().x, state.food().y);
        App {
            state,
            clock: TickClock::new(TICK_INTERVAL),
        }
    }

    fn run_ticks(&mut self, due: u32) {
        for _ in 0..due {
            match self.state.tick() {
                TickOutcome::Idle | TickOutcome::Moved => {}
                TickOutcome::Ate => debug!(
                    "Food eaten, score {}, length {}",
                    self.state.score(),
                    self.state.snake_len()
                ),
                TickOutcome::Crashed(collision) => {
                    info!(
                        "Game over ({:?}), score {}, best {}",
                        collision,
                        self.state.score(),
                        self.state.best_score()
                    );
                }
                TickOutcome::BoardFilled => {
                    info!("Board filled, score {}", self.state.score());
                }
            }
            if self.state.status() == Status::GameOver {
                self.clock.disarm();
                break;
            }
        }
    }

    fn handle_command(&mut self, command: Command) {
        let before = self.state.status();
        self.state.apply(command);
        let after = self.state.status();
        if let Command::Turn(_) = command {
            debug!("Heading {:?}", self.state.direction());
        }
        if before == after {
            return;
        }

        match (before, after) {
            (Status::GameOver, Status::Running) => {
                info!("Restarting");
                if !self.clock.is_armed() {
                    self.clock.arm();
                }
            }
            (_, Status::Paused) => info!("Paused"),
            (Status::Paused, Status::Running) => info!("Resumed"),
            _ => {}
        }
    }
}

impl Default for App {
    fn default() -> Self {
        Self::new()
    }
}

impl EventHandler for App {
    fn update(&mut self, ctx: &mut Context) -> GameResult {
        let due = self.clock.advance(ctx.time.delta());
        self.run_ticks(due);
        Ok(())
    }

    fn draw(&mut self, ctx: &mut Context) -> GameResult {
        let mut canvas = Canvas::from_frame(ctx, BACKGROUND_COLOR);
        render::draw_state(ctx, &mut canvas, &self.state)?;
        canvas.finish(ctx)?;
        Ok(())
    }

    fn key_down_event(&mut self, ctx: &mut Context, input: KeyInput, _repeat: bool) -> GameResult {
        if let Some(keycode) = input.keycode {
            match map_key(keycode, self.state.status()) {
                KeyAction::Game(command) => self.handle_command(command),
                KeyAction::Quit => {
                    info!("Quit requested");
                    ctx.request_quit();
                }
                KeyAction::None => {}
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::Direction;

    fn ms(n: u64) -> Duration {
        Duration::from_millis(n)
    }

    #[test]
    fn test_clock_fires_every_interval() {
        let mut clock = TickClock::new(ms(100));
        assert_eq!(clock.advance(ms(60)), 0);
        assert_eq!(clock.advance(ms(60)), 1);
        assert_eq!(clock.advance(ms(80)), 1);
        assert_eq!(clock.advance(ms(99)), 0);
    }

    #[test]
    fn test_clock_caps_catch_up() {
        let mut clock = TickClock::new(ms(100));
        assert_eq!(clock.advance(ms(2_000)), MAX_CATCH_UP_TICKS);
        assert_eq!(clock.advance(ms(50)), 0);
    }

    #[test]
    fn test_disarmed_clock_stays_silent() {
        let mut clock = TickClock::new(ms(100));
        clock.advance(ms(50));
        clock.disarm();
        assert!(!clock.is_armed());
        assert_eq!(clock.advance(ms(500)), 0);

        clock.arm();
        assert_eq!(clock.advance(ms(50)), 0);
        assert_eq!(clock.advance(ms(50)), 1);
    }

    #[test]
    fn test_game_over_disarms_and_restart_rearms() {
        let mut app = App::new();
        app.handle_command(Command::Turn(Direction::Up));
        // From the centre the top wall is 16 steps away.
        for _ in 0..20 {
            app.run_ticks(1);
        }
        assert_eq!(app.state.status(), Status::GameOver);
        assert!(!app.clock.is_armed());

        app.handle_command(Command::Restart);
        assert_eq!(app.state.status(), Status::Running);
        assert!(app.clock.is_armed());
    }

    #[test]
    fn test_pause_command() {
        let mut app = App::new();
        app.handle_command(Command::TogglePause);
        assert_eq!(app.state.status(), Status::Paused);
        let head = app.state.head();
        app.run_ticks(3);
        assert_eq!(app.state.head(), head);
        assert!(app.clock.is_armed());
    }
}
