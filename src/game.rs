use std::collections::VecDeque;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::config::{BOARD_HEIGHT, BOARD_WIDTH, COLUMNS, ROWS, UNIT_SIZE};

/// Top-left pixel corner of a board cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Cell {
    pub x: i32,
    pub y: i32,
}

impl Cell {
    pub fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// The neighbouring cell one unit away in `direction`.
    pub fn step(self, direction: Direction) -> Self {
        let (dx, dy) = direction.delta();
        Self {
            x: self.x + dx * UNIT_SIZE,
            y: self.y + dy * UNIT_SIZE,
        }
    }

    pub fn is_on_board(self) -> bool {
        self.x >= 0 && self.x < BOARD_WIDTH && self.y >= 0 && self.y < BOARD_HEIGHT
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    pub fn delta(self) -> (i32, i32) {
        match self {
            Direction::Up => (0, -1),
            Direction::Down => (0, 1),
            Direction::Left => (-1, 0),
            Direction::Right => (1, 0),
        }
    }

    pub fn opposite(self) -> Self {
        match self {
            Direction::Up => Direction::Down,
            Direction::Down => Direction::Up,
            Direction::Left => Direction::Right,
            Direction::Right => Direction::Left,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Status {
    Running,
    Paused,
    GameOver,
}

/// Everything the player can ask the game to do.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    Turn(Direction),
    TogglePause,
    Restart,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Collision {
    Wall,
    SelfCollision,
}

/// What a single call to [`GameState::tick`] did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TickOutcome {
    /// Paused or already over; nothing changed.
    Idle,
    Moved,
    Ate,
    Crashed(Collision),
    /// Food was eaten and no free cell is left for the next one.
    BoardFilled,
}

pub struct GameState {
    snake: VecDeque<Cell>,
    food: Cell,
    direction: Direction,
    score: u32,
    best_score: u32,
    running: bool,
    paused: bool,
    rng: StdRng,
}

impl GameState {
    pub fn new() -> Self {
        Self::with_rng(StdRng::from_entropy())
    }

    /// Build a game that draws food positions from `rng`.
    pub fn with_rng(rng: StdRng) -> Self {
        let mut state = GameState {
            snake: VecDeque::new(),
            food: Cell::new(0, 0),
            direction: Direction::Right,
            score: 0,
            best_score: 0,
            running: false,
            paused: false,
            rng,
        };
        state.reset();
        state
    }

    /// Start a fresh round: one cell in the middle of the board heading right.
    pub fn reset(&mut self) {
        self.snake.clear();
        self.snake.push_back(Cell::new(BOARD_WIDTH / 2, BOARD_HEIGHT / 2));
        self.direction = Direction::Right;
        self.score = 0;
        self.running = true;
        self.paused = false;
        match self.spawn_food() {
            Some(food) => self.food = food,
            None => self.running = false,
        }
    }

    pub fn tick(&mut self) -> TickOutcome {
        if !self.running || self.paused {
            return TickOutcome::Idle;
        }

        let new_head = self.head().step(self.direction);
        self.snake.push_front(new_head);

        let mut outcome = TickOutcome::Moved;
        if new_head == self.food {
            self.score += 1;
            self.best_score = self.best_score.max(self.score);
            match self.spawn_food() {
                Some(food) => {
                    self.food = food;
                    outcome = TickOutcome::Ate;
                }
                None => {
                    self.running = false;
                    return TickOutcome::BoardFilled;
                }
            }
        } else {
            self.snake.pop_back();
        }

        if let Some(collision) = self.collision_at_head() {
            self.running = false;
            return TickOutcome::Crashed(collision);
        }

        outcome
    }

    /// Change heading for the next tick. A reversal of the current heading is
    /// ignored.
    pub fn set_direction(&mut self, direction: Direction) {
        if !self.running || direction == self.direction.opposite() {
            return;
        }
        self.direction = direction;
    }

    pub fn toggle_pause(&mut self) {
        if self.running {
            self.paused = !self.paused;
        }
    }

    pub fn apply(&mut self, command: Command) {
        match command {
            Command::Turn(direction) => self.set_direction(direction),
            Command::TogglePause => self.toggle_pause(),
            Command::Restart => {
                if self.status() == Status::GameOver {
                    self.reset();
                }
            }
        }
    }

    pub fn status(&self) -> Status {
        match (self.running, self.paused) {
            (false, _) => Status::GameOver,
            (true, true) => Status::Paused,
            (true, false) => Status::Running,
        }
    }

    pub fn snake(&self) -> impl Iterator<Item = &Cell> {
        self.snake.iter()
    }

    pub fn snake_len(&self) -> usize {
        self.snake.len()
    }

    pub fn head(&self) -> Cell {
        // The body never drops below one cell: tick pushes before it pops.
        self.snake[0]
    }

    pub fn food(&self) -> Cell {
        self.food
    }

    pub fn direction(&self) -> Direction {
        self.direction
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    /// Highest score reached since the window opened.
    pub fn best_score(&self) -> u32 {
        self.best_score
    }

    fn collision_at_head(&self) -> Option<Collision> {
        let head = self.head();
        if !head.is_on_board() {
            return Some(Collision::Wall);
        }
        if self.snake.iter().skip(1).any(|cell| *cell == head) {
            return Some(Collision::SelfCollision);
        }
        None
    }

    /// Pick a random unoccupied cell, or `None` once the snake covers the board.
    fn spawn_food(&mut self) -> Option<Cell> {
        let occupied_on_board = self.snake.iter().filter(|c| c.is_on_board()).count();
        if occupied_on_board >= (COLUMNS * ROWS) as usize {
            return None;
        }
        loop {
            let cell = Cell::new(
                self.rng.gen_range(0..COLUMNS) * UNIT_SIZE,
                self.rng.gen_range(0..ROWS) * UNIT_SIZE,
            );
            if !self.snake.contains(&cell) {
                return Some(cell);
            }
        }
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::new()
    }
}
