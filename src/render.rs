use ggez::graphics::{Canvas, DrawMode, DrawParam, Mesh, Rect, Text, TextAlign, TextLayout};
use ggez::mint::Point2;
use ggez::{Context, GameResult};

use crate::config::{
    BANNER_LINE_GAP, BANNER_TEXT_SIZE, BOARD_HEIGHT, BOARD_WIDTH, FOOD_COLOR, HUD_TEXT_SIZE,
    SNAKE_COLOR, TEXT_COLOR, UNIT_SIZE,
};
use crate::game::{GameState, Status};

/// Paint one frame of `state` onto `canvas`.
pub fn draw_state(ctx: &mut Context, canvas: &mut Canvas, state: &GameState) -> GameResult {
    match state.status() {
        Status::Running => draw_board(ctx, canvas, state),
        Status::Paused => {
            draw_board(ctx, canvas, state)?;
            draw_centered(canvas, "Paused", BOARD_HEIGHT as f32 / 2.0);
            Ok(())
        }
        Status::GameOver => {
            draw_game_over(canvas, state);
            Ok(())
        }
    }
}

fn draw_board(ctx: &mut Context, canvas: &mut Canvas, state: &GameState) -> GameResult {
    // Food: a filled circle inscribed in its cell
    let food = state.food();
    let radius = UNIT_SIZE as f32 / 2.0;
    let food_mesh = Mesh::new_circle(
        ctx,
        DrawMode::fill(),
        Point2 {
            x: food.x as f32 + radius,
            y: food.y as f32 + radius,
        },
        radius,
        0.1,
        FOOD_COLOR,
    )?;
    canvas.draw(&food_mesh, DrawParam::default());

    // Snake
    for cell in state.snake() {
        let rect = Rect::new(
            cell.x as f32,
            cell.y as f32,
            UNIT_SIZE as f32,
            UNIT_SIZE as f32,
        );
        canvas.draw(
            &Mesh::new_rectangle(ctx, DrawMode::fill(), rect, SNAKE_COLOR)?,
            DrawParam::default(),
        );
    }

    let mut score_text = Text::new(score_line(state));
    score_text.set_scale(HUD_TEXT_SIZE);
    canvas.draw(
        &score_text,
        DrawParam::default()
            .dest(Point2 { x: 10.0, y: 10.0 })
            .color(TEXT_COLOR),
    );

    Ok(())
}

fn draw_game_over(canvas: &mut Canvas, state: &GameState) {
    let (headline, prompt) = game_over_lines(state);
    let y = BOARD_HEIGHT as f32 / 2.0;
    draw_centered(canvas, &headline, y);
    draw_centered(canvas, prompt, y + BANNER_LINE_GAP);
}

/// Draw a line of banner text horizontally centred on the board at height `y`.
fn draw_centered(canvas: &mut Canvas, line: &str, y: f32) {
    let mut text = Text::new(line);
    text.set_scale(BANNER_TEXT_SIZE).set_layout(TextLayout {
        h_align: TextAlign::Middle,
        v_align: TextAlign::Middle,
    });
    canvas.draw(
        &text,
        DrawParam::default()
            .dest(Point2 {
                x: BOARD_WIDTH as f32 / 2.0,
                y,
            })
            .color(TEXT_COLOR),
    );
}

fn score_line(state: &GameState) -> String {
    format!("Score: {} | Best: {}", state.score(), state.best_score())
}

fn game_over_lines(state: &GameState) -> (String, &'static str) {
    (
        format!("Game Over. Score: {}", state.score()),
        "Press Enter to Restart",
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::{Command, Direction};
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_score_line() {
        let state = GameState::with_rng(StdRng::seed_from_u64(1));
        assert_eq!(score_line(&state), "Score: 0 | Best: 0");
    }

    #[test]
    fn test_game_over_lines() {
        let mut state = GameState::with_rng(StdRng::seed_from_u64(1));
        state.apply(Command::Turn(Direction::Up));
        while state.status() != Status::GameOver {
            state.tick();
        }
        let (headline, prompt) = game_over_lines(&state);
        assert_eq!(headline, format!("Game Over. Score: {}", state.score()));
        assert_eq!(prompt, "Press Enter to Restart");
    }
}
