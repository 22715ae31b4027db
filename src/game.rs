use log::{debug, info};
use rand::rngs::StdRng;
use rand::SeedableRng;

use crate::apple;
use crate::board::{Board, Cell};
use crate::error::Result;
use crate::snake::{Direction, Snake};
use crate::Coord;

/// The whole game in one place: grid, snake, apple, score and the two
/// termination flags. One call to [`tick`](GameState::tick) is one turn of
/// the simulation; no terminal is involved, which keeps turns testable.
pub struct GameState {
    board: Board,
    snake: Snake,
    apple: Coord,
    score: u32,
    // Set by a collision in advance or grow; only observed at the top of a
    // tick. A grow collision therefore ends the game one tick late.
    collided: bool,
    game_over: bool,
    rng: StdRng,
}

impl GameState {
    pub fn new(width: i32, length: i32) -> Result<Self> {
        Self::with_rng(width, length, StdRng::from_entropy())
    }

    pub fn with_rng(width: i32, length: i32, rng: StdRng) -> Result<Self> {
        // The length check runs before the grid is allocated.
        let snake = Snake::new(length, width)?;

        let mut board = Board::new(width);
        for segment in snake.segments() {
            board.place(segment, Cell::Snake);
        }

        let mut state = GameState {
            board,
            snake,
            apple: (0, 0),
            score: 0,
            collided: false,
            game_over: false,
            rng,
        };
        state.spawn_apple();

        info!("new game: width {}, snake length {}", width, length);
        Ok(state)
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn snake(&self) -> &Snake {
        &self.snake
    }

    pub fn apple(&self) -> Coord {
        self.apple
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn game_over(&self) -> bool {
        self.game_over
    }

    /// Moves the apple to a fixed cell, restoring the one it leaves.
    /// Useful for scripted games; the regular path is [`tick`](Self::tick)
    /// regenerating it randomly on eating.
    pub fn place_apple(&mut self, pos: Coord) {
        let restored = if self.snake.occupies(self.apple) { Cell::Snake } else { Cell::Empty };
        self.board.place(self.apple, restored);
        self.apple = pos;
        self.board.place(pos, Cell::Apple);
    }

    /// One turn: apply the direction change if any, advance the snake, stop
    /// on a collision, sync the board, and handle apple eating. Once
    /// `game_over` is set, ticking is a no-op.
    pub fn tick(&mut self, steer: Option<Direction>) {
        if self.game_over {
            return;
        }

        if let Some(direction) = steer {
            self.snake.set_direction(direction);
        }

        let mv = self.snake.advance(self.board.width());
        if mv.collided {
            self.collided = true;
        }

        // Checked after the move so a grow collision from the previous tick
        // is picked up here, before any board write.
        if self.collided {
            self.game_over = true;
            info!("game over at score {}", self.score);
            return;
        }

        self.board.place(mv.tail_vacated, Cell::Empty);
        self.board.place(mv.head, Cell::Snake);

        if mv.head == self.apple {
            self.score += 1;
            debug!("apple eaten at {:?}, score {}", mv.head, self.score);

            let gr = self.snake.grow(mv.tail_vacated, self.board.width());
            if gr.collided {
                self.collided = true;
            } else {
                self.board.place(gr.new_tail, Cell::Snake);
            }

            self.spawn_apple();
        }
    }

    fn spawn_apple(&mut self) {
        self.apple = apple::generate(&mut self.rng, self.board.width());
        self.board.place(self.apple, Cell::Apple);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn initial_snake_cells_are_marked_on_the_board() {
        let state = GameState::new(7, 3).unwrap();
        for x in 0..3 {
            let pos = (x, 0);
            if pos == state.apple() {
                // The apple may spawn on the snake; the board shows it.
                assert_eq!(state.board().get(pos), Cell::Apple);
            } else {
                assert_eq!(state.board().get(pos), Cell::Snake);
            }
        }
        assert_eq!(state.snake().len(), 3);
        assert_eq!(state.score(), 0);
        assert!(!state.game_over());
    }

    #[test]
    fn board_width_must_fit_the_snake() {
        assert!(GameState::new(5, 6).is_err());
        assert!(GameState::new(5, 5).is_ok());
    }

    #[test]
    fn ticking_after_game_over_changes_nothing() {
        let mut state = GameState::new(3, 3).unwrap();
        state.place_apple((2, 2));
        // Head starts at (2, 0); one step right leaves the board.
        state.tick(None);
        assert!(state.game_over());
        let segments: Vec<_> = state.snake().segments().collect();
        state.tick(Some(Direction::Down));
        assert!(state.game_over());
        assert_eq!(state.snake().segments().collect::<Vec<_>>(), segments);
        assert_eq!(state.score(), 0);
    }
}
