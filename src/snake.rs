use std::collections::VecDeque;

use crate::error::{GameError, Result};
use crate::Coord;
use Direction::*;

#[derive(Copy, Clone, PartialEq, Eq, Debug)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    pub fn delta(self) -> Coord {
        match self {
            Up => (0, -1),
            Down => (0, 1),
            Left => (-1, 0),
            Right => (1, 0),
        }
    }
}

pub struct MoveResult {
    pub tail_vacated: Coord,
    pub head: Coord,
    pub collided: bool,
}

pub struct GrowResult {
    pub new_tail: Coord,
    pub collided: bool,
}

/// Head-first segment deque with the current heading. A move is
/// pop-from-tail / push-to-head, so it stays O(1) amortized no matter how
/// long the snake gets.
pub struct Snake {
    body: VecDeque<Coord>,
    direction: Direction,
}

impl Snake {
    /// Places the snake in row 0, columns `0..length`, heading right.
    /// There is no placement scheme for a snake longer than the board, so
    /// that combination is rejected up front.
    pub fn new(length: i32, width: i32) -> Result<Self> {
        if length < 1 || length > width {
            return Err(GameError::Config(format!(
                "snake length {} does not fit a board of width {}",
                length, width
            )));
        }

        let body = (0..length).rev().map(|x| (x, 0)).collect();
        Ok(Snake { body, direction: Right })
    }

    pub fn segments(&self) -> impl Iterator<Item = Coord> + '_ {
        self.body.iter().copied()
    }

    pub fn len(&self) -> usize {
        self.body.len()
    }

    pub fn head(&self) -> Coord {
        *self.body.front().unwrap()
    }

    pub fn occupies(&self, pos: Coord) -> bool {
        self.body.contains(&pos)
    }

    pub fn direction(&self) -> Direction {
        self.direction
    }

    pub fn set_direction(&mut self, direction: Direction) {
        self.direction = direction;
    }

    /// Advances one step in the current heading: the tail segment is
    /// recycled as the new head. The vacated tail coordinate is reported so
    /// the caller can clear that cell on the board.
    ///
    /// The boundary check runs before the body scan and short-circuits it;
    /// either can only ever make `collided` true.
    pub fn advance(&mut self, width: i32) -> MoveResult {
        let old_head = self.head();
        let (dx, dy) = self.direction.delta();
        let head = (old_head.0 + dx, old_head.1 + dy);

        let tail_vacated = self.body.pop_back().unwrap();
        self.body.push_front(head);

        let collided =
            !in_bounds(head, width) || self.body.iter().skip(1).any(|&seg| seg == head);

        MoveResult { tail_vacated, head, collided }
    }

    /// Appends a new tail one step behind the cell the preceding move
    /// vacated, opposite to the heading. Growing off the board flags a
    /// collision; that is the game's difficulty mechanic, not an accident.
    /// Must only run after the vacated cell has been synced to the board,
    /// since this reuses its coordinate.
    pub fn grow(&mut self, vacated: Coord, width: i32) -> GrowResult {
        let (dx, dy) = self.direction.delta();
        let new_tail = (vacated.0 - dx, vacated.1 - dy);

        self.body.push_back(new_tail);

        GrowResult { new_tail, collided: !in_bounds(new_tail, width) }
    }
}

fn in_bounds((x, y): Coord, width: i32) -> bool {
    x >= 0 && y >= 0 && x < width && y < width
}
