use crate::Coord;

const SNAKE_CHAR: char = '#';
const APPLE_CHAR: char = '*';
const EMPTY_CHAR: char = '.';

#[derive(Copy, Clone, PartialEq, Eq, Debug)]
pub enum Cell {
    Empty,
    Snake,
    Apple,
}

impl Cell {
    pub fn glyph(self) -> char {
        match self {
            Cell::Empty => EMPTY_CHAR,
            Cell::Snake => SNAKE_CHAR,
            Cell::Apple => APPLE_CHAR,
        }
    }
}

/// Square grid of cells, row-major. Dimensions are fixed for the lifetime
/// of a game.
pub struct Board {
    width: i32,
    cells: Vec<Cell>,
}

impl Board {
    pub fn new(width: i32) -> Self {
        let cells = vec![Cell::Empty; width as usize * width as usize];
        Board { width, cells }
    }

    pub fn width(&self) -> i32 {
        self.width
    }

    pub fn get(&self, pos: Coord) -> Cell {
        self.cells[self.index(pos)]
    }

    /// Writes a single cell. Callers guarantee `pos` is in bounds; the
    /// game loop's boundary check runs before any board write.
    pub fn place(&mut self, pos: Coord, cell: Cell) {
        let idx = self.index(pos);
        self.cells[idx] = cell;
    }

    /// One string per row, glyph-mapped. Lazy and restartable: each call
    /// yields a fresh pass over the current grid contents.
    pub fn rows(&self) -> impl Iterator<Item = String> + '_ {
        self.cells
            .chunks(self.width as usize)
            .map(|row| row.iter().map(|cell| cell.glyph()).collect())
    }

    fn index(&self, (x, y): Coord) -> usize {
        y as usize * self.width as usize + x as usize
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_board_is_all_empty() {
        let board = Board::new(4);
        for y in 0..4 {
            for x in 0..4 {
                assert_eq!(board.get((x, y)), Cell::Empty);
            }
        }
        assert_eq!(board.rows().count(), 4);
        assert!(board.rows().all(|row| row == "...."));
    }

    #[test]
    fn rows_reflect_latest_placements() {
        let mut board = Board::new(3);
        board.place((0, 0), Cell::Snake);
        board.place((2, 1), Cell::Apple);
        let rows: Vec<String> = board.rows().collect();
        assert_eq!(rows, vec!["#..", "..*", "..."]);

        // Overwrites must not leave stale glyphs behind.
        board.place((0, 0), Cell::Empty);
        board.place((2, 1), Cell::Snake);
        let rows: Vec<String> = board.rows().collect();
        assert_eq!(rows, vec!["...", "..#", "..."]);
    }

    #[test]
    fn rows_is_restartable() {
        let mut board = Board::new(2);
        board.place((1, 1), Cell::Snake);
        let first: Vec<String> = board.rows().collect();
        let second: Vec<String> = board.rows().collect();
        assert_eq!(first, second);
    }
}
