pub mod apple;
pub mod board;
pub mod config;
pub mod error;
pub mod game;
pub mod snake;
pub mod term;

// Signed so that off-board positions (x = -1 and friends) are representable;
// collision checks depend on seeing them.
pub type Coord = (i32, i32);
