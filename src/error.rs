use std::fmt;
use std::io;

pub type Result<T> = std::result::Result<T, GameError>;

#[derive(Debug)]
pub enum GameError {
    /// Bad command-line input or an impossible board/snake combination.
    Config(String),
    /// Terminal I/O failure.
    Io(io::Error),
}

impl fmt::Display for GameError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            GameError::Config(msg) => write!(f, "{}", msg),
            GameError::Io(err) => write!(f, "terminal error: {}", err),
        }
    }
}

impl std::error::Error for GameError {}

impl From<io::Error> for GameError {
    fn from(err: io::Error) -> Self {
        GameError::Io(err)
    }
}

impl From<crossterm::ErrorKind> for GameError {
    fn from(err: crossterm::ErrorKind) -> Self {
        match err {
            crossterm::ErrorKind::IoError(err) => GameError::Io(err),
            other => GameError::Io(io::Error::new(io::ErrorKind::Other, other.to_string())),
        }
    }
}
