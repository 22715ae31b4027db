use crate::error::{GameError, Result};

pub const DEFAULT_WIDTH: i32 = 15;
pub const DEFAULT_LENGTH: i32 = 3;

pub const USAGE: &str = "\
Usage: gridsnake [-w <width>] [-l <length>]

  -w <width>   board width (positive integer, default 15)
  -l <length>  initial snake length (positive integer, default 3,
               at most the board width)
  -h           print this help

Steer with w/a/s/d, quit with q.";

#[derive(Debug, PartialEq, Eq)]
pub struct Config {
    pub width: i32,
    pub length: i32,
}

#[derive(Debug, PartialEq, Eq)]
pub enum Cli {
    Run(Config),
    Help,
}

/// Parses the flags after the program name. Length-versus-width fitting is
/// not checked here; game setup rejects that before allocating anything.
pub fn parse<I>(mut args: I) -> Result<Cli>
where
    I: Iterator<Item = String>,
{
    let mut width = DEFAULT_WIDTH;
    let mut length = DEFAULT_LENGTH;

    while let Some(arg) = args.next() {
        match arg.as_str() {
            "-h" => return Ok(Cli::Help),
            "-w" => width = positive_int(&mut args, "-w")?,
            "-l" => length = positive_int(&mut args, "-l")?,
            other => {
                return Err(GameError::Config(format!("unknown option '{}'", other)));
            }
        }
    }

    Ok(Cli::Run(Config { width, length }))
}

// A value that parses to zero is rejected with the same diagnostic as one
// that does not parse at all; the original game made no distinction either.
fn positive_int<I>(args: &mut I, flag: &str) -> Result<i32>
where
    I: Iterator<Item = String>,
{
    let value = args
        .next()
        .ok_or_else(|| GameError::Config(format!("missing value for {}", flag)))?;

    match value.parse::<i32>() {
        Ok(n) if n > 0 => Ok(n),
        _ => Err(GameError::Config(format!(
            "{} expects a positive integer, got '{}'",
            flag, value
        ))),
    }
}
