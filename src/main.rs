use std::process::exit;
use std::thread::sleep;
use std::time::Duration;

use log::debug;

use gridsnake::config::{self, Cli, Config};
use gridsnake::error::Result;
use gridsnake::game::GameState;
use gridsnake::term::{Input, TermManager};

const TICK_INTERVAL_MS: u64 = 150;

fn main() {
    env_logger::init();

    let config = match config::parse(std::env::args().skip(1)) {
        Ok(Cli::Run(config)) => config,
        Ok(Cli::Help) => {
            eprintln!("{}", config::USAGE);
            exit(0);
        }
        Err(err) => {
            eprintln!("{}", err);
            eprintln!("{}", config::USAGE);
            exit(1);
        }
    };

    // The single point of process exit for everything past CLI parsing.
    match run(config) {
        Ok(state) => println!("{}", outcome_line(&state)),
        Err(err) => {
            eprintln!("{}", err);
            exit(1);
        }
    }
}

// The GAME OVER banner belongs to a collision ending the game; quitting
// with q just reports the score.
fn outcome_line(state: &GameState) -> String {
    if state.game_over() {
        format!("GAME OVER. Final score: {}", state.score())
    } else {
        format!("Final score: {}", state.score())
    }
}

fn run(config: Config) -> Result<GameState> {
    // Built before the terminal is touched, so a bad length/width combination
    // is reported on a normal screen.
    let mut state = GameState::new(config.width, config.length)?;

    let mut term = TermManager::new();
    term.setup()?;
    let played = play(&mut state, &mut term);
    // Restore runs whether the game ended or the terminal failed mid-play.
    let restored = term.restore();
    played?;
    restored?;

    Ok(state)
}

fn play(state: &mut GameState, term: &mut TermManager) -> Result<()> {
    term.clear()?;
    term.draw(state.board().rows(), state.score())?;

    loop {
        sleep(Duration::from_millis(TICK_INTERVAL_MS));

        let mut steer = None;
        match term.poll_input()? {
            Some(Input::Quit) => {
                debug!("quit requested");
                return Ok(());
            }
            Some(Input::Steer(direction)) => steer = Some(direction),
            None => {}
        }

        state.tick(steer);
        if state.game_over() {
            return Ok(());
        }

        term.draw(state.board().rows(), state.score())?;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn quit_reports_the_score_without_the_banner() {
        let state = GameState::new(5, 3).unwrap();
        assert_eq!(outcome_line(&state), "Final score: 0");
    }

    #[test]
    fn collision_gets_the_game_over_banner() {
        let mut state = GameState::new(3, 3).unwrap();
        state.tick(None); // head runs off the right edge
        assert!(state.game_over());
        assert_eq!(outcome_line(&state), "GAME OVER. Final score: 0");
    }
}
