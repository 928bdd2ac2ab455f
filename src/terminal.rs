//! Line-oriented terminal front end for a human-versus-engine session.

use anyhow::Result;
use std::io::{BufRead, Write};
use tictactoe_minimax::{EngineConfig, Phase, Position, Session};
use tracing::{debug, instrument};

/// Runs games on a pair of streams until the player declines a rematch
/// or input ends.
pub struct Terminal<R, W> {
    input: R,
    output: W,
    config: EngineConfig,
}

impl<R: BufRead, W: Write> Terminal<R, W> {
    /// Creates a terminal front end.
    pub fn new(input: R, output: W, config: EngineConfig) -> Self {
        Self {
            input,
            output,
            config,
        }
    }

    /// Plays games until the player quits.
    #[instrument(skip(self))]
    pub fn run(&mut self) -> Result<()> {
        let mut session = Session::new(self.config.engine());
        writeln!(
            self.output,
            "Let's play tic-tac-toe! You are {}, the engine is {}.",
            session.human(),
            session.automated()
        )?;

        loop {
            if !self.play_one(&mut session)? {
                return Ok(());
            }
            match self.prompt("Start a new game? [y/N] ")? {
                Some(answer) if answer.eq_ignore_ascii_case("y") => session.reset(),
                _ => return Ok(()),
            }
        }
    }

    /// Plays one game to the end. Returns `false` if input ran out.
    fn play_one(&mut self, session: &mut Session) -> Result<bool> {
        loop {
            match session.phase() {
                Phase::HumanToMove => {
                    writeln!(self.output, "\n{}\n", session.board().display())?;
                    let Some(line) = self.prompt("Your move (1-9): ")? else {
                        return Ok(false);
                    };
                    let Some(position) = Position::from_label_or_number(&line) else {
                        writeln!(self.output, "Unrecognised cell: {:?}", line)?;
                        continue;
                    };
                    if let Err(e) = session.play_human(position) {
                        writeln!(self.output, "{}", e)?;
                    }
                }
                Phase::AutomatedToMove => {
                    std::thread::sleep(self.config.move_delay());
                    let (position, _) = session.play_automated()?;
                    writeln!(
                        self.output,
                        "{} plays {} ({})",
                        session.automated(),
                        position.to_index() + 1,
                        position
                    )?;
                }
                Phase::Won(_) | Phase::Tied => {
                    writeln!(self.output, "\n{}\n", session.board().display())?;
                    std::thread::sleep(self.config.result_delay());
                    writeln!(self.output, "{}", session.outcome())?;
                    return Ok(true);
                }
            }
        }
    }

    fn prompt(&mut self, text: &str) -> Result<Option<String>> {
        write!(self.output, "{}", text)?;
        self.output.flush()?;
        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            debug!("Input closed");
            return Ok(None);
        }
        Ok(Some(line.trim().to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    fn run_script(script: &str) -> String {
        let config = EngineConfig::default().with_delay_ms(0);
        let mut output = Vec::new();
        Terminal::new(Cursor::new(script.to_string()), &mut output, config)
            .run()
            .unwrap();
        String::from_utf8(output).unwrap()
    }

    #[test]
    fn test_engine_replies_to_human_move() {
        let output = run_script("5\n");
        assert!(output.contains("You are X, the engine is O"));
        assert!(output.contains("O plays"));
    }

    #[test]
    fn test_bad_input_reprompts() {
        let output = run_script("banana\n10\n");
        assert!(output.contains("Unrecognised cell: \"banana\""));
        assert!(output.contains("Unrecognised cell: \"10\""));
        assert!(!output.contains("O plays"));
    }

    #[test]
    fn test_occupied_square_is_reported() {
        let output = run_script("5\n5\n");
        assert!(output.contains("already occupied"));
    }
}
