use std::io::{self, BufRead, Write};

use thiserror::Error;

use crate::application::game_service::{GameService, Selection};
use crate::config::DisplayConfig;
use crate::domain::board::{Board, BoardError};
use crate::domain::coordinate::Coordinate;
use crate::infrastructure::display::render_board;

const HELP: &str = "\
commands:
  select <layer> <row> <col>   select the piece on a cell (again to deselect)
  move <layer> <row> <col>     move the selected piece
  moves                        list the selected piece's targets
  board                        redraw the board
  reset                        start a new game
  help                         show this text
  quit                         leave";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    Select(Coordinate),
    Move(Coordinate),
    Moves,
    Board,
    Reset,
    Help,
    Quit,
}

#[derive(Debug, Error)]
pub enum CommandError {
    #[error("empty command")]
    Empty,
    #[error("unknown command {0:?}, try 'help'")]
    UnknownCommand(String),
    #[error("missing {0}")]
    MissingArgument(&'static str),
    #[error("invalid number {0:?}")]
    InvalidNumber(String),
    #[error(transparent)]
    Board(#[from] BoardError),
    #[error(transparent)]
    Io(#[from] io::Error),
}

impl Command {
    pub fn parse(line: &str) -> Result<Self, CommandError> {
        let mut parts = line.split_whitespace();
        let word = parts.next().ok_or(CommandError::Empty)?;
        match word.to_ascii_lowercase().as_str() {
            "select" | "s" => Ok(Command::Select(parse_coordinate(&mut parts)?)),
            "move" | "m" => Ok(Command::Move(parse_coordinate(&mut parts)?)),
            "moves" => Ok(Command::Moves),
            "board" | "b" => Ok(Command::Board),
            "reset" => Ok(Command::Reset),
            "help" | "?" => Ok(Command::Help),
            "quit" | "q" | "exit" => Ok(Command::Quit),
            other => Err(CommandError::UnknownCommand(other.to_string())),
        }
    }
}

fn parse_coordinate<'a>(parts: &mut impl Iterator<Item = &'a str>) -> Result<Coordinate, CommandError> {
    let mut next = |name: &'static str| -> Result<i32, CommandError> {
        let raw = parts.next().ok_or(CommandError::MissingArgument(name))?;
        raw.parse::<i32>()
            .map_err(|_| CommandError::InvalidNumber(raw.to_string()))
    };
    let layer = next("layer")?;
    let row = next("row")?;
    let col = next("col")?;
    Ok(Coordinate::new(layer, row, col))
}

pub struct ConsoleInterface {
    game: GameService,
    display: DisplayConfig,
}

impl ConsoleInterface {
    pub fn new(game: GameService, display: DisplayConfig) -> Self {
        Self { game, display }
    }

    pub fn game(&self) -> &GameService {
        &self.game
    }

    pub fn run(&mut self) -> io::Result<()> {
        let stdin = io::stdin();
        let stdout = io::stdout();
        self.run_with(stdin.lock(), stdout.lock())
    }

    pub fn run_with<R: BufRead, W: Write>(&mut self, input: R, mut out: W) -> io::Result<()> {
        writeln!(out, "{}", self.render())?;
        writeln!(out, "type 'help' for commands")?;

        for line in input.lines() {
            let line = line?;
            if line.trim().is_empty() {
                continue;
            }
            match Command::parse(&line).and_then(|cmd| self.execute(cmd, &mut out)) {
                Ok(true) => {}
                Ok(false) => break,
                Err(CommandError::Io(e)) => return Err(e),
                Err(e) => writeln!(out, "Error: {}", e)?,
            }
        }
        Ok(())
    }

    /// Returns `Ok(false)` when the session should end.
    fn execute<W: Write>(&mut self, command: Command, out: &mut W) -> Result<bool, CommandError> {
        match command {
            Command::Select(coord) => match self.game.select_at(&coord)? {
                Selection::Selected(_) => {
                    writeln!(out, "{}", self.render())?;
                    self.write_moves(out)?;
                }
                Selection::Cleared => writeln!(out, "selection cleared")?,
            },
            Command::Move(target) => {
                let captured = self.game.choose(target)?;
                if let Some(victim) = captured {
                    writeln!(out, "captured {:?} {}", victim.owner, victim.piece_type)?;
                }
                writeln!(out, "{}", self.render())?;
            }
            Command::Moves => self.write_moves(out)?,
            Command::Board => writeln!(out, "{}", self.render())?,
            Command::Reset => {
                self.game.reset(Board::new());
                tracing::info!("new game");
                writeln!(out, "{}", self.render())?;
            }
            Command::Help => writeln!(out, "{}", HELP)?,
            Command::Quit => return Ok(false),
        }
        Ok(true)
    }

    fn write_moves<W: Write>(&self, out: &mut W) -> io::Result<()> {
        match self.game.selected() {
            Some(piece) => {
                let targets: Vec<String> = self
                    .game
                    .available_moves()
                    .iter()
                    .map(|c| format!("{} {} {}", c.layer, c.row, c.col))
                    .collect();
                writeln!(
                    out,
                    "{:?} {} at {}: {} move(s) [{}]",
                    piece.owner,
                    piece.piece_type,
                    piece.position,
                    targets.len(),
                    targets.join(", ")
                )
            }
            None => writeln!(out, "nothing selected"),
        }
    }

    fn render(&self) -> String {
        render_board(self.game.board(), self.game.available_moves(), &self.display)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_commands() {
        assert_eq!(
            Command::parse("select 0 1 4").unwrap(),
            Command::Select(Coordinate::new(0, 1, 4))
        );
        assert_eq!(
            Command::parse("  M 2 3 4 ").unwrap(),
            Command::Move(Coordinate::new(2, 3, 4))
        );
        assert_eq!(Command::parse("quit").unwrap(), Command::Quit);
    }

    #[test]
    fn rejects_bad_input() {
        assert!(matches!(Command::parse(""), Err(CommandError::Empty)));
        assert!(matches!(
            Command::parse("select 0 1"),
            Err(CommandError::MissingArgument("col"))
        ));
        assert!(matches!(
            Command::parse("move 0 x 1"),
            Err(CommandError::InvalidNumber(raw)) if raw == "x"
        ));
        assert!(matches!(
            Command::parse("castle"),
            Err(CommandError::UnknownCommand(_))
        ));
    }

    #[test]
    fn scripted_session_moves_a_pawn() {
        let display = DisplayConfig {
            ansi_colors: false,
            unicode_glyphs: false,
        };
        let mut console = ConsoleInterface::new(GameService::new(Board::new()), display);
        let script = "select 0 1 4\nmove 0 3 4\nselect 5 5 5\nquit\nselect 0 6 0\n";
        let mut out = Vec::new();

        console.run_with(script.as_bytes(), &mut out).unwrap();

        let text = String::from_utf8(out).unwrap();
        assert!(text.contains("Error: no piece on (5, 5, 5)"));
        let pawn = console.game().board().piece_at(&Coordinate::new(0, 3, 4));
        assert!(pawn.is_some());
        // Nothing after 'quit' runs.
        assert!(console.game().selected().is_none());
    }
}
