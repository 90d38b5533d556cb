//! Line-oriented command parsing for the terminal backend.

use arena_layout_core::{CellCoord, EditMode, HazardId};
use arena_layout_rendering::FrameInput;
use thiserror::Error;

/// Usage summary printed by the `help` command.
pub(crate) const HELP: &str = "\
commands:
  click <x> <y>          activate the grid cell at column x, row y
  mode hazards|floor     switch between moving hazards and editing the floor
  pick <id>              select a hazard from the list
  deselect               clear the current selection
  print                  show the printable layout sheet
  help                   show this summary
  quit                   leave the editor";

/// Action requested by a single line of terminal input.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LineCommand {
    /// Input that feeds one frame of the editor.
    Frame(FrameInput),
    /// Show the print sheet.
    Print,
    /// Show the usage summary.
    Help,
    /// Leave the editor.
    Quit,
}

/// Reasons a line of terminal input may be rejected.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum InputError {
    /// The line held no command.
    #[error("no command given")]
    Empty,
    /// The command word is not recognised.
    #[error("unknown command `{0}`")]
    UnknownCommand(String),
    /// A required argument was not supplied.
    #[error("`{command}` needs {argument}")]
    MissingArgument {
        /// Command that was missing an argument.
        command: &'static str,
        /// Description of the missing argument.
        argument: &'static str,
    },
    /// An argument could not be read as a non-negative integer.
    #[error("`{0}` is not a non-negative whole number")]
    InvalidNumber(String),
    /// The requested mode does not exist.
    #[error("unknown mode `{0}`, expected `hazards` or `floor`")]
    UnknownMode(String),
    /// Extra words followed a complete command.
    #[error("unexpected input `{0}`")]
    TrailingInput(String),
}

/// Parses one line of terminal input.
pub fn parse_line(line: &str) -> Result<LineCommand, InputError> {
    let mut words = line.split_whitespace();
    let command = words.next().ok_or(InputError::Empty)?;

    let parsed = match command.to_ascii_lowercase().as_str() {
        "click" | "c" => {
            let column = number(words.next(), "click", "a column and a row")?;
            let row = number(words.next(), "click", "a column and a row")?;
            LineCommand::Frame(FrameInput {
                activated_cell: Some(CellCoord::new(column, row)),
                ..FrameInput::default()
            })
        }
        "mode" | "m" => {
            let word = words.next().ok_or(InputError::MissingArgument {
                command: "mode",
                argument: "`hazards` or `floor`",
            })?;
            LineCommand::Frame(FrameInput {
                mode_request: Some(parse_mode(word)?),
                ..FrameInput::default()
            })
        }
        "pick" | "p" => {
            let id = number(words.next(), "pick", "a hazard id")?;
            LineCommand::Frame(FrameInput {
                picked_hazard: Some(HazardId::new(id)),
                ..FrameInput::default()
            })
        }
        "deselect" | "d" => LineCommand::Frame(FrameInput {
            deselect: true,
            ..FrameInput::default()
        }),
        "print" => LineCommand::Print,
        "help" | "?" => LineCommand::Help,
        "quit" | "exit" | "q" => LineCommand::Quit,
        _ => return Err(InputError::UnknownCommand(command.to_owned())),
    };

    match words.next() {
        Some(extra) => Err(InputError::TrailingInput(extra.to_owned())),
        None => Ok(parsed),
    }
}

fn number(
    word: Option<&str>,
    command: &'static str,
    argument: &'static str,
) -> Result<u32, InputError> {
    let word = word.ok_or(InputError::MissingArgument { command, argument })?;
    word.parse::<u32>()
        .map_err(|_| InputError::InvalidNumber(word.to_owned()))
}

fn parse_mode(word: &str) -> Result<EditMode, InputError> {
    match word.to_ascii_lowercase().as_str() {
        "hazards" | "hazard" | "move" => Ok(EditMode::HazardPlacement),
        "floor" | "tiles" => Ok(EditMode::FloorEdit),
        _ => Err(InputError::UnknownMode(word.to_owned())),
    }
}
