//! Line-oriented front end: one command per line on stdin, state printed after
//! each command.

use std::io::{self, BufRead, Write};

use rand::Rng;

use crate::formula;
use crate::game::{FormulaGame, GameStatus};
use crate::reference::ReferenceData;
use crate::strings::UiStrings;

pub const HELP: &str = "commands: <symbol> (e.g. Na), 1-9, back, clear, check, next, help, quit";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Element(String),
    Number(u8),
    Backspace,
    Clear,
    Check,
    Next,
    Help,
    Quit,
}

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum CommandError {
    #[error("empty input")]
    Empty,
    #[error("unrecognised input: {0}")]
    Unrecognised(String),
}

impl Command {
    pub fn parse(line: &str) -> Result<Self, CommandError> {
        let input = line.trim();

        if input.is_empty() {
            return Err(CommandError::Empty);
        }

        let keyword = match input.to_ascii_lowercase().as_str() {
            "back" | "backspace" | "del" => Some(Self::Backspace),
            "clear" => Some(Self::Clear),
            "check" => Some(Self::Check),
            "next" => Some(Self::Next),
            "help" | "?" => Some(Self::Help),
            "quit" | "exit" => Some(Self::Quit),
            _ => None,
        };

        if let Some(command) = keyword {
            return Ok(command);
        }

        if input.chars().all(|c| c.is_ascii_digit()) {
            return input
                .parse()
                .map(Self::Number)
                .map_err(|_| CommandError::Unrecognised(input.to_string()));
        }

        let mut chars = input.chars();
        let looks_like_symbol = chars.next().is_some_and(|c| c.is_ascii_uppercase())
            && chars.all(|c| c.is_ascii_lowercase())
            && input.len() <= 3;

        if looks_like_symbol {
            Ok(Self::Element(input.to_string()))
        } else {
            Err(CommandError::Unrecognised(input.to_string()))
        }
    }
}

/// Score, target, formula so far and the status line.
pub fn render(game: &FormulaGame, strings: &UiStrings) -> String {
    let attempt = game.attempt();
    let formula = if attempt.is_empty() {
        strings.formula_placeholder.to_string()
    } else {
        formula::to_subscript_string(&attempt)
    };

    let mut lines = vec![
        format!("{}: {}", strings.score, game.score()),
        strings.title.to_string(),
        game.current_compound().name.clone(),
        format!("> {}", formula),
    ];

    if let Some(message) = strings.status_message(game.status()) {
        lines.push(message.to_string());
    }

    lines.join("\n")
}

/// Runs a session until `quit` or end of input.
pub fn run<B, W, R>(
    input: B,
    output: &mut W,
    data: &ReferenceData,
    game: &mut FormulaGame,
    rng: &mut R,
    strings: &UiStrings,
) -> io::Result<()>
where
    B: BufRead,
    W: Write,
    R: Rng + ?Sized,
{
    writeln!(output, "{}", HELP)?;
    writeln!(output, "{}", render(game, strings))?;

    for line in input.lines() {
        let command = match Command::parse(&line?) {
            Ok(command) => command,
            Err(CommandError::Empty) => continue,
            Err(error) => {
                writeln!(output, "{}", error)?;
                continue;
            }
        };

        match command {
            Command::Quit => break,
            Command::Help => {
                writeln!(output, "{}", HELP)?;
                continue;
            }
            Command::Element(symbol) => match data.element_by_symbol(&symbol) {
                Some(element) => {
                    if let Err(error) = game.select_element(element) {
                        writeln!(output, "{}", error)?;
                    }
                }
                None => writeln!(output, "unknown element: {}", symbol)?,
            },
            Command::Number(count) => {
                if let Err(error) = game.select_number(count) {
                    writeln!(output, "{}", error)?;
                }
            }
            Command::Backspace => {
                game.backspace();
            }
            Command::Clear => game.clear(),
            Command::Check => {
                game.check_answer();
            }
            Command::Next => {
                if game.status() == GameStatus::Correct {
                    game.start_new_challenge(rng);
                } else {
                    writeln!(output, "solve the current formula first")?;
                }
            }
        }

        writeln!(output, "{}", render(game, strings))?;
    }

    Ok(())
}
