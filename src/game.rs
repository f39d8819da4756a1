use rand::Rng;

use crate::compound::Compound;
use crate::element::Element;
use crate::formula::{self, FormulaSegment, FormulaTerm, FormulaToken, MAX_COUNT};

/// Outcome of the most recent check.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum GameStatus {
    /// Building; nothing checked since the last edit.
    #[default]
    Playing,
    /// The formula matched. Element and count selection is closed until the
    /// next challenge.
    Correct,
    /// The last check failed; any edit returns to `Playing`.
    Incorrect,
}

/// Why an edit was refused. Refused edits never change the game state.
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum MoveError {
    #[error("the formula is already solved; start a new challenge")]
    Solved,
    #[error("a count can only follow an element")]
    CountWithoutElement,
    #[error("count must be between 1 and 9, got {value}")]
    CountOutOfRange { value: u8 },
}

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum GameError {
    #[error("at least one compound is required to start a challenge")]
    NoCompounds,
}

/// Everything a front end renders from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameState {
    pub current_compound: Compound,
    pub user_tokens: Vec<FormulaToken>,
    pub status: GameStatus,
    pub score: u32,
}

/// The formula-building controller.
///
/// Owns the compound pool and a single [`GameState`]. Randomness is passed in
/// per call so tests can drive it with a seeded generator.
#[derive(Debug, Clone)]
pub struct FormulaGame {
    compounds: Vec<Compound>,
    state: GameState,
}

impl FormulaGame {
    /// Creates a controller and draws the first challenge.
    ///
    /// # Errors
    /// Returns [`GameError::NoCompounds`] when `compounds` is empty.
    pub fn new<R: Rng + ?Sized>(
        rng: &mut R,
        compounds: Vec<Compound>,
    ) -> Result<Self, GameError> {
        if compounds.is_empty() {
            return Err(GameError::NoCompounds);
        }

        let first = compounds[rng.gen_range(0..compounds.len())].clone();
        log::debug!("first challenge: {}", first);

        Ok(Self {
            compounds,
            state: GameState {
                current_compound: first,
                user_tokens: Vec::new(),
                status: GameStatus::Playing,
                score: 0,
            },
        })
    }

    /// Draws a compound uniformly at random (repeats allowed) and resets the
    /// formula. The score carries over.
    pub fn start_new_challenge<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        let index = rng.gen_range(0..self.compounds.len());
        self.state.current_compound = self.compounds[index].clone();
        self.state.user_tokens.clear();
        self.state.status = GameStatus::Playing;

        log::debug!("new challenge: {}", self.state.current_compound);
    }

    /// Appends `element` to the formula and returns the round to `Playing`.
    ///
    /// # Errors
    /// Returns [`MoveError::Solved`] once the current formula has been checked
    /// as correct.
    pub fn select_element(&mut self, element: &Element) -> Result<(), MoveError> {
        if self.state.status == GameStatus::Correct {
            return Err(reject(MoveError::Solved));
        }

        self.state
            .user_tokens
            .push(FormulaToken::Element(element.clone()));
        self.state.status = GameStatus::Playing;
        Ok(())
    }

    /// Appends a count after the last element and returns the round to `Playing`.
    ///
    /// # Errors
    /// * Returns [`MoveError::Solved`] once the current formula has been checked
    ///   as correct.
    /// * Returns [`MoveError::CountOutOfRange`] if `count` is not in `1..=9`.
    /// * Returns [`MoveError::CountWithoutElement`] if the formula is empty or
    ///   already ends with a count.
    pub fn select_number(&mut self, count: u8) -> Result<(), MoveError> {
        if self.state.status == GameStatus::Correct {
            return Err(reject(MoveError::Solved));
        }

        if !(1..=MAX_COUNT).contains(&count) {
            return Err(reject(MoveError::CountOutOfRange { value: count }));
        }

        match self.state.user_tokens.last() {
            Some(FormulaToken::Element(_)) => {
                self.state.user_tokens.push(FormulaToken::Count(count));
                self.state.status = GameStatus::Playing;
                Ok(())
            }
            _ => Err(reject(MoveError::CountWithoutElement)),
        }
    }

    /// Removes and returns the last token. Empty formulas are left alone.
    pub fn backspace(&mut self) -> Option<FormulaToken> {
        self.state.status = GameStatus::Playing;
        self.state.user_tokens.pop()
    }

    pub fn clear(&mut self) {
        self.state.user_tokens.clear();
        self.state.status = GameStatus::Playing;
    }

    /// Compares the built formula against the target, term by term.
    ///
    /// A solved round stays solved and is not scored twice.
    pub fn check_answer(&mut self) -> GameStatus {
        if self.state.status == GameStatus::Correct {
            return GameStatus::Correct;
        }

        let attempt = formula::project(&self.state.user_tokens);

        if attempt == self.state.current_compound.formula {
            self.state.status = GameStatus::Correct;
            self.state.score += 1;
            log::info!(
                "correct: {} = {} (score {})",
                self.state.current_compound.name,
                formula::to_plain_string(&attempt),
                self.state.score
            );
        } else {
            self.state.status = GameStatus::Incorrect;
            log::info!(
                "incorrect: {} is not {}",
                formula::to_plain_string(&attempt),
                self.state.current_compound.name
            );
        }

        self.state.status
    }

    pub fn state(&self) -> &GameState {
        &self.state
    }

    pub fn current_compound(&self) -> &Compound {
        &self.state.current_compound
    }

    pub fn tokens(&self) -> &[FormulaToken] {
        &self.state.user_tokens
    }

    pub fn status(&self) -> GameStatus {
        self.state.status
    }

    pub fn score(&self) -> u32 {
        self.state.score
    }

    pub fn compounds(&self) -> &[Compound] {
        &self.compounds
    }

    /// The built formula projected to comparable terms.
    pub fn attempt(&self) -> Vec<FormulaTerm> {
        formula::project(&self.state.user_tokens)
    }

    pub fn formula_segments(&self) -> Vec<FormulaSegment> {
        formula::segments(&self.attempt())
    }

    /// The check action is offered until the round is solved.
    pub fn can_check(&self) -> bool {
        self.state.status != GameStatus::Correct
    }

    /// The next-challenge action is offered only once the round is solved.
    pub fn can_advance(&self) -> bool {
        self.state.status == GameStatus::Correct
    }
}

fn reject(error: MoveError) -> MoveError {
    log::debug!("edit ignored: {}", error);
    error
}
