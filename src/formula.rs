use std::fmt;

use crate::element::Element;

/// Largest count the digit pad offers.
pub const MAX_COUNT: u8 = 9;

/// One term of a target formula as stored in the compound dataset.
///
/// Serialized untagged so `["H", 2, "O"]` maps onto
/// `[Symbol("H"), Count(2), Symbol("O")]`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
#[serde(untagged)]
pub enum FormulaTerm {
    Symbol(String),
    Count(u32),
}

impl fmt::Display for FormulaTerm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Symbol(symbol) => f.write_str(symbol),
            Self::Count(count) => write!(f, "{}", count),
        }
    }
}

/// One unit of a formula the player is building.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FormulaToken {
    Element(Element),
    Count(u8),
}

impl FormulaToken {
    /// Projection used when comparing against a target formula.
    pub fn to_term(&self) -> FormulaTerm {
        match self {
            Self::Element(element) => FormulaTerm::Symbol(element.symbol.clone()),
            Self::Count(count) => FormulaTerm::Count(u32::from(*count)),
        }
    }

    pub fn is_count(&self) -> bool {
        matches!(self, Self::Count(_))
    }
}

/// A display fragment: element symbols are drawn inline, counts as subscripts.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FormulaSegment {
    Symbol(String),
    Subscript(u32),
}

pub fn project(tokens: &[FormulaToken]) -> Vec<FormulaTerm> {
    tokens.iter().map(FormulaToken::to_term).collect()
}

pub fn segments(terms: &[FormulaTerm]) -> Vec<FormulaSegment> {
    terms
        .iter()
        .map(|term| match term {
            FormulaTerm::Symbol(symbol) => FormulaSegment::Symbol(symbol.clone()),
            FormulaTerm::Count(count) => FormulaSegment::Subscript(*count),
        })
        .collect()
}

/// `true` when no count leads the formula or follows another count, and
/// every count is positive.
pub fn is_well_formed(terms: &[FormulaTerm]) -> bool {
    let mut previous_was_symbol = false;

    for term in terms {
        match term {
            FormulaTerm::Symbol(_) => previous_was_symbol = true,
            FormulaTerm::Count(count) => {
                if !previous_was_symbol || *count == 0 {
                    return false;
                }
                previous_was_symbol = false;
            }
        }
    }

    true
}

/// `H2O` style rendering.
pub fn to_plain_string(terms: &[FormulaTerm]) -> String {
    terms.iter().map(ToString::to_string).collect()
}

/// `H₂O` style rendering with Unicode subscript digits.
pub fn to_subscript_string(terms: &[FormulaTerm]) -> String {
    let mut rendered = String::new();

    for term in terms {
        match term {
            FormulaTerm::Symbol(symbol) => rendered.push_str(symbol),
            FormulaTerm::Count(count) => {
                rendered.extend(count.to_string().chars().map(subscript_digit));
            }
        }
    }

    rendered
}

fn subscript_digit(digit: char) -> char {
    match digit {
        '0' => '₀',
        '1' => '₁',
        '2' => '₂',
        '3' => '₃',
        '4' => '₄',
        '5' => '₅',
        '6' => '₆',
        '7' => '₇',
        '8' => '₈',
        '9' => '₉',
        other => other,
    }
}
