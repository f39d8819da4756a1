use std::fmt;

use crate::formula::{self, FormulaTerm, MAX_COUNT};

/// A named target formula the player has to rebuild.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct Compound {
    /// Name shown as the challenge prompt.
    pub name: String,
    /// Ordered element symbols and counts, e.g. `["H", 2, "O"]`.
    pub formula: Vec<FormulaTerm>,
}

impl Compound {
    pub fn new(name: impl Into<String>, formula: Vec<FormulaTerm>) -> Self {
        Self {
            name: name.into(),
            formula,
        }
    }

    pub fn formula_string(&self) -> String {
        formula::to_plain_string(&self.formula)
    }

    /// Element symbols in formula order, counts skipped.
    pub fn symbols(&self) -> impl Iterator<Item = &str> {
        self.formula.iter().filter_map(|term| match term {
            FormulaTerm::Symbol(symbol) => Some(symbol.as_str()),
            FormulaTerm::Count(_) => None,
        })
    }

    pub fn is_well_formed(&self) -> bool {
        formula::is_well_formed(&self.formula)
    }

    /// Whether the formula can be entered with the 1–9 digit pad.
    pub fn is_buildable(&self) -> bool {
        self.is_well_formed()
            && self.formula.iter().all(|term| match term {
                FormulaTerm::Symbol(_) => true,
                FormulaTerm::Count(count) => *count <= u32::from(MAX_COUNT),
            })
    }
}

impl fmt::Display for Compound {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.name, self.formula_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn symbol(value: &str) -> FormulaTerm {
        FormulaTerm::Symbol(value.to_string())
    }

    fn sulfuric_acid() -> Compound {
        Compound::new(
            "Sulfuric Acid",
            vec![
                symbol("H"),
                FormulaTerm::Count(2),
                symbol("S"),
                symbol("O"),
                FormulaTerm::Count(4),
            ],
        )
    }

    #[test]
    fn formula_string_concatenates_terms() {
        assert_eq!(sulfuric_acid().formula_string(), "H2SO4");
    }

    #[test]
    fn symbols_skip_counts() {
        let compound = sulfuric_acid();
        let symbols: Vec<&str> = compound.symbols().collect();
        assert_eq!(symbols, vec!["H", "S", "O"]);
    }

    #[test]
    fn display_trait_includes_name_and_formula() {
        let formatted = format!("{}", sulfuric_acid());
        assert_eq!(formatted, "Sulfuric Acid: H2SO4");
    }

    #[test]
    fn glucose_is_well_formed_but_not_buildable() {
        let glucose = Compound::new(
            "Glucose",
            vec![
                symbol("C"),
                FormulaTerm::Count(6),
                symbol("H"),
                FormulaTerm::Count(12),
                symbol("O"),
                FormulaTerm::Count(6),
            ],
        );

        assert!(glucose.is_well_formed());
        assert!(!glucose.is_buildable());
    }

    #[test]
    fn parses_reference_json() {
        let json = r#"{ "name": "Carbon Dioxide", "formula": ["C", "O", 2] }"#;

        let parsed: Compound = serde_json::from_str(json).expect("compound should parse");

        assert_eq!(parsed.name, "Carbon Dioxide");
        assert_eq!(
            parsed.formula,
            vec![symbol("C"), symbol("O"), FormulaTerm::Count(2)]
        );
        assert!(parsed.is_buildable());
    }

    #[test]
    fn rejects_negative_counts() {
        let json = r#"{ "name": "Broken", "formula": ["H", -2] }"#;

        assert!(serde_json::from_str::<Compound>(json).is_err());
    }
}
