use crate::Compound;
use crate::formula::FormulaTerm;

#[cfg(test)]
use crate::FormulaGame;
#[cfg(test)]
use rand::SeedableRng;

fn symbol(value: &str) -> FormulaTerm {
    FormulaTerm::Symbol(value.to_string())
}

fn count(value: u32) -> FormulaTerm {
    FormulaTerm::Count(value)
}

/// A small hand-checked compound pool.
pub fn demo_compounds() -> Vec<Compound> {
    vec![
        Compound::new("Water", vec![symbol("H"), count(2), symbol("O")]),
        Compound::new("Carbon Dioxide", vec![symbol("C"), symbol("O"), count(2)]),
        Compound::new("Methane", vec![symbol("C"), symbol("H"), count(4)]),
        Compound::new("Ammonia", vec![symbol("N"), symbol("H"), count(3)]),
        Compound::new(
            "Sulfuric Acid",
            vec![symbol("H"), count(2), symbol("S"), symbol("O"), count(4)],
        ),
        Compound::new("Sodium Chloride", vec![symbol("Na"), symbol("Cl")]),
        Compound::new(
            "Hydrogen Peroxide",
            vec![symbol("H"), count(2), symbol("O"), count(2)],
        ),
    ]
}
