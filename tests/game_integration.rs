use chemformula::{
    FormulaGame, FormulaTerm, FormulaToken, GameStatus, MoveError, ReferenceData, demo_compounds,
};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

fn bundled() -> ReferenceData {
    ReferenceData::bundled().expect("bundled data should load")
}

fn water_game() -> FormulaGame {
    let water = demo_compounds()
        .into_iter()
        .filter(|compound| compound.name == "Water")
        .collect();
    let mut rng = StdRng::seed_from_u64(0);

    FormulaGame::new(&mut rng, water).expect("water game should start")
}

fn select(game: &mut FormulaGame, data: &ReferenceData, symbol: &str) {
    let element = data.element_by_symbol(symbol).expect("symbol should exist");
    game.select_element(element).expect("element should be accepted");
}

#[test]
fn water_scenario_scores_once() {
    let data = bundled();
    let mut game = water_game();

    select(&mut game, &data, "H");
    game.select_number(2).expect("count should be accepted");
    select(&mut game, &data, "O");

    assert_eq!(game.check_answer(), GameStatus::Correct);
    assert_eq!(game.score(), 1);
}

#[test]
fn water_without_count_is_incorrect() {
    let data = bundled();
    let mut game = water_game();

    select(&mut game, &data, "H");
    select(&mut game, &data, "O");

    assert_eq!(game.check_answer(), GameStatus::Incorrect);
    assert_eq!(game.score(), 0);
    assert_eq!(
        game.attempt(),
        vec![
            FormulaTerm::Symbol("H".to_string()),
            FormulaTerm::Symbol("O".to_string())
        ]
    );
}

#[test]
fn leading_count_is_ignored() {
    let mut game = water_game();

    assert_eq!(game.select_number(3), Err(MoveError::CountWithoutElement));
    assert!(game.tokens().is_empty());
}

#[test]
fn clear_then_check_is_incorrect() {
    let data = bundled();
    let mut game = water_game();

    select(&mut game, &data, "H");
    game.clear();

    assert_eq!(game.check_answer(), GameStatus::Incorrect);
}

#[test]
fn random_edit_sequences_never_record_misplaced_counts() {
    let data = bundled();
    let elements = data.list_elements();
    let mut rng = StdRng::seed_from_u64(2024);
    let mut game =
        FormulaGame::new(&mut rng, data.list_compounds().to_vec()).expect("game should start");

    for _ in 0..2_000 {
        match rng.gen_range(0..6) {
            0 | 1 => {
                let element = &elements[rng.gen_range(0..elements.len())];
                let _ = game.select_element(element);
            }
            2 | 3 => {
                let _ = game.select_number(rng.gen_range(0..=10));
            }
            4 => {
                game.backspace();
            }
            _ => {
                if game.check_answer() == GameStatus::Correct {
                    game.start_new_challenge(&mut rng);
                }
            }
        }

        let tokens = game.tokens();
        if let Some(first) = tokens.first() {
            assert!(!first.is_count(), "count recorded as first token");
        }
        assert!(
            tokens
                .windows(2)
                .all(|pair| !(pair[0].is_count() && pair[1].is_count())),
            "count recorded after another count"
        );
        assert!(tokens.iter().all(|token| match token {
            FormulaToken::Count(count) => (1..=9).contains(count),
            FormulaToken::Element(_) => true,
        }));
    }
}

#[test]
fn check_is_correct_exactly_when_projection_matches() {
    let data = bundled();
    let mut rng = StdRng::seed_from_u64(77);
    let mut game =
        FormulaGame::new(&mut rng, data.list_compounds().to_vec()).expect("game should start");

    for _ in 0..200 {
        let target = game.current_compound().formula.clone();

        // Rebuild the target, then perturb it half of the time.
        for term in &target {
            match term {
                FormulaTerm::Symbol(symbol) => select(&mut game, &data, symbol),
                FormulaTerm::Count(count) => game
                    .select_number(*count as u8)
                    .expect("bundled counts fit the digit pad"),
            }
        }
        let perturb = rng.gen_bool(0.5);
        if perturb {
            game.backspace();
        }

        let before = game.tokens().to_vec();
        let score_before = game.score();
        let status = game.check_answer();

        if game.attempt() == target {
            assert_eq!(status, GameStatus::Correct);
            assert_eq!(game.score(), score_before + 1);
        } else {
            assert_eq!(status, GameStatus::Incorrect);
            assert_eq!(game.tokens(), before.as_slice());
            assert_eq!(game.score(), score_before);
        }

        game.start_new_challenge(&mut rng);
    }
}

#[test]
fn solved_round_is_frozen_until_next_challenge() {
    let data = bundled();
    let mut game = water_game();

    select(&mut game, &data, "H");
    game.select_number(2).expect("count should be accepted");
    select(&mut game, &data, "O");
    game.check_answer();

    let frozen = game.state().clone();
    let oxygen = data.element_by_symbol("O").expect("oxygen exists");

    assert_eq!(game.select_element(oxygen), Err(MoveError::Solved));
    assert_eq!(game.select_number(2), Err(MoveError::Solved));
    assert_eq!(game.state(), &frozen);

    let mut rng = StdRng::seed_from_u64(5);
    game.start_new_challenge(&mut rng);

    assert_eq!(game.status(), GameStatus::Playing);
    assert!(game.select_element(oxygen).is_ok());
    assert_eq!(game.score(), 1);
}

#[test]
fn backspace_on_empty_formula_does_nothing() {
    let mut game = water_game();

    assert!(game.backspace().is_none());
    assert!(game.tokens().is_empty());
    assert_eq!(game.status(), GameStatus::Playing);
}
