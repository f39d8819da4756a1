#[cfg(target_arch = "wasm32")]
fn main() {
    console_error_panic_hook::set_once();
    let _ = chemformula::logging::init(log::LevelFilter::Info);
    chemformula::ui::mount();
}

#[cfg(not(target_arch = "wasm32"))]
fn main() -> std::process::ExitCode {
    use std::io;
    use std::process::ExitCode;

    use chemformula::config::CONFIG_ENV;
    use chemformula::{AppConfig, FormulaGame, ReferenceData, UiStrings, logging, terminal};
    use rand::SeedableRng;

    let config = match std::env::var(CONFIG_ENV) {
        Ok(path) => match AppConfig::from_file(&path) {
            Ok(config) => config,
            Err(error) => {
                eprintln!("{}", error);
                return ExitCode::FAILURE;
            }
        },
        Err(_) => AppConfig::default(),
    };

    let _ = logging::init(log::LevelFilter::Info);
    log::set_max_level(config.level_filter());

    let data = match ReferenceData::bundled() {
        Ok(data) => data,
        Err(error) => {
            log::error!("cannot load reference data: {}", error);
            return ExitCode::FAILURE;
        }
    };

    let mut rng = rand::rngs::StdRng::from_entropy();
    let mut game = match FormulaGame::new(&mut rng, data.list_compounds().to_vec()) {
        Ok(game) => game,
        Err(error) => {
            log::error!("cannot start game: {}", error);
            return ExitCode::FAILURE;
        }
    };

    let stdin = io::stdin();
    let mut stdout = io::stdout();
    let strings = UiStrings::for_locale(config.locale);

    match terminal::run(stdin.lock(), &mut stdout, &data, &mut game, &mut rng, strings) {
        Ok(()) => ExitCode::SUCCESS,
        Err(error) => {
            log::error!("terminal session failed: {}", error);
            ExitCode::FAILURE
        }
    }
}
