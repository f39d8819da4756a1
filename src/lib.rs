pub mod compound;
pub mod config;
pub mod demo;
pub mod element;
pub mod formula;
pub mod game;
pub mod logging;
pub mod periodic_table;
pub mod reference;
pub mod strings;
pub mod terminal;
#[cfg(target_arch = "wasm32")]
pub mod ui;

pub use compound::Compound;
pub use config::{AppConfig, ConfigError, Theme};
pub use demo::demo_compounds;
pub use element::{Element, ElementCategory, color_class_for};
pub use formula::{FormulaSegment, FormulaTerm, FormulaToken};
pub use game::{FormulaGame, GameError, GameState, GameStatus, MoveError};
pub use periodic_table::{PlacedElement, TableLayout};
pub use reference::{DataLoadError, ReferenceData};
pub use strings::{Locale, UiStrings};
