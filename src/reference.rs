use std::fs;
use std::path::Path;

use crate::compound::Compound;
use crate::element::Element;
use crate::periodic_table::TableLayout;

pub const ELEMENTS_FILE: &str = "periodic-table.json";
pub const COMPOUNDS_FILE: &str = "compounds.json";

const BUNDLED_ELEMENTS: &str = include_str!("../data/periodic-table.json");
const BUNDLED_COMPOUNDS: &str = include_str!("../data/compounds.json");

/// Immutable element and compound tables, loaded once at startup.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReferenceData {
    elements: Vec<Element>,
    compounds: Vec<Compound>,
}

#[derive(Debug, thiserror::Error)]
pub enum DataLoadError {
    #[error("failed to read dataset file at {path}: {source}")]
    ReadError {
        path: String,
        source: std::io::Error,
    },
    #[error("failed to parse dataset file at {path}: {source}")]
    ParseError {
        path: String,
        source: serde_json::Error,
    },
    #[error("element table is empty")]
    NoElements,
    #[error("compound list is empty")]
    NoCompounds,
}

impl PartialEq for DataLoadError {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Self::ReadError { path: left, .. }, Self::ReadError { path: right, .. }) => {
                left == right
            }
            (Self::ParseError { path: left, .. }, Self::ParseError { path: right, .. }) => {
                left == right
            }
            (Self::NoElements, Self::NoElements) => true,
            (Self::NoCompounds, Self::NoCompounds) => true,
            _ => false,
        }
    }
}

impl Eq for DataLoadError {}

#[derive(Debug, Clone, PartialEq, Eq, serde::Deserialize, serde::Serialize)]
pub struct ElementTable {
    pub elements: Vec<Element>,
}

impl ReferenceData {
    /// Builds the store, refusing empty tables: no challenge can be drawn
    /// without compounds and no formula built without elements.
    pub fn new(elements: Vec<Element>, compounds: Vec<Compound>) -> Result<Self, DataLoadError> {
        if elements.is_empty() {
            return Err(DataLoadError::NoElements);
        }

        if compounds.is_empty() {
            return Err(DataLoadError::NoCompounds);
        }

        log::info!(
            "reference data ready: {} elements, {} compounds",
            elements.len(),
            compounds.len()
        );

        Ok(Self {
            elements,
            compounds,
        })
    }

    /// The datasets compiled into the crate from `data/`.
    pub fn bundled() -> Result<Self, DataLoadError> {
        Self::from_json(BUNDLED_ELEMENTS, BUNDLED_COMPOUNDS)
    }

    pub fn from_json(elements_json: &str, compounds_json: &str) -> Result<Self, DataLoadError> {
        let elements = parse_elements(elements_json.as_bytes(), ELEMENTS_FILE)?;
        let compounds = parse_compounds(compounds_json.as_bytes(), COMPOUNDS_FILE)?;

        Self::new(elements, compounds)
    }

    pub fn from_files(
        elements_path: impl AsRef<Path>,
        compounds_path: impl AsRef<Path>,
    ) -> Result<Self, DataLoadError> {
        let elements_path = elements_path.as_ref();
        let compounds_path = compounds_path.as_ref();

        let elements = parse_elements(
            &read_file(elements_path)?,
            &elements_path.display().to_string(),
        )?;
        let compounds = parse_compounds(
            &read_file(compounds_path)?,
            &compounds_path.display().to_string(),
        )?;

        Self::new(elements, compounds)
    }

    /// Loads `periodic-table.json` and `compounds.json` from one directory.
    pub fn from_directory(root: impl AsRef<Path>) -> Result<Self, DataLoadError> {
        let root = root.as_ref();
        Self::from_files(root.join(ELEMENTS_FILE), root.join(COMPOUNDS_FILE))
    }

    pub fn list_elements(&self) -> &[Element] {
        &self.elements
    }

    pub fn list_compounds(&self) -> &[Compound] {
        &self.compounds
    }

    pub fn element_by_symbol(&self, symbol: &str) -> Option<&Element> {
        self.elements.iter().find(|element| element.symbol == symbol)
    }

    /// Case-insensitive lookup by English name.
    pub fn element_by_name(&self, name: &str) -> Option<&Element> {
        self.elements
            .iter()
            .find(|element| element.name.eq_ignore_ascii_case(name))
    }

    pub fn table_layout(&self) -> TableLayout {
        TableLayout::from_elements(&self.elements)
    }
}

pub fn parse_elements(data: &[u8], path: &str) -> Result<Vec<Element>, DataLoadError> {
    let parsed: ElementTable =
        serde_json::from_slice(data).map_err(|source| DataLoadError::ParseError {
            path: path.to_string(),
            source,
        })?;

    Ok(parsed.elements)
}

pub fn parse_compounds(data: &[u8], path: &str) -> Result<Vec<Compound>, DataLoadError> {
    serde_json::from_slice(data).map_err(|source| DataLoadError::ParseError {
        path: path.to_string(),
        source,
    })
}

fn read_file(path: &Path) -> Result<Vec<u8>, DataLoadError> {
    fs::read(path).map_err(|source| {
        log::error!("could not read {}: {}", path.display(), source);
        DataLoadError::ReadError {
            path: path.display().to_string(),
            source,
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::element::ElementCategory;
    use crate::formula::FormulaTerm;
    use std::path::PathBuf;

    const ELEMENTS: &str = r#"{
        "elements": [
            { "name": "Hydrogen", "symbol": "H", "number": 1, "category": "diatomic nonmetal", "xpos": 1, "ypos": 1 },
            { "name": "Oxygen", "symbol": "O", "number": 8, "category": "diatomic nonmetal", "xpos": 16, "ypos": 2 }
        ]
    }"#;

    const COMPOUNDS: &str = r#"[
        { "name": "Water", "formula": ["H", 2, "O"] },
        { "name": "Hydrogen Peroxide", "formula": ["H", 2, "O", 2] }
    ]"#;

    #[test]
    fn parses_inline_datasets() {
        let data = ReferenceData::from_json(ELEMENTS, COMPOUNDS).expect("datasets should parse");

        assert_eq!(data.list_elements().len(), 2);
        assert_eq!(data.list_compounds().len(), 2);
        assert_eq!(data.list_compounds()[0].name, "Water");
        assert_eq!(
            data.list_compounds()[1].formula.last(),
            Some(&FormulaTerm::Count(2))
        );
    }

    #[test]
    fn looks_up_elements_by_symbol_and_name() {
        let data = ReferenceData::from_json(ELEMENTS, COMPOUNDS).expect("datasets should parse");

        let oxygen = data.element_by_symbol("O").expect("oxygen exists");
        assert_eq!(oxygen.atomic_number, 8);
        assert_eq!(oxygen.category, ElementCategory::Nonmetal);

        let hydrogen = data.element_by_name("hydrogen").expect("hydrogen exists");
        assert_eq!(hydrogen.symbol, "H");

        assert!(data.element_by_symbol("o").is_none());
        assert!(data.element_by_symbol("Xx").is_none());
    }

    #[test]
    fn empty_compound_list_is_fatal() {
        let error = ReferenceData::from_json(ELEMENTS, "[]").expect_err("empty list should fail");
        assert_eq!(error, DataLoadError::NoCompounds);
    }

    #[test]
    fn empty_element_table_is_fatal() {
        let error = ReferenceData::from_json(r#"{ "elements": [] }"#, COMPOUNDS)
            .expect_err("empty table should fail");
        assert_eq!(error, DataLoadError::NoElements);
    }

    #[test]
    fn malformed_json_reports_file() {
        let error = ReferenceData::from_json(ELEMENTS, r#"[{ "name": "Water" }]"#)
            .expect_err("missing formula should fail");

        assert_eq!(
            error,
            DataLoadError::ParseError {
                path: COMPOUNDS_FILE.to_string(),
                source: serde_json::from_str::<()>("x").unwrap_err(),
            }
        );
    }

    #[test]
    fn loads_datasets_from_directory() {
        let root = tempfile::tempdir().expect("temporary directory should be created");
        write_file(root.path().join(ELEMENTS_FILE), ELEMENTS);
        write_file(root.path().join(COMPOUNDS_FILE), COMPOUNDS);

        let data = ReferenceData::from_directory(root.path()).expect("directory should load");

        assert_eq!(data.list_elements().len(), 2);
        assert_eq!(data.list_compounds()[1].name, "Hydrogen Peroxide");
    }

    #[test]
    fn missing_file_reports_read_error() {
        let root = tempfile::tempdir().expect("temporary directory should be created");
        write_file(root.path().join(ELEMENTS_FILE), ELEMENTS);

        let error =
            ReferenceData::from_directory(root.path()).expect_err("missing compounds should fail");

        assert_eq!(
            error,
            DataLoadError::ReadError {
                path: root.path().join(COMPOUNDS_FILE).display().to_string(),
                source: std::io::Error::from(std::io::ErrorKind::NotFound),
            }
        );
    }

    fn write_file(path: impl Into<PathBuf>, contents: &str) {
        fs::write(path.into(), contents).expect("dataset should be written");
    }
}
