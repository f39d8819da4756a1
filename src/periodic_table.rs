use crate::element::{Element, ElementCategory};

/// An element together with the grid cell it is drawn in.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlacedElement {
    pub element: Element,
    pub column: u32,
    pub row: u32,
}

/// The periodic table split into the way it is drawn: the 18-column main
/// block, then the lanthanide and actinide series as separate one-row grids.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct TableLayout {
    pub main: Vec<PlacedElement>,
    pub lanthanides: Vec<PlacedElement>,
    pub actinides: Vec<PlacedElement>,
}

pub const MAIN_COLUMNS: u32 = 18;
pub const SERIES_COLUMNS: u32 = 15;

impl TableLayout {
    pub fn from_elements(elements: &[Element]) -> Self {
        let mut layout = Self::default();

        for element in elements {
            match element.category {
                ElementCategory::Lanthanide => push_series(&mut layout.lanthanides, element),
                ElementCategory::Actinide => push_series(&mut layout.actinides, element),
                _ => layout.main.push(PlacedElement {
                    element: element.clone(),
                    column: element.grid_column,
                    row: element.grid_row,
                }),
            }
        }

        layout
    }

    pub fn len(&self) -> usize {
        self.main.len() + self.lanthanides.len() + self.actinides.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

// Series cells are placed by order of appearance, not by their own grid position.
fn push_series(series: &mut Vec<PlacedElement>, element: &Element) {
    let column = series.len() as u32 + 1;
    series.push(PlacedElement {
        element: element.clone(),
        column,
        row: 1,
    });
}
