use std::fmt;

/// Chemical family of an element, used for grouping and cell colouring.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "kebab-case", from = "String")]
pub enum ElementCategory {
    Nonmetal,
    NobleGas,
    AlkaliMetal,
    AlkalineEarthMetal,
    Metalloid,
    TransitionMetal,
    PostTransitionMetal,
    Lanthanide,
    Actinide,
    Unknown,
}

impl ElementCategory {
    /// Classifies a free-text category label such as `"diatomic nonmetal"` or
    /// `"unknown, probably transition metal"`.
    ///
    /// Speculative labels (anything starting with `unknown`) classify as
    /// [`ElementCategory::Unknown`] regardless of the predicted family.
    pub fn classify(label: &str) -> Self {
        let label = label.trim().to_ascii_lowercase().replace('-', " ");

        if label.starts_with("unknown") {
            Self::Unknown
        } else if label.contains("noble gas") {
            Self::NobleGas
        } else if label.contains("alkaline earth") {
            Self::AlkalineEarthMetal
        } else if label.contains("alkali") {
            Self::AlkaliMetal
        } else if label.contains("post transition") {
            Self::PostTransitionMetal
        } else if label.contains("transition") {
            Self::TransitionMetal
        } else if label.contains("metalloid") {
            Self::Metalloid
        } else if label.contains("nonmetal") {
            Self::Nonmetal
        } else if label.contains("lanthanide") {
            Self::Lanthanide
        } else if label.contains("actinide") {
            Self::Actinide
        } else {
            Self::Unknown
        }
    }

    /// Background and border classes for a periodic table cell.
    pub fn color_class(self) -> &'static str {
        match self {
            Self::Nonmetal => "bg-green-200 border-green-400",
            Self::NobleGas => "bg-purple-200 border-purple-400",
            Self::AlkaliMetal => "bg-red-200 border-red-400",
            Self::AlkalineEarthMetal => "bg-orange-200 border-orange-400",
            Self::Metalloid => "bg-yellow-200 border-yellow-400",
            Self::TransitionMetal => "bg-blue-200 border-blue-400",
            Self::PostTransitionMetal => "bg-cyan-200 border-cyan-400",
            Self::Lanthanide => "bg-indigo-200 border-indigo-400",
            Self::Actinide => "bg-pink-200 border-pink-400",
            Self::Unknown => "bg-gray-200 border-gray-400",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::Nonmetal => "nonmetal",
            Self::NobleGas => "noble gas",
            Self::AlkaliMetal => "alkali metal",
            Self::AlkalineEarthMetal => "alkaline earth metal",
            Self::Metalloid => "metalloid",
            Self::TransitionMetal => "transition metal",
            Self::PostTransitionMetal => "post-transition metal",
            Self::Lanthanide => "lanthanide",
            Self::Actinide => "actinide",
            Self::Unknown => "unknown",
        }
    }

    /// Lanthanides and actinides are drawn in their own rows below the main table.
    pub fn is_f_block(self) -> bool {
        matches!(self, Self::Lanthanide | Self::Actinide)
    }
}

impl From<String> for ElementCategory {
    fn from(label: String) -> Self {
        Self::classify(&label)
    }
}

impl fmt::Display for ElementCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Style token for a category; see [`ElementCategory::color_class`].
pub fn color_class_for(category: ElementCategory) -> &'static str {
    category.color_class()
}

/// A periodic table entry.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct Element {
    /// Chemical symbol, e.g. `Na`.
    pub symbol: String,
    /// English name, e.g. `Sodium`.
    pub name: String,
    #[serde(rename = "number")]
    pub atomic_number: u32,
    pub category: ElementCategory,
    /// 1-based column in the 18-column table.
    #[serde(rename = "xpos")]
    pub grid_column: u32,
    /// 1-based row; lanthanides and actinides sit below period 7.
    #[serde(rename = "ypos")]
    pub grid_row: u32,
}

impl Element {
    pub fn color_class(&self) -> &'static str {
        self.category.color_class()
    }
}

impl fmt::Display for Element {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({}, {})", self.symbol, self.atomic_number, self.name)
    }
}
