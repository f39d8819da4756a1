use crate::game::GameStatus;

/// Language of the bundled interface labels.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Locale {
    #[default]
    Thai,
    English,
}

impl Locale {
    pub fn toggled(self) -> Self {
        match self {
            Self::Thai => Self::English,
            Self::English => Self::Thai,
        }
    }
}

/// Static labels for one locale.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UiStrings {
    pub title: &'static str,
    pub score: &'static str,
    pub numbers_heading: &'static str,
    pub formula_placeholder: &'static str,
    pub backspace: &'static str,
    pub clear: &'static str,
    pub check: &'static str,
    pub next_challenge: &'static str,
    pub correct: &'static str,
    pub incorrect: &'static str,
    pub switch_locale: &'static str,
}

static THAI: UiStrings = UiStrings {
    title: "เกมทายสูตรโมเลกุล",
    score: "คะแนน",
    numbers_heading: "ตัวเลขสำหรับสูตร",
    formula_placeholder: "สร้างสูตร",
    backspace: "ลบ",
    clear: "ล้าง",
    check: "ตรวจคำตอบ",
    next_challenge: "โจทย์ถัดไป!",
    correct: "ถูกต้อง!",
    incorrect: "ลองอีกครั้ง",
    switch_locale: "English",
};

static ENGLISH: UiStrings = UiStrings {
    title: "Molecular Formula Game",
    score: "Score",
    numbers_heading: "Subscripts",
    formula_placeholder: "Build a formula",
    backspace: "Delete",
    clear: "Clear",
    check: "Check answer",
    next_challenge: "Next challenge!",
    correct: "Correct!",
    incorrect: "Try again",
    switch_locale: "ภาษาไทย",
};

impl UiStrings {
    pub fn for_locale(locale: Locale) -> &'static UiStrings {
        match locale {
            Locale::Thai => &THAI,
            Locale::English => &ENGLISH,
        }
    }

    /// Feedback line for a status; nothing is shown while playing.
    pub fn status_message(&self, status: GameStatus) -> Option<&'static str> {
        match status {
            GameStatus::Playing => None,
            GameStatus::Correct => Some(self.correct),
            GameStatus::Incorrect => Some(self.incorrect),
        }
    }
}
