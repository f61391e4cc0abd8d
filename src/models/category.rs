use serde::Serialize;
use std::fmt;

/// Fixed set of categories a time log entry can belong to.
/// Labels are matched exactly (case-sensitive) and are part of the API.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Category {
    #[serde(rename = "INVESTMENT")]
    Investment,
    #[serde(rename = "WORK")]
    Work,
    #[serde(rename = "TECH")]
    Tech,
    #[serde(rename = "PERSONAL TASKS")]
    PersonalTasks,
    #[serde(rename = "EXERCISE")]
    Exercise,
    #[serde(rename = "OTHER")]
    Other,
}

impl Category {
    pub const ALL: [Category; 6] = [
        Category::Investment,
        Category::Work,
        Category::Tech,
        Category::PersonalTasks,
        Category::Exercise,
        Category::Other,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            Category::Investment => "INVESTMENT",
            Category::Work => "WORK",
            Category::Tech => "TECH",
            Category::PersonalTasks => "PERSONAL TASKS",
            Category::Exercise => "EXERCISE",
            Category::Other => "OTHER",
        }
    }

    /// Convert enum → DB string
    pub fn to_db_str(&self) -> &'static str {
        self.label()
    }

    /// Convert DB / request string → enum (exact match, no case folding)
    pub fn from_label(s: &str) -> Option<Self> {
        Category::ALL.into_iter().find(|c| c.label() == s)
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}
