//! Supported display languages.

use std::fmt;

use serde::{Deserialize, Serialize};

/// A display language. Stored as its ISO 639-1 code.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Language {
    #[default]
    #[serde(rename = "en")]
    English,
    #[serde(rename = "my")]
    Myanmar,
}

impl Language {
    pub const ALL: [Language; 2] = [Language::English, Language::Myanmar];

    /// ISO 639-1 code (e.g., "en", "my").
    pub fn code(&self) -> &'static str {
        match self {
            Language::English => "en",
            Language::Myanmar => "my",
        }
    }

    /// Label shown on the language switch.
    pub fn short_label(&self) -> &'static str {
        match self {
            Language::English => "EN",
            Language::Myanmar => "MY",
        }
    }

    /// The other language. The switch only ever cycles between the two.
    pub fn toggled(self) -> Self {
        match self {
            Language::English => Language::Myanmar,
            Language::Myanmar => Language::English,
        }
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}
