use std::fmt;

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub name: String,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    pub fn toggled(self) -> Self {
        match self {
            Theme::Light => Theme::Dark,
            Theme::Dark => Theme::Light,
        }
    }
}

/// Which content area is rendered. Slugs that no build knows about parse to
/// `Unknown` instead of failing.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum View {
    #[default]
    Courses,
    Teachers,
    Schedule,
    Posts,
    History,
    #[serde(other)]
    Unknown,
}

impl View {
    /// Navigation order.
    pub const NAV: [View; 5] = [
        View::Courses,
        View::Teachers,
        View::Schedule,
        View::Posts,
        View::History,
    ];

    pub fn slug(&self) -> &'static str {
        match self {
            View::Courses => "courses",
            View::Teachers => "teachers",
            View::Schedule => "schedule",
            View::Posts => "posts",
            View::History => "history",
            View::Unknown => "unknown",
        }
    }

    pub fn from_slug(slug: &str) -> Self {
        Self::NAV
            .into_iter()
            .find(|v| v.slug() == slug)
            .unwrap_or(View::Unknown)
    }
}

impl fmt::Display for View {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.slug())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_theme_toggle_cycles() {
        assert_eq!(Theme::Light.toggled(), Theme::Dark);
        assert_eq!(Theme::Light.toggled().toggled(), Theme::Light);
    }

    #[test]
    fn test_theme_wire_format() {
        assert_eq!(serde_json::to_string(&Theme::Dark).unwrap(), "\"dark\"");
    }

    #[test]
    fn test_view_from_slug() {
        assert_eq!(View::from_slug("posts"), View::Posts);
        assert_eq!(View::from_slug("gallery"), View::Unknown);
        assert_eq!(View::from_slug("unknown"), View::Unknown);
    }

    #[test]
    fn test_unrecognized_view_deserializes_to_unknown() {
        let view: View = serde_json::from_str("\"gallery\"").unwrap();
        assert_eq!(view, View::Unknown);
    }
}
