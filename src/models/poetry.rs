//! Poetic description models
//!
//! Defines the closed sets of description styles and photo contexts, and the
//! record returned for each generated description.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Writing style of a generated description.
///
/// `Style::ALL` is ordered; a request for `n` styles takes the first `n`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Style {
    /// 古典詩韻
    Classical,
    /// 現代抒情
    Lyrical,
    /// 溫馨回憶
    Nostalgic,
    /// 意境寫景
    Scenic,
    /// 簡約雋永
    Minimal,
}

impl Style {
    /// Every style, in selection order
    pub const ALL: [Style; 5] = [
        Style::Classical,
        Style::Lyrical,
        Style::Nostalgic,
        Style::Scenic,
        Style::Minimal,
    ];

    /// Stable machine-readable key
    pub fn key(self) -> &'static str {
        match self {
            Style::Classical => "classical",
            Style::Lyrical => "lyrical",
            Style::Nostalgic => "nostalgic",
            Style::Scenic => "scenic",
            Style::Minimal => "minimal",
        }
    }

    /// Display label shown next to the generated text
    pub fn label(self) -> &'static str {
        match self {
            Style::Classical => "古典詩韻",
            Style::Lyrical => "現代抒情",
            Style::Nostalgic => "溫馨回憶",
            Style::Scenic => "意境寫景",
            Style::Minimal => "簡約雋永",
        }
    }
}

impl fmt::Display for Style {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.key())
    }
}

/// Kind of gathering a photo was taken at.
///
/// Parsing never fails: unrecognized labels resolve to `Casual`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ContextTag {
    Event,
    Academic,
    Sports,
    Class,
    #[default]
    Casual,
}

impl ContextTag {
    /// Every context, in catalogue order
    pub const ALL: [ContextTag; 5] = [
        ContextTag::Event,
        ContextTag::Academic,
        ContextTag::Sports,
        ContextTag::Class,
        ContextTag::Casual,
    ];

    /// Resolve a free-form label.
    ///
    /// Accepts the ASCII keys case-insensitively and the Chinese labels.
    pub fn from_label(label: &str) -> Self {
        match label.trim().to_lowercase().as_str() {
            "event" | "活動" => ContextTag::Event,
            "academic" | "學術" => ContextTag::Academic,
            "sports" | "運動" => ContextTag::Sports,
            "class" | "班級" => ContextTag::Class,
            _ => ContextTag::Casual,
        }
    }

    /// Stable machine-readable key
    pub fn key(self) -> &'static str {
        match self {
            ContextTag::Event => "event",
            ContextTag::Academic => "academic",
            ContextTag::Sports => "sports",
            ContextTag::Class => "class",
            ContextTag::Casual => "casual",
        }
    }

    /// Chinese display label
    pub fn label(self) -> &'static str {
        match self {
            ContextTag::Event => "活動",
            ContextTag::Academic => "學術",
            ContextTag::Sports => "運動",
            ContextTag::Class => "班級",
            ContextTag::Casual => "日常",
        }
    }
}

impl fmt::Display for ContextTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.key())
    }
}

/// One generated description
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PoeticText {
    /// Style display label
    pub style: String,
    /// Generated text
    pub text: String,
}

impl PoeticText {
    pub fn new(style: Style, text: String) -> Self {
        Self {
            style: style.label().to_string(),
            text,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_context_from_known_labels() {
        assert_eq!(ContextTag::from_label("event"), ContextTag::Event);
        assert_eq!(ContextTag::from_label("academic"), ContextTag::Academic);
        assert_eq!(ContextTag::from_label("sports"), ContextTag::Sports);
        assert_eq!(ContextTag::from_label("class"), ContextTag::Class);
        assert_eq!(ContextTag::from_label("casual"), ContextTag::Casual);
    }

    #[test]
    fn test_context_from_label_is_lenient() {
        assert_eq!(ContextTag::from_label("  Academic "), ContextTag::Academic);
        assert_eq!(ContextTag::from_label("SPORTS"), ContextTag::Sports);
        assert_eq!(ContextTag::from_label("學術"), ContextTag::Academic);
        assert_eq!(ContextTag::from_label("班級"), ContextTag::Class);
    }

    #[test]
    fn test_unknown_context_falls_back_to_casual() {
        assert_eq!(ContextTag::from_label(""), ContextTag::Casual);
        assert_eq!(ContextTag::from_label("wedding"), ContextTag::Casual);
        assert_eq!(ContextTag::from_label("派對"), ContextTag::Casual);
    }

    #[test]
    fn test_context_key_roundtrip() {
        for context in ContextTag::ALL {
            assert_eq!(ContextTag::from_label(context.key()), context);
            assert_eq!(ContextTag::from_label(context.label()), context);
        }
    }

    #[test]
    fn test_style_labels_are_distinct() {
        let mut labels: Vec<_> = Style::ALL.iter().map(|s| s.label()).collect();
        labels.sort();
        labels.dedup();
        assert_eq!(labels.len(), Style::ALL.len());
    }

    #[test]
    fn test_poetic_text_uses_style_label() {
        let text = PoeticText::new(Style::Classical, "春風十里".to_string());
        assert_eq!(text.style, "古典詩韻");
        assert_eq!(text.text, "春風十里");
    }

    #[test]
    fn test_style_serializes_lowercase() {
        let json = serde_json::to_string(&Style::Nostalgic).unwrap();
        assert_eq!(json, "\"nostalgic\"");
    }
}
