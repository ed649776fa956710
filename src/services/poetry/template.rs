//! Sentence templates
//!
//! Templates carry `{slot}` placeholders that are filled in a single pass, so
//! text substituted into a slot is never expanded again.

use once_cell::sync::Lazy;
use regex::{Captures, Regex};

use crate::models::Style;

static SLOT_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\{([a-z]+)\}").expect("slot pattern is valid"));

/// A fillable position in a template
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Slot {
    Caption,
    Scene,
    Emotion,
    Action,
    Allusion,
    Season,
}

impl Slot {
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "caption" => Some(Slot::Caption),
            "scene" => Some(Slot::Scene),
            "emotion" => Some(Slot::Emotion),
            "action" => Some(Slot::Action),
            "allusion" => Some(Slot::Allusion),
            "season" => Some(Slot::Season),
            _ => None,
        }
    }
}

/// Names of every slot appearing in `template`
pub fn slot_names(template: &str) -> Vec<&str> {
    SLOT_PATTERN
        .captures_iter(template)
        .filter_map(|caps| caps.get(1).map(|m| m.as_str()))
        .collect()
}

/// Fill every known slot with `fill(slot)`; unknown placeholders are left as-is.
pub fn render<F>(template: &str, mut fill: F) -> String
where
    F: FnMut(Slot) -> String,
{
    SLOT_PATTERN
        .replace_all(template, |caps: &Captures| match Slot::from_name(&caps[1]) {
            Some(slot) => fill(slot),
            None => caps[0].to_string(),
        })
        .into_owned()
}

/// Sentence templates for a style
pub fn templates(style: Style) -> &'static [&'static str] {
    match style {
        Style::Classical => &[
            "{season}時節，{scene}，{caption}。{action}之際，正是「{allusion}」。",
            "「{allusion}」。{scene}重逢，{emotion}，{caption}長留心間。",
            "{caption}，{season}，{scene}。{emotion}，故人{action}，此景堪入詩。",
        ],
        Style::Lyrical => &[
            "在{scene}，我們{action}，{caption}的那一刻，{emotion}。",
            "{season}的光落在{scene}，{caption}，而我們依舊{emotion}。",
        ],
        Style::Nostalgic => &[
            "還記得{scene}嗎？{caption}，我們{action}，{emotion}，彷彿從未分離。",
            "多年以後再看{caption}，{scene}依舊，{emotion}，正如「{allusion}」。",
        ],
        Style::Scenic => &[
            "{season}，{scene}，一行人{action}，{caption}，畫面裡盡是{emotion}。",
            "{scene}之間，{season}正好。{caption}，{emotion}。",
        ],
        Style::Minimal => &[
            "{caption}。{emotion}。",
            "{season}，{caption}，{action}。",
            "「{allusion}」——{caption}。",
        ],
    }
}
