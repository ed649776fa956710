//! Poetic description generator
//!
//! Picks phrases from the vocabulary tables and substitutes them into style
//! templates. Generation is infallible and stateless; every pick is uniform and
//! unseeded unless a caller supplies its own RNG.

use rand::seq::IndexedRandom;
use rand::Rng;

use super::template::{self, Slot};
use super::vocabulary::{self, Category, DEFAULT_CAPTION};
use crate::models::{ContextTag, PoeticText, Style};

/// Stateless generator over the builtin phrase tables
#[derive(Debug, Clone, Copy, Default)]
pub struct PoeticGenerator;

/// Phrase pools for one request, resolved once from the tags
struct Pools {
    scene: Vec<&'static str>,
    emotion: Vec<&'static str>,
    action: Vec<&'static str>,
    allusion: Vec<&'static str>,
    season: Vec<&'static str>,
}

impl Pools {
    fn resolve(tags: &[String]) -> Self {
        Self {
            scene: vocabulary::SCENES.select(tags),
            emotion: vocabulary::EMOTIONS.select(tags),
            action: vocabulary::ACTIONS.select(tags),
            allusion: vocabulary::ALLUSIONS.select(tags),
            season: vocabulary::SEASONS.select(tags),
        }
    }

    fn pool(&self, slot: Slot) -> &[&'static str] {
        match slot {
            Slot::Scene => &self.scene,
            Slot::Emotion => &self.emotion,
            Slot::Action => &self.action,
            Slot::Allusion => &self.allusion,
            Slot::Season => &self.season,
            Slot::Caption => &[],
        }
    }
}

impl PoeticGenerator {
    pub fn new() -> Self {
        Self
    }

    /// Generate descriptions for the first `style_count` styles.
    ///
    /// `style_count` is clamped to `1..=Style::ALL.len()`, so the result is
    /// never empty.
    pub fn generate<S: AsRef<str>>(
        &self,
        caption: &str,
        tags: &[S],
        style_count: usize,
    ) -> Vec<PoeticText> {
        self.generate_with_rng(&mut rand::rng(), caption, tags, style_count)
    }

    /// Same as [`generate`](Self::generate) with a caller-supplied RNG
    pub fn generate_with_rng<R, S>(
        &self,
        rng: &mut R,
        caption: &str,
        tags: &[S],
        style_count: usize,
    ) -> Vec<PoeticText>
    where
        R: Rng + ?Sized,
        S: AsRef<str>,
    {
        let caption = match caption.trim() {
            "" => DEFAULT_CAPTION,
            trimmed => trimmed,
        };
        let tags = vocabulary::normalize_tags(tags);
        let pools = Pools::resolve(&tags);
        let count = clamp_style_count(style_count);

        tracing::debug!(caption, tags = ?tags, count, "generating poetic descriptions");

        Style::ALL
            .iter()
            .take(count)
            .map(|&style| {
                let template = pick(rng, template::templates(style));
                let text = template::render(template, |slot| match slot {
                    Slot::Caption => caption.to_string(),
                    other => pick(rng, pools.pool(other)).to_string(),
                });
                PoeticText::new(style, text)
            })
            .collect()
    }

    /// Pick one fixed sentence for the context named by `label`.
    ///
    /// Unrecognized labels use the casual sentences. The caption does not
    /// change the result.
    pub fn generate_for_context(&self, label: &str, caption: &str) -> String {
        self.generate_for_context_with_rng(&mut rand::rng(), label, caption)
    }

    /// Same as [`generate_for_context`](Self::generate_for_context) with a caller-supplied RNG
    pub fn generate_for_context_with_rng<R: Rng + ?Sized>(
        &self,
        rng: &mut R,
        label: &str,
        caption: &str,
    ) -> String {
        let context = ContextTag::from_label(label);
        tracing::debug!(label, %context, caption, "generating context description");
        pick(rng, vocabulary::context_sentences(context)).to_string()
    }

    /// Phrase categories backing the templates
    pub fn categories(&self) -> &'static [&'static Category] {
        &vocabulary::CATEGORIES
    }
}

/// Clamp a requested style count to the available styles
pub fn clamp_style_count(requested: usize) -> usize {
    requested.clamp(1, Style::ALL.len())
}

fn pick<R: Rng + ?Sized>(rng: &mut R, items: &[&'static str]) -> &'static str {
    items.choose(rng).copied().unwrap_or(DEFAULT_CAPTION)
}
