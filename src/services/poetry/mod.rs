//! Poetry service
//!
//! Implements the business logic behind photo descriptions:
//! - Style-varied descriptions from a caption and tags
//! - Fixed sentences for a photo context (event, academic, sports, class, casual)
//! - Request limits taken from configuration

pub mod generator;
pub mod template;
pub mod vocabulary;

use serde::{Deserialize, Serialize};

pub use generator::{clamp_style_count, PoeticGenerator};

use crate::config::PoetryConfig;
use crate::models::{ContextTag, PoeticText, Style};

/// Error types for poetry service operations
#[derive(Debug, thiserror::Error)]
pub enum PoetryServiceError {
    /// Request exceeds a configured limit
    #[error("Validation error: {0}")]
    ValidationError(String),
}

/// Input for style-varied description generation
#[derive(Debug, Clone, Default, Deserialize)]
pub struct GenerateInput {
    #[serde(default)]
    pub caption: String,
    #[serde(default)]
    pub tags: Vec<String>,
    /// Number of styles; falls back to the configured default
    #[serde(default)]
    pub style_count: Option<usize>,
}

/// A fixed context sentence along with the context it was resolved to
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ContextDescription {
    pub context: ContextTag,
    pub text: String,
}

/// Poetry service wrapping the generator with configured limits
pub struct PoetryService {
    generator: PoeticGenerator,
    config: PoetryConfig,
}

impl PoetryService {
    /// Create a new poetry service
    ///
    /// # Arguments
    /// * `config` - Request limits
    pub fn new(config: PoetryConfig) -> Self {
        Self {
            generator: PoeticGenerator::new(),
            config,
        }
    }

    /// Configured limits
    pub fn config(&self) -> &PoetryConfig {
        &self.config
    }

    /// Generate descriptions in the first `style_count` styles
    ///
    /// # Errors
    /// - `ValidationError` if the caption or tag list exceeds the configured limits
    pub fn describe(&self, input: &GenerateInput) -> Result<Vec<PoeticText>, PoetryServiceError> {
        self.check_caption(&input.caption)?;
        if input.tags.len() > self.config.max_tags {
            return Err(PoetryServiceError::ValidationError(format!(
                "At most {} tags are allowed",
                self.config.max_tags
            )));
        }

        let count = self.resolve_style_count(input.style_count);
        let descriptions = self.generator.generate(&input.caption, input.tags.as_slice(), count);

        tracing::info!(
            styles = descriptions.len(),
            tags = input.tags.len(),
            "generated poetic descriptions"
        );
        Ok(descriptions)
    }

    /// Pick the fixed sentence for a context label
    ///
    /// Unrecognized labels resolve to the casual context.
    ///
    /// # Errors
    /// - `ValidationError` if the caption exceeds the configured length
    pub fn describe_for_context(
        &self,
        label: &str,
        caption: &str,
    ) -> Result<ContextDescription, PoetryServiceError> {
        self.check_caption(caption)?;

        let context = ContextTag::from_label(label);
        tracing::debug!(label, %context, "resolved context label");

        let text = self.generator.generate_for_context(label, caption);
        Ok(ContextDescription { context, text })
    }

    /// Styles a request can receive, in selection order
    pub fn styles(&self) -> Vec<Style> {
        Style::ALL
            .iter()
            .copied()
            .take(self.config.max_style_count)
            .collect()
    }

    /// All context labels
    pub fn contexts(&self) -> &'static [ContextTag] {
        &ContextTag::ALL
    }

    /// Phrase category names and their keys
    pub fn vocabulary(&self) -> Vec<(&'static str, Vec<&'static str>)> {
        self.generator
            .categories()
            .iter()
            .map(|category| {
                let keys = category.groups.iter().map(|g| g.key).collect();
                (category.name, keys)
            })
            .collect()
    }

    fn resolve_style_count(&self, requested: Option<usize>) -> usize {
        let requested = requested.unwrap_or(self.config.default_style_count);
        clamp_style_count(requested.min(self.config.max_style_count))
    }

    fn check_caption(&self, caption: &str) -> Result<(), PoetryServiceError> {
        let chars = caption.chars().count();
        if chars > self.config.max_caption_chars {
            return Err(PoetryServiceError::ValidationError(format!(
                "Caption must be at most {} characters",
                self.config.max_caption_chars
            )));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn service() -> PoetryService {
        PoetryService::new(PoetryConfig::default())
    }

    #[test]
    fn test_describe_uses_default_style_count() {
        let result = service()
            .describe(&GenerateInput {
                caption: "畢業合照".to_string(),
                tags: vec!["畢業".to_string()],
                style_count: None,
            })
            .unwrap();

        assert_eq!(result.len(), PoetryConfig::default().default_style_count);
    }

    #[test]
    fn test_describe_clamps_to_configured_max() {
        let service = PoetryService::new(PoetryConfig {
            max_style_count: 2,
            default_style_count: 1,
            ..PoetryConfig::default()
        });

        let result = service
            .describe(&GenerateInput {
                style_count: Some(5),
                ..GenerateInput::default()
            })
            .unwrap();
        assert_eq!(result.len(), 2);

        let result = service
            .describe(&GenerateInput {
                style_count: Some(0),
                ..GenerateInput::default()
            })
            .unwrap();
        assert_eq!(result.len(), 1);
    }

    #[test]
    fn test_describe_accepts_empty_input() {
        let result = service().describe(&GenerateInput::default()).unwrap();
        assert!(!result.is_empty());
        assert!(result.iter().all(|item| !item.text.is_empty()));
    }

    #[test]
    fn test_describe_rejects_long_caption() {
        let service = PoetryService::new(PoetryConfig {
            max_caption_chars: 4,
            ..PoetryConfig::default()
        });

        // Four characters, twelve bytes
        assert!(service
            .describe(&GenerateInput {
                caption: "校友聚會".to_string(),
                ..GenerateInput::default()
            })
            .is_ok());

        let err = service
            .describe(&GenerateInput {
                caption: "校友聚會合影".to_string(),
                ..GenerateInput::default()
            })
            .unwrap_err();
        assert!(matches!(err, PoetryServiceError::ValidationError(_)));
    }

    #[test]
    fn test_describe_rejects_too_many_tags() {
        let service = PoetryService::new(PoetryConfig {
            max_tags: 1,
            ..PoetryConfig::default()
        });

        let err = service
            .describe(&GenerateInput {
                tags: vec!["春".to_string(), "秋".to_string()],
                ..GenerateInput::default()
            })
            .unwrap_err();
        assert!(err.to_string().contains("At most 1 tags"));
    }

    #[test]
    fn test_describe_for_context_resolves_label() {
        let result = service().describe_for_context("academic", "研討會合影").unwrap();
        let academic = vocabulary::context_sentences(ContextTag::Academic);
        assert_eq!(result.context, ContextTag::Academic);
        assert!(academic.contains(&result.text.as_str()));
    }

    #[test]
    fn test_describe_for_context_rejects_long_caption() {
        let service = PoetryService::new(PoetryConfig {
            max_caption_chars: 2,
            ..PoetryConfig::default()
        });

        assert!(service.describe_for_context("academic", "合影").is_ok());

        let err = service
            .describe_for_context("academic", "研討會合影")
            .unwrap_err();
        assert!(matches!(err, PoetryServiceError::ValidationError(_)));
        assert!(err.to_string().contains("at most 2 characters"));
    }

    #[test]
    fn test_describe_for_context_falls_back_to_casual() {
        let result = service().describe_for_context("reunion", "").unwrap();
        let casual = vocabulary::context_sentences(ContextTag::Casual);
        assert_eq!(result.context, ContextTag::Casual);
        assert!(casual.contains(&result.text.as_str()));
    }

    #[test]
    fn test_styles_respect_max() {
        let service = PoetryService::new(PoetryConfig {
            max_style_count: 3,
            ..PoetryConfig::default()
        });
        assert_eq!(service.styles(), vec![Style::Classical, Style::Lyrical, Style::Nostalgic]);
    }

    #[test]
    fn test_vocabulary_lists_every_category() {
        let names: Vec<_> = service().vocabulary().into_iter().map(|(name, _)| name).collect();
        assert_eq!(names, vec!["scene", "emotion", "action", "allusion", "season"]);
    }
}
