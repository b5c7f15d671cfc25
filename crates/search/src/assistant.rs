//! Support assistant: role-scoped template answers.

use crate::corpus::Corpus;
use crate::document::{Role, Template};
use crate::error::Result;
use crate::ranking::{select_template_scored, Selection};
use serde::Deserialize;
use tracing::warn;

/// Answer used when a corpus has neither a match nor a catch-all.
pub const DEFAULT_RESPONSE: &str = "I can help you with that. Could you tell me a bit more about \
what you need? You can also submit a support ticket for detailed assistance.";

#[derive(Deserialize)]
struct TemplateFile {
    #[serde(default)]
    templates: Vec<Template>,
}

/// Picks pre-authored responses for free-text questions.
#[derive(Debug, Clone, Default)]
pub struct SupportAssistant {
    templates: Corpus<Template>,
}

impl SupportAssistant {
    /// Wraps an already built template corpus.
    pub fn new(templates: Corpus<Template>) -> Self {
        if templates.catch_all().is_none() {
            warn!(
                templates = templates.len(),
                "Template corpus has no catch-all; unmatched questions get the built-in answer"
            );
        }
        Self { templates }
    }

    /// Builds the corpus from a list of templates.
    pub fn from_templates(templates: Vec<Template>) -> Result<Self> {
        Ok(Self::new(Corpus::new(templates)?))
    }

    /// Parses a TOML document with a `[[templates]]` array.
    pub fn from_toml_str(source: &str) -> Result<Self> {
        let file: TemplateFile = toml::from_str(source)?;
        Self::from_templates(file.templates)
    }

    /// Parses a JSON document `{"templates": [...]}` or a bare array.
    pub fn from_json_str(source: &str) -> Result<Self> {
        let templates = if source.trim_start().starts_with('[') {
            serde_json::from_str::<Vec<Template>>(source)?
        } else {
            serde_json::from_str::<TemplateFile>(source)?.templates
        };
        Self::from_templates(templates)
    }

    /// The template corpus.
    pub fn templates(&self) -> &Corpus<Template> {
        &self.templates
    }

    /// Selects a template, reporting whether it was a real match.
    pub fn select(&self, query: &str, role: Role, context: Option<&str>) -> Selection<'_> {
        select_template_scored(&self.templates, query, role, context)
    }

    /// Best template for the question, or the catch-all.
    pub fn match_template(&self, query: &str, role: Role, context: Option<&str>) -> Option<&Template> {
        self.select(query, role, context).template()
    }

    /// Response text for the question. Never empty-handed.
    pub fn respond(&self, query: &str, role: Role, context: Option<&str>) -> &str {
        self.match_template(query, role, context)
            .map_or(DEFAULT_RESPONSE, |template| template.content.as_str())
    }
}
