//! Text-relevance matching for ZIBRA support.
//!
//! This crate provides:
//! - Role-scoped selection of pre-authored support templates
//! - Multi-field help-article search with synonym expansion
//! - An immutable, injected corpus store
//! - Response language detection
//!
//! Everything here is a pure function of the query and the corpus handed
//! in at construction. Nothing fails at query time: a question nobody
//! wrote a template for gets the corpus catch-all, and a search nothing
//! is relevant to gets the first few articles.
//!
//! # Example
//!
//! ```
//! use zibra_search::{Role, SupportAssistant, Template};
//!
//! let assistant = SupportAssistant::from_templates(vec![
//!     Template::new("r-wallet", Role::Rider, &["wallet"], "Open the Wallet tab."),
//!     Template::new("x-help", Role::General, &[], "Check the Help Center.").with_priority(0),
//! ])
//! .unwrap();
//!
//! assert_eq!(assistant.respond("my wallet is empty", Role::Rider, None), "Open the Wallet tab.");
//! assert_eq!(assistant.respond("hello", Role::Driver, None), "Check the Help Center.");
//! ```

mod assistant;
mod corpus;
mod document;
mod error;
mod help;
mod language;
pub mod normalize;
pub mod ranking;
pub mod relevance;
mod synonyms;

#[cfg(feature = "wasm")]
mod wasm;

pub use assistant::{SupportAssistant, DEFAULT_RESPONSE};
pub use corpus::Corpus;
pub use document::{Article, HelpCategory, Matchable, Role, Scope, Template, DEFAULT_PRIORITY};
pub use error::{Result, SearchError, SearchErrorCode};
pub use help::HelpCenter;
pub use language::{detect_user_language, LanguageConfig};
pub use ranking::{
    search_documents, search_documents_scored, select_template, select_template_scored,
    SearchOptions, SearchOutcome, Selection,
};
pub use synonyms::SynonymTable;

/// Search result with relevance score.
#[derive(Debug, Clone, Copy, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct SearchResult<T> {
    /// The matched item
    pub item: T,
    /// Relevance score (higher is better)
    pub score: f64,
}
