//! Ranking and selection.
//!
//! Both selectors sort with a stable sort, so equal scores keep corpus
//! declaration order and the first declared document wins a tie.

use crate::corpus::Corpus;
use crate::document::{Article, Role, Template};
use crate::normalize::Query;
use crate::relevance::{MultiFieldSearch, ScoringPolicy, TemplateSelection};
use crate::synonyms::SynonymTable;
use crate::SearchResult;
use std::cmp::Ordering;
use tracing::debug;

/// Default cap on help search results.
pub const DEFAULT_MAX_RESULTS: usize = 8;

/// Default number of documents returned when nothing is relevant.
pub const DEFAULT_FALLBACK_RESULTS: usize = 3;

/// Result bounds for help search.
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct SearchOptions {
    /// Maximum relevant results returned
    pub max_results: usize,
    /// Documents returned, in corpus order, when no document is relevant
    pub fallback_results: usize,
}

impl Default for SearchOptions {
    fn default() -> Self {
        Self {
            max_results: DEFAULT_MAX_RESULTS,
            fallback_results: DEFAULT_FALLBACK_RESULTS,
        }
    }
}

/// Outcome of template selection.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Selection<'a> {
    /// A template matched with the given score
    Matched(SearchResult<&'a Template>),
    /// Nothing matched; the corpus catch-all is returned instead
    CatchAll(&'a Template),
    /// Nothing matched and the corpus has no catch-all
    NoMatch,
}

impl<'a> Selection<'a> {
    /// The selected template, if any.
    pub fn template(&self) -> Option<&'a Template> {
        match *self {
            Selection::Matched(result) => Some(result.item),
            Selection::CatchAll(template) => Some(template),
            Selection::NoMatch => None,
        }
    }

    /// Score of a real match; `None` for the catch-all.
    pub fn score(&self) -> Option<f64> {
        match *self {
            Selection::Matched(result) => Some(result.score),
            _ => None,
        }
    }

    /// Returns true if the answer is the fallback rather than a match.
    pub fn is_fallback(&self) -> bool {
        !matches!(self, Selection::Matched(_))
    }
}

/// Outcome of help search.
#[derive(Debug, Clone, PartialEq)]
pub struct SearchOutcome<'a> {
    /// Ranked articles, best first
    pub results: Vec<SearchResult<&'a Article>>,
    /// True when no article was relevant and the first documents of the
    /// corpus were returned instead
    pub fallback: bool,
}

impl<'a> SearchOutcome<'a> {
    fn empty() -> Self {
        Self {
            results: Vec::new(),
            fallback: false,
        }
    }

    /// The articles without their scores.
    pub fn articles(&self) -> Vec<&'a Article> {
        self.results.iter().map(|r| r.item).collect()
    }
}

fn by_score_desc<T>(a: &SearchResult<T>, b: &SearchResult<T>) -> Ordering {
    b.score.partial_cmp(&a.score).unwrap_or(Ordering::Equal)
}

/// Every in-scope template with a positive score, best first.
pub fn rank_templates<'a>(
    corpus: &'a Corpus<Template>,
    query: &str,
    role: Role,
) -> Vec<SearchResult<&'a Template>> {
    let query = Query::phrase(query);
    let policy = TemplateSelection { role };

    let mut candidates: Vec<SearchResult<&Template>> = corpus
        .documents()
        .iter()
        .filter_map(|template| {
            policy
                .score(&query, template)
                .filter(|score| *score > 0.0)
                .map(|score| SearchResult { item: template, score })
        })
        .collect();

    candidates.sort_by(by_score_desc);
    candidates
}

/// Picks the best template for `query` as seen by `role`.
///
/// The context hint is accepted for callers that know which screen the
/// user is on; it does not influence the result.
pub fn select_template_scored<'a>(
    corpus: &'a Corpus<Template>,
    query: &str,
    role: Role,
    _context_hint: Option<&str>,
) -> Selection<'a> {
    if let Some(best) = rank_templates(corpus, query, role).into_iter().next() {
        debug!(template = %best.item.id, score = best.score, %role, "Template matched");
        return Selection::Matched(best);
    }

    match corpus.catch_all() {
        Some(catch_all) => {
            debug!(template = %catch_all.id, %role, "No template matched, using catch-all");
            Selection::CatchAll(catch_all)
        }
        None => {
            debug!(%role, "No template matched and corpus has no catch-all");
            Selection::NoMatch
        }
    }
}

/// Picks the best template, falling back to the corpus catch-all.
///
/// Returns `None` only when nothing matches and the corpus has no
/// catch-all document.
pub fn select_template<'a>(
    corpus: &'a Corpus<Template>,
    query: &str,
    role: Role,
    context_hint: Option<&str>,
) -> Option<&'a Template> {
    select_template_scored(corpus, query, role, context_hint).template()
}

/// Ranks `documents` for `query` with synonym expansion and scores.
pub fn search_documents_scored<'a, I>(
    query: &str,
    documents: I,
    synonyms: &SynonymTable,
    options: &SearchOptions,
) -> SearchOutcome<'a>
where
    I: IntoIterator<Item = &'a Article>,
{
    let mut query = Query::tokenized(query);
    if query.is_empty() {
        return SearchOutcome::empty();
    }
    query.words = synonyms.expand(&query.words);

    let mut scored: Vec<SearchResult<&Article>> = documents
        .into_iter()
        .map(|article| SearchResult {
            item: article,
            score: MultiFieldSearch.score(&query, article).unwrap_or(0.0),
        })
        .collect();

    scored.sort_by(by_score_desc);

    let relevant = scored.iter().take_while(|r| r.score > 0.0).count();

    if relevant == 0 {
        debug!(query = %query.text, corpus = scored.len(), "No relevant article, returning fallback");
        scored.truncate(options.fallback_results);
        return SearchOutcome {
            results: scored,
            fallback: true,
        };
    }

    scored.truncate(relevant.min(options.max_results));
    debug!(query = %query.text, relevant, returned = scored.len(), "Help search ranked");

    SearchOutcome {
        results: scored,
        fallback: false,
    }
}

/// Ranks `documents` for `query`.
///
/// `documents` is searched as given; no scope filter is applied.
/// Returns at most `options.max_results` relevant articles. When nothing
/// is relevant, returns the first `options.fallback_results` documents in
/// corpus order. An empty or whitespace-only query returns nothing.
pub fn search_documents<'a, I>(
    query: &str,
    documents: I,
    synonyms: &SynonymTable,
    options: &SearchOptions,
) -> Vec<&'a Article>
where
    I: IntoIterator<Item = &'a Article>,
{
    search_documents_scored(query, documents, synonyms, options).articles()
}
