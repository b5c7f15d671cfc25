//! Relevance scoring policies.
//!
//! Two formulas share one contract. Template selection rewards the
//! fraction of a template's keywords found in the query, plus priority.
//! Help search adds fixed weights per field hit and per expanded word.

use crate::document::{Article, Matchable, Role, Template};
use crate::normalize::Query;

/// Weights used by multi-field help search.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum FieldWeight {
    /// A word appears in the body
    BodyWord = 5,
    /// A word appears in the summary
    SummaryWord = 10,
    /// A word overlaps a keyword in either direction
    Keyword = 15,
    /// A word appears in the title
    TitleWord = 20,
    /// The whole query appears in the summary
    SummaryPhrase = 50,
    /// The whole query appears in the title
    TitlePhrase = 100,
}

impl FieldWeight {
    #[inline]
    fn points(self) -> u32 {
        self as u32
    }
}

/// Maximum contribution of keyword coverage in template selection.
pub const COVERAGE_SCALE: f64 = 100.0;

/// Scores a document against a prepared query.
///
/// `None` means the document is not a candidate at all. `Some(0.0)` is
/// a candidate with no relevance.
pub trait ScoringPolicy<D> {
    /// Computes the score of `document` for `query`.
    fn score(&self, query: &Query, document: &D) -> Option<f64>;
}

/// Keyword-coverage policy for role-scoped support templates.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TemplateSelection {
    /// Role of the person asking
    pub role: Role,
}

impl ScoringPolicy<Template> for TemplateSelection {
    fn score(&self, query: &Query, template: &Template) -> Option<f64> {
        if !template.scope().admits(self.role) {
            return None;
        }
        template_score(&query.text, template)
    }
}

/// Multi-field policy for help articles. Expects `query.words` to be
/// already synonym-expanded.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MultiFieldSearch;

impl ScoringPolicy<Article> for MultiFieldSearch {
    fn score(&self, query: &Query, article: &Article) -> Option<f64> {
        Some(f64::from(article_score(&query.text, &query.words, article)))
    }
}

/// Keyword coverage score, ignoring scope.
///
/// Counts keywords occurring as substrings of `normalized` and returns
/// `(matches / keywords) * 100 + priority`. Keyword-less templates and
/// templates with no hit score `None`.
pub fn template_score<T: Matchable>(normalized: &str, template: &T) -> Option<f64> {
    let keywords = template.keywords();
    if keywords.is_empty() {
        return None;
    }

    let matches = keywords
        .iter()
        .filter(|keyword| normalized.contains(keyword.as_str()))
        .count();

    if matches == 0 {
        return None;
    }

    let coverage = matches as f64 / keywords.len() as f64;
    Some(coverage * COVERAGE_SCALE + f64::from(template.priority()))
}

/// Multi-field help score.
///
/// `normalized` is the whole query; `words` the expanded vocabulary.
pub fn article_score(normalized: &str, words: &[String], article: &Article) -> u32 {
    let title = article.title.to_lowercase();
    let summary = article.summary.to_lowercase();
    let body = article.body.to_lowercase();

    let mut score = 0;

    if !normalized.is_empty() {
        if title.contains(normalized) {
            score += FieldWeight::TitlePhrase.points();
        }
        if summary.contains(normalized) {
            score += FieldWeight::SummaryPhrase.points();
        }
    }

    for word in words {
        let word = word.as_str();
        if title.contains(word) {
            score += FieldWeight::TitleWord.points();
        }
        if summary.contains(word) {
            score += FieldWeight::SummaryWord.points();
        }
        if article
            .keywords
            .iter()
            .any(|keyword| keyword.contains(word) || word.contains(keyword.as_str()))
        {
            score += FieldWeight::Keyword.points();
        }
        if body.contains(word) {
            score += FieldWeight::BodyWord.points();
        }
    }

    score
}

#[cfg(test)]
mod tests {
    use super::*;

    fn words(list: &[&str]) -> Vec<String> {
        list.iter().map(|w| w.to_string()).collect()
    }

    #[test]
    fn test_single_keyword_full_coverage() {
        let template = Template::new("t", Role::Rider, &["refund"], "");
        assert_eq!(template_score("i want a refund", &template), Some(150.0));
    }

    #[test]
    fn test_partial_coverage_uses_keyword_count() {
        let template = Template::new("t", Role::Rider, &["x", "y", "z"], "").with_priority(80);
        let score = template_score("x", &template).unwrap();
        assert!((score - (100.0 / 3.0 + 80.0)).abs() < 1e-9);
    }

    #[test]
    fn test_substring_not_whole_word() {
        let template = Template::new("t", Role::Rider, &["pay"], "");
        assert!(template_score("repayment", &template).is_some());
    }

    #[test]
    fn test_no_hit_is_not_candidate() {
        let template = Template::new("t", Role::Rider, &["wallet"], "");
        assert_eq!(template_score("lost my phone", &template), None);
    }

    #[test]
    fn test_catch_all_never_scored() {
        let template = Template::new("t", Role::General, &[], "");
        assert_eq!(template_score("anything", &template), None);
    }

    #[test]
    fn test_policy_respects_scope() {
        let template = Template::new("t", Role::Driver, &["payout"], "");
        let query = Query::phrase("payout");

        assert!(TemplateSelection { role: Role::Rider }.score(&query, &template).is_none());
        assert!(TemplateSelection { role: Role::Driver }.score(&query, &template).is_some());
    }

    #[test]
    fn test_priority_zero_and_hundred() {
        let low = Template::new("low", Role::Rider, &["a"], "").with_priority(0);
        let high = Template::new("high", Role::Rider, &["a"], "").with_priority(100);
        assert_eq!(template_score("a", &low), Some(100.0));
        assert_eq!(template_score("a", &high), Some(200.0));
    }

    #[test]
    fn test_article_phrase_bonuses() {
        let article = Article::new("a", "GPS not working", "GPS not working on my phone", "");
        // phrase: 100 + 50; "gps": title 20 + summary 10
        assert_eq!(article_score("gps", &words(&["gps"]), &article), 180);
    }

    #[test]
    fn test_article_buckets_are_additive() {
        let article = Article::new("a", "Wallet", "Top up your wallet", "The wallet holds money")
            .with_keywords(&["wallet"]);
        // title 20, summary 10, keyword 15, body 5; phrase "wallet" also in title/summary
        assert_eq!(article_score("wallet", &words(&["wallet"]), &article), 100 + 50 + 50);
    }

    #[test]
    fn test_keyword_containment_both_ways() {
        let article = Article::new("a", "", "", "").with_keywords(&["cancellation"]);
        assert_eq!(article_score("", &words(&["cancel"]), &article), 15);
        let article = Article::new("b", "", "", "").with_keywords(&["pay"]);
        assert_eq!(article_score("", &words(&["payout"]), &article), 15);
    }

    #[test]
    fn test_article_case_insensitive_fields() {
        let article = Article::new("a", "CASH Trips", "", "");
        assert_eq!(article_score("", &words(&["cash"]), &article), 20);
    }

    #[test]
    fn test_empty_phrase_scores_nothing() {
        let article = Article::new("a", "Title", "Summary", "Body");
        assert_eq!(article_score("", &[], &article), 0);
    }
}
