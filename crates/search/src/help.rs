//! Help center: categorized articles with fuzzy search.

use crate::corpus::Corpus;
use crate::document::{Article, HelpCategory};
use crate::error::{Result, SearchError};
use crate::ranking::{search_documents_scored, SearchOptions, SearchOutcome};
use crate::synonyms::SynonymTable;
use serde::Deserialize;

#[derive(Deserialize)]
struct HelpFile {
    #[serde(default)]
    categories: Vec<HelpCategory>,
    #[serde(default)]
    articles: Vec<Article>,
    #[serde(default)]
    synonyms: SynonymTable,
}

/// Help articles, their categories and the search vocabulary.
#[derive(Debug, Clone, Default)]
pub struct HelpCenter {
    categories: Vec<HelpCategory>,
    articles: Corpus<Article>,
    synonyms: SynonymTable,
    options: SearchOptions,
}

impl HelpCenter {
    /// Builds a help center.
    ///
    /// When categories are declared, every article must point at one of
    /// them.
    pub fn new(
        categories: Vec<HelpCategory>,
        articles: Vec<Article>,
        synonyms: SynonymTable,
    ) -> Result<Self> {
        if !categories.is_empty() {
            if let Some(orphan) = articles
                .iter()
                .find(|a| !categories.iter().any(|c| c.id == a.category))
            {
                return Err(SearchError::UnknownCategory {
                    article: orphan.id.clone(),
                    category: orphan.category.clone(),
                });
            }
        }

        Ok(Self {
            categories,
            articles: Corpus::new(articles)?,
            synonyms,
            options: SearchOptions::default(),
        })
    }

    /// Parses a TOML document with `[[categories]]`, `[[articles]]` and a
    /// `[synonyms]` table.
    pub fn from_toml_str(source: &str) -> Result<Self> {
        let file: HelpFile = toml::from_str(source)?;
        Self::new(file.categories, file.articles, file.synonyms)
    }

    /// Parses the JSON equivalent of [`HelpCenter::from_toml_str`].
    pub fn from_json_str(source: &str) -> Result<Self> {
        let file: HelpFile = serde_json::from_str(source)?;
        Self::new(file.categories, file.articles, file.synonyms)
    }

    /// Overrides the result bounds.
    pub fn with_options(mut self, options: SearchOptions) -> Self {
        self.options = options;
        self
    }

    /// Current result bounds.
    pub fn options(&self) -> &SearchOptions {
        &self.options
    }

    /// Declared categories, in order.
    pub fn categories(&self) -> &[HelpCategory] {
        &self.categories
    }

    /// Looks up a category by id.
    pub fn category(&self, id: &str) -> Option<&HelpCategory> {
        self.categories.iter().find(|c| c.id == id)
    }

    /// Articles of one category, in declaration order.
    pub fn articles_in_category<'a>(&'a self, category: &'a str) -> Vec<&'a Article> {
        self.articles.in_category(category).collect()
    }

    /// The article corpus.
    pub fn articles(&self) -> &Corpus<Article> {
        &self.articles
    }

    /// The synonym table used for query expansion.
    pub fn synonyms(&self) -> &SynonymTable {
        &self.synonyms
    }

    /// Searches every article.
    pub fn search(&self, query: &str) -> Vec<&Article> {
        self.search_scored(query).articles()
    }

    /// Searches every article, keeping scores.
    pub fn search_scored(&self, query: &str) -> SearchOutcome<'_> {
        search_documents_scored(query, self.articles.documents(), &self.synonyms, &self.options)
    }

    /// Searches only the articles of `category`.
    pub fn search_in_category<'a>(&'a self, query: &str, category: &'a str) -> SearchOutcome<'a> {
        search_documents_scored(
            query,
            self.articles.in_category(category),
            &self.synonyms,
            &self.options,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const HELP: &str = r#"
[[categories]]
id = "payments-earnings"
name = "Payments & Earnings"
description = "Your earnings and payouts"

[[categories]]
id = "technical"
name = "Technical Issues"

[[articles]]
id = "pe-1"
category = "payments-earnings"
title = "How do I add money to my wallet?"
summary = "Funding your driver wallet"
content = "Open the Wallet tab and choose Add Funds."
keywords = ["add", "fund", "wallet", "money"]

[[articles]]
id = "ti-2"
category = "technical"
title = "GPS not working"
summary = "Fixing location problems"
content = "Make sure location permissions are enabled."
keywords = ["gps", "location", "map"]

[[articles]]
id = "ti-4"
category = "technical"
title = "App crashed during a ride"
summary = "Recovering from an app crash"
content = "Reopen the app as quickly as possible."
keywords = ["crash", "crashed", "frozen"]

[synonyms]
money = ["payment", "pay", "cash", "wallet", "earnings"]
gps = ["location", "maps", "navigation"]
"#;

    #[test]
    fn test_from_toml() {
        let help = HelpCenter::from_toml_str(HELP).unwrap();
        assert_eq!(help.categories().len(), 2);
        assert_eq!(help.articles().len(), 3);
        assert_eq!(help.synonyms().len(), 2);
        assert_eq!(help.category("technical").unwrap().name, "Technical Issues");
    }

    #[test]
    fn test_search_with_synonyms() {
        let help = HelpCenter::from_toml_str(HELP).unwrap();
        let results = help.search("how do i get money");
        assert_eq!(results[0].id, "pe-1");
    }

    #[test]
    fn test_search_reverse_synonym() {
        let help = HelpCenter::from_toml_str(HELP).unwrap();
        let results = help.search("navigation");
        assert_eq!(results[0].id, "ti-2");
    }

    #[test]
    fn test_articles_in_category() {
        let help = HelpCenter::from_toml_str(HELP).unwrap();
        let ids: Vec<_> = help
            .articles_in_category("technical")
            .iter()
            .map(|a| a.id.as_str())
            .collect();
        assert_eq!(ids, vec!["ti-2", "ti-4"]);
    }

    #[test]
    fn test_search_in_category_fallback() {
        let help = HelpCenter::from_toml_str(HELP).unwrap();
        let outcome = help.search_in_category("wallet", "technical");
        assert!(outcome.fallback);
        assert_eq!(outcome.articles()[0].id, "ti-2");
    }

    #[test]
    fn test_unknown_category_rejected() {
        let err = HelpCenter::new(
            vec![HelpCategory {
                id: "safety".into(),
                name: "Safety".into(),
                description: String::new(),
            }],
            vec![Article::new("a", "t", "s", "b").with_category("nope")],
            SynonymTable::new(),
        )
        .unwrap_err();
        assert!(matches!(err, SearchError::UnknownCategory { .. }));
    }

    #[test]
    fn test_uncategorized_corpus_allowed() {
        let help = HelpCenter::new(Vec::new(), vec![Article::new("a", "t", "s", "b")], SynonymTable::new());
        assert!(help.is_ok());
    }

    #[test]
    fn test_options_applied() {
        let help = HelpCenter::from_toml_str(HELP)
            .unwrap()
            .with_options(SearchOptions { max_results: 1, fallback_results: 2 });
        assert_eq!(help.search("app").len(), 1);
        assert_eq!(help.search("zzz").len(), 2);
    }
}
