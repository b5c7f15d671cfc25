//! Immutable document store.

use crate::document::{Matchable, Role};
use crate::error::{Result, SearchError};
use std::collections::HashMap;

/// Read-only collection of documents in declaration order.
///
/// Built once; there is no way to add or remove documents afterwards.
#[derive(Debug, Clone)]
pub struct Corpus<T> {
    documents: Vec<T>,
    by_id: HashMap<String, usize>,
    catch_all: Option<usize>,
}

impl<T: Matchable> Corpus<T> {
    /// Builds a corpus, rejecting duplicate ids.
    ///
    /// The catch-all is the keyword-less document with the lowest
    /// priority; the first declared one wins a tie.
    pub fn new(documents: Vec<T>) -> Result<Self> {
        let mut by_id = HashMap::with_capacity(documents.len());
        let mut catch_all: Option<usize> = None;

        for (idx, doc) in documents.iter().enumerate() {
            if by_id.insert(doc.id().to_string(), idx).is_some() {
                return Err(SearchError::DuplicateId(doc.id().to_string()));
            }

            if doc.is_catch_all() {
                let lower = match catch_all {
                    Some(current) => doc.priority() < documents[current].priority(),
                    None => true,
                };
                if lower {
                    catch_all = Some(idx);
                }
            }
        }

        Ok(Self {
            documents,
            by_id,
            catch_all,
        })
    }

    /// Empty corpus.
    pub fn empty() -> Self {
        Self {
            documents: Vec::new(),
            by_id: HashMap::new(),
            catch_all: None,
        }
    }

    /// Documents visible to `role`, in declaration order.
    pub fn documents_in_scope(&self, role: Role) -> impl Iterator<Item = &T> + '_ {
        self.documents.iter().filter(move |doc| doc.scope().admits(role))
    }

    /// Documents tagged with `category`, in declaration order.
    pub fn in_category<'a>(&'a self, category: &'a str) -> impl Iterator<Item = &'a T> + 'a {
        self.documents.iter().filter(move |doc| doc.category() == category)
    }

    /// Looks up a document by id.
    pub fn get(&self, id: &str) -> Option<&T> {
        self.by_id.get(id).map(|&idx| &self.documents[idx])
    }

    /// The designated fallback document, if the corpus has one.
    pub fn catch_all(&self) -> Option<&T> {
        self.catch_all.map(|idx| &self.documents[idx])
    }

    /// All documents in declaration order.
    pub fn documents(&self) -> &[T] {
        &self.documents
    }

    /// Number of documents.
    pub fn len(&self) -> usize {
        self.documents.len()
    }

    /// Returns true if the corpus holds no documents.
    pub fn is_empty(&self) -> bool {
        self.documents.is_empty()
    }
}

impl<T: Matchable> Default for Corpus<T> {
    fn default() -> Self {
        Self::empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::document::Template;

    fn corpus() -> Corpus<Template> {
        Corpus::new(vec![
            Template::new("r-wallet", Role::Rider, &["wallet"], "rider wallet"),
            Template::new("d-wallet", Role::Driver, &["wallet"], "driver wallet"),
            Template::new("g-help", [Role::Rider, Role::General], &["help"], "help"),
            Template::new("x-fallback", Role::General, &[], "fallback").with_priority(0),
        ])
        .unwrap()
    }

    #[test]
    fn test_documents_in_scope() {
        let corpus = corpus();
        let ids: Vec<_> = corpus.documents_in_scope(Role::Rider).map(|t| t.id.as_str()).collect();
        assert_eq!(ids, vec!["r-wallet", "g-help", "x-fallback"]);

        let ids: Vec<_> = corpus.documents_in_scope(Role::Driver).map(|t| t.id.as_str()).collect();
        assert_eq!(ids, vec!["d-wallet", "g-help", "x-fallback"]);
    }

    #[test]
    fn test_empty_corpus() {
        let corpus: Corpus<Template> = Corpus::empty();
        assert_eq!(corpus.documents_in_scope(Role::Admin).count(), 0);
        assert!(corpus.catch_all().is_none());
        assert!(corpus.is_empty());
    }

    #[test]
    fn test_duplicate_id_rejected() {
        let result = Corpus::new(vec![
            Template::new("same", Role::Rider, &["a"], "a"),
            Template::new("same", Role::Driver, &["b"], "b"),
        ]);
        assert!(matches!(result, Err(SearchError::DuplicateId(id)) if id == "same"));
    }

    #[test]
    fn test_catch_all_lowest_priority() {
        let corpus = Corpus::new(vec![
            Template::new("soft", Role::General, &[], "soft"),
            Template::new("hard", Role::General, &[], "hard").with_priority(0),
            Template::new("tie", Role::General, &[], "tie").with_priority(0),
        ])
        .unwrap();
        assert_eq!(corpus.catch_all().unwrap().id, "hard");
    }

    #[test]
    fn test_get_and_category() {
        let corpus = Corpus::new(vec![
            Template::new("a", Role::Rider, &["x"], "a").with_category("wallet"),
            Template::new("b", Role::Rider, &["y"], "b").with_category("safety"),
        ])
        .unwrap();

        assert_eq!(corpus.get("b").unwrap().content, "b");
        assert!(corpus.get("c").is_none());
        assert_eq!(corpus.in_category("wallet").count(), 1);
    }
}
