//! Document model shared by the support assistant and the help center.

use crate::error::SearchError;
use serde::de::{self, SeqAccess, Visitor};
use serde::{Deserialize, Deserializer, Serialize};
use std::collections::BTreeSet;
use std::fmt;
use std::str::FromStr;

/// Priority used when a document does not declare one.
pub const DEFAULT_PRIORITY: i32 = 50;

/// Audience a document can be matched for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case", try_from = "String")]
pub enum Role {
    /// Passenger app
    Rider,
    /// Driver app
    Driver,
    /// Operations staff
    Admin,
    /// Platform owners
    SuperAdmin,
    /// Driver cell directors
    Director,
    /// Wildcard: matches every role
    General,
}

impl Role {
    /// All roles in declaration order.
    pub const ALL: [Role; 6] = [
        Role::Rider,
        Role::Driver,
        Role::Admin,
        Role::SuperAdmin,
        Role::Director,
        Role::General,
    ];

    /// The tag used in corpus files.
    pub fn as_str(&self) -> &'static str {
        match self {
            Role::Rider => "rider",
            Role::Driver => "driver",
            Role::Admin => "admin",
            Role::SuperAdmin => "super_admin",
            Role::Director => "director",
            Role::General => "general",
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Role {
    type Err = SearchError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let tag = s.trim().to_lowercase();
        Role::ALL
            .into_iter()
            .find(|role| role.as_str() == tag)
            .ok_or_else(|| SearchError::UnknownRole(s.to_string()))
    }
}

impl TryFrom<String> for Role {
    type Error = SearchError;

    fn try_from(tag: String) -> Result<Self, Self::Error> {
        tag.parse()
    }
}

/// Set of roles a document is eligible for.
///
/// Corpus files may give either a single tag or a list; both end up here
/// as a set.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(into = "ScopeRepr")]
pub struct Scope {
    roles: BTreeSet<Role>,
}

#[derive(Serialize)]
#[serde(untagged)]
enum ScopeRepr {
    One(Role),
    Many(Vec<Role>),
}

impl From<Scope> for ScopeRepr {
    fn from(scope: Scope) -> Self {
        if scope.roles.len() == 1 {
            ScopeRepr::One(*scope.roles.iter().next().unwrap_or(&Role::General))
        } else {
            ScopeRepr::Many(scope.roles.into_iter().collect())
        }
    }
}

impl<'de> Deserialize<'de> for Scope {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        deserializer.deserialize_any(ScopeVisitor)
    }
}

/// Accepts a single tag or a list of tags, reporting the offending tag.
struct ScopeVisitor;

impl<'de> Visitor<'de> for ScopeVisitor {
    type Value = Scope;

    fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("a role tag or a list of role tags")
    }

    fn visit_str<E: de::Error>(self, tag: &str) -> Result<Scope, E> {
        tag.parse::<Role>().map(Scope::from).map_err(E::custom)
    }

    fn visit_seq<A: SeqAccess<'de>>(self, mut seq: A) -> Result<Scope, A::Error> {
        let mut roles = BTreeSet::new();
        while let Some(role) = seq.next_element::<Role>()? {
            roles.insert(role);
        }
        Ok(Scope { roles })
    }
}

impl Scope {
    /// Scope matching every role.
    pub fn general() -> Self {
        Scope::from(Role::General)
    }

    /// Whether a caller with `role` may see this document.
    #[inline]
    pub fn admits(&self, role: Role) -> bool {
        self.roles.contains(&role) || self.roles.contains(&Role::General)
    }

    /// Roles in this scope, ordered.
    pub fn roles(&self) -> impl Iterator<Item = Role> + '_ {
        self.roles.iter().copied()
    }
}

impl Default for Scope {
    fn default() -> Self {
        Scope::general()
    }
}

impl From<Role> for Scope {
    fn from(role: Role) -> Self {
        Self {
            roles: BTreeSet::from([role]),
        }
    }
}

impl From<Vec<Role>> for Scope {
    fn from(roles: Vec<Role>) -> Self {
        Self {
            roles: roles.into_iter().collect(),
        }
    }
}

impl<const N: usize> From<[Role; N]> for Scope {
    fn from(roles: [Role; N]) -> Self {
        Self {
            roles: roles.into_iter().collect(),
        }
    }
}

/// Common view over templates and articles.
pub trait Matchable {
    /// Unique id within the corpus.
    fn id(&self) -> &str;

    /// Roles the document is eligible for.
    fn scope(&self) -> &Scope;

    /// Lowercase keywords, in declaration order.
    fn keywords(&self) -> &[String];

    /// Informational classification tag.
    fn category(&self) -> &str;

    /// Additive ranking weight.
    fn priority(&self) -> i32 {
        DEFAULT_PRIORITY
    }

    /// Documents without keywords are reserved as the fallback answer.
    fn is_catch_all(&self) -> bool {
        self.keywords().is_empty()
    }
}

/// A pre-authored support response.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Template {
    /// Unique id
    pub id: String,
    /// Eligible roles
    #[serde(alias = "role")]
    pub scope: Scope,
    /// Classification tag
    #[serde(default)]
    pub category: String,
    /// Trigger phrases, matched as substrings of the query
    #[serde(default, deserialize_with = "lowercase_keywords")]
    pub keywords: Vec<String>,
    /// Response text
    #[serde(alias = "response")]
    pub content: String,
    /// Ranking weight, `DEFAULT_PRIORITY` when absent
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub priority: Option<i32>,
}

impl Template {
    /// Creates a template with the default priority and no category.
    pub fn new(
        id: impl Into<String>,
        scope: impl Into<Scope>,
        keywords: &[&str],
        content: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            scope: scope.into(),
            category: String::new(),
            keywords: keywords.iter().map(|k| normalize_keyword(k)).collect(),
            content: content.into(),
            priority: None,
        }
    }

    /// Sets an explicit priority.
    pub fn with_priority(mut self, priority: i32) -> Self {
        self.priority = Some(priority);
        self
    }

    /// Sets the category tag.
    pub fn with_category(mut self, category: impl Into<String>) -> Self {
        self.category = category.into();
        self
    }
}

impl Matchable for Template {
    fn id(&self) -> &str {
        &self.id
    }

    fn scope(&self) -> &Scope {
        &self.scope
    }

    fn keywords(&self) -> &[String] {
        &self.keywords
    }

    fn category(&self) -> &str {
        &self.category
    }

    fn priority(&self) -> i32 {
        self.priority.unwrap_or(DEFAULT_PRIORITY)
    }
}

/// A help-center article.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Article {
    /// Unique id
    pub id: String,
    /// Help category id
    #[serde(default)]
    pub category: String,
    /// Eligible roles; not used by search scoring
    #[serde(default)]
    pub scope: Scope,
    /// Headline, weighted highest
    pub title: String,
    /// One-line summary
    #[serde(default)]
    pub summary: String,
    /// Full article text
    #[serde(default, alias = "content")]
    pub body: String,
    /// Search keywords
    #[serde(default, deserialize_with = "lowercase_keywords")]
    pub keywords: Vec<String>,
}

impl Article {
    /// Creates an article with general scope and no keywords.
    pub fn new(
        id: impl Into<String>,
        title: impl Into<String>,
        summary: impl Into<String>,
        body: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            category: String::new(),
            scope: Scope::general(),
            title: title.into(),
            summary: summary.into(),
            body: body.into(),
            keywords: Vec::new(),
        }
    }

    /// Replaces the keyword list.
    pub fn with_keywords(mut self, keywords: &[&str]) -> Self {
        self.keywords = keywords.iter().map(|k| normalize_keyword(k)).collect();
        self
    }

    /// Sets the category id.
    pub fn with_category(mut self, category: impl Into<String>) -> Self {
        self.category = category.into();
        self
    }

    /// Restricts the article to a scope.
    pub fn with_scope(mut self, scope: impl Into<Scope>) -> Self {
        self.scope = scope.into();
        self
    }
}

impl Matchable for Article {
    fn id(&self) -> &str {
        &self.id
    }

    fn scope(&self) -> &Scope {
        &self.scope
    }

    fn keywords(&self) -> &[String] {
        &self.keywords
    }

    fn category(&self) -> &str {
        &self.category
    }
}

/// A browsable group of help articles.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HelpCategory {
    /// Category id referenced by articles
    pub id: String,
    /// Display name
    pub name: String,
    /// Short description
    #[serde(default)]
    pub description: String,
}

pub(crate) fn normalize_keyword(keyword: &str) -> String {
    keyword.trim().to_lowercase()
}

fn lowercase_keywords<'de, D>(deserializer: D) -> Result<Vec<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = Vec::<String>::deserialize(deserializer)?;
    Ok(raw.iter().map(|k| normalize_keyword(k)).collect())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_role_parse() {
        assert_eq!("rider".parse::<Role>().unwrap(), Role::Rider);
        assert_eq!(" Super_Admin ".parse::<Role>().unwrap(), Role::SuperAdmin);
        assert!("passenger".parse::<Role>().is_err());
    }

    #[test]
    fn test_scope_admits() {
        let driver_only = Scope::from(Role::Driver);
        assert!(driver_only.admits(Role::Driver));
        assert!(!driver_only.admits(Role::Rider));

        let wildcard = Scope::from([Role::Admin, Role::General]);
        assert!(wildcard.admits(Role::Rider));
    }

    #[test]
    fn test_scope_single_or_list() {
        #[derive(Deserialize)]
        struct Doc {
            scope: Scope,
        }

        let one: Doc = serde_json::from_str(r#"{"scope": "rider"}"#).unwrap();
        let many: Doc = serde_json::from_str(r#"{"scope": ["rider", "driver"]}"#).unwrap();

        assert_eq!(one.scope, Scope::from(Role::Rider));
        assert_eq!(many.scope.roles().collect::<Vec<_>>(), vec![Role::Rider, Role::Driver]);
    }

    #[test]
    fn test_unknown_scope_tag_is_reported() {
        let json = r#"{"id": "t1", "role": ["rider", "pilot"], "keywords": ["x"], "response": "x"}"#;
        let err = serde_json::from_str::<Template>(json).unwrap_err().to_string();
        assert!(err.contains("pilot"), "{err}");
        assert!(err.contains("super_admin"), "{err}");

        let toml_err = toml::from_str::<Template>("id = \"t1\"\nscope = \"pilot\"\ncontent = \"x\"\n")
            .unwrap_err()
            .to_string();
        assert!(toml_err.contains("pilot"), "{toml_err}");
    }

    #[test]
    fn test_template_defaults() {
        let json = r#"{"id": "t1", "role": "driver", "keywords": ["Cash OUT "], "response": "hi"}"#;
        let template: Template = serde_json::from_str(json).unwrap();

        assert_eq!(template.keywords, vec!["cash out"]);
        assert_eq!(template.content, "hi");
        assert_eq!(Matchable::priority(&template), DEFAULT_PRIORITY);
        assert!(!template.is_catch_all());
    }

    #[test]
    fn test_article_body_alias() {
        let json = r#"{"id": "a1", "title": "T", "content": "body text"}"#;
        let article: Article = serde_json::from_str(json).unwrap();

        assert_eq!(article.body, "body text");
        assert_eq!(article.scope, Scope::general());
        assert!(article.keywords.is_empty());
    }
}
