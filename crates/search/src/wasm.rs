//! WASM bindings for the help center and support assistant.

use crate::{HelpCenter, Role, SearchOptions, SupportAssistant};
use serde::Serialize;
use wasm_bindgen::prelude::*;

#[derive(Serialize)]
struct ArticleHit<'a> {
    id: &'a str,
    title: &'a str,
    score: f64,
}

#[derive(Serialize)]
struct TemplateHit<'a> {
    id: &'a str,
    category: &'a str,
    content: &'a str,
    score: Option<f64>,
    fallback: bool,
}

/// Search a help corpus and return ranked results as JSON.
///
/// # Arguments
/// * `query` - Search query
/// * `corpus_json` - JSON object with `categories`, `articles` and `synonyms`
/// * `max_results` - Maximum results to return (0 for the default of 8)
///
/// # Returns
/// JSON array of `{id, title, score}` sorted by score, or `[]` when the
/// corpus cannot be parsed
#[wasm_bindgen]
pub fn search_help(query: &str, corpus_json: &str, max_results: usize) -> String {
    let help = match HelpCenter::from_json_str(corpus_json) {
        Ok(help) => help,
        Err(_) => return "[]".to_string(),
    };

    let mut options = SearchOptions::default();
    if max_results > 0 {
        options.max_results = max_results;
    }
    let help = help.with_options(options);

    let outcome = help.search_scored(query);
    let hits: Vec<ArticleHit<'_>> = outcome
        .results
        .iter()
        .map(|r| ArticleHit {
            id: &r.item.id,
            title: &r.item.title,
            score: r.score,
        })
        .collect();

    serde_json::to_string(&hits).unwrap_or_else(|_| "[]".to_string())
}

/// Select the best support template for a question.
///
/// # Returns
/// JSON `{id, category, content, score, fallback}`, or `null` when nothing
/// can be selected or the input is malformed
#[wasm_bindgen]
pub fn select_template(query: &str, role: &str, templates_json: &str) -> String {
    let Ok(role) = role.parse::<Role>() else {
        return "null".to_string();
    };
    let Ok(assistant) = SupportAssistant::from_json_str(templates_json) else {
        return "null".to_string();
    };

    let selection = assistant.select(query, role, None);
    let Some(template) = selection.template() else {
        return "null".to_string();
    };

    let hit = TemplateHit {
        id: &template.id,
        category: &template.category,
        content: &template.content,
        score: selection.score(),
        fallback: selection.is_fallback(),
    };

    serde_json::to_string(&hit).unwrap_or_else(|_| "null".to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn help_json() -> String {
        let articles: Vec<serde_json::Value> = (0..10)
            .map(|i| {
                serde_json::json!({
                    "id": format!("pe-{i}"),
                    "title": format!("Wallet question {i}"),
                    "summary": "Payouts and balance",
                    "content": "Open the wallet tab.",
                    "keywords": ["wallet"],
                })
            })
            .collect();
        serde_json::json!({ "articles": articles, "synonyms": { "money": ["wallet"] } }).to_string()
    }

    const TEMPLATES: &str = r#"[
        {"id": "r-wallet", "role": "rider", "category": "wallet", "keywords": ["wallet"], "response": "Open the Wallet tab."},
        {"id": "x-help", "role": "general", "category": "general_help", "keywords": [], "response": "Check the Help Center.", "priority": 0}
    ]"#;

    fn parse(json: &str) -> serde_json::Value {
        serde_json::from_str(json).unwrap()
    }

    #[test]
    fn test_search_help_malformed_corpus() {
        assert_eq!(search_help("wallet", "{not json", 0), "[]");
    }

    #[test]
    fn test_search_help_zero_means_default_bound() {
        let hits = parse(&search_help("wallet", &help_json(), 0));
        assert_eq!(hits.as_array().unwrap().len(), 8);

        let hits = parse(&search_help("money", &help_json(), 2));
        let hits = hits.as_array().unwrap();
        assert_eq!(hits.len(), 2);
        assert_eq!(hits[0]["id"], "pe-0");
        assert!(hits[0]["score"].as_f64().unwrap() > 0.0);
    }

    #[test]
    fn test_select_template_match() {
        let hit = parse(&select_template("my wallet is empty", "rider", TEMPLATES));
        assert_eq!(hit["id"], "r-wallet");
        assert_eq!(hit["fallback"], false);
        assert_eq!(hit["score"].as_f64().unwrap(), 150.0);
    }

    #[test]
    fn test_select_template_catch_all() {
        let hit = parse(&select_template("hello", "driver", TEMPLATES));
        assert_eq!(hit["id"], "x-help");
        assert_eq!(hit["fallback"], true);
        assert!(hit["score"].is_null());
    }

    #[test]
    fn test_select_template_bad_input() {
        assert_eq!(select_template("wallet", "pilot", TEMPLATES), "null");
        assert_eq!(select_template("wallet", "rider", "[{"), "null");
    }

    #[test]
    fn test_select_template_nothing_selectable() {
        let only_rider = r#"[{"id": "r-wallet", "role": "rider", "keywords": ["wallet"], "response": "x"}]"#;
        assert_eq!(select_template("hello", "rider", only_rider), "null");
    }
}
