use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::AppError;
use crate::text::t;

#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ArticleId(String);

impl ArticleId {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ArticleId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(&self.0)
    }
}

impl From<&str> for ArticleId {
    fn from(value: &str) -> Self {
        Self(value.to_string())
    }
}

impl From<String> for ArticleId {
    fn from(value: String) -> Self {
        Self(value)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Category {
    Technology,
    #[default]
    Culture,
    Environment,
    Science,
    Philosophy,
}

impl Category {
    pub const ALL: [Category; 5] = [
        Category::Technology,
        Category::Culture,
        Category::Environment,
        Category::Science,
        Category::Philosophy,
    ];

    /// English key, also the lookup key in the translation table.
    pub fn key(&self) -> &'static str {
        match self {
            Category::Technology => "Technology",
            Category::Culture => "Culture",
            Category::Environment => "Environment",
            Category::Science => "Science",
            Category::Philosophy => "Philosophy",
        }
    }

    pub fn label(&self) -> &'static str {
        t(self.key())
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

impl FromStr for Category {
    type Err = AppError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        let trimmed = value.trim();
        Category::ALL
            .into_iter()
            .find(|c| c.key().eq_ignore_ascii_case(trimmed))
            .ok_or_else(|| AppError::UnknownCategory(trimmed.to_string()))
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Article {
    pub id: ArticleId,
    pub title: String,
    pub excerpt: String,
    pub content: String,
    pub author: String,
    pub date: String,
    pub read_time: String,
    pub category: Category,
    pub image: String,
    #[serde(default)]
    pub featured: bool,
}

impl Article {
    /// Content split into paragraphs on blank lines.
    pub fn paragraphs(&self) -> Vec<&str> {
        self.content
            .split("\n\n")
            .map(str::trim)
            .filter(|p| !p.is_empty())
            .collect()
    }

    pub fn read_minutes(&self) -> Option<u32> {
        self.read_time.split_whitespace().next()?.parse().ok()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample(content: &str) -> Article {
        Article {
            id: ArticleId::from("1"),
            title: "Title".to_string(),
            excerpt: "Excerpt".to_string(),
            content: content.to_string(),
            author: "Jane".to_string(),
            date: "1 јануар 2024 год".to_string(),
            read_time: "3 min read".to_string(),
            category: Category::Culture,
            image: String::new(),
            featured: false,
        }
    }

    #[test]
    fn paragraphs_split_on_blank_lines() {
        let article = sample("First paragraph.\n\n  Second one.  \n\n\n\nThird.");
        assert_eq!(
            article.paragraphs(),
            vec!["First paragraph.", "Second one.", "Third."]
        );
    }

    #[test]
    fn read_minutes_parses_leading_number() {
        assert_eq!(sample("x").read_minutes(), Some(3));
    }

    #[test]
    fn category_parses_case_insensitively() {
        assert_eq!("science".parse::<Category>().unwrap(), Category::Science);
        assert_eq!(" Culture ".parse::<Category>().unwrap(), Category::Culture);
        assert!(matches!(
            "Sports".parse::<Category>(),
            Err(AppError::UnknownCategory(name)) if name == "Sports"
        ));
    }

    #[test]
    fn category_label_is_cyrillic() {
        assert_eq!(Category::Environment.label(), "Животна средина");
        assert_eq!(Category::default(), Category::Culture);
    }

    #[test]
    fn article_uses_camel_case_json() {
        let json = serde_json::to_value(sample("x")).unwrap();
        assert_eq!(json["readTime"], "3 min read");
        assert_eq!(json["category"], "Culture");
        assert_eq!(json["id"], "1");
    }
}
