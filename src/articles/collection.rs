use std::collections::HashSet;
use std::path::Path;

use crate::error::{AppError, Result};
use crate::models::{Article, ArticleId, AuthorIdentity};

/// Articles in display order, newest first. Ids are unique.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ArticleCollection {
    articles: Vec<Article>,
}

impl ArticleCollection {
    pub fn new() -> Self {
        Self::default()
    }

    /// Takes articles already in display order.
    pub fn from_articles(articles: Vec<Article>) -> Result<Self> {
        let mut seen = HashSet::new();
        for article in &articles {
            if !seen.insert(&article.id) {
                return Err(AppError::DuplicateId(article.id.clone()));
            }
        }
        Ok(Self { articles })
    }

    /// Reads a JSON array of articles.
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let articles: Vec<Article> = serde_json::from_str(&content)?;
        tracing::debug!("Loaded {} articles from {:?}", articles.len(), path);
        Self::from_articles(articles)
    }

    pub fn len(&self) -> usize {
        self.articles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.articles.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Article> {
        self.articles.iter()
    }

    pub fn get(&self, id: &ArticleId) -> Option<&Article> {
        self.articles.iter().find(|a| &a.id == id)
    }

    pub fn contains(&self, id: &ArticleId) -> bool {
        self.get(id).is_some()
    }

    /// Adds an article at the front.
    pub fn insert(&mut self, article: Article) -> Result<()> {
        if self.contains(&article.id) {
            return Err(AppError::DuplicateId(article.id));
        }
        tracing::info!("Inserted article {}", article.id);
        self.articles.insert(0, article);
        Ok(())
    }

    /// Swaps in `article` for the stored one with the same id, keeping its
    /// position.
    pub fn replace(&mut self, article: Article) -> Result<()> {
        let Some(slot) = self.articles.iter_mut().find(|a| a.id == article.id) else {
            return Err(AppError::NotFound(article.id));
        };
        tracing::info!("Replaced article {}", article.id);
        *slot = article;
        Ok(())
    }

    pub fn remove(&mut self, id: &ArticleId) -> Result<Article> {
        let index = self
            .articles
            .iter()
            .position(|a| &a.id == id)
            .ok_or_else(|| AppError::NotFound(id.clone()))?;
        tracing::info!("Removed article {}", id);
        Ok(self.articles.remove(index))
    }

    /// Articles whose author is the identity's display name or email.
    pub fn filter_by_author(&self, identity: &AuthorIdentity) -> Vec<&Article> {
        self.articles
            .iter()
            .filter(|a| identity.owns(&a.author))
            .collect()
    }

    /// First article marked featured, else the newest one.
    pub fn featured(&self) -> Option<&Article> {
        self.articles
            .iter()
            .find(|a| a.featured)
            .or_else(|| self.articles.first())
    }

    /// Case-insensitive match on title, excerpt and category label.
    pub fn search(&self, query: &str) -> Vec<&Article> {
        let query = query.trim().to_lowercase();
        if query.is_empty() {
            return self.articles.iter().collect();
        }
        self.articles
            .iter()
            .filter(|a| {
                a.title.to_lowercase().contains(&query)
                    || a.excerpt.to_lowercase().contains(&query)
                    || a.category.label().to_lowercase().contains(&query)
            })
            .collect()
    }

    /// Other articles in the same category.
    pub fn related(&self, article: &Article, limit: usize) -> Vec<&Article> {
        self.articles
            .iter()
            .filter(|a| a.category == article.category && a.id != article.id)
            .take(limit)
            .collect()
    }
}

impl<'a> IntoIterator for &'a ArticleCollection {
    type Item = &'a Article;
    type IntoIter = std::slice::Iter<'a, Article>;

    fn into_iter(self) -> Self::IntoIter {
        self.articles.iter()
    }
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use super::*;
    use crate::models::Category;

    fn article(id: &str, author: &str, category: Category) -> Article {
        Article {
            id: ArticleId::from(id),
            title: format!("Priča {id}"),
            excerpt: "Kratak opis".to_string(),
            content: "Tekst".to_string(),
            author: author.to_string(),
            date: "1 јануар 2024 год".to_string(),
            read_time: "1 min read".to_string(),
            category,
            image: String::new(),
            featured: false,
        }
    }

    fn ids<'a>(articles: impl IntoIterator<Item = &'a Article>) -> Vec<&'a str> {
        articles.into_iter().map(|a| a.id.as_str()).collect()
    }

    fn sample() -> ArticleCollection {
        ArticleCollection::from_articles(vec![
            article("1", "Jane", Category::Culture),
            article("2", "Bob", Category::Science),
            article("3", "jane@example.com", Category::Culture),
            article("4", "Bob", Category::Culture),
            article("5", "Jane", Category::Science),
        ])
        .unwrap()
    }

    #[test]
    fn insert_prepends() {
        let mut articles = sample();
        articles
            .insert(article("6", "Jane", Category::Culture))
            .unwrap();
        assert_eq!(ids(&articles), vec!["6", "1", "2", "3", "4", "5"]);
    }

    #[test]
    fn insert_rejects_duplicate_id() {
        let mut articles = sample();
        let err = articles
            .insert(article("3", "Jane", Category::Culture))
            .unwrap_err();
        assert!(matches!(err, AppError::DuplicateId(id) if id.as_str() == "3"));
        assert_eq!(articles.len(), 5);
    }

    #[test]
    fn replace_keeps_position() {
        let mut articles = sample();
        let mut updated = article("3", "Jane", Category::Science);
        updated.title = "Nova".to_string();
        articles.replace(updated).unwrap();

        assert_eq!(ids(&articles), vec!["1", "2", "3", "4", "5"]);
        assert_eq!(articles.get(&ArticleId::from("3")).unwrap().title, "Nova");
    }

    #[test]
    fn replace_missing_is_not_found() {
        let mut articles = sample();
        let before = articles.clone();
        let err = articles
            .replace(article("99", "Jane", Category::Culture))
            .unwrap_err();
        assert!(matches!(err, AppError::NotFound(_)));
        assert_eq!(articles, before);
    }

    #[test]
    fn remove_by_id() {
        let mut articles = sample();
        let removed = articles.remove(&ArticleId::from("2")).unwrap();
        assert_eq!(removed.author, "Bob");
        assert_eq!(ids(&articles), vec!["1", "3", "4", "5"]);

        assert!(matches!(
            articles.remove(&ArticleId::from("2")),
            Err(AppError::NotFound(_))
        ));
    }

    #[test]
    fn filter_by_author_keeps_order() {
        let articles = sample();
        let jane = AuthorIdentity::new("Jane", "jane@example.com");
        assert_eq!(ids(articles.filter_by_author(&jane)), vec!["1", "3", "5"]);

        let only_name = AuthorIdentity::with_display_name("Jane");
        assert_eq!(ids(articles.filter_by_author(&only_name)), vec!["1", "5"]);
    }

    #[test]
    fn featured_falls_back_to_newest() {
        let mut articles = sample();
        assert_eq!(articles.featured().unwrap().id.as_str(), "1");

        let mut star = article("4", "Bob", Category::Culture);
        star.featured = true;
        articles.replace(star).unwrap();
        assert_eq!(articles.featured().unwrap().id.as_str(), "4");

        assert!(ArticleCollection::new().featured().is_none());
    }

    #[test]
    fn search_matches_title_and_category_label() {
        let articles = sample();
        assert_eq!(ids(articles.search("priča 2")), vec!["2"]);
        assert_eq!(ids(articles.search("НАУКА")), vec!["2", "5"]);
        assert_eq!(articles.search("  ").len(), 5);
        assert!(articles.search("nema").is_empty());
    }

    #[test]
    fn related_excludes_self() {
        let articles = sample();
        let first = articles.get(&ArticleId::from("1")).unwrap();
        assert_eq!(ids(articles.related(first, 3)), vec!["3", "4"]);
        assert_eq!(ids(articles.related(first, 1)), vec!["3"]);
    }

    #[test]
    fn from_articles_rejects_duplicates() {
        let result = ArticleCollection::from_articles(vec![
            article("1", "Jane", Category::Culture),
            article("1", "Bob", Category::Culture),
        ]);
        assert!(matches!(result, Err(AppError::DuplicateId(_))));
    }

    #[test]
    fn load_reads_json_seed() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(
            file,
            r#"[{{"id":"7","title":"Vlasina","excerpt":"Jezero","content":"Tekst",
                "author":"Jane","date":"15 март 2024 год","readTime":"1 min read",
                "category":"Environment","image":"https://example.com/v.jpg"}}]"#
        )
        .unwrap();

        let articles = ArticleCollection::load(file.path()).unwrap();
        let vlasina = articles.get(&ArticleId::from("7")).unwrap();
        assert_eq!(vlasina.category, Category::Environment);
        assert!(!vlasina.featured);
    }
}
