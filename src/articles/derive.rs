use chrono::{DateTime, Local, NaiveDate, Utc};

use crate::error::Result;
use crate::models::{Article, ArticleDraft, ArticleId, DraftDefaults};
use crate::text::format_serbian_day;

pub const WORDS_PER_MINUTE: usize = 200;

pub fn word_count(content: &str) -> usize {
    content.split_whitespace().count()
}

/// `"<N> min read"`, never less than one minute.
pub fn read_time(content: &str) -> String {
    let minutes = word_count(content).div_ceil(WORDS_PER_MINUTE).max(1);
    format!("{minutes} min read")
}

/// Hands out millisecond-timestamp ids, bumping past the last id issued so
/// two articles created within the same millisecond still differ.
#[derive(Debug, Default)]
pub struct IdGenerator {
    last: i64,
}

impl IdGenerator {
    pub fn next_at(&mut self, now: DateTime<Utc>) -> ArticleId {
        let millis = now.timestamp_millis().max(self.last + 1);
        self.last = millis;
        ArticleId::from(millis.to_string())
    }
}

/// Turns editor drafts into finished articles.
#[derive(Debug, Default)]
pub struct ArticleDeriver {
    defaults: DraftDefaults,
    ids: IdGenerator,
}

impl ArticleDeriver {
    pub fn new(defaults: DraftDefaults) -> Self {
        Self {
            defaults,
            ids: IdGenerator::default(),
        }
    }

    /// Builds an article from `draft`. With `existing` the id and
    /// publication date are carried over; otherwise a new id is issued and
    /// the date is today.
    pub fn derive(&mut self, draft: ArticleDraft, existing: Option<&Article>) -> Result<Article> {
        self.derive_at(draft, existing, Utc::now(), Local::now().date_naive())
    }

    pub fn derive_at(
        &mut self,
        draft: ArticleDraft,
        existing: Option<&Article>,
        now: DateTime<Utc>,
        today: NaiveDate,
    ) -> Result<Article> {
        draft.validate()?;

        let (id, date) = match existing {
            Some(article) => (article.id.clone(), article.date.clone()),
            None => (self.ids.next_at(now), format_serbian_day(today)),
        };

        let image = draft
            .image
            .filter(|url| !url.trim().is_empty())
            .unwrap_or_else(|| self.defaults.placeholder_image.clone());

        let article = Article {
            id,
            read_time: read_time(&draft.content),
            title: draft.title,
            excerpt: draft.excerpt,
            content: draft.content,
            author: draft.author,
            date,
            category: draft.category.unwrap_or(self.defaults.category),
            image,
            featured: draft.featured.unwrap_or(self.defaults.featured),
        };

        tracing::debug!(
            "Derived article {} ({}, {})",
            article.id,
            article.read_time,
            if existing.is_some() { "edit" } else { "new" }
        );

        Ok(article)
    }
}
