use serde::{Deserialize, Serialize};

use crate::error::{AppError, Result};

use super::{Article, AuthorIdentity, Category};

pub const PLACEHOLDER_IMAGE: &str =
    "https://images.pexels.com/photos/1112048/pexels-photo-1112048.jpeg?auto=compress&cs=tinysrgb&w=1600";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RequiredField {
    Title,
    Excerpt,
    Content,
}

impl RequiredField {
    pub fn as_str(&self) -> &'static str {
        match self {
            RequiredField::Title => "title",
            RequiredField::Excerpt => "excerpt",
            RequiredField::Content => "content",
        }
    }
}

/// Values used for every optional draft field left unset.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DraftDefaults {
    #[serde(default = "default_placeholder_image")]
    pub placeholder_image: String,

    #[serde(default)]
    pub category: Category,

    #[serde(default)]
    pub featured: bool,
}

fn default_placeholder_image() -> String {
    PLACEHOLDER_IMAGE.to_string()
}

impl Default for DraftDefaults {
    fn default() -> Self {
        Self {
            placeholder_image: default_placeholder_image(),
            category: Category::default(),
            featured: false,
        }
    }
}

/// Editor form payload. Required fields are plain strings so that an
/// empty form can be represented; optional fields fall back to
/// [`DraftDefaults`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ArticleDraft {
    pub title: String,
    pub excerpt: String,
    pub content: String,
    #[serde(default)]
    pub author: String,
    #[serde(default)]
    pub category: Option<Category>,
    #[serde(default)]
    pub image: Option<String>,
    #[serde(default)]
    pub featured: Option<bool>,
}

impl ArticleDraft {
    /// Empty form for a new story, signed with the author's byline.
    pub fn for_author(identity: &AuthorIdentity) -> Self {
        Self {
            author: identity.byline().unwrap_or_default().to_string(),
            ..Self::default()
        }
    }

    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    pub fn excerpt(mut self, excerpt: impl Into<String>) -> Self {
        self.excerpt = excerpt.into();
        self
    }

    pub fn content(mut self, content: impl Into<String>) -> Self {
        self.content = content.into();
        self
    }

    pub fn author(mut self, author: impl Into<String>) -> Self {
        self.author = author.into();
        self
    }

    pub fn category(mut self, category: Category) -> Self {
        self.category = Some(category);
        self
    }

    pub fn image(mut self, image: impl Into<String>) -> Self {
        self.image = Some(image.into());
        self
    }

    pub fn featured(mut self, featured: bool) -> Self {
        self.featured = Some(featured);
        self
    }

    pub fn missing_fields(&self) -> Vec<RequiredField> {
        [
            (RequiredField::Title, &self.title),
            (RequiredField::Excerpt, &self.excerpt),
            (RequiredField::Content, &self.content),
        ]
        .into_iter()
        .filter(|(_, value)| value.trim().is_empty())
        .map(|(field, _)| field)
        .collect()
    }

    pub fn validate(&self) -> Result<()> {
        let missing = self.missing_fields();
        if missing.is_empty() {
            Ok(())
        } else {
            Err(AppError::MissingRequiredField(missing))
        }
    }
}

impl From<&Article> for ArticleDraft {
    /// Pre-fills the edit form from a stored article.
    fn from(article: &Article) -> Self {
        Self {
            title: article.title.clone(),
            excerpt: article.excerpt.clone(),
            content: article.content.clone(),
            author: article.author.clone(),
            category: Some(article.category),
            image: Some(article.image.clone()),
            featured: Some(article.featured),
        }
    }
}
