use thiserror::Error;

use crate::models::{ArticleId, RequiredField};

pub type Result<T> = std::result::Result<T, AppError>;

#[derive(Debug, Error)]
pub enum AppError {
    #[error("missing required field(s): {}", describe_fields(.0))]
    MissingRequiredField(Vec<RequiredField>),

    #[error("article not found: {0}")]
    NotFound(ArticleId),

    #[error("article id already in use: {0}")]
    DuplicateId(ArticleId),

    #[error("the reader panel cannot publish articles")]
    ReadOnlyPanel,

    #[error("author has neither a display name nor an email")]
    AnonymousAuthor,

    #[error("unknown category: {0}")]
    UnknownCategory(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("TOML parse error: {0}")]
    TomlDe(#[from] toml::de::Error),

    #[error("Config error: {0}")]
    Config(String),
}

fn describe_fields(fields: &[RequiredField]) -> String {
    fields
        .iter()
        .map(|field| field.as_str())
        .collect::<Vec<_>>()
        .join(", ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_fields_are_listed_in_message() {
        let err = AppError::MissingRequiredField(vec![RequiredField::Title, RequiredField::Content]);
        assert_eq!(err.to_string(), "missing required field(s): title, content");
    }

    #[test]
    fn not_found_names_the_id() {
        let err = AppError::NotFound(ArticleId::from("42"));
        assert_eq!(err.to_string(), "article not found: 42");
    }
}
