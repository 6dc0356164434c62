//! Content core for "Читај о Заплању", a small regional publishing site.
//!
//! Serbian Latin to Cyrillic transliteration, UI label translations,
//! localized dates, article derivation from editor drafts and the
//! author-scoped article collection used by the editorial panels.

pub mod app;
pub mod articles;
pub mod config;
pub mod error;
pub mod models;
pub mod text;

pub use app::{App, AppAction, Panel, View};
pub use articles::{ArticleCollection, ArticleDeriver};
pub use config::Config;
pub use error::{AppError, Result};
pub use models::{Article, ArticleDraft, ArticleId, AuthorIdentity, Category, DraftDefaults};
pub use text::{format_serbian_date, t, transliterate};
