mod article;
mod draft;
mod identity;

pub use article::{Article, ArticleId, Category};
pub use draft::{ArticleDraft, DraftDefaults, RequiredField, PLACEHOLDER_IMAGE};
pub use identity::AuthorIdentity;
