use crate::articles::{ArticleCollection, ArticleDeriver};
use crate::config::Config;
use crate::error::{AppError, Result};
use crate::models::{Article, ArticleDraft, ArticleId, AuthorIdentity};

/// Which side of the site the session is acting as. Signing in happens
/// elsewhere; the caller picks the panel once it trusts the user.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum Panel {
    #[default]
    Reader,
    Author(AuthorIdentity),
    Admin,
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum View {
    #[default]
    Home,
    Post(ArticleId),
}

#[derive(Debug, Clone)]
pub enum AppAction {
    Quit,
    ViewPost(ArticleId),
    BackToHome,
    Search(String),
    SwitchPanel(Panel),
    /// `editing` is the id of the article being edited, `None` for a new one.
    Save {
        draft: ArticleDraft,
        editing: Option<ArticleId>,
    },
    Delete(ArticleId),
}

pub struct App {
    // Data
    pub articles: ArticleCollection,

    // UI State
    pub view: View,
    pub panel: Panel,
    pub search_query: String,
    pub cyrillic_output: bool,

    deriver: ArticleDeriver,
}

impl App {
    pub fn new(config: &Config, articles: ArticleCollection) -> Self {
        Self {
            articles,
            view: View::Home,
            panel: Panel::Reader,
            search_query: String::new(),
            cyrillic_output: config.cyrillic_output,
            deriver: ArticleDeriver::new(config.defaults.clone()),
        }
    }

    /// Loads the configured seed file, or starts empty.
    pub fn from_config(config: &Config) -> Result<Self> {
        let articles = match &config.seed_path {
            Some(path) => ArticleCollection::load(path)?,
            None => ArticleCollection::new(),
        };
        Ok(Self::new(config, articles))
    }

    /// Articles on the home page, narrowed by the current search.
    pub fn visible_articles(&self) -> Vec<&Article> {
        self.articles.search(&self.search_query)
    }

    pub fn current_article(&self) -> Option<&Article> {
        match &self.view {
            View::Home => None,
            View::Post(id) => self.articles.get(id),
        }
    }

    /// Articles the current panel may edit or delete.
    pub fn editable_articles(&self) -> Vec<&Article> {
        match &self.panel {
            Panel::Reader => Vec::new(),
            Panel::Author(identity) => self.articles.filter_by_author(identity),
            Panel::Admin => self.articles.iter().collect(),
        }
    }

    fn editable(&self, id: &ArticleId) -> Result<&Article> {
        self.editable_articles()
            .into_iter()
            .find(|a| &a.id == id)
            .ok_or_else(|| AppError::NotFound(id.clone()))
    }

    /// Blank form for the "new story" button of the current panel.
    pub fn new_draft(&self) -> ArticleDraft {
        match &self.panel {
            Panel::Author(identity) => ArticleDraft::for_author(identity),
            Panel::Reader | Panel::Admin => ArticleDraft::default(),
        }
    }

    /// Returns `Ok(true)` when the session should end.
    pub fn handle_action(&mut self, action: AppAction) -> Result<bool> {
        match action {
            AppAction::Quit => return Ok(true),

            AppAction::ViewPost(id) => {
                if self.articles.contains(&id) {
                    self.view = View::Post(id);
                } else {
                    tracing::warn!("No article {}, staying on home", id);
                    self.view = View::Home;
                }
            }

            AppAction::BackToHome => {
                self.view = View::Home;
            }

            AppAction::Search(query) => {
                self.search_query = query;
            }

            AppAction::SwitchPanel(panel) => {
                self.panel = panel;
            }

            AppAction::Save { draft, editing } => {
                self.save(draft, editing)?;
            }

            AppAction::Delete(id) => {
                self.editable(&id)?;
                self.articles.remove(&id)?;
                if self.view == View::Post(id) {
                    self.view = View::Home;
                }
            }
        }

        Ok(false)
    }

    fn save(&mut self, mut draft: ArticleDraft, editing: Option<ArticleId>) -> Result<()> {
        if let Panel::Author(identity) = &self.panel {
            // Articles signed with an empty byline could never be matched
            // back to their author.
            if identity.byline().is_none() {
                tracing::warn!("Author panel without an identity cannot save articles");
                return Err(AppError::AnonymousAuthor);
            }
            if draft.author.trim().is_empty() {
                draft.author = identity.byline().unwrap_or_default().to_string();
            }
        }

        match editing {
            Some(id) => {
                let existing = self.editable(&id)?.clone();
                let article = self.deriver.derive(draft, Some(&existing))?;
                self.articles.replace(article)
            }
            None => {
                if self.panel == Panel::Reader {
                    tracing::warn!("Reader panel cannot publish articles");
                    return Err(AppError::ReadOnlyPanel);
                }
                let article = self.deriver.derive(draft, None)?;
                self.articles.insert(article)
            }
        }
    }
}
