use std::io::Write;
use std::path::PathBuf;

use anyhow::Context;
use clap::{Parser, Subcommand};

use zaplanje_press::{
    format_serbian_date, t, transliterate, App, AppAction, Article, ArticleDraft, ArticleId,
    AuthorIdentity, Category, Panel,
};

const WRAP_WIDTH: usize = 80;
const RELATED_LIMIT: usize = 3;

#[derive(Debug, Parser)]
#[command(name = "zaplanje", version, about = "Читај о Заплању: content tools")]
pub struct Cli {
    /// Config file to use instead of the default location
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Convert Serbian Latin text to Cyrillic
    Transliterate {
        #[arg(required = true)]
        text: Vec<String>,
    },
    /// Look up the Cyrillic label for a UI key
    Translate { key: String },
    /// Localize a date such as "March 15, 2024"
    Date {
        #[arg(required = true)]
        text: Vec<String>,
    },
    /// List stories, optionally only those of one author
    List {
        #[arg(long)]
        author: Option<String>,
        #[arg(long)]
        email: Option<String>,
        #[arg(long, conflicts_with_all = ["author", "email"])]
        search: Option<String>,
    },
    /// Print one story
    Show {
        id: String,
        /// Keep the text in Latin script
        #[arg(long)]
        latin: bool,
    },
    /// Build an article from form fields and print it as JSON
    Derive {
        #[arg(long)]
        title: String,
        #[arg(long)]
        excerpt: String,
        #[arg(long)]
        content: String,
        #[arg(long, default_value = "")]
        author: String,
        #[arg(long)]
        category: Option<Category>,
        #[arg(long)]
        image: Option<String>,
        #[arg(long)]
        featured: bool,
    },
}

pub fn run(command: Command, app: &mut App, out: &mut impl Write) -> anyhow::Result<()> {
    match command {
        Command::Transliterate { text } => {
            writeln!(out, "{}", transliterate(&text.join(" ")))?;
        }

        Command::Translate { key } => {
            writeln!(out, "{}", t(&key))?;
        }

        Command::Date { text } => {
            writeln!(out, "{}", format_serbian_date(&text.join(" ")))?;
        }

        Command::List {
            author,
            email,
            search,
        } => {
            if author.is_some() || email.is_some() {
                let identity = AuthorIdentity {
                    display_name: author,
                    email,
                };
                app.handle_action(AppAction::SwitchPanel(Panel::Author(identity)))?;
                write_author_list(app, out)?;
            } else {
                if let Some(query) = search {
                    app.handle_action(AppAction::Search(query))?;
                }
                write_home(app, out)?;
            }
        }

        Command::Show { id, latin } => {
            app.handle_action(AppAction::ViewPost(ArticleId::from(id.as_str())))?;
            let article = app
                .current_article()
                .with_context(|| format!("no story with id {id}"))?;
            let cyrillic = app.cyrillic_output && !latin;
            write_article(app, article, cyrillic, out)?;
        }

        Command::Derive {
            title,
            excerpt,
            content,
            author,
            category,
            image,
            featured,
        } => {
            let mut draft = ArticleDraft::default()
                .title(title)
                .excerpt(excerpt)
                .content(content)
                .author(author);
            draft.category = category;
            draft.image = image;
            draft.featured = featured.then_some(true);

            app.handle_action(AppAction::SwitchPanel(Panel::Admin))?;
            app.handle_action(AppAction::Save {
                draft,
                editing: None,
            })?;
            let article = app
                .articles
                .iter()
                .next()
                .context("derived article was not stored")?;
            writeln!(out, "{}", serde_json::to_string_pretty(article)?)?;
        }
    }

    Ok(())
}

fn localize(app: &App, text: &str) -> String {
    if app.cyrillic_output {
        transliterate(text)
    } else {
        text.to_string()
    }
}

fn summary_line(app: &App, article: &Article) -> String {
    format!(
        "{:>14}  {}  [{}]  {}",
        article.id,
        article.date,
        article.category.label(),
        localize(app, &article.title)
    )
}

fn write_home(app: &App, out: &mut impl Write) -> anyhow::Result<()> {
    writeln!(out, "{}", t("Readwell"))?;
    writeln!(out)?;

    let visible = app.visible_articles();
    if visible.is_empty() {
        if app.search_query.trim().is_empty() {
            writeln!(out, "{}", t("No stories yet"))?;
        } else {
            writeln!(out, "{} \"{}\"", t("No stories found matching"), app.search_query)?;
        }
        return Ok(());
    }

    if app.search_query.trim().is_empty() {
        if let Some(featured) = app.articles.featured() {
            writeln!(out, "{}", t("Featured Story"))?;
            writeln!(out, "{}", summary_line(app, featured))?;
            writeln!(out)?;
        }
    }

    writeln!(out, "{}", t("Recent Stories"))?;
    for article in visible {
        writeln!(out, "{}", summary_line(app, article))?;
    }
    Ok(())
}

fn write_author_list(app: &App, out: &mut impl Write) -> anyhow::Result<()> {
    let own = app.editable_articles();
    writeln!(out, "{} ({})", t("Stories"), own.len())?;
    for article in own {
        writeln!(out, "{}  {}", summary_line(app, article), article.read_time)?;
    }
    Ok(())
}

fn write_article(
    app: &App,
    article: &Article,
    cyrillic: bool,
    out: &mut impl Write,
) -> anyhow::Result<()> {
    let convert = |text: &str| {
        if cyrillic {
            transliterate(text)
        } else {
            text.to_string()
        }
    };

    writeln!(out, "{}", convert(&article.title))?;
    writeln!(
        out,
        "{} · {} · {} {}",
        convert(&article.author),
        article.date,
        article.read_minutes().unwrap_or(1),
        t("min read")
    )?;
    writeln!(out, "{}", article.category.label())?;
    writeln!(out)?;
    writeln!(out, "{}", textwrap::fill(&convert(&article.excerpt), WRAP_WIDTH))?;

    for paragraph in article.paragraphs() {
        writeln!(out)?;
        writeln!(out, "{}", textwrap::fill(&convert(paragraph), WRAP_WIDTH))?;
    }

    let related = app.articles.related(article, RELATED_LIMIT);
    if !related.is_empty() {
        writeln!(out)?;
        writeln!(out, "{} {}", t("More in"), article.category.label())?;
        for other in related {
            writeln!(out, "  {}  {}", other.id, convert(&other.title))?;
        }
    }
    Ok(())
}
