mod collection;
mod derive;

pub use collection::ArticleCollection;
pub use derive::{read_time, word_count, ArticleDeriver, IdGenerator, WORDS_PER_MINUTE};
