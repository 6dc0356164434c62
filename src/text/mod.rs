//! Serbian text helpers: Latin to Cyrillic transliteration, UI label
//! translations and localized dates.

mod date;
mod translations;
mod transliterate;

pub use date::{format_serbian_date, format_serbian_day, serbian_month};
pub use translations::t;
pub use transliterate::transliterate;
