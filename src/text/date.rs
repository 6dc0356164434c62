use chrono::{Datelike, NaiveDate};

const MONTHS: [(&str, &str); 12] = [
    ("January", "јануар"),
    ("February", "фебруар"),
    ("March", "март"),
    ("April", "април"),
    ("May", "мај"),
    ("June", "јун"),
    ("July", "јул"),
    ("August", "август"),
    ("September", "септембар"),
    ("October", "октобар"),
    ("November", "новембар"),
    ("December", "децембар"),
];

/// Serbian name for a month number in `1..=12`.
pub fn serbian_month(month: u32) -> Option<&'static str> {
    let index = usize::try_from(month).ok()?.checked_sub(1)?;
    MONTHS.get(index).map(|(_, serbian)| *serbian)
}

/// Rewrites `"March 15, 2024"` as `"15 март 2024 год"`.
///
/// Input with fewer than three words is returned as is. An unknown month
/// name is kept, lower-cased.
pub fn format_serbian_date(english_date: &str) -> String {
    let parts: Vec<&str> = english_date.split_whitespace().collect();
    let &[month, day, year, ..] = parts.as_slice() else {
        return english_date.to_string();
    };

    let day = day.strip_suffix(',').unwrap_or(day);
    let serbian = MONTHS
        .iter()
        .find(|(english, _)| *english == month)
        .map(|(_, serbian)| (*serbian).to_string())
        .unwrap_or_else(|| month.to_lowercase());

    format!("{day} {serbian} {year} год")
}

/// Formats a calendar day as `"1 јануар 2024 год"`.
pub fn format_serbian_day(date: NaiveDate) -> String {
    // month() is always 1..=12
    let month = serbian_month(date.month()).unwrap_or_default();
    format!("{} {} {} год", date.day(), month, date.year())
}
