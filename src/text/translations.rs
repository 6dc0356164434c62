use std::collections::HashMap;
use std::sync::OnceLock;

const TRANSLATIONS: &[(&str, &str)] = &[
    // Header
    ("Readwell", "Читај о Заплању"),
    ("Stories", "Приче"),
    ("Authors", "Аутори"),
    ("Categories", "Категорије"),
    ("About", "О нама"),
    // Homepage
    ("Stories Worth", "Приче вредне"),
    ("Reading", "читања"),
    (
        "Discover thoughtful articles, deep insights, and beautiful narratives crafted for the modern reader.",
        "Откријте промишљене чланке, дубоке увиде и прелепе наративе о Заплању и његовим људима.",
    ),
    ("Featured Story", "Истакнута прича"),
    ("Recent Stories", "Недавне приче"),
    ("Latest Story", "Најновија прича"),
    ("Read Story", "Прочитај причу"),
    ("No stories found matching", "Нема пронађених прича за"),
    ("No stories yet", "Још нема објављених прича"),
    // Article page
    ("Back to Stories", "Назад на приче"),
    ("More in", "Више у"),
    ("min read", "мин читања"),
    // Categories
    ("Technology", "Технологија"),
    ("Culture", "Култура"),
    ("Environment", "Животна средина"),
    ("Science", "Наука"),
    ("Philosophy", "Филозофија"),
    // Common
    ("Back to top", "Назад на врх"),
];

static TABLE: OnceLock<HashMap<&'static str, &'static str>> = OnceLock::new();

fn table() -> &'static HashMap<&'static str, &'static str> {
    TABLE.get_or_init(|| TRANSLATIONS.iter().copied().collect())
}

/// Looks up the Cyrillic label for a UI key, returning the key itself
/// when there is no translation.
pub fn t(key: &str) -> &str {
    table().get(key).copied().unwrap_or(key)
}
