/// Digraphs in match order. Each is replaced everywhere before the next
/// one is considered, and all of them before single letters.
const DIGRAPHS: [(&str, &str); 12] = [
    ("dž", "џ"),
    ("Dž", "Џ"),
    ("DŽ", "Џ"),
    ("lj", "љ"),
    ("Lj", "Љ"),
    ("LJ", "Љ"),
    ("nj", "њ"),
    ("Nj", "Њ"),
    ("NJ", "Њ"),
    ("dj", "ђ"),
    ("Dj", "Ђ"),
    ("DJ", "Ђ"),
];

fn letter(c: char) -> Option<&'static str> {
    let mapped = match c {
        'a' => "а",
        'A' => "А",
        'b' => "б",
        'B' => "Б",
        'c' => "ц",
        'C' => "Ц",
        'd' => "д",
        'D' => "Д",
        'e' => "е",
        'E' => "Е",
        'f' => "ф",
        'F' => "Ф",
        'g' => "г",
        'G' => "Г",
        'h' => "х",
        'H' => "Х",
        'i' => "и",
        'I' => "И",
        'j' => "ј",
        'J' => "Ј",
        'k' => "к",
        'K' => "К",
        'l' => "л",
        'L' => "Л",
        'm' => "м",
        'M' => "М",
        'n' => "н",
        'N' => "Н",
        'o' => "о",
        'O' => "О",
        'p' => "п",
        'P' => "П",
        'r' => "р",
        'R' => "Р",
        's' => "с",
        'S' => "С",
        't' => "т",
        'T' => "Т",
        'u' => "у",
        'U' => "У",
        'v' => "в",
        'V' => "В",
        'z' => "з",
        'Z' => "З",
        'đ' => "ђ",
        'Đ' => "Ђ",
        'č' => "ч",
        'Č' => "Ч",
        'ć' => "ћ",
        'Ć' => "Ћ",
        'š' => "ш",
        'Š' => "Ш",
        'ž' => "ж",
        'Ž' => "Ж",
        // No Serbian letter; closest sound.
        'w' => "в",
        'W' => "В",
        'x' => "кс",
        'X' => "КС",
        'y' => "ј",
        'Y' => "Ј",
        'q' => "кв",
        'Q' => "КВ",
        _ => return None,
    };
    Some(mapped)
}

/// Converts Serbian Latin text to Serbian Cyrillic.
///
/// Anything that is not a Latin letter (digits, punctuation, whitespace,
/// text already in Cyrillic) is copied through unchanged. Digraph casings
/// other than `lj`, `Lj` and `LJ` (e.g. `lJ`) are not treated as digraphs
/// and end up as two separate letters.
pub fn transliterate(text: &str) -> String {
    let mut result = text.to_string();
    for (latin, cyrillic) in DIGRAPHS {
        if result.contains(latin) {
            result = result.replace(latin, cyrillic);
        }
    }

    let mut out = String::with_capacity(result.len());
    for c in result.chars() {
        match letter(c) {
            Some(mapped) => out.push_str(mapped),
            None => out.push(c),
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_string() {
        assert_eq!(transliterate(""), "");
    }

    #[test]
    fn digraphs_become_single_letters() {
        assert_eq!(transliterate("nadžak"), "наџак");
        assert_eq!(transliterate("Njegov"), "Његов");
        assert_eq!(transliterate("ljubav"), "љубав");
        assert_eq!(transliterate("LJUBAV"), "ЉУБАВ");
        assert_eq!(transliterate("Djordje"), "Ђорђе");
        assert_eq!(transliterate("DŽEP"), "ЏЕП");
    }

    #[test]
    fn diacritics() {
        assert_eq!(transliterate("čaša"), "чаша");
        assert_eq!(transliterate("Ćuprija"), "Ћуприја");
        assert_eq!(transliterate("Đak žuri"), "Ђак жури");
    }

    #[test]
    fn approximated_letters() {
        assert_eq!(transliterate("wxyq"), "вксјкв");
        assert_eq!(transliterate("WXYQ"), "ВКСЈКВ");
    }

    #[test]
    fn mixed_case_digraph_falls_through() {
        assert_eq!(transliterate("nJegov"), "нЈегов");
        assert_eq!(transliterate("lJ"), "лЈ");
    }

    #[test]
    fn non_letters_pass_through() {
        let s = "0123 456-789, !?.;:\t\n()[]";
        assert_eq!(transliterate(s), s);
    }

    #[test]
    fn cyrillic_is_untouched() {
        let s = "Читај о Заплању";
        assert_eq!(transliterate(s), s);
    }

    #[test]
    fn second_pass_is_noop() {
        for s in ["Zaplanje je lep kraj", "Gadžin Han", "NJIVA i LJUDI", "wow, quiz!"] {
            let once = transliterate(s);
            assert_eq!(transliterate(&once), once);
        }
    }

    #[test]
    fn sentence() {
        assert_eq!(transliterate("Gadžin Han, 2024."), "Гаџин Хан, 2024.");
    }
}
