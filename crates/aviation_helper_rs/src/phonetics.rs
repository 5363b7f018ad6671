//! Spoken-word equivalences used when comparing read-backs.
//!
//! Each entry maps a spoken word to the symbol it stands for. Several words may
//! share a symbol (`niner`, `nine` -> `9`).

pub const PHONETIC_EQUIVALENTS: &[(&str, &str)] = &[
    ("niner", "9"),
    ("nine", "9"),
    ("fiver", "5"),
    ("five", "5"),
    ("tree", "3"),
    ("three", "3"),
    ("alpha", "a"),
    ("bravo", "b"),
    ("charlie", "c"),
    ("delta", "d"),
    ("echo", "e"),
    ("foxtrot", "f"),
    ("golf", "g"),
    ("hotel", "h"),
    ("india", "i"),
    ("juliet", "j"),
    ("kilo", "k"),
    ("lima", "l"),
    ("mike", "m"),
    ("november", "n"),
    ("oscar", "o"),
    ("papa", "p"),
    ("quebec", "q"),
    ("romeo", "r"),
    ("sierra", "s"),
    ("tango", "t"),
    ("uniform", "u"),
    ("victor", "v"),
    ("whiskey", "w"),
    ("xray", "x"),
    ("yankee", "y"),
    ("zulu", "z"),
];

/// Symbol spoken as `word`, if `word` is a known spelling or number word.
/// Expects lower-case input.
pub fn symbol_for(word: &str) -> Option<&'static str> {
    PHONETIC_EQUIVALENTS
        .iter()
        .find(|(phonetic, _)| *phonetic == word)
        .map(|(_, symbol)| *symbol)
}

/// All spoken words standing for `symbol`, in table order.
pub fn words_for(symbol: &str) -> impl Iterator<Item = &'static str> + '_ {
    PHONETIC_EQUIVALENTS
        .iter()
        .filter(move |(_, s)| *s == symbol)
        .map(|(word, _)| *word)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_full_spelling_alphabet() {
        let letters: String = PHONETIC_EQUIVALENTS
            .iter()
            .filter(|(_, s)| s.chars().all(|c| c.is_ascii_lowercase()))
            .map(|(_, s)| *s)
            .collect();
        assert_eq!(letters, "abcdefghijklmnopqrstuvwxyz");
    }

    #[test]
    fn test_symbol_lookup() {
        assert_eq!(symbol_for("alpha"), Some("a"));
        assert_eq!(symbol_for("niner"), Some("9"));
        assert_eq!(symbol_for("tree"), Some("3"));
        assert_eq!(symbol_for("Alpha"), None);
        assert_eq!(symbol_for("four"), None);
    }

    #[test]
    fn test_reverse_lookup() {
        assert_eq!(words_for("9").collect::<Vec<_>>(), vec!["niner", "nine"]);
        assert_eq!(words_for("5").collect::<Vec<_>>(), vec!["fiver", "five"]);
        assert_eq!(words_for("z").collect::<Vec<_>>(), vec!["zulu"]);
        assert_eq!(words_for("7").count(), 0);
    }
}
