/// Split text into bag-of-words terms.
///
/// Lowercases, splits on anything that is not alphanumeric or `_`, and
/// drops single-character tokens. No stemming, no stop words.
///
/// "Alphanumeric" is [`char::is_alphanumeric`], so combining marks with the
/// Other_Alphabetic property (Devanagari vowel signs, for one) stay inside
/// a word while marks without it (the virama) split. A regex `\w` token
/// pattern that excludes all combining marks splits such text differently.
#[inline]
pub fn tokenize(text: &str) -> Vec<String> {
    text.to_lowercase()
        .split(|c: char| !is_word_char(c))
        .filter(|s| s.chars().nth(1).is_some())
        .map(str::to_string)
        .collect()
}

#[inline]
fn is_word_char(c: char) -> bool {
    c.is_alphanumeric() || c == '_'
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lowercase_and_punctuation() {
        assert_eq!(
            tokenize("DOOM Eternal id Software FPS,Gore"),
            vec!["doom", "eternal", "id", "software", "fps", "gore"]
        );
    }

    #[test]
    fn test_single_characters_dropped() {
        assert_eq!(tokenize("Dead Space 2 a b cd"), vec!["dead", "space", "cd"]);
    }

    #[test]
    fn test_hyphen_and_colon_split() {
        assert_eq!(
            tokenize("Doom 3: BFG Edition Single-player"),
            vec!["doom", "bfg", "edition", "single", "player"]
        );
    }

    #[test]
    fn test_underscore_and_digits_are_word_chars() {
        assert_eq!(tokenize("snake_case 2077"), vec!["snake_case", "2077"]);
    }

    #[test]
    fn test_unjoined_seam_merges_tokens() {
        // "Action" + "Single-player" with no space between
        assert_eq!(tokenize("ActionSingle-player"), vec!["actionsingle", "player"]);
    }

    #[test]
    fn test_empty_and_symbol_only() {
        assert!(tokenize("").is_empty());
        assert!(tokenize(" ,;- ™ ").is_empty());
    }

    #[test]
    fn test_unicode_letters() {
        assert_eq!(tokenize("Pokémon Überraschung"), vec!["pokémon", "überraschung"]);
    }

    #[test]
    fn test_combining_marks() {
        // vowel signs are alphabetic, the virama is not
        assert_eq!(tokenize("नमस्ते दुनिया"), vec!["नमस", "ते", "दुनिया"]);
    }
}
