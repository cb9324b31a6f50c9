//! Tokenizer: splits text into alternating word and whitespace runs.
//!
//! Whitespace is kept as its own token, so joining the tokens of a text
//! always reproduces the text byte for byte. Tokens are never empty.

/// Classification of a single token.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TokenKind {
    Word,
    Whitespace,
}

/// Splits `text` into maximal runs of whitespace and non-whitespace characters.
///
/// Returned slices borrow from `text`. The empty string yields no tokens.
pub fn tokenize(text: &str) -> Vec<&str> {
    let mut tokens = Vec::new();
    let mut start = 0;
    let mut current: Option<bool> = None;

    for (offset, ch) in text.char_indices() {
        let is_space = ch.is_whitespace();
        match current {
            Some(prev) if prev != is_space => {
                tokens.push(&text[start..offset]);
                start = offset;
            }
            _ => {}
        }
        current = Some(is_space);
    }

    if start < text.len() {
        tokens.push(&text[start..]);
    }

    tokens
}

/// Returns the kind of a token produced by [`tokenize`].
pub fn token_kind(token: &str) -> TokenKind {
    if token.chars().next().is_some_and(char::is_whitespace) {
        TokenKind::Whitespace
    } else {
        TokenKind::Word
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_text_has_no_tokens() {
        assert!(tokenize("").is_empty());
    }

    #[test]
    fn test_words_and_spaces_alternate() {
        assert_eq!(tokenize("the quick fox"), vec!["the", " ", "quick", " ", "fox"]);
    }

    #[test]
    fn test_whitespace_runs_are_single_tokens() {
        assert_eq!(
            tokenize("  Led\t\n team  "),
            vec!["  ", "Led", "\t\n ", "team", "  "]
        );
    }

    #[test]
    fn test_whitespace_only_text() {
        assert_eq!(tokenize(" \n "), vec![" \n "]);
    }

    #[test]
    fn test_join_reproduces_input() {
        let text = "Reduced p99 latency by 40%\u{00a0}— across  3 regions.\n";
        assert_eq!(tokenize(text).concat(), text);
    }

    #[test]
    fn test_multibyte_words_split_on_char_boundaries() {
        assert_eq!(tokenize("café résumé"), vec!["café", " ", "résumé"]);
    }

    #[test]
    fn test_token_kind() {
        assert_eq!(token_kind("word"), TokenKind::Word);
        assert_eq!(token_kind(" \t"), TokenKind::Whitespace);
        assert_eq!(token_kind("\u{3000}"), TokenKind::Whitespace);
    }
}
