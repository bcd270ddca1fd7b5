// Positional records produced by the word tokenizer and sentence scanner.

// ---------------------------------------------------------------------------
// Token
// ---------------------------------------------------------------------------

/// A word token together with its location in the source text.
///
/// Positions and lengths are counted in characters (Unicode scalar values),
/// not bytes.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Token {
    /// The text content of this token.
    pub text: String,

    /// Character offset of the first character of the token.
    pub pos: usize,

    /// Length of the token in characters.
    pub token_len: usize,
}

impl Token {
    /// Create a new token. The length is derived from `text`.
    pub fn new(text: impl Into<String>, pos: usize) -> Self {
        let text = text.into();
        let token_len = text.chars().count();
        Self {
            text,
            pos,
            token_len,
        }
    }

    /// Character offset one past the last character of the token.
    pub fn end(&self) -> usize {
        self.pos + self.token_len
    }
}

// ---------------------------------------------------------------------------
// Sentence
// ---------------------------------------------------------------------------

/// Location of a matched sentence segment.
///
/// The span starts at the first letter of the segment and ends after its
/// whole terminator run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Sentence {
    /// Character offset where the segment starts.
    pub pos: usize,

    /// Length of the segment in characters.
    pub sentence_len: usize,
}

impl Sentence {
    pub fn new(pos: usize, sentence_len: usize) -> Self {
        Self { pos, sentence_len }
    }

    /// Character offset one past the end of the segment.
    pub fn end(&self) -> usize {
        self.pos + self.sentence_len
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // -- Token tests --

    #[test]
    fn token_new() {
        let tok = Token::new("word", 0);
        assert_eq!(tok.text, "word");
        assert_eq!(tok.token_len, 4);
        assert_eq!(tok.pos, 0);
        assert_eq!(tok.end(), 4);
    }

    #[test]
    fn token_unicode_length() {
        // "привет" is 6 characters, 12 bytes in UTF-8
        let tok = Token::new("\u{043F}\u{0440}\u{0438}\u{0432}\u{0435}\u{0442}", 3);
        assert_eq!(tok.token_len, 6);
        assert_eq!(tok.end(), 9);
    }

    #[test]
    fn token_clone() {
        let tok = Token::new("mother-in-law's", 7);
        assert_eq!(tok.clone(), tok);
    }

    // -- Sentence tests --

    #[test]
    fn sentence_new() {
        let s = Sentence::new(7, 11);
        assert_eq!(s.pos, 7);
        assert_eq!(s.sentence_len, 11);
        assert_eq!(s.end(), 18);
    }

    #[cfg(feature = "serde")]
    #[test]
    fn token_serializes_with_positions() {
        let tok = Token::new("abc", 2);
        let json = serde_json::to_value(&tok).unwrap();
        assert_eq!(json["text"], "abc");
        assert_eq!(json["pos"], 2);
        assert_eq!(json["token_len"], 3);
    }

    #[cfg(feature = "serde")]
    #[test]
    fn sentence_round_trips_through_json() {
        let s = Sentence::new(4, 10);
        let json = serde_json::to_string(&s).unwrap();
        let back: Sentence = serde_json::from_str(&json).unwrap();
        assert_eq!(back, s);
    }
}
