// Word tokenizer.
//
// A word is a run of letters, optionally continued by a joiner that sits
// directly between two letters: `Letter+ (Joiner Letter+)*`. Digits,
// whitespace and all other punctuation separate words. Matches are found
// leftmost-first and never overlap.

use std::iter::FusedIterator;

use textseg_core::character::{CharClassifier, is_letter};

use crate::cursor::CharCursor;

// ============================================================================
// Word length detection
// ============================================================================

/// Compute the length of the word starting at the beginning of `text`.
///
/// `text[0]` must be a letter. A joiner is taken only when the character
/// after it is a letter; the character before it is always a letter of the
/// current word because letter runs are consumed greedily.
fn word_length(text: &[char], classifier: &CharClassifier) -> usize {
    let textlen = text.len();
    let mut wlen: usize = 0;

    while wlen < textlen {
        let c = text[wlen];
        if is_letter(c) {
            wlen += 1;
        } else if classifier.is_joiner(c) && wlen + 1 < textlen && is_letter(text[wlen + 1]) {
            // Joiner plus the letter after it.
            wlen += 2;
        } else {
            break;
        }
    }
    wlen
}

// ============================================================================
// Scanner
// ============================================================================

/// Find the next word at or after position `pos`.
///
/// Returns `(start, length)` in characters, or `None` when no letter remains.
/// The caller resumes scanning at `start + length`.
pub fn next_word(
    text: &[char],
    text_len: usize,
    pos: usize,
    classifier: &CharClassifier,
) -> Option<(usize, usize)> {
    let text_len = text_len.min(text.len());
    let start = (pos..text_len).find(|&i| is_letter(text[i]))?;
    let wlen = word_length(&text[start..text_len], classifier);
    Some((start, wlen))
}

// ============================================================================
// Iterator
// ============================================================================

/// Lazy iterator over the words of a string, yielding slices of the input.
///
/// Created by [`crate::words`] or [`crate::Segmenter::words`].
#[derive(Debug, Clone)]
pub struct Words<'a> {
    cursor: CharCursor<'a>,
    classifier: &'a CharClassifier,
}

impl<'a> Words<'a> {
    pub fn new(text: &'a str, classifier: &'a CharClassifier) -> Self {
        Self {
            cursor: CharCursor::new(text),
            classifier,
        }
    }
}

impl<'a> Iterator for Words<'a> {
    type Item = &'a str;

    fn next(&mut self) -> Option<Self::Item> {
        let chars = self.cursor.chars();
        match next_word(chars, chars.len(), self.cursor.pos(), self.classifier) {
            Some((start, wlen)) => Some(self.cursor.take(start, wlen)),
            None => {
                self.cursor.finish();
                None
            }
        }
    }
}

impl FusedIterator for Words<'_> {}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use textseg_core::character::default_classifier;

    // -- Helper ---------------------------------------------------------------

    /// Convenience: collect all words of a string with the default classifier.
    fn words_of(s: &str) -> Vec<&str> {
        Words::new(s, default_classifier()).collect()
    }

    /// Convenience: run the scanner once from position 0.
    fn scan(s: &str) -> Option<(usize, usize)> {
        let chars: Vec<char> = s.chars().collect();
        next_word(&chars, chars.len(), 0, default_classifier())
    }

    // -- Empty and trivial inputs ---

    #[test]
    fn empty_text_returns_none() {
        assert_eq!(scan(""), None);
        assert!(words_of("").is_empty());
    }

    #[test]
    fn single_letter() {
        assert_eq!(scan("a"), Some((0, 1)));
    }

    #[test]
    fn no_letters() {
        assert_eq!(scan("!@#$%^&*() 12345"), None);
        assert_eq!(scan("   \t\n"), None);
        assert_eq!(scan("\""), None);
    }

    // -- Simple words ---

    #[test]
    fn skips_leading_separators() {
        assert_eq!(scan("  , word"), Some((4, 4)));
    }

    #[test]
    fn case_changes_do_not_split() {
        assert_eq!(words_of("HeLLo WoRLd"), vec!["HeLLo", "WoRLd"]);
        assert_eq!(
            words_of("UpperCamelCase or lowerCamelCase?"),
            vec!["UpperCamelCase", "or", "lowerCamelCase"]
        );
    }

    #[test]
    fn cyrillic_words() {
        assert_eq!(words_of("Ёжик в тумане"), vec!["Ёжик", "в", "тумане"]);
        assert_eq!(
            words_of("Уж замуж невтерпёж"),
            vec!["Уж", "замуж", "невтерпёж"]
        );
        assert_eq!(
            words_of("Ну и о чём речь?"),
            vec!["Ну", "и", "о", "чём", "речь"]
        );
    }

    #[test]
    fn punctuation_separates() {
        assert_eq!(words_of("C# is awesome"), vec!["C", "is", "awesome"]);
        assert_eq!(words_of("Hello, мир!"), vec!["Hello", "мир"]);
        assert_eq!(words_of("Много   пробелов"), vec!["Много", "пробелов"]);
    }

    // -- Digits ---

    #[test]
    fn digits_terminate_words() {
        assert_eq!(words_of("word123"), vec!["word"]);
        assert_eq!(words_of("123word"), vec!["word"]);
        assert_eq!(words_of("word123abc"), vec!["word", "abc"]);
    }

    #[test]
    fn digit_after_joiner_is_not_joined() {
        assert_eq!(words_of("covid-19"), vec!["covid"]);
        assert_eq!(words_of("a-1b"), vec!["a", "b"]);
    }

    // -- Joiners ---

    #[test]
    fn inner_joiners_are_kept() {
        assert_eq!(words_of("Can't do that"), vec!["Can't", "do", "that"]);
        assert_eq!(words_of("mother-in-law's"), vec!["mother-in-law's"]);
        assert_eq!(words_of("up-to-date"), vec!["up-to-date"]);
        assert_eq!(
            words_of("Что-нибудь хорошее"),
            vec!["Что-нибудь", "хорошее"]
        );
    }

    #[test]
    fn outer_joiners_are_stripped() {
        assert_eq!(words_of("-привет"), vec!["привет"]);
        assert_eq!(words_of("привет-"), vec!["привет"]);
        assert_eq!(words_of("'hello"), vec!["hello"]);
        assert_eq!(words_of("hello'"), vec!["hello"]);
    }

    #[test]
    fn joiner_runs_collapse() {
        assert_eq!(words_of("--привет--"), vec!["привет"]);
        assert_eq!(words_of("''hello''"), vec!["hello"]);
        assert_eq!(words_of("'a-b'"), vec!["a-b"]);
        assert_eq!(words_of("a--b"), vec!["a", "b"]);
        assert_eq!(words_of("a-'b"), vec!["a", "b"]);
        assert!(words_of("--").is_empty());
        assert!(words_of("'").is_empty());
    }

    #[test]
    fn joiner_needs_letter_on_both_sides() {
        assert_eq!(scan("ab-"), Some((0, 2)));
        assert_eq!(scan("ab- cd"), Some((0, 2)));
        assert_eq!(scan("ab-cd"), Some((0, 5)));
    }

    #[test]
    fn other_apostrophes_are_separators() {
        // RIGHT SINGLE QUOTATION MARK is not a joiner by default.
        assert_eq!(words_of("it\u{2019}s"), vec!["it", "s"]);
    }

    #[test]
    fn custom_joiners() {
        let classifier = CharClassifier::new(&['\u{2019}'], &['.']).unwrap();
        let text = "it\u{2019}s up-to-date";
        let words: Vec<&str> = Words::new(text, &classifier).collect();
        assert_eq!(words, vec!["it\u{2019}s", "up", "to", "date"]);
    }

    // -- Scanner positions ---

    #[test]
    fn scanner_resumes_after_word() {
        let chars: Vec<char> = "ab 12 cd".chars().collect();
        let classifier = default_classifier();
        assert_eq!(next_word(&chars, chars.len(), 0, classifier), Some((0, 2)));
        assert_eq!(next_word(&chars, chars.len(), 2, classifier), Some((6, 2)));
        assert_eq!(next_word(&chars, chars.len(), 8, classifier), None);
    }

    #[test]
    fn scanner_respects_text_len() {
        let chars: Vec<char> = "abcdef".chars().collect();
        let classifier = default_classifier();
        assert_eq!(next_word(&chars, 3, 0, classifier), Some((0, 3)));
        assert_eq!(next_word(&chars, 100, 0, classifier), Some((0, 6)));
    }

    #[test]
    fn iterator_is_fused() {
        let mut words = Words::new("one", default_classifier());
        assert_eq!(words.next(), Some("one"));
        assert_eq!(words.next(), None);
        assert_eq!(words.next(), None);
    }

    #[test]
    fn iterator_slices_multibyte_text() {
        assert_eq!(words_of("東京とМосква, 1 Да"), vec!["東京とМосква", "Да"]);
    }
}
