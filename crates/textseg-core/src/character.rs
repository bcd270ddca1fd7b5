// Character classification shared by the word tokenizer and the sentence
// scanner.

use std::sync::LazyLock;

use unicode_properties::{GeneralCategoryGroup, UnicodeGeneralCategory};

// ---------------------------------------------------------------------------
// Default character sets
// ---------------------------------------------------------------------------

/// Characters that may join two letter runs into a single word: `'` and `-`.
pub const DEFAULT_JOINERS: &[char] = &['\'', '-'];

/// Characters that end a sentence segment: `.`, `!` and `?`.
pub const DEFAULT_TERMINATORS: &[char] = &['.', '!', '?'];

// ---------------------------------------------------------------------------
// Character class
// ---------------------------------------------------------------------------

/// Character class as seen by the segmentation grammars.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum CharClass {
    /// A letter in any script.
    Letter,
    /// A numeric character that is not also a letter.
    Digit,
    /// Any Unicode white space.
    Whitespace,
    /// Sentence terminator.
    Terminator,
    /// Word joiner, valid only between two letters.
    Joiner,
    /// Everything else (punctuation, symbols, marks).
    Other,
}

/// Returns the character class for `c` using the default joiner and
/// terminator sets.
///
/// Classes are checked in the order Letter, Digit, Whitespace, Terminator,
/// Joiner; anything left over is `Other`.
pub fn get_char_class(c: char) -> CharClass {
    classify_with(c, DEFAULT_JOINERS, DEFAULT_TERMINATORS)
}

fn classify_with(c: char, joiners: &[char], terminators: &[char]) -> CharClass {
    if is_letter(c) {
        return CharClass::Letter;
    }
    if is_digit(c) {
        return CharClass::Digit;
    }
    if is_whitespace(c) {
        return CharClass::Whitespace;
    }
    if terminators.contains(&c) {
        return CharClass::Terminator;
    }
    if joiners.contains(&c) {
        return CharClass::Joiner;
    }
    CharClass::Other
}

/// Check whether a character is a letter in any script.
///
/// A letter is any code point in general category L (Lu, Ll, Lt, Lm, Lo), so
/// Cyrillic, CJK, Greek and the like all qualify. Letter numbers such as `Ⅻ`
/// and combining marks are not letters. Case is irrelevant.
#[inline]
pub fn is_letter(c: char) -> bool {
    c.general_category_group() == GeneralCategoryGroup::Letter
}

/// Check whether a character is a digit (numeric and not a letter).
#[inline]
pub fn is_digit(c: char) -> bool {
    c.is_numeric() && !is_letter(c)
}

/// Check whether a character is Unicode white space.
#[inline]
pub fn is_whitespace(c: char) -> bool {
    c.is_whitespace()
}

/// Check whether a character is one of the default sentence terminators.
#[inline]
pub fn is_terminator(c: char) -> bool {
    DEFAULT_TERMINATORS.contains(&c)
}

/// Check whether a character is one of the default word joiners.
#[inline]
pub fn is_joiner(c: char) -> bool {
    DEFAULT_JOINERS.contains(&c)
}

// ---------------------------------------------------------------------------
// Configurable classifier
// ---------------------------------------------------------------------------

/// Error returned when a custom joiner or terminator set is rejected.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CharSetError {
    /// The character is a letter and cannot act as a joiner or terminator.
    #[error("letter {0:?} cannot be used as a joiner or terminator")]
    Letter(char),

    /// The character is a digit and cannot act as a joiner or terminator.
    #[error("digit {0:?} cannot be used as a joiner or terminator")]
    Digit(char),

    /// The character is white space and cannot act as a joiner or terminator.
    #[error("whitespace {0:?} cannot be used as a joiner or terminator")]
    Whitespace(char),

    /// The character was configured as both a joiner and a terminator.
    #[error("{0:?} is configured as both a joiner and a terminator")]
    Overlap(char),

    /// No terminator was configured.
    #[error("terminator set must not be empty")]
    EmptyTerminators,
}

/// Character classifier with configurable joiner and terminator sets.
///
/// Letters, digits and whitespace are fixed by Unicode; only the two
/// punctuation sets used by the grammars can be changed. The default
/// classifier agrees with [`get_char_class`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CharClassifier {
    joiners: Vec<char>,
    terminators: Vec<char>,
}

impl CharClassifier {
    /// Create a classifier from custom joiner and terminator sets.
    ///
    /// Duplicates are removed. Every character must fall outside the
    /// letter, digit and whitespace classes, the two sets must be disjoint,
    /// and at least one terminator is required.
    pub fn new(joiners: &[char], terminators: &[char]) -> Result<Self, CharSetError> {
        let joiners = normalize_set(joiners)?;
        let terminators = normalize_set(terminators)?;
        if terminators.is_empty() {
            return Err(CharSetError::EmptyTerminators);
        }
        if let Some(&c) = joiners.iter().find(|c| terminators.contains(c)) {
            return Err(CharSetError::Overlap(c));
        }
        Ok(Self {
            joiners,
            terminators,
        })
    }

    /// Classify a character against this classifier's sets.
    pub fn classify(&self, c: char) -> CharClass {
        classify_with(c, &self.joiners, &self.terminators)
    }

    /// Check whether `c` is a configured joiner.
    #[inline]
    pub fn is_joiner(&self, c: char) -> bool {
        self.joiners.contains(&c)
    }

    /// Check whether `c` is a configured terminator.
    #[inline]
    pub fn is_terminator(&self, c: char) -> bool {
        self.terminators.contains(&c)
    }

    /// Characters that can appear in the body of a sentence segment: neither
    /// whitespace nor a terminator.
    #[inline]
    pub fn is_sentence_body(&self, c: char) -> bool {
        !is_whitespace(c) && !self.is_terminator(c)
    }

    pub fn joiners(&self) -> &[char] {
        &self.joiners
    }

    pub fn terminators(&self) -> &[char] {
        &self.terminators
    }
}

impl Default for CharClassifier {
    fn default() -> Self {
        Self {
            joiners: DEFAULT_JOINERS.to_vec(),
            terminators: DEFAULT_TERMINATORS.to_vec(),
        }
    }
}

static DEFAULT_CLASSIFIER: LazyLock<CharClassifier> = LazyLock::new(CharClassifier::default);

/// Shared classifier with the default joiner and terminator sets.
pub fn default_classifier() -> &'static CharClassifier {
    &DEFAULT_CLASSIFIER
}

/// Validate a custom character set and drop duplicates, keeping first
/// occurrences in order.
fn normalize_set(chars: &[char]) -> Result<Vec<char>, CharSetError> {
    let mut out: Vec<char> = Vec::with_capacity(chars.len());
    for &c in chars {
        if is_letter(c) {
            return Err(CharSetError::Letter(c));
        }
        if is_digit(c) {
            return Err(CharSetError::Digit(c));
        }
        if is_whitespace(c) {
            return Err(CharSetError::Whitespace(c));
        }
        if !out.contains(&c) {
            out.push(c);
        }
    }
    Ok(out)
}
