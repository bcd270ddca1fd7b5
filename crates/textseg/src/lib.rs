//! Multi-script word segmentation and sentence counting.
//!
//! Two total operations over arbitrary Unicode text:
//!
//! - [`split_into_words`] finds words of the form `Letter+ (Joiner Letter+)*`,
//!   where a joiner (`'` or `-`) only counts between two letters. Digits and
//!   other punctuation separate words.
//! - [`count_sentences`] counts segments made of letters (optionally spaced),
//!   at least one further non-space character, and a run of terminators
//!   (`.`, `!`, `?`) that closes the segment as a whole.
//!
//! Neither operation can fail; absent or empty input yields an empty result.
//!
//! ```
//! assert_eq!(textseg::split_into_words("mother-in-law's"), vec!["mother-in-law's"]);
//! assert_eq!(textseg::split_into_words("word123abc"), vec!["word", "abc"]);
//! assert_eq!(textseg::count_sentences("Hello! Are you OK?"), 2);
//! assert_eq!(textseg::count_sentences(None), 0);
//! ```
//!
//! [`Segmenter`] carries a custom joiner/terminator configuration and adds
//! positional results.

mod cursor;

#[cfg(feature = "segmenter")]
pub mod segmenter;
#[cfg(feature = "sentences")]
pub mod sentence;
#[cfg(feature = "words")]
pub mod tokenizer;

pub use textseg_core::character::{CharClass, CharClassifier, CharSetError, get_char_class};
pub use textseg_core::token::{Sentence, Token};

#[cfg(feature = "segmenter")]
pub use segmenter::{Segmenter, SegmenterOptions};
#[cfg(feature = "sentences")]
pub use sentence::Sentences;
#[cfg(feature = "words")]
pub use tokenizer::Words;

#[cfg(any(feature = "words", feature = "sentences"))]
use textseg_core::character::default_classifier;

/// Split text into words, in order of appearance.
///
/// Accepts `&str` or `Option<&str>`; `None` is treated like `""`.
#[cfg(feature = "words")]
pub fn split_into_words<'a>(text: impl Into<Option<&'a str>>) -> Vec<String> {
    words(text.into().unwrap_or_default())
        .map(str::to_owned)
        .collect()
}

/// Lazily iterate over the words of `text` as slices of the input.
#[cfg(feature = "words")]
pub fn words(text: &str) -> Words<'_> {
    Words::new(text, default_classifier())
}

/// Count the sentence segments in text.
///
/// Accepts `&str` or `Option<&str>`; `None` is treated like `""`.
#[cfg(feature = "sentences")]
pub fn count_sentences<'a>(text: impl Into<Option<&'a str>>) -> usize {
    let text_chars: Vec<char> = text.into().unwrap_or_default().chars().collect();
    sentence::count(&text_chars, default_classifier())
}

/// Lazily iterate over the sentence segments of `text` as slices of the
/// input.
#[cfg(feature = "sentences")]
pub fn sentences(text: &str) -> Sentences<'_> {
    Sentences::new(text, default_classifier())
}
