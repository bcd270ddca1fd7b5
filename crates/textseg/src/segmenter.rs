// Segmenter: configured entry point for word segmentation and sentence
// counting.
//
// Owns a character classifier built from `SegmenterOptions` and exposes every
// operation of the crate through one value. The free functions in the crate
// root behave like a default `Segmenter`.

use textseg_core::character::{CharClassifier, CharSetError, DEFAULT_JOINERS, DEFAULT_TERMINATORS};
use textseg_core::token::{Sentence, Token};

use crate::sentence::{self, Sentences};
use crate::tokenizer::{self, Words};

/// Joiner and terminator configuration for a [`Segmenter`].
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct SegmenterOptions {
    /// Characters allowed between two letters inside a word.
    pub joiners: Vec<char>,

    /// Characters that end a sentence segment.
    pub terminators: Vec<char>,
}

impl Default for SegmenterOptions {
    fn default() -> Self {
        Self {
            joiners: DEFAULT_JOINERS.to_vec(),
            terminators: DEFAULT_TERMINATORS.to_vec(),
        }
    }
}

/// Word segmentation and sentence counting with a fixed configuration.
///
/// A `Segmenter` holds no per-call state; it can be shared across threads
/// and used concurrently.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Segmenter {
    classifier: CharClassifier,
}

impl Segmenter {
    /// Create a segmenter with the default joiners (`'`, `-`) and
    /// terminators (`.`, `!`, `?`).
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a segmenter from explicit options.
    pub fn with_options(options: &SegmenterOptions) -> Result<Self, CharSetError> {
        let classifier = CharClassifier::new(&options.joiners, &options.terminators)?;
        log::debug!(
            "segmenter configured: joiners={:?} terminators={:?}",
            classifier.joiners(),
            classifier.terminators()
        );
        Ok(Self { classifier })
    }

    // =========================================================================
    // Words
    // =========================================================================

    /// Split text into words. `None` and `""` both yield an empty list.
    pub fn split_into_words<'a>(&self, text: impl Into<Option<&'a str>>) -> Vec<String> {
        let text = text.into().unwrap_or_default();
        let words: Vec<String> = self.words(text).map(str::to_owned).collect();
        log::trace!(
            "split {} chars into {} words",
            text.chars().count(),
            words.len()
        );
        words
    }

    /// Lazily iterate over the words of `text`.
    pub fn words<'a>(&'a self, text: &'a str) -> Words<'a> {
        Words::new(text, &self.classifier)
    }

    /// Split text into words with their character positions.
    pub fn tokens(&self, text: &str) -> Vec<Token> {
        let text_chars: Vec<char> = text.chars().collect();
        let text_len = text_chars.len();
        let mut result = Vec::new();
        let mut pos = 0;
        while let Some((start, wlen)) =
            tokenizer::next_word(&text_chars, text_len, pos, &self.classifier)
        {
            let token_text: String = text_chars[start..start + wlen].iter().collect();
            result.push(Token::new(token_text, start));
            pos = start + wlen;
        }
        result
    }

    // =========================================================================
    // Sentences
    // =========================================================================

    /// Count sentence segments. `None` and `""` both yield 0.
    pub fn count_sentences<'a>(&self, text: impl Into<Option<&'a str>>) -> usize {
        let text = text.into().unwrap_or_default();
        let text_chars: Vec<char> = text.chars().collect();
        let n = sentence::count(&text_chars, &self.classifier);
        log::trace!("counted {} sentences in {} chars", n, text_chars.len());
        n
    }

    /// Lazily iterate over the sentence segments of `text`.
    pub fn sentences<'a>(&'a self, text: &'a str) -> Sentences<'a> {
        Sentences::new(text, &self.classifier)
    }

    /// Locate every sentence segment by character position.
    pub fn sentence_spans(&self, text: &str) -> Vec<Sentence> {
        let text_chars: Vec<char> = text.chars().collect();
        let text_len = text_chars.len();
        let mut result = Vec::new();
        let mut pos = 0;
        while let Some((start, slen)) =
            sentence::next_sentence(&text_chars, text_len, pos, &self.classifier)
        {
            result.push(Sentence::new(start, slen));
            pos = start + slen;
        }
        result
    }

    // =========================================================================
    // Option setters
    // =========================================================================

    /// Replace the joiner set. On error the current configuration is kept.
    pub fn set_joiners(&mut self, joiners: &[char]) -> Result<(), CharSetError> {
        self.classifier = CharClassifier::new(joiners, self.classifier.terminators())?;
        log::debug!("joiners set to {:?}", self.classifier.joiners());
        Ok(())
    }

    /// Replace the terminator set. On error the current configuration is kept.
    pub fn set_terminators(&mut self, terminators: &[char]) -> Result<(), CharSetError> {
        self.classifier = CharClassifier::new(self.classifier.joiners(), terminators)?;
        log::debug!("terminators set to {:?}", self.classifier.terminators());
        Ok(())
    }

    /// Current options, suitable for persisting and passing back to
    /// [`Segmenter::with_options`].
    pub fn options(&self) -> SegmenterOptions {
        SegmenterOptions {
            joiners: self.classifier.joiners().to_vec(),
            terminators: self.classifier.terminators().to_vec(),
        }
    }

    pub fn classifier(&self) -> &CharClassifier {
        &self.classifier
    }
}
