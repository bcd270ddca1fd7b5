// Sentence segment scanner.
//
// A sentence segment is a leftmost-first match of
//
//     (Letter Whitespace*)+ Body+ Terminator+
//
// where Body is any character that is neither whitespace nor a terminator.
// Matches never overlap; each search starts where the previous match ended.
// A whole run of terminators closes a single segment, so "Wow!!!" and
// "Смеркалось..." count once. Abbreviations are not special: "Т.е." is two
// fragments, neither of which forms a segment on its own.

use std::iter::FusedIterator;

use textseg_core::character::{CharClassifier, is_letter, is_whitespace};

use crate::cursor::CharCursor;

// ============================================================================
// Match at a fixed start
// ============================================================================

/// Outcome of trying to match a segment at one start position.
enum Attempt {
    /// Segment found, with its end position.
    Match(usize),
    /// No segment starts anywhere before this position.
    Resume(usize),
}

/// Try to match a segment starting at the letter `text[p]`.
///
/// The prefix `(Letter Whitespace*)+` can stop anywhere inside the run of
/// letters and whitespace `[p, e)`. The body must then take at least one
/// character and run without whitespace up to a terminator, so only the
/// last whitespace-free stretch of that run can feed the body:
///
/// - a letter at `max(k, p + 1)` where `k` follows the last whitespace, or
/// - a non-space, non-terminator character at `e` itself.
///
/// From either choice the body extends through `e` to the same place, so the
/// result does not depend on which split the prefix takes. When matching
/// fails here it also fails from every letter in `(p, e)`.
///
/// If the body runs out at `r` without reaching a terminator, every start in
/// `[e, r)` extends to the same dead end, except the letters of the stretch
/// touching `r`: their letter run can carry on past whitespace at `r`. The
/// caller resumes at the start of that stretch, so each character is
/// rescanned at most once and the whole count stays linear.
fn match_at(text: &[char], text_len: usize, p: usize, classifier: &CharClassifier) -> Attempt {
    // Run of letters and whitespace, remembering where the last whitespace
    // stretch ended.
    let mut e = p;
    let mut k = p;
    while e < text_len && (is_letter(text[e]) || is_whitespace(text[e])) {
        if is_whitespace(text[e]) {
            k = e + 1;
        }
        e += 1;
    }

    let body_start = k.max(p + 1);
    let has_body =
        body_start < e || (e < text_len && classifier.is_sentence_body(text[e]));
    if !has_body {
        return Attempt::Resume(e);
    }

    let mut r = e;
    while r < text_len && classifier.is_sentence_body(text[r]) {
        r += 1;
    }
    if r == text_len || !classifier.is_terminator(text[r]) {
        let mut s = r;
        while s > e && is_letter(text[s - 1]) {
            s -= 1;
        }
        return Attempt::Resume(s);
    }

    let mut end = r;
    while end < text_len && classifier.is_terminator(text[end]) {
        end += 1;
    }
    Attempt::Match(end)
}

// ============================================================================
// Scanner
// ============================================================================

/// Find the next sentence segment at or after position `pos`.
///
/// Returns `(start, length)` in characters, or `None` when no further
/// segment exists. The caller resumes scanning at `start + length`.
pub fn next_sentence(
    text: &[char],
    text_len: usize,
    pos: usize,
    classifier: &CharClassifier,
) -> Option<(usize, usize)> {
    let text_len = text_len.min(text.len());
    let mut p = pos;

    while p < text_len {
        if !is_letter(text[p]) {
            p += 1;
            continue;
        }
        match match_at(text, text_len, p, classifier) {
            Attempt::Match(end) => return Some((p, end - p)),
            Attempt::Resume(next) => p = next,
        }
    }
    None
}

/// Count the sentence segments in `text`.
pub fn count(text: &[char], classifier: &CharClassifier) -> usize {
    let text_len = text.len();
    let mut pos = 0;
    let mut n = 0;
    while let Some((start, slen)) = next_sentence(text, text_len, pos, classifier) {
        n += 1;
        pos = start + slen;
    }
    n
}

// ============================================================================
// Iterator
// ============================================================================

/// Lazy iterator over the sentence segments of a string, yielding slices of
/// the input from the first letter through the terminator run.
///
/// Created by [`crate::sentences`] or [`crate::Segmenter::sentences`].
#[derive(Debug, Clone)]
pub struct Sentences<'a> {
    cursor: CharCursor<'a>,
    classifier: &'a CharClassifier,
}

impl<'a> Sentences<'a> {
    pub fn new(text: &'a str, classifier: &'a CharClassifier) -> Self {
        Self {
            cursor: CharCursor::new(text),
            classifier,
        }
    }
}

impl<'a> Iterator for Sentences<'a> {
    type Item = &'a str;

    fn next(&mut self) -> Option<Self::Item> {
        let chars = self.cursor.chars();
        match next_sentence(chars, chars.len(), self.cursor.pos(), self.classifier) {
            Some((start, slen)) => Some(self.cursor.take(start, slen)),
            None => {
                self.cursor.finish();
                None
            }
        }
    }
}

impl FusedIterator for Sentences<'_> {}

// ============================================================================
// Tests
// ============================================================================
