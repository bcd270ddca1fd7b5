// Character cursor shared by the lazy iterators.
//
// The scanners work on `&[char]` with character positions; the iterators
// hand out `&str` slices of the input text. The cursor keeps both views
// in step, moving forward only, so the conversion stays linear overall.

#[derive(Debug, Clone)]
pub(crate) struct CharCursor<'a> {
    text: &'a str,
    chars: Vec<char>,
    /// Current character position.
    pos: usize,
    /// Byte offset of `chars[pos]` in `text`.
    byte_pos: usize,
}

impl<'a> CharCursor<'a> {
    pub(crate) fn new(text: &'a str) -> Self {
        Self {
            text,
            chars: text.chars().collect(),
            pos: 0,
            byte_pos: 0,
        }
    }

    pub(crate) fn chars(&self) -> &[char] {
        &self.chars
    }

    pub(crate) fn pos(&self) -> usize {
        self.pos
    }

    /// Move forward to character position `target` (clamped to the end).
    /// Positions behind the cursor are ignored.
    pub(crate) fn seek(&mut self, target: usize) {
        let target = target.min(self.chars.len());
        if target <= self.pos {
            return;
        }
        self.byte_pos += self.chars[self.pos..target]
            .iter()
            .map(|c| c.len_utf8())
            .sum::<usize>();
        self.pos = target;
    }

    /// Move to `start`, then to `start + len`, returning the slice between.
    pub(crate) fn take(&mut self, start: usize, len: usize) -> &'a str {
        self.seek(start);
        let start_byte = self.byte_pos;
        self.seek(start + len);
        &self.text[start_byte..self.byte_pos]
    }

    /// Move to the end of the text.
    pub(crate) fn finish(&mut self) {
        self.seek(self.chars.len());
    }
}
