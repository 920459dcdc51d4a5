//! Overlapping windows over long documents.
//!
//! Detectors see bounded input; the overlap makes sure an entity sitting on
//! a cut is fully inside at least one chunk. Sizes are in bytes and cuts
//! always land on UTF-8 character boundaries.

use std::iter::FusedIterator;

use lexredact_core::config::ChunkingConfig;
use lexredact_core::constants::PARAGRAPH_BREAK;

/// A window of the document and where it starts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Chunk<'a> {
    pub offset: usize,
    pub text: &'a str,
}

impl Chunk<'_> {
    /// Document offset one past the last byte of the chunk.
    pub fn end(&self) -> usize {
        self.offset + self.text.len()
    }
}

/// Lazy chunk sequence returned by [`chunk_text`].
#[derive(Debug, Clone)]
pub struct Chunks<'a> {
    document: &'a str,
    max_chars: usize,
    overlap: usize,
    min_break_offset: usize,
    cursor: usize,
    done: bool,
}

/// Split `document` into overlapping chunks of at most `config.max_chars` bytes.
///
/// A document that fits yields exactly one chunk at offset 0 (even when
/// empty). Otherwise each window is cut at the last paragraph break lying
/// more than `min_break_offset` bytes into it, or at `max_chars` when there is
/// none. The next window starts `overlap` bytes before the cut, never at or
/// before the previous start. A window narrower than one character still
/// advances by that character.
pub fn chunk_text<'a>(document: &'a str, config: &ChunkingConfig) -> Chunks<'a> {
    Chunks {
        document,
        max_chars: config.max_chars.max(1),
        overlap: config.overlap,
        min_break_offset: config.min_break_offset,
        cursor: 0,
        done: false,
    }
}

impl<'a> Iterator for Chunks<'a> {
    type Item = Chunk<'a>;

    fn next(&mut self) -> Option<Chunk<'a>> {
        if self.done {
            return None;
        }
        let doc = self.document;
        let len = doc.len();

        if len <= self.max_chars {
            self.done = true;
            return Some(Chunk {
                offset: 0,
                text: doc,
            });
        }

        let start = self.cursor;
        if start >= len {
            self.done = true;
            return None;
        }

        let mut end = floor_char_boundary(doc, (start + self.max_chars).min(len));
        if end <= start {
            end = ceil_char_boundary(doc, start + 1);
        }
        if end < len {
            if let Some(pos) = doc[start..end].rfind(PARAGRAPH_BREAK) {
                let brk = start + pos;
                if brk > start + self.min_break_offset {
                    end = brk + PARAGRAPH_BREAK.len();
                }
            }
        }

        if end >= len {
            self.done = true;
        } else {
            let next = ceil_char_boundary(doc, end.saturating_sub(self.overlap));
            self.cursor = if next > start {
                next
            } else {
                ceil_char_boundary(doc, start + 1)
            };
        }

        Some(Chunk {
            offset: start,
            text: &doc[start..end],
        })
    }
}

impl FusedIterator for Chunks<'_> {}

fn floor_char_boundary(s: &str, mut index: usize) -> usize {
    if index >= s.len() {
        return s.len();
    }
    while !s.is_char_boundary(index) {
        index -= 1;
    }
    index
}

fn ceil_char_boundary(s: &str, mut index: usize) -> usize {
    if index >= s.len() {
        return s.len();
    }
    while !s.is_char_boundary(index) {
        index += 1;
    }
    index
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn boundaries_snap_around_multibyte_chars() {
        let s = "aé"; // 'é' is bytes 1..3
        assert_eq!(floor_char_boundary(s, 2), 1);
        assert_eq!(ceil_char_boundary(s, 2), 3);
        assert_eq!(floor_char_boundary(s, 10), 3);
    }
}
