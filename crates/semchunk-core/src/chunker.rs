//! The resolved chunker handed back to callers.

use crate::model::InitStrategy;
use crate::splitter::{Splitter, SplitterFamily};

/// Splits content into token-bounded chunks.
///
/// Both operations are deterministic and keep no state between calls.
pub trait SemanticChunker: Send + Sync {
    /// Split `content` into chunks, in document order
    fn chunks<'a>(&self, content: &'a str) -> Vec<&'a str>;

    /// Same chunks as [`SemanticChunker::chunks`], each paired with its
    /// starting character offset in `content`
    fn chunk_with_indices<'a>(&self, content: &'a str) -> Vec<(usize, &'a str)>;
}

/// A splitter configured for one model and chunking configuration.
///
/// Immutable once built; share it freely across threads.
#[derive(Debug)]
pub struct Chunker {
    splitter: Splitter,
    strategy: InitStrategy,
}

impl Chunker {
    pub(crate) fn new(splitter: Splitter, strategy: InitStrategy) -> Self {
        Self { splitter, strategy }
    }

    pub fn family(&self) -> SplitterFamily {
        self.splitter.family()
    }

    /// How the model was interpreted when this chunker was resolved
    pub fn strategy(&self) -> InitStrategy {
        self.strategy
    }

    /// Chunks paired with their starting byte offset, for slicing `content`
    pub fn chunk_byte_indices<'a>(&self, content: &'a str) -> Vec<(usize, &'a str)> {
        self.splitter.chunk_indices(content)
    }
}

impl SemanticChunker for Chunker {
    fn chunks<'a>(&self, content: &'a str) -> Vec<&'a str> {
        self.splitter.chunks(content)
    }

    fn chunk_with_indices<'a>(&self, content: &'a str) -> Vec<(usize, &'a str)> {
        let mut tracker = CharOffsetTracker::new(content);
        self.splitter
            .chunk_indices(content)
            .into_iter()
            .map(|(byte_offset, chunk)| (tracker.char_offset(byte_offset), chunk))
            .collect()
    }
}

/// Maps byte offsets to char offsets, reusing the previous position since
/// offsets only move forward
struct CharOffsetTracker<'a> {
    text: &'a str,
    byte_offset: usize,
    char_offset: usize,
}

impl<'a> CharOffsetTracker<'a> {
    fn new(text: &'a str) -> Self {
        Self {
            text,
            byte_offset: 0,
            char_offset: 0,
        }
    }

    fn char_offset(&mut self, byte_offset: usize) -> usize {
        if byte_offset < self.byte_offset {
            // Offsets should never decrease; recount from the start if one does
            self.byte_offset = 0;
            self.char_offset = 0;
        }
        let skipped = &self.text[self.byte_offset..byte_offset];
        self.char_offset += skipped.chars().count();
        self.byte_offset = byte_offset;
        self.char_offset
    }
}
