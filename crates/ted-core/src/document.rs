//! One open file's in-memory state.
//!
//! A `Document` tracks the editable buffer, the content as last read from or
//! written to disk (for dirty detection), and a bounded history of buffer
//! snapshots for undo.

use std::collections::VecDeque;

/// Default number of undo snapshots retained per document.
pub const DEFAULT_HISTORY_LIMIT: usize = 10;

/// An open file: buffer, saved snapshot, undo history.
#[derive(Debug, Clone)]
pub struct Document {
    name: String,
    buffer: String,
    /// Content as last loaded or saved. `buffer != original` means dirty.
    original: String,
    /// Past buffer states, oldest first. Never empty; the oldest entry is
    /// never popped, so undo bottoms out instead of losing the document.
    history: VecDeque<String>,
    history_limit: usize,
}

impl Document {
    /// Creates a document from loaded content (or empty for a new file).
    ///
    /// The initial content seeds the buffer, the saved snapshot, and the
    /// one-element history, so a freshly opened document is clean.
    pub fn new(name: impl Into<String>, content: impl Into<String>, history_limit: usize) -> Self {
        let content = content.into();
        let mut history = VecDeque::with_capacity(history_limit.max(1));
        history.push_back(content.clone());
        Self {
            name: name.into(),
            buffer: content.clone(),
            original: content,
            history,
            history_limit: history_limit.max(1),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn content(&self) -> &str {
        &self.buffer
    }

    /// Whether the buffer differs from the last loaded/saved content.
    pub fn is_dirty(&self) -> bool {
        self.buffer != self.original
    }

    /// Appends `text` to the buffer as a new line.
    ///
    /// The pre-write buffer is pushed onto the history first (evicting the
    /// oldest snapshot at capacity), so each `undo` steps back exactly one
    /// write. An empty buffer becomes `text` itself; otherwise `text` is
    /// joined with a newline separator.
    pub fn append(&mut self, text: &str) {
        self.history.push_back(self.buffer.clone());
        while self.history.len() > self.history_limit {
            self.history.pop_front();
        }
        if self.buffer.is_empty() {
            self.buffer.push_str(text);
        } else {
            self.buffer.push('\n');
            self.buffer.push_str(text);
        }
    }

    /// Reverts the buffer to the most recent pre-write snapshot.
    ///
    /// Pops one history entry per call, so repeated undos walk back one write
    /// at a time. Returns `false` when only the oldest snapshot remains; that
    /// entry is never popped, so the history never drops below one.
    pub fn undo(&mut self) -> bool {
        if self.history.len() <= 1 {
            return false;
        }
        if let Some(prev) = self.history.pop_back() {
            self.buffer = prev;
        }
        true
    }

    /// Marks the current buffer as persisted.
    pub fn mark_saved(&mut self) {
        self.original = self.buffer.clone();
    }

    pub fn history_len(&self) -> usize {
        self.history.len()
    }

    pub fn line_count(&self) -> usize {
        self.buffer.lines().count()
    }

    pub fn char_count(&self) -> usize {
        self.buffer.chars().count()
    }

    pub fn byte_count(&self) -> usize {
        self.buffer.len()
    }

    pub fn word_count(&self) -> usize {
        self.buffer.split_whitespace().count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_document_is_clean() {
        let doc = Document::new("a.txt", "hello", DEFAULT_HISTORY_LIMIT);
        assert!(!doc.is_dirty());
        assert_eq!(doc.history_len(), 1);
    }

    #[test]
    fn test_append_joins_with_newline() {
        let mut doc = Document::new("a.txt", "", DEFAULT_HISTORY_LIMIT);
        doc.append("Hello");
        assert_eq!(doc.content(), "Hello");
        doc.append("World");
        assert_eq!(doc.content(), "Hello\nWorld");
        assert_eq!(doc.line_count(), 2);
        assert!(doc.is_dirty());
    }

    #[test]
    fn test_undo_steps_back_one_write_at_a_time() {
        let mut doc = Document::new("a.txt", "", DEFAULT_HISTORY_LIMIT);
        doc.append("Hello");
        doc.append("World");
        assert!(doc.undo());
        assert_eq!(doc.content(), "Hello");
        assert!(doc.undo());
        assert_eq!(doc.content(), "");
        // Initial snapshot is terminal.
        assert!(!doc.undo());
        assert_eq!(doc.content(), "");
        assert_eq!(doc.history_len(), 1);
    }

    #[test]
    fn test_history_is_bounded_fifo() {
        let mut doc = Document::new("a.txt", "", DEFAULT_HISTORY_LIMIT);
        for i in 0..25 {
            doc.append(&format!("line {i}"));
            assert!(doc.history_len() <= DEFAULT_HISTORY_LIMIT);
        }
        assert_eq!(doc.history_len(), DEFAULT_HISTORY_LIMIT);
        // Only the last 9 writes are undoable; the chain bottoms out at the
        // oldest retained snapshot, which ends with "line 15".
        let mut undos = 0;
        while doc.undo() {
            undos += 1;
        }
        assert_eq!(undos, DEFAULT_HISTORY_LIMIT - 1);
        assert!(doc.content().ends_with("line 15"));
        assert_eq!(doc.history_len(), 1);
    }

    #[test]
    fn test_mark_saved_clears_dirty_until_next_write() {
        let mut doc = Document::new("a.txt", "x", DEFAULT_HISTORY_LIMIT);
        doc.append("y");
        assert!(doc.is_dirty());
        doc.mark_saved();
        assert!(!doc.is_dirty());
        doc.append("z");
        assert!(doc.is_dirty());
    }

    #[test]
    fn test_counters() {
        let doc = Document::new("a.txt", "one two\nthree", DEFAULT_HISTORY_LIMIT);
        assert_eq!(doc.line_count(), 2);
        assert_eq!(doc.char_count(), 13);
        assert_eq!(doc.byte_count(), 13);
        assert_eq!(doc.word_count(), 3);
    }
}
