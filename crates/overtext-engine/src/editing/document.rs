use xi_rope::Rope;
use xi_rope::delta::{DeltaElement, Transformer};

use crate::editing::{Cmd, Transaction, commands};

/// Reference host document backing the overlay engine.
///
/// The document is a flat UTF-8 content stream held in a single
/// `xi_rope::Rope` buffer. Every position handed to or returned from this
/// type is a byte offset into that buffer. Blocks, the unit node
/// decorations must align to, are line-delimited spans.
///
/// Edits flow through [`Document::apply`]: a [`Cmd`] compiles to an
/// `xi_rope::Delta`, the buffer is replaced atomically, the selection is
/// transformed through the delta, and the resulting [`Transaction`] is
/// returned for the overlay layer to consume.
pub struct Document {
    /// xi-rope buffer containing the entire document as UTF-8 bytes
    pub(crate) buffer: Rope,
    /// Current selection/cursor position as byte offsets in buffer
    pub(crate) selection: std::ops::Range<usize>,
    /// Version counter incremented on each applied command
    pub(crate) version: u64,
}

impl Document {
    /// Create a new document from raw bytes
    pub fn from_bytes(bytes: &[u8]) -> anyhow::Result<Self> {
        let text = std::str::from_utf8(bytes)?;
        let buffer = Rope::from(text);
        let len = buffer.len();

        Ok(Self {
            buffer,
            selection: len..len, // Start with cursor at end
            version: 0,
        })
    }

    /// Apply a command to the document.
    ///
    /// Content commands compile to a delta which is applied to the buffer;
    /// the selection is mapped through it and the version is incremented.
    /// Selection-only commands (and edits that compile to nothing, like
    /// deleting an empty range) produce a transaction with
    /// `doc_changed() == false`, which the overlay manager short-circuits.
    pub fn apply(&mut self, cmd: Cmd) -> Transaction {
        if let Some(delta) = commands::compile_command(self, &cmd) {
            // Track inserted ranges in post-edit coordinates
            let mut changed = Vec::new();
            let mut new_pos = 0;
            for op in delta.els.iter() {
                match op {
                    DeltaElement::Copy(from, to) => {
                        new_pos += to - from;
                    }
                    DeltaElement::Insert(inserted) => {
                        changed.push(new_pos..new_pos + inserted.len());
                        new_pos += inserted.len();
                    }
                }
            }

            // Selection must be mapped before the buffer is replaced; the
            // transformer is only valid against the pre-edit coordinates.
            let mut transformer = Transformer::new(&delta);
            let new_selection = transformer.transform(self.selection.start, true)
                ..transformer.transform(self.selection.end, true);

            self.buffer = delta.apply(&self.buffer);
            self.selection = new_selection.clone();
            self.version += 1;

            return Transaction::content(delta, changed, new_selection, self.version, self.len());
        }

        if let Cmd::SetSelection { range } = &cmd {
            let len = self.len();
            let start = range.start.min(len);
            let end = range.end.min(len).max(start);
            self.selection = start..end;
        }
        self.version += 1;

        Transaction::selection_only(self.selection.clone(), self.version, self.len())
    }

    /// Get the current selection range
    pub fn selection(&self) -> std::ops::Range<usize> {
        self.selection.clone()
    }

    /// Get the current version
    pub fn version(&self) -> u64 {
        self.version
    }

    /// Get the current text content
    pub fn text(&self) -> String {
        self.buffer.to_string()
    }

    /// Get the document's content as raw bytes
    pub fn to_bytes(&self) -> Vec<u8> {
        self.buffer.to_string().into_bytes()
    }

    /// Total content size in bytes
    pub fn len(&self) -> usize {
        self.buffer.len()
    }

    pub fn is_empty(&self) -> bool {
        self.buffer.len() == 0
    }

    /// Slice the buffer to a cow string
    pub fn slice_to_cow(&self, range: std::ops::Range<usize>) -> std::borrow::Cow<'_, str> {
        let doc_len = self.buffer.len();

        // Clamp range to document bounds to prevent xi-rope panic
        let start = range.start.min(doc_len);
        let end = range.end.min(doc_len).max(start);

        self.buffer.slice_to_cow(start..end)
    }

    /// Byte ranges of the document's blocks, in order.
    ///
    /// A block is a line including its terminating newline; the final block
    /// may be unterminated. An empty document has no blocks.
    pub fn block_ranges(&self) -> Vec<std::ops::Range<usize>> {
        let text = self.text();
        let mut ranges = Vec::new();
        let mut start = 0;
        for (i, byte) in text.bytes().enumerate() {
            if byte == b'\n' {
                ranges.push(start..i + 1);
                start = i + 1;
            }
        }
        if start < text.len() {
            ranges.push(start..text.len());
        }
        ranges
    }

    /// Whether `from..to` spans whole blocks: `from` sits at a block start
    /// and `to` at a block end. Node decorations are rejected otherwise.
    pub fn is_block_aligned(&self, from: usize, to: usize) -> bool {
        let len = self.len();
        if from >= to || to > len {
            return false;
        }
        // Byte-level checks; a position in the middle of a multi-byte
        // character can never sit next to a newline byte.
        let text = self.buffer.slice_to_cow(0..len);
        let bytes = text.as_bytes();
        let starts_block = from == 0 || bytes[from - 1] == b'\n';
        let ends_block = to == len || bytes[to - 1] == b'\n';
        starts_block && ends_block
    }
}
