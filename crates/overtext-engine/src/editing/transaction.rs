use xi_rope::delta::Transformer;
use xi_rope::{Delta, RopeInfo};

/// Result of applying a command to a [`Document`](crate::editing::Document).
///
/// A transaction is the whole surface the overlay layer consumes: whether
/// document content changed, a position-mapping function valid for this
/// edit, and the resulting document size and version. Selection-only
/// transactions carry no delta and map positions to themselves.
pub struct Transaction {
    /// The applied delta; `None` for selection-only transactions
    delta: Option<Delta<RopeInfo>>,
    /// Inserted byte ranges in post-edit coordinates
    changed: Vec<std::ops::Range<usize>>,
    /// Selection after the edit
    new_selection: std::ops::Range<usize>,
    /// Document version after the edit
    version: u64,
    /// Document size after the edit
    new_doc_len: usize,
}

impl Transaction {
    pub(crate) fn content(
        delta: Delta<RopeInfo>,
        changed: Vec<std::ops::Range<usize>>,
        new_selection: std::ops::Range<usize>,
        version: u64,
        new_doc_len: usize,
    ) -> Self {
        Self {
            delta: Some(delta),
            changed,
            new_selection,
            version,
            new_doc_len,
        }
    }

    pub(crate) fn selection_only(
        new_selection: std::ops::Range<usize>,
        version: u64,
        new_doc_len: usize,
    ) -> Self {
        Self {
            delta: None,
            changed: Vec::new(),
            new_selection,
            version,
            new_doc_len,
        }
    }

    /// Whether this transaction changed document content
    pub fn doc_changed(&self) -> bool {
        self.delta.is_some()
    }

    /// Map a pre-edit byte position to its post-edit equivalent.
    ///
    /// `after` decides which side of an insertion at exactly `pos` the
    /// mapped position lands on: `true` pushes it after the inserted text,
    /// `false` keeps it before. Positions inside deleted regions collapse
    /// to the deletion point. Selection-only transactions map positions to
    /// themselves.
    pub fn map_pos(&self, pos: usize, after: bool) -> usize {
        match &self.delta {
            Some(delta) => Transformer::new(delta).transform(pos, after),
            None => pos,
        }
    }

    /// Inserted byte ranges in post-edit coordinates
    pub fn changed(&self) -> &[std::ops::Range<usize>] {
        &self.changed
    }

    /// Selection after the edit
    pub fn new_selection(&self) -> std::ops::Range<usize> {
        self.new_selection.clone()
    }

    /// Document version after the edit
    pub fn version(&self) -> u64 {
        self.version
    }

    /// Document size after the edit
    pub fn new_doc_len(&self) -> usize {
        self.new_doc_len
    }
}
