use xi_rope::delta::Builder;
use xi_rope::{Delta, Rope, RopeInfo};

use crate::editing::Document;

/// Edit commands applied to a [`Document`].
///
/// Content commands compile to deltas; `SetSelection` compiles to nothing
/// and therefore yields a selection-only transaction. Positions are byte
/// offsets and are clamped to the document bounds during compilation.
#[derive(Debug, Clone, PartialEq)]
pub enum Cmd {
    /// Insert text at a byte position
    InsertText { at: usize, text: String },
    /// Delete a byte range
    DeleteRange { range: std::ops::Range<usize> },
    /// Replace a byte range with new text
    ReplaceRange {
        range: std::ops::Range<usize>,
        text: String,
    },
    /// Move the selection without touching content
    SetSelection { range: std::ops::Range<usize> },
}

/// Compile a command into a delta against the document's current buffer.
///
/// Returns `None` for commands that leave the content untouched: either
/// selection moves or edits that collapse to nothing after clamping.
pub(crate) fn compile_command(doc: &Document, cmd: &Cmd) -> Option<Delta<RopeInfo>> {
    let len = doc.len();

    match cmd {
        Cmd::InsertText { at, text } => {
            if text.is_empty() {
                return None;
            }
            let at = (*at).min(len);
            let mut builder = Builder::new(len);
            builder.replace(at..at, Rope::from(text.as_str()));
            Some(builder.build())
        }
        Cmd::DeleteRange { range } => {
            let start = range.start.min(len);
            let end = range.end.min(len).max(start);
            if start == end {
                return None;
            }
            let mut builder = Builder::new(len);
            builder.delete(start..end);
            Some(builder.build())
        }
        Cmd::ReplaceRange { range, text } => {
            let start = range.start.min(len);
            let end = range.end.min(len).max(start);
            if start == end && text.is_empty() {
                return None;
            }
            let mut builder = Builder::new(len);
            builder.replace(start..end, Rope::from(text.as_str()));
            Some(builder.build())
        }
        Cmd::SetSelection { .. } => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn doc(text: &str) -> Document {
        Document::from_bytes(text.as_bytes()).unwrap()
    }

    #[test]
    fn test_insert_compiles_to_delta() {
        let doc = doc("Hello");
        let delta = compile_command(
            &doc,
            &Cmd::InsertText {
                at: 5,
                text: "!".to_string(),
            },
        )
        .expect("Insert should compile");

        assert_eq!(delta.apply(&doc.buffer).to_string(), "Hello!");
    }

    #[test]
    fn test_insert_position_is_clamped() {
        let doc = doc("Hi");
        let delta = compile_command(
            &doc,
            &Cmd::InsertText {
                at: 99,
                text: "!".to_string(),
            },
        )
        .expect("Clamped insert should compile");

        assert_eq!(delta.apply(&doc.buffer).to_string(), "Hi!");
    }

    #[test]
    fn test_empty_insert_compiles_to_nothing() {
        let doc = doc("Hi");
        assert!(
            compile_command(
                &doc,
                &Cmd::InsertText {
                    at: 0,
                    text: String::new(),
                },
            )
            .is_none()
        );
    }

    #[test]
    fn test_delete_clamps_and_collapses() {
        let doc = doc("Hello");
        let delta = compile_command(&doc, &Cmd::DeleteRange { range: 2..99 })
            .expect("Clamped delete should compile");
        assert_eq!(delta.apply(&doc.buffer).to_string(), "He");

        assert!(compile_command(&doc, &Cmd::DeleteRange { range: 99..120 }).is_none());
    }

    #[test]
    fn test_set_selection_compiles_to_nothing() {
        let doc = doc("Hello");
        assert!(compile_command(&doc, &Cmd::SetSelection { range: 0..2 }).is_none());
    }
}
