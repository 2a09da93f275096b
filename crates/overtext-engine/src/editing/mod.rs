/*!
 * # Editing Core Module
 *
 * A minimal host document model the overlay engine runs against. Real
 * editors bring their own document and transaction machinery; this module
 * is the reference embodiment of the surface the overlay layer consumes.
 *
 * ## Architecture
 *
 * ### 1. Single Source of Truth: xi-rope Buffer
 * - The entire document is stored in a single **`xi_rope::Rope`** buffer
 * - All positions are byte offsets into that buffer
 * - Blocks are line-delimited spans of the buffer
 *
 * ### 2. Command-Based Editing
 * - All edits are represented as **Commands** (`Cmd` enum) that compile to **Deltas**
 * - Commands are applied immediately and atomically
 * - Selection-only commands compile to no delta at all, which is how the
 *   overlay layer recognizes transactions it can skip
 *
 * ### 3. Transactions
 * - `Document::apply` returns a [`Transaction`] describing the edit:
 *   whether content changed, which ranges did, the new selection, and a
 *   position-mapping function through the underlying delta
 * - The selection is carried through every content edit via that mapping
 *
 * ## Usage
 *
 * ```rust
 * use overtext_engine::editing::{Cmd, Document};
 *
 * let mut doc = Document::from_bytes(b"Hello world").unwrap();
 * let tr = doc.apply(Cmd::InsertText { at: 5, text: ",".to_string() });
 *
 * assert!(tr.doc_changed());
 * assert_eq!(doc.text(), "Hello, world");
 * assert_eq!(tr.map_pos(5, true), 6);
 * ```
 */

pub mod commands;
pub mod document;
pub mod transaction;

pub use commands::Cmd;
pub use document::Document;
pub use transaction::Transaction;
