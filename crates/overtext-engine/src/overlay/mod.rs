/*!
 * # Overlay Module
 *
 * Decoration management for editor views: independent providers each
 * contribute visual decorations (inline highlights, block styling,
 * floating widgets) over the document, and the [`OverlayManager`] merges
 * them into one immutable overlay the rendering layer paints.
 *
 * ## Architecture
 *
 * ### 1. Decorations as a Closed Sum Type
 * - [`Decoration`] has exactly three variants: widget (point), inline
 *   (character range), node (whole-block range)
 * - Resolution is a `match`, so adding a variant forces every consumer to
 *   handle it
 * - [`Decoration::resolve`] fails closed: malformed coordinates yield
 *   `None`, never a panic, so one bad decoration can't take down the
 *   whole overlay
 *
 * ### 2. Providers
 * - A [`DecorationProvider`] is asked, on every content-changing
 *   transaction, for its current decorations against the live document
 * - The document is passed in explicitly; providers hold no editor handle
 * - A failing provider is logged and skipped for the pass without
 *   touching the other providers' contributions
 *
 * ### 3. Stateless Recompute
 * - On every content change the manager discards the previous snapshot
 *   wholesale and re-collects from all providers against the new document
 * - Decoration coordinates are never remapped through the transaction,
 *   so stale-offset bugs from mixing remapping with regeneration can't
 *   occur
 * - Selection-only transactions keep the installed snapshot untouched;
 *   in interactive typing those vastly outnumber edits
 *
 * ### 4. Read API: Immutable Overlays
 * - [`OverlayManager::query`] hands out the current [`Overlay`]: an
 *   ordered, immutable, cheaply-cloneable sequence of resolved
 *   [`Renderable`]s tagged with the document version it was computed from
 * - Before the first recompute it returns the inert empty overlay, never
 *   a failure
 *
 * ## Usage
 *
 * ```rust
 * use overtext_engine::editing::{Cmd, Document};
 * use overtext_engine::overlay::{Decoration, FnProvider, OverlayManager};
 *
 * fn highlight_all(doc: &Document) -> anyhow::Result<Vec<Decoration>> {
 *     Ok(vec![Decoration::inline(0, doc.len(), [("class", "hl")])])
 * }
 *
 * let mut doc = Document::from_bytes(b"Hello world").unwrap();
 * let mut manager = OverlayManager::new();
 * manager.register(FnProvider::new("highlight", highlight_all));
 * manager.init(&doc);
 * assert_eq!(manager.query().len(), 1);
 *
 * // Content edits trigger a full recompute...
 * let tr = doc.apply(Cmd::InsertText { at: 5, text: ",".to_string() });
 * manager.apply(&tr, &doc);
 * assert_eq!(manager.query().version(), doc.version());
 *
 * // ...selection moves do not.
 * let before = manager.query();
 * let tr = doc.apply(Cmd::SetSelection { range: 0..2 });
 * manager.apply(&tr, &doc);
 * assert!(manager.query().same_as(&before));
 * ```
 */

pub mod decoration;
pub mod manager;
pub mod provider;
pub mod snapshot;

pub use decoration::{Decoration, DecorationAttrs, Element, WidgetRender};
pub use manager::OverlayManager;
pub use provider::{DecorationProvider, FnProvider};
pub use snapshot::{Overlay, Renderable};
