use std::sync::Arc;

use serde::Serialize;

use crate::overlay::decoration::{DecorationAttrs, Element};

/// A resolved decoration the rendering layer can paint without knowing
/// which provider produced it.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub enum Renderable {
    /// An element rendered at a point
    Widget { pos: usize, element: Element },
    /// Attributes applied across a character range
    Inline {
        from: usize,
        to: usize,
        attrs: DecorationAttrs,
    },
    /// Attributes applied to whole blocks, with opaque pass-through metadata
    Node {
        from: usize,
        to: usize,
        attrs: DecorationAttrs,
        meta: Option<DecorationAttrs>,
    },
}

/// The merged, immutable overlay for one document state.
///
/// An overlay is an ordered sequence of [`Renderable`]s behind an `Arc`:
/// cloning is cheap, and the rendering layer can hold a previous overlay
/// while a new one is being installed. The version is the document
/// version the overlay was computed from, for change detection.
#[derive(Debug, Clone, PartialEq)]
pub struct Overlay {
    version: u64,
    renderables: Arc<[Renderable]>,
}

impl Overlay {
    pub(crate) fn new(version: u64, renderables: Vec<Renderable>) -> Self {
        Self {
            version,
            renderables: renderables.into(),
        }
    }

    /// The inert overlay: what [`query`](crate::overlay::OverlayManager::query)
    /// returns before anything has been computed
    pub fn empty() -> Self {
        Self {
            version: 0,
            renderables: Arc::new([]),
        }
    }

    /// Document version this overlay was computed from
    pub fn version(&self) -> u64 {
        self.version
    }

    pub fn len(&self) -> usize {
        self.renderables.len()
    }

    pub fn is_empty(&self) -> bool {
        self.renderables.is_empty()
    }

    /// The resolved decorations in paint order
    pub fn renderables(&self) -> &[Renderable] {
        &self.renderables
    }

    pub fn iter(&self) -> impl Iterator<Item = &Renderable> {
        self.renderables.iter()
    }

    /// Whether two overlays are the same snapshot, not merely equal in
    /// content. Selection-only transactions keep the snapshot identical
    /// in this sense.
    pub fn same_as(&self, other: &Overlay) -> bool {
        Arc::ptr_eq(&self.renderables, &other.renderables)
    }
}
