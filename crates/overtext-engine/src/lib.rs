pub mod editing;
pub mod overlay;

// Re-export key types for easier usage
pub use editing::{Cmd, Document, Transaction};
pub use overlay::{
    Decoration, DecorationAttrs, DecorationProvider, Element, FnProvider, Overlay, OverlayManager,
    Renderable, WidgetRender,
};
