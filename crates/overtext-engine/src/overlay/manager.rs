use crate::editing::{Document, Transaction};
use crate::overlay::provider::DecorationProvider;
use crate::overlay::snapshot::Overlay;

/// Holds the merged decoration set for the lifetime of an editor view.
///
/// Providers are registered once, in the order they should paint; from
/// then on the host drives the manager with one [`apply`] call per
/// document transaction and reads the result back through [`query`].
///
/// Recompute discipline is stateless: on every content change the
/// previous snapshot is discarded and every provider is re-invoked
/// against the new document. Coordinates are never remapped through the
/// transaction, so decorations can't end up double-shifted. Transactions
/// that leave content untouched keep the installed snapshot as-is.
///
/// [`apply`]: OverlayManager::apply
/// [`query`]: OverlayManager::query
pub struct OverlayManager {
    providers: Vec<Box<dyn DecorationProvider>>,
    snapshot: Overlay,
}

impl OverlayManager {
    pub fn new() -> Self {
        Self {
            providers: Vec::new(),
            snapshot: Overlay::empty(),
        }
    }

    /// Register a provider. Registration order is paint order: a later
    /// provider's decorations sit above an earlier one's at equal
    /// geometry.
    pub fn register(&mut self, provider: impl DecorationProvider + 'static) {
        self.providers.push(Box::new(provider));
    }

    /// Register an already-boxed provider, e.g. one built from config
    pub fn register_boxed(&mut self, provider: Box<dyn DecorationProvider>) {
        self.providers.push(provider);
    }

    pub fn provider_count(&self) -> usize {
        self.providers.len()
    }

    /// Compute the initial snapshot from all registered providers.
    pub fn init(&mut self, doc: &Document) {
        self.snapshot = self.recompute(doc);
    }

    /// Process one document transaction.
    ///
    /// Content changes trigger a full recompute; selection and metadata
    /// changes return immediately with the snapshot untouched. In
    /// interactive editing the latter vastly outnumber the former.
    pub fn apply(&mut self, tr: &Transaction, doc: &Document) {
        if !tr.doc_changed() {
            return;
        }
        self.snapshot = self.recompute(doc);
    }

    /// The current overlay.
    ///
    /// Always succeeds: before [`init`](OverlayManager::init) has run this
    /// is the inert empty overlay. The returned value is a cheap handle
    /// onto the installed snapshot and stays valid while the manager
    /// replaces it.
    pub fn query(&self) -> Overlay {
        self.snapshot.clone()
    }

    fn recompute(&self, doc: &Document) -> Overlay {
        let mut renderables = Vec::new();

        for provider in &self.providers {
            match provider.decorations(doc) {
                Ok(decorations) => {
                    renderables.extend(
                        decorations
                            .into_iter()
                            .filter_map(|decoration| decoration.resolve(doc)),
                    );
                }
                Err(err) => {
                    log::warn!(
                        "decoration provider `{}` failed, skipping it this pass: {err:#}",
                        provider.name()
                    );
                }
            }
        }

        log::debug!(
            "recomputed overlay at version {}: {} renderables from {} providers",
            doc.version(),
            renderables.len(),
            self.providers.len()
        );

        Overlay::new(doc.version(), renderables)
    }
}

impl Default for OverlayManager {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::editing::Cmd;
    use crate::overlay::{Decoration, FnProvider, Renderable};

    fn doc(text: &str) -> Document {
        Document::from_bytes(text.as_bytes()).unwrap()
    }

    #[test]
    fn test_query_before_init_is_inert() {
        let manager = OverlayManager::new();
        let overlay = manager.query();

        assert!(overlay.is_empty());
    }

    #[test]
    fn test_init_collects_from_all_providers() {
        let doc = doc("Hello");
        let mut manager = OverlayManager::new();
        manager.register(FnProvider::new("a", |_: &Document| {
            Ok(vec![Decoration::widget(0)])
        }));
        manager.register(FnProvider::new("b", |doc: &Document| {
            Ok(vec![Decoration::inline(0, doc.len(), [("class", "b")])])
        }));

        manager.init(&doc);

        assert_eq!(manager.query().len(), 2);
        assert_eq!(manager.provider_count(), 2);
    }

    #[test]
    fn test_selection_change_keeps_snapshot_installed() {
        let mut doc = doc("Hello");
        let mut manager = OverlayManager::new();
        manager.register(FnProvider::new("a", |_: &Document| {
            Ok(vec![Decoration::widget(0)])
        }));
        manager.init(&doc);
        let before = manager.query();

        let tr = doc.apply(Cmd::SetSelection { range: 0..1 });
        manager.apply(&tr, &doc);

        assert!(manager.query().same_as(&before));
    }

    #[test]
    fn test_content_change_recomputes() {
        let mut doc = doc("Hello");
        let mut manager = OverlayManager::new();
        manager.register(FnProvider::new("tail", |doc: &Document| {
            Ok(vec![Decoration::widget(doc.len())])
        }));
        manager.init(&doc);
        let before = manager.query();

        let tr = doc.apply(Cmd::InsertText {
            at: 5,
            text: "!".to_string(),
        });
        manager.apply(&tr, &doc);
        let after = manager.query();

        assert!(!after.same_as(&before));
        assert_eq!(after.version(), doc.version());
        match &after.renderables()[0] {
            Renderable::Widget { pos, .. } => assert_eq!(*pos, 6),
            other => panic!("Expected widget, got {other:?}"),
        }
    }

    #[test]
    fn test_failed_provider_is_isolated() {
        let doc = doc("Hello");
        let mut manager = OverlayManager::new();
        manager.register(FnProvider::new("broken", |_: &Document| {
            Err(anyhow::anyhow!("lookup table unavailable"))
        }));
        manager.register(FnProvider::new("working", |_: &Document| {
            Ok(vec![Decoration::widget(0)])
        }));

        manager.init(&doc);

        let overlay = manager.query();
        assert_eq!(overlay.len(), 1);
    }

    #[test]
    fn test_malformed_decorations_are_dropped_not_fatal() {
        let doc = doc("Hello");
        let mut manager = OverlayManager::new();
        manager.register(FnProvider::new("mixed", |doc: &Document| {
            Ok(vec![
                Decoration::widget(999),                           // Past the end
                Decoration::inline(3, 1, [("class", "inverted")]), // Inverted
                Decoration::inline(0, doc.len(), [("class", "ok")]),
            ])
        }));

        manager.init(&doc);

        let overlay = manager.query();
        assert_eq!(overlay.len(), 1);
        match &overlay.renderables()[0] {
            Renderable::Inline { attrs, .. } => {
                assert_eq!(attrs.get("class").map(String::as_str), Some("ok"));
            }
            other => panic!("Expected inline, got {other:?}"),
        }
    }
}
