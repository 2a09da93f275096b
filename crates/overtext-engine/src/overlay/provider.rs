use crate::editing::Document;
use crate::overlay::Decoration;

/// An extension contributing decorations for the current document state.
///
/// Providers are called once at startup and once per content-changing
/// transaction, so `decorations` must be cheap, repeatable, and read-only
/// with respect to the document. The document is always passed in
/// explicitly; providers must not hold their own reference to editor
/// state.
///
/// Returning an error skips this provider's contribution for the current
/// pass only; the other providers are unaffected and the provider is
/// asked again on the next content change.
pub trait DecorationProvider: std::fmt::Debug {
    /// Name used in diagnostics when the provider fails
    fn name(&self) -> &str;

    /// The provider's current decorations for the given document
    fn decorations(&self, doc: &Document) -> anyhow::Result<Vec<Decoration>>;
}

/// Adapter turning a named function into a [`DecorationProvider`].
pub struct FnProvider<F> {
    name: String,
    f: F,
}

impl<F> FnProvider<F>
where
    F: Fn(&Document) -> anyhow::Result<Vec<Decoration>>,
{
    pub fn new(name: impl Into<String>, f: F) -> Self {
        Self {
            name: name.into(),
            f,
        }
    }
}

impl<F> std::fmt::Debug for FnProvider<F> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FnProvider")
            .field("name", &self.name)
            .finish_non_exhaustive()
    }
}

impl<F> DecorationProvider for FnProvider<F>
where
    F: Fn(&Document) -> anyhow::Result<Vec<Decoration>>,
{
    fn name(&self) -> &str {
        &self.name
    }

    fn decorations(&self, doc: &Document) -> anyhow::Result<Vec<Decoration>> {
        (self.f)(doc)
    }
}
