use std::collections::BTreeMap;
use std::fmt;
use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::editing::Document;
use crate::overlay::Renderable;

/// Attributes attached to a decoration, e.g. `class` or `style`.
///
/// Ordered so overlays render and compare deterministically.
pub type DecorationAttrs = BTreeMap<String, String>;

/// A renderable element produced for widget decorations.
///
/// This is a plain value; turning it into a DOM node, a terminal cell run
/// or anything else is the rendering layer's job.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Element {
    pub tag: String,
    pub attrs: DecorationAttrs,
    pub text: Option<String>,
}

impl Element {
    pub fn new(tag: impl Into<String>) -> Self {
        Self {
            tag: tag.into(),
            attrs: DecorationAttrs::new(),
            text: None,
        }
    }

    /// The empty inert element: what a widget without a renderer resolves to
    pub fn inert() -> Self {
        Self::new("span")
    }

    pub fn with_attr(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.attrs.insert(key.into(), value.into());
        self
    }

    pub fn with_text(mut self, text: impl Into<String>) -> Self {
        self.text = Some(text.into());
        self
    }

    /// Serialize to an HTML fragment with escaped text and attribute values
    pub fn to_html(&self) -> String {
        let mut html = String::new();
        html.push('<');
        html.push_str(&self.tag);
        for (key, value) in &self.attrs {
            html.push(' ');
            html.push_str(key);
            html.push_str("=\"");
            html.push_str(&html_escape::encode_double_quoted_attribute(value));
            html.push('"');
        }
        html.push('>');
        if let Some(text) = &self.text {
            html.push_str(&html_escape::encode_text(text));
        }
        html.push_str("</");
        html.push_str(&self.tag);
        html.push('>');
        html
    }
}

/// Render callback for widget decorations.
///
/// Wrapped in an `Arc` so decorations stay cheap to clone; the closure is
/// invoked once per resolve pass.
#[derive(Clone)]
pub struct WidgetRender(Arc<dyn Fn() -> Element + Send + Sync>);

impl WidgetRender {
    pub fn new(render: impl Fn() -> Element + Send + Sync + 'static) -> Self {
        Self(Arc::new(render))
    }

    pub fn render(&self) -> Element {
        (self.0)()
    }
}

impl fmt::Debug for WidgetRender {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("WidgetRender(..)")
    }
}

/// A provider-declared visual decoration over the document.
///
/// Positions are byte offsets into the document's content stream. A
/// decoration describes *intent*; it only becomes part of an overlay once
/// [`Decoration::resolve`] validates it against the current document.
#[derive(Debug, Clone)]
pub enum Decoration {
    /// A point decoration rendering an element at a position
    Widget {
        pos: usize,
        render: Option<WidgetRender>,
    },
    /// A decoration over a character range
    Inline {
        from: usize,
        to: usize,
        attrs: DecorationAttrs,
    },
    /// A decoration over whole blocks, with an opaque metadata map passed
    /// through to the rendering layer
    Node {
        from: usize,
        to: usize,
        attrs: DecorationAttrs,
        meta: Option<DecorationAttrs>,
    },
}

impl Decoration {
    /// Widget decoration with the default (inert) rendering
    pub fn widget(pos: usize) -> Self {
        Decoration::Widget { pos, render: None }
    }

    /// Widget decoration with a custom renderer
    pub fn widget_with(pos: usize, render: impl Fn() -> Element + Send + Sync + 'static) -> Self {
        Decoration::Widget {
            pos,
            render: Some(WidgetRender::new(render)),
        }
    }

    /// Inline decoration over `from..to`
    pub fn inline<K, V>(from: usize, to: usize, attrs: impl IntoIterator<Item = (K, V)>) -> Self
    where
        K: Into<String>,
        V: Into<String>,
    {
        Decoration::Inline {
            from,
            to,
            attrs: attrs
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }

    /// Node decoration over the whole blocks spanned by `from..to`
    pub fn node<K, V>(
        from: usize,
        to: usize,
        attrs: impl IntoIterator<Item = (K, V)>,
        meta: Option<DecorationAttrs>,
    ) -> Self
    where
        K: Into<String>,
        V: Into<String>,
    {
        Decoration::Node {
            from,
            to,
            attrs: attrs
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
            meta,
        }
    }

    /// Resolve this decoration against the current document.
    ///
    /// Fails closed: any malformed decoration (position past the end,
    /// inverted or empty range, node range not aligned to block
    /// boundaries) yields `None` and is simply left out of the overlay
    /// for this pass.
    pub fn resolve(&self, doc: &Document) -> Option<Renderable> {
        let len = doc.len();

        match self {
            Decoration::Widget { pos, render } => {
                if *pos > len {
                    return None;
                }
                let element = match render {
                    Some(render) => render.render(),
                    None => Element::inert(),
                };
                Some(Renderable::Widget {
                    pos: *pos,
                    element,
                })
            }
            Decoration::Inline { from, to, attrs } => {
                if *from >= *to || *to > len {
                    return None;
                }
                Some(Renderable::Inline {
                    from: *from,
                    to: *to,
                    attrs: attrs.clone(),
                })
            }
            Decoration::Node {
                from,
                to,
                attrs,
                meta,
            } => {
                if *from >= *to || *to > len || !doc.is_block_aligned(*from, *to) {
                    return None;
                }
                Some(Renderable::Node {
                    from: *from,
                    to: *to,
                    attrs: attrs.clone(),
                    meta: meta.clone(),
                })
            }
        }
    }
}
