use serde::{Deserialize, Serialize};

use overtext_engine::{Decoration, DecorationProvider, Document, Element};

/// Configuration for [`PageBanner`].
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct BannerConfig {
    /// Text rendered in a banner element before the first character
    pub header: Option<String>,
    /// Text rendered in a banner element after the last character
    pub footer: Option<String>,
}

/// Renders page header/footer widgets at the document's edges.
#[derive(Debug)]
pub struct PageBanner {
    config: BannerConfig,
}

impl PageBanner {
    pub fn new(config: BannerConfig) -> Self {
        Self { config }
    }
}

fn banner_element(class: &str, text: &str) -> Element {
    Element::new("div")
        .with_attr("class", class)
        .with_text(text)
}

impl DecorationProvider for PageBanner {
    fn name(&self) -> &str {
        "page-banner"
    }

    fn decorations(&self, doc: &Document) -> anyhow::Result<Vec<Decoration>> {
        let mut decorations = Vec::new();

        if let Some(header) = &self.config.header {
            let header = header.clone();
            decorations.push(Decoration::widget_with(0, move || {
                banner_element("page-header", &header)
            }));
        }
        if let Some(footer) = &self.config.footer {
            let footer = footer.clone();
            decorations.push(Decoration::widget_with(doc.len(), move || {
                banner_element("page-footer", &footer)
            }));
        }

        Ok(decorations)
    }
}
