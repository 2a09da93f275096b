use serde::{Deserialize, Serialize};

use overtext_engine::{Decoration, DecorationAttrs, DecorationProvider, Document};

/// Configuration for [`BlockStyle`].
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct BlockStyleConfig {
    /// Attributes applied to every block
    #[serde(default)]
    pub attrs: DecorationAttrs,
    /// Attributes applied to odd blocks instead of `attrs`, for striped
    /// rendering; blank blocks keep their position in the numbering
    pub alternate_attrs: Option<DecorationAttrs>,
}

/// Applies a node decoration to every non-blank block of the document.
#[derive(Debug)]
pub struct BlockStyle {
    config: BlockStyleConfig,
}

impl BlockStyle {
    pub fn new(config: BlockStyleConfig) -> Self {
        Self { config }
    }
}

impl DecorationProvider for BlockStyle {
    fn name(&self) -> &str {
        "block-style"
    }

    fn decorations(&self, doc: &Document) -> anyhow::Result<Vec<Decoration>> {
        let mut decorations = Vec::new();

        for (index, range) in doc.block_ranges().into_iter().enumerate() {
            if doc.slice_to_cow(range.clone()).trim().is_empty() {
                continue;
            }

            let attrs = match (&self.config.alternate_attrs, index % 2 == 1) {
                (Some(alternate), true) => alternate,
                _ => &self.config.attrs,
            };
            decorations.push(Decoration::node(
                range.start,
                range.end,
                attrs.clone(),
                None,
            ));
        }

        Ok(decorations)
    }
}
