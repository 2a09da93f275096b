use regex::{Regex, RegexBuilder};
use serde::{Deserialize, Serialize};

use overtext_engine::{Decoration, DecorationProvider, Document};

fn default_class() -> String {
    "search-match".to_string()
}

/// Configuration for [`SearchHighlight`].
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SearchConfig {
    /// Regular expression to highlight
    pub pattern: String,
    #[serde(default)]
    pub case_insensitive: bool,
    /// Class attribute placed on each match
    #[serde(default = "default_class")]
    pub class: String,
}

/// Highlights every match of a pattern with an inline decoration.
#[derive(Debug)]
pub struct SearchHighlight {
    regex: Regex,
    class: String,
}

impl SearchHighlight {
    pub fn new(config: &SearchConfig) -> Result<Self, regex::Error> {
        let regex = RegexBuilder::new(&config.pattern)
            .case_insensitive(config.case_insensitive)
            .build()?;
        Ok(Self {
            regex,
            class: config.class.clone(),
        })
    }
}

impl DecorationProvider for SearchHighlight {
    fn name(&self) -> &str {
        "search-highlight"
    }

    fn decorations(&self, doc: &Document) -> anyhow::Result<Vec<Decoration>> {
        let text = doc.text();
        let decorations = self
            .regex
            .find_iter(&text)
            // Zero-width matches carry no highlightable content
            .filter(|m| m.start() < m.end())
            .map(|m| Decoration::inline(m.start(), m.end(), [("class", self.class.as_str())]))
            .collect();
        Ok(decorations)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use overtext_engine::Renderable;
    use rstest::rstest;

    fn provider(pattern: &str, case_insensitive: bool) -> SearchHighlight {
        SearchHighlight::new(&SearchConfig {
            pattern: pattern.to_string(),
            case_insensitive,
            class: default_class(),
        })
        .unwrap()
    }

    fn resolved_ranges(provider: &SearchHighlight, text: &str) -> Vec<(usize, usize)> {
        let doc = Document::from_bytes(text.as_bytes()).unwrap();
        provider
            .decorations(&doc)
            .unwrap()
            .into_iter()
            .filter_map(|d| d.resolve(&doc))
            .map(|r| match r {
                Renderable::Inline { from, to, .. } => (from, to),
                other => panic!("Expected inline renderable, got {other:?}"),
            })
            .collect()
    }

    #[test]
    fn test_every_match_is_highlighted() {
        let provider = provider("ab", false);
        assert_eq!(resolved_ranges(&provider, "ab cd ab"), vec![(0, 2), (6, 8)]);
    }

    #[rstest]
    #[case(false, vec![(0, 2)])]
    #[case(true, vec![(0, 2), (3, 5)])]
    fn test_case_sensitivity(#[case] insensitive: bool, #[case] expected: Vec<(usize, usize)>) {
        let provider = provider("ab", insensitive);
        assert_eq!(resolved_ranges(&provider, "ab AB"), expected);
    }

    #[test]
    fn test_zero_width_matches_are_skipped() {
        // "b*" matches the empty string at every position
        let provider = provider("b*", false);
        assert_eq!(resolved_ranges(&provider, "abc"), vec![(1, 2)]);
    }

    #[test]
    fn test_no_matches_no_decorations() {
        let provider = provider("xyz", false);
        assert!(resolved_ranges(&provider, "abc").is_empty());
    }

    #[test]
    fn test_match_carries_the_configured_class() {
        let provider = SearchHighlight::new(&SearchConfig {
            pattern: "cat".to_string(),
            case_insensitive: false,
            class: "found".to_string(),
        })
        .unwrap();
        let doc = Document::from_bytes(b"a cat").unwrap();

        let decos = provider.decorations(&doc).unwrap();
        match decos[0].resolve(&doc).unwrap() {
            Renderable::Inline { attrs, .. } => {
                assert_eq!(attrs.get("class").map(String::as_str), Some("found"));
            }
            other => panic!("Expected inline renderable, got {other:?}"),
        }
    }

    #[test]
    fn test_invalid_pattern_is_rejected_at_construction() {
        let result = SearchHighlight::new(&SearchConfig {
            pattern: "(unclosed".to_string(),
            case_insensitive: false,
            class: default_class(),
        });
        assert!(result.is_err());
    }
}
