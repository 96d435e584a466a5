//! Corpus segmentation at heading boundaries.
//!
//! A corpus is split into sections at lines that start with `## ` — the
//! sole delimiter. Deeper or shallower markdown headings are ordinary
//! body text. A corpus with no heading lines at all yields **zero**
//! sections: that is the caller's signal to treat the corpus as a single
//! opaque blob rather than a structured document.

use serde::{Deserialize, Serialize};

/// A corpus subdivision delimited by a level-2 heading line.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Section {
    /// The heading line, without the `## ` marker, trimmed.
    pub heading: String,

    /// Everything after the heading line, trimmed as a block.
    pub body: String,

    /// Canonical re-serialization: `"## {heading}\n{body}"`. This is what
    /// gets injected into the prompt; scoring never reads it.
    pub full_text: String,
}

impl Section {
    fn from_chunk(lines: &[&str]) -> Option<Self> {
        let text = lines.join("\n");
        let text = text.trim();
        if text.is_empty() {
            return None;
        }

        let mut parts = text.splitn(2, '\n');
        let heading = parts.next().unwrap_or_default().trim().to_string();
        let body = parts.next().unwrap_or_default().trim().to_string();
        let full_text = format!("## {heading}\n{body}");

        Some(Self {
            heading,
            body,
            full_text,
        })
    }
}

/// Does this line open a new section?
fn heading_text(line: &str) -> Option<&str> {
    line.strip_prefix("## ")
}

/// Split a corpus into ordered sections at `## ` heading lines.
///
/// Total over all string input: any corpus, including the empty string,
/// yields a (possibly empty) sequence. Empty and whitespace-only chunks
/// are discarded. Text before the first heading forms a chunk of its own,
/// with its first line serving as the heading. Section order follows
/// corpus order, so output is deterministic for identical input.
pub fn segment(corpus: &str) -> Vec<Section> {
    // No heading markers anywhere → unstructured corpus, zero sections.
    if !corpus.lines().any(|l| heading_text(l).is_some()) {
        return Vec::new();
    }

    let mut chunks: Vec<Vec<&str>> = Vec::new();
    let mut current: Vec<&str> = Vec::new();

    for line in corpus.lines() {
        if let Some(rest) = heading_text(line) {
            chunks.push(std::mem::take(&mut current));
            current.push(rest);
        } else {
            current.push(line);
        }
    }
    chunks.push(current);

    chunks
        .iter()
        .filter_map(|chunk| Section::from_chunk(chunk))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn splits_on_level_two_headings() {
        let corpus = "## Prayer\nDaily prayer practice.\n## Fasting\nFasting disciplines the body.";
        let sections = segment(corpus);
        assert_eq!(sections.len(), 2);
        assert_eq!(sections[0].heading, "Prayer");
        assert_eq!(sections[0].body, "Daily prayer practice.");
        assert_eq!(sections[1].heading, "Fasting");
    }

    #[test]
    fn full_text_is_canonical_reserialization() {
        let sections = segment("## Prayer\nDaily prayer practice.");
        assert_eq!(sections[0].full_text, "## Prayer\nDaily prayer practice.");
    }

    #[test]
    fn no_headings_yields_zero_sections() {
        assert!(segment("just plain text\nwith several lines").is_empty());
        assert!(segment("# top heading only\ntext").is_empty());
        assert!(segment("### deeper heading\ntext").is_empty());
    }

    #[test]
    fn empty_corpus_yields_zero_sections() {
        assert!(segment("").is_empty());
        assert!(segment("   \n  \n").is_empty());
    }

    #[test]
    fn other_heading_levels_stay_in_body() {
        let corpus = "## Outer\nintro\n### Inner\ndetail";
        let sections = segment(corpus);
        assert_eq!(sections.len(), 1);
        assert!(sections[0].body.contains("### Inner"));
    }

    #[test]
    fn preamble_before_first_heading_becomes_a_section() {
        let corpus = "Introduction line\nmore intro\n## Real Section\nbody";
        let sections = segment(corpus);
        assert_eq!(sections.len(), 2);
        assert_eq!(sections[0].heading, "Introduction line");
        assert_eq!(sections[0].body, "more intro");
        assert_eq!(sections[1].heading, "Real Section");
    }

    #[test]
    fn whitespace_chunks_discarded() {
        let corpus = "## \n## Kept\nbody";
        let sections = segment(corpus);
        assert_eq!(sections.len(), 1);
        assert_eq!(sections[0].heading, "Kept");
    }

    #[test]
    fn heading_without_body() {
        let sections = segment("## Lone Heading");
        assert_eq!(sections.len(), 1);
        assert_eq!(sections[0].heading, "Lone Heading");
        assert_eq!(sections[0].body, "");
        assert_eq!(sections[0].full_text, "## Lone Heading\n");
    }

    #[test]
    fn heading_marker_requires_trailing_space() {
        // "##Tight" is not a heading line
        assert!(segment("##Tight\nbody").is_empty());
    }

    #[test]
    fn extra_heading_whitespace_trimmed() {
        let sections = segment("##   Padded Heading  \nbody");
        assert_eq!(sections[0].heading, "Padded Heading");
    }

    #[test]
    fn nonempty_chunks_never_have_empty_headings() {
        let corpus = "## A\nbody\n## B\n\nmore";
        for s in segment(corpus) {
            assert!(!s.heading.is_empty());
        }
    }

    #[test]
    fn deterministic_order_follows_corpus() {
        let corpus = "## Z\nlast topic\n## A\nfirst topic";
        let sections = segment(corpus);
        assert_eq!(sections[0].heading, "Z");
        assert_eq!(sections[1].heading, "A");
    }
}
