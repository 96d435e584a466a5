//! Relevance scoring and thresholded selection.
//!
//! Scores every section by lexical overlap with the query tokens and
//! returns the concatenated `full_text` of the sections worth injecting.
//!
//! The matching is deliberately generous: a low threshold, a symmetric
//! prefix test for partial matches ("pray" matches "prayer", "prayers",
//! "prayed" equally), and a floor of two sections even when nothing
//! scores. Ambiguous states degrade to "include more", never to an error.

use std::collections::HashSet;

use tracing::debug;

use crate::segment::{Section, segment};
use crate::token::tokenize;

/// Sections scoring at or above this are selected outright.
pub const SCORE_THRESHOLD: f64 = 0.15;

/// Always surface at least this many sections when any exist.
pub const MIN_SECTIONS: usize = 2;

/// A section with its relevance score for one query. Transient —
/// computed fresh per request, never persisted.
#[derive(Debug, Clone)]
pub struct ScoredSection {
    pub section: Section,
    pub score: f64,
}

/// Score one section against the query tokens.
///
/// The section's tokens are treated as a set (no frequency weighting);
/// query tokens are not deduplicated, so a repeated query token
/// contributes repeatedly. Per query token:
///
/// - +2 for an exact member of the section token set
/// - +1 if any section token is a prefix of it, or it is a prefix of any
///   section token (first such match only)
///
/// The sum is divided by the query token count, so short queries are not
/// penalized relative to long ones. A single-token exact-match query
/// scores 2.0; no match scores 0.0. Pure function of its inputs.
pub fn score_section(section: &Section, query_tokens: &[String]) -> f64 {
    if query_tokens.is_empty() {
        return 0.0;
    }

    let section_tokens: HashSet<String> =
        tokenize(&format!("{} {}", section.heading, section.body))
            .into_iter()
            .collect();

    let mut score = 0u32;
    for qt in query_tokens {
        if section_tokens.contains(qt) {
            score += 2;
            continue;
        }
        if section_tokens
            .iter()
            .any(|st| st.starts_with(qt.as_str()) || qt.starts_with(st.as_str()))
        {
            score += 1;
        }
    }

    f64::from(score) / query_tokens.len() as f64
}

/// Score all sections and sort by descending score.
///
/// The sort is stable, so equal scores keep their corpus order.
pub fn rank_sections(sections: &[Section], query_tokens: &[String]) -> Vec<ScoredSection> {
    let mut scored: Vec<ScoredSection> = sections
        .iter()
        .map(|s| ScoredSection {
            section: s.clone(),
            score: score_section(s, query_tokens),
        })
        .collect();

    scored.sort_by(|a, b| b.score.partial_cmp(&a.score).unwrap_or(std::cmp::Ordering::Equal));
    scored
}

/// Apply the threshold with the minimum-section floor.
///
/// Expects input sorted by descending score (see [`rank_sections`]).
/// Everything at or above [`SCORE_THRESHOLD`] is selected; when fewer
/// than [`MIN_SECTIONS`] pass, the top scorers are taken instead (all of
/// them if the corpus has fewer sections than the floor).
pub fn threshold_selection(scored: &[ScoredSection]) -> &[ScoredSection] {
    // Sorted descending, so the passing prefix is contiguous.
    let above = scored
        .iter()
        .take_while(|s| s.score >= SCORE_THRESHOLD)
        .count();

    if above >= MIN_SECTIONS {
        &scored[..above]
    } else {
        &scored[..scored.len().min(MIN_SECTIONS)]
    }
}

/// Select the corpus sections relevant to a query.
///
/// Returns the selected sections' `full_text` joined by blank lines, in
/// descending score order. Short-circuit fallbacks, in order:
///
/// 1. empty (or whitespace-only) corpus → empty string
/// 2. no sections (no `## ` headings) → the whole corpus verbatim
/// 3. no query tokens → the whole corpus verbatim
///
/// Total over all string inputs; never mutates the corpus.
pub fn select_relevant(corpus: &str, query: &str) -> String {
    if corpus.trim().is_empty() {
        return String::new();
    }

    let sections = segment(corpus);
    if sections.is_empty() {
        return corpus.to_string();
    }

    let query_tokens = tokenize(query);
    if query_tokens.is_empty() {
        return corpus.to_string();
    }

    let scored = rank_sections(&sections, &query_tokens);
    let selected = threshold_selection(&scored);

    debug!(
        selected = selected.len(),
        total = sections.len(),
        query = %query.chars().take(60).collect::<String>(),
        "knowledge sections selected"
    );
    for s in selected {
        debug!(score = s.score, heading = %s.section.heading, "section");
    }

    selected
        .iter()
        .map(|s| s.section.full_text.as_str())
        .collect::<Vec<_>>()
        .join("\n\n")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn section(heading: &str, body: &str) -> Section {
        Section {
            heading: heading.into(),
            body: body.into(),
            full_text: format!("## {heading}\n{body}"),
        }
    }

    // ── Scoring ───────────────────────────────────────────────────────

    #[test]
    fn exact_match_scores_two() {
        let s = section("Grace", "grace faith");
        let score = score_section(&s, &tokenize("grace"));
        assert!((score - 2.0).abs() < f64::EPSILON);
    }

    #[test]
    fn mixed_match_normalized_by_query_length() {
        // {"grace","faith"} vs "grace faith hope": (2 + 2 + 0) / 3
        let s = section("Grace", "faith");
        let score = score_section(&s, &tokenize("grace faith hope"));
        assert!((score - 4.0 / 3.0).abs() < 1e-12);
    }

    #[test]
    fn no_match_scores_zero() {
        let s = section("Grace", "faith");
        let score = score_section(&s, &tokenize("submarine"));
        assert_eq!(score, 0.0);
    }

    #[test]
    fn prefix_match_query_extends_section_token() {
        // section "grace", query "graces": section token is a prefix of the query token
        let s = section("Grace", "");
        let score = score_section(&s, &tokenize("graces"));
        assert!((score - 1.0).abs() < f64::EPSILON);
    }

    #[test]
    fn prefix_match_query_token_extends_into_section_token() {
        // query "sanctific" is a prefix of section token "sanctification"
        let s = section("Sanctification", "");
        let score = score_section(&s, &tokenize("sanctific"));
        assert!((score - 1.0).abs() < f64::EPSILON);
    }

    #[test]
    fn prefix_test_is_not_stemming() {
        // "sanctify" is not a prefix of "sanctification" (nor vice versa),
        // so it does not match — the test is literal prefixes, not stems
        let s = section("Sanctification", "");
        assert_eq!(score_section(&s, &tokenize("sanctify")), 0.0);
    }

    #[test]
    fn partial_match_counts_once_per_query_token() {
        // "pray" is a prefix of every section token, but contributes once
        let s = section("Prayer", "prayers prayed prayerful");
        let score = score_section(&s, &tokenize("pray"));
        assert!((score - 1.0).abs() < f64::EPSILON);
    }

    #[test]
    fn repeated_query_tokens_contribute_repeatedly() {
        // tokens not deduplicated: (2 + 2) / 2 = 2.0 either way, but a
        // repeat alongside a miss shifts the normalization: (2+2+0)/3
        let s = section("Grace", "");
        let score = score_section(&s, &tokenize("grace grace hope"));
        assert!((score - 4.0 / 3.0).abs() < 1e-12);
    }

    #[test]
    fn heading_and_body_indistinguishable_to_scoring() {
        let heading_hit = score_section(&section("Prayer", "other"), &tokenize("prayer"));
        let body_hit = score_section(&section("Other", "prayer"), &tokenize("prayer"));
        assert_eq!(heading_hit, body_hit);
    }

    #[test]
    fn empty_query_tokens_score_zero() {
        let s = section("Grace", "faith");
        assert_eq!(score_section(&s, &[]), 0.0);
    }

    // ── Selection ─────────────────────────────────────────────────────

    const TWO_SECTION_CORPUS: &str =
        "## Prayer\nDaily prayer practice.\n## Fasting\nFasting disciplines the body.";

    #[test]
    fn empty_corpus_selects_nothing() {
        assert_eq!(select_relevant("", "anything"), "");
        assert_eq!(select_relevant("   ", "anything"), "");
    }

    #[test]
    fn unstructured_corpus_returned_verbatim() {
        let corpus = "no headings here\njust text\n";
        assert_eq!(select_relevant(corpus, "some query"), corpus);
    }

    #[test]
    fn empty_query_returns_full_corpus_verbatim() {
        // "the and of" tokenizes to nothing → send everything
        assert_eq!(
            select_relevant(TWO_SECTION_CORPUS, "the and of"),
            TWO_SECTION_CORPUS
        );
        assert_eq!(select_relevant(TWO_SECTION_CORPUS, ""), TWO_SECTION_CORPUS);
    }

    #[test]
    fn minimum_two_sections_when_nothing_passes_threshold() {
        let corpus = "## Alpha\naardvark\n## Beta\nbanana\n## Gamma\ncucumber";
        let result = select_relevant(corpus, "zebra");
        // all score 0 → top two by stable order
        assert_eq!(result, "## Alpha\naardvark\n\n## Beta\nbanana");
    }

    #[test]
    fn scenario_single_hit_pulls_in_runner_up() {
        // Prayer scores 2.0, Fasting 0 → only one passes the threshold,
        // so the floor applies and both come back, Prayer first.
        let result = select_relevant(TWO_SECTION_CORPUS, "prayer");
        assert_eq!(
            result,
            "## Prayer\nDaily prayer practice.\n\n## Fasting\nFasting disciplines the body."
        );
    }

    #[test]
    fn all_passing_sections_selected() {
        let corpus = "## Prayer\nprayer\n## Worship\nprayer worship\n## Budget\nspreadsheets";
        let result = select_relevant(corpus, "prayer worship");
        // Worship: (2+2)/2 = 2.0; Prayer: (2+0)/2 = 1.0; Budget: 0
        assert!(result.starts_with("## Worship\nprayer worship"));
        assert!(result.contains("## Prayer\nprayer"));
        assert!(!result.contains("Budget"));
    }

    #[test]
    fn single_section_corpus_returns_that_section() {
        let result = select_relevant("## Only\ncontent here", "unrelated");
        assert_eq!(result, "## Only\ncontent here");
    }

    #[test]
    fn ties_keep_corpus_order() {
        let corpus = "## First\nprayer\n## Second\nprayer";
        let result = select_relevant(corpus, "prayer");
        assert_eq!(result, "## First\nprayer\n\n## Second\nprayer");
    }

    #[test]
    fn deterministic_across_invocations() {
        let corpus = "## Prayer\nDaily practice.\n## Fasting\nDisciplines.\n## Sabbath\nRest.";
        let first = select_relevant(corpus, "prayer and rest");
        for _ in 0..10 {
            assert_eq!(select_relevant(corpus, "prayer and rest"), first);
        }
    }

    #[test]
    fn scores_are_stable_per_section() {
        let s = section("Prayer", "Daily prayer practice.");
        let tokens = tokenize("prayer");
        let first = score_section(&s, &tokens);
        for _ in 0..10 {
            assert_eq!(score_section(&s, &tokens), first);
        }
    }

    #[test]
    fn total_over_non_ascii_input() {
        let corpus = "## Éclairs\n☺ unicode body ☺\n## Other\ntext";
        // must not panic, must return something sensible
        let result = select_relevant(corpus, "日本語のクエリ");
        assert!(!result.is_empty());
    }
}
