//! `graft sections` — Score every knowledge section against a query.
//!
//! Shows exactly what the gateway would select for a given question:
//! per-section scores in rank order, with selected sections marked.

use graft_config::AppConfig;
use graft_retrieval::{Corpus, rank_sections, segment, threshold_selection, tokenize};

pub async fn run(query: String) -> Result<(), Box<dyn std::error::Error>> {
    let config = AppConfig::load().map_err(|e| format!("Failed to load config: {e}"))?;
    let corpus = Corpus::load(&config.knowledge_file());

    if corpus.is_empty() {
        println!(
            "Knowledge file is empty or missing: {}",
            config.knowledge_file().display()
        );
        return Ok(());
    }

    let sections = segment(corpus.as_str());
    if sections.is_empty() {
        println!("No `## ` headings found — the whole corpus is sent for every query.");
        return Ok(());
    }

    let query_tokens = tokenize(&query);
    if query_tokens.is_empty() {
        println!("Query has no content words — every section would be sent.");
        return Ok(());
    }

    let scored = rank_sections(&sections, &query_tokens);
    let selected = threshold_selection(&scored).len();

    println!("Query tokens: {}", query_tokens.join(", "));
    println!();
    for (i, s) in scored.iter().enumerate() {
        let marker = if i < selected { "→" } else { " " };
        println!("  {marker} [{:.2}] {}", s.score, s.section.heading);
    }
    println!();
    println!("{selected}/{} sections would be selected", scored.len());

    Ok(())
}
