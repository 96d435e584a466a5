//! `graft onboard` — First-time setup.

use graft_config::AppConfig;

const STARTER_KNOWLEDGE: &str = concat!(
    "## About this file\n",
    "This is your knowledge base. Graft splits it into sections at `## ` headings\n",
    "and sends the sections relevant to each question along with the prompt.\n",
    "Replace these sections with your own notes.\n\n",
    "## Example topic\n",
    "Keep each section focused on one topic. The heading counts toward relevance\n",
    "scoring just like the body text.\n",
);

pub async fn run() -> Result<(), Box<dyn std::error::Error>> {
    let config_dir = AppConfig::config_dir();
    let config_path = config_dir.join("config.toml");

    println!("Graft — First-Time Setup");
    println!("========================\n");

    if !config_dir.exists() {
        std::fs::create_dir_all(&config_dir)?;
        println!("✅ Created config directory: {}", config_dir.display());
    } else {
        println!("  Config directory exists: {}", config_dir.display());
    }

    let knowledge_path = AppConfig::default().knowledge_file();
    if knowledge_path.exists() {
        println!("  Knowledge file exists: {}", knowledge_path.display());
    } else {
        std::fs::write(&knowledge_path, STARTER_KNOWLEDGE)?;
        println!("✅ Created starter knowledge file: {}", knowledge_path.display());
    }

    if config_path.exists() {
        println!("\n⚠️  Config already exists at: {}", config_path.display());
        println!("   Edit it manually or delete and re-run onboard.\n");
    } else {
        let default_toml = AppConfig::default_toml();
        std::fs::write(&config_path, &default_toml)?;
        println!("✅ Created config.toml at: {}", config_path.display());
        println!("\n📝 Next steps:");
        println!("   1. Set ANTHROPIC_API_KEY (or add api_key to config.toml)");
        println!("   2. Edit {} with your own notes", knowledge_path.display());
        println!("   3. Run: graft ask \"a question about your notes\"\n");
    }

    Ok(())
}
