//! `graft ask` — One-shot question, grounded in the knowledge base.

use graft_config::AppConfig;
use graft_core::message::Message;
use graft_core::provider::{ChatRequest, Provider};
use graft_gateway::prompt;
use graft_providers::AnthropicClient;
use graft_retrieval::Corpus;

pub async fn run(message: String) -> Result<(), Box<dyn std::error::Error>> {
    let config = AppConfig::load().map_err(|e| format!("Failed to load config: {e}"))?;

    // Check for API key early — give a clear error
    let Some(api_key) = config.api_key.clone() else {
        eprintln!();
        eprintln!("  ERROR: No API key configured!");
        eprintln!();
        eprintln!("  Set one of these environment variables:");
        eprintln!("    ANTHROPIC_API_KEY = 'sk-ant-...'");
        eprintln!("    GRAFT_API_KEY     = 'sk-ant-...'");
        eprintln!();
        eprintln!("  Or add it to your config file:");
        eprintln!("    {}", AppConfig::config_dir().join("config.toml").display());
        eprintln!();
        return Err("No API key found. See above for setup instructions.".into());
    };

    let corpus = Corpus::load(&config.knowledge_file());
    let knowledge = corpus.select(&message);

    let base = config
        .system_prompt
        .as_deref()
        .unwrap_or(prompt::DEFAULT_SYSTEM_PROMPT);
    let system = prompt::build_system_prompt(base, &knowledge);

    let client = AnthropicClient::new(api_key);
    let request = ChatRequest {
        model: config.model.clone(),
        messages: vec![Message::system(system), Message::user(&message)],
        temperature: config.temperature,
        max_tokens: Some(config.max_tokens),
    };

    eprint!("  Thinking...");
    let reply = client.complete(request).await?;
    eprint!("\r              \r");
    println!("{}", reply.reply);

    if let Some(usage) = reply.usage {
        tracing::debug!(
            model = %reply.model,
            input_tokens = usage.input_tokens,
            output_tokens = usage.output_tokens,
            "completion usage"
        );
    }

    Ok(())
}
