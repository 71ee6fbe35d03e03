mod gateway;

use clap::{Parser, Subcommand};
use dobby_channels::telegram::TelegramChannel;
use dobby_core::{config, config::Config, store::ToneStore, traits::Provider};
use dobby_providers::openai::OpenAiProvider;
use std::sync::Arc;

#[derive(Parser)]
#[command(
    name = "dobby",
    version,
    about = "Dobby — Telegram bot drafting three tweet options per topic"
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Start the bot.
    Start,
    /// Check which configuration is present.
    Status,
    /// Draft options for a topic once, without Telegram.
    Draft {
        /// The topic to draft about.
        #[arg(trailing_var_arg = true)]
        topic: Vec<String>,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    let cli = Cli::parse();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    match cli.command {
        Commands::Start => {
            let cfg = Config::from_env()?;
            let provider = build_provider(&cfg);

            if !provider.is_available().await {
                anyhow::bail!("provider '{}' is not available", provider.name());
            }

            let channel = Arc::new(TelegramChannel::new(&cfg.telegram_token));
            let store = ToneStore::new(cfg.default_tone);

            println!("Dobby bot is running…");
            gateway::Gateway::new(provider, channel, store).run().await?;
        }
        Commands::Status => {
            println!("Dobby — Status Check\n");
            for key in [config::ENV_TG_TOKEN, config::ENV_OPENAI_API_KEY] {
                let state = if env_is_set(key) { "set" } else { "MISSING" };
                println!("  {key}: {state}");
            }
            println!(
                "  model: {}",
                std::env::var(config::ENV_OPENAI_MODEL)
                    .unwrap_or_else(|_| format!("{} (default)", config::DEFAULT_MODEL))
            );
            println!(
                "  default tone: {}",
                std::env::var(config::ENV_DEFAULT_TONE)
                    .unwrap_or_else(|_| "explanatory (default)".to_string())
            );
        }
        Commands::Draft { topic } => {
            if topic.is_empty() {
                anyhow::bail!("no topic provided. Usage: dobby draft <topic>");
            }
            let topic = topic.join(" ");

            let cfg = Config::from_env()?;
            let provider = build_provider(&cfg);

            let options = gateway::generate(provider.as_ref(), topic.trim(), cfg.default_tone)
                .await?;
            println!("{}", options.join("\n\n"));
        }
    }

    Ok(())
}

/// Build the completion provider from config.
fn build_provider(cfg: &Config) -> Arc<dyn Provider> {
    Arc::new(OpenAiProvider::from_config(
        cfg.openai_base_url.clone(),
        cfg.openai_api_key.clone(),
        cfg.model.clone(),
    ))
}

fn env_is_set(key: &str) -> bool {
    std::env::var(key)
        .map(|v| !v.trim().is_empty())
        .unwrap_or(false)
}
