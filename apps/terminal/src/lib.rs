pub mod client;
pub mod config;
pub mod repl;

use std::sync::Arc;

use charades_core::{resolve_locale, QuestionController, QuoteGenerator};
use rand::rngs::StdRng;
use rand::SeedableRng;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use crate::client::{CompletionClient, Offline};
use crate::config::Config;
use crate::repl::Repl;

pub async fn run() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    // Logs go to stderr at `warn` by default so they stay out of the game.
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| "warn".into()),
        ))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let config = Config::from_env()?;
    let locale = resolve_locale(config.app_locale.as_deref(), &config.environment_locales);
    tracing::info!(locale = locale.as_str(), model = %config.model, "starting");

    let controller = QuestionController::new(build_generator(&config)?, locale);
    let mut rng = StdRng::from_entropy();
    let stdin = tokio::io::BufReader::new(tokio::io::stdin());

    Repl::new(stdin, std::io::stdout(), &controller, &mut rng)
        .run()
        .await
}

fn build_generator(config: &Config) -> anyhow::Result<Arc<dyn QuoteGenerator>> {
    match &config.api_key {
        Some(key) => Ok(Arc::new(CompletionClient::new(config, key.clone())?)),
        None => {
            tracing::info!("no API key configured, playing with built-in quotes");
            Ok(Arc::new(Offline))
        }
    }
}
