//! Wiring & DI. Entry point: load config, pick a generation backend, build the router, run UI.
//! No business logic here; routing lives in ResponseRouter.

use care_chat::adapters::ai::{MockGenerator, OpenAiGenerator, UnavailableGenerator};
use care_chat::adapters::ui::tui::TuiChat;
use care_chat::ports::{InputPort, TextGenerator};
use care_chat::shared::{AppConfig, GenBackend};
use care_chat::usecases::{FallbackResponder, ResponseRouter};
use dotenv::dotenv;
use std::path::PathBuf;
use std::sync::Arc;
use tracing::{info, warn};
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cwd = std::env::current_dir().unwrap_or_else(|_| PathBuf::from("."));
    let env_loaded = dotenv();
    // Logs go to stderr at warn by default so they do not interleave with the chat.
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| "warn".into()))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    match &env_loaded {
        Ok(path) => info!(path = %path.display(), "loaded .env"),
        Err(_) => info!(cwd = %cwd.display(), "no .env found (check CWD)"),
    }

    let cfg = AppConfig::load().map_err(|e| anyhow::anyhow!("invalid configuration: {}", e))?;

    // --- Generation backend: initialized once; failure is remembered, not retried ---
    let generator = build_generator(&cfg);

    // --- Router ---
    let limits = cfg.generation_limits();
    let match_mode = cfg
        .match_mode_or_default()
        .map_err(|e| anyhow::anyhow!("{}", e))?;
    info!(
        max_input_tokens = limits.max_input_tokens,
        max_output_tokens = limits.max_output_tokens,
        ?match_mode,
        "router configured"
    );
    let fallback = FallbackResponder::new(generator, limits);
    let router = Arc::new(
        ResponseRouter::new(fallback, match_mode)
            .map_err(|e| anyhow::anyhow!("router init failed: {}", e))?,
    );

    care_chat::adapters::ui::init_ui();

    let input_port: Arc<dyn InputPort> = Arc::new(TuiChat::new(router));
    input_port
        .run()
        .await
        .map_err(|e| anyhow::anyhow!("{}", e))?;

    Ok(())
}

/// Select and initialize the generation adapter. Never fails: an adapter that
/// cannot start is replaced by `UnavailableGenerator`.
fn build_generator(cfg: &AppConfig) -> Arc<dyn TextGenerator> {
    match cfg.gen_backend_or_default() {
        GenBackend::OpenAi => match OpenAiGenerator::connect(
            &cfg.gen_api_url_or_default(),
            cfg.gen_api_key_or_default(),
            cfg.gen_model_or_default(),
            cfg.gen_timeout(),
        ) {
            Ok(adapter) => {
                info!(
                    model = %cfg.gen_model_or_default(),
                    url = %cfg.gen_api_url_or_default(),
                    "generation enabled with OpenAI-compatible adapter"
                );
                Arc::new(adapter)
            }
            Err(e) => {
                let unavailable = UnavailableGenerator::new(e.to_string());
                warn!(
                    reason = unavailable.reason(),
                    "generation backend failed to initialize; fallback replies will apologize"
                );
                Arc::new(unavailable)
            }
        },
        GenBackend::Mock => {
            warn!("CARE_CHAT_GEN_BACKEND=mock: fallback replies are canned [MOCK] text");
            Arc::new(MockGenerator::new())
        }
    }
}
