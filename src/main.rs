// Hoopcast entry point.
//
// Startup sequence:
// 1. Initialize tracing
// 2. Load config (and the API key override from the environment)
// 3. Build the chat client
// 4. Bind the HTTP listener and serve

use hoopcast::config;
use hoopcast::llm::ChatClient;
use hoopcast::server::{build_router, AppState};

use anyhow::Context;
use tracing::info;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    init_tracing()?;
    info!("Hoopcast starting up");

    let config = config::load_config().context("failed to load configuration")?;
    info!(
        "Config loaded: stats store {}, model {}, games threshold {}",
        config.data.stats_csv, config.data.model, config.data.games_threshold
    );

    let chat = ChatClient::from_config(&config);
    if chat.is_active() {
        info!("Chat client initialized (API key configured)");
    } else {
        info!("Chat client disabled (no API key); answers fall back to data snippets");
    }

    let addr = format!("{}:{}", config.server.host, config.server.port);
    let state = AppState::new(config, chat);
    let app = build_router(state);

    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .with_context(|| format!("failed to bind {addr}"))?;
    info!("Hoopcast listening on http://{addr}");

    axum::serve(listener, app)
        .await
        .context("server error")?;

    Ok(())
}

/// Initialize tracing to stderr with an env-filter override.
fn init_tracing() -> anyhow::Result<()> {
    use tracing_subscriber::fmt;
    use tracing_subscriber::EnvFilter;

    let subscriber = fmt::Subscriber::builder()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("hoopcast=info,warn")),
        )
        .with_writer(std::io::stderr)
        .with_target(true)
        .finish();

    tracing::subscriber::set_global_default(subscriber)
        .context("failed to set tracing subscriber")?;

    Ok(())
}
