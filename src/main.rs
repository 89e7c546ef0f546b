use flickpick::{config::Config, tui};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = Config::from_env()?;
    init_tracing(&config)?;

    tracing::info!(base_url = %config.api_base_url, "Starting flickpick");

    tui::run(config).await
}

/// Logs go to a file: the terminal itself belongs to the UI
fn init_tracing(config: &Config) -> anyhow::Result<()> {
    let log_file = std::fs::File::create(&config.log_file)?;

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .with_writer(std::sync::Mutex::new(log_file))
        .with_ansi(false)
        .init();

    Ok(())
}
