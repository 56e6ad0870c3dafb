use reddit_feed::FeedClient;
use redview_core::{assemble, Config, ConfigError, CoreError, ErrorExt};
use serde::Deserialize;
use std::path::Path;
use tokio::time::{interval, Duration, MissedTickBehavior};

/// Host-level settings wrapped around the per-cycle widget config.
#[derive(Debug, Deserialize)]
struct HostConfig {
    #[serde(default = "default_refresh_interval_secs")]
    refresh_interval_secs: u64,
    #[serde(default = "default_user_agent")]
    user_agent: String,
    widget: Config,
}

fn default_refresh_interval_secs() -> u64 {
    300
}

fn default_user_agent() -> String {
    "redview/0.1 (dashboard feed helper)".to_string()
}

#[tokio::main]
async fn main() -> Result<(), CoreError> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "redview=info,reddit_feed=info".into()),
        )
        .with_writer(std::io::stderr)
        .init();

    tracing::info!("Starting Redview - dashboard feed helper");

    let config_path = std::env::args().nth(1).unwrap_or_else(|| "redview.toml".to_string());
    let host_config = load_config(&config_path)?;
    let client = FeedClient::new(host_config.user_agent.clone())?;

    // Cycles are serialized by a single timer; a cycle runs to completion
    // before the next tick is honored.
    let mut timer = interval(Duration::from_secs(host_config.refresh_interval_secs.max(1)));
    timer.set_missed_tick_behavior(MissedTickBehavior::Delay);

    loop {
        timer.tick().await;
        run_cycle(&client, &host_config.widget).await;
        if host_config.refresh_interval_secs == 0 {
            break;
        }
    }
    Ok(())
}

fn load_config(path: &str) -> Result<HostConfig, CoreError> {
    if !Path::new(path).exists() {
        return Err(ConfigError::FileNotFound {
            path: path.to_string(),
        }
        .into());
    }
    let raw = std::fs::read_to_string(path)?;
    let host_config: HostConfig = toml::from_str(&raw).map_err(ConfigError::Parse)?;
    Ok(host_config)
}

/// One fetch cycle: fetch a page, assemble it, emit the result on stdout.
/// Failures are reported to the consumer as a structured message and the
/// process lives on to try again on the next tick.
async fn run_cycle(client: &FeedClient, config: &Config) {
    match fetch_and_assemble(client, config).await {
        Ok(json) => println!("{}", json),
        Err(e) => {
            e.log_error();
            let report = serde_json::json!({ "error": e.user_friendly_message() });
            println!("{}", report);
        }
    }
}

async fn fetch_and_assemble(client: &FeedClient, config: &Config) -> Result<String, CoreError> {
    let posts = client.fetch_posts(config).await?;
    let output = assemble(posts, config)?;
    let json = serde_json::to_string(&output)?;
    Ok(json)
}
