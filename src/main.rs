use std::sync::Arc;

use anyhow::Context;
use clap::Parser;
use tokio::net::TcpListener;

use channel_finder::api::create_router;
use channel_finder::config::CONFIG;
use channel_finder::youtube::YouTubeClient;

#[derive(Parser, Debug)]
#[command(version, about = "Ranked YouTube channel search over HTTP")]
struct Args {
    /// Address to listen on, overrides LISTEN_ADDR
    #[arg(long)]
    listen: Option<String>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    tracing_subscriber::fmt()
        .with_max_level(CONFIG.log_level)
        .with_target(true)
        .init();

    let client = YouTubeClient::from_config(&CONFIG)?;
    tracing::info!(
        upstream = client.base_url(),
        timeout = ?CONFIG.upstream_timeout,
        "upstream client ready"
    );
    let app = create_router(Arc::new(client));

    let listen_addr = args.listen.unwrap_or_else(|| CONFIG.listen_addr.clone());
    let listener = TcpListener::bind(&listen_addr)
        .await
        .with_context(|| format!("Failed to bind {listen_addr}"))?;
    tracing::info!("listening on http://{}", listener.local_addr()?);

    axum::serve(listener, app)
        .with_graceful_shutdown(async {
            let _ = tokio::signal::ctrl_c().await;
            tracing::info!("shutting down");
        })
        .await
        .context("HTTP server error")?;

    Ok(())
}
