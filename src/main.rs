use std::sync::Arc;

use anyhow::Context;
use clap::Parser;
use tokio::net::TcpListener;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use newswire::article::store::ArticleStore;
use newswire::http::{router, AppState};
use newswire::newsapi::{client::NewsApiClient, config::NewsConfig};
use newswire::summarize::SummarizerClient;

#[derive(Parser)]
#[command(name = "newswire")]
#[command(about = "News headline browsing service")]
#[command(version = env!("CARGO_PKG_VERSION"))]
struct Args {
    #[arg(short, long, default_value = "3000")]
    port: u16,

    #[arg(long, default_value = "127.0.0.1")]
    host: String,

    /// Default country for headline listings
    #[arg(long, default_value = "us")]
    country: String,

    /// Articles per listing page
    #[arg(long, default_value = "12")]
    page_size: u32,

    #[arg(long, default_value = "false")]
    debug: bool,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    let filter_level = if args.debug { "debug" } else { "info" };
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| format!("newswire={filter_level},tower_http=info").into()),
        )
        .with(tracing_subscriber::fmt::layer().with_target(false))
        .init();

    dotenvy::dotenv().ok();

    let config =
        NewsConfig::from_env().context("Failed to load news source configuration")?;

    let state = AppState {
        store: Arc::new(ArticleStore::new()),
        news: Arc::new(NewsApiClient::new(config)),
        summarizer: Arc::new(SummarizerClient::from_env()),
        default_country: args.country,
        page_size: args.page_size,
    };

    let app = router(state);

    let bind_addr = format!("{}:{}", args.host, args.port);
    let listener = TcpListener::bind(&bind_addr)
        .await
        .with_context(|| format!("failed to bind to {bind_addr}"))?;

    info!("Newswire server started on {}", bind_addr);
    info!("");
    info!("Usage:");
    info!("   curl http://{}/?country=us", bind_addr);
    info!("   curl http://{}/category/technology", bind_addr);
    info!("   curl 'http://{}/search?q=climate'", bind_addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("server error")?;

    Ok(())
}

async fn shutdown_signal() {
    use tokio::signal;

    let ctrl_c = async {
        signal::ctrl_c()
            .await
            .expect("Failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        signal::unix::signal(signal::unix::SignalKind::terminate())
            .expect("Failed to install signal handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            info!("Received Ctrl+C signal");
        },
        _ = terminate => {
            info!("Received terminate signal");
        },
    }
}
