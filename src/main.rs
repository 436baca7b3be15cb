//! netlook - network resource lookup API server.
//!
//! This is the HTTP server binary for the netlook library.

use anyhow::Result;
use clap::Parser;
use netlook::config::{
    Config, DEFAULT_BGPTOOLS_HOST, DEFAULT_DOH_URL, DEFAULT_PEERINGDB_URL, DEFAULT_RIPESTAT_URL,
    DEFAULT_UPSTREAM_TIMEOUT_MS,
};
use netlook::{api, Services};
use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;
use tracing_subscriber::EnvFilter;

/// Command-line arguments for the lookup server.
#[derive(Parser, Debug)]
#[clap(author, version, about = "Network resource lookup API: IP, prefix, and ASN enrichment", long_about = None)]
struct Args {
    /// Address to bind the HTTP server to
    #[clap(short, long, default_value = "0.0.0.0:8080")]
    bind: SocketAddr,

    /// Per-upstream-call timeout in milliseconds
    #[clap(long, default_value_t = DEFAULT_UPSTREAM_TIMEOUT_MS)]
    upstream_timeout_ms: u64,

    /// Routing lookup service host and port
    #[clap(long, default_value = DEFAULT_BGPTOOLS_HOST)]
    bgptools_host: String,

    /// RIPEStat data API base URL
    #[clap(long, default_value = DEFAULT_RIPESTAT_URL)]
    ripestat_url: String,

    /// PeeringDB API base URL
    #[clap(long, default_value = DEFAULT_PEERINGDB_URL)]
    peeringdb_url: String,

    /// DNS-over-HTTPS resolver base URL
    #[clap(long, default_value = DEFAULT_DOH_URL)]
    doh_url: String,
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("netlook=info,tower_http=info")),
        )
        .init();

    let config = Config {
        bgptools_host: args.bgptools_host,
        ripestat_url: args.ripestat_url,
        peeringdb_url: args.peeringdb_url,
        doh_url: args.doh_url,
        upstream_timeout: Duration::from_millis(args.upstream_timeout_ms),
    };

    let services = Arc::new(Services::new(&config)?);
    let app = api::router(services);

    let listener = tokio::net::TcpListener::bind(args.bind).await?;
    tracing::info!("listening on {}", listener.local_addr()?);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    Ok(())
}

/// Resolve when the process receives ctrl-c.
async fn shutdown_signal() {
    let _ = tokio::signal::ctrl_c().await;
}
