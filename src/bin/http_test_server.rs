//! Single-route HTTP server used by integration tests.
//!
//! Serves `GET /hello` with a fixed plaintext body until interrupted.

use std::net::{IpAddr, SocketAddr};

use anyhow::Context;
use clap::Parser;
use prereqs::http_stub::{serve, shutdown_on, DEFAULT_PORT};
use tokio::net::TcpListener;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Minimal HTTP server answering GET /hello.
#[derive(Debug, Parser)]
#[command(name = "http-test-server", version, about)]
struct Args {
    /// Port to listen on
    #[arg(long, env = "HTTP_TEST_SERVER_PORT", default_value_t = DEFAULT_PORT)]
    port: u16,

    /// Address to bind
    #[arg(long, default_value = "0.0.0.0")]
    bind: IpAddr,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    tracing_subscriber::registry()
        .with(fmt::layer().with_target(false))
        .with(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("http_test_server=info,prereqs=info")),
        )
        .init();

    let addr = SocketAddr::new(args.bind, args.port);
    let listener = TcpListener::bind(addr)
        .await
        .with_context(|| format!("bind {addr}"))?;

    tracing::info!("Started httpserver on port {}", listener.local_addr()?.port());

    serve(listener, shutdown_on(tokio::signal::ctrl_c()))
        .await
        .context("serve")?;

    Ok(())
}

