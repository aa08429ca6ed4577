//! HTTP server bootstrap.
//!
//! [`Server::bind`] claims the listen socket up front so a bad address fails
//! startup before any request is accepted; [`Server::serve`] then runs the
//! router until the shutdown future resolves.

use std::future::Future;
use std::net::SocketAddr;

use anyhow::Context;
use axum::Router;
use tokio::net::TcpListener;
use tokio::signal;

use crate::config::ServerConfig;

// =============================================================================
// Server
// =============================================================================

#[derive(Debug)]
pub struct Server {
    listener: TcpListener,
    address: SocketAddr,
}

impl Server {
    /// Binds the listen socket described by `config`.
    ///
    /// # Errors
    ///
    /// Fails when the address does not resolve or is already in use.
    pub async fn bind(config: &ServerConfig) -> anyhow::Result<Self> {
        let requested = config.socket_addr();

        let listener = TcpListener::bind(&requested)
            .await
            .with_context(|| format!("Failed to bind {requested}"))?;
        let address = listener.local_addr()?;

        tracing::info!(%requested, %address, "Server listening");

        Ok(Self { listener, address })
    }

    /// The address actually bound; differs from the configured one when the
    /// configured port is `0`.
    #[must_use]
    pub const fn local_addr(&self) -> SocketAddr {
        self.address
    }

    /// Serves `router` until `shutdown` resolves, then drains open
    /// connections.
    ///
    /// # Errors
    ///
    /// Propagates I/O errors from the accept loop.
    pub async fn serve(
        self,
        router: Router,
        shutdown: impl Future<Output = ()> + Send + 'static,
    ) -> anyhow::Result<()> {
        axum::serve(self.listener, router)
            .with_graceful_shutdown(shutdown)
            .await?;

        tracing::info!(address = %self.address, "Server shutdown complete");

        Ok(())
    }
}

// =============================================================================
// Shutdown Signal
// =============================================================================

/// Resolves on Ctrl+C or, on unix, SIGTERM.
pub async fn shutdown_signal() {
    let ctrl_c = async {
        signal::ctrl_c()
            .await
            .expect("Failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        signal::unix::signal(signal::unix::SignalKind::terminate())
            .expect("Failed to install SIGTERM handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => tracing::info!("Received Ctrl+C, initiating graceful shutdown"),
        () = terminate => tracing::info!("Received SIGTERM, initiating graceful shutdown"),
    }
}

// =============================================================================
// Tests
// =============================================================================
