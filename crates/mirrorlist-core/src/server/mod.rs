//! Mirror-list HTTP server.
//!
//! Serves `GET /api/mirrorlist/{version}/json` from the configured data file,
//! the release page at `/`, and a static asset tree. HTTP/1.1 via hyper, one
//! task per connection.

mod files;
mod routes;

use crate::config::ServerConfig;
use anyhow::{Context, Result};
use hyper::body::Incoming;
use hyper::server::conn::http1;
use hyper::service::service_fn;
use hyper::Request;
use hyper_util::rt::TokioIo;
use std::convert::Infallible;
use std::future::Future;
use std::net::SocketAddr;
use std::sync::Arc;
use tokio::net::TcpListener;

/// Read-only state shared by all connections.
#[derive(Debug)]
pub(crate) struct ServerState {
    pub(crate) config: ServerConfig,
}

pub struct MirrorlistServer {
    listener: TcpListener,
    state: Arc<ServerState>,
}

impl MirrorlistServer {
    /// Binds `config.bind`. Port 0 picks an ephemeral port; see [`local_addr`](Self::local_addr).
    pub async fn bind(config: ServerConfig) -> Result<Self> {
        let listener = TcpListener::bind(config.bind)
            .await
            .with_context(|| format!("bind {}", config.bind))?;
        Ok(Self {
            listener,
            state: Arc::new(ServerState { config }),
        })
    }

    pub fn local_addr(&self) -> Result<SocketAddr> {
        Ok(self.listener.local_addr()?)
    }

    /// Accepts connections until the process exits.
    pub async fn run(self) -> Result<()> {
        self.run_until(std::future::pending()).await
    }

    /// Accepts connections until `shutdown` resolves. In-flight connections finish on their own.
    pub async fn run_until<F>(self, shutdown: F) -> Result<()>
    where
        F: Future<Output = ()>,
    {
        let addr = self.local_addr()?;
        tracing::info!(
            %addr,
            data_file = %self.state.config.data_file.display(),
            "mirrorlist server listening"
        );
        tokio::pin!(shutdown);

        loop {
            let (stream, peer) = tokio::select! {
                accepted = self.listener.accept() => match accepted {
                    Ok(conn) => conn,
                    Err(e) => {
                        tracing::warn!(error = %e, "accept failed");
                        continue;
                    }
                },
                _ = &mut shutdown => {
                    tracing::info!("mirrorlist server shutting down");
                    return Ok(());
                }
            };

            let io = TokioIo::new(stream);
            let state = Arc::clone(&self.state);
            tokio::spawn(async move {
                let service = service_fn(move |req: Request<Incoming>| {
                    let state = Arc::clone(&state);
                    async move {
                        let method = req.method().clone();
                        let path = req.uri().path().to_string();
                        let res = routes::route(&state, req).await;
                        tracing::info!(
                            %peer,
                            %method,
                            %path,
                            status = res.status().as_u16(),
                            "request"
                        );
                        Ok::<_, Infallible>(res)
                    }
                });
                if let Err(err) = http1::Builder::new().serve_connection(io, service).await {
                    tracing::warn!(%peer, error = %err, "error serving connection");
                }
            });
        }
    }
}
