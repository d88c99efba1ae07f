// Shared harness for tests that talk to a live API over loopback:
// - ephemeral ports so tests can run in parallel
// - no_proxy so localhost is never routed through an environment proxy
// - graceful shutdown so servers don't linger between tests
#![allow(dead_code)]

use anyhow::{Context, Result};
use axum::Router;
use client::{Api, ClientConfig};
use server::store::Store;
use tokio::{net::TcpListener, sync::oneshot, task::JoinHandle};

pub struct TestServer {
    pub api: Api,
    store: Option<Store>,
    shutdown: Option<oneshot::Sender<()>>,
    handle: Option<JoinHandle<()>>,
}

impl TestServer {
    /// Serves the dev API over a fresh, empty store
    pub async fn start() -> Result<Self> {
        let store = Store::default();
        Self::serve(server::app(store.clone()), Some(store)).await
    }

    /// Serves an arbitrary router, e.g. one that fails on purpose
    pub async fn with_router(router: Router) -> Result<Self> {
        Self::serve(router, None).await
    }

    /// The store behind the dev API; only servers from [`Self::start`] have one
    pub fn store(&self) -> &Store {
        self.store
            .as_ref()
            .expect("custom routers have no backing store")
    }

    async fn serve(router: Router, store: Option<Store>) -> Result<Self> {
        let listener = TcpListener::bind("127.0.0.1:0")
            .await
            .context("bind test listener")?;
        let addr = listener.local_addr().context("read listener address")?;

        let (shutdown_tx, shutdown_rx) = oneshot::channel::<()>();
        let handle = tokio::spawn(async move {
            let _ = axum::serve(listener, router)
                .with_graceful_shutdown(async move {
                    let _ = shutdown_rx.await;
                })
                .await;
        });

        let http = reqwest::Client::builder()
            .no_proxy()
            .build()
            .context("build test http client")?;
        let api = Api::with_client(http, &ClientConfig::new(format!("http://{addr}")));

        Ok(Self {
            api,
            store,
            shutdown: Some(shutdown_tx),
            handle: Some(handle),
        })
    }

    pub async fn stop(mut self) {
        if let Some(tx) = self.shutdown.take() {
            let _ = tx.send(());
        }
        if let Some(handle) = self.handle.take() {
            let _ = handle.await;
        }
    }
}

impl Drop for TestServer {
    fn drop(&mut self) {
        if let Some(tx) = self.shutdown.take() {
            let _ = tx.send(());
        }
    }
}
