//! HTTP front-end: an axum router over the shared store handle.

pub mod handlers;
pub mod response;

use crate::db::pool::DbPool;
use crate::errors::{AppError, AppResult};
use crate::models::time_log::DEFAULT_USER_ID;
use axum::Router;
use axum::routing::get;
use std::sync::{Arc, Mutex};
use tokio::net::TcpListener;
use tower_http::catch_panic::CatchPanicLayer;
use tower_http::trace::TraceLayer;
use tracing::{error, info, warn};

/// State shared by every handler: the store handle and the owning user.
#[derive(Clone)]
pub struct AppState {
    pool: Arc<Mutex<DbPool>>,
    user_id: i64,
}

impl AppState {
    pub fn new(pool: DbPool) -> Self {
        Self {
            pool: Arc::new(Mutex::new(pool)),
            user_id: DEFAULT_USER_ID,
        }
    }

    /// Run `func` against the store on tokio's blocking pool.
    /// The mutex serializes store access across requests.
    pub async fn with_store<F, T>(&self, func: F) -> AppResult<T>
    where
        F: FnOnce(&mut DbPool, i64) -> AppResult<T> + Send + 'static,
        T: Send + 'static,
    {
        let pool = Arc::clone(&self.pool);
        let user_id = self.user_id;

        tokio::task::spawn_blocking(move || {
            let mut guard = pool
                .lock()
                .map_err(|_| AppError::Other("store handle poisoned".to_string()))?;
            func(&mut guard, user_id)
        })
        .await
        .map_err(|e| AppError::Server(format!("store task failed: {e}")))?
    }

    /// Take the store back; fails while another clone of the state is alive.
    pub fn into_pool(self) -> AppResult<DbPool> {
        let mutex = Arc::try_unwrap(self.pool)
            .map_err(|_| AppError::Server("store handle still in use".to_string()))?;
        mutex
            .into_inner()
            .map_err(|_| AppError::Other("store handle poisoned".to_string()))
    }
}

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(handlers::health))
        .route(
            "/api/time-logs",
            get(handlers::get_time_logs).post(handlers::save_time_logs),
        )
        .fallback(handlers::not_found)
        .layer(CatchPanicLayer::custom(response::panic_response))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Serve until Ctrl-C, then close the store.
/// The schema must already be initialized on `pool`.
pub async fn serve(pool: DbPool, addr: &str) -> AppResult<()> {
    let state = AppState::new(pool);
    let app = router(state.clone());

    let listener = TcpListener::bind(addr)
        .await
        .map_err(|e| AppError::Server(format!("cannot bind {addr}: {e}")))?;
    info!("Listening on http://{}", listener.local_addr()?);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("server stopped, closing store");
    match state.into_pool() {
        Ok(pool) => pool.close(),
        Err(e) => {
            warn!(error = %e, "store not closed explicitly");
            Ok(())
        }
    }
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        error!(error = %e, "failed to listen for shutdown signal");
        std::future::pending::<()>().await;
    }
    info!("shutdown signal received");
}
