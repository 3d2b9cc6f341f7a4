use crate::config::ServiceConfig;
use crate::error::AppError;
use crate::handlers;
use crate::services::{GoalStore, MongoDb};
use axum::{
    http::{header, Method},
    routing::{delete, get, post},
    Router,
};
use std::future::IntoFuture;
use std::net::SocketAddr;
use std::sync::Arc;
use tokio::net::TcpListener;
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};

#[derive(Clone)]
pub struct AppState {
    pub store: Arc<dyn GoalStore>,
}

pub struct Application {
    port: u16,
    server: Box<dyn std::future::Future<Output = std::io::Result<()>> + Send + Unpin>,
}

impl Application {
    /// Connect to MongoDB and bind the HTTP listener. The listener is only
    /// bound once the store has answered a ping, so a dead database keeps the
    /// service from ever serving.
    pub async fn build(config: &ServiceConfig) -> Result<Self, AppError> {
        let db = MongoDb::connect(&config.mongodb).await.map_err(|e| {
            tracing::error!("Failed to connect to MongoDB: {}", e);
            e
        })?;

        Self::with_store(config.port, Arc::new(db)).await
    }

    /// Build the application around an already-constructed store. Port 0
    /// requests an ephemeral port; `port()` reports the bound one.
    pub async fn with_store(port: u16, store: Arc<dyn GoalStore>) -> Result<Self, AppError> {
        let state = AppState { store };

        let cors = CorsLayer::new()
            .allow_origin(Any)
            .allow_methods([Method::GET, Method::POST, Method::DELETE, Method::OPTIONS])
            .allow_headers([header::CONTENT_TYPE]);

        let app = Router::new()
            .route("/", get(handlers::health_check))
            .route("/goals", get(handlers::list_goals))
            .route("/goals", post(handlers::create_goal))
            .route("/goals/:id", delete(handlers::delete_goal))
            .layer(TraceLayer::new_for_http())
            .layer(cors)
            .with_state(state);

        let addr = SocketAddr::from(([0, 0, 0, 0], port));
        let listener = TcpListener::bind(addr).await.map_err(|e| {
            tracing::error!("Failed to bind TCP listener to {}: {}", addr, e);
            AppError::from(e)
        })?;
        let port = listener.local_addr()?.port();

        tracing::info!("Listening on {}", port);

        let server = axum::serve(listener, app);

        Ok(Self {
            port,
            server: Box::new(server.into_future()),
        })
    }

    pub fn port(&self) -> u16 {
        self.port
    }

    pub async fn run_until_stopped(self) -> std::io::Result<()> {
        self.server.await
    }
}
