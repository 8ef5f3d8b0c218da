//! Application Startup
//!
//! Application building and server initialization.

use std::net::SocketAddr;
use std::sync::Arc;

use anyhow::{Context, Result};
use axum::Router;
use tokio::net::TcpListener;
use tokio::task::JoinHandle;

use crate::application::services::{ChatRoom, PresenceSweeper};
use crate::config::{Settings, StoreBackend};
use crate::domain::{MessageRepository, ParticipantRepository};
use crate::infrastructure::database;
use crate::infrastructure::repositories::{
    InMemoryMessageRepository, InMemoryParticipantRepository, PgMessageRepository,
    PgParticipantRepository,
};
use crate::presentation::http::handlers::health;
use crate::presentation::http::routes;
use crate::presentation::middleware::{cors, logging};
use crate::shared::clock::SystemClock;

/// Application state shared across handlers
#[derive(Clone)]
pub struct AppState {
    pub room: Arc<ChatRoom>,
    pub settings: Arc<Settings>,
}

impl AppState {
    pub fn new(room: Arc<ChatRoom>, settings: Settings) -> Self {
        Self {
            room,
            settings: Arc::new(settings),
        }
    }
}

/// Application instance
pub struct Application {
    listener: TcpListener,
    router: Router,
    sweeper: JoinHandle<()>,
}

impl Application {
    /// Build the application from settings
    pub async fn build(settings: Settings) -> Result<Self> {
        health::init_server_start();

        let (participant_repo, message_repo) = create_repositories(&settings).await?;

        let room = ChatRoom::load(participant_repo, message_repo, Arc::new(SystemClock))
            .await
            .context("Failed to load room state from store")?;
        let room = Arc::new(room);

        // Start presence sweeper
        let sweeper = PresenceSweeper::new(room.clone(), &settings.presence).spawn();

        let state = AppState::new(room, settings.clone());

        // Build router with middleware
        let router = routes::create_router(state)
            .layer(logging::create_trace_layer())
            .layer(cors::create_cors_layer(&settings.cors));

        // Bind to address
        let addr: SocketAddr = settings
            .server_addr()
            .parse()
            .with_context(|| format!("Invalid server address {}", settings.server_addr()))?;
        let listener = TcpListener::bind(addr).await?;
        tracing::info!("Listening on {}", addr);

        Ok(Self {
            listener,
            router,
            sweeper,
        })
    }

    /// Run the server until a shutdown signal arrives
    pub async fn run_until_stopped(self) -> Result<()> {
        axum::serve(self.listener, self.router)
            .with_graceful_shutdown(shutdown_signal())
            .await?;

        self.sweeper.abort();
        tracing::info!("Server stopped");
        Ok(())
    }

    /// Get the bound address
    pub fn local_addr(&self) -> std::io::Result<SocketAddr> {
        self.listener.local_addr()
    }
}

/// Select the persistence collaborator configured in `store.backend`
async fn create_repositories(
    settings: &Settings,
) -> Result<(Arc<dyn ParticipantRepository>, Arc<dyn MessageRepository>)> {
    match settings.store.backend {
        StoreBackend::Memory => {
            tracing::info!("Using in-memory store");
            Ok((
                Arc::new(InMemoryParticipantRepository::new()),
                Arc::new(InMemoryMessageRepository::new()),
            ))
        }
        StoreBackend::Postgres => {
            let pool = database::create_pool(&settings.database).await?;
            tracing::info!("Database connection pool created");

            database::run_migrations(&pool).await?;
            tracing::info!("Database migrations applied");

            Ok((
                Arc::new(PgParticipantRepository::new(pool.clone())),
                Arc::new(PgMessageRepository::new(pool)),
            ))
        }
    }
}

/// Resolve on Ctrl-C or SIGTERM
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!("Failed to listen for Ctrl-C: {}", e);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(e) => {
                tracing::error!("Failed to listen for SIGTERM: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    tracing::info!("Shutdown signal received");
}
