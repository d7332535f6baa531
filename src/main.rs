//! cryptgate server binary.

use std::sync::Arc;

use tokio::signal;
use tracing::info;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use cryptgate::adapters::http::{self, HandoffHandlers, SessionCookieConfig};
use cryptgate::adapters::{
    InMemorySessionStore, OsRngTokenGenerator, RedisSessionStore, ScriptProcessor, SystemClock,
};
use cryptgate::application::{ProcessingDispatcher, TokenLifecycle};
use cryptgate::config::{AppConfig, SessionBackend};
use cryptgate::ports::SessionStore;

#[tokio::main]
async fn main() {
    let config = match AppConfig::load() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("FATAL: Failed to load configuration: {e}");
            std::process::exit(1);
        }
    };

    init_logging(&config);

    if let Err(e) = config.validate() {
        tracing::error!("Invalid configuration: {e}");
        std::process::exit(1);
    }

    let store: Arc<dyn SessionStore> = match config.session.backend {
        SessionBackend::Memory => {
            info!("Using in-memory session store");
            Arc::new(InMemorySessionStore::with_ttl(config.session.ttl()))
        }
        SessionBackend::Redis => {
            match RedisSessionStore::connect(
                &config.redis.url,
                config.redis.timeout(),
                config.session.ttl(),
            )
            .await
            {
                Ok(store) => {
                    info!("Connected to Redis session store");
                    Arc::new(store)
                }
                Err(e) => {
                    tracing::error!("Failed to connect to Redis: {e}");
                    std::process::exit(1);
                }
            }
        }
    };

    let dispatcher = if config.processor.enabled {
        info!(
            program = %config.processor.program,
            script = %config.processor.script.display(),
            "Processor enabled"
        );
        ProcessingDispatcher::new(Arc::new(ScriptProcessor::new(
            config.processor.program.clone(),
            config.processor.script.clone(),
        )))
    } else {
        info!("Processor disabled, accepted jobs are only logged");
        ProcessingDispatcher::disabled()
    };

    let lifecycle = TokenLifecycle::new(
        store.clone(),
        Arc::new(OsRngTokenGenerator::new(config.handoff.token_bytes)),
        Arc::new(SystemClock),
        dispatcher,
    )
    .with_windows(config.handoff.windows())
    .with_expiry_policy(config.handoff.expiry_policy);

    let cookie = SessionCookieConfig::new(
        config.session.cookie_name.clone(),
        config.session.cookie_secure,
        config.session.ttl_secs,
    );
    let app = http::router(
        HandoffHandlers::new(Arc::new(lifecycle)),
        store,
        cookie,
        &config.server,
    );

    let addr = match config.server.socket_addr() {
        Ok(addr) => addr,
        Err(e) => {
            tracing::error!("{e}");
            std::process::exit(1);
        }
    };

    let listener = match tokio::net::TcpListener::bind(addr).await {
        Ok(l) => l,
        Err(e) => {
            tracing::error!("Failed to bind to address {addr}: {e}");
            std::process::exit(1);
        }
    };

    info!(%addr, "Server listening");

    if let Err(e) = axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
    {
        tracing::error!("Server error: {e}");
        std::process::exit(1);
    }

    info!("Server shutdown complete");
}

/// JSON logs in production, human-readable otherwise.
///
/// `RUST_LOG` overrides `server.log_level` when set.
fn init_logging(config: &AppConfig) {
    let filter = match EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(&config.server.log_level))
    {
        Ok(f) => f,
        Err(e) => {
            eprintln!("FATAL: Failed to create log filter: {e}");
            std::process::exit(1);
        }
    };

    let registry = tracing_subscriber::registry().with(filter);
    if config.is_production() {
        registry
            .with(fmt::layer().json().with_target(true).flatten_event(true))
            .init();
    } else {
        registry.with(fmt::layer().with_target(true)).init();
    }

    info!(filter = %config.server.log_level, "Logging initialized");
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = signal::ctrl_c().await {
            tracing::error!("Failed to install Ctrl+C handler: {e}");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut sig) => {
                sig.recv().await;
            }
            Err(e) => {
                tracing::error!("Failed to install SIGTERM handler: {e}");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => info!("Received Ctrl+C, initiating graceful shutdown"),
        _ = terminate => info!("Received SIGTERM, initiating graceful shutdown"),
    }
}
