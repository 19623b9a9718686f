use std::net::SocketAddr;
use std::sync::Arc;

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use shopscripts_api::app::build_app;
use shopscripts_api::config::ServerConfig;
use shopscripts_api::graphql::{build_read_only_schema, build_schema, SchemaOptions};
use shopscripts_api::state::AppState;

#[tokio::main]
async fn main() {
    dotenvy::dotenv().ok();

    // --- Tracing ---
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| {
                "shopscripts_api=debug,shopscripts_db=debug,tower_http=debug".into()
            }),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // --- Configuration ---
    let config = ServerConfig::from_env().expect("Invalid server configuration");
    tracing::info!(host = %config.host, port = %config.port, "Loaded server configuration");

    // --- Store ---
    let store = Arc::new(shopscripts_db::create_store());
    if config.seed_demo_data {
        shopscripts_db::seed::seed_demo_data(&store).await;
    }

    // --- Schema ---
    let schema_options = SchemaOptions {
        tracing: config.graphql_tracing,
    };
    let schema = build_schema(Arc::clone(&store), schema_options);
    let read_only_schema = build_read_only_schema(Arc::clone(&store), schema_options);

    // --- App state ---
    let state = AppState {
        store,
        schema,
        read_only_schema,
        config: Arc::new(config.clone()),
    };

    let app = build_app(state);

    // --- Start server ---
    let addr = SocketAddr::new(config.host, config.port);
    tracing::info!(%addr, "Starting server, GraphQL at /graphql");
    if config.graphiql_enabled {
        tracing::info!(%addr, "GraphiQL console at /graphiql");
    }

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .expect("Failed to bind to address");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .expect("Server error");

    tracing::info!("Graceful shutdown complete");
}

/// Wait for SIGINT (Ctrl-C) or, on Unix, SIGTERM.
async fn shutdown_signal() {
    let ctrl_c = async {
        tokio::signal::ctrl_c()
            .await
            .expect("Failed to install Ctrl-C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate())
            .expect("Failed to install SIGTERM handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => {
            tracing::info!("Received SIGINT (Ctrl-C), starting graceful shutdown");
        }
        () = terminate => {
            tracing::info!("Received SIGTERM, starting graceful shutdown");
        }
    }
}
