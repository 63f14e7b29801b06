use std::{net::SocketAddr, sync::Arc, time::Duration};

use anyhow::Result;
use axum::{
    Extension, Router,
    http::{
        Method,
        header::{AUTHORIZATION, CONTENT_TYPE},
    },
    routing::get,
};
use tokio::net::TcpListener;
use tower_http::{
    cors::{Any, CorsLayer},
    limit::RequestBodyLimitLayer,
    timeout::TimeoutLayer,
    trace::TraceLayer,
};
use tracing::{error, info};

use crate::{
    application::interfaces::{
        clock::{Clock, SystemClock},
        latency::NetworkLatency,
    },
    auth::JwtKeys,
    config::config_model::DotEnvyConfig,
    infrastructure::{
        axum_http::{default_routers, routers},
        memory::memory_connection::MemoryPoolSquad,
    },
};

pub fn build_router(
    config: &DotEnvyConfig,
    db_pool: Arc<MemoryPoolSquad>,
    clock: Arc<dyn Clock>,
) -> Result<Router> {
    let latency = NetworkLatency::from_millis(config.market.mock_api_delay_ms);
    let jwt_keys = Arc::new(JwtKeys::new(
        &config.user_secret.secret,
        config.user_secret.ttl_seconds,
    ));

    let app = Router::new()
        .fallback(default_routers::not_found)
        .nest(
            "/api/v1/auth",
            routers::iam::routes(Arc::clone(&db_pool), Arc::clone(&clock), latency),
        )
        .nest(
            "/api/v1/storefront",
            routers::storefront::routes(Arc::clone(&db_pool), Arc::clone(&clock), latency),
        )
        .nest(
            "/api/v1/dashboard",
            routers::dashboard::routes(Arc::clone(&db_pool), Arc::clone(&clock), latency),
        )
        .nest(
            "/api/v1/subscriptions",
            routers::subscriptions::routes(
                Arc::clone(&db_pool),
                Arc::clone(&clock),
                latency,
                config.market.annual_subscription_fee_minor,
            ),
        )
        .route("/api/v1/health-check", get(default_routers::health_check))
        .layer(Extension(jwt_keys))
        .layer(TimeoutLayer::new(Duration::from_secs(config.server.timeout)))
        .layer(RequestBodyLimitLayer::new(
            (config.server.body_limit * 1024 * 1024).try_into()?,
        ))
        .layer(
            CorsLayer::new()
                .allow_methods([
                    Method::GET,
                    Method::POST,
                    Method::PATCH,
                    Method::PUT,
                    Method::DELETE,
                ])
                .allow_headers([AUTHORIZATION, CONTENT_TYPE])
                .allow_origin(Any),
        )
        .layer(TraceLayer::new_for_http());

    Ok(app)
}

pub async fn start(config: Arc<DotEnvyConfig>, db_pool: Arc<MemoryPoolSquad>) -> Result<()> {
    let app = build_router(&config, db_pool, Arc::new(SystemClock))?;

    let addr = SocketAddr::from(([0, 0, 0, 0], config.server.port));
    let listener = TcpListener::bind(addr).await?;

    info!(stage = %config.stage, "Server is running on port {}", config.server.port);
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(err) = tokio::signal::ctrl_c().await {
            error!(error = ?err, "Failed to install CTRL+C signal handler");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(err) => {
                error!(error = ?err, "Failed to install SIGTERM handler");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => info!("Received ctrl+C signal"),
        _ = terminate => info!("Received terminate signal"),
    }
}
