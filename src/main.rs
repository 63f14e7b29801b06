use std::sync::Arc;

use anyhow::Result;
use chrono::Utc;
use souq_fellah::{
    config::config_loader,
    infrastructure::{axum_http::http_serve, memory::memory_connection},
    observability,
};
use tracing::{error, info};

#[tokio::main]
async fn main() {
    if let Err(error) = run().await {
        error!("Server exited with error: {}", error);
        std::process::exit(1);
    }
}

async fn run() -> Result<()> {
    dotenvy::dotenv().ok();
    observability::init_observability("souq-fellah")?;

    let dotenvy_env = config_loader::load()?;
    info!("ENV has been loaded");

    let memory_pool = if dotenvy_env.market.seed_demo_data {
        let pool = memory_connection::establish_seeded_connection(
            Utc::now(),
            &dotenvy_env.market.demo_seller_password,
        )?;
        info!("In-memory database seeded with the demo marketplace");
        pool
    } else {
        memory_connection::establish_connection()
    };

    http_serve::start(Arc::new(dotenvy_env), Arc::new(memory_pool)).await?;

    Ok(())
}
