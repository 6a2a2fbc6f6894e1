use sensor_ingest_api::{config::Configs, db::MongoStore, handlers::ApiContext, logger, routes};
use std::sync::Arc;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    logger::start_log();

    let configs = Configs::load()?;
    log::info!(
        "Using database {}.{}",
        configs.store.database,
        configs.store.collection
    );

    let store = MongoStore::connect(&configs.store).await?;
    if let Err(err) = store.ping().await {
        // The driver keeps retrying, requests fail with 500 meanwhile
        log::warn!("MongoDB not reachable at startup: {}", err);
    }

    let ctx = ApiContext::new(Arc::new(store), configs.ingest.recorded_at_offset());

    let (addr, server) = warp::serve(routes::all_routes(ctx))
        .try_bind_with_graceful_shutdown(configs.server.socket_addr(), async {
            if let Err(err) = tokio::signal::ctrl_c().await {
                log::error!("Unable to listen for shutdown signal: {}", err);
                std::future::pending::<()>().await;
            }
        })?;

    log::info!("Starting API on {}...", addr);
    server.await;
    log::info!("API stopped");

    Ok(())
}
