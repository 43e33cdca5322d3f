use std::{net::SocketAddr, sync::Arc};

use clap::Parser;
use forkframe_api::{
    application::http::server::http_server::{router, state},
    args::{Args, LogArgs},
};
use tracing::{info, warn};
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

fn init_logger(log: &LogArgs) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&log.filter));

    let registry = tracing_subscriber::registry().with(filter);
    if log.json {
        registry.with(fmt::layer().json()).init();
    } else {
        registry.with(fmt::layer()).init();
    }
}

#[tokio::main]
async fn main() -> Result<(), anyhow::Error> {
    dotenv::dotenv().ok();

    let args = Arc::new(Args::parse());
    init_logger(&args.log);

    if args.llm.gemini_api_key.is_empty() {
        warn!("GEMINI_API_KEY is not set, generation endpoints will fail");
    }

    let addr: SocketAddr = format!("{}:{}", args.server.host, args.server.port).parse()?;

    let state = state(args.clone()).await?;
    let router = router(state)?;

    info!("Forkframe API listening on {}", addr);
    axum_server::bind(addr)
        .serve(router.into_make_service())
        .await?;

    Ok(())
}
