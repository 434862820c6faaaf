use cinematch::{
    config::Config,
    routes::{create_router, AppState},
    services::sources,
};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::registry()
        .with(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "cinematch=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = Config::from_env()?;

    // Load the catalog once; it is read-only for the rest of the run
    let source = sources::from_config(&config);
    let catalog = sources::load_catalog(source.as_ref()).await?;

    let addr = config.bind_addr();
    let app = create_router(AppState::new(catalog, config));

    let listener = tokio::net::TcpListener::bind(&addr).await?;
    tracing::info!(addr = %addr, "Server running");
    axum::serve(listener, app).await?;

    Ok(())
}
