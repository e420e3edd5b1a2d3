use metrics_exporter_prometheus::PrometheusBuilder;
use signlens::{config::AppConfig, model, server, LABELS};
use std::{env, sync::Arc};
use tokio::net::TcpListener;
use tracing::info;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // 1. Init
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .init();
    model::loader::init_ort()?;

    // 2. Load Config
    let config_path = env::var("SIGNLENS_CONFIG").unwrap_or_else(|_| "config.yaml".to_string());
    let config = AppConfig::from_file(&config_path)?;

    // 3. Load the classifier once, before accepting traffic
    info!(model = %config.model.name, path = %config.model.path, "loading classifier");
    let classifier = model::loader::load_model(&config.model)?;
    if config.model.validate_on_startup {
        model::check_label_count(&classifier, LABELS.len())?;
        info!(classes = LABELS.len(), "classifier output matches label set");
    }

    // 4. Create Router
    let metrics = PrometheusBuilder::new().install_recorder()?;
    let app = server::routes::create_router(Arc::new(classifier), metrics, &config.server);

    // 5. Bind & Serve
    let listener = TcpListener::bind(config.bind_address()).await?;
    info!("Server listening on http://{}", listener.local_addr()?);

    axum::serve(listener, app).await?;

    Ok(())
}
