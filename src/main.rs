use anyhow::Context;
use axum::{routing::get, Router};
use log::info;
use pageqa::api;
use pageqa::models::{AppConfig, AppState, ProviderKind, QaConfig};
use pageqa::services::{HttpPageProvider, PageProvider, QaAgent, StaticPageProvider};
use pageqa::utils::{DiagnosticSink, FileSink, LogSink};
use std::sync::Arc;
use tower_http::trace::TraceLayer;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // initialize tracing
    tracing_subscriber::fmt::init();

    let app_config = AppConfig::from_env()?;
    let qa_config = match &app_config.config_path {
        Some(path) => QaConfig::from_file(path)?,
        None => QaConfig::default(),
    };

    let provider: Arc<dyn PageProvider> = match app_config.provider {
        ProviderKind::Http => Arc::new(HttpPageProvider::new(qa_config.provider.clone())?),
        ProviderKind::Static => Arc::new(StaticPageProvider::new(qa_config.provider.viewport)),
    };
    let sink: Arc<dyn DiagnosticSink> = match &app_config.log_file {
        Some(path) => Arc::new(FileSink::new(path)),
        None => Arc::new(LogSink),
    };

    let agent = QaAgent::new(qa_config, provider, sink);
    let shared_state = Arc::new(AppState {
        agent: Arc::new(agent),
    });

    // build our application with a route
    let app = Router::new()
        .route("/qa", get(api::run_qa_handler))
        .route("/health", get(api::health_handler))
        .layer(TraceLayer::new_for_http())
        .with_state(shared_state);

    let listener = tokio::net::TcpListener::bind(&app_config.bind)
        .await
        .with_context(|| format!("failed to bind {}", app_config.bind))?;
    info!("Server running on http://{}", app_config.bind);
    axum::serve(listener, app).await?;
    Ok(())
}
