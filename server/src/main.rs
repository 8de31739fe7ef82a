#![recursion_limit = "256"]

mod config;
mod llm;
mod routes;
mod services;
mod state;

use std::sync::Arc;

use vision::model::CentroidModel;

#[tokio::main]
async fn main() {
    let _ = dotenvy::dotenv();
    tracing_subscriber::fmt::init();

    let config = config::ServerConfig::from_env().expect("invalid server configuration");

    // Classifier is optional: analysis answers 503 until a model is present.
    let classifier = match &config.model_path {
        Some(path) => match CentroidModel::load(path) {
            Ok(model) => {
                tracing::info!(path = %path.display(), classes = model.classes.len(), "classifier loaded");
                Some(model)
            }
            Err(e) => {
                tracing::warn!(error = %e, path = %path.display(), "classifier failed to load; analysis disabled");
                None
            }
        },
        None => {
            tracing::warn!("MODEL_PATH not set; analysis disabled");
            None
        }
    };

    // LLM is optional: guidance falls back to fixed text when missing.
    let llm: Option<Arc<dyn llm::LlmChat>> = match llm::LlmClient::from_env() {
        Ok(client) => {
            tracing::info!(model = client.model(), "LLM client initialized");
            Some(Arc::new(client))
        }
        Err(e) => {
            tracing::warn!(error = %e, "LLM client not configured; using fallback guidance");
            None
        }
    };

    let state = state::AppState::new(classifier, llm, config.report_capacity, config.upload_dir.clone());

    let report_capacity = state.reports.capacity();
    let app = routes::leptos_app(state).expect("failed to build application router");
    let addr = config.bind_addr();
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .expect("failed to bind");

    tracing::info!(%addr, report_capacity, "thermovision listening");
    axum::serve(listener, app).await.expect("server failed");
}
