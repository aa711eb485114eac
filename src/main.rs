use std::sync::{Arc, Mutex};

use anyhow::Context;
use axum::routing::{get, post};
use axum::Router;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;
use tracing_subscriber::EnvFilter;

use careconnect::config::AppConfig;
use careconnect::db;
use careconnect::handlers;
use careconnect::models::KnowledgeBase;
use careconnect::services::appointments::sqlite::SqliteAppointments;
use careconnect::services::conversation::ConversationEngine;
use careconnect::state::AppState;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let _ = dotenvy::dotenv();

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .init();

    let config = AppConfig::from_env();

    let knowledge = match &config.knowledge_base_path {
        Some(path) => {
            let raw = std::fs::read_to_string(path)
                .with_context(|| format!("failed to read knowledge base: {path}"))?;
            let kb = KnowledgeBase::from_json(&raw)
                .with_context(|| format!("invalid knowledge base: {path}"))?;
            tracing::info!("loaded {} specialties from {path}", kb.specialties.len());
            kb
        }
        None => KnowledgeBase::default(),
    };

    let conn = db::init_db(&config.database_url)?;
    let db = Arc::new(Mutex::new(conn));

    let engine = ConversationEngine::new(
        Arc::new(knowledge),
        Arc::new(SqliteAppointments::new(Arc::clone(&db))),
    );

    let state = Arc::new(AppState {
        db,
        config: config.clone(),
        engine,
    });

    let app = Router::new()
        .route("/health", get(handlers::health::health))
        .route("/chat", post(handlers::chat::chat))
        .route(
            "/api/appointments",
            get(handlers::appointments::list_appointments),
        )
        .route(
            "/api/appointments/:id",
            get(handlers::appointments::get_appointment),
        )
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
        .with_state(state);

    let addr = format!("0.0.0.0:{}", config.port);
    tracing::info!("starting server on {addr}");

    let listener = tokio::net::TcpListener::bind(&addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
