mod advice;
mod domain;
mod routes;
mod services;
mod state;

use std::sync::Arc;

#[tokio::main]
async fn main() {
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt::init();

    let port: u16 = std::env::var("PORT")
        .unwrap_or_else(|_| "3000".into())
        .parse()
        .expect("invalid PORT");

    // Advice client is non-fatal: without it the consultant still answers,
    // always with the fallback reply.
    let advice: Option<Arc<dyn advice::FarmAdvice>> = match advice::AdviceClient::from_env() {
        Ok(client) => {
            tracing::info!(model = client.model(), "advice client initialized");
            Some(Arc::new(client))
        }
        Err(e) => {
            tracing::warn!(error = %e, "advice client not configured — consultant replies with fallback");
            None
        }
    };

    let state = state::AppState::new(advice);

    let app = routes::app(state);
    let listener = tokio::net::TcpListener::bind(format!("0.0.0.0:{port}"))
        .await
        .expect("failed to bind");

    tracing::info!(%port, "farmstead listening");
    axum::serve(listener, app).await.expect("server failed");
}
