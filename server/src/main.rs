mod db;
mod registry;
mod routes;
mod services;
mod state;

use std::sync::Arc;

use services::identity::HttpIdentityVerifier;
use services::store::PgShapeStore;

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt::init();

    let database_url = std::env::var("DATABASE_URL").expect("DATABASE_URL required");
    let auth_endpoint = std::env::var("AUTH_ENDPOINT").expect("AUTH_ENDPOINT required");
    let port: u16 = std::env::var("PORT")
        .unwrap_or_else(|_| "3000".into())
        .parse()
        .expect("invalid PORT");

    let pool = db::init_pool(&database_url)
        .await
        .expect("database init failed");

    let state = state::AppState::new(
        Arc::new(PgShapeStore::new(pool)),
        Arc::new(HttpIdentityVerifier::new(auth_endpoint)),
        state::RelayConfig::from_env(),
    );

    let app = routes::app(state);
    let listener = tokio::net::TcpListener::bind(format!("0.0.0.0:{port}"))
        .await
        .expect("failed to bind");

    tracing::info!(%port, "drawing relay listening");
    axum::serve(listener, app).await.expect("server failed");
}
