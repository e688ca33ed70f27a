use users_api::{config::ApiConfig, middleware::cors::create_cors_layer};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Load configuration from environment variables
    dotenvy::dotenv().ok();
    let config = ApiConfig::from_env()?;

    users_api::tracing::init_tracing(&config.env);
    let metrics_handle = users_api::metrics::init_metrics()?;

    // Create the application router
    let app = users_api::router::router(config.env, metrics_handle)
        .layer(create_cors_layer(&config.allowed_origins));

    // Start the server
    let addr = format!("{}:{}", config.host, config.port);
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    tracing::info!("Server running on http://{addr}");
    axum::serve(listener, app).await?;

    Ok(())
}
