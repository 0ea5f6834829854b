use std::sync::Arc;

use auth::TokenService;
use identity_service::config::Config;
use identity_service::domain::account::service::AuthService;
use identity_service::inbound::http::router::create_router;
use identity_service::outbound::repositories::PostgresAccountRepository;
use sqlx::postgres::PgPoolOptions;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

#[tokio::main]
async fn main() -> Result<(), anyhow::Error> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "identity_service=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!(
        service = "identity-service",
        version = env!("CARGO_PKG_VERSION"),
        "Service starting"
    );

    let config = Config::load()?;

    tracing::info!(
        http_port = config.server.http_port,
        token_validity_hours = config.jwt.expiration_hours,
        "Configuration loaded"
    );

    let pg_pool = PgPoolOptions::new()
        .max_connections(5)
        .connect(&config.database.url)
        .await?;
    tracing::info!(
        max_connections = 5,
        database = "postgresql",
        "Database connection pool created"
    );

    sqlx::migrate!("./migrations").run(&pg_pool).await?;
    tracing::info!(database = "postgresql", "Database migrations completed");

    let token_service = Arc::new(TokenService::new(
        config.jwt.secret.as_bytes(),
        config.jwt.expiration_hours,
    ));
    let account_repository = Arc::new(PostgresAccountRepository::new(pg_pool));
    let auth_service = Arc::new(AuthService::new(
        account_repository,
        Arc::clone(&token_service),
    ));

    let address = format!("0.0.0.0:{}", config.server.http_port);
    let listener = tokio::net::TcpListener::bind(&address).await?;
    tracing::info!(address = %address, protocol = "http", "Http server listening");

    let application = create_router(auth_service, token_service);
    axum::serve(listener, application).await?;

    Ok(())
}
