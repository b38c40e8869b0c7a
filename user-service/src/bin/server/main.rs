use std::sync::Arc;

use auth::Authenticator;
use auth::PasswordHasher;
use sqlx::postgres::PgPoolOptions;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use user_service::config::Config;
use user_service::config::DatabaseConfig;
use user_service::domain::user::policy::EmptyListPolicy;
use user_service::domain::user::ports::UserServicePort;
use user_service::domain::user::seed::seed_accounts;
use user_service::domain::user::service::UserService;
use user_service::inbound::http::router::create_router;
use user_service::outbound::repositories::InMemoryUserRepository;
use user_service::outbound::repositories::PostgresUserRepository;

#[tokio::main]
async fn main() -> Result<(), anyhow::Error> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "user_service=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!(
        service = "user-service",
        version = env!("CARGO_PKG_VERSION"),
        "Service starting"
    );

    let config = Config::load()?;

    tracing::info!(
        http_port = config.server.http_port,
        expiration_hours = config.jwt.expiration_hours,
        database = config.database.is_some(),
        seed_accounts = config.seed.accounts.len(),
        "Configuration loaded"
    );

    let password_hasher = PasswordHasher::with_cost(config.password.hashing_cost())?;
    let authenticator = Arc::new(
        Authenticator::new(config.jwt.secret.as_bytes(), config.jwt.token_ttl()?)?
            .with_password_hasher(password_hasher),
    );

    let policy = config.users.empty_list_policy();
    let user_service = match &config.database {
        Some(database) => postgres_service(database, Arc::clone(&authenticator), policy).await?,
        None => {
            tracing::warn!("No database configured, accounts are kept in memory");
            let repository = Arc::new(InMemoryUserRepository::new());
            Arc::new(
                UserService::new(repository, Arc::clone(&authenticator))
                    .with_empty_list_policy(policy),
            ) as Arc<dyn UserServicePort>
        }
    };

    let seeded = seed_accounts(user_service.as_ref(), config.seed.commands()?).await?;
    tracing::info!(accounts = seeded, "Seeding completed");

    let http_address = format!("0.0.0.0:{}", config.server.http_port);
    let http_listener = tokio::net::TcpListener::bind(&http_address).await?;
    tracing::info!(
        address = %http_address,
        port = config.server.http_port,
        protocol = "http",
        "Http server listening"
    );

    let http_application = create_router(user_service, authenticator);
    axum::serve(http_listener, http_application).await?;

    tracing::info!("Server exited successfully");
    Ok(())
}

async fn postgres_service(
    database: &DatabaseConfig,
    authenticator: Arc<Authenticator>,
    policy: EmptyListPolicy,
) -> Result<Arc<dyn UserServicePort>, anyhow::Error> {
    let pg_pool = PgPoolOptions::new()
        .max_connections(database.max_connections)
        .connect(&database.url)
        .await?;
    tracing::info!(
        max_connections = database.max_connections,
        database = "postgresql",
        "Database connection pool created"
    );

    sqlx::migrate!("./migrations").run(&pg_pool).await?;
    tracing::info!(database = "postgresql", "Database migrations completed");

    let repository = Arc::new(PostgresUserRepository::new(pg_pool));
    Ok(Arc::new(
        UserService::new(repository, authenticator).with_empty_list_policy(policy),
    ))
}
