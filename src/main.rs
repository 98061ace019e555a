//! Parlera server entry point.
//!
//! Startup order: configuration, tracing, database pool, migrations,
//! adapter wiring, then the axum listener. The pool handle is created
//! once here and passed into every adapter explicitly.

use std::sync::Arc;

use sqlx::postgres::PgPoolOptions;
use tracing_subscriber::EnvFilter;

use parlera::adapters::auth::{BcryptPasswordHasher, JwtAuthService};
use parlera::adapters::http::{api_router, ApiContext};
use parlera::adapters::http::{
    auth::AuthHandlers, catalog::CatalogHandlers, conversation::ConversationHandlers,
    progress::ProgressHandlers,
};
use parlera::adapters::postgres::{
    PostgresCatalogReader, PostgresConversationReader, PostgresConversationRepository,
    PostgresProgressReader, PostgresUserRepository,
};
use parlera::application::handlers::auth::{
    GetCurrentUserHandler, LoginUserHandler, RegisterUserHandler,
};
use parlera::application::handlers::catalog::{
    GetLanguageHandler, ListConversationTypesHandler, ListLanguagesHandler,
};
use parlera::application::handlers::conversation::{
    EndConversationHandler, GetConversationHandler, ListConversationsHandler,
    StartConversationHandler,
};
use parlera::application::handlers::progress::{GetStatsHandler, ListProgressHandler};
use parlera::config::AppConfig;
use parlera::ports::{
    CatalogReader, ConversationReader, ConversationRepository, PasswordHasher, ProgressReader,
    SessionValidator, TokenIssuer, UserRepository,
};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = AppConfig::load()?;
    config.validate()?;

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(&config.server.log_level)),
        )
        .init();

    tracing::info!(
        environment = ?config.server.environment,
        "starting parlera backend"
    );

    let pool = PgPoolOptions::new()
        .min_connections(config.database.min_connections)
        .max_connections(config.database.max_connections)
        .acquire_timeout(config.database.acquire_timeout())
        .connect(&config.database.url)
        .await?;

    if config.database.run_migrations {
        sqlx::migrate!("./migrations").run(&pool).await?;
        tracing::info!("database migrations applied");
    }

    // Persistence adapters
    let conversation_repository: Arc<dyn ConversationRepository> =
        Arc::new(PostgresConversationRepository::new(pool.clone()));
    let conversation_reader: Arc<dyn ConversationReader> =
        Arc::new(PostgresConversationReader::new(pool.clone()));
    let catalog_reader: Arc<dyn CatalogReader> = Arc::new(PostgresCatalogReader::new(pool.clone()));
    let progress_reader: Arc<dyn ProgressReader> =
        Arc::new(PostgresProgressReader::new(pool.clone()));
    let user_repository: Arc<dyn UserRepository> = Arc::new(PostgresUserRepository::new(pool));

    // Identity adapters
    let jwt = Arc::new(JwtAuthService::new(
        &config.auth.jwt_secret,
        config.auth.token_ttl(),
        user_repository.clone(),
    ));
    let validator: Arc<dyn SessionValidator> = jwt.clone();
    let issuer: Arc<dyn TokenIssuer> = jwt;
    let hasher: Arc<dyn PasswordHasher> =
        Arc::new(BcryptPasswordHasher::new(config.auth.bcrypt_cost));

    // Application handlers
    let conversations = ConversationHandlers::new(
        Arc::new(StartConversationHandler::new(
            conversation_repository.clone(),
            catalog_reader.clone(),
        )),
        Arc::new(EndConversationHandler::new(
            conversation_repository,
            conversation_reader.clone(),
        )),
        Arc::new(GetConversationHandler::new(conversation_reader.clone())),
        Arc::new(ListConversationsHandler::new(conversation_reader)),
        Arc::new(ListConversationTypesHandler::new(catalog_reader.clone())),
    );
    let catalog = CatalogHandlers::new(
        Arc::new(ListLanguagesHandler::new(catalog_reader.clone())),
        Arc::new(GetLanguageHandler::new(catalog_reader)),
    );
    let progress = ProgressHandlers::new(
        Arc::new(ListProgressHandler::new(progress_reader.clone())),
        Arc::new(GetStatsHandler::new(progress_reader)),
    );
    let auth = AuthHandlers::new(
        Arc::new(RegisterUserHandler::new(
            user_repository.clone(),
            hasher.clone(),
            issuer.clone(),
        )),
        Arc::new(LoginUserHandler::new(user_repository.clone(), hasher, issuer)),
        Arc::new(GetCurrentUserHandler::new(user_repository)),
    );

    let app = api_router(ApiContext {
        auth,
        catalog,
        conversations,
        progress,
        validator,
        cors_origins: config.server.cors_origins_list(),
        request_timeout: std::time::Duration::from_secs(config.server.request_timeout_secs),
    });

    let addr = config.server.socket_addr();
    tracing::info!("listening on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
