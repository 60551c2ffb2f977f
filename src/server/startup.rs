use std::{sync::Arc, time::Duration};

use sea_orm::DatabaseConnection;
use tower_sessions::{cookie::SameSite, Expiry, SessionManagerLayer};
use tower_sessions_sqlx_store::SqliteStore;

use crate::server::{
    config::Config,
    error::AppError,
    service::{
        member::MemberService,
        payment::{PaymentClient, TossPaymentClient},
    },
};

/// Connects to the Sqlite database, runs pending migrations and ensures the
/// configured administrator account.
///
/// Establishes a connection pool to the Sqlite database using the connection string from
/// configuration, then automatically runs all pending SeaORM migrations to ensure the database
/// schema is up-to-date. This function must complete successfully before the application can
/// access the database.
///
/// # Arguments
/// - `config` - Application configuration containing the database URL and the
///   optional administrator credentials
///
/// # Returns
/// - `Ok(DatabaseConnection)` - Connected database with migrations applied
/// - `Err(Error)` - Failed to connect to database or run migrations
pub async fn connect_to_database(config: &Config) -> Result<DatabaseConnection, AppError> {
    use migration::{Migrator, MigratorTrait};
    use sea_orm::{ConnectOptions, Database};

    let mut opt = ConnectOptions::new(&config.database_url);
    opt.sqlx_logging(false);

    let db = Database::connect(opt).await?;

    Migrator::up(&db, None).await?;

    if let Some(admin) = &config.admin {
        MemberService::new(&db)
            .ensure_admin(&admin.email, &admin.password)
            .await?;
    }

    Ok(db)
}

/// Creates the session layer backed by the application database.
///
/// Sessions live in a table managed by `tower-sessions-sqlx-store`, created here
/// if missing, and expire after seven days of inactivity.
pub async fn connect_to_session(
    db: &DatabaseConnection,
) -> Result<SessionManagerLayer<SqliteStore>, AppError> {
    let pool = db.get_sqlite_connection_pool();
    let session_store = SqliteStore::new(pool.clone());

    session_store
        .migrate()
        .await
        .map_err(|e| sea_orm::DbErr::Custom(format!("Session table migration failed: {}", e)))?;

    let session_layer = SessionManagerLayer::new(session_store)
        .with_secure(false)
        .with_same_site(SameSite::Lax)
        .with_expiry(Expiry::OnInactivity(time::Duration::days(7)));

    Ok(session_layer)
}

/// Builds the shared HTTP client for outbound gateway calls.
///
/// Redirects are not followed and every request times out after ten seconds.
pub fn setup_reqwest_client() -> Result<reqwest::Client, AppError> {
    reqwest::Client::builder()
        .redirect(reqwest::redirect::Policy::none())
        .timeout(Duration::from_secs(10))
        .build()
        .map_err(|e| AppError::InternalError(format!("Failed to build HTTP client: {}", e)))
}

pub fn setup_payment_client(config: &Config, http_client: reqwest::Client) -> Arc<dyn PaymentClient> {
    Arc::new(TossPaymentClient::new(
        http_client,
        config.payment_api_url.clone(),
        config.payment_secret_key.clone(),
    ))
}
