use std::sync::Arc;

use anyhow::Context;
use auth::Authenticator;
use clap::Parser;
use directory_service::config::Config;
use directory_service::domain::admin::models::Password;
use directory_service::domain::admin::models::RegisterAdminCommand;
use directory_service::domain::admin::models::Username;
use directory_service::domain::admin::ports::AdminServicePort;
use directory_service::domain::admin::service::AdminService;
use directory_service::outbound::repositories::PostgresAdminRepository;
use sqlx::postgres::PgPoolOptions;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

/// Register the admin principal in the configured database.
#[derive(Debug, Parser)]
#[command(name = "create-admin", version)]
struct Args {
    /// Admin username (3-32 characters: letters, digits, '_' or '-')
    #[arg(long)]
    username: String,

    /// Admin password; prefer the environment variable over the command line
    #[arg(long, env = "ADMIN_PASSWORD", hide_env_values = true)]
    password: String,
}

#[tokio::main]
async fn main() -> Result<(), anyhow::Error> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "directory_service=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let args = Args::parse();

    let command = RegisterAdminCommand::new(
        Username::new(args.username).context("invalid username")?,
        Password::new(args.password).context("invalid password")?,
    );

    let config = Config::load()?;

    let pg_pool = PgPoolOptions::new()
        .max_connections(1)
        .connect(&config.database.url)
        .await?;
    sqlx::migrate!("./migrations").run(&pg_pool).await?;

    let authenticator = Arc::new(Authenticator::new(
        config.jwt.secret.as_bytes(),
        chrono::Duration::minutes(config.jwt.expiration_minutes),
    ));
    let repository = Arc::new(PostgresAdminRepository::new(pg_pool.clone()));
    let service = AdminService::new(repository, authenticator);

    let result = service.register(command).await;
    pg_pool.close().await;

    let admin = result.context("failed to register admin")?;
    tracing::info!(admin_id = %admin.id, username = %admin.username, "Admin created");

    Ok(())
}
