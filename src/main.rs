use std::path::PathBuf;

use clap::{Parser, Subcommand};
use inventory::server::{
    config::{self, Config},
    error::Error,
    model::app::AppState,
    router, startup,
    service::{sitemap::SitemapService, user::UserService},
};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(version, about)]
struct Cli {
    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand)]
enum Command {
    /// Run migrations and serve the HTTP API (default)
    Serve,
    /// Write the location hierarchy as a nested slug sitemap
    GenerateSitemap {
        /// Output file, defaults to `SITEMAP_PATH` or `sitemap.json`
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
    /// Create an active superuser
    CreateSuperuser {
        #[arg(long)]
        username: String,
        #[arg(long)]
        email: String,
        #[arg(long, env = "SUPERUSER_PASSWORD")]
        password: String,
    },
}

#[tokio::main]
async fn main() {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let cli = Cli::parse();

    let result = match cli.command.unwrap_or(Command::Serve) {
        Command::Serve => serve().await,
        Command::GenerateSitemap { output } => generate_sitemap(output).await,
        Command::CreateSuperuser {
            username,
            email,
            password,
        } => create_superuser(&username, &email, &password).await,
    };

    if let Err(e) = result {
        tracing::error!("{}", e);
        std::process::exit(1);
    }
}

async fn serve() -> Result<(), Error> {
    let config = Config::from_env()?;

    let session = startup::connect_to_session(&config).await?;
    let db = startup::connect_to_database(&config).await?;

    let app = router::routes()
        .with_state(AppState::from(db))
        .layer(session);

    let listener = tokio::net::TcpListener::bind(config.bind_address).await?;

    tracing::info!("Starting server on {}", config.bind_address);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    Ok(())
}

async fn generate_sitemap(output: Option<PathBuf>) -> Result<(), Error> {
    let database_url = config::required_var("DATABASE_URL")?;
    let path = output.unwrap_or_else(config::sitemap_path_from_env);

    let db = sea_orm::Database::connect(&database_url).await?;

    SitemapService::new(&db).generate(&path).await?;

    Ok(())
}

async fn create_superuser(username: &str, email: &str, password: &str) -> Result<(), Error> {
    let database_url = config::required_var("DATABASE_URL")?;

    let db = sea_orm::Database::connect(&database_url).await?;

    UserService::new(&db)
        .create_superuser(username, email, password)
        .await?;

    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("Failed to listen for shutdown signal: {}", e);
    }

    tracing::info!("Shutting down");
}
