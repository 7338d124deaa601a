use clap::{Parser, Subcommand};

use late_show_api::{build_router, cors, db, seed, AppState, ServiceConfig};

#[derive(Parser)]
#[command(name = "late-show-api")]
#[command(about = "Late Show episodes, guests and appearances over HTTP", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Run migrations and serve HTTP (default)
    Serve,
    /// Run pending migrations and exit
    InitDb,
    /// Replace all data with the fixture set
    Seed,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load .env file
    dotenv::dotenv().ok();

    // Initialise logging
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("late_show_api=debug".parse()?),
        )
        .init();

    let cli = Cli::parse();
    let config = ServiceConfig::from_env();

    tracing::info!("Using database {}", config.database_path());
    let pool = db::establish_connection_pool(config.database_path(), config.pool_size)?;

    let applied = db::run_migrations(&pool)?;
    tracing::info!("Applied {} pending migrations", applied);

    match cli.command.unwrap_or(Commands::Serve) {
        Commands::Serve => serve(config, pool).await,
        Commands::InitDb => {
            tracing::info!("Database tables ready");
            Ok(())
        }
        Commands::Seed => {
            let summary = tokio::task::spawn_blocking(move || seed::seed_database(&pool)).await??;
            tracing::info!(
                "Seeded {} episodes, {} guests, {} appearances",
                summary.episodes,
                summary.guests,
                summary.appearances
            );
            Ok(())
        }
    }
}

async fn serve(config: ServiceConfig, pool: db::DbPool) -> anyhow::Result<()> {
    let mut app = build_router(AppState::new(pool));

    if let Some(cors) = cors::create_cors_layer() {
        app = app.layer(cors);
    }

    let addr = config.listen_addr()?;
    let listener = tokio::net::TcpListener::bind(addr).await?;

    tracing::info!("Late Show API listening on {}", addr);

    axum::serve(listener, app).await?;

    Ok(())
}
