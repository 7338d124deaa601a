use clap::{Parser, Subcommand};

mod client;
mod commands;


#[derive(Parser)]
#[command(name = "late-show")]
#[command(about = "Command-line client for the Late Show API", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    #[arg(global = true, long, default_value = "http://localhost:5555")]
    api_url: String,
}

#[derive(Subcommand)]
enum Commands {
    /// List all episodes
    Episodes,

    /// Show an episode with its guests
    Episode {
        /// Episode ID
        id: i32,
    },

    /// Delete an episode and its appearances
    DeleteEpisode {
        /// Episode ID
        id: i32,
    },

    /// List all guests
    Guests,

    /// Record a guest appearance
    Appear {
        #[arg(long)]
        rating: i32,
        #[arg(long)]
        episode_id: i32,
        #[arg(long)]
        guest_id: i32,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load .env file
    dotenv::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("late_show_cli=info".parse()?),
        )
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Episodes => commands::episodes(&cli.api_url).await?,
        Commands::Episode { id } => commands::episode(&cli.api_url, id).await?,
        Commands::DeleteEpisode { id } => commands::delete_episode(&cli.api_url, id).await?,
        Commands::Guests => commands::guests(&cli.api_url).await?,
        Commands::Appear {
            rating,
            episode_id,
            guest_id,
        } => commands::appear(&cli.api_url, rating, episode_id, guest_id).await?,
    }

    Ok(())
}
