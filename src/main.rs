use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use feedly::{ClientConfig, ConfigFile, FeedlyClient};
use serde::Serialize;
use std::path::{Path, PathBuf};

/// Get the default config file path (~/.config/feedly/config.toml)
fn default_config_path() -> Result<PathBuf> {
    let home = std::env::var("HOME").context("HOME environment variable not set")?;
    Ok(PathBuf::from(home)
        .join(".config")
        .join("feedly")
        .join("config.toml"))
}

#[derive(Parser, Debug)]
#[command(name = "feedly", about = "Query the Feedly Cloud API from the terminal")]
struct Args {
    /// Config file (defaults to ~/.config/feedly/config.toml)
    #[arg(long, value_name = "FILE", global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Show the profile of the token owner
    Profile,
    /// List boards
    Boards {
        /// Include enterprise boards
        #[arg(long)]
        enterprise: bool,
    },
    /// List collections
    Collections {
        /// Include reading stats for the past 31 days
        #[arg(long)]
        stats: bool,
        /// Include enterprise collections
        #[arg(long)]
        enterprise: bool,
    },
    /// Show one collection
    Collection {
        id: String,
    },
    /// Upload a cover image for a board
    BoardCover {
        id: String,
        #[arg(value_name = "FILE")]
        image: PathBuf,
    },
    /// Upload a cover image for a collection
    CollectionCover {
        id: String,
        #[arg(value_name = "FILE")]
        image: PathBuf,
    },
}

fn print_json<T: Serialize>(value: &T) -> Result<()> {
    let out = serde_json::to_string_pretty(value).context("Failed to format response")?;
    println!("{out}");
    Ok(())
}

fn open_image(path: &Path) -> Result<std::fs::File> {
    std::fs::File::open(path)
        .with_context(|| format!("Failed to open cover image '{}'", path.display()))
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let args = Args::parse();

    let config_path = match args.config {
        Some(path) => path,
        None => default_config_path()?,
    };
    let file = ConfigFile::load(&config_path)
        .with_context(|| format!("Failed to load config '{}'", config_path.display()))?;
    let config = ClientConfig::resolve(file).context("Invalid client configuration")?;
    let client = FeedlyClient::new(config).context("Failed to create HTTP client")?;

    match args.command {
        Command::Profile => {
            let profile = client.get_profile().await.context("Failed to fetch profile")?;
            print_json(&profile)?;
        }
        Command::Boards { enterprise } => {
            let boards = client
                .list_boards(enterprise)
                .await
                .context("Failed to list boards")?;
            print_json(&boards)?;
        }
        Command::Collections { stats, enterprise } => {
            let collections = client
                .list_collections(stats, enterprise)
                .await
                .context("Failed to list collections")?;
            print_json(&collections)?;
        }
        Command::Collection { id } => {
            let collection = client
                .get_collection(&id)
                .await
                .with_context(|| format!("Failed to fetch collection '{id}'"))?;
            print_json(&collection)?;
        }
        Command::BoardCover { id, image } => {
            let file = open_image(&image)?;
            client
                .upload_board_cover(&id, file)
                .await
                .with_context(|| format!("Failed to upload cover for board '{id}'"))?;
            tracing::info!(board = %id, "Board cover uploaded");
            println!("Cover uploaded for board {id}");
        }
        Command::CollectionCover { id, image } => {
            let file = open_image(&image)?;
            let collection = client
                .upload_collection_cover(&id, file)
                .await
                .with_context(|| format!("Failed to upload cover for collection '{id}'"))?;
            print_json(&collection)?;
        }
    }

    Ok(())
}
