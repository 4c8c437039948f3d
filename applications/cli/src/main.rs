/// Mixtape - manage users, playlists and songs from the command line
use clap::Parser;
use mixtape_cli::{execute, AppConfig, Cli};
use mixtape_storage::{LocalCatalog, Session};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main(flavor = "current_thread")]
async fn main() {
    let cli = Cli::parse();

    if let Err(e) = run(cli).await {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}

async fn run(cli: Cli) -> anyhow::Result<()> {
    let mut config = AppConfig::load(cli.config.as_deref())?;
    if let Some(database) = cli.database {
        config.storage.database_url = database;
    }
    config.validate()?;

    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| config.logging.filter.clone().into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    tracing::debug!("Using database {}", config.storage.database_url);

    let session = Session::open(&config.storage.database_url).await?;
    let catalog = LocalCatalog::new(session);

    let rendered = execute(&catalog, cli.command, cli.json).await?;
    print!("{rendered}");

    Ok(())
}
