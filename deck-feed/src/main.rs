//! deck-feed - Fetch and print the posts feed

use std::sync::Arc;

use clap::Parser;
use libpostdeck::error::TransportError;
use libpostdeck::types::RequestStatus;
use libpostdeck::{Config, HttpTransport, PostsStore, Result};

#[derive(Parser, Debug)]
#[command(name = "deck-feed")]
#[command(about = "Fetch and print the posts feed", long_about = None)]
struct Cli {
    /// Output format (text or json)
    #[arg(short, long, default_value = "text")]
    format: String,

    /// Override the configured API base URL
    #[arg(long, env = "POSTDECK_API_URL")]
    api_url: Option<String>,

    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,
}

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    if cli.verbose {
        tracing_subscriber::fmt()
            .with_env_filter("debug")
            .with_writer(std::io::stderr)
            .init();
    } else {
        libpostdeck::logging::init_default();
    }

    if let Err(e) = run(cli).await {
        eprintln!("Error: {}", e);
        std::process::exit(e.exit_code());
    }
}

async fn run(cli: Cli) -> Result<()> {
    let config = Config::load()?;
    let base_url = cli.api_url.unwrap_or(config.api.base_url);

    let transport = Arc::new(HttpTransport::new(base_url));
    let mut store = PostsStore::new(transport);

    store.fetch_posts().await;

    // Fetch failures live in state, not in a return value.
    if store.state().status == RequestStatus::Failed {
        let message = store
            .state()
            .error
            .clone()
            .unwrap_or_else(|| "fetch failed".to_string());
        return Err(TransportError::Request(message).into());
    }

    match cli.format.as_str() {
        "json" => {
            let json = serde_json::to_string_pretty(store.posts())
                .map_err(|e| TransportError::Decode(e.to_string()))?;
            println!("{}", json);
        }
        _ => {
            for post in store.posts() {
                println!(
                    "{}  {} by {} ({} reactions)",
                    post.date,
                    post.title,
                    post.user,
                    post.reactions.total()
                );
            }
        }
    }

    Ok(())
}
