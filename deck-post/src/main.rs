//! deck-post - Create a new post on the feed

use std::io::Read;
use std::sync::Arc;

use clap::Parser;
use libpostdeck::types::NewPost;
use libpostdeck::{Config, HttpTransport, PostdeckError, PostsStore, Result};

#[derive(Parser, Debug)]
#[command(name = "deck-post")]
#[command(about = "Create a new post on the feed", long_about = None)]
struct Cli {
    /// Post title
    title: String,

    /// Post content (reads from stdin if not provided)
    content: Option<String>,

    /// Author id (defaults to the configured author)
    #[arg(short, long)]
    user: Option<String>,

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
    let user = cli.user.unwrap_or(config.defaults.user);

    let content = match cli.content {
        Some(content) => content,
        None => {
            let mut buffer = String::new();
            std::io::stdin()
                .read_to_string(&mut buffer)
                .map_err(|e| PostdeckError::InvalidInput(e.to_string()))?;
            buffer.trim_end().to_string()
        }
    };

    // Presence checks only; anything beyond that is the server's business.
    if cli.title.trim().is_empty() {
        return Err(PostdeckError::InvalidInput("Title cannot be empty".to_string()));
    }
    if content.trim().is_empty() {
        return Err(PostdeckError::InvalidInput("Content cannot be empty".to_string()));
    }

    let transport = Arc::new(HttpTransport::new(base_url));
    let mut store = PostsStore::new(transport);

    // A create failure propagates out of run() as-is; only fetches record
    // their failures in state.
    let post = store
        .add_new_post(NewPost {
            title: cli.title,
            content,
            user,
        })
        .await?;

    println!("{}", post.id);
    Ok(())
}
