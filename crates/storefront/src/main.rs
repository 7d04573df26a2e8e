//! Bowlería - terminal storefront for a small açaí-bowl shop.
//!
//! Renders the product menu, keeps the shopping cart in a durable local
//! storage slot, and submits orders to the shop API.
//!
//! # Architecture
//!
//! - Single-threaded read-parse-dispatch loop over stdin; API calls are the
//!   only await points, so each action runs to completion before the next
//!   input is read
//! - Cart state is owned here and passed into views and checkout
//! - Catalog comes from the shop API with a bundled fallback, loaded once at
//!   startup
//! - Logs go to stderr so the rendered views stay clean on stdout

#![cfg_attr(not(test), forbid(unsafe_code))]

use std::io::Write as _;
use std::path::PathBuf;

use clap::Parser;
use tokio::io::AsyncBufReadExt;

use bowleria_storefront::api::ApiClient;
use bowleria_storefront::cart::CartStore;
use bowleria_storefront::catalog;
use bowleria_storefront::config::{Overrides, StorefrontConfig};
use bowleria_storefront::dispatch::{self, Action, Flow};
use bowleria_storefront::view;

#[derive(Parser)]
#[command(name = "bowleria", version, about = "Terminal storefront for the Bowlería shop")]
struct Cli {
    /// Shop API base URL (overrides BOWLERIA_API_BASE)
    #[arg(long)]
    api_base: Option<String>,

    /// Cart storage slot path (overrides BOWLERIA_CART_PATH)
    #[arg(long)]
    cart_path: Option<PathBuf>,
}

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    // Defaults to info level for our crates if RUST_LOG is not set
    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| "bowleria=info".into());
    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .init();

    if let Err(e) = run(cli).await {
        tracing::error!("storefront failed: {e}");
        std::process::exit(1);
    }
}

async fn run(cli: Cli) -> Result<(), Box<dyn std::error::Error>> {
    let config = StorefrontConfig::load(&Overrides {
        api_base: cli.api_base,
        cart_path: cli.cart_path,
    })?;
    tracing::info!(api_base = %config.api_base, cart_path = %config.cart_path.display(), "starting");

    let client = ApiClient::new(&config.api_base, config.http_timeout)?;
    let mut store = CartStore::load(&config.cart_path);

    let (catalog, source) = catalog::load_catalog(&client).await;
    tracing::info!(?source, count = catalog.len(), "catalog ready");

    println!("{}", view::render_catalog(&catalog));
    println!("{}", view::render_cart(&store));
    println!("Type 'help' for commands.");

    let mut lines = tokio::io::BufReader::new(tokio::io::stdin()).lines();
    loop {
        print!("> ");
        std::io::stdout().flush()?;

        // EOF ends the session like 'quit'
        let Some(line) = lines.next_line().await? else {
            break;
        };
        if line.trim().is_empty() {
            continue;
        }

        match Action::parse(&line) {
            Ok(action) => {
                match dispatch::dispatch(action, &mut store, &catalog, &client).await {
                    Flow::Continue(output) => println!("{output}"),
                    Flow::Quit => break,
                }
            }
            Err(e) => println!("{e}"),
        }
    }

    Ok(())
}
