use std::path::PathBuf;
use std::sync::Arc;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use tracing::info;

use shopfront::config::Config;
use shopfront::gateway::{GuardedGateway, HttpGateway, NewItem, Operation, RemoteGateway};
use shopfront::logging::init_tracing;
use shopfront::session::{
    FileSessionStore, PresencePolicy, SessionStatus, SessionStore, LOGGED_OUT,
};
use shopfront::ui;

// =============================================================================
// CLI
// =============================================================================

#[derive(Parser, Debug)]
#[command(name = "shopfront", version)]
#[command(about = "Storefront account screen and customer registration")]
struct Args {
    /// Config file (default: <config dir>/shopfront/config.toml)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Backend base URL, overriding the config file
    #[arg(long, global = true)]
    backend_url: Option<String>,

    /// Without a subcommand the account screen opens
    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Item service operations
    Items {
        #[command(subcommand)]
        action: ItemsAction,
    },
    /// Stored login flag
    Session {
        #[command(subcommand)]
        action: SessionAction,
    },
}

#[derive(Subcommand, Debug)]
enum ItemsAction {
    /// Print every item
    List,
    /// Create an item
    Add {
        #[arg(long)]
        category_id: i64,
        #[arg(long)]
        customer_id: i64,
        #[arg(long)]
        title: String,
        #[arg(long)]
        price: f64,
        #[arg(long, default_value = "")]
        description: String,
        #[arg(long, default_value = "")]
        image: String,
        #[arg(long, default_value = "")]
        condition: String,
        #[arg(long, default_value = "")]
        location: String,
    },
    /// Send the fixed update payload for item 1
    Update,
    /// Delete an item
    Delete {
        #[arg(long)]
        id: i64,
    },
}

#[derive(Subcommand, Debug)]
enum SessionAction {
    /// Print whether a user is logged in
    Show,
    /// Store the logged-out flag
    Logout,
}

// =============================================================================
// Entry point
// =============================================================================

fn main() -> Result<()> {
    let args = Args::parse();
    init_tracing();

    let mut config = match &args.config {
        Some(path) => Config::load_from(path)?,
        None => Config::load()?,
    };
    if let Some(url) = args.backend_url {
        config.backend.base_url = url;
        config.validate()?;
    }

    let runtime = tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .build()
        .context("failed to start async runtime")?;
    let gateway = Arc::new(GuardedGateway::new(HttpGateway::new(&config.backend)?));
    let store = Arc::new(FileSessionStore::new(config.session_path()));
    info!(session = %store.path().display(), "session storage selected");

    match args.command {
        None => ui::runtime::run(&config, gateway, store, runtime.handle())?,
        Some(Command::Items { action }) => runtime.block_on(run_items(action, gateway.as_ref()))?,
        Some(Command::Session { action }) => {
            runtime.block_on(run_session(action, store.as_ref()))?
        }
    }
    Ok(())
}

async fn run_items(action: ItemsAction, gateway: &dyn RemoteGateway) -> Result<()> {
    let (operation, response) = match action {
        ItemsAction::List => {
            let items = gateway.list_items().await?;
            if items.is_empty() {
                println!("No items");
            }
            for item in items {
                println!("{}", item.summary());
            }
            return Ok(());
        }
        ItemsAction::Add {
            category_id,
            customer_id,
            title,
            price,
            description,
            image,
            condition,
            location,
        } => {
            let item = NewItem {
                category_id,
                customer_id,
                title,
                price,
                description,
                image,
                condition,
                location,
            };
            (Operation::CreateItem, gateway.create_item(&item).await?)
        }
        ItemsAction::Update => (Operation::UpdateItem, gateway.update_item().await?),
        ItemsAction::Delete { id } => (Operation::DeleteItem, gateway.delete_item(id).await?),
    };

    if let Some(text) = operation.confirmation() {
        println!("Confirmation: {text}");
    }
    println!("{}", serde_json::to_string_pretty(&response)?);
    Ok(())
}

async fn run_session(action: SessionAction, store: &dyn SessionStore) -> Result<()> {
    match action {
        SessionAction::Show => {
            let token = store.read().await?;
            let status = SessionStatus::resolve(&PresencePolicy, token.as_deref());
            let label = match status {
                SessionStatus::LoggedIn => "logged in",
                SessionStatus::LoggedOut | SessionStatus::Unknown => "logged out",
            };
            println!("{label}");
        }
        SessionAction::Logout => {
            store.write(LOGGED_OUT).await?;
            println!("You have been logged out!");
        }
    }
    Ok(())
}
