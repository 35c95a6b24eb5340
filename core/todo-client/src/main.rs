//! Command-line client for the todo item store.
//!
//! Each run loads the list once, applies at most one action, and prints the
//! resulting list.
//!
//! Usage:
//!   todo add Buy milk
//!   todo rename <id> Buy oat milk
//!   todo toggle <id>

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use todo_client::{
    render, AddForm, ClientConfig, ItemEditor, Outcome, TodoClient, TodoView, DEFAULT_SERVER_URL,
};
use todo_types::ItemId;
use tracing::{warn, Level};
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(name = "todo")]
#[command(about = "Command-line client for the todo item store")]
struct Args {
    /// Base URL of the todo server
    #[arg(long, env = "TODO_SERVER_URL", default_value = DEFAULT_SERVER_URL)]
    server: String,

    /// Per-request timeout in seconds
    #[arg(long, default_value = "30")]
    timeout_secs: u64,

    /// Enable verbose debug logging
    #[arg(short, long)]
    verbose: bool,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Show all todos (default)
    List,
    /// Create a todo
    Add {
        #[arg(required = true, num_args = 1..)]
        title: Vec<String>,
    },
    /// Change a todo's title
    Rename {
        id: ItemId,
        #[arg(required = true, num_args = 1..)]
        title: Vec<String>,
    },
    /// Flip a todo's completed flag
    Toggle { id: ItemId },
    /// Remove a todo
    Delete { id: ItemId },
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();
    let log_level = if args.verbose { Level::DEBUG } else { Level::WARN };
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(log_level.as_str()));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .compact()
        .init();

    let client = TodoClient::new(ClientConfig {
        base_url: args.server.clone(),
        timeout_secs: args.timeout_secs,
    })
    .context("Failed to create API client")?;

    let mut view = TodoView::new(client);
    view.load().await;

    let outcome = match args.command.unwrap_or(Command::List) {
        Command::List => Outcome::Applied,
        Command::Add { title } => {
            let mut form = AddForm::new();
            form.set_input(title.join(" "));
            form.submit(&mut view).await
        }
        Command::Rename { id, title } => {
            let mut editor = ItemEditor::new(id);
            if editor.begin_edit(&view) {
                editor.set_draft(title.join(" "));
                editor.save(&mut view).await
            } else {
                warn!("No todo with id {id}");
                Outcome::Rejected
            }
        }
        Command::Toggle { id } => view.toggle(id).await,
        Command::Delete { id } => view.delete(id).await,
    };

    print!("{}", render(&view));

    match outcome {
        Outcome::Applied => Ok(()),
        Outcome::Rejected => anyhow::bail!("Nothing to do: input was rejected"),
        Outcome::Failed => anyhow::bail!("Request to {} failed", args.server),
    }
}
