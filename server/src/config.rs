use clap::Parser;
use todo_store::{StoreError, StoreUrl};

/// Store used when no connection string is supplied.
pub const DEFAULT_DATABASE_URL: &str = "duckdb://todos.duckdb";

#[derive(Parser, Debug, Clone)]
#[command(name = "todo-server")]
#[command(about = "HTTP API for the todo item store")]
pub struct ServerArgs {
    /// Store connection string (memory://, duckdb://:memory:, duckdb://<path>)
    #[arg(long, env = "TODO_DATABASE_URL", default_value = DEFAULT_DATABASE_URL)]
    pub database_url: String,

    /// Address to bind the HTTP listener to
    #[arg(long, env = "TODO_HOST", default_value = "0.0.0.0")]
    pub host: String,

    /// Port to listen on
    #[arg(short, long, env = "PORT", default_value = "5000")]
    pub port: u16,

    /// Enable verbose debug logging
    #[arg(short, long)]
    pub verbose: bool,
}

impl ServerArgs {
    pub fn store_url(&self) -> Result<StoreUrl, StoreError> {
        self.database_url.parse()
    }

    pub fn listen_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}
