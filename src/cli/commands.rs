use clap::{Parser, Subcommand};
use uuid::Uuid;

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Args {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Bot API server URL (e.g., http://localhost:8000)
    #[arg(long, global = true)]
    pub server: Option<String>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Manage the server configuration
    Config {
        #[command(subcommand)]
        cmd: ConfigCommands,
    },

    /// Manage scheduled background tasks
    Tasks {
        #[command(subcommand)]
        cmd: TaskCommands,
    },

    /// Manage accounts and exchange credentials
    Account {
        #[command(subcommand)]
        cmd: AccountCommands,
    },

    /// Show or update the local CLI context (server URL, default ids)
    Context {
        /// Default server URL
        #[arg(long)]
        server_url: Option<String>,
        /// Default user id for account creation
        #[arg(long)]
        user_id: Option<Uuid>,
        /// Default account id for credential submission
        #[arg(long)]
        account_id: Option<Uuid>,
    },
}

#[derive(Subcommand, Debug)]
pub enum ConfigCommands {
    /// Fetch the configuration and print it as a form
    Show,
    /// Edit the configuration interactively and save it back
    Edit,
}

#[derive(Subcommand, Debug)]
pub enum TaskCommands {
    /// List scheduled tasks
    List,
    /// Delete a task by id
    Delete {
        /// Task id
        id: String,
    },
}

#[derive(Subcommand, Debug)]
pub enum AccountCommands {
    /// Create a new account
    Create {
        /// User id (defaults to the one stored in the CLI context)
        #[arg(long)]
        user_id: Option<Uuid>,
        /// Account type
        #[arg(long, default_value = "trading")]
        account_type: String,
        /// Contact email
        #[arg(long)]
        email: Option<String>,
        /// Raw JSON body; overrides --account-type/--email
        #[arg(long)]
        body: Option<String>,
    },
    /// Encrypt exchange credentials with the server's public key and submit them
    SetKeys {
        /// Account id (defaults to the one stored in the CLI context)
        #[arg(long)]
        account_id: Option<Uuid>,
        /// Exchange API key
        #[arg(long)]
        api_key: String,
        /// Exchange secret key
        #[arg(long)]
        secret_key: String,
        /// Exchange passphrase
        #[arg(long)]
        passphrase: String,
    },
}
