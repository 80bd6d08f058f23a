//! `washboard` — thin terminal client for the laundry POS API.
//!
//! Each invocation is one session: commands that need authentication take
//! credentials (flags or environment) and sign in before acting. One
//! request is outstanding per action; failures print the API's message and
//! exit nonzero.

mod commands;

use anyhow::Result;
use clap::{Args, Parser, Subcommand};

use washboard_client::{ApiClient, RemoteApi, Session};

#[derive(Debug, Parser)]
#[command(name = "washboard", version, about = "Laundry POS admin client")]
struct Cli {
    #[command(flatten)]
    credentials: Credentials,

    #[command(subcommand)]
    command: Command,
}

/// Sign-in credentials; the session cookie lives for this invocation.
#[derive(Debug, Args)]
struct Credentials {
    #[arg(long, global = true, env = "WASHBOARD_EMAIL")]
    email: Option<String>,

    #[arg(long, global = true, env = "WASHBOARD_PASSWORD", hide_env_values = true)]
    password: Option<String>,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Verify credentials against the API.
    Login,
    /// End the server-side session.
    Logout,
    /// Show the signed-in user.
    Whoami,
    /// Customer master data.
    #[command(subcommand)]
    Customer(CustomerCommand),
    /// Service package master data.
    #[command(subcommand)]
    Package(PackageCommand),
    /// Transaction history and status workflow.
    #[command(subcommand)]
    Tx(TxCommand),
    /// Compose and submit a new order.
    Pos(commands::PosArgs),
    /// Dashboard statistics.
    Stats,
}

#[derive(Debug, Subcommand)]
enum CustomerCommand {
    List {
        #[arg(long)]
        search: Option<String>,
        #[arg(long, default_value_t = 1)]
        page: u32,
    },
    Add {
        #[arg(long)]
        name: String,
        #[arg(long)]
        phone: String,
        #[arg(long)]
        address: Option<String>,
    },
    Rm {
        id: i64,
    },
}

#[derive(Debug, Subcommand)]
enum PackageCommand {
    List {
        #[arg(long)]
        search: Option<String>,
        #[arg(long, default_value_t = 1)]
        page: u32,
    },
    Add {
        #[arg(long)]
        name: String,
        /// Billing unit: kg, pcs, or item.
        #[arg(long)]
        unit: String,
        /// Price per unit in whole Rupiah.
        #[arg(long)]
        price: i64,
        /// Estimated duration in days.
        #[arg(long, default_value_t = 1)]
        duration: u32,
        #[arg(long)]
        description: Option<String>,
        #[arg(long)]
        inactive: bool,
    },
}

#[derive(Debug, Subcommand)]
enum TxCommand {
    List {
        #[arg(long, default_value_t = 1)]
        page: u32,
        /// Only these laundry statuses (repeatable).
        #[arg(long = "status")]
        status: Vec<String>,
    },
    Show {
        id: i64,
    },
    /// Move a transaction through the laundry workflow.
    SetStatus {
        id: i64,
        status: String,
    },
    /// Move a transaction through the payment workflow.
    SetPayment {
        id: i64,
        status: String,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();
    washboard_observability::init();

    let cli = Cli::parse();
    let client = ApiClient::from_env()?;
    let mut session = Session::new(client.clone());
    let api = RemoteApi::new(client);

    let needs_auth = !matches!(cli.command, Command::Whoami);
    if needs_auth {
        commands::sign_in(&mut session, &cli.credentials.email, &cli.credentials.password).await?;
    }

    match cli.command {
        Command::Login => commands::login(&session),
        Command::Logout => commands::logout(&mut session).await,
        Command::Whoami => commands::whoami(&mut session).await,
        Command::Customer(CustomerCommand::List { search, page }) => {
            commands::customer_list(&api, search, page).await
        }
        Command::Customer(CustomerCommand::Add {
            name,
            phone,
            address,
        }) => commands::customer_add(&api, name, phone, address).await,
        Command::Customer(CustomerCommand::Rm { id }) => commands::customer_rm(&api, id).await,
        Command::Package(PackageCommand::List { search, page }) => {
            commands::package_list(&api, search, page).await
        }
        Command::Package(PackageCommand::Add {
            name,
            unit,
            price,
            duration,
            description,
            inactive,
        }) => commands::package_add(&api, name, unit, price, duration, description, inactive).await,
        Command::Tx(TxCommand::List { page, status }) => {
            commands::tx_list(&api, page, status).await
        }
        Command::Tx(TxCommand::Show { id }) => commands::tx_show(&api, id).await,
        Command::Tx(TxCommand::SetStatus { id, status }) => {
            commands::tx_set_status(&api, id, status).await
        }
        Command::Tx(TxCommand::SetPayment { id, status }) => {
            commands::tx_set_payment(&api, id, status).await
        }
        Command::Pos(args) => commands::pos(&api, args).await,
        Command::Stats => commands::stats(&api).await,
    }
}
