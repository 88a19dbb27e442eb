//! Wallet Watcher CLI
//!
//! Command-line front end for the Wallet Watcher API:
//! - Store or forget the API key
//! - Show the dashboard totals and wallet list
//! - Register wallets and inspect their transactions and alerts
//! - Create and delete alerts
//!
//! # Configuration
//!
//! Settings come from `~/.config/wallet-watcher/config.toml` (or
//! `./wallet-watcher.toml`) with `WALLET_WATCHER_*` environment overrides.
//! `RUST_LOG` takes precedence over the configured log level.

use std::path::PathBuf;
use std::process;

use clap::{Parser, Subcommand};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use wallet_watcher::client::{ApiClient, ReqwestTransport};
use wallet_watcher::config::{generate_default_config, Config, LoggingConfig};
use wallet_watcher::credentials::{CredentialStore, FileCredentialStore, MemoryCredentialStore};
use wallet_watcher::dashboard::{self, DashboardState};
use wallet_watcher::detail::{self, DeleteOutcome, DetailView, Tab, TabContent};
use wallet_watcher::error::{ClientResult, CredentialError};
use wallet_watcher::models::ALERT_TYPES;
use wallet_watcher::terminal::{self, TerminalUi};

#[derive(Parser)]
#[command(name = "wallet-watcher")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Monitor wallets, transactions and alerts")]
#[command(long_about = "Wallet Watcher client.\nLog in with your API key, register wallets and manage their alerts.")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// API server URL (overrides config)
    #[arg(long, global = true)]
    pub api_url: Option<String>,

    /// Answer yes to confirmation prompts
    #[arg(short, long, global = true)]
    pub yes: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Store the API key used for every request
    Login {
        /// API key issued by the server
        api_key: String,
    },

    /// Forget the stored API key
    Logout,

    /// Show totals and the wallet list
    Dashboard,

    /// Manage wallets
    Wallet {
        #[command(subcommand)]
        command: WalletCommands,
    },

    /// Manage alerts
    Alert {
        #[command(subcommand)]
        command: AlertCommands,
    },

    /// Check the API server
    Health,

    /// Generate default config file
    Config {
        /// Output path (default: stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
}

#[derive(Subcommand)]
pub enum WalletCommands {
    /// Register a wallet for monitoring
    Add {
        /// Wallet address, sent as typed
        address: String,
        /// Optional display label
        #[arg(short, long)]
        label: Option<String>,
    },

    /// Show one wallet and a detail tab
    Show {
        address: String,
        /// Tab to display (transactions, alerts)
        #[arg(short, long, default_value_t = Tab::Transactions)]
        tab: Tab,
    },
}

#[derive(Subcommand)]
pub enum AlertCommands {
    /// Create an alert on a wallet
    Add {
        address: String,
        /// Alert type
        #[arg(value_parser = clap::builder::PossibleValuesParser::new(ALERT_TYPES))]
        alert_type: String,
        /// Threshold, sent as typed
        #[arg(short, long, default_value = "")]
        threshold: String,
    },

    /// Delete an alert after confirmation
    Delete {
        /// Wallet whose alert list is refreshed afterwards
        address: String,
        /// Alert id
        id: i64,
    },
}

/// Stored key, or the one supplied through `WALLET_WATCHER_API_KEY`
#[derive(Debug, Clone)]
enum Credentials {
    Env(MemoryCredentialStore),
    File(FileCredentialStore),
}

impl CredentialStore for Credentials {
    fn api_key(&self) -> Option<String> {
        match self {
            Credentials::Env(store) => store.api_key(),
            Credentials::File(store) => store.api_key(),
        }
    }

    fn store_api_key(&self, key: &str) -> Result<(), CredentialError> {
        match self {
            Credentials::Env(store) => store.store_api_key(key),
            Credentials::File(store) => store.store_api_key(key),
        }
    }

    fn clear(&self) -> Result<(), CredentialError> {
        match self {
            Credentials::Env(store) => store.clear(),
            Credentials::File(store) => store.clear(),
        }
    }
}

type Client = ApiClient<ReqwestTransport, Credentials, TerminalUi>;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let (mut config, skipped) = Config::load_default();
    if let Some(url) = cli.api_url.clone() {
        config.api.base_url = url;
    }
    init_logging(&config.logging);
    for error in &skipped {
        tracing::warn!("Skipping config: {}", error);
    }

    let file_store = FileCredentialStore::new(&config.credentials.path);

    match cli.command {
        Commands::Login { api_key } => {
            file_store.store_api_key(&api_key)?;
            println!("API key saved to {:?}", file_store.path());
            println!();
            println!("View your wallets with:");
            println!("  wallet-watcher dashboard");
        }

        Commands::Logout => {
            dashboard::logout(&file_store)?;
            println!("Logged out.");
        }

        Commands::Config { output } => {
            let content = generate_default_config();
            match output {
                Some(path) => {
                    std::fs::write(&path, content)?;
                    println!("Config written to {:?}", path);
                }
                None => print!("{}", content),
            }
        }

        Commands::Health => {
            let client = build_client(&config, file_store, cli.yes)?;
            let health = exit_on_failure(client.health().await);

            println!("Wallet Watcher API at {}", client.base_url());
            println!();
            println!("Status: {}", health.status);
            if let Some(database) = health.database {
                println!("Database: {}", database);
            }
            if let Some(version) = health.version {
                println!("Version: {}", version);
            }
        }

        Commands::Dashboard => {
            let client = build_client(&config, file_store, cli.yes)?;
            match dashboard::load_dashboard(&client).await {
                DashboardState::Loaded(snapshot) => {
                    print!("{}", terminal::render_dashboard(&snapshot))
                }
                DashboardState::Unauthenticated => not_logged_in(),
                DashboardState::Loading | DashboardState::Error(_) => process::exit(1),
            }
        }

        Commands::Wallet { command } => {
            let client = build_client(&config, file_store, cli.yes)?;
            require_login(&client);

            match command {
                WalletCommands::Add { address, label } => {
                    let label = label.unwrap_or_default();
                    let created =
                        exit_on_failure(dashboard::add_wallet(&client, &address, &label).await);
                    if let Some(wallet) = created {
                        println!();
                        print!("{}", terminal::render_wallet_header(&wallet));
                    }
                }
                WalletCommands::Show { address, tab } => {
                    let wallet = exit_on_failure(client.get_wallet(&address).await);
                    print!("{}", terminal::render_wallet_header(&wallet));
                    println!();

                    let mut view = DetailView::open(&wallet.address);
                    view.switch_tab(tab);
                    println!("{}", view.active_tab().label());
                    match detail::load_tab(&client, &view).await {
                        TabContent::Transactions(panel) => {
                            print!("{}", terminal::render_transactions(&panel))
                        }
                        TabContent::Alerts(panel) => print!("{}", terminal::render_alerts(&panel)),
                    }
                }
            }
        }

        Commands::Alert { command } => {
            let client = build_client(&config, file_store, cli.yes)?;
            require_login(&client);

            match command {
                AlertCommands::Add {
                    address,
                    alert_type,
                    threshold,
                } => {
                    let view = DetailView::open(address);
                    let panel = exit_on_failure(
                        detail::create_alert(&client, &view, &alert_type, &threshold).await,
                    );
                    println!();
                    print!("{}", terminal::render_alerts(&panel));
                }
                AlertCommands::Delete { address, id } => {
                    let view = DetailView::open(address);
                    match exit_on_failure(detail::delete_alert(&client, &view, id).await) {
                        DeleteOutcome::Cancelled => println!("Cancelled."),
                        DeleteOutcome::Deleted(panel) => {
                            println!();
                            print!("{}", terminal::render_alerts(&panel));
                        }
                    }
                }
            }
        }
    }

    Ok(())
}

fn init_logging(logging: &LoggingConfig) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("wallet_watcher={}", logging.level)));

    let registry = tracing_subscriber::registry().with(filter);
    if logging.format == "json" {
        registry
            .with(tracing_subscriber::fmt::layer().json().with_writer(std::io::stderr))
            .init();
    } else {
        registry
            .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
            .init();
    }
}

fn build_client(
    config: &Config,
    file_store: FileCredentialStore,
    assume_yes: bool,
) -> anyhow::Result<Client> {
    let credentials = match config.api_key_override.as_deref() {
        Some(key) => Credentials::Env(MemoryCredentialStore::with_key(key)),
        None => Credentials::File(file_store),
    };
    let transport = ReqwestTransport::new(config.api.request_timeout())?;

    tracing::debug!("Using API at {}", config.api.base_url);
    Ok(ApiClient::new(
        config.api.base_url.as_str(),
        transport,
        credentials,
        TerminalUi::new(assume_yes),
    ))
}

fn require_login(client: &Client) {
    if !client.credentials().is_authenticated() {
        not_logged_in();
    }
}

fn not_logged_in() -> ! {
    eprintln!("Not logged in.");
    eprintln!();
    eprintln!("Store your API key with:");
    eprintln!("  wallet-watcher login <api-key>");
    process::exit(1);
}

/// The request helper has already shown the failure
fn exit_on_failure<T>(result: ClientResult<T>) -> T {
    match result {
        Ok(value) => value,
        Err(_) => process::exit(1),
    }
}
