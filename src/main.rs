use clap::{Parser, Subcommand};
use color_eyre::eyre::{Result, eyre};
use tracing_subscriber::EnvFilter;

use ckbscan::cache::DataCache;
use ckbscan::client::ExplorerClient;
use ckbscan::config::AppConfig;
use ckbscan::constants::{DEFAULT_PAGE, DEFAULT_PAGE_SIZE};
use ckbscan::domain::{ExplorerError, Network, TransactionRecord, block_rewards, confirmation};
use ckbscan::format::{format_ckb, format_confirmation, locale_number_string, parse_simple_date};
use ckbscan::service;
use ckbscan::state::{AppState, History, Navigator, Route, SearchInput};

// ckbscan version from Cargo.toml
const VERSION: &str = env!("CARGO_PKG_VERSION");

/// ckbscan - explore the CKB blockchain from the command line
#[derive(Parser)]
#[command(name = "ckbscan", version = VERSION, about, long_about = None)]
struct Cli {
    /// Network to query: mainnet, testnet, or a custom name with --api-url
    #[arg(long, global = true)]
    network: Option<String>,

    /// Explorer API base URL, e.g. http://localhost:3000/api/v1
    #[arg(long, global = true)]
    api_url: Option<String>,

    /// Neither read nor write the chart snapshot cache
    #[arg(long, global = true)]
    no_cache: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Resolve a block number, hash, transaction or address and open it
    Search {
        /// Query text; commas and surrounding whitespace are ignored
        query: String,
    },
    /// Show a transaction
    Tx { hash: String },
    /// List an address's transactions
    Address {
        hash: String,
        #[arg(long, default_value_t = DEFAULT_PAGE)]
        page: u32,
        #[arg(long, default_value_t = DEFAULT_PAGE_SIZE)]
        size: u32,
    },
    /// Show the difficulty and hash-rate chart points
    Stats {
        /// Print the points as JSON
        #[arg(long)]
        json: bool,
    },
    /// Show the explorer's node version and chain tip
    Node,
    /// Inspect or change the saved configuration
    Config {
        #[command(subcommand)]
        command: ConfigCommand,
    },
}

#[derive(Subcommand)]
enum ConfigCommand {
    /// Print the configuration file location and contents
    Show,
    /// Save the default network (custom names need --api-url)
    SetNetwork { name: String },
}

#[tokio::main]
async fn main() -> Result<()> {
    color_eyre::install()?;
    init_tracing();

    let cli = Cli::parse();
    let config = AppConfig::load();

    if let Commands::Config { command } = &cli.command {
        return handle_config_command(command, &cli, config);
    }

    let mut app = App::new(&cli, &config)?;
    match cli.command {
        Commands::Search { query } => app.search(&query).await,
        Commands::Tx { hash } => {
            app.history.push(Route::Transaction(hash.clone()));
            app.show_transaction(&hash).await
        }
        Commands::Address { hash, page, size } => app.show_address(&hash, page, size).await,
        Commands::Stats { json } => app.show_statistics(json).await,
        Commands::Node => app.show_node().await,
        // Handled before the client is built.
        Commands::Config { .. } => Ok(()),
    }
}

/// Logs go to stderr so command output stays pipeable. `RUST_LOG` overrides
/// the default level.
fn init_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "warn".into()))
        .with_writer(std::io::stderr)
        .init();
}

fn handle_config_command(command: &ConfigCommand, cli: &Cli, mut config: AppConfig) -> Result<()> {
    match command {
        ConfigCommand::Show => {
            println!("{}", AppConfig::config_path()?.display());
            println!("{}", serde_json::to_string_pretty(&config)?);
        }
        ConfigCommand::SetNetwork { name } => {
            config.network = AppConfig::resolve_network(name, cli.api_url.as_deref())
                .ok_or_else(|| eyre!("Unknown network '{name}'; pass --api-url for a custom explorer"))?;
            config.save()?;
            println!("Default network set to {}", config.network);
        }
    }
    Ok(())
}

// ============================================================================
// App Context
// ============================================================================

/// Everything one command needs: the client, the cache and the store.
struct App {
    client: ExplorerClient,
    cache: DataCache,
    state: AppState,
    history: History,
    input: SearchInput,
}

impl App {
    fn new(cli: &Cli, config: &AppConfig) -> Result<Self> {
        let network = match (&cli.network, &cli.api_url) {
            (Some(name), api_url) => AppConfig::resolve_network(name, api_url.as_deref())
                .ok_or_else(|| eyre!("Unknown network '{name}'; pass --api-url for a custom explorer"))?,
            (None, Some(api_url)) => Network::Custom {
                name: "custom".to_string(),
                api_url: api_url.clone(),
            },
            (None, None) => config.network.clone(),
        };
        tracing::info!("Using {network} at {}", network.api_url());

        let client = ExplorerClient::new(&network, config.http_config())
            .map_err(ExplorerError::into_report)?;

        let cache = if cli.no_cache || !config.use_cache {
            DataCache::in_memory()
        } else {
            DataCache::open_for(&network).unwrap_or_else(|err| {
                tracing::warn!("Chart cache unavailable, keeping it in memory: {err}");
                DataCache::in_memory()
            })
        };

        Ok(Self {
            client,
            cache,
            state: AppState::new(),
            history: History::new(),
            input: SearchInput::default(),
        })
    }

    async fn search(&mut self, query: &str) -> Result<()> {
        self.input.set(query);
        let route = service::handle_search(
            &self.client,
            &mut self.input,
            self.state.search_bar_editable,
            &mut self.state,
            &mut self.history,
        )
        .await;

        let Some(route) = route else {
            let message = self.state.toast_message.take().unwrap_or_default();
            return Err(eyre!(message));
        };

        match route {
            Route::Transaction(hash) => self.show_transaction(&hash).await,
            Route::Address(hash) => self.show_address(&hash, DEFAULT_PAGE, DEFAULT_PAGE_SIZE).await,
            Route::Block(hash) => {
                println!("Block {hash} ({})", Route::Block(hash.clone()));
                Ok(())
            }
            Route::SearchFail(query) => Err(eyre!("No results for '{query}'")),
        }
    }

    async fn show_transaction(&mut self, hash: &str) -> Result<()> {
        service::get_tip_block_number(&self.client, &mut self.state).await;
        service::get_transaction_by_hash(&self.client, hash, &mut self.history, &mut self.state)
            .await;

        if let Some(Route::SearchFail(query)) = self.history.current() {
            return Err(eyre!("Transaction '{query}' not found"));
        }
        print_transaction(&self.state.transaction, self.state.tip_block_number);
        Ok(())
    }

    async fn show_address(&mut self, hash: &str, page: u32, size: u32) -> Result<()> {
        service::get_transactions_by_address(&self.client, hash, page, size, &mut self.state)
            .await;

        println!("Address      {hash}");
        println!(
            "Transactions {}",
            locale_number_string(&self.state.address_total.to_string())
        );
        println!("Page         {page} ({size} per page)");
        println!();
        for transaction in &self.state.address_transactions {
            println!(
                "{}  #{:<10} {}",
                transaction.transaction_hash,
                transaction.block_number,
                parse_simple_date(transaction.block_timestamp)
            );
        }
        Ok(())
    }

    async fn show_statistics(&mut self, json: bool) -> Result<()> {
        service::get_statistics_chart(&self.client, &self.cache, &mut self.state).await;

        let points = &self.state.statistics_chart_datas;
        if points.is_empty() {
            return Err(eyre!("No chart data available"));
        }
        if json {
            println!("{}", serde_json::to_string_pretty(points)?);
            return Ok(());
        }
        println!("{:>12}  {:<12}  VALUE", "BLOCK", "SERIES");
        for point in points {
            println!(
                "{:>12}  {:<12}  {}",
                point.block_number(),
                point.series().as_str(),
                locale_number_string(&point.value().to_string())
            );
        }
        Ok(())
    }

    async fn show_node(&mut self) -> Result<()> {
        service::init_node_version(&self.client, &mut self.state).await;
        service::get_tip_block_number(&self.client, &mut self.state).await;

        if self.state.node_version.is_empty() && self.state.tip_block_number == 0 {
            return Err(eyre!("Explorer at {} is unreachable", self.client.base_url()));
        }
        println!("Explorer   {}", self.client.base_url());
        println!("Node       {}", self.state.node_version);
        println!(
            "Tip block  {}",
            locale_number_string(&self.state.tip_block_number.to_string())
        );
        Ok(())
    }
}

// ============================================================================
// Output
// ============================================================================

fn print_transaction(transaction: &TransactionRecord, tip_block_number: u64) {
    println!("Transaction  {}", transaction.transaction_hash);
    println!("Block        {}", transaction.block_number);
    println!(
        "Timestamp    {}",
        parse_simple_date(transaction.block_timestamp)
    );
    println!("Fee          {}", format_ckb(transaction.transaction_fee));
    let confirmations = confirmation(tip_block_number, transaction.block_number);
    if confirmations > 0 {
        println!("Status       {}", format_confirmation(confirmations));
    }

    println!();
    println!("Inputs");
    for input in &transaction.display_inputs {
        if input.from_cellbase {
            let target = input.target_block_number.unwrap_or(0);
            println!("  Cellbase for Block {target}");
            for reward in block_rewards(transaction, input).into_iter().flatten() {
                println!("    {:<18} {}", reward.name, format_ckb(reward.capacity));
            }
            continue;
        }
        println!(
            "  {}  {}",
            input.address_hash.as_deref().unwrap_or("-"),
            format_ckb(input.capacity)
        );
    }

    println!();
    println!("Outputs");
    for output in &transaction.display_outputs {
        let marker = if output.is_genesis_output {
            "  (genesis)"
        } else {
            ""
        };
        println!(
            "  {}  {}{marker}",
            output.address_hash.as_deref().unwrap_or("-"),
            format_ckb(output.capacity)
        );
    }
}
