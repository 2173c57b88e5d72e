mod orders;
mod products;

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use storefront_core::AppConfig;
use tracing_subscriber::EnvFilter;

use orders::OrdersCommands;
use products::ProductsCommands;

#[derive(Debug, Parser)]
#[command(name = "storefront-cli")]
#[command(about = "Storefront catalog and order command line interface")]
struct Cli {
    /// Catalog file to read (overrides `STOREFRONT_CATALOG_PATH`)
    #[arg(long = "catalog", global = true)]
    catalog_path: Option<PathBuf>,
    /// Order file to read and write (overrides `STOREFRONT_ORDERS_PATH`)
    #[arg(long = "orders", global = true)]
    orders_path: Option<PathBuf>,
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Browse the product catalog
    Products {
        #[command(subcommand)]
        command: ProductsCommands,
    },
    /// Inspect and update orders
    Orders {
        #[command(subcommand)]
        command: OrdersCommands,
    },
}

fn main() -> anyhow::Result<()> {
    let mut config = storefront_core::load_app_config()?;
    init_tracing(&config);

    let cli = Cli::parse();
    apply_path_overrides(&mut config, &cli);

    tracing::debug!(
        env = %config.env,
        catalog = %config.catalog_path.display(),
        orders = %config.orders_path.display(),
        "configuration loaded"
    );

    match cli.command {
        Some(Commands::Products { command }) => products::run(&config, command),
        Some(Commands::Orders { command }) => orders::run(&config, command),
        None => {
            println!("storefront-cli ready; run with --help for commands");
            Ok(())
        }
    }
}

/// `RUST_LOG` wins when set; otherwise the configured log level applies.
fn init_tracing(config: &AppConfig) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(config.log_level.as_str()));
    tracing_subscriber::fmt().with_env_filter(filter).init();
}

fn apply_path_overrides(config: &mut AppConfig, cli: &Cli) {
    if let Some(path) = &cli.catalog_path {
        config.catalog_path.clone_from(path);
    }
    if let Some(path) = &cli.orders_path {
        config.orders_path.clone_from(path);
    }
}
