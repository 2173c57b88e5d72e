//! Order command handlers.
//!
//! Every command opens the order file through the order store, so writes go
//! through the same validation and transition rules as any other caller and
//! are saved before the command returns.

mod query;
mod write;

use std::path::PathBuf;

use clap::Subcommand;
use storefront_core::dates::parse_loose_date;
use storefront_core::{AppConfig, OrderStatus};
use storefront_orders::{JsonFileRepository, OrderStore, StoreConfig};

pub(crate) use query::{
    run_orders_list, run_orders_next_id, run_orders_recent, run_orders_show, run_orders_summary,
};
pub(crate) use write::{run_orders_add, run_orders_cancel, run_orders_status};

/// Sub-commands available under `orders`.
#[derive(Debug, Subcommand)]
pub enum OrdersCommands {
    /// List orders, newest first
    List {
        /// Only orders in this status (e.g. "in-transit")
        #[arg(long)]
        status: Option<OrderStatus>,
    },
    /// Show the most recent orders
    Recent,
    /// Show one order with its items and timeline
    Show {
        /// Order id (e.g. ORD-2024-001)
        id: String,
    },
    /// Count orders per status
    Summary,
    /// Set an order's status
    Status {
        /// Order id
        id: String,
        /// New status (e.g. shipped, "Out for Delivery")
        status: OrderStatus,
    },
    /// Cancel an order
    Cancel {
        /// Order id
        id: String,
    },
    /// Add an order from a JSON file
    Add {
        /// Path to a single order as JSON
        path: PathBuf,
    },
    /// Print the next free order id
    NextId {
        /// Year to allocate in (defaults to the current year)
        #[arg(long)]
        year: Option<i32>,
    },
}

type FileStore = OrderStore<JsonFileRepository>;

pub(crate) fn run(config: &AppConfig, command: OrdersCommands) -> anyhow::Result<()> {
    let mut store = open_store(config)?;
    match command {
        OrdersCommands::List { status } => {
            run_orders_list(&store, status);
            Ok(())
        }
        OrdersCommands::Recent => {
            run_orders_recent(&store);
            Ok(())
        }
        OrdersCommands::Show { id } => run_orders_show(&store, &id),
        OrdersCommands::Summary => {
            run_orders_summary(&store);
            Ok(())
        }
        OrdersCommands::Status { id, status } => run_orders_status(&mut store, &id, status),
        OrdersCommands::Cancel { id } => run_orders_cancel(&mut store, &id),
        OrdersCommands::Add { path } => run_orders_add(&mut store, &path),
        OrdersCommands::NextId { year } => {
            run_orders_next_id(&store, year);
            Ok(())
        }
    }
}

fn open_store(config: &AppConfig) -> anyhow::Result<FileStore> {
    let repository = JsonFileRepository::new(&config.orders_path);
    OrderStore::open(repository, StoreConfig::from(config)).map_err(|e| {
        anyhow::anyhow!(
            "failed to open orders at {}: {e}",
            config.orders_path.display()
        )
    })
}

/// `YYYY-MM-DD` for parsable dates, the raw text otherwise.
fn fmt_date(raw: &str) -> String {
    parse_loose_date(raw).map_or_else(|| raw.to_string(), |d| d.format("%Y-%m-%d").to_string())
}

fn fmt_money(value: f64) -> String {
    format!("{value:.2}")
}
