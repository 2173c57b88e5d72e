//! Catalog command handlers. The catalog is read-only; every command loads
//! the catalog file fresh.

mod query;

use clap::{Args, Subcommand};
use storefront_catalog::{Catalog, QueryParams};
use storefront_core::{load_catalog, AppConfig};

pub(crate) use query::{
    run_products_categories, run_products_featured, run_products_list, run_products_new_arrivals,
    run_products_show,
};

/// Sub-commands available under `products`.
#[derive(Debug, Subcommand)]
pub enum ProductsCommands {
    /// List products matching a query, one cumulative page at a time
    List(ListArgs),
    /// Show the category tree
    Categories,
    /// List featured products
    Featured,
    /// List new arrivals, newest first
    NewArrivals,
    /// Show one product in full
    Show {
        /// Product id
        id: String,
    },
}

/// Listing parameters. Values are passed through as text and validated
/// together, the same way query-string parameters are.
#[derive(Debug, Args)]
pub struct ListArgs {
    /// Category id, or `all`
    #[arg(long)]
    pub category: Option<String>,
    /// Subcategory id within the category
    #[arg(long)]
    pub subcategory: Option<String>,
    /// Free-text search over name, description, category, tags and features
    #[arg(long)]
    pub search: Option<String>,
    #[arg(long)]
    pub min_price: Option<String>,
    #[arg(long)]
    pub max_price: Option<String>,
    /// featured, price-low, price-high, rating, newest or name
    #[arg(long)]
    pub sort: Option<String>,
    /// Items per page (defaults to `STOREFRONT_ITEMS_PER_PAGE`)
    #[arg(long)]
    pub per_page: Option<String>,
    /// Pages shown so far; page N lists the first N pages together
    #[arg(long)]
    pub page: Option<String>,
    /// Print the result as JSON
    #[arg(long)]
    pub json: bool,
}

impl From<&ListArgs> for QueryParams {
    fn from(args: &ListArgs) -> Self {
        Self {
            category: args.category.clone(),
            subcategory: args.subcategory.clone(),
            search: args.search.clone(),
            min_price: args.min_price.clone(),
            max_price: args.max_price.clone(),
            sort: args.sort.clone(),
            per_page: args.per_page.clone(),
            page: args.page.clone(),
        }
    }
}

pub(crate) fn run(config: &AppConfig, command: ProductsCommands) -> anyhow::Result<()> {
    let catalog = open_catalog(config)?;
    match command {
        ProductsCommands::List(args) => run_products_list(config, &catalog, &args),
        ProductsCommands::Categories => {
            run_products_categories(&catalog);
            Ok(())
        }
        ProductsCommands::Featured => {
            run_products_featured(&catalog);
            Ok(())
        }
        ProductsCommands::NewArrivals => {
            run_products_new_arrivals(&catalog);
            Ok(())
        }
        ProductsCommands::Show { id } => run_products_show(&catalog, &id),
    }
}

fn open_catalog(config: &AppConfig) -> anyhow::Result<Catalog> {
    let file = load_catalog(&config.catalog_path).map_err(|e| {
        anyhow::anyhow!(
            "failed to load catalog from {}: {e}",
            config.catalog_path.display()
        )
    })?;
    tracing::debug!(
        products = file.products.len(),
        categories = file.categories.len(),
        "catalog loaded"
    );
    Ok(Catalog::from(file))
}

/// Price with two decimals.
fn fmt_price(value: f64) -> String {
    format!("{value:.2}")
}
