pub mod app_config;
pub mod catalog;
pub mod config;
pub mod dates;
pub mod error;
pub mod orders;
pub mod products;

pub use app_config::{AppConfig, Environment, TerminalTransitionPolicy};
pub use catalog::{load_catalog, parse_catalog, CatalogFile, CatalogFormat};
pub use config::{load_app_config, load_app_config_from_env};
pub use error::{ConfigError, ValidationError};
pub use orders::{
    Customer, Order, OrderItem, OrderStatus, ShippingInfo, TimelineEntry, TOTAL_TOLERANCE,
};
pub use products::{find_category, visible_categories, Category, Product, ALL_CATEGORIES};
