use storefront_catalog::{Catalog, QueryParams};
use storefront_core::{AppConfig, Product};

use super::{fmt_price, ListArgs};

/// Run a listing query and print the visible page.
///
/// # Errors
///
/// Returns an error if a listing parameter is malformed.
pub(crate) fn run_products_list(
    config: &AppConfig,
    catalog: &Catalog,
    args: &ListArgs,
) -> anyhow::Result<()> {
    let (query, page) = QueryParams::from(args).parse(config.items_per_page)?;
    let outcome = catalog.query(&query, page)?;

    if args.json {
        println!("{}", serde_json::to_string_pretty(&outcome)?);
        return Ok(());
    }

    if outcome.items.is_empty() {
        println!("no products match this query");
        return Ok(());
    }

    print_products(&outcome.items);

    println!();
    print!("showing {} of {}", outcome.items.len(), outcome.total);
    if outcome.has_more {
        print!(
            "; next: --page {}",
            page.current_page().saturating_add(1)
        );
    }
    println!();
    if let Some(bounds) = outcome.available_price {
        println!(
            "price range in category: {} to {}",
            fmt_price(bounds.min),
            fmt_price(bounds.max)
        );
    }

    Ok(())
}

fn print_products(products: &[&Product]) {
    let header = format!(
        "{:<6}{:<34}{:<12}{:>10}{:>8}  FLAGS",
        "ID", "NAME", "CATEGORY", "PRICE", "RATING"
    );
    println!("{header}");
    for product in products {
        let mut flags = Vec::new();
        if product.featured {
            flags.push("featured".to_string());
        }
        if let Some(pct) = product.discount_percent() {
            flags.push(format!("-{pct}%"));
        }
        if !product.in_stock {
            flags.push("out of stock".to_string());
        }
        println!(
            "{:<6}{:<34}{:<12}{:>10}{:>8.1}  {}",
            product.id,
            truncate(&product.name, 32),
            product.category,
            fmt_price(product.price),
            product.rating,
            flags.join(", ")
        );
    }
}

/// Print featured products in catalog order.
pub(crate) fn run_products_featured(catalog: &Catalog) {
    let featured = catalog.featured();
    if featured.is_empty() {
        println!("no featured products");
        return;
    }
    print_products(&featured);
}

/// Print new arrivals, newest first.
pub(crate) fn run_products_new_arrivals(catalog: &Catalog) {
    let arrivals = catalog.new_arrivals();
    if arrivals.is_empty() {
        println!("no new arrivals");
        return;
    }
    print_products(&arrivals);
}

/// Print the category tree without the `all` sentinel.
pub(crate) fn run_products_categories(catalog: &Catalog) {
    for category in catalog.visible_categories() {
        println!("{} ({}) [{}]", category.name, category.id, category.count);
        for sub in &category.subcategories {
            println!("  {} ({})", sub.name, sub.id);
        }
    }
}

/// Print one product in full.
///
/// # Errors
///
/// Returns an error if no product has `id`.
pub(crate) fn run_products_show(catalog: &Catalog, id: &str) -> anyhow::Result<()> {
    let product = catalog
        .product(id)
        .ok_or_else(|| anyhow::anyhow!("product '{id}' not found"))?;

    println!("{} ({})", product.name, product.id);
    println!("{}", product.description);
    println!();
    match product.original_price {
        Some(original) if product.is_on_sale() => println!(
            "Price: {} (was {})",
            fmt_price(product.price),
            fmt_price(original)
        ),
        _ => println!("Price: {}", fmt_price(product.price)),
    }
    println!("Category: {} / {}", product.category, product.sub_category);
    println!("Rating: {:.1} ({} reviews)", product.rating, product.reviews);
    println!("In stock: {}", if product.in_stock { "yes" } else { "no" });
    if let Some(date) = &product.arrival_date {
        println!("Arrived: {date}");
    }
    if let Some(image) = product.primary_image() {
        println!("Image: {image}");
    }
    for (label, values) in [
        ("Colors", &product.colors),
        ("Sizes", &product.sizes),
        ("Tags", &product.tags),
    ] {
        if !values.is_empty() {
            println!("{label}: {}", values.join(", "));
        }
    }
    for feature in &product.features {
        println!("  - {feature}");
    }

    Ok(())
}

fn truncate(text: &str, max: usize) -> String {
    if text.chars().count() > max {
        format!("{}...", text.chars().take(max.saturating_sub(3)).collect::<String>())
    } else {
        text.to_string()
    }
}
