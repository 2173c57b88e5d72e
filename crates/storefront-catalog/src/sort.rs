use std::cmp::{Ordering, Reverse};

use storefront_core::dates::sort_timestamp;
use storefront_core::Product;

use crate::query::SortKey;

/// Orders `products` in place by `key`.
///
/// Every ordering is a stable sort, so ties keep their input order and
/// sorting twice by the same key changes nothing. Unrecognized keys are a
/// no-op.
pub fn sort_products(products: &mut [&Product], key: &SortKey) {
    match key {
        SortKey::Featured => products.sort_by_key(|p| !p.featured),
        SortKey::PriceLow => products.sort_by(|a, b| a.price.total_cmp(&b.price)),
        SortKey::PriceHigh => products.sort_by(|a, b| b.price.total_cmp(&a.price)),
        SortKey::Rating => products.sort_by(|a, b| b.rating.total_cmp(&a.rating)),
        SortKey::Newest => {
            products.sort_by_key(|p| Reverse(sort_timestamp(p.arrival_date.as_deref())));
        }
        SortKey::Name => products.sort_by(|a, b| compare_names(&a.name, &b.name)),
        SortKey::Unrecognized(raw) => {
            tracing::debug!(sort_key = %raw, "unrecognized sort key; keeping input order");
        }
    }
}

/// Case-folded comparison, with the raw strings as tie-break so the order
/// is total.
fn compare_names(a: &str, b: &str) -> Ordering {
    let folded = |s: &str| s.chars().flat_map(char::to_lowercase).collect::<Vec<_>>();
    folded(a).cmp(&folded(b)).then_with(|| a.cmp(b))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn product(id: &str, price: f64, featured: bool) -> Product {
        Product {
            id: id.to_string(),
            name: format!("Item {id}"),
            description: String::new(),
            price,
            original_price: None,
            category: "home".to_string(),
            sub_category: String::new(),
            rating: 0.0,
            reviews: 0,
            featured,
            in_stock: true,
            is_new_arrival: false,
            arrival_date: None,
            images: vec![],
            tags: vec![],
            features: vec![],
            colors: vec![],
            sizes: vec![],
        }
    }

    fn ids(products: &[&Product]) -> Vec<String> {
        products.iter().map(|p| p.id.clone()).collect()
    }

    #[test]
    fn price_low_ascends() {
        let items = [product("1", 10.0, false), product("2", 5.0, true)];
        let mut refs: Vec<&Product> = items.iter().collect();
        sort_products(&mut refs, &SortKey::PriceLow);
        assert_eq!(ids(&refs), vec!["2", "1"]);
    }

    #[test]
    fn price_high_descends() {
        let items = [
            product("1", 10.0, false),
            product("2", 30.0, false),
            product("3", 20.0, false),
        ];
        let mut refs: Vec<&Product> = items.iter().collect();
        sort_products(&mut refs, &SortKey::PriceHigh);
        assert_eq!(ids(&refs), vec!["2", "3", "1"]);
    }

    #[test]
    fn featured_partition_is_stable() {
        let items = [
            product("a", 1.0, false),
            product("b", 1.0, true),
            product("c", 1.0, false),
            product("d", 1.0, true),
        ];
        let mut refs: Vec<&Product> = items.iter().collect();
        sort_products(&mut refs, &SortKey::Featured);
        assert_eq!(ids(&refs), vec!["b", "d", "a", "c"]);
    }

    #[test]
    fn rating_descends_with_ties_in_input_order() {
        let mut items = [
            product("1", 1.0, false),
            product("2", 1.0, false),
            product("3", 1.0, false),
        ];
        items[0].rating = 4.0;
        items[1].rating = 4.9;
        items[2].rating = 4.0;
        let mut refs: Vec<&Product> = items.iter().collect();
        sort_products(&mut refs, &SortKey::Rating);
        assert_eq!(ids(&refs), vec!["2", "1", "3"]);
    }

    #[test]
    fn newest_puts_missing_dates_last() {
        let mut items = [
            product("undated", 1.0, false),
            product("old", 1.0, false),
            product("new", 1.0, false),
            product("garbage", 1.0, false),
        ];
        items[1].arrival_date = Some("2023-01-01".to_string());
        items[2].arrival_date = Some("2024-06-01T12:00:00Z".to_string());
        items[3].arrival_date = Some("soon".to_string());
        let mut refs: Vec<&Product> = items.iter().collect();
        sort_products(&mut refs, &SortKey::Newest);
        assert_eq!(ids(&refs), vec!["new", "old", "undated", "garbage"]);
    }

    #[test]
    fn name_sort_ignores_case() {
        let mut items = [
            product("1", 1.0, false),
            product("2", 1.0, false),
            product("3", 1.0, false),
        ];
        items[0].name = "walnut table".to_string();
        items[1].name = "Armchair".to_string();
        items[2].name = "Ottoman".to_string();
        let mut refs: Vec<&Product> = items.iter().collect();
        sort_products(&mut refs, &SortKey::Name);
        assert_eq!(ids(&refs), vec!["2", "3", "1"]);
    }

    #[test]
    fn unknown_key_preserves_order() {
        let items = [product("1", 9.0, false), product("2", 1.0, true)];
        let mut refs: Vec<&Product> = items.iter().collect();
        sort_products(&mut refs, &SortKey::Unrecognized("trending".to_string()));
        assert_eq!(ids(&refs), vec!["1", "2"]);
    }

    #[test]
    fn every_key_is_idempotent() {
        let mut items: Vec<Product> = (0..12u8)
            .map(|i| {
                let mut p = product(&i.to_string(), f64::from(i % 4) * 10.0, i % 3 == 0);
                p.rating = f64::from(i % 5);
                p.name = format!("{} item", ["b", "A", "c", "a"][usize::from(i % 4)]);
                if i % 2 == 0 {
                    p.arrival_date = Some(format!("2024-0{}-01", 1 + i % 6));
                }
                p
            })
            .collect();
        items.reverse();

        for key in [
            SortKey::Featured,
            SortKey::PriceLow,
            SortKey::PriceHigh,
            SortKey::Rating,
            SortKey::Newest,
            SortKey::Name,
            SortKey::Unrecognized("x".to_string()),
        ] {
            let mut once: Vec<&Product> = items.iter().collect();
            sort_products(&mut once, &key);
            let mut twice = once.clone();
            sort_products(&mut twice, &key);
            assert_eq!(ids(&once), ids(&twice), "sort by {key} is not idempotent");
        }
    }
}
