use serde::Serialize;
use storefront_core::Product;

/// Headroom added above the highest observed price so the top of a price
/// slider can still select the most expensive product.
const MAX_PADDING: f64 = 1.1;

/// `max * 1.1` rounded up to a whole unit. Cents are rounded first so float
/// noise (`100.0 * 1.1 == 110.00000000000001`) cannot bump the result a unit.
fn padded_ceiling(max: f64) -> f64 {
    ((max * MAX_PADDING * 100.0).round() / 100.0).ceil()
}

/// Inclusive price range. `min <= max` always holds.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct PriceBounds {
    pub min: f64,
    pub max: f64,
}

impl PriceBounds {
    /// Builds a range, swapping the ends if they arrive reversed.
    #[must_use]
    pub fn new(a: f64, b: f64) -> Self {
        if a <= b {
            Self { min: a, max: b }
        } else {
            Self { min: b, max: a }
        }
    }

    #[must_use]
    pub fn contains(&self, price: f64) -> bool {
        price >= self.min && price <= self.max
    }
}

/// The observed price range of `products`: the lowest price, and the highest
/// padded by 10% and rounded up to a whole unit.
///
/// Returns `None` for an empty slice.
#[must_use]
pub fn observed_bounds(products: &[&Product]) -> Option<PriceBounds> {
    let mut prices = products.iter().map(|p| p.price);
    let first = prices.next()?;
    let (min, max) = prices.fold((first, first), |(lo, hi), price| {
        (lo.min(price), hi.max(price))
    });
    Some(PriceBounds::new(min, padded_ceiling(max)))
}

/// Fills in whichever requested bound is missing from `observed`.
///
/// With neither bound requested there is no price filter and `None` is
/// returned. With no observed range (nothing to price) the open end falls
/// back to zero or infinity. Reversed bounds are swapped, never rejected.
#[must_use]
pub fn resolve_bounds(
    requested_min: Option<f64>,
    requested_max: Option<f64>,
    observed: Option<PriceBounds>,
) -> Option<PriceBounds> {
    if requested_min.is_none() && requested_max.is_none() {
        return None;
    }
    let min = requested_min.unwrap_or_else(|| observed.map_or(0.0, |b| b.min));
    let max = requested_max.unwrap_or_else(|| observed.map_or(f64::INFINITY, |b| b.max));
    Some(PriceBounds::new(min, max))
}
