use storefront_core::{Customer, Order, OrderItem, OrderStatus, ShippingInfo};

/// A consistent single-item order: 100 + 10 shipping + 8 tax.
pub(crate) fn order(id: &str, date: &str, status: OrderStatus) -> Order {
    Order {
        id: id.to_string(),
        date: date.to_string(),
        status,
        customer: Customer {
            name: "Rue Calder".to_string(),
            email: "rue@example.com".to_string(),
            phone: None,
        },
        items: vec![OrderItem {
            id: "3".to_string(),
            name: "Linen Shirt".to_string(),
            price: 100.0,
            quantity: 1,
            image: String::new(),
            sku: "LS-03".to_string(),
            selected_size: Some("M".to_string()),
            selected_color: None,
        }],
        subtotal: 100.0,
        shipping: 10.0,
        tax: 8.0,
        total: 118.0,
        shipping_info: ShippingInfo {
            name: "Rue Calder".to_string(),
            address: "4 Quay Rd".to_string(),
            city: "Leeds".to_string(),
            postal_code: "LS1 4AP".to_string(),
            country: "UK".to_string(),
            method: "Standard".to_string(),
            ..ShippingInfo::default()
        },
        payment_method: Some("Visa ending 4242".to_string()),
        timeline: vec![],
        notes: None,
    }
}

pub(crate) fn ids(orders: &[Order]) -> Vec<&str> {
    orders.iter().map(|o| o.id.as_str()).collect()
}
