use std::path::Path;

use super::*;

fn product(id: &str, price: f64) -> Product {
    Product {
        id: id.to_string(),
        name: format!("Product {id}"),
        description: String::new(),
        price,
        original_price: None,
        category: "home".to_string(),
        sub_category: String::new(),
        rating: 4.0,
        reviews: 0,
        featured: false,
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

fn category(id: &str, subcategories: Vec<Category>) -> Category {
    Category {
        id: id.to_string(),
        name: id.to_string(),
        count: 0,
        subcategories,
    }
}

fn catalog(products: Vec<Product>) -> CatalogFile {
    CatalogFile {
        categories: vec![category("all", vec![]), category("home", vec![])],
        products,
    }
}

#[test]
fn validate_accepts_valid_catalog() {
    let mut discounted = product("2", 80.0);
    discounted.original_price = Some(100.0);
    assert!(validate_catalog(&catalog(vec![product("1", 10.0), discounted])).is_ok());
}

#[test]
fn validate_rejects_duplicate_product_id() {
    let err = validate_catalog(&catalog(vec![product("1", 10.0), product("1", 12.0)])).unwrap_err();
    assert!(err.to_string().contains("duplicate product id"));
}

#[test]
fn validate_rejects_empty_product_id() {
    let err = validate_catalog(&catalog(vec![product(" ", 10.0)])).unwrap_err();
    assert!(err.to_string().contains("non-empty"));
}

#[test]
fn validate_rejects_empty_name() {
    let mut p = product("1", 10.0);
    p.name = String::new();
    let err = validate_catalog(&catalog(vec![p])).unwrap_err();
    assert!(err.to_string().contains("empty name"));
}

#[test]
fn validate_rejects_negative_price() {
    let err = validate_catalog(&catalog(vec![product("1", -5.0)])).unwrap_err();
    assert!(err.to_string().contains("invalid price"));
}

#[test]
fn validate_rejects_original_price_below_price() {
    let mut p = product("1", 50.0);
    p.original_price = Some(40.0);
    let err = validate_catalog(&catalog(vec![p])).unwrap_err();
    assert!(err.to_string().contains("below price"));
}

#[test]
fn validate_rejects_rating_out_of_range() {
    let mut p = product("1", 50.0);
    p.rating = 5.5;
    let err = validate_catalog(&catalog(vec![p])).unwrap_err();
    assert!(err.to_string().contains("rating 5.5"));
}

#[test]
fn validate_rejects_duplicate_category_ids() {
    let file = CatalogFile {
        categories: vec![category("man", vec![]), category("man", vec![])],
        products: vec![],
    };
    let err = validate_catalog(&file).unwrap_err();
    assert!(err.to_string().contains("duplicate category id"));
}

#[test]
fn validate_allows_same_subcategory_id_under_different_parents() {
    let file = CatalogFile {
        categories: vec![
            category("man", vec![category("shirts", vec![])]),
            category("woman", vec![category("shirts", vec![])]),
        ],
        products: vec![],
    };
    assert!(validate_catalog(&file).is_ok());
}

#[test]
fn validate_rejects_second_nesting_level() {
    let file = CatalogFile {
        categories: vec![category(
            "man",
            vec![category("shirts", vec![category("linen", vec![])])],
        )],
        products: vec![],
    };
    let err = validate_catalog(&file).unwrap_err();
    assert!(err.to_string().contains("only one level"));
}

#[test]
fn format_is_chosen_by_extension() {
    assert_eq!(
        CatalogFormat::from_path(Path::new("catalog.JSON")),
        CatalogFormat::Json
    );
    assert_eq!(
        CatalogFormat::from_path(Path::new("catalog.yaml")),
        CatalogFormat::Yaml
    );
    assert_eq!(CatalogFormat::from_path(Path::new("catalog")), CatalogFormat::Yaml);
}

#[test]
fn parse_catalog_reads_json() {
    let content = r#"{
        "categories": [{"id": "home", "name": "Home", "count": 1}],
        "products": [{"id": "1", "name": "Lamp", "description": "Brass lamp", "price": 40, "category": "home"}]
    }"#;
    let file = parse_catalog(content, CatalogFormat::Json).expect("valid json catalog");
    assert_eq!(file.products.len(), 1);
    assert_eq!(file.categories[0].name, "Home");
}

#[test]
fn parse_catalog_surfaces_yaml_errors() {
    let result = parse_catalog("products: [: broken", CatalogFormat::Yaml);
    assert!(matches!(result, Err(ConfigError::CatalogYaml(_))));
}

#[test]
fn load_catalog_missing_file_is_io_error() {
    let result = load_catalog(Path::new("/definitely/not/here/catalog.yaml"));
    assert!(matches!(result, Err(ConfigError::CatalogFileIo { .. })));
}

#[test]
fn load_catalog_from_real_file() {
    let path = Path::new(env!("CARGO_MANIFEST_DIR"))
        .join("..")
        .join("..")
        .join("config")
        .join("catalog.yaml");
    assert!(
        path.exists(),
        "catalog.yaml missing at {path:?}; required for this test"
    );
    let result = load_catalog(&path);
    assert!(result.is_ok(), "failed to load catalog.yaml: {result:?}");
    let catalog = result.unwrap();
    assert!(!catalog.products.is_empty());
    assert!(catalog.categories.iter().any(Category::is_sentinel));
}
