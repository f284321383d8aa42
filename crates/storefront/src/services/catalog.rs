//! Catalog query service.
//!
//! The catalog is small: the whole product table is fetched newest-first
//! and filtered in memory. A backend failure degrades to an empty
//! catalog rather than an error page.

use cabella_backend::BackendClient;
use cabella_backend::db::ProductRepository;
use cabella_backend::models::Product;

/// Category sentinel meaning "no category filter".
pub const ALL_CATEGORIES: &str = "Tous";

/// Load every product, newest first.
///
/// On backend failure the error is logged and the catalog is treated as
/// empty; there is no retry.
pub async fn load_products(backend: &BackendClient) -> Vec<Product> {
    match ProductRepository::new(backend).list_newest_first().await {
        Ok(products) => products,
        Err(e) => {
            tracing::error!(error = %e, "failed to load products, showing empty catalog");
            Vec::new()
        }
    }
}

/// Category filter options: the sentinel followed by the distinct
/// categories in order of first appearance. Blank categories are
/// skipped.
#[must_use]
pub fn categories(products: &[Product]) -> Vec<String> {
    let mut out = vec![ALL_CATEGORIES.to_string()];
    for product in products {
        let category = product.category.trim();
        if !category.is_empty() && !out.iter().any(|c| c == category) {
            out.push(category.to_string());
        }
    }
    out
}

/// Apply the category and search filters.
///
/// Category is a passthrough when it is the sentinel, otherwise an exact
/// match. Search is a case-insensitive substring match against the name
/// or the description. Both are AND-composed and the input order is
/// preserved.
#[must_use]
pub fn filter<'p>(products: &'p [Product], category: &str, search: &str) -> Vec<&'p Product> {
    let needle = search.to_lowercase();
    products
        .iter()
        .filter(|p| category == ALL_CATEGORIES || p.category == category)
        .filter(|p| {
            if needle.is_empty() {
                return true;
            }
            p.name.to_lowercase().contains(&needle)
                || p.description
                    .as_deref()
                    .is_some_and(|d| d.to_lowercase().contains(&needle))
        })
        .collect()
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use chrono::Utc;
    use rust_decimal::Decimal;

    use cabella_core::ProductId;

    use super::*;

    fn product(name: &str, category: &str, description: Option<&str>) -> Product {
        Product {
            id: ProductId::new(uuid::Uuid::new_v4()),
            name: name.to_string(),
            category: category.to_string(),
            price: Decimal::new(9900, 2),
            description: description.map(str::to_owned),
            image_url: None,
            created_at: Utc::now(),
        }
    }

    fn fixture() -> Vec<Product> {
        vec![
            product("Canapé d'angle", "Canapé", Some("Tissu gris, convertible")),
            product("Table basse", "Table", None),
            product("Chaise scandinave", "Chaise", Some("Lot de deux")),
            product("Canapé 2 places", "Canapé", None),
        ]
    }

    #[test]
    fn test_categories_start_with_sentinel() {
        let cats = categories(&fixture());
        assert_eq!(cats, vec!["Tous", "Canapé", "Table", "Chaise"]);
    }

    #[test]
    fn test_categories_skip_blank() {
        let products = vec![product("Mystère", "  ", None), product("Lit", "Lit", None)];
        assert_eq!(categories(&products), vec!["Tous", "Lit"]);
    }

    #[test]
    fn test_filter_sentinel_passes_everything_through() {
        let products = fixture();
        let filtered = filter(&products, ALL_CATEGORIES, "");
        assert_eq!(filtered.len(), products.len());
    }

    #[test]
    fn test_filter_category_exact_match() {
        let products = fixture();
        let filtered = filter(&products, "Canapé", "");
        assert_eq!(filtered.len(), 2);
        assert!(filtered.iter().all(|p| p.category == "Canapé"));
    }

    #[test]
    fn test_filter_search_is_case_insensitive() {
        let products = fixture();
        let filtered = filter(&products, ALL_CATEGORIES, "TABLE");
        assert_eq!(filtered.len(), 1);
        assert_eq!(filtered[0].name, "Table basse");
    }

    #[test]
    fn test_filter_search_matches_description() {
        let products = fixture();
        let filtered = filter(&products, ALL_CATEGORIES, "convertible");
        assert_eq!(filtered.len(), 1);
        assert_eq!(filtered[0].name, "Canapé d'angle");
    }

    #[test]
    fn test_filter_category_and_search_compose() {
        let products = fixture();
        let filtered = filter(&products, "Canapé", "2 places");
        assert_eq!(filtered.len(), 1);
        assert_eq!(filtered[0].name, "Canapé 2 places");
    }

    #[test]
    fn test_filter_preserves_input_order() {
        let products = fixture();
        let filtered = filter(&products, ALL_CATEGORIES, "canapé");
        let names: Vec<&str> = filtered.iter().map(|p| p.name.as_str()).collect();
        assert_eq!(names, vec!["Canapé d'angle", "Canapé 2 places"]);
    }
}
