//! Catalog management: the product form's fixed category list and
//! input validation.

use rust_decimal::Decimal;
use thiserror::Error;

/// Categories offered by the product form.
pub const PRODUCT_CATEGORIES: &[&str] = &[
    "Canapé",
    "Table",
    "Chaise",
    "Lit",
    "Armoire",
    "Bureau",
    "Étagère",
    "Autre",
];

/// Product form validation errors, surfaced to the operator as 400s.
#[derive(Debug, Error)]
pub enum ProductInputError {
    #[error("Le nom est requis")]
    MissingName,

    #[error("Le prix doit être positif")]
    NegativePrice,

    #[error("Catégorie inconnue: {0}")]
    UnknownCategory(String),
}

/// Validate a product create/update submission.
///
/// # Errors
///
/// Returns `ProductInputError` for a blank name, a negative price or a
/// category outside the fixed list.
pub fn validate_input(name: &str, category: &str, price: Decimal) -> Result<(), ProductInputError> {
    if name.trim().is_empty() {
        return Err(ProductInputError::MissingName);
    }
    if price < Decimal::ZERO {
        return Err(ProductInputError::NegativePrice);
    }
    if !PRODUCT_CATEGORIES.contains(&category) {
        return Err(ProductInputError::UnknownCategory(category.to_owned()));
    }
    Ok(())
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_input_accepts_known_category() {
        assert!(validate_input("Canapé d'angle", "Canapé", Decimal::new(29999, 2)).is_ok());
    }

    #[test]
    fn test_validate_input_accepts_zero_price() {
        assert!(validate_input("Échantillon", "Autre", Decimal::ZERO).is_ok());
    }

    #[test]
    fn test_validate_input_rejects_blank_name() {
        assert!(matches!(
            validate_input("   ", "Table", Decimal::ONE),
            Err(ProductInputError::MissingName)
        ));
    }

    #[test]
    fn test_validate_input_rejects_negative_price() {
        assert!(matches!(
            validate_input("Table", "Table", Decimal::NEGATIVE_ONE),
            Err(ProductInputError::NegativePrice)
        ));
    }

    #[test]
    fn test_validate_input_rejects_unknown_category() {
        assert!(matches!(
            validate_input("Tapis", "Tapis", Decimal::ONE),
            Err(ProductInputError::UnknownCategory(_))
        ));
    }

    #[test]
    fn test_category_list_is_the_form_order() {
        assert_eq!(PRODUCT_CATEGORIES.first(), Some(&"Canapé"));
        assert_eq!(PRODUCT_CATEGORIES.last(), Some(&"Autre"));
        assert_eq!(PRODUCT_CATEGORIES.len(), 8);
    }
}
