//! Static material reference data.
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use crate::{EngineError, ResultEngine};

/// A sheet material the shop stocks, priced per square inch.
#[derive(Clone, Debug, PartialEq)]
pub struct Material {
    pub category: String,
    pub product: String,
    pub price_per_sq_in: Decimal,
}

impl Material {
    pub fn new(category: &str, product: &str, price_per_sq_in: Decimal) -> Self {
        Self {
            category: category.to_string(),
            product: product.to_string(),
            price_per_sq_in,
        }
    }
}

/// Ordered material list, fixed at startup.
///
/// Product names are unique; lookups return the first match. The closing
/// "None" entry is a sentinel meaning "no material charge".
#[derive(Clone, Debug, PartialEq)]
pub struct MaterialCatalog {
    materials: Vec<Material>,
}

impl MaterialCatalog {
    pub fn new(materials: Vec<Material>) -> Self {
        Self { materials }
    }

    /// The catalog the shop currently quotes from.
    pub fn standard() -> Self {
        Self::new(vec![
            Material::new("Acrylic", "Clear Acrylic - 3mm", dec!(1.25)),
            Material::new("Acrylic", "Clear Acrylic - 4.5mm", dec!(1.91)),
            Material::new("Acrylic", "Clear Acrylic - 6mm", dec!(2.11)),
            Material::new("Acrylic", "Black Acrylic - 3mm", dec!(1.45)),
            Material::new("Acrylic", "Colored Acrylic - 3mm", dec!(3.10)),
            Material::new("Wood", "Basswood - 3mm", dec!(0.70)),
            Material::new("Wood", "Basswood - 6mm", dec!(1.68)),
            Material::new("None", "None", dec!(0.00)),
        ])
    }

    /// All materials, in insertion order.
    pub fn materials(&self) -> &[Material] {
        &self.materials
    }

    /// First entry whose product name matches exactly (case sensitive).
    pub fn find_by_product(&self, product: &str) -> ResultEngine<&Material> {
        self.materials
            .iter()
            .find(|material| material.product == product)
            .ok_or_else(|| EngineError::MaterialNotFound(product.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn standard_catalog_preserves_insertion_order() {
        let catalog = MaterialCatalog::standard();
        let materials = catalog.materials();
        assert_eq!(materials.len(), 8);
        assert_eq!(materials[0].product, "Clear Acrylic - 3mm");
        assert_eq!(materials[7].product, "None");
        assert_eq!(materials[7].price_per_sq_in, Decimal::ZERO);
    }

    #[test]
    fn find_by_product_matches_exactly() {
        let catalog = MaterialCatalog::standard();
        let material = catalog.find_by_product("Basswood - 3mm").unwrap();
        assert_eq!(material.category, "Wood");
        assert_eq!(material.price_per_sq_in, dec!(0.70));
    }

    #[test]
    fn find_by_product_is_case_sensitive() {
        let catalog = MaterialCatalog::standard();
        assert_eq!(
            catalog.find_by_product("basswood - 3mm"),
            Err(EngineError::MaterialNotFound("basswood - 3mm".to_string()))
        );
    }
}
