//! Builder for constructing vending machines.

use crate::builder::error::BuildError;
use crate::core::{Console, Money, Report};
use crate::vending::{Catalog, Product, ProductId, VendingMachine};

/// Builder for vending machines with a fluent API.
///
/// ```rust
/// use statewise::builder::VendingMachineBuilder;
/// use statewise::core::State;
/// use statewise::vending::ProductId;
///
/// let mut machine = VendingMachineBuilder::new()
///     .product(1u32, "Coke", 1.5)
///     .product(2u32, "Water", 1.0)
///     .build_with(Vec::new())
///     .unwrap();
///
/// machine.insert_money(1.0);
/// machine.select_product(ProductId(2));
/// assert_eq!(machine.state().name(), "ProductSelected");
/// ```
#[derive(Clone, Debug, Default)]
pub struct VendingMachineBuilder {
    products: Vec<(ProductId, Product)>,
}

impl VendingMachineBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start from the stock catalog.
    pub fn standard() -> Self {
        Self::new().catalog(&Catalog::standard())
    }

    /// Add a product.
    pub fn product(
        mut self,
        id: impl Into<ProductId>,
        name: impl Into<String>,
        price: impl Into<Money>,
    ) -> Self {
        self.products.push((id.into(), Product::new(name, price)));
        self
    }

    /// Add every product of an existing catalog.
    pub fn catalog(mut self, catalog: &Catalog) -> Self {
        self.products
            .extend(catalog.iter().map(|(id, product)| (id, product.clone())));
        self
    }

    /// Validate the products into a catalog.
    /// Returns every violation found, not just the first.
    pub fn build_catalog(self) -> Result<Catalog, BuildError> {
        Catalog::from_entries(self.products)
    }

    /// Build a machine that prints to stdout.
    pub fn build(self) -> Result<VendingMachine<Console>, BuildError> {
        self.build_with(Console)
    }

    /// Build a machine reporting to `reporter`.
    pub fn build_with<R: Report>(self, reporter: R) -> Result<VendingMachine<R>, BuildError> {
        let catalog = self.build_catalog()?;
        Ok(VendingMachine::with_reporter(catalog, reporter))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::vending::{CatalogViolation, VendingState};

    #[test]
    fn builder_requires_products() {
        let result = VendingMachineBuilder::new().build_with(());
        assert!(matches!(result, Err(BuildError::EmptyCatalog)));
    }

    #[test]
    fn builder_reports_all_violations() {
        let result = VendingMachineBuilder::new()
            .product(1u32, "Coke", 1.5)
            .product(1u32, "", -2.0)
            .build_catalog();

        match result {
            Err(BuildError::InvalidCatalog(violations)) => {
                assert_eq!(violations.len(), 3);
                assert!(violations.contains(&CatalogViolation::DuplicateId(ProductId(1))));
                assert!(violations.contains(&CatalogViolation::BlankName(ProductId(1))));
            }
            other => panic!("Expected InvalidCatalog, got {other:?}"),
        }
    }

    #[test]
    fn standard_builder_matches_stock_catalog() {
        let catalog = VendingMachineBuilder::standard().build_catalog().unwrap();
        assert_eq!(catalog, Catalog::standard());
    }

    #[test]
    fn fluent_api_builds_machine() {
        let machine = VendingMachineBuilder::new()
            .product(10u32, "Tea", 0.75)
            .build_with(Vec::new())
            .unwrap();

        assert_eq!(machine.state(), &VendingState::NoMoney);
        assert_eq!(
            machine.catalog().get(ProductId(10)),
            Some(&Product::new("Tea", 0.75))
        );
    }
}
