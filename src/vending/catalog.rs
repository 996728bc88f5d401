//! Product catalog.
//!
//! The catalog is fixed when a machine is built and read-only afterwards.
//! Every way of obtaining one, deserialization included, goes through
//! `Catalog::validate`, which accumulates every problem with the entries
//! rather than stopping at the first.

use crate::builder::BuildError;
use crate::core::Money;
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, HashSet};
use std::fmt;
use stillwater::validation::Validation;
use stillwater::NonEmptyVec;
use thiserror::Error;

/// Identifier a customer types to pick a product.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ProductId(pub u32);

impl fmt::Display for ProductId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<u32> for ProductId {
    fn from(id: u32) -> Self {
        Self(id)
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Product {
    pub name: String,
    pub price: Money,
}

impl Product {
    pub fn new(name: impl Into<String>, price: impl Into<Money>) -> Self {
        Self {
            name: name.into(),
            price: price.into(),
        }
    }
}

/// Problem with a single catalog entry.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum CatalogViolation {
    #[error("Product id {0} appears more than once")]
    DuplicateId(ProductId),

    #[error("Product {0} has a blank name")]
    BlankName(ProductId),

    #[error("Product {id} has an invalid price ({price})")]
    InvalidPrice { id: ProductId, price: Money },

    #[error("Catalog has no products")]
    NoProducts,
}

/// A non-empty set of well-formed products.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(
    try_from = "BTreeMap<ProductId, Product>",
    into = "BTreeMap<ProductId, Product>"
)]
pub struct Catalog {
    products: BTreeMap<ProductId, Product>,
}

impl Catalog {
    /// The stock catalog: Coke, Water and Chips.
    pub fn standard() -> Self {
        let products = [
            (ProductId(1), Product::new("Coke", 1.5)),
            (ProductId(2), Product::new("Water", 1.0)),
            (ProductId(3), Product::new("Chips", 1.25)),
        ];
        Self {
            products: products.into_iter().collect(),
        }
    }

    /// Validate entries, accumulating ALL violations.
    pub fn validate<I>(entries: I) -> Validation<Catalog, NonEmptyVec<CatalogViolation>>
    where
        I: IntoIterator<Item = (ProductId, Product)>,
    {
        let entries: Vec<(ProductId, Product)> = entries.into_iter().collect();
        let mut seen = HashSet::new();
        let mut checks: Vec<Validation<(), NonEmptyVec<CatalogViolation>>> = Vec::new();

        if entries.is_empty() {
            checks.push(Validation::fail(CatalogViolation::NoProducts));
        }

        for (id, product) in &entries {
            if !seen.insert(*id) {
                checks.push(Validation::fail(CatalogViolation::DuplicateId(*id)));
            }
            if product.name.trim().is_empty() {
                checks.push(Validation::fail(CatalogViolation::BlankName(*id)));
            }
            if !product.price.is_finite() || product.price.is_negative() {
                checks.push(Validation::fail(CatalogViolation::InvalidPrice {
                    id: *id,
                    price: product.price,
                }));
            }
        }

        match Validation::all_vec(checks) {
            Validation::Success(_) => Validation::Success(Catalog {
                products: entries.into_iter().collect(),
            }),
            Validation::Failure(violations) => Validation::Failure(violations),
        }
    }

    /// Validate entries into a catalog, mapping failures to `BuildError`.
    pub(crate) fn from_entries<I>(entries: I) -> Result<Catalog, BuildError>
    where
        I: IntoIterator<Item = (ProductId, Product)>,
    {
        let entries: Vec<(ProductId, Product)> = entries.into_iter().collect();
        if entries.is_empty() {
            return Err(BuildError::EmptyCatalog);
        }

        match Catalog::validate(entries) {
            Validation::Success(catalog) => Ok(catalog),
            Validation::Failure(violations) => Err(BuildError::InvalidCatalog(
                violations.iter().cloned().collect(),
            )),
        }
    }

    pub fn get(&self, id: ProductId) -> Option<&Product> {
        self.products.get(&id)
    }

    /// The product under `id`, provided `balance` covers its price.
    ///
    /// Existence and affordability form one precondition: a missing product
    /// and an unaffordable one both yield `None`.
    pub fn affordable(&self, id: ProductId, balance: Money) -> Option<&Product> {
        self.get(id).filter(|product| product.price <= balance)
    }

    pub fn iter(&self) -> impl Iterator<Item = (ProductId, &Product)> {
        self.products.iter().map(|(id, product)| (*id, product))
    }

    pub fn len(&self) -> usize {
        self.products.len()
    }

    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }
}

impl TryFrom<BTreeMap<ProductId, Product>> for Catalog {
    type Error = BuildError;

    fn try_from(products: BTreeMap<ProductId, Product>) -> Result<Self, Self::Error> {
        Catalog::from_entries(products)
    }
}

impl From<Catalog> for BTreeMap<ProductId, Product> {
    fn from(catalog: Catalog) -> Self {
        catalog.products
    }
}
