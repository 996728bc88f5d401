//! Build errors for vending machine construction.

use crate::vending::CatalogViolation;
use thiserror::Error;

/// Errors that can occur when building a vending machine.
#[derive(Debug, Error, PartialEq)]
pub enum BuildError {
    #[error("No products defined. A catalog needs at least one product")]
    EmptyCatalog,

    #[error("Catalog rejected with {} violation(s): {}", .0.len(), summarize(.0))]
    InvalidCatalog(Vec<CatalogViolation>),
}

fn summarize(violations: &[CatalogViolation]) -> String {
    violations
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("; ")
}
