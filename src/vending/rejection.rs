//! Soft rejections reported to the customer.

use thiserror::Error;

/// Why an operation was refused.
///
/// A rejection is not a failure: the machine is left exactly as it was and
/// the message below is reported to the customer.
#[derive(Debug, Clone, Copy, Error, PartialEq, Eq)]
pub enum Rejection {
    #[error("Please insert money first.")]
    InsertMoneyFirst,

    /// Unknown product or not enough money; the two are not told apart.
    #[error("Please select a valid product or insert more money.")]
    InvalidSelection,

    #[error("Please select a product first.")]
    SelectProductFirst,

    #[error("You have already selected a product.")]
    AlreadySelected,
}
