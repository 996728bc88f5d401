//! Vending machine state tags.

use crate::core::State;
use crate::vending::catalog::{Product, ProductId};
use serde::{Deserialize, Serialize};

/// Which handler a vending machine is currently delegating to.
///
/// The selected product travels inside `ProductSelected`, so a machine holds
/// a selection exactly when it is in that state.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub enum VendingState {
    NoMoney,
    MoneyInserted,
    ProductSelected { id: ProductId, product: Product },
}

impl VendingState {
    pub fn selected_product(&self) -> Option<&Product> {
        match self {
            Self::ProductSelected { product, .. } => Some(product),
            Self::NoMoney | Self::MoneyInserted => None,
        }
    }

    pub fn selected_id(&self) -> Option<ProductId> {
        match self {
            Self::ProductSelected { id, .. } => Some(*id),
            Self::NoMoney | Self::MoneyInserted => None,
        }
    }
}

impl State for VendingState {
    fn name(&self) -> &str {
        match self {
            Self::NoMoney => "NoMoney",
            Self::MoneyInserted => "MoneyInserted",
            Self::ProductSelected { .. } => "ProductSelected",
        }
    }
}
