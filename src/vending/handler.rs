//! Pure vending handlers.
//!
//! `handle` is the whole state table: given the current state, the balance,
//! the catalog and an event, it returns the outcome and the new balance. It
//! never touches the machine; `VendingMachine` applies the step.

use crate::core::{Money, Outcome};
use crate::vending::catalog::{Catalog, ProductId};
use crate::vending::rejection::Rejection;
use crate::vending::state::VendingState;
use serde::{Deserialize, Serialize};
use tracing::debug;

/// An operation a customer can perform.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub enum VendingEvent {
    InsertMoney(Money),
    SelectProduct(ProductId),
    DispenseProduct,
}

impl VendingEvent {
    /// Operation name used in the transition history.
    pub fn operation(&self) -> &'static str {
        match self {
            Self::InsertMoney(_) => "insert_money",
            Self::SelectProduct(_) => "select_product",
            Self::DispenseProduct => "dispense_product",
        }
    }
}

pub type VendingOutcome = Outcome<VendingState, Rejection>;

#[derive(Clone, Debug, PartialEq)]
pub(crate) struct Step {
    pub outcome: VendingOutcome,
    pub balance: Money,
}

impl Step {
    fn reject(state: &VendingState, balance: Money, reason: Rejection) -> Self {
        Self {
            outcome: Outcome::Rejected {
                state: state.clone(),
                reason,
            },
            balance,
        }
    }
}

pub(crate) fn handle(
    state: &VendingState,
    balance: Money,
    catalog: &Catalog,
    event: VendingEvent,
) -> Step {
    match (state, event) {
        (VendingState::NoMoney, VendingEvent::InsertMoney(amount)) => Step {
            outcome: Outcome::Moved {
                from: VendingState::NoMoney,
                to: VendingState::MoneyInserted,
                message: inserted(amount),
            },
            balance: balance + amount,
        },
        (_, VendingEvent::InsertMoney(amount)) => Step {
            outcome: Outcome::Held {
                state: state.clone(),
                message: inserted(amount),
            },
            balance: balance + amount,
        },

        (VendingState::NoMoney, _) => Step::reject(state, balance, Rejection::InsertMoneyFirst),

        (VendingState::MoneyInserted, VendingEvent::SelectProduct(id)) => {
            match catalog.affordable(id, balance) {
                Some(product) => Step {
                    outcome: Outcome::Moved {
                        from: VendingState::MoneyInserted,
                        to: VendingState::ProductSelected {
                            id,
                            product: product.clone(),
                        },
                        message: format!("You selected {}.", product.name),
                    },
                    balance,
                },
                None => {
                    match catalog.get(id) {
                        Some(product) => debug!(
                            product = %id,
                            price = %product.price,
                            balance = %balance,
                            "selection refused: insufficient funds"
                        ),
                        None => debug!(product = %id, "selection refused: unknown product"),
                    }
                    Step::reject(state, balance, Rejection::InvalidSelection)
                }
            }
        }
        (VendingState::MoneyInserted, VendingEvent::DispenseProduct) => {
            Step::reject(state, balance, Rejection::SelectProductFirst)
        }

        (VendingState::ProductSelected { .. }, VendingEvent::SelectProduct(_)) => {
            Step::reject(state, balance, Rejection::AlreadySelected)
        }
        (VendingState::ProductSelected { product, .. }, VendingEvent::DispenseProduct) => Step {
            outcome: Outcome::Moved {
                from: state.clone(),
                to: VendingState::NoMoney,
                message: format!("Dispensing {}.", product.name),
            },
            balance: balance - product.price,
        },
    }
}

fn inserted(amount: Money) -> String {
    format!("You inserted ${amount}.")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::vending::catalog::Product;

    fn coke_selected() -> VendingState {
        VendingState::ProductSelected {
            id: ProductId(1),
            product: Product::new("Coke", 1.5),
        }
    }

    #[test]
    fn first_deposit_leaves_no_money() {
        let step = handle(
            &VendingState::NoMoney,
            Money::ZERO,
            &Catalog::standard(),
            VendingEvent::InsertMoney(Money::new(2.0)),
        );

        assert_eq!(step.balance, Money::new(2.0));
        assert_eq!(
            step.outcome,
            Outcome::Moved {
                from: VendingState::NoMoney,
                to: VendingState::MoneyInserted,
                message: "You inserted $2.".to_string(),
            }
        );
    }

    #[test]
    fn later_deposits_hold_state() {
        for state in [VendingState::MoneyInserted, coke_selected()] {
            let step = handle(
                &state,
                Money::new(1.0),
                &Catalog::standard(),
                VendingEvent::InsertMoney(Money::new(0.5)),
            );
            assert_eq!(step.balance, Money::new(1.5));
            assert_eq!(step.outcome.state(), &state);
            assert_eq!(step.outcome.message(), "You inserted $0.5.");
            assert!(!step.outcome.is_transition());
        }
    }

    #[test]
    fn no_money_rejects_everything_else() {
        for event in [VendingEvent::SelectProduct(ProductId(1)), VendingEvent::DispenseProduct] {
            let step = handle(&VendingState::NoMoney, Money::ZERO, &Catalog::standard(), event);
            assert_eq!(step.balance, Money::ZERO);
            assert_eq!(
                step.outcome,
                Outcome::Rejected {
                    state: VendingState::NoMoney,
                    reason: Rejection::InsertMoneyFirst,
                }
            );
        }
    }

    #[test]
    fn selection_needs_a_known_affordable_product() {
        let catalog = Catalog::standard();
        let unknown = handle(
            &VendingState::MoneyInserted,
            Money::new(5.0),
            &catalog,
            VendingEvent::SelectProduct(ProductId(42)),
        );
        let too_dear = handle(
            &VendingState::MoneyInserted,
            Money::new(1.0),
            &catalog,
            VendingEvent::SelectProduct(ProductId(1)),
        );

        assert_eq!(unknown.outcome.message(), too_dear.outcome.message());
        assert_eq!(
            too_dear.outcome.message(),
            "Please select a valid product or insert more money."
        );
        assert_eq!(too_dear.balance, Money::new(1.0));
        assert_eq!(too_dear.outcome.state(), &VendingState::MoneyInserted);
    }

    #[test]
    fn exact_price_is_affordable() {
        let step = handle(
            &VendingState::MoneyInserted,
            Money::new(1.5),
            &Catalog::standard(),
            VendingEvent::SelectProduct(ProductId(1)),
        );

        assert_eq!(step.outcome.state(), &coke_selected());
        assert_eq!(step.outcome.message(), "You selected Coke.");
        assert_eq!(step.balance, Money::new(1.5));
    }

    #[test]
    fn dispense_charges_the_selected_price() {
        let step = handle(
            &coke_selected(),
            Money::new(2.0),
            &Catalog::standard(),
            VendingEvent::DispenseProduct,
        );

        assert_eq!(step.balance, Money::new(0.5));
        assert_eq!(step.outcome.state(), &VendingState::NoMoney);
        assert_eq!(step.outcome.message(), "Dispensing Coke.");
    }

    #[test]
    fn out_of_order_requests_are_rejected() {
        let catalog = Catalog::standard();
        let early = handle(
            &VendingState::MoneyInserted,
            Money::new(1.0),
            &catalog,
            VendingEvent::DispenseProduct,
        );
        let twice = handle(
            &coke_selected(),
            Money::new(2.0),
            &catalog,
            VendingEvent::SelectProduct(ProductId(2)),
        );

        assert_eq!(early.outcome.message(), "Please select a product first.");
        assert_eq!(twice.outcome.message(), "You have already selected a product.");
        assert_eq!(twice.outcome.state(), &coke_selected());
    }

    #[test]
    fn operation_names() {
        assert_eq!(VendingEvent::InsertMoney(Money::ZERO).operation(), "insert_money");
        assert_eq!(VendingEvent::SelectProduct(ProductId(1)).operation(), "select_product");
        assert_eq!(VendingEvent::DispenseProduct.operation(), "dispense_product");
    }
}
