//! The vending machine context.

use crate::core::{Console, Money, Report, State, StateHistory, StateTransition};
use crate::vending::catalog::{Catalog, Product, ProductId};
use crate::vending::handler::{self, Step, VendingEvent, VendingOutcome};
use crate::vending::state::VendingState;
use tracing::{debug, warn};

/// A vending machine holding a balance, a fixed catalog, and its current
/// state.
///
/// Every operation forwards to the handler for the current state and
/// reports one line. Invalid requests are rejected without side effects.
///
/// ```rust
/// use statewise::core::Money;
/// use statewise::vending::{Catalog, ProductId, VendingMachine, VendingState};
///
/// let mut machine = VendingMachine::with_reporter(Catalog::standard(), Vec::new());
/// machine.insert_money(2.0);
/// machine.select_product(ProductId(1));
/// machine.dispense_product();
///
/// assert_eq!(machine.balance(), Money::new(0.5));
/// assert_eq!(machine.state(), &VendingState::NoMoney);
/// assert_eq!(
///     machine.reporter(),
///     &["You inserted $2.", "You selected Coke.", "Dispensing Coke."]
/// );
/// ```
#[derive(Debug)]
pub struct VendingMachine<R: Report = Console> {
    state: VendingState,
    balance: Money,
    catalog: Catalog,
    history: StateHistory<VendingState>,
    reporter: R,
}

impl VendingMachine<Console> {
    /// Create a machine that prints to stdout.
    pub fn new(catalog: Catalog) -> Self {
        Self::with_reporter(catalog, Console)
    }
}

impl<R: Report> VendingMachine<R> {
    pub fn with_reporter(catalog: Catalog, reporter: R) -> Self {
        Self {
            state: VendingState::NoMoney,
            balance: Money::ZERO,
            catalog,
            history: StateHistory::new(),
            reporter,
        }
    }

    pub(crate) fn from_parts(
        state: VendingState,
        balance: Money,
        catalog: Catalog,
        history: StateHistory<VendingState>,
        reporter: R,
    ) -> Self {
        Self {
            state,
            balance,
            catalog,
            history,
            reporter,
        }
    }

    /// Add money to the balance.
    ///
    /// Any amount is accepted, zero and negative included.
    pub fn insert_money(&mut self, amount: impl Into<Money>) -> VendingOutcome {
        let amount = amount.into();
        if amount.is_negative() {
            warn!(amount = %amount, "accepting a negative deposit");
        }
        self.dispatch(VendingEvent::InsertMoney(amount))
    }

    pub fn select_product(&mut self, id: ProductId) -> VendingOutcome {
        self.dispatch(VendingEvent::SelectProduct(id))
    }

    pub fn dispense_product(&mut self) -> VendingOutcome {
        self.dispatch(VendingEvent::DispenseProduct)
    }

    /// Forward an event to the current state's handler and apply its step.
    pub fn dispatch(&mut self, event: VendingEvent) -> VendingOutcome {
        let step = handler::handle(&self.state, self.balance, &self.catalog, event);
        self.apply(event, step)
    }

    pub fn state(&self) -> &VendingState {
        &self.state
    }

    pub fn balance(&self) -> Money {
        self.balance
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn selected_product(&self) -> Option<&Product> {
        self.state.selected_product()
    }

    pub fn history(&self) -> &StateHistory<VendingState> {
        &self.history
    }

    pub fn reporter(&self) -> &R {
        &self.reporter
    }

    pub fn into_reporter(self) -> R {
        self.reporter
    }

    pub(crate) fn set_state(&mut self, state: VendingState) {
        self.state = state;
    }

    fn apply(&mut self, event: VendingEvent, step: Step) -> VendingOutcome {
        let Step { outcome, balance } = step;
        match &outcome {
            VendingOutcome::Moved { from, to, .. } => {
                debug!(
                    from = from.name(),
                    to = to.name(),
                    trigger = event.operation(),
                    balance = %balance,
                    "vending state changed"
                );
                self.history.push(StateTransition::now(
                    from.clone(),
                    to.clone(),
                    event.operation(),
                ));
                self.set_state(to.clone());
            }
            VendingOutcome::Held { .. } => {}
            VendingOutcome::Rejected { state, reason } => {
                debug!(
                    state = state.name(),
                    trigger = event.operation(),
                    reason = ?reason,
                    "vending request rejected"
                );
            }
        }
        self.balance = balance;
        self.reporter.line(&outcome.message());
        outcome
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::vending::rejection::Rejection;

    fn machine() -> VendingMachine<Vec<String>> {
        VendingMachine::with_reporter(Catalog::standard(), Vec::new())
    }

    #[test]
    fn starts_idle_and_empty() {
        let machine = machine();
        assert_eq!(machine.state(), &VendingState::NoMoney);
        assert_eq!(machine.balance(), Money::ZERO);
        assert!(machine.selected_product().is_none());
        assert!(machine.history().is_empty());
    }

    #[test]
    fn full_purchase_cycle() {
        let mut machine = machine();

        machine.insert_money(2.0);
        assert_eq!(machine.balance(), Money::new(2.0));
        assert_eq!(machine.state(), &VendingState::MoneyInserted);

        machine.select_product(ProductId(1));
        assert_eq!(machine.selected_product(), Some(&Product::new("Coke", 1.5)));
        assert_eq!(machine.state().name(), "ProductSelected");

        machine.dispense_product();
        assert_eq!(machine.balance(), Money::new(0.5));
        assert_eq!(machine.state(), &VendingState::NoMoney);
        assert!(machine.selected_product().is_none());

        let triggers: Vec<&str> = machine
            .history()
            .transitions()
            .iter()
            .map(|t| t.trigger.as_str())
            .collect();
        assert_eq!(triggers, vec!["insert_money", "select_product", "dispense_product"]);
    }

    #[test]
    fn selecting_without_money_is_rejected() {
        let mut machine = machine();
        let outcome = machine.select_product(ProductId(1));

        assert_eq!(
            outcome,
            VendingOutcome::Rejected {
                state: VendingState::NoMoney,
                reason: Rejection::InsertMoneyFirst,
            }
        );
        assert_eq!(machine.balance(), Money::ZERO);
        assert!(machine.history().is_empty());
        assert_eq!(machine.into_reporter(), vec!["Please insert money first."]);
    }

    #[test]
    fn leftover_balance_survives_the_cycle() {
        let mut machine = machine();
        machine.insert_money(3.0);
        machine.select_product(ProductId(2));
        machine.dispense_product();

        assert_eq!(machine.balance(), Money::new(2.0));
        assert_eq!(machine.state(), &VendingState::NoMoney);

        // NoMoney is a state name, not a statement about the balance
        let outcome = machine.select_product(ProductId(2));
        assert!(outcome.is_rejected());
        assert_eq!(machine.balance(), Money::new(2.0));
    }

    #[test]
    fn zero_and_negative_deposits_are_accepted() {
        let mut zero = machine();
        zero.insert_money(0.0);
        assert_eq!(zero.state(), &VendingState::MoneyInserted);
        assert_eq!(zero.balance(), Money::ZERO);

        let mut negative = machine();
        let outcome = negative.insert_money(-1.0);
        assert_eq!(outcome.message(), "You inserted $-1.");
        assert_eq!(negative.state(), &VendingState::MoneyInserted);
        assert_eq!(negative.balance(), Money::new(-1.0));
    }

    #[test]
    fn infinite_deposit_is_reported_by_name() {
        let mut machine = machine();
        let outcome = machine.insert_money(f64::INFINITY);
        assert_eq!(outcome.message(), "You inserted $Infinity.");
    }

    #[test]
    fn many_purchases_grow_history_linearly() {
        let mut machine = VendingMachine::with_reporter(Catalog::standard(), ());
        for _ in 0..10_000 {
            machine.insert_money(1.0);
            machine.select_product(ProductId(2));
            machine.dispense_product();
        }

        assert_eq!(machine.history().len(), 30_000);
        assert_eq!(machine.balance(), Money::ZERO);
        assert_eq!(machine.state(), &VendingState::NoMoney);
    }

    #[test]
    fn deposits_after_selection_keep_the_selection() {
        let mut machine = machine();
        machine.insert_money(1.0);
        machine.select_product(ProductId(2));
        let outcome = machine.insert_money(0.25);

        assert!(!outcome.is_transition());
        assert_eq!(machine.balance(), Money::new(1.25));
        assert_eq!(machine.state().selected_id(), Some(ProductId(2)));
    }
}
