//! Vending machine simulator.
//!
//! Three states and three operations:
//!
//! | State           | insert_money       | select_product                | dispense_product |
//! |-----------------|--------------------|-------------------------------|------------------|
//! | NoMoney         | add, MoneyInserted | reject                        | reject           |
//! | MoneyInserted   | add, stay          | ProductSelected if affordable | reject           |
//! | ProductSelected | add, stay          | reject                        | charge, NoMoney  |
//!
//! The table lives in the pure `handle` function; `VendingMachine` is the
//! shell that owns the balance and catalog and applies each step.

mod catalog;
mod handler;
mod machine;
mod rejection;
mod state;

pub use catalog::{Catalog, CatalogViolation, Product, ProductId};
pub use handler::{VendingEvent, VendingOutcome};
pub use machine::VendingMachine;
pub use rejection::Rejection;
pub use state::VendingState;
