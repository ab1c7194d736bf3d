//! Transaction module - immutable billing records and their factory.

mod aggregate;
mod factory;

pub use aggregate::{
    Transaction, TransactionDetails, TransactionItem, TransactionOrigin, TransactionStatus,
    TransactionTotals,
};
pub use factory::{compute_totals, TransactionDraft, TransactionLine};
