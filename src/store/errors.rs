use crate::models::AccountError;
use crate::storage::StorageError;
use crate::types::{AccountNumber, Monetary};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("Account [{0}] was not found")]
    AccountNotFound(AccountNumber),
    #[error(transparent)]
    Account(#[from] AccountError),
    #[error("Initial deposit [{0}] must not be negative")]
    NegativeInitialDeposit(Monetary),
    #[error("Owner name [{0:?}] must be non-empty and must not contain '|' or line breaks")]
    InvalidOwnerName(String),
    #[error("No account numbers are left to assign")]
    AccountNumbersExhausted,
    #[error(transparent)]
    Storage(#[from] StorageError)
}
