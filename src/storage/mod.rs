mod errors;
mod record_file;

use serde::{Deserialize, Serialize};

use crate::models::{Account, AccountType};
use crate::types::{AccountNumber, Monetary};

pub use errors::StorageError;
pub use record_file::RecordFile;

/// The durable fields of one account.
///
/// Interest rate and overdraft limit are not part of the record, an account
/// restored from one always carries the defaults of its type.
#[derive(Debug, Clone, Eq, PartialEq, Serialize, Deserialize)]
pub struct AccountRecord {
    pub account_number: AccountNumber,
    pub account_type: AccountType,
    pub owner_name: String,
    pub balance: Monetary
}

impl AccountRecord {
    pub fn from_account(account: &Account) -> Self {
        Self {
            account_number: account.account_number(),
            account_type: account.account_type(),
            owner_name: account.owner_name().to_string(),
            balance: account.balance()
        }
    }

    pub fn into_account(self) -> Account {
        Account::new(self.account_number, self.account_type, self.owner_name, self.balance)
    }
}

/// Backing store for the full set of account records.
///
/// `load` is called once when a store opens, `save` replaces everything
/// previously saved.
pub trait Storage {
    fn load(&self) -> Result<Vec<AccountRecord>, StorageError>;
    fn save(&self, records: &[AccountRecord]) -> Result<(), StorageError>;
}
