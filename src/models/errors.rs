use crate::models::Account;
use crate::types::{AccountNumber, Monetary};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum AccountError {
    #[error("Amount [{amount}] must be positive for account [{account_number}]")]
    NonPositiveAmount {
        account_number: AccountNumber,
        amount: Monetary
    },
    #[error("Insufficient funds to withdraw [{amount}] from account [{account_number}] with balance [{balance}]")]
    InsufficientFunds {
        account_number: AccountNumber,
        balance: Monetary,
        amount: Monetary
    },
    #[error("Withdrawing [{amount}] from account [{account_number}] with balance [{balance}] exceeds the overdraft limit [{overdraft_limit}]")]
    OverdraftLimitExceeded {
        account_number: AccountNumber,
        balance: Monetary,
        amount: Monetary,
        overdraft_limit: Monetary
    },
    #[error("Numeric overflow applying [{amount}] to account [{account_number}]")]
    Overflow {
        account_number: AccountNumber,
        amount: Monetary
    }
}

impl AccountError {
    pub fn non_positive_amount(account: &Account, amount: Monetary) -> Self {
        Self::NonPositiveAmount {
            account_number: account.account_number(),
            amount
        }
    }

    pub fn insufficient_funds(account: &Account, amount: Monetary) -> Self {
        Self::InsufficientFunds {
            account_number: account.account_number(),
            balance: account.balance(),
            amount
        }
    }

    pub fn overdraft_limit_exceeded(account: &Account, amount: Monetary, overdraft_limit: Monetary) -> Self {
        Self::OverdraftLimitExceeded {
            account_number: account.account_number(),
            balance: account.balance(),
            amount,
            overdraft_limit
        }
    }

    pub fn overflow(account: &Account, amount: Monetary) -> Self {
        Self::Overflow {
            account_number: account.account_number(),
            amount
        }
    }
}
