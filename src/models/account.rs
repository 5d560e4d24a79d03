use crate::models::errors::AccountError;
use crate::models::{AccountKind, AccountType, AccountView};
use crate::types::{AccountNumber, Monetary};

/// Represents the state of a single bank account.
///
/// The account number is fixed at construction. The balance only changes
/// through [`Account::deposit`] and [`Account::withdraw`], and neither of
/// them lets it cross the floor of the account's variant: zero for saving
/// accounts, `-overdraft_limit` for current accounts.
#[derive(Debug, Clone)]
pub struct Account {
    account_number: AccountNumber,
    owner_name: String,
    balance: Monetary,
    kind: AccountKind
}

impl Account {
    /// Creates an account of the given type with the default interest rate or overdraft limit.
    pub fn new(account_number: AccountNumber, account_type: AccountType, owner_name: impl Into<String>, balance: Monetary) -> Self {
        Self::with_kind(account_number, AccountKind::default_for(account_type), owner_name, balance)
    }

    /// Creates an account with an explicit interest rate or overdraft limit.
    pub fn with_kind(account_number: AccountNumber, kind: AccountKind, owner_name: impl Into<String>, balance: Monetary) -> Self {
        Self {
            account_number,
            owner_name: owner_name.into(),
            balance,
            kind
        }
    }

    pub fn account_number(&self) -> AccountNumber {
        self.account_number
    }

    pub fn owner_name(&self) -> &str {
        &self.owner_name
    }

    pub fn balance(&self) -> Monetary {
        self.balance
    }

    pub fn account_type(&self) -> AccountType {
        self.kind.account_type()
    }

    /// Adds `amount` to the balance.
    ///
    /// A non-positive amount is ignored and reported as success, both variants
    /// behave the same way here.
    ///
    /// # Errors
    /// Returns `AccountError::Overflow` if the new balance cannot be represented.
    pub fn deposit(&mut self, amount: Monetary) -> Result<(), AccountError> {
        if !amount.is_positive() {
            return Ok(())
        }

        self.balance = self.balance.checked_add(amount)
            .ok_or_else(|| AccountError::overflow(self, amount))?;

        Ok(())
    }

    /// Subtracts `amount` from the balance if the variant's floor allows it.
    ///
    /// # Errors
    /// Returns `AccountError` if:
    /// - The amount is zero or negative.
    /// - A saving account would go below zero.
    /// - A current account would go below its overdraft limit.
    pub fn withdraw(&mut self, amount: Monetary) -> Result<(), AccountError> {
        if !amount.is_positive() {
            return Err(AccountError::non_positive_amount(self, amount))
        }

        let remaining = self.balance.checked_sub(amount)
            .ok_or_else(|| AccountError::overflow(self, amount))?;

        match self.kind {
            AccountKind::Saving { .. } => {
                if remaining.is_negative() {
                    return Err(AccountError::insufficient_funds(self, amount))
                }
            }
            AccountKind::Current { overdraft_limit } => {
                if remaining < -overdraft_limit {
                    return Err(AccountError::overdraft_limit_exceeded(self, amount, overdraft_limit))
                }
            }
        }

        self.balance = remaining;

        Ok(())
    }

    /// Takes a read-only snapshot of the account.
    pub fn describe(&self) -> AccountView {
        AccountView {
            account_number: self.account_number,
            owner_name: self.owner_name.clone(),
            balance: self.balance,
            kind: self.kind
        }
    }
}
