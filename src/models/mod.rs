mod account;
mod errors;

use std::fmt;
use std::fmt::{Display, Formatter};
use std::str::FromStr;

use rust_decimal::Decimal;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::types::{AccountNumber, Monetary};

pub use account::Account;
pub use errors::AccountError;

/// Behavioural subtype of an account, persisted as a single-character code.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Hash)]
pub enum AccountType {
    Saving,
    Current
}

impl AccountType {
    pub fn code(self) -> char {
        match self {
            AccountType::Saving => 'S',
            AccountType::Current => 'C'
        }
    }

    /// Decodes a persisted tag. Anything other than `S` is a current account.
    pub fn from_code(code: &str) -> Self {
        if code == "S" {
            AccountType::Saving
        } else {
            AccountType::Current
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            AccountType::Saving => "Saving",
            AccountType::Current => "Current"
        }
    }
}

impl Display for AccountType {
    fn fmt(&self, formatter: &mut Formatter<'_>) -> fmt::Result {
        formatter.write_str(self.label())
    }
}

impl FromStr for AccountType {
    type Err = String;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_lowercase().as_str() {
            "s" | "saving" => Ok(AccountType::Saving),
            "c" | "current" => Ok(AccountType::Current),
            other => Err(format!("Unknown account type '{other}', expected S (saving) or C (current)"))
        }
    }
}

impl Serialize for AccountType {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_char(self.code())
    }
}

impl<'de> Deserialize<'de> for AccountType {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let value = String::deserialize(deserializer)?;
        Ok(AccountType::from_code(&value))
    }
}

/// The variant-specific part of an account.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum AccountKind {
    /// Interest is recorded as a fraction (0.03 is 3%) and never accrued.
    Saving { interest_rate: Decimal },
    /// The balance may go down to `-overdraft_limit`.
    Current { overdraft_limit: Monetary }
}

impl AccountKind {
    /// The kind every account of the given type starts with.
    pub fn default_for(account_type: AccountType) -> Self {
        match account_type {
            AccountType::Saving => AccountKind::Saving { interest_rate: default_interest_rate() },
            AccountType::Current => AccountKind::Current { overdraft_limit: default_overdraft_limit() }
        }
    }

    pub fn account_type(&self) -> AccountType {
        match self {
            AccountKind::Saving { .. } => AccountType::Saving,
            AccountKind::Current { .. } => AccountType::Current
        }
    }
}

pub fn default_interest_rate() -> Decimal {
    Decimal::new(3, 2)
}

pub fn default_overdraft_limit() -> Monetary {
    Monetary::from_cents(50_000)
}

/// Read-only snapshot of an account, used for display.
#[derive(Debug, Clone, Eq, PartialEq)]
pub struct AccountView {
    pub account_number: AccountNumber,
    pub owner_name: String,
    pub balance: Monetary,
    pub kind: AccountKind
}

impl AccountView {
    pub fn account_type(&self) -> AccountType {
        self.kind.account_type()
    }
}
