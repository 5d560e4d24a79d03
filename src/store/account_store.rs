use crate::models::{Account, AccountType, AccountView};
use crate::storage::{AccountRecord, Storage};
use crate::store::StoreError;
use crate::types::{AccountNumber, Monetary, FIRST_ACCOUNT_NUMBER};
use tracing::{debug, info, warn};

/// Owns every account of the ledger and keeps the backing storage in step.
///
/// Accounts are kept in creation order. Every mutation rewrites the whole
/// storage, and the store rewrites it once more when it is dropped. A failed
/// write is logged and otherwise ignored: the in-memory state stays
/// authoritative for the rest of the process.
pub struct AccountStore<S: Storage> {
    accounts: Vec<Account>,
    next_account_number: AccountNumber,
    storage: S
}

impl<S: Storage> AccountStore<S> {
    /// Opens the store, restoring whatever the storage holds.
    ///
    /// Numbering resumes one past the highest account number found, and never
    /// goes below the first account number.
    ///
    /// # Errors
    /// Returns `StoreError::Storage` if existing records cannot be read.
    pub fn open(storage: S) -> Result<Self, StoreError> {
        let records = storage.load()?;
        let mut accounts: Vec<Account> = Vec::with_capacity(records.len());
        let mut next_account_number = FIRST_ACCOUNT_NUMBER;

        for record in records {
            if accounts.iter().any(|account| account.account_number() == record.account_number) {
                warn!("Skipping duplicate record for account [{}]", record.account_number);
                continue;
            }

            next_account_number = next_account_number.max(record.account_number.saturating_add(1));
            accounts.push(record.into_account());
        }

        info!("Opened account store with {} accounts", accounts.len());

        Ok(Self {
            accounts,
            next_account_number,
            storage
        })
    }

    /// The number the next created account will receive.
    pub fn next_account_number(&self) -> AccountNumber {
        self.next_account_number
    }

    /// Opens a new account and returns its number.
    ///
    /// # Errors
    /// Returns `StoreError` if:
    /// - The owner name is empty or contains `|` or a line break.
    /// - The initial deposit is negative.
    /// - Every account number has been used.
    pub fn create_account(&mut self, account_type: AccountType, owner_name: &str, initial_deposit: Monetary) -> Result<AccountNumber, StoreError> {
        let owner_name = owner_name.trim();

        if owner_name.is_empty() || owner_name.contains(['|', '\n', '\r']) {
            return Err(StoreError::InvalidOwnerName(owner_name.to_string()));
        }

        if initial_deposit.is_negative() {
            return Err(StoreError::NegativeInitialDeposit(initial_deposit));
        }

        let account_number = self.next_account_number;

        //NOTE: The counter saturates at the maximum, which is then handed out exactly once
        if self.find(account_number).is_some() {
            return Err(StoreError::AccountNumbersExhausted);
        }

        self.next_account_number = account_number.saturating_add(1);
        self.accounts.push(Account::new(account_number, account_type, owner_name, initial_deposit));

        info!("Opened {account_type} account [{account_number}] for [{owner_name}] with [{initial_deposit}]");

        self.persist();

        Ok(account_number)
    }

    /// Deposits into an existing account.
    ///
    /// A non-positive amount leaves the balance untouched and still succeeds.
    ///
    /// # Errors
    /// Returns `StoreError::AccountNotFound` for an unknown account number.
    pub fn deposit(&mut self, account_number: AccountNumber, amount: Monetary) -> Result<(), StoreError> {
        let account = self.find_mut(account_number)
            .ok_or(StoreError::AccountNotFound(account_number))?;

        let result = account.deposit(amount);

        debug!("Deposit of [{amount}] into account [{account_number}], balance [{}]", account.balance());

        self.persist();

        Ok(result?)
    }

    /// Withdraws from an existing account.
    ///
    /// The storage is rewritten whether or not the withdrawal succeeded.
    ///
    /// # Errors
    /// Returns `StoreError::AccountNotFound` for an unknown account number, or
    /// `StoreError::Account` when the account refuses the withdrawal.
    pub fn withdraw(&mut self, account_number: AccountNumber, amount: Monetary) -> Result<(), StoreError> {
        let account = self.find_mut(account_number)
            .ok_or(StoreError::AccountNotFound(account_number))?;

        let result = account.withdraw(amount);

        match &result {
            Ok(()) => debug!("Withdrawal of [{amount}] from account [{account_number}], balance [{}]", account.balance()),
            Err(error) => debug!("Withdrawal refused: {error}")
        }

        self.persist();

        Ok(result?)
    }

    pub fn find_and_describe(&self, account_number: AccountNumber) -> Option<AccountView> {
        self.find(account_number).map(Account::describe)
    }

    /// Snapshots every account in creation order.
    pub fn list_all(&self) -> Vec<AccountView> {
        self.accounts.iter().map(Account::describe).collect()
    }

    fn find(&self, account_number: AccountNumber) -> Option<&Account> {
        self.accounts.iter().find(|account| account.account_number() == account_number)
    }

    fn find_mut(&mut self, account_number: AccountNumber) -> Option<&mut Account> {
        self.accounts.iter_mut().find(|account| account.account_number() == account_number)
    }

    fn persist(&self) {
        let records: Vec<AccountRecord> = self.accounts.iter().map(AccountRecord::from_account).collect();

        if let Err(error) = self.storage.save(&records) {
            warn!("Account changes were not saved: {error}");
        }
    }
}

impl<S: Storage> Drop for AccountStore<S> {
    fn drop(&mut self) {
        self.persist();
    }
}
