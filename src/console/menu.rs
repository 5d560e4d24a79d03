use std::io::{BufRead, Write};
use std::str::FromStr;

use anyhow::Result;
use tracing::debug;

use crate::console::{account_details, account_summary};
use crate::models::AccountType;
use crate::storage::Storage;
use crate::store::{AccountStore, StoreError};
use crate::types::{AccountNumber, Monetary};

const MENU: &str = "
==============================================
            BANK MANAGEMENT SYSTEM
==============================================

  1. Open New Account
  2. Deposit Money
  3. Withdraw Money
  4. Show Account Details
  5. List All Accounts
  6. Exit
";

enum Flow {
    Continue,
    Exit
}

enum Answer<T> {
    Given(T),
    Invalid,
    EndOfInput
}

/// Interactive menu driving an [`AccountStore`].
///
/// The console owns its input and output streams for its whole lifetime and
/// hands the output back from [`Console::finish`]. Operator input is checked
/// here before it reaches the store.
pub struct Console<R, W> {
    input: R,
    output: W
}

impl<R: BufRead, W: Write> Console<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    /// Runs the menu until the operator exits or the input ends.
    pub fn run<S: Storage>(&mut self, store: &mut AccountStore<S>) -> Result<()> {
        writeln!(self.output, "WELCOME TO BANK MANAGEMENT SYSTEM")?;

        loop {
            write!(self.output, "{MENU}")?;

            let Some(choice) = self.prompt("\n Select option: ")? else {
                break;
            };

            let flow = match choice.as_str() {
                "1" => self.open_account(store)?,
                "2" => self.deposit(store)?,
                "3" => self.withdraw(store)?,
                "4" => self.show_account(store)?,
                "5" => self.list_accounts(store)?,
                "6" => {
                    writeln!(self.output, "\nExiting...")?;
                    Flow::Exit
                }
                _ => {
                    writeln!(self.output, "Invalid choice.")?;
                    Flow::Continue
                }
            };

            if let Flow::Exit = flow {
                break;
            }
        }

        self.output.flush()?;

        Ok(())
    }

    /// Flushes and releases the output stream.
    pub fn finish(mut self) -> Result<W> {
        self.output.flush()?;
        Ok(self.output)
    }

    fn open_account<S: Storage>(&mut self, store: &mut AccountStore<S>) -> Result<Flow> {
        writeln!(self.output, "\nOpen New Account")?;

        let Some(owner_name) = self.prompt("Enter owner name: ")? else {
            return Ok(Flow::Exit);
        };
        let Some(account_type) = self.prompt("Account type (S = Saving, C = Current): ")? else {
            return Ok(Flow::Exit);
        };
        let Some(initial_deposit) = self.prompt("Initial deposit amount: ")? else {
            return Ok(Flow::Exit);
        };

        let Ok(account_type) = AccountType::from_str(&account_type) else {
            writeln!(self.output, "Invalid account type.")?;
            return Ok(Flow::Continue);
        };

        let initial_deposit = match Monetary::from_str(&initial_deposit) {
            Ok(amount) if !amount.is_negative() => amount,
            _ => {
                writeln!(self.output, "Invalid amount.")?;
                return Ok(Flow::Continue);
            }
        };

        match store.create_account(account_type, &owner_name, initial_deposit) {
            Ok(account_number) => {
                writeln!(self.output, "\nAccount created successfully. Account Number: {account_number}")?;
            }
            Err(error) => {
                writeln!(self.output, "Account could not be created: {error}")?;
            }
        }

        Ok(Flow::Continue)
    }

    fn deposit<S: Storage>(&mut self, store: &mut AccountStore<S>) -> Result<Flow> {
        writeln!(self.output, "\nDeposit Money")?;

        let (account_number, amount) = match self.prompt_transfer("Amount to deposit: ")? {
            Answer::Given(answer) => answer,
            Answer::Invalid => return Ok(Flow::Continue),
            Answer::EndOfInput => return Ok(Flow::Exit)
        };

        match store.deposit(account_number, amount) {
            Ok(()) => writeln!(self.output, "Deposit successful.")?,
            Err(StoreError::AccountNotFound(_)) => writeln!(self.output, "Account not found.")?,
            Err(error) => writeln!(self.output, "Deposit failed: {error}")?
        }

        Ok(Flow::Continue)
    }

    fn withdraw<S: Storage>(&mut self, store: &mut AccountStore<S>) -> Result<Flow> {
        writeln!(self.output, "\nWithdraw Money")?;

        let (account_number, amount) = match self.prompt_transfer("Amount to withdraw: ")? {
            Answer::Given(answer) => answer,
            Answer::Invalid => return Ok(Flow::Continue),
            Answer::EndOfInput => return Ok(Flow::Exit)
        };

        match store.withdraw(account_number, amount) {
            Ok(()) => writeln!(self.output, "Withdrawal successful.")?,
            Err(StoreError::AccountNotFound(_)) => writeln!(self.output, "Account not found.")?,
            Err(error) => writeln!(self.output, "Withdrawal failed: {error}")?
        }

        Ok(Flow::Continue)
    }

    fn show_account<S: Storage>(&mut self, store: &AccountStore<S>) -> Result<Flow> {
        writeln!(self.output, "\nShow Account Details")?;

        let Some(account_number) = self.prompt("Enter account number: ")? else {
            return Ok(Flow::Exit);
        };

        match account_number.parse::<AccountNumber>().ok().and_then(|number| store.find_and_describe(number)) {
            Some(view) => writeln!(self.output, "{}", account_details(&view))?,
            None => writeln!(self.output, "Account not found.")?
        }

        Ok(Flow::Continue)
    }

    fn list_accounts<S: Storage>(&mut self, store: &AccountStore<S>) -> Result<Flow> {
        writeln!(self.output, "\nAll Accounts:")?;

        for view in store.list_all() {
            writeln!(self.output, "{}", account_summary(&view))?;
        }

        Ok(Flow::Continue)
    }

    /// Asks for an account number and a strictly positive amount.
    fn prompt_transfer(&mut self, amount_label: &str) -> Result<Answer<(AccountNumber, Monetary)>> {
        let Some(account_number) = self.prompt("Enter account number: ")? else {
            return Ok(Answer::EndOfInput);
        };
        let Some(amount) = self.prompt(amount_label)? else {
            return Ok(Answer::EndOfInput);
        };

        let Ok(account_number) = account_number.parse::<AccountNumber>() else {
            writeln!(self.output, "Invalid account number.")?;
            return Ok(Answer::Invalid);
        };

        match Monetary::from_str(&amount) {
            Ok(amount) if amount.is_positive() => Ok(Answer::Given((account_number, amount))),
            _ => {
                writeln!(self.output, "Invalid amount.")?;
                Ok(Answer::Invalid)
            }
        }
    }

    fn prompt(&mut self, label: &str) -> Result<Option<String>> {
        write!(self.output, "{label}")?;
        self.output.flush()?;

        let mut line = String::new();

        if self.input.read_line(&mut line)? == 0 {
            debug!("Console input ended");
            return Ok(None);
        }

        Ok(Some(line.trim().to_string()))
    }
}
