use rust_decimal::Decimal;

use crate::models::{AccountKind, AccountView};

/// Multi-line detail block shown for a single account.
pub fn account_details(view: &AccountView) -> String {
    let detail = match view.kind {
        AccountKind::Saving { interest_rate } => {
            format!("Interest  : {}%", (interest_rate * Decimal::ONE_HUNDRED).normalize())
        }
        AccountKind::Current { overdraft_limit } => format!("Overdraft : {overdraft_limit}")
    };

    format!(
        "Account No: {} ({})\nOwner     : {}\nBalance   : {}\n{}",
        view.account_number,
        view.account_type(),
        view.owner_name,
        view.balance,
        detail
    )
}

/// One line per account for listings, e.g. `[S] 1001 - Alice (100.00)`.
pub fn account_summary(view: &AccountView) -> String {
    format!("[{}] {} - {} ({})", view.account_type().code(), view.account_number, view.owner_name, view.balance)
}
