mod errors;
mod monetary;
#[cfg(test)]
mod tests;

pub use monetary::Monetary;

pub type AccountNumber = u32;

/// The number handed to the first account of an empty ledger.
pub const FIRST_ACCOUNT_NUMBER: AccountNumber = 1001;
