mod account_store;
mod errors;

pub use account_store::AccountStore;
pub use errors::StoreError;
