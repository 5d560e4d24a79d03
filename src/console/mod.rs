mod menu;
mod render;

pub use menu::Console;
pub use render::{account_details, account_summary};
