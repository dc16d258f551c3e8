//! API request handlers.

mod kitchen;
mod menu;
mod plans;
mod query;

pub use kitchen::*;
pub use menu::*;
pub use plans::*;
pub use query::*;
