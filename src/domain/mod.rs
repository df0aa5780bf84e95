//! Ledger domain entities and the traits they share.

pub mod account;
pub mod category;
pub mod common;
pub mod operation;

pub use account::Account;
pub use category::Category;
pub use common::{validate_name, Displayable, FlowKind, Identifiable};
pub use operation::Operation;
