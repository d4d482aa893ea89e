pub mod account;
mod check;
mod deposit;
mod interest;
mod withdrawal;

pub use account::{Account, AccountError, Kind, Outcome};
