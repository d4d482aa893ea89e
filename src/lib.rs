//! An in-memory bank of checking and savings accounts.
//!
//! The [`ledger`] holds the accounts and enforces the money rules. It can be
//! driven interactively through the [`console`], or by replaying a CSV script
//! of operations with [`run::run`].

pub mod console;
mod error_handler;
pub mod input;
pub mod ledger;
pub mod output;
pub mod run;
pub mod telemetry;
