pub mod account;
pub mod ledger;
pub mod money;
pub mod operation;
pub mod process;

use rust_decimal::Decimal;

// Using named types doesn't provide any compiler help, but it helps a lot with
// readability.
// Consider the following, when creating the ledger HashMap:
// (1) accounts: HashMap<String, Account>
// (2) accounts: HashMap<AccountKey, Account>
// Implementation (2) is self-explanatory.
pub type AccountKey = String;
pub type CheckNumber = i32;

// I decided to use a decimal library instead of the built-in f64 type, to be
// safer when dealing with money, and making the decimal precision easier to
// deal with.
pub type Amount = Decimal;

/// Number of fractional digits accepted on input and shown on output.
pub const DISPLAY_PRECISION: u32 = 2;

const CHECKING_KEY_SUFFIX: &str = "CHECKING";
const SAVINGS_KEY_SUFFIX: &str = "SAVING";

pub use account::{Account, AccountError, Kind, Outcome};
pub use ledger::{account_key, Ledger};
pub use money::{InvalidAmount, Money};
