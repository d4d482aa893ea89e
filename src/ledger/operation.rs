use super::account::Kind;
use super::ledger::account_key;
use super::{AccountKey, Amount, CheckNumber};

#[derive(Debug, Clone, PartialEq)]
pub enum Type {
    Create,                            // Register a new, empty account.
    Deposit(Amount),                   // Add to the balance.
    Withdraw(Amount),                  // Remove from the balance, if there is enough.
    Interest,                          // Credit balance * interest rate.
    DepositCheck(Amount, CheckNumber), // Deposit, at most once per check number.
    CashCheck(Amount, CheckNumber),    // Withdraw, at most once per check number.
    Balance,                           // Read the balance only.
}

impl Type {
    pub fn name(&self) -> &'static str {
        match self {
            Type::Create => "create",
            Type::Deposit(_) => "deposit",
            Type::Withdraw(_) => "withdraw",
            Type::Interest => "interest",
            Type::DepositCheck(..) => "deposit_check",
            Type::CashCheck(..) => "cash_check",
            Type::Balance => "balance",
        }
    }
}

/// A single request against one account of the ledger.
#[derive(Debug, Clone, PartialEq)]
pub struct Operation {
    pub(super) op_type: Type,
    pub(super) username: String,
    pub(super) kind: Kind,
}

impl Operation {
    pub fn new(op_type: Type, username: &str, kind: Kind) -> Self {
        Self {
            op_type,
            username: username.trim().to_string(),
            kind,
        }
    }

    pub fn op_type(&self) -> &Type {
        &self.op_type
    }

    pub fn username(&self) -> &str {
        &self.username
    }

    pub fn kind(&self) -> Kind {
        self.kind
    }

    /// Key of the account the operation targets.
    pub fn key(&self) -> AccountKey {
        account_key(&self.username, self.kind)
    }
}

#[test]
fn test_operation_key() {
    use rust_decimal_macros::dec;

    let op = Operation::new(Type::Deposit(dec!(1)), " alice ", Kind::Checking);
    assert_eq!("alice", op.username());
    assert_eq!("aliceCHECKING", op.key());
    assert_eq!("deposit", op.op_type().name());
}
