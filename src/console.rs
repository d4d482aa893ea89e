//! Interactive text menu over a ledger.
//!
//! The console owns the ledger and one input and one output stream for its
//! whole lifetime. Each menu entry turns into a single ledger operation.

use crate::ledger::{
    account::{AccountError, Kind, Outcome},
    ledger::{account_key, Ledger},
    money::round_for_display,
    operation::{Operation, Type},
    process::{LedgerError, Receipt},
    Amount, CheckNumber,
};

use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use std::{
    io::{self, BufRead, Write},
    str::FromStr,
};

// None means the input is exhausted: every menu unwinds and the console exits.
type Step<T> = io::Result<Option<T>>;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Action {
    Deposit,
    Withdraw,
    CashCheck,
    DepositCheck,
    Balance,
    Interest,
}

impl Action {
    fn label(self) -> &'static str {
        match self {
            Action::Deposit => "Deposit",
            Action::Withdraw => "Withdraw",
            Action::CashCheck => "Cash Check",
            Action::DepositCheck => "Deposit Check",
            Action::Balance => "Get Balance",
            Action::Interest => "Calculate interest",
        }
    }
}

const CHECKING_MENU: &[Action] = &[
    Action::Deposit,
    Action::Withdraw,
    Action::CashCheck,
    Action::DepositCheck,
    Action::Balance,
    Action::Interest,
];

const SAVINGS_MENU: &[Action] = &[
    Action::Deposit,
    Action::Withdraw,
    Action::Balance,
    Action::Interest,
];

pub struct Console<R, W> {
    input: R,
    output: W,
    ledger: Ledger,
}

impl<R: BufRead, W: Write> Console<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self {
            input,
            output,
            ledger: Ledger::new(),
        }
    }

    pub fn ledger(&self) -> &Ledger {
        &self.ledger
    }

    /// Show the main menu until the user exits or the input ends.
    pub fn run(&mut self) -> io::Result<()> {
        loop {
            writeln!(self.output)?;
            writeln!(self.output, "Bank App:")?;
            writeln!(self.output, "Enter choice")?;
            writeln!(self.output, "1. Create Account")?;
            writeln!(self.output, "2. Operating a Checking Account")?;
            writeln!(self.output, "3. Operating a Savings Account")?;
            writeln!(self.output, "Press other key to exit")?;

            let Some(choice) = self.prompt("==> ")? else {
                return Ok(());
            };

            let step = match choice.as_str() {
                "1" => self.create_account()?,
                "2" => self.operate(Kind::Checking)?,
                "3" => self.operate(Kind::Savings)?,
                _ => return Ok(()),
            };

            if step.is_none() {
                return Ok(());
            }
        }
    }

    fn create_account(&mut self) -> Step<()> {
        loop {
            writeln!(self.output)?;
            writeln!(self.output, "Create Account:")?;
            writeln!(self.output, "Enter choice")?;
            writeln!(self.output, "1. Create Checking Account")?;
            writeln!(self.output, "2. Create Savings Account")?;
            writeln!(self.output, "Press other key to exit")?;

            let Some(choice) = self.prompt("==> ")? else {
                return Ok(None);
            };
            let kind = match choice.as_str() {
                "1" => Kind::Checking,
                "2" => Kind::Savings,
                _ => return Ok(Some(())),
            };

            let Some(username) = self.read_username()? else {
                return Ok(None);
            };

            if self.ledger.create_account(kind, &account_key(&username, kind)) {
                writeln!(self.output, "{} account: {} created successfully", kind, username)?;
                return Ok(Some(()));
            }

            writeln!(self.output, "{} account: {} already exists.", kind, username)?;
            writeln!(self.output, "Use other username")?;
        }
    }

    fn operate(&mut self, kind: Kind) -> Step<()> {
        let Some(username) = self.read_username()? else {
            return Ok(None);
        };

        if self.ledger.get_account(&account_key(&username, kind)).is_none() {
            writeln!(self.output, "Account not found")?;
            return Ok(Some(()));
        }

        let menu = match kind {
            Kind::Checking => CHECKING_MENU,
            Kind::Savings => SAVINGS_MENU,
        };

        loop {
            writeln!(self.output)?;
            writeln!(self.output, "################################")?;
            writeln!(self.output, "{} account: {}", kind, username)?;
            for (index, action) in menu.iter().enumerate() {
                writeln!(self.output, "{}. {}", index + 1, action.label())?;
            }
            writeln!(self.output, "Press other key to exit")?;

            let Some(choice) = self.prompt("==> ")? else {
                return Ok(None);
            };

            let selected = choice
                .parse::<usize>()
                .ok()
                .and_then(|number| number.checked_sub(1))
                .and_then(|index| menu.get(index));
            let Some(&action) = selected else {
                return Ok(Some(()));
            };

            if self.perform(&username, kind, action)?.is_none() {
                return Ok(None);
            }
        }
    }

    fn perform(&mut self, username: &str, kind: Kind, action: Action) -> Step<()> {
        loop {
            let Some(op_type) = self.read_request(action)? else {
                return Ok(None);
            };
            let op = Operation::new(op_type, username, kind);

            match self.ledger.process(&op) {
                Ok(receipt) => {
                    self.report(&op, &receipt)?;
                    return Ok(Some(()));
                }
                // Amounts are asked again until they are valid.
                Err(LedgerError::Account(AccountError::InvalidAmount(err))) => {
                    writeln!(self.output, "Error: {}", err)?;
                }
                Err(err) => {
                    writeln!(self.output, "Error: {}", err)?;
                    return Ok(Some(()));
                }
            }
        }
    }

    fn read_request(&mut self, action: Action) -> Step<Type> {
        let op_type = match action {
            Action::Balance => Type::Balance,
            Action::Interest => Type::Interest,
            Action::Deposit | Action::Withdraw => {
                write!(self.output, "{}: ", action.label())?;
                let Some(amount) = self.read_amount()? else {
                    return Ok(None);
                };

                if action == Action::Deposit {
                    Type::Deposit(amount)
                } else {
                    Type::Withdraw(amount)
                }
            }
            Action::CashCheck | Action::DepositCheck => {
                write!(self.output, "{}: ", action.label())?;
                let Some(check_number) = self.read_check_number()? else {
                    return Ok(None);
                };
                let Some(amount) = self.read_amount()? else {
                    return Ok(None);
                };

                if action == Action::CashCheck {
                    Type::CashCheck(amount, check_number)
                } else {
                    Type::DepositCheck(amount, check_number)
                }
            }
        };

        Ok(Some(op_type))
    }

    fn report(&mut self, op: &Operation, receipt: &Receipt) -> io::Result<()> {
        let kind = op.kind();

        match (op.op_type(), receipt.outcome) {
            (_, Outcome::InsufficientFunds) => writeln!(self.output, "Insufficient funds"),
            (Type::DepositCheck(_, check_number) | Type::CashCheck(_, check_number), Outcome::DuplicateCheck) => {
                writeln!(
                    self.output,
                    "This check #{} has already been processed.",
                    check_number
                )
            }
            (Type::Deposit(amount), _) => writeln!(
                self.output,
                "Deposited ${} into {} Account",
                round_for_display(*amount),
                kind
            ),
            (Type::Withdraw(amount), _) => writeln!(
                self.output,
                "Withdrawn ${} from {} Account",
                round_for_display(*amount),
                kind
            ),
            (Type::DepositCheck(amount, check_number), _) => writeln!(
                self.output,
                "Deposited check #{} for ${} into {} Account",
                check_number,
                round_for_display(*amount),
                kind
            ),
            (Type::CashCheck(amount, check_number), _) => writeln!(
                self.output,
                "Cashed check #{} for ${} from {} Account",
                check_number,
                round_for_display(*amount),
                kind
            ),
            (Type::Interest, _) => writeln!(
                self.output,
                "Added interest of ${} to {} Account with interest rate {}%",
                receipt.interest.unwrap_or_default(),
                kind,
                (kind.interest_rate() * dec!(100)).normalize()
            ),
            (Type::Balance, _) => writeln!(self.output, "Balance: {}", receipt.balance),
            (Type::Create, _) => Ok(()),
        }
    }

    fn prompt(&mut self, message: &str) -> Step<String> {
        write!(self.output, "{}", message)?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }

        Ok(Some(line.trim().to_string()))
    }

    fn read_username(&mut self) -> Step<String> {
        loop {
            let Some(username) = self.prompt("Enter your username ==> ")? else {
                return Ok(None);
            };

            if !username.is_empty() {
                return Ok(Some(username));
            }

            writeln!(self.output, "Username cannot be empty")?;
        }
    }

    fn read_amount(&mut self) -> Step<Amount> {
        loop {
            let Some(raw) = self.prompt("Enter amount ==> ")? else {
                return Ok(None);
            };

            match Decimal::from_str(&raw) {
                Ok(amount) => return Ok(Some(amount)),
                Err(_) => writeln!(self.output, "Invalid input")?,
            }
        }
    }

    fn read_check_number(&mut self) -> Step<CheckNumber> {
        loop {
            let Some(raw) = self.prompt("Enter check number ==> ")? else {
                return Ok(None);
            };

            match raw.parse::<CheckNumber>() {
                Ok(check_number) => return Ok(Some(check_number)),
                Err(_) => writeln!(self.output, "Invalid input")?,
            }
        }
    }
}
