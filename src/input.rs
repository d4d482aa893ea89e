use crate::ledger::{
    account::Kind,
    operation::{Operation, Type},
    CheckNumber,
};

use rust_decimal::Decimal;
use serde::Deserialize;
use thiserror::Error;

#[derive(Debug, Error, PartialEq)]
pub enum Error {
    #[error("malformed CSV: {0}")]
    Csv(String), // CSV is malformed

    #[error("invalid operation: {0}")]
    Format(String), // Data format is incorrect
}

impl From<csv::Error> for Error {
    fn from(err: csv::Error) -> Self {
        Self::Csv(err.to_string())
    }
}

impl From<<OperationRecord as TryInto<Operation>>::Error> for Error {
    fn from(err: <OperationRecord as TryInto<Operation>>::Error) -> Self {
        Self::Format(err.to_string())
    }
}

// Rows are read lazily, one at a time, so a script can be replayed while it's
// being read.
// A bad row doesn't stop the iteration: it shows up as an Err, and the
// caller decides what to do with it.
pub fn parse(input_stream: impl std::io::Read) -> impl Iterator<Item = Result<Operation, Error>> {
    let buffered = std::io::BufReader::new(input_stream);
    let reader = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .from_reader(buffered);

    reader
        .into_deserialize::<OperationRecord>()
        .map(convert)
}

// Convert from a csv deserialise result into an operation result.
fn convert(record: Result<OperationRecord, csv::Error>) -> Result<Operation, Error> {
    Ok(record?.try_into()?)
}

// I have an OperationRecord type because I can't directly deserialise into my "domain" type, i.e. Operation.
// See https://github.com/BurntSushi/rust-csv/issues/211.
#[derive(Debug, Deserialize)]
pub struct OperationRecord {
    op: OperationRecordType,
    user: String,
    kind: KindRecord,
    amount: Option<Decimal>,
    check: Option<CheckNumber>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OperationRecordType {
    Create,
    Deposit,
    Withdraw,
    Interest,
    DepositCheck,
    CashCheck,
    Balance,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum KindRecord {
    Checking,
    Savings,
}

impl From<KindRecord> for Kind {
    fn from(record: KindRecord) -> Self {
        match record {
            KindRecord::Checking => Kind::Checking,
            KindRecord::Savings => Kind::Savings,
        }
    }
}

impl TryFrom<OperationRecord> for Operation {
    type Error = &'static str;

    fn try_from(record: OperationRecord) -> Result<Self, Self::Error> {
        if record.user.trim().is_empty() {
            return Err("missing user");
        }

        let amount = |name| record.amount.ok_or(name);
        let check = |name| record.check.ok_or(name);

        let op_type = match record.op {
            OperationRecordType::Create => Type::Create,
            OperationRecordType::Deposit => Type::Deposit(amount("missing amount for deposit")?),
            OperationRecordType::Withdraw => {
                Type::Withdraw(amount("missing amount for withdraw")?)
            }
            OperationRecordType::Interest => Type::Interest,
            OperationRecordType::DepositCheck => Type::DepositCheck(
                amount("missing amount for deposit_check")?,
                check("missing check number for deposit_check")?,
            ),
            OperationRecordType::CashCheck => Type::CashCheck(
                amount("missing amount for cash_check")?,
                check("missing check number for cash_check")?,
            ),
            OperationRecordType::Balance => Type::Balance,
        };

        Ok(Self::new(op_type, &record.user, record.kind.into()))
    }
}
