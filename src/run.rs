use crate::{
    error_handler, input,
    ledger::Ledger,
    output::{self, ResultRecord},
};

/// Replay a CSV script of operations against a new ledger, and write the
/// result of each operation as CSV.
///
/// Everything happens in order, on the calling thread: each operation sees
/// the ledger exactly as the previous one left it.
pub fn run(
    input_stream: impl std::io::Read,
    output_stream: impl std::io::Write,
) -> Result<(), std::io::Error> {
    let mut ledger = Ledger::new();

    let results = input::parse(input_stream)
        .enumerate()
        .filter_map(|(index, parsed)| {
            let row = index + 1;
            let op = match parsed {
                Ok(op) => op,
                Err(err) => {
                    error_handler::report_input(row, &err);
                    return None;
                }
            };

            let result = ledger.process(&op);
            if let Err(err) = &result {
                error_handler::report_operation(row, &op, err);
            }

            Some(ResultRecord::new(row, &op, &result))
        });

    output::write(output_stream, results)
}

#[cfg(test)]
mod tests {
    use super::run;

    #[test]
    fn test_run() {
        let data = r#"op,user,kind,amount,check
create,alice,savings,,
deposit,alice,savings,100.00,
interest,alice,savings,,
withdraw,alice,savings,200.00,
create,bob,checking,,
deposit_check,bob,checking,50.00,1
deposit_check,bob,checking,50.00,1
cash_check,bob,checking,20.00,2
this row is broken
deposit,alice,savings,10.001,
create,alice,savings,,
balance,carol,checking,,
deposit_check,alice,savings,1,3
"#;
        let mut output_stream = Vec::new();
        run(std::io::Cursor::new(data), &mut output_stream).unwrap();

        let want = r#"row,user,kind,op,status,balance
1,alice,savings,create,applied,0.00
2,alice,savings,deposit,applied,100.00
3,alice,savings,interest,applied,102.00
4,alice,savings,withdraw,insufficient_funds,102.00
5,bob,checking,create,applied,0.00
6,bob,checking,deposit_check,applied,50.00
7,bob,checking,deposit_check,duplicate_check,50.00
8,bob,checking,cash_check,applied,30.00
10,alice,savings,deposit,invalid_amount,
11,alice,savings,create,duplicate_account,102.00
12,carol,checking,balance,account_not_found,
13,alice,savings,deposit_check,checks_not_supported,
"#;
        assert_eq!(want.to_string(), String::from_utf8(output_stream).unwrap());
    }

    #[test]
    fn test_run_empty_script() {
        let mut output_stream = Vec::new();
        run(std::io::Cursor::new("op,user,kind,amount,check\n"), &mut output_stream).unwrap();

        assert_eq!("", String::from_utf8(output_stream).unwrap());
    }
}
