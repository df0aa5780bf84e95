use chrono::{TimeZone, Utc};

use fin_core::command::{Command, CreateOperationCommand, Timed};
use fin_core::domain::FlowKind;
use fin_core::errors::LedgerError;
use fin_core::ledger::Ledger;

fn command_for(ledger: &mut Ledger, amount: f64) -> CreateOperationCommand {
    let account = ledger.create_account("Checking", 100.0).unwrap();
    let category = ledger.create_category(FlowKind::Expense, "Misc").unwrap();
    CreateOperationCommand {
        kind: FlowKind::Expense,
        account_id: account.id,
        amount,
        date: Utc.with_ymd_and_hms(2024, 6, 1, 9, 0, 0).unwrap(),
        description: "bus ticket".into(),
        category_id: category.id,
    }
}

#[test]
fn create_operation_command_records_through_the_ledger() {
    let mut ledger = Ledger::in_memory();
    let mut command = command_for(&mut ledger, 2.5);
    let account_id = command.account_id;

    let operation = command.execute(&mut ledger).unwrap();
    assert_eq!(operation.amount, 2.5);
    assert_eq!(ledger.account(account_id).unwrap().balance, 97.5);
}

#[test]
fn timed_decorator_passes_results_through() {
    let mut ledger = Ledger::in_memory();
    let command = command_for(&mut ledger, 10.0);
    let account_id = command.account_id;

    let mut timed = Timed::new(command, "create-operation");
    let operation = timed.execute(&mut ledger).unwrap();
    assert_eq!(operation.account_id, account_id);
    assert_eq!(ledger.account(account_id).unwrap().balance, 90.0);
}

#[test]
fn timed_decorator_passes_errors_through() {
    let mut ledger = Ledger::in_memory();
    let command = command_for(&mut ledger, -4.0);

    let mut timed = Timed::new(command, "create-operation");
    let err = timed.execute(&mut ledger).unwrap_err();
    assert_eq!(err, LedgerError::NegativeAmount(-4.0));
    assert!(ledger.operations().is_empty());
}
