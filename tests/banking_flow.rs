use chrono::{Duration, TimeZone, Utc};
use current_account_rs::{
    AccountConfig, Bank, BankConfig, BankError, Money, SafeTimeProvider, TimeSource,
    TransactionKind, WithdrawalLimits,
};
use rust_decimal_macros::dec;

fn test_time() -> SafeTimeProvider {
    SafeTimeProvider::new(TimeSource::Test(
        Utc.with_ymd_and_hms(2024, 6, 10, 8, 0, 0).unwrap()
    ))
}

fn bank_with_account(time: &SafeTimeProvider) -> (Bank, u32) {
    let mut bank = Bank::default();
    bank.register_client("123.456.789-00", "Ana Souza", "02/04/1985", "Rua A, 10 - Centro - Recife/PE")
        .unwrap();
    let number = bank.open_account("12345678900", time).unwrap();
    (bank, number)
}

#[test]
fn worked_example_through_the_bank() {
    let time = test_time();
    let (mut bank, number) = bank_with_account(&time);
    bank.deposit(number, Money::from_major(1_000), &time).unwrap();

    let first = bank.withdraw(number, Money::from_major(500), &time).unwrap();
    assert_eq!(first.balance_after, Money::from_major(500));

    assert!(matches!(
        bank.withdraw(number, Money::from_major(600), &time),
        Err(BankError::PerWithdrawalLimitExceeded { .. })
    ));

    let second = bank.withdraw(number, Money::from_major(500), &time).unwrap();
    assert_eq!(second.balance_after, Money::ZERO);

    assert_eq!(
        bank.withdraw(number, Money::from_major(1), &time),
        Err(BankError::InsufficientFunds {
            available: Money::ZERO,
            requested: Money::from_major(1),
        })
    );

    let account = bank.find_account(number).unwrap();
    assert_eq!(account.withdrawals_today(time.now()), 2);
    let kinds: Vec<_> = account.history().iter().map(|r| r.kind).collect();
    assert_eq!(
        kinds,
        vec![TransactionKind::Deposit, TransactionKind::Withdrawal, TransactionKind::Withdrawal]
    );
}

#[test]
fn cap_is_enforced_to_the_cent() {
    let time = test_time();
    let (mut bank, number) = bank_with_account(&time);
    bank.deposit(number, Money::from_major(5_000), &time).unwrap();

    let result = bank.withdraw(number, Money::from_decimal(dec!(500.01)), &time);
    assert!(matches!(result, Err(BankError::PerWithdrawalLimitExceeded { .. })));
    assert_eq!(bank.find_account(number).unwrap().balance(), Money::from_major(5_000));
    assert_eq!(bank.find_account(number).unwrap().history().len(), 1);
}

#[test]
fn daily_limit_resets_on_the_next_calendar_day() {
    let time = test_time();
    let control = time.test_control().unwrap();
    let (mut bank, number) = bank_with_account(&time);
    bank.deposit(number, Money::from_major(1_000), &time).unwrap();

    for _ in 0..3 {
        bank.withdraw(number, Money::from_major(50), &time).unwrap();
    }
    assert_eq!(
        bank.withdraw(number, Money::from_major(50), &time),
        Err(BankError::DailyLimitExceeded { limit: 3 })
    );

    // deposits are not limited
    bank.deposit(number, Money::from_major(10), &time).unwrap();

    control.advance(Duration::days(1));
    for _ in 0..3 {
        bank.withdraw(number, Money::from_major(50), &time).unwrap();
    }
    assert!(matches!(
        bank.withdraw(number, Money::from_major(50), &time),
        Err(BankError::DailyLimitExceeded { .. })
    ));

    // skipping several days still resets once
    control.advance(Duration::days(5));
    bank.withdraw(number, Money::from_major(50), &time).unwrap();

    let account = bank.find_account(number).unwrap();
    assert_eq!(account.balance(), Money::from_major(660));
    assert_eq!(account.withdrawals_today(time.now()), 1);
    assert_eq!(account.history().withdrawals().count(), 7);
}

#[test]
fn rejected_operations_change_nothing() {
    let time = test_time();
    let (mut bank, number) = bank_with_account(&time);
    bank.deposit(number, Money::from_major(100), &time).unwrap();

    let attempts = [
        bank.deposit(number, Money::ZERO, &time),
        bank.deposit(number, Money::ZERO - Money::from_major(1), &time),
        bank.withdraw(number, Money::from_major(101), &time),
        bank.withdraw(number, Money::ZERO, &time),
    ];
    assert!(attempts.iter().all(Result::is_err));

    let account = bank.find_account(number).unwrap();
    assert_eq!(account.balance(), Money::from_major(100));
    assert_eq!(account.history().len(), 1);
    assert_eq!(account.withdrawals_today(time.now()), 0);
}

#[test]
fn accounts_are_independent() {
    let time = test_time();
    let (mut bank, first) = bank_with_account(&time);
    let second = bank
        .open_account_with(
            "12345678900",
            AccountConfig::current_with(WithdrawalLimits::new(Money::from_major(1_000), 1)),
            &time,
        )
        .unwrap();

    bank.deposit(first, Money::from_major(300), &time).unwrap();
    bank.deposit(second, Money::from_major(3_000), &time).unwrap();

    bank.withdraw(second, Money::from_major(900), &time).unwrap();
    assert!(matches!(
        bank.withdraw(second, Money::from_major(1), &time),
        Err(BankError::DailyLimitExceeded { limit: 1 })
    ));
    bank.withdraw(first, Money::from_major(100), &time).unwrap();

    assert_eq!(bank.find_account(first).unwrap().balance(), Money::from_major(200));
    assert_eq!(bank.find_account(second).unwrap().balance(), Money::from_major(2_100));
}

#[test]
fn bank_from_json_config() {
    let time = test_time();
    let config = BankConfig::from_json(r#"{ "branch": "0007", "default_account": { "kind": "Plain" } }"#)
        .unwrap();
    let mut bank = Bank::new(config).unwrap();
    bank.register_client("1", "Caio", "01/01/1990", "Rua D").unwrap();
    let number = bank.open_account("1", &time).unwrap();

    bank.deposit(number, Money::from_major(10_000), &time).unwrap();
    for _ in 0..5 {
        bank.withdraw(number, Money::from_major(1_000), &time).unwrap();
    }

    let statement = bank.statement(number, &time).unwrap();
    assert_eq!(statement.branch, "0007");
    assert_eq!(statement.balance, Money::from_major(5_000));
    assert!(statement.limits.is_none());
    assert!(!statement.to_string().contains("Withdrawals today"));
}
