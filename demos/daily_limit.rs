/// daily limit - deterministic time shows the withdrawal counter resetting
use chrono::{Duration, TimeZone, Utc};
use current_account_rs::{Bank, BankConfig, Money, SafeTimeProvider, TimeSource};
use tracing_subscriber::EnvFilter;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .init();

    println!("=== daily limit example ===\n");

    let time = SafeTimeProvider::new(TimeSource::Test(
        Utc.with_ymd_and_hms(2024, 1, 1, 9, 0, 0).unwrap()
    ));
    let controller = time.test_control().unwrap();

    let config = BankConfig::from_json(
        r#"{ "default_account": { "kind": "Current", "limits": { "per_withdrawal": "500.00", "per_day": 3 } } }"#,
    )?;
    let mut bank = Bank::new(config)?;
    bank.register_client("111.222.333-44", "Bruno Lima", "10/10/1970", "Av. Boa Viagem, 200")?;
    let number = bank.open_account("11122233344", &time)?;
    bank.deposit(number, Money::from_major(2_000), &time)?;

    for attempt in 1..=4 {
        match bank.withdraw(number, Money::from_major(100), &time) {
            Ok(record) => println!("withdrawal {}: ok, balance {}", attempt, record.balance_after),
            Err(e) => println!("withdrawal {}: {}", attempt, e),
        }
    }

    controller.advance(Duration::days(1));
    println!("\nadvanced to: {}", time.now().format("%Y-%m-%d"));

    let record = bank.withdraw(number, Money::from_major(100), &time)?;
    println!("withdrawal after rollover: ok, balance {}", record.balance_after);

    println!("\n{}", bank.statement(number, &time)?);

    Ok(())
}
