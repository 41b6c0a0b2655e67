/// quick start - register a client, open an account, move money, print a statement
use current_account_rs::{Bank, Money, SafeTimeProvider, TimeSource};
use tracing_subscriber::EnvFilter;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .init();

    let time = SafeTimeProvider::new(TimeSource::System);

    let mut bank = Bank::default();
    bank.register_client(
        "123.456.789-00",
        "Ana Souza",
        "02/04/1985",
        "Rua das Flores, 10 - Centro - Recife/PE",
    )?;
    let number = bank.open_account("12345678900", &time)?;

    bank.deposit_now(number, Money::from_major(1_000))?;
    bank.withdraw_now(number, "250.75".parse()?)?;

    // over the per-withdrawal cap, reported and left unrecorded
    if let Err(e) = bank.withdraw_now(number, Money::from_major(600)) {
        println!("rejected: {}", e);
    }

    println!("{}", bank.statement(number, &time)?);

    for summary in bank.account_summaries()? {
        println!("\n{}", summary);
    }

    Ok(())
}
