mod config;
mod console;
mod models;
mod storage;
mod store;
mod types;

use std::io::{stderr, stdin, stdout, BufWriter, Write};

use anyhow::{anyhow, Result};
use clap::Parser;
use tracing::level_filters::LevelFilter;
use tracing::info;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{fmt, Layer};

use crate::config::{Command, Config};
use crate::console::{account_details, account_summary, Console};
use crate::storage::{RecordFile, Storage};
use crate::store::AccountStore;

fn main() -> Result<()> {
    let config = Config::parse();

    setup_logging(config.log_level);

    let storage = RecordFile::new(&config.data_file);
    info!("Using account records at [{}]", storage.path().display());

    let mut store = AccountStore::open(storage)?;
    info!("Next account number is [{}]", store.next_account_number());

    //NOTE: Dropping the store on the way out performs the final rewrite of the record file
    match config.command.unwrap_or(Command::Menu) {
        Command::Menu => run_menu(&mut store),
        Command::Open { account_type, owner, deposit } => {
            let account_number = store.create_account(account_type, &owner, deposit)?;
            println!("Account created successfully. Account Number: {account_number}");
            Ok(())
        }
        Command::Deposit { account_number, amount } => {
            store.deposit(account_number, amount)?;
            println!("Deposit successful.");
            Ok(())
        }
        Command::Withdraw { account_number, amount } => {
            store.withdraw(account_number, amount)?;
            println!("Withdrawal successful.");
            Ok(())
        }
        Command::Show { account_number } => {
            let view = store.find_and_describe(account_number)
                .ok_or_else(|| anyhow!("Account [{account_number}] was not found"))?;
            println!("{}", account_details(&view));
            Ok(())
        }
        Command::List => write_listing(&store)
    }
}

fn setup_logging(level: LevelFilter) {
    //NOTE: stdout belongs to the console, logging goes to stderr
    let terminal_log = fmt::layer()
        .with_target(false)
        .with_writer(stderr)
        .with_filter(level);

    tracing_subscriber::registry()
        .with(terminal_log)
        .init();
}

fn run_menu<S: Storage>(store: &mut AccountStore<S>) -> Result<()> {
    let mut console = Console::new(stdin().lock(), stdout().lock());
    console.run(store)?;
    drop(console.finish()?);

    Ok(())
}

fn write_listing<S: Storage>(store: &AccountStore<S>) -> Result<()> {
    let mut output = BufWriter::new(stdout().lock());

    for view in store.list_all() {
        writeln!(output, "{}", account_summary(&view))?;
    }

    output.flush()?;

    Ok(())
}
