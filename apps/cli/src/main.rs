//! Line-oriented front end for the CampusBook contact manager.
//!
//! Reads one command per line from stdin, prints the feedback, and saves the
//! book after every command that changes it.

use std::io::{self, BufRead, Write};
use std::process::ExitCode;

use contacts::{
    execute, parse_command, AddressBook, Command, CommandContext, ContactStorage, ContactsConfig,
    JsonContactStorage,
};

fn main() -> ExitCode {
    let _ = dotenvy::dotenv();
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(error) => {
            eprintln!("campusbook: {error}");
            ExitCode::FAILURE
        }
    }
}

fn run() -> contacts::Result<()> {
    let config = ContactsConfig::from_env();
    let storage = JsonContactStorage::new(config.data_path.clone());
    let contacts = storage.load()?.unwrap_or_else(|| {
        log::info!(
            "no address book at {}, starting empty",
            storage.path().display()
        );
        Vec::new()
    });
    let mut book = AddressBook::new(contacts);
    let context = CommandContext::from(&config);

    println!("CampusBook: {} contacts loaded. Type `help` for commands.", book.len());

    let stdin = io::stdin();
    let mut stdout = io::stdout();
    let mut lines = stdin.lock().lines();
    loop {
        print!("> ");
        stdout.flush()?;

        let Some(line) = lines.next().transpose()? else {
            break;
        };
        if line.trim().is_empty() {
            continue;
        }

        let command = match parse_command(&line, config.find_policy()) {
            Ok(command) => command,
            Err(error) => {
                println!("{error}");
                continue;
            }
        };
        let shows_list = matches!(command, Command::Find(_) | Command::List);
        let outcome = match execute(command, &mut book, &context) {
            Ok(outcome) => outcome,
            Err(error) => {
                println!("{error}");
                continue;
            }
        };

        println!("{}", outcome.feedback);
        if outcome.mutated {
            if let Err(error) = storage.save(book.contacts()) {
                log::error!("failed to save address book: {error}");
                println!("Could not save the address book: {error}");
            }
        }
        if shows_list || outcome.mutated {
            print_displayed(&book);
        }
        if outcome.exit {
            break;
        }
    }

    Ok(())
}

fn print_displayed(book: &AddressBook) {
    for (index, contact) in book.displayed().into_iter().enumerate() {
        println!("{:>3}. {contact}", index + 1);
    }
}
