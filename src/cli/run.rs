use std::io::ErrorKind;

use clap::Parser;
use dotenv::dotenv;

use crate::cli::command::{Cli, MenuCommand};
use crate::cli::menu;
use crate::domain::contact::{Contact, ContactBook};
use crate::errors::AppError;
use crate::store::{ContactStore, LoadSource, json::JsonStore};
use crate::validation::validate_name;

pub fn run_app() -> Result<(), AppError> {
    dotenv().ok();
    let cli = Cli::parse();

    let storage = JsonStore::new(&cli.store_path)?;
    let loaded = storage.load()?;
    let mut book = loaded.book;

    // Missing file is business as usual (first run); unreadable or
    // malformed content also yields an empty book, but that one the
    // user should hear about before their next save overwrites it.
    if loaded.source == LoadSource::Corrupt {
        eprintln!(
            "Warning: could not read existing contacts from '{}'; starting with an empty contact book.",
            cli.store_path
        );
    }

    loop {
        menu::show_menu()?;

        let choice = match menu::get_input() {
            Ok(choice) => choice,
            // Closed stdin ends the session the same way Exit does.
            Err(AppError::Io(e)) if e.kind() == ErrorKind::UnexpectedEof => break,
            Err(e) => return Err(e),
        };

        match MenuCommand::parse(&choice) {
            Ok(MenuCommand::Add) => handle_add(&mut book, &storage)?,
            Ok(MenuCommand::Search) => handle_search(&book)?,
            Ok(MenuCommand::Update) => handle_update(&mut book, &storage)?,
            Ok(MenuCommand::Delete) => handle_delete(&mut book, &storage)?,
            Ok(MenuCommand::List) => handle_list(&book),
            Ok(MenuCommand::Exit) => {
                println!("Goodbye!");
                break;
            }
            Err(e) => {
                // Invalid selection re-prompts.
                println!("{}. Please try again.", e);
            }
        }
    }

    Ok(())
}

fn handle_add(book: &mut ContactBook, storage: &impl ContactStore) -> Result<(), AppError> {
    let name = menu::prompt("Enter Name: ")?;

    if !validate_name(&name) {
        println!("Name cannot be empty.");
        return Ok(());
    }

    // Duplicate names are caught before prompting for the rest of the
    // record, so a failed add never asks for phone or email.
    if book.search(&name).is_some() {
        println!("Contact '{}' already exists.", name);
        return Ok(());
    }

    let phone = menu::prompt("Enter Phone Number: ")?;
    let email = menu::prompt("Enter Email: ")?;

    book.add(name.clone(), Contact::new(phone, email))?;
    persist(book, storage);
    println!("Contact '{}' added.", name);
    Ok(())
}

fn handle_search(book: &ContactBook) -> Result<(), AppError> {
    let name = menu::prompt("Enter Name to search: ")?;

    match book.search(&name) {
        Some(contact) => println!("\n{}", menu::display_contact(&name, contact)),
        None => println!("Contact '{}' not found.", name),
    }
    Ok(())
}

fn handle_update(book: &mut ContactBook, storage: &impl ContactStore) -> Result<(), AppError> {
    let name = menu::prompt("Enter Name to update: ")?;

    let Some(current) = book.search(&name) else {
        println!("Contact '{}' not found.", name);
        return Ok(());
    };

    println!("Updating {}. Leave blank to keep current value.", name);
    let new_phone = menu::prompt(&format!("Enter new phone ({}): ", current.phone))?;
    let new_email = menu::prompt(&format!("Enter new email ({}): ", current.email))?;

    book.update(&name, Some(new_phone), Some(new_email))?;
    persist(book, storage);
    println!("Contact '{}' updated.", name);
    Ok(())
}

fn handle_delete(book: &mut ContactBook, storage: &impl ContactStore) -> Result<(), AppError> {
    let name = menu::prompt("Enter Name to delete: ")?;

    match book.delete(&name) {
        Ok(_) => {
            persist(book, storage);
            println!("Contact '{}' deleted.", name);
        }
        Err(AppError::NotFound(_)) => {
            println!("Contact '{}' not found.", name);
        }
        Err(e) => return Err(e),
    }
    Ok(())
}

fn handle_list(book: &ContactBook) {
    if book.is_empty() {
        println!("No contacts found.");
        return;
    }

    println!("\n--- All Contacts ---");
    for (name, contact) in book.iter() {
        println!("{} | {} | {}", name, contact.phone, contact.email);
    }
    println!("--------------------");
}

/// Persists after a mutation. A failed save is reported but not fatal;
/// the in-memory book now diverges from disk until the next successful
/// save.
fn persist(book: &ContactBook, storage: &impl ContactStore) {
    match storage.save(book) {
        Ok(()) => println!("Changes saved successfully."),
        Err(e) => eprintln!("Error saving data: {}", e),
    }
}
