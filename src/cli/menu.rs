use std::io::{self, Write};

use crate::domain::contact::Contact;
use crate::errors::AppError;

// OUTPUT FUNCTIONS
pub fn show_menu() -> Result<(), AppError> {
    println!("\n=== CONTACT BOOK ===");
    println!("1. Add Contact");
    println!("2. Search Contact");
    println!("3. Update Contact");
    println!("4. Delete Contact");
    println!("5. List All Contacts");
    println!("6. Exit");
    print!("Choose an option (1-6): ");
    io::stdout().flush()?;
    Ok(())
}

pub fn display_contact(name: &str, contact: &Contact) -> String {
    format!(
        "--- Details for {} ---\n\
        Phone: {}\n\
        Email: {}\n\
        --------------------------",
        name, contact.phone, contact.email
    )
}

// INPUT FUNCTIONS
pub fn get_input() -> Result<String, AppError> {
    let mut input = String::new();
    let bytes = io::stdin().read_line(&mut input)?;

    // read_line returns 0 bytes on end of input; without this the menu
    // loop would spin forever on a closed stdin.
    if bytes == 0 {
        return Err(AppError::Io(io::Error::new(
            io::ErrorKind::UnexpectedEof,
            "end of input",
        )));
    }

    Ok(input.trim().to_string())
}

pub fn prompt(label: &str) -> Result<String, AppError> {
    print!("{}", label);
    io::stdout().flush()?;
    get_input()
}
