use clap::Parser;

use crate::errors::AppError;
use crate::store::DEFAULT_STORE_PATH;

#[derive(Parser, Debug)]
#[command(name = "dexto", version, about = "Simple Contact Book")]
pub struct Cli {
    /// Path to the JSON store file
    #[arg(long, env = "CONTACTS_PATH", default_value_t = String::from(DEFAULT_STORE_PATH))]
    pub store_path: String,
}

/// One menu selection from the interactive loop.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuCommand {
    Add,
    Search,
    Update,
    Delete,
    List,
    Exit,
}

impl MenuCommand {
    pub fn parse(input: &str) -> Result<Self, AppError> {
        match input {
            "1" => Ok(MenuCommand::Add),
            "2" => Ok(MenuCommand::Search),
            "3" => Ok(MenuCommand::Update),
            "4" => Ok(MenuCommand::Delete),
            "5" => Ok(MenuCommand::List),
            "6" => Ok(MenuCommand::Exit),
            _ => Err(AppError::ParseCommand(input.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_every_menu_choice() -> Result<(), AppError> {
        assert_eq!(MenuCommand::parse("1")?, MenuCommand::Add);
        assert_eq!(MenuCommand::parse("2")?, MenuCommand::Search);
        assert_eq!(MenuCommand::parse("3")?, MenuCommand::Update);
        assert_eq!(MenuCommand::parse("4")?, MenuCommand::Delete);
        assert_eq!(MenuCommand::parse("5")?, MenuCommand::List);
        assert_eq!(MenuCommand::parse("6")?, MenuCommand::Exit);
        Ok(())
    }

    #[test]
    fn rejects_non_menu_input() {
        for bad in ["", "0", "7", "abc", "1 2"] {
            let err = MenuCommand::parse(bad).unwrap_err();
            assert!(matches!(err, AppError::ParseCommand(_)));
        }
    }
}
