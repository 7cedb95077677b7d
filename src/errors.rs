use core::fmt;

#[derive(Debug)]
pub enum AppError {
    Io(std::io::Error),
    Json(serde_json::Error),
    NotFound(String),
    AlreadyExists(String),
    ParseCommand(String),
    Validation(String),
}

impl From<std::io::Error> for AppError {
    fn from(err: std::io::Error) -> Self {
        AppError::Io(err)
    }
}

impl From<serde_json::Error> for AppError {
    fn from(err: serde_json::Error) -> Self {
        AppError::Json(err)
    }
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            AppError::Io(e) => {
                write!(f, "I/O error while accessing a file or resource: {}", e)
            }
            AppError::Json(e) => {
                write!(f, "JSON serialization error: {}", e)
            }
            AppError::NotFound(name) => {
                write!(f, "Contact '{}' not found", name)
            }
            AppError::AlreadyExists(name) => {
                write!(f, "Contact '{}' already exists", name)
            }
            AppError::ParseCommand(choice) => {
                write!(f, "Invalid choice: '{}', expected a number from 1 to 6", choice)
            }
            AppError::Validation(msg) => {
                write!(f, "Validation failed: {}", msg)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn confirm_not_found_message() {
        let err = AppError::NotFound("Bob".to_string());

        assert_eq!(format!("{}", err), "Contact 'Bob' not found");
    }

    #[test]
    fn confirm_parse_command_message() {
        let err = AppError::ParseCommand("seven".to_string());

        assert!(format!("{}", err).contains("Invalid choice: 'seven'"));
    }

    #[test]
    fn io_error_converts() {
        let io_err = std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied");
        let err = AppError::from(io_err);

        assert!(matches!(err, AppError::Io(_)));
    }
}
