pub fn validate_name(name: &str) -> bool {
    // Names are the lookup key, so they must be non-empty.
    // Phone and email stay free-form and are not checked here.
    !name.trim().is_empty()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejects_empty_and_whitespace_names() {
        assert!(!validate_name(""));
        assert!(!validate_name("   "));
        assert!(!validate_name("\t"));
    }

    #[test]
    fn accepts_ordinary_names() {
        assert!(validate_name("Alice"));
        assert!(validate_name("Mary Jane O'Neil"));
    }
}
