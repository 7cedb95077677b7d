use assert_cmd::Command;
use predicates::str::contains;
use tempfile::tempdir;

#[test]
fn update_keeps_blank_fields() -> Result<(), Box<dyn std::error::Error>> {
    let dir = tempdir()?;
    let store_path = dir.path().join("contacts.json");

    // Add Bob, update with a blank phone and a new email, then search.
    // The blank phone keeps the old value; only the email changes.
    Command::cargo_bin(env!("CARGO_PKG_NAME"))?
        .arg("--store-path")
        .arg(&store_path)
        .write_stdin("1\nBob\n1\nb@x.com\n3\nBob\n\nc@x.com\n2\nBob\n6\n")
        .assert()
        .success()
        .stdout(contains("Updating Bob. Leave blank to keep current value."))
        .stdout(contains("Contact 'Bob' updated."))
        .stdout(contains("Phone: 1"))
        .stdout(contains("Email: c@x.com"));

    Ok(())
}

#[test]
fn update_absent_name_reports_not_found() -> Result<(), Box<dyn std::error::Error>> {
    let dir = tempdir()?;
    let store_path = dir.path().join("contacts.json");

    Command::cargo_bin(env!("CARGO_PKG_NAME"))?
        .arg("--store-path")
        .arg(&store_path)
        .write_stdin("3\nGhost\n6\n")
        .assert()
        .success()
        .stdout(contains("Contact 'Ghost' not found."));

    Ok(())
}

#[test]
fn search_is_pure_lookup() -> Result<(), Box<dyn std::error::Error>> {
    let dir = tempdir()?;
    let store_path = dir.path().join("contacts.json");

    Command::cargo_bin(env!("CARGO_PKG_NAME"))?
        .arg("--store-path")
        .arg(&store_path)
        .write_stdin("1\nAlice\n555\na@x.com\n6\n")
        .assert()
        .success();

    // A search session performs no save at all.
    let before = std::fs::read_to_string(&store_path)?;

    Command::cargo_bin(env!("CARGO_PKG_NAME"))?
        .arg("--store-path")
        .arg(&store_path)
        .write_stdin("2\nAlice\n2\nNobody\n6\n")
        .assert()
        .success()
        .stdout(contains("--- Details for Alice ---"))
        .stdout(contains("Contact 'Nobody' not found."));

    assert_eq!(std::fs::read_to_string(&store_path)?, before);

    Ok(())
}
