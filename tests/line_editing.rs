use assert_fs::prelude::*;
use predicates::prelude::*;

use temalib::{append_line, read_lines, remove_line, FsOpError};

#[test]
fn append_then_remove_walkthrough() -> Result<(), Box<dyn std::error::Error>> {
    let temp = assert_fs::TempDir::new()?;
    let e = temp.child("e.txt");
    e.touch()?;

    append_line(e.path(), "first")?;
    e.assert("first");
    append_line(e.path(), "second")?;
    e.assert("first\nsecond");
    remove_line(e.path(), "first")?;
    e.assert("second");

    temp.close()?;
    Ok(())
}

#[test]
fn append_creates_missing_file() -> Result<(), Box<dyn std::error::Error>> {
    let temp = assert_fs::TempDir::new()?;
    let f = temp.child("fresh.txt");
    f.assert(predicate::path::missing());

    append_line(f.path(), "hello")?;
    f.assert(predicate::path::is_file());
    f.assert("hello");
    Ok(())
}

#[test]
fn append_preserves_existing_lines_in_order() -> Result<(), Box<dyn std::error::Error>> {
    let temp = assert_fs::TempDir::new()?;
    let f = temp.child("list.txt");
    f.write_str("already existing 1\nalready existing 2")?;

    append_line(f.path(), "new")?;

    let lines = read_lines(f.path())?;
    assert_eq!(lines, vec!["already existing 1", "already existing 2", "new"]);
    Ok(())
}

#[test]
fn append_remove_round_trip_restores_content() -> Result<(), Box<dyn std::error::Error>> {
    let temp = assert_fs::TempDir::new()?;
    for (i, original) in ["", "a", "a\nb", "a\n\nb", "x\ny\n"].iter().enumerate() {
        let f = temp.child(format!("rt{i}.txt"));
        f.write_str(original)?;

        append_line(f.path(), "X")?;
        remove_line(f.path(), "X")?;

        assert_eq!(std::fs::read_to_string(f.path())?, *original, "case {i}");
    }
    Ok(())
}

#[test]
fn second_remove_of_unique_line_fails() -> Result<(), Box<dyn std::error::Error>> {
    let temp = assert_fs::TempDir::new()?;
    let f = temp.child("once.txt");
    f.write_str("keep\ndrop\nkeep too")?;

    remove_line(f.path(), "drop")?;
    f.assert("keep\nkeep too");

    let err = remove_line(f.path(), "drop").unwrap_err();
    assert!(matches!(err, FsOpError::LineNotFound { .. }));
    f.assert("keep\nkeep too");
    Ok(())
}

#[test]
fn unicode_lines_survive() -> Result<(), Box<dyn std::error::Error>> {
    let temp = assert_fs::TempDir::new()?;
    let f = temp.child("utf8.txt");

    append_line(f.path(), "привет")?;
    append_line(f.path(), "漢字 🙂")?;
    remove_line(f.path(), "привет")?;

    f.assert(predicate::str::diff("漢字 🙂"));
    Ok(())
}
