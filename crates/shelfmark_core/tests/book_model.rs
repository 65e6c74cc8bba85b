use shelfmark_core::{Book, BookContent, ContentHandle, User};
use std::io::Write;

fn temp_content_file(text: &str) -> (tempfile::TempDir, std::path::PathBuf) {
    let dir = tempfile::tempdir().expect("tempdir should be created");
    let path = dir.path().join("978-0-316-76948-0.txt");
    let mut file = std::fs::File::create(&path).expect("fixture file should be created");
    writeln!(file, "{text}").expect("fixture file should be writable");
    (dir, path)
}

#[test]
fn book_keeps_constructor_fields() {
    let (_dir, path) = temp_content_file("It was the best of times.");
    let handle = ContentHandle::open(&path).expect("fixture file should open");

    let book = Book::new(
        "The Catcher in the Rye",
        "J.D. Salinger",
        "978-0-316-76948-0",
        BookContent::Open(handle),
    );

    assert_eq!(book.title, "The Catcher in the Rye");
    assert_eq!(book.author, "J.D. Salinger");
    assert_eq!(book.isbn, "978-0-316-76948-0");
    assert!(book.has_content());
}

#[test]
fn book_without_content_has_absent_source() {
    let book = Book::without_content("T", "A", "I");

    assert!(!book.has_content());
    assert_eq!(book.content, BookContent::Absent);
}

#[test]
fn book_clone_shares_the_content_source() {
    let (_dir, path) = temp_content_file("shared");
    let handle = ContentHandle::open(&path).expect("fixture file should open");
    let book = Book::new("T", "A", "I", BookContent::Open(handle));

    let copy = book.clone();

    assert_eq!(copy, book);
    assert!(copy.has_content());
}

#[test]
fn independently_opened_handles_are_distinct_sources() {
    let (_dir, path) = temp_content_file("twice");
    let first = ContentHandle::open(&path).expect("fixture file should open");
    let second = ContentHandle::open(&path).expect("fixture file should open");

    assert!(!first.same_source(&second));
    assert_ne!(BookContent::Open(first), BookContent::Open(second));
}

#[test]
fn opening_missing_path_reports_the_path() {
    let error = ContentHandle::open("/nonexistent/shelfmark/book.txt")
        .expect_err("missing path must fail to open");

    let message = error.to_string();
    assert!(message.contains("failed to open content source"));
    assert!(message.contains("/nonexistent/shelfmark/book.txt"));
}

#[test]
fn user_without_book_has_no_held_book() {
    let user = User::new("Test User", "01");

    assert_eq!(user.name, "Test User");
    assert_eq!(user.id, "01");
    assert!(!user.holds_book());
}

#[test]
fn user_with_book_holds_a_field_equal_snapshot() {
    let book = Book::without_content("The Catcher in the Rye", "J.D. Salinger", "978-0-316-76948-0");
    let user = User::with_held_book("Test User", "01", book.clone());

    assert!(user.holds_book());
    let held = user.held_book.expect("held book should be present");
    assert_eq!(held.title, book.title);
    assert_eq!(held.author, book.author);
    assert_eq!(held.isbn, book.isbn);
}

#[test]
fn book_serialization_skips_the_content_handle() {
    let (_dir, path) = temp_content_file("not on the wire");
    let handle = ContentHandle::open(&path).expect("fixture file should open");
    let book = Book::new("T", "A", "I", BookContent::Open(handle));

    let json = serde_json::to_value(&book).expect("book should serialize");
    assert_eq!(json["title"], "T");
    assert_eq!(json["author"], "A");
    assert_eq!(json["isbn"], "I");
    assert!(json.get("content").is_none());

    let decoded: Book = serde_json::from_value(json).expect("book should deserialize");
    assert_eq!(decoded.content, BookContent::Absent);
}

#[test]
fn user_serialization_keeps_held_book_nullable() {
    let json = serde_json::to_value(User::new("N", "1")).expect("user should serialize");
    assert_eq!(json["held_book"], serde_json::Value::Null);

    let held = User::with_held_book("N", "1", Book::without_content("T", "A", "I"));
    let json = serde_json::to_value(&held).expect("user should serialize");
    assert_eq!(json["held_book"]["isbn"], "I");

    let decoded: User = serde_json::from_value(json).expect("user should deserialize");
    assert_eq!(decoded, held);
}
