//! Catalog presentation probe.
//!
//! # Responsibility
//! - Seed the process-wide catalog with a couple of records.
//! - Render ordered book views for quick local sanity checks.

use shelfmark_core::{Book, OrganizationKey, SharedCatalog, User};

const BOX_RULE: &str = "========================";
const BOX_DIVIDER: &str = "------------------------";

/// Renders one boxed block: title, author and isbn on their own lines.
fn render_book(book: &Book) -> String {
    format!(
        "{BOX_RULE}\n|{}|\n{BOX_DIVIDER}\n|{}|\n{BOX_DIVIDER}\n|{}|\n{BOX_RULE}\n",
        book.title, book.author, book.isbn
    )
}

fn main() {
    let catalog = SharedCatalog::process_wide();
    catalog.add_book(Book::without_content(
        "The Catcher in the Rye",
        "J.D. Salinger",
        "978-0-316-76948-0",
    ));
    catalog.add_book(Book::without_content(
        "The Art of Computer Programming",
        "Donald Knuth",
        "978-0-306-40615-7",
    ));
    catalog.add_user(User::new("Test User", "01"));

    println!("shelfmark_core version={}", shelfmark_core::core_version());
    for book in catalog.organize_books(OrganizationKey::Name) {
        println!("{}", render_book(&book));
    }
}

#[cfg(test)]
mod tests {
    use super::render_book;
    use shelfmark_core::Book;

    #[test]
    fn render_shows_all_fields_in_order() {
        let rendered = render_book(&Book::without_content("T", "A", "I"));

        let title = rendered.find("|T|").expect("title should be rendered");
        let author = rendered.find("|A|").expect("author should be rendered");
        let isbn = rendered.find("|I|").expect("isbn should be rendered");
        assert!(title < author && author < isbn);
    }
}
