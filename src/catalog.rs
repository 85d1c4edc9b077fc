pub mod domain;

pub mod command {
    pub mod add_book_cmd;
    pub mod list_books_cmd;
    pub mod search_book_cmd;
    pub mod update_book_cmd;
}
