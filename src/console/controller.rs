use serde::Serialize;
use crate::books::dto::BookDto;
use crate::catalog::command::add_book_cmd::{AddBookCommand, AddBookCommandRequest};
use crate::catalog::command::list_books_cmd::{ListBooksCommand, ListBooksCommandRequest};
use crate::catalog::command::search_book_cmd::{SearchBookCommand, SearchBookCommandRequest};
use crate::catalog::command::update_book_cmd::{UpdateBookCommand, UpdateBookCommandRequest};
use crate::checkout::command::borrow_book_cmd::{BorrowBookCommand, BorrowBookCommandRequest};
use crate::checkout::command::return_book_cmd::{ReturnBookCommand, ReturnBookCommandRequest};
use crate::console::menu::MenuCommand;
use crate::core::command::{Command, CommandError};
use crate::core::domain::OutputFormat;
use crate::core::library::LibraryResult;
use crate::library::system::LibrarySystem;
use crate::patrons::command::list_patrons_cmd::{ListPatronsCommand, ListPatronsCommandRequest};
use crate::patrons::dto::PatronDto;

pub const BOOK_ADDED: &str = "Book added.";
pub const BOOK_UPDATED: &str = "Book updated.";
pub const BOOK_BORROWED: &str = "Book borrowed.";
pub const BOOK_RETURNED: &str = "Book returned.";
pub const INVALID_OPTION: &str = "Invalid option.";
pub const GOODBYE: &str = "Exiting Library System. Goodbye!";

// Reply is the outcome of one menu command, rendered by the console driver
#[derive(Debug, PartialEq, Serialize)]
#[serde(tag = "reply", rename_all = "snake_case")]
pub enum Reply {
    Message {
        message: String,
    },
    Book {
        book: BookDto,
    },
    Books {
        books: Vec<BookDto>,
    },
    Patrons {
        patrons: Vec<PatronDto>,
    },
    Error {
        error: CommandError,
    },
    Exit {
        message: String,
    },
}

impl Reply {
    pub fn message(message: &str) -> Reply {
        Reply::Message { message: message.to_string() }
    }

    pub fn is_exit(&self) -> bool {
        matches!(self, Reply::Exit { .. })
    }

    pub fn render(&self, format: OutputFormat) -> LibraryResult<String> {
        match format {
            OutputFormat::Json => Ok(serde_json::to_string(self)?),
            OutputFormat::Text => Ok(self.to_text()),
        }
    }

    fn to_text(&self) -> String {
        match self {
            Reply::Message { message } => message.to_string(),
            Reply::Book { book } => book.to_string(),
            Reply::Books { books } => {
                books.iter().map(BookDto::to_string).collect::<Vec<_>>().join("\n")
            }
            Reply::Patrons { patrons } => {
                patrons.iter().map(PatronDto::to_string).collect::<Vec<_>>().join("\n")
            }
            Reply::Error { error } => format!("Error: {}", error.message()),
            Reply::Exit { message } => message.to_string(),
        }
    }
}

impl From<CommandError> for Reply {
    fn from(error: CommandError) -> Self {
        Reply::Error { error }
    }
}

fn reply_with<T, F>(res: Result<T, CommandError>, on_success: F) -> Reply
    where F: FnOnce(T) -> Reply {
    match res {
        Ok(val) => on_success(val),
        Err(err) => Reply::from(err),
    }
}

// Runs one menu command against the system. Every failure becomes a reply;
// nothing here touches the console.
pub fn dispatch(system: &mut LibrarySystem, command: MenuCommand) -> Reply {
    match command {
        MenuCommand::AddBook { title, author, isbn } => {
            let req = AddBookCommandRequest::new(title.as_str(), author.as_str(), isbn.as_str());
            reply_with(AddBookCommand::new(system).execute(req), |_| Reply::message(BOOK_ADDED))
        }
        MenuCommand::Search { query } => {
            match SearchBookCommand::new(system).execute(SearchBookCommandRequest::new(query.as_str())) {
                Ok(res) => Reply::Book { book: res.book },
                // a search miss is an answer, not an error
                Err(CommandError::NotFound { message }) => Reply::Message { message },
                Err(err) => Reply::from(err),
            }
        }
        MenuCommand::UpdateBook { isbn, title, author } => {
            let req = UpdateBookCommandRequest::new(isbn.as_str(), title.as_str(), author.as_str());
            reply_with(UpdateBookCommand::new(system).execute(req), |_| Reply::message(BOOK_UPDATED))
        }
        MenuCommand::Borrow { user_id, isbn } => {
            let req = BorrowBookCommandRequest::new(user_id, isbn);
            reply_with(BorrowBookCommand::new(system).execute(req), |_| Reply::message(BOOK_BORROWED))
        }
        MenuCommand::Return { user_id, isbn } => {
            let req = ReturnBookCommandRequest::new(user_id, isbn);
            reply_with(ReturnBookCommand::new(system).execute(req), |_| Reply::message(BOOK_RETURNED))
        }
        MenuCommand::ListBooks => {
            reply_with(ListBooksCommand::new(system).execute(ListBooksCommandRequest::default()),
                       |res| Reply::Books { books: res.books })
        }
        MenuCommand::ListUsers => {
            reply_with(ListPatronsCommand::new(system).execute(ListPatronsCommandRequest::default()),
                       |res| Reply::Patrons { patrons: res.patrons })
        }
        MenuCommand::Exit => Reply::Exit { message: GOODBYE.to_string() },
        MenuCommand::Invalid { .. } => Reply::message(INVALID_OPTION),
    }
}
