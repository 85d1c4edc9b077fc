use serde::{Deserialize, Serialize};
use crate::books::dto::BookDto;
use crate::core::command::{Command, CommandError};
use crate::library::system::LibrarySystem;

pub struct ListBooksCommand<'a> {
    system: &'a LibrarySystem,
}

impl<'a> ListBooksCommand<'a> {
    pub fn new(system: &'a LibrarySystem) -> Self {
        Self {
            system,
        }
    }
}

#[derive(Debug, Default, Deserialize)]
pub struct ListBooksCommandRequest {}

#[derive(Debug, Serialize)]
pub struct ListBooksCommandResponse {
    pub books: Vec<BookDto>,
}

impl Command<ListBooksCommandRequest, ListBooksCommandResponse> for ListBooksCommand<'_> {
    fn execute(&mut self, _req: ListBooksCommandRequest) -> Result<ListBooksCommandResponse, CommandError> {
        Ok(ListBooksCommandResponse {
            books: self.system.list_books().collect(),
        })
    }
}
