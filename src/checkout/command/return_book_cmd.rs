use serde::{Deserialize, Serialize};
use crate::books::dto::BookDto;
use crate::core::command::{Command, CommandError};
use crate::library::system::LibrarySystem;

pub struct ReturnBookCommand<'a> {
    system: &'a mut LibrarySystem,
}

impl<'a> ReturnBookCommand<'a> {
    pub fn new(system: &'a mut LibrarySystem) -> Self {
        Self {
            system,
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct ReturnBookCommandRequest {
    user_id: String,
    isbn: String,
}

impl ReturnBookCommandRequest {
    pub fn new(user_id: String, isbn: String) -> Self {
        Self {
            user_id,
            isbn,
        }
    }
}


#[derive(Debug, Serialize)]
pub struct ReturnBookCommandResponse {
    pub user_id: String,
    pub book: BookDto,
}

impl Command<ReturnBookCommandRequest, ReturnBookCommandResponse> for ReturnBookCommand<'_> {
    fn execute(&mut self, req: ReturnBookCommandRequest) -> Result<ReturnBookCommandResponse, CommandError> {
        let book = self.system.return_book(req.user_id.as_str(), req.isbn.as_str())?;
        Ok(ReturnBookCommandResponse { user_id: req.user_id, book })
    }
}
