use serde::{Deserialize, Serialize};
use crate::books::dto::BookDto;
use crate::core::command::{Command, CommandError};
use crate::library::system::LibrarySystem;

pub struct BorrowBookCommand<'a> {
    system: &'a mut LibrarySystem,
}

impl<'a> BorrowBookCommand<'a> {
    pub fn new(system: &'a mut LibrarySystem) -> Self {
        Self {
            system,
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct BorrowBookCommandRequest {
    user_id: String,
    isbn: String,
}

impl BorrowBookCommandRequest {
    pub fn new(user_id: String, isbn: String) -> Self {
        Self {
            user_id,
            isbn,
        }
    }
}


#[derive(Debug, Serialize)]
pub struct BorrowBookCommandResponse {
    pub user_id: String,
    pub book: BookDto,
}

impl Command<BorrowBookCommandRequest, BorrowBookCommandResponse> for BorrowBookCommand<'_> {
    fn execute(&mut self, req: BorrowBookCommandRequest) -> Result<BorrowBookCommandResponse, CommandError> {
        let book = self.system.borrow(req.user_id.as_str(), req.isbn.as_str())?;
        Ok(BorrowBookCommandResponse { user_id: req.user_id, book })
    }
}
