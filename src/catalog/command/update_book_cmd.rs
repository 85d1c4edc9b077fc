use serde::{Deserialize, Serialize};
use crate::books::dto::BookDto;
use crate::core::command::{Command, CommandError};
use crate::library::system::LibrarySystem;

pub struct UpdateBookCommand<'a> {
    system: &'a mut LibrarySystem,
}

impl<'a> UpdateBookCommand<'a> {
    pub fn new(system: &'a mut LibrarySystem) -> Self {
        Self {
            system,
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct UpdateBookCommandRequest {
    pub isbn: String,
    pub title: String,
    pub author: String,
}

impl UpdateBookCommandRequest {
    pub fn new(isbn: &str, title: &str, author: &str) -> Self {
        Self {
            isbn: isbn.to_string(),
            title: title.to_string(),
            author: author.to_string(),
        }
    }
}

#[derive(Debug, Serialize)]
pub struct UpdateBookCommandResponse {
    pub book: BookDto,
}

impl UpdateBookCommandResponse {
    pub fn new(book: BookDto) -> Self {
        Self {
            book,
        }
    }
}

impl Command<UpdateBookCommandRequest, UpdateBookCommandResponse> for UpdateBookCommand<'_> {
    fn execute(&mut self, req: UpdateBookCommandRequest) -> Result<UpdateBookCommandResponse, CommandError> {
        self.system.update(req.isbn.as_str(), req.title.as_str(), req.author.as_str())
            .map_err(CommandError::from).map(UpdateBookCommandResponse::new)
    }
}
