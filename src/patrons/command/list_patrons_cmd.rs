use serde::{Deserialize, Serialize};
use crate::core::command::{Command, CommandError};
use crate::library::system::LibrarySystem;
use crate::patrons::dto::PatronDto;

pub struct ListPatronsCommand<'a> {
    system: &'a LibrarySystem,
}

impl<'a> ListPatronsCommand<'a> {
    pub fn new(system: &'a LibrarySystem) -> Self {
        Self {
            system,
        }
    }
}

#[derive(Debug, Default, Deserialize)]
pub struct ListPatronsCommandRequest {}

#[derive(Debug, Serialize)]
pub struct ListPatronsCommandResponse {
    pub patrons: Vec<PatronDto>,
}

impl Command<ListPatronsCommandRequest, ListPatronsCommandResponse> for ListPatronsCommand<'_> {
    fn execute(&mut self, _req: ListPatronsCommandRequest) -> Result<ListPatronsCommandResponse, CommandError> {
        Ok(ListPatronsCommandResponse {
            patrons: self.system.list_users().collect(),
        })
    }
}
