use serde::{Deserialize, Serialize};
use crate::books::dto::BookDto;
use crate::core::command::{Command, CommandError};
use crate::library::system::LibrarySystem;

pub struct SearchBookCommand<'a> {
    system: &'a LibrarySystem,
}

impl<'a> SearchBookCommand<'a> {
    pub fn new(system: &'a LibrarySystem) -> Self {
        Self {
            system,
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct SearchBookCommandRequest {
    pub query: String,
}

impl SearchBookCommandRequest {
    pub fn new(query: &str) -> Self {
        Self {
            query: query.to_string(),
        }
    }
}

#[derive(Debug, Serialize)]
pub struct SearchBookCommandResponse {
    pub book: BookDto,
}

impl SearchBookCommandResponse {
    pub fn new(book: BookDto) -> Self {
        Self {
            book,
        }
    }
}

impl Command<SearchBookCommandRequest, SearchBookCommandResponse> for SearchBookCommand<'_> {
    fn execute(&mut self, req: SearchBookCommandRequest) -> Result<SearchBookCommandResponse, CommandError> {
        self.system.search(req.query.as_str())
            .map_err(CommandError::from).map(SearchBookCommandResponse::new)
    }
}

#[cfg(test)]
mod tests {
    use crate::catalog::command::search_book_cmd::{SearchBookCommand, SearchBookCommandRequest};
    use crate::core::command::{Command, CommandError};
    use crate::core::domain::Configuration;
    use crate::library::factory::create_library_system;

    #[test]
    fn test_should_run_search_book() {
        let mut system = create_library_system(&Configuration::new("test")).expect("should create system");
        system.add_book("Dune", "Herbert", "111");
        let by_isbn = SearchBookCommand::new(&system)
            .execute(SearchBookCommandRequest::new("111")).expect("should find book");
        let by_title = SearchBookCommand::new(&system)
            .execute(SearchBookCommandRequest::new("Dune")).expect("should find book");
        assert_eq!(by_isbn.book, by_title.book);
    }

    #[test]
    fn test_should_fail_search_for_missing_book() {
        let system = create_library_system(&Configuration::new("test")).expect("should create system");
        let res = SearchBookCommand::new(&system).execute(SearchBookCommandRequest::new("Dune"));
        assert!(matches!(res, Err(CommandError::NotFound{ .. })));
    }
}
