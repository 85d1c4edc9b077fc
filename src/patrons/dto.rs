use std::fmt;
use std::fmt::{Display, Formatter};
use serde::{Deserialize, Serialize};
use crate::books::dto::BookDto;
use crate::core::domain::Identifiable;

// PatronDto is a snapshot of a patron with the current state of each held book.
#[derive(Debug, PartialEq, Clone, Serialize, Deserialize)]
pub struct PatronDto {
    pub id: String,
    pub name: String,
    pub borrowed: Vec<BookDto>,
}

impl Identifiable for PatronDto {
    fn id(&self) -> &str {
        self.id.as_str()
    }
}

impl Display for PatronDto {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        write!(f, "User ID: {}, Name: {}\nBorrowed books:", self.id, self.name)?;
        for book in self.borrowed.iter() {
            write!(f, "\n  - {}", book)?;
        }
        Ok(())
    }
}
