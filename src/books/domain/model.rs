use std::fmt;
use std::fmt::{Display, Formatter};
use chrono::{NaiveDateTime, Utc};
use serde::{Deserialize, Serialize};
use crate::core::domain::Identifiable;
use crate::utils::date::serializer;

// BookId is the catalog-assigned handle patrons use to refer to a held book.
// Handles are never reused, so a later book with the same isbn cannot shadow it.
#[derive(Debug, PartialEq, Eq, Hash, Clone, Copy, Serialize, Deserialize)]
pub struct BookId(pub u64);

impl Display for BookId {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

// BookEntity abstracts a single physical book owned by the catalog.
#[derive(Debug, PartialEq, Clone, Serialize, Deserialize)]
pub struct BookEntity {
    pub title: String,
    pub author: String,
    pub isbn: String,
    pub available: bool,
    #[serde(with = "serializer")]
    pub created_at: NaiveDateTime,
    #[serde(with = "serializer")]
    pub updated_at: NaiveDateTime,
}

impl BookEntity {
    pub fn new(title: &str, author: &str, isbn: &str) -> Self {
        let now = Utc::now().naive_utc();
        Self {
            title: title.to_string(),
            author: author.to_string(),
            isbn: isbn.to_string(),
            available: true,
            created_at: now,
            updated_at: now,
        }
    }

    pub fn is_available(&self) -> bool {
        self.available
    }

    pub(crate) fn set_available(&mut self, available: bool) {
        self.available = available;
        self.updated_at = Utc::now().naive_utc();
    }

    pub(crate) fn rename(&mut self, title: &str, author: &str) {
        self.title = title.to_string();
        self.author = author.to_string();
        self.updated_at = Utc::now().naive_utc();
    }
}

impl Identifiable for BookEntity {
    fn id(&self) -> &str {
        self.isbn.as_str()
    }
}
