use std::fmt;
use std::fmt::{Display, Formatter};
use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use crate::books::domain::model::BookEntity;
use crate::core::domain::Identifiable;
use crate::utils::date::serializer;

// BookDto is a read-only snapshot of a catalog book used for display and replies
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BookDto {
    pub title: String,
    pub author: String,
    pub isbn: String,
    pub available: bool,
    #[serde(with = "serializer")]
    pub created_at: NaiveDateTime,
    #[serde(with = "serializer")]
    pub updated_at: NaiveDateTime,
}

impl From<&BookEntity> for BookDto {
    fn from(other: &BookEntity) -> Self {
        Self {
            title: other.title.to_string(),
            author: other.author.to_string(),
            isbn: other.isbn.to_string(),
            available: other.available,
            created_at: other.created_at,
            updated_at: other.updated_at,
        }
    }
}

impl Identifiable for BookDto {
    fn id(&self) -> &str {
        self.isbn.as_str()
    }
}

impl Display for BookDto {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        write!(f, "Title: {}, Author: {}, ISBN: {}, Available: {}",
               self.title, self.author, self.isbn, if self.available { "Yes" } else { "No" })
    }
}
