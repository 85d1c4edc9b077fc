use tracing::debug;
use crate::books::domain::model::{BookEntity, BookId};
use crate::books::dto::BookDto;
use crate::catalog::domain::linked_catalog::LinkedCatalog;
use crate::core::domain::Identifiable;
use crate::core::library::{LibraryError, LibraryResult};
use crate::patrons::dto::PatronDto;
use crate::utils::array::DynamicArray;

// Patron abstracts a registered library member and the books it currently holds.
// Held books are kept as catalog handles and resolved through the catalog on use.
#[derive(Debug, Clone)]
pub struct Patron {
    pub name: String,
    pub id: String,
    borrowed: DynamicArray<BookId>,
}

impl Patron {
    pub fn new(name: &str, id: &str) -> Self {
        Self {
            name: name.to_string(),
            id: id.to_string(),
            borrowed: DynamicArray::new(),
        }
    }

    pub fn with_capacity(name: &str, id: &str, capacity: usize) -> Self {
        Self {
            name: name.to_string(),
            id: id.to_string(),
            borrowed: DynamicArray::with_capacity(capacity),
        }
    }

    pub fn borrowed(&self) -> &DynamicArray<BookId> {
        &self.borrowed
    }

    // Marks the book unavailable and records the handle; nothing changes on failure.
    pub fn borrow(&mut self, book_id: BookId, book: &mut BookEntity) -> LibraryResult<()> {
        if !book.is_available() {
            return Err(LibraryError::unavailable());
        }
        book.set_available(false);
        self.borrowed.add(book_id);
        debug!("patron {} holds {} books", self.id, self.borrowed.size());
        Ok(())
    }

    pub fn return_book(&mut self, isbn: &str, catalog: &mut LinkedCatalog) -> LibraryResult<BookId> {
        let position = self.borrowed
            .position(|id| catalog.find_by_id(*id).is_some_and(|book| book.isbn == isbn))
            .ok_or_else(LibraryError::not_borrowed)?;
        let book_id = *self.borrowed.get(position)?;
        let book = catalog.find_by_id_mut(book_id).ok_or_else(LibraryError::not_borrowed)?;
        book.set_available(true);
        self.borrowed.remove(position)?;
        Ok(book_id)
    }

    pub fn display(&self, catalog: &LinkedCatalog) -> PatronDto {
        PatronDto {
            id: self.id.to_string(),
            name: self.name.to_string(),
            borrowed: self.borrowed.iter()
                .filter_map(|id| catalog.find_by_id(*id))
                .map(BookDto::from)
                .collect(),
        }
    }
}

impl Identifiable for Patron {
    fn id(&self) -> &str {
        self.id.as_str()
    }
}
