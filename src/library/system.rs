use tracing::{debug, info, warn};
use crate::books::domain::model::BookEntity;
use crate::books::dto::BookDto;
use crate::catalog::domain::linked_catalog::LinkedCatalog;
use crate::core::domain::Configuration;
use crate::core::library::{LibraryError, LibraryResult};
use crate::patrons::domain::model::Patron;
use crate::patrons::domain::registry::PatronRegistry;
use crate::patrons::dto::PatronDto;

/// Owns the catalog and the patron registry and runs every catalog operation.
///
/// All mutation goes through `&mut self`, so the availability check and the
/// flag flip in `borrow` can never interleave with another caller.
#[derive(Debug)]
pub struct LibrarySystem {
    branch_id: String,
    capacity: usize,
    catalog: LinkedCatalog,
    patrons: PatronRegistry,
}

impl LibrarySystem {
    pub fn new(config: &Configuration) -> Self {
        Self {
            branch_id: config.branch_id.to_string(),
            capacity: config.initial_capacity,
            catalog: LinkedCatalog::new(),
            patrons: PatronRegistry::with_capacity(config.initial_capacity),
        }
    }

    pub fn branch_id(&self) -> &str {
        self.branch_id.as_str()
    }

    pub fn catalog(&self) -> &LinkedCatalog {
        &self.catalog
    }

    pub fn register_patron(&mut self, name: &str, id: &str) -> LibraryResult<()> {
        self.patrons.register(Patron::with_capacity(name, id, self.capacity))?;
        info!("registered patron {} at branch {}", id, self.branch_id);
        Ok(())
    }

    pub fn add_book(&mut self, title: &str, author: &str, isbn: &str) -> BookDto {
        let book = BookEntity::new(title, author, isbn);
        let dto = BookDto::from(&book);
        let id = self.catalog.add_book(book);
        info!("added book {} isbn={:?} title={:?}", id, isbn, title);
        dto
    }

    // Exact isbn match first, then exact title match.
    pub fn search(&self, query: &str) -> LibraryResult<BookDto> {
        let found = self.catalog.find_by_isbn(query)
            .or_else(|| self.catalog.find_by_title(query));
        debug!("search {:?} found={}", query, found.is_some());
        found.map(BookDto::from).ok_or_else(LibraryError::book_not_found)
    }

    pub fn update(&mut self, isbn: &str, title: &str, author: &str) -> LibraryResult<BookDto> {
        let res = self.catalog.update_book(isbn, title, author);
        match &res {
            Ok(_) => info!("updated book isbn={:?}", isbn),
            Err(err) => warn!("update of isbn={:?} rejected: {}", isbn, err),
        }
        res
    }

    pub fn borrow(&mut self, user_id: &str, isbn: &str) -> LibraryResult<BookDto> {
        let patron = self.patrons.find_by_id_mut(user_id).ok_or_else(LibraryError::user_not_found)?;
        let (book_id, book) = self.catalog.find_by_isbn_mut(isbn).ok_or_else(LibraryError::book_not_found)?;
        match patron.borrow(book_id, book) {
            Ok(()) => {
                info!("patron {} borrowed {} isbn={:?}", user_id, book_id, isbn);
                Ok(BookDto::from(&*book))
            }
            Err(err) => {
                warn!("patron {} cannot borrow isbn={:?}: {}", user_id, isbn, err);
                Err(err)
            }
        }
    }

    pub fn return_book(&mut self, user_id: &str, isbn: &str) -> LibraryResult<BookDto> {
        let patron = self.patrons.find_by_id_mut(user_id).ok_or_else(LibraryError::user_not_found)?;
        match patron.return_book(isbn, &mut self.catalog) {
            Ok(book_id) => {
                info!("patron {} returned {} isbn={:?}", user_id, book_id, isbn);
                self.catalog.find_by_id(book_id).map(BookDto::from).ok_or_else(LibraryError::book_not_found)
            }
            Err(err) => {
                warn!("patron {} cannot return isbn={:?}: {}", user_id, isbn, err);
                Err(err)
            }
        }
    }

    pub fn find_patron(&self, user_id: &str) -> LibraryResult<PatronDto> {
        self.patrons.find_by_id(user_id)
            .map(|patron| patron.display(&self.catalog))
            .ok_or_else(LibraryError::user_not_found)
    }

    pub fn list_books(&self) -> impl Iterator<Item = BookDto> + '_ {
        self.catalog.books()
    }

    pub fn list_users(&self) -> impl Iterator<Item = PatronDto> + '_ {
        self.patrons.iter().map(|patron| patron.display(&self.catalog))
    }
}
