use crate::books::domain::model::{BookEntity, BookId};
use crate::books::dto::BookDto;
use crate::core::library::{LibraryError, LibraryResult};

struct BookNode {
    id: BookId,
    book: BookEntity,
    next: Option<Box<BookNode>>,
}

/// Singly linked list that exclusively owns every book in the catalog.
///
/// New books are prepended, so traversal order is most-recently-added first.
/// Isbn uniqueness is not enforced: duplicates coexist and isbn lookups return
/// the front-most match. Each node carries a `BookId` so holders can resolve
/// the exact book they borrowed.
#[derive(Default)]
pub struct LinkedCatalog {
    head: Option<Box<BookNode>>,
    len: usize,
    next_id: u64,
}

impl LinkedCatalog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_book(&mut self, book: BookEntity) -> BookId {
        let id = BookId(self.next_id);
        self.next_id += 1;
        let node = Box::new(BookNode {
            id,
            book,
            next: self.head.take(),
        });
        self.head = Some(node);
        self.len += 1;
        id
    }

    pub fn find_by_isbn(&self, isbn: &str) -> Option<&BookEntity> {
        self.iter().map(|(_, book)| book).find(|book| book.isbn == isbn)
    }

    pub fn find_by_isbn_mut(&mut self, isbn: &str) -> Option<(BookId, &mut BookEntity)> {
        self.find_node_mut(|node| node.book.isbn == isbn).map(|node| (node.id, &mut node.book))
    }

    pub fn find_by_title(&self, title: &str) -> Option<&BookEntity> {
        self.iter().map(|(_, book)| book).find(|book| book.title == title)
    }

    pub fn find_by_id(&self, id: BookId) -> Option<&BookEntity> {
        self.iter().find(|(book_id, _)| *book_id == id).map(|(_, book)| book)
    }

    pub fn find_by_id_mut(&mut self, id: BookId) -> Option<&mut BookEntity> {
        self.find_node_mut(|node| node.id == id).map(|node| &mut node.book)
    }

    // Mutates title and author of the first isbn match; availability and isbn are kept.
    pub fn update_book(&mut self, isbn: &str, new_title: &str, new_author: &str) -> LibraryResult<BookDto> {
        let (_, book) = self.find_by_isbn_mut(isbn).ok_or_else(LibraryError::book_not_found)?;
        book.rename(new_title, new_author);
        Ok(BookDto::from(&*book))
    }

    pub fn iter(&self) -> Iter<'_> {
        Iter { next: self.head.as_deref() }
    }

    // Lazy snapshots in list order; each call starts again from the head.
    pub fn books(&self) -> impl Iterator<Item = BookDto> + '_ {
        self.iter().map(|(_, book)| BookDto::from(book))
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.head.is_none()
    }

    fn find_node_mut<P>(&mut self, predicate: P) -> Option<&mut BookNode>
        where P: Fn(&BookNode) -> bool {
        let mut current = self.head.as_deref_mut();
        while let Some(node) = current {
            if predicate(node) {
                return Some(node);
            }
            current = node.next.as_deref_mut();
        }
        None
    }
}

// Unlinks nodes one at a time; the default recursive drop would overflow on long lists.
impl Drop for LinkedCatalog {
    fn drop(&mut self) {
        let mut current = self.head.take();
        while let Some(mut node) = current {
            current = node.next.take();
        }
    }
}

impl std::fmt::Debug for LinkedCatalog {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_list().entries(self.iter().map(|(_, book)| book)).finish()
    }
}

pub struct Iter<'a> {
    next: Option<&'a BookNode>,
}

impl<'a> Iterator for Iter<'a> {
    type Item = (BookId, &'a BookEntity);

    fn next(&mut self) -> Option<Self::Item> {
        self.next.map(|node| {
            self.next = node.next.as_deref();
            (node.id, &node.book)
        })
    }
}

impl<'a> IntoIterator for &'a LinkedCatalog {
    type Item = (BookId, &'a BookEntity);
    type IntoIter = Iter<'a>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

#[cfg(test)]
mod tests {
    use crate::books::domain::model::BookEntity;
    use crate::catalog::domain::linked_catalog::LinkedCatalog;
    use crate::core::library::LibraryError;

    fn catalog_of(books: &[(&str, &str, &str)]) -> LinkedCatalog {
        let mut catalog = LinkedCatalog::new();
        for (title, author, isbn) in books {
            catalog.add_book(BookEntity::new(title, author, isbn));
        }
        catalog
    }

    #[test]
    fn test_should_add_book_at_front() {
        let catalog = catalog_of(&[("A", "a", "1"), ("B", "b", "2"), ("C", "c", "3")]);
        let isbns: Vec<String> = catalog.books().map(|b| b.isbn).collect();
        assert_eq!(vec!["3", "2", "1"], isbns);
        assert_eq!(3, catalog.len());
        assert!(!catalog.is_empty());
    }

    #[test]
    fn test_should_find_by_isbn() {
        let catalog = catalog_of(&[("Dune", "Herbert", "111"), ("Emma", "Austen", "222")]);
        let book = catalog.find_by_isbn("111").expect("should find book");
        assert_eq!("Dune", book.title.as_str());
        assert!(catalog.find_by_isbn("999").is_none());
        assert!(catalog.find_by_isbn("Dune").is_none());
    }

    #[test]
    fn test_should_find_first_title_match_in_list_order() {
        let catalog = catalog_of(&[("Dune", "Herbert", "111"), ("Dune", "Someone", "333")]);
        let book = catalog.find_by_title("Dune").expect("should find book");
        assert_eq!("333", book.isbn.as_str());
        assert!(catalog.find_by_title("dune").is_none());
    }

    #[test]
    fn test_should_keep_duplicate_isbns() {
        let mut catalog = catalog_of(&[("Old", "a", "111")]);
        let old_id = catalog.iter().next().map(|(id, _)| id).expect("should have book");
        let new_id = catalog.add_book(BookEntity::new("New", "b", "111"));
        assert_ne!(old_id, new_id);
        assert_eq!(2, catalog.len());
        assert_eq!("New", catalog.find_by_isbn("111").expect("should find").title.as_str());
        assert_eq!("Old", catalog.find_by_id(old_id).expect("should resolve").title.as_str());
    }

    #[test]
    fn test_should_update_book() {
        let mut catalog = catalog_of(&[("Dune", "Herbert", "111")]);
        catalog.find_by_isbn_mut("111").expect("should find").1.available = false;
        let updated = catalog.update_book("111", "Dune Messiah", "F. Herbert").expect("should update");
        assert_eq!("Dune Messiah", updated.title.as_str());
        let loaded = catalog.find_by_isbn("111").expect("should find");
        assert_eq!("Dune Messiah", loaded.title.as_str());
        assert_eq!("F. Herbert", loaded.author.as_str());
        assert_eq!("111", loaded.isbn.as_str());
        assert!(!loaded.available);
    }

    #[test]
    fn test_should_not_update_missing_book() {
        let mut catalog = catalog_of(&[("Dune", "Herbert", "111")]);
        let res = catalog.update_book("999", "X", "Y");
        assert!(matches!(res, Err(LibraryError::BookNotFound{ .. })));
        let books: Vec<String> = catalog.books().map(|b| b.to_string()).collect();
        assert_eq!(vec!["Title: Dune, Author: Herbert, ISBN: 111, Available: Yes"], books);
    }

    #[test]
    fn test_should_restart_books_iteration() {
        let catalog = catalog_of(&[("A", "a", "1"), ("B", "b", "2")]);
        assert_eq!(2, catalog.books().count());
        assert_eq!(2, catalog.books().count());
        assert_eq!(0, LinkedCatalog::new().books().count());
    }

    #[test]
    fn test_should_resolve_by_id() {
        let mut catalog = LinkedCatalog::new();
        let id = catalog.add_book(BookEntity::new("Dune", "Herbert", "111"));
        catalog.add_book(BookEntity::new("Emma", "Austen", "222"));
        catalog.find_by_id_mut(id).expect("should resolve").available = false;
        assert!(!catalog.find_by_id(id).expect("should resolve").available);
        assert!(catalog.find_by_isbn("222").expect("should find").available);
    }

    #[test]
    fn test_should_drop_long_catalog() {
        let mut catalog = LinkedCatalog::new();
        for i in 0..200_000 {
            catalog.add_book(BookEntity::new("t", "a", i.to_string().as_str()));
        }
        assert_eq!(200_000, catalog.len());
        drop(catalog);
    }
}
