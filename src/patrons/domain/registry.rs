use crate::core::domain::Identifiable;
use crate::core::library::{LibraryError, LibraryResult};
use crate::patrons::domain::model::Patron;
use crate::utils::array::DynamicArray;

// PatronRegistry owns every registered patron, keyed by unique id.
#[derive(Debug, Clone, Default)]
pub struct PatronRegistry {
    patrons: DynamicArray<Patron>,
}

impl PatronRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            patrons: DynamicArray::with_capacity(capacity),
        }
    }

    pub fn register(&mut self, patron: Patron) -> LibraryResult<()> {
        if self.find_by_id(patron.id()).is_some() {
            return Err(LibraryError::duplicate_key(
                format!("patron with id {} already registered", patron.id()).as_str()));
        }
        self.patrons.add(patron);
        Ok(())
    }

    pub fn find_by_id(&self, id: &str) -> Option<&Patron> {
        self.patrons.iter().find(|patron| patron.id() == id)
    }

    pub fn find_by_id_mut(&mut self, id: &str) -> Option<&mut Patron> {
        self.patrons.iter_mut().find(|patron| patron.id() == id)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Patron> {
        self.patrons.iter()
    }

    pub fn size(&self) -> usize {
        self.patrons.size()
    }
}

#[cfg(test)]
mod tests {
    use crate::core::library::LibraryError;
    use crate::patrons::domain::model::Patron;
    use crate::patrons::domain::registry::PatronRegistry;

    #[test]
    fn test_should_register_and_find_patron() {
        let mut registry = PatronRegistry::new();
        registry.register(Patron::new("Mandeep", "1001")).expect("should register");
        registry.register(Patron::new("Cameron", "1002")).expect("should register");
        assert_eq!(2, registry.size());
        assert_eq!("Cameron", registry.find_by_id("1002").expect("should find").name.as_str());
        assert!(registry.find_by_id("1003").is_none());
        assert!(registry.find_by_id_mut("1001").is_some());
    }

    #[test]
    fn test_should_reject_duplicate_id() {
        let mut registry = PatronRegistry::with_capacity(1);
        registry.register(Patron::new("Mandeep", "1001")).expect("should register");
        let res = registry.register(Patron::new("Other", "1001"));
        assert!(matches!(res, Err(LibraryError::DuplicateKey{ .. })));
        assert_eq!(1, registry.size());
    }

    #[test]
    fn test_should_iterate_in_registration_order() {
        let mut registry = PatronRegistry::with_capacity(1);
        for id in ["3", "1", "2"] {
            registry.register(Patron::new("p", id)).expect("should register");
        }
        let ids: Vec<&str> = registry.iter().map(|p| p.id.as_str()).collect();
        assert_eq!(vec!["3", "1", "2"], ids);
    }
}
