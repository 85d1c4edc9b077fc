pub mod linked_catalog;
