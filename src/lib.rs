pub mod books;
pub mod catalog;
pub mod checkout;
pub mod console;
pub mod core;
pub mod library;
pub mod patrons;
pub mod utils;
