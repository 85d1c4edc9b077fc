pub mod factory;
pub mod system;
