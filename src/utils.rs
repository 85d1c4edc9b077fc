pub mod array;
pub mod date;
pub mod logs;
