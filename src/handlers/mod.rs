pub mod catalog;
pub mod orders;
