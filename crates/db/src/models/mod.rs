pub mod catalog;
pub mod person;
pub mod picture;
