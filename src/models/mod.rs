pub mod catalog;
pub mod comment;
pub mod recipe;
