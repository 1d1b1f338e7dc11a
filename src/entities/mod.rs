pub mod prelude;

pub mod comments;
pub mod flavors;
pub mod proteins;
pub mod recipes;
pub mod vegetables;
