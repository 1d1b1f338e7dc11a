pub use super::comments::Entity as Comments;
pub use super::flavors::Entity as Flavors;
pub use super::proteins::Entity as Proteins;
pub use super::recipes::Entity as Recipes;
pub use super::vegetables::Entity as Vegetables;
