use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Vegetable {
    pub veg_id: i32,
    pub veg_name: String,
    pub veg_type_id: i32,
    pub veg_type_name: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Protein {
    pub protein_id: i32,
    pub protein_name: String,
    pub protein_type_id: i32,
    pub protein_type_name: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Flavor {
    pub flavor_id: i32,
    pub flavor_type: String,
}

/// The reference tables exposed through the catalog listings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CatalogKind {
    Vegetables,
    Proteins,
    Flavors,
}
