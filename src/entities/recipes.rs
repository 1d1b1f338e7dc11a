use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "recipes")]
pub struct Model {
    /// Seven character `[A-Z0-9]` code assigned by the seed loader.
    #[sea_orm(primary_key, auto_increment = false)]
    pub recipe_id: String,
    pub recipe_name: String,
    #[sea_orm(column_type = "Text")]
    pub recipe_context: String,
    pub likes: i32,
    pub dislikes: i32,
    /// JSON object of platform -> URL. Always `{}` when seeded.
    #[sea_orm(column_type = "Text")]
    pub social_media_links: String,
    pub veg_id: Option<i32>,
    pub protein_id: Option<i32>,
    pub flavor_id: Option<i32>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::vegetables::Entity",
        from = "Column::VegId",
        to = "super::vegetables::Column::VegId",
        on_update = "NoAction",
        on_delete = "NoAction"
    )]
    Vegetables,
    #[sea_orm(
        belongs_to = "super::proteins::Entity",
        from = "Column::ProteinId",
        to = "super::proteins::Column::ProteinId",
        on_update = "NoAction",
        on_delete = "NoAction"
    )]
    Proteins,
    #[sea_orm(
        belongs_to = "super::flavors::Entity",
        from = "Column::FlavorId",
        to = "super::flavors::Column::FlavorId",
        on_update = "NoAction",
        on_delete = "NoAction"
    )]
    Flavors,
    #[sea_orm(has_many = "super::comments::Entity")]
    Comments,
}

impl Related<super::vegetables::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Vegetables.def()
    }
}

impl Related<super::proteins::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Proteins.def()
    }
}

impl Related<super::flavors::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Flavors.def()
    }
}

impl Related<super::comments::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Comments.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
