use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_index(
                Index::create()
                    .name("idx_recipes_combination")
                    .table(Recipes::Table)
                    .col(Recipes::VegId)
                    .col(Recipes::ProteinId)
                    .col(Recipes::FlavorId)
                    .if_not_exists()
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_comments_recipe_id")
                    .table(Comments::Table)
                    .col(Comments::RecipeId)
                    .if_not_exists()
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_index(
                Index::drop()
                    .name("idx_comments_recipe_id")
                    .table(Comments::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_index(
                Index::drop()
                    .name("idx_recipes_combination")
                    .table(Recipes::Table)
                    .to_owned(),
            )
            .await
    }
}

#[derive(DeriveIden)]
enum Recipes {
    Table,
    VegId,
    ProteinId,
    FlavorId,
}

#[derive(DeriveIden)]
enum Comments {
    Table,
    RecipeId,
}
