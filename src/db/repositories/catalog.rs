use super::fetch_page;
use crate::domain::{Page, PageRequest};
use crate::entities::{flavors, prelude::*, proteins, vegetables};
use crate::models::catalog::{Flavor, Protein, Vegetable};
use anyhow::Result;
use sea_orm::{DatabaseConnection, EntityTrait, PaginatorTrait, QueryOrder, Set, TransactionTrait};

/// Read and bulk-insert access to the vegetable, protein and flavor tables.
pub struct CatalogRepository {
    conn: DatabaseConnection,
}

impl CatalogRepository {
    #[must_use]
    pub const fn new(conn: DatabaseConnection) -> Self {
        Self { conn }
    }

    // ========================================================================
    // Model Conversion Helpers
    // ========================================================================

    fn map_vegetable(m: vegetables::Model) -> Vegetable {
        Vegetable {
            veg_id: m.veg_id,
            veg_name: m.veg_name,
            veg_type_id: m.veg_type_id,
            veg_type_name: m.veg_type_name,
        }
    }

    fn map_protein(m: proteins::Model) -> Protein {
        Protein {
            protein_id: m.protein_id,
            protein_name: m.protein_name,
            protein_type_id: m.protein_type_id,
            protein_type_name: m.protein_type_name,
        }
    }

    fn map_flavor(m: flavors::Model) -> Flavor {
        Flavor {
            flavor_id: m.flavor_id,
            flavor_type: m.flavor_type,
        }
    }

    // ========================================================================
    // Vegetables
    // ========================================================================

    pub async fn count_vegetables(&self) -> Result<u64> {
        Ok(Vegetables::find().count(&self.conn).await?)
    }

    pub async fn list_vegetables(&self, request: PageRequest) -> Result<Page<Vegetable>> {
        let select = Vegetables::find().order_by_asc(vegetables::Column::VegId);
        let page = fetch_page(&self.conn, select, request).await?;
        Ok(page.map(Self::map_vegetable))
    }

    pub async fn insert_vegetables(&self, batch: &[Vegetable]) -> Result<u64> {
        if batch.is_empty() {
            return Ok(0);
        }

        let models = batch.iter().map(|v| vegetables::ActiveModel {
            veg_id: Set(v.veg_id),
            veg_name: Set(v.veg_name.clone()),
            veg_type_id: Set(v.veg_type_id),
            veg_type_name: Set(v.veg_type_name.clone()),
        });

        let txn = self.conn.begin().await?;
        let inserted = Vegetables::insert_many(models)
            .exec_without_returning(&txn)
            .await?;
        txn.commit().await?;

        Ok(inserted)
    }

    // ========================================================================
    // Proteins
    // ========================================================================

    pub async fn count_proteins(&self) -> Result<u64> {
        Ok(Proteins::find().count(&self.conn).await?)
    }

    pub async fn list_proteins(&self, request: PageRequest) -> Result<Page<Protein>> {
        let select = Proteins::find().order_by_asc(proteins::Column::ProteinId);
        let page = fetch_page(&self.conn, select, request).await?;
        Ok(page.map(Self::map_protein))
    }

    pub async fn insert_proteins(&self, batch: &[Protein]) -> Result<u64> {
        if batch.is_empty() {
            return Ok(0);
        }

        let models = batch.iter().map(|p| proteins::ActiveModel {
            protein_id: Set(p.protein_id),
            protein_name: Set(p.protein_name.clone()),
            protein_type_id: Set(p.protein_type_id),
            protein_type_name: Set(p.protein_type_name.clone()),
        });

        let txn = self.conn.begin().await?;
        let inserted = Proteins::insert_many(models)
            .exec_without_returning(&txn)
            .await?;
        txn.commit().await?;

        Ok(inserted)
    }

    // ========================================================================
    // Flavors
    // ========================================================================

    pub async fn count_flavors(&self) -> Result<u64> {
        Ok(Flavors::find().count(&self.conn).await?)
    }

    pub async fn list_flavors(&self, request: PageRequest) -> Result<Page<Flavor>> {
        let select = Flavors::find().order_by_asc(flavors::Column::FlavorId);
        let page = fetch_page(&self.conn, select, request).await?;
        Ok(page.map(Self::map_flavor))
    }

    pub async fn insert_flavors(&self, batch: &[Flavor]) -> Result<u64> {
        if batch.is_empty() {
            return Ok(0);
        }

        let models = batch.iter().map(|f| flavors::ActiveModel {
            flavor_id: Set(f.flavor_id),
            flavor_type: Set(f.flavor_type.clone()),
        });

        let txn = self.conn.begin().await?;
        let inserted = Flavors::insert_many(models)
            .exec_without_returning(&txn)
            .await?;
        txn.commit().await?;

        Ok(inserted)
    }
}
