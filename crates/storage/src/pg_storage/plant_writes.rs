//! PlantWriter implementation for PgStorage.
//!
//! Both writes run on a single connection inside [`with_transaction`]; the
//! link set is always replaced wholesale, never patched.

use super::*;

use crate::traits::PlantWriter;
use crate::transaction::with_transaction;
use async_trait::async_trait;
use flora_core::{NewPlant, PlantUpdate, unique_category_ids};
use sqlx::PgConnection;

#[async_trait]
impl PlantWriter for PgStorage {
    async fn create_plant(&self, plant: NewPlant) -> Result<i32, StorageError> {
        let dataset_id = plant.dataset_id;
        let plant_id = with_transaction(&self.pool, move |conn: &mut PgConnection| {
            Box::pin(async move {
                let plant_id: i32 = sqlx::query_scalar(
                    "INSERT INTO plants (dataset_id, nama_indonesia, deskripsi)
                     VALUES ($1, $2, $3)
                     RETURNING id",
                )
                .bind(plant.dataset_id)
                .bind(&plant.local_name)
                .bind(&plant.description)
                .fetch_one(&mut *conn)
                .await?;

                insert_links(conn, plant_id, &plant.category_ids).await?;
                Ok(plant_id)
            })
        })
        .await?;
        tracing::debug!(plant_id, dataset_id, "plant created");
        Ok(plant_id)
    }

    async fn update_plant(&self, id: i32, update: PlantUpdate) -> Result<(), StorageError> {
        with_transaction(&self.pool, move |conn: &mut PgConnection| {
            Box::pin(async move {
                let updated = sqlx::query(
                    "UPDATE plants SET nama_indonesia = $1, deskripsi = $2 WHERE id = $3",
                )
                .bind(&update.local_name)
                .bind(&update.description)
                .bind(id)
                .execute(&mut *conn)
                .await?;
                if updated.rows_affected() == 0 {
                    tracing::debug!(plant_id = id, "update matched no plant row");
                }

                sqlx::query("DELETE FROM plantcategory WHERE plant_id = $1")
                    .bind(id)
                    .execute(&mut *conn)
                    .await?;

                insert_links(conn, id, &update.category_ids).await
            })
        })
        .await?;
        tracing::debug!(plant_id = id, "plant updated");
        Ok(())
    }
}

/// Insert one link per distinct category id in a single statement.
/// No-op for an empty slice.
async fn insert_links(
    conn: &mut PgConnection,
    plant_id: i32,
    category_ids: &[i32],
) -> Result<(), StorageError> {
    let ids = unique_category_ids(category_ids);
    if ids.is_empty() {
        return Ok(());
    }
    sqlx::query(
        "INSERT INTO plantcategory (plant_id, category_id)
         SELECT $1, UNNEST($2::int4[])
         ON CONFLICT DO NOTHING",
    )
    .bind(plant_id)
    .bind(ids)
    .execute(conn)
    .await?;
    Ok(())
}
