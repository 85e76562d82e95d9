use sqlx::SqlitePool;

use crate::types::{Activity, CampError, CreateActivityRequest};

/// Service for handling activity operations
pub struct ActivityService {
    pool: SqlitePool,
}

impl ActivityService {
    /// Creates a new instance of `ActivityService` with the provided database connection pool
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    /// Lists every activity in storage order
    pub async fn list_activities(&self) -> Result<Vec<Activity>, CampError> {
        let activities = sqlx::query_as::<_, Activity>(
            "SELECT id, name, difficulty FROM activities ORDER BY id",
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(activities)
    }

    /// Creates a new activity. Not routed over HTTP; used for seeding.
    pub async fn create_activity(
        &self,
        request: &CreateActivityRequest,
    ) -> Result<Activity, CampError> {
        let mut tx = self.pool.begin().await?;

        let activity = sqlx::query_as::<_, Activity>(
            r#"
            INSERT INTO activities (name, difficulty)
            VALUES (?, ?)
            RETURNING id, name, difficulty
            "#,
        )
        .bind(&request.name)
        .bind(request.difficulty)
        .fetch_one(&mut *tx)
        .await?;

        tx.commit().await?;

        Ok(activity)
    }

    /// Deletes an activity; its signups go with it
    pub async fn delete_activity(&self, activity_id: i64) -> Result<(), CampError> {
        let mut tx = self.pool.begin().await?;

        let result = sqlx::query("DELETE FROM activities WHERE id = ?")
            .bind(activity_id)
            .execute(&mut *tx)
            .await?;

        if result.rows_affected() == 0 {
            return Err(CampError::ActivityNotFound);
        }

        tx.commit().await?;

        log::info!("🗑️ Deleted activity {}", activity_id);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use camp_store::database::create_in_memory_pool;
    use sqlx::Row;

    fn archery() -> CreateActivityRequest {
        CreateActivityRequest {
            name: "Archery".to_string(),
            difficulty: 2,
        }
    }

    #[tokio::test]
    async fn test_create_and_list_activities() {
        let service = ActivityService::new(create_in_memory_pool().await.unwrap());

        let created = service.create_activity(&archery()).await.unwrap();
        let listed = service.list_activities().await.unwrap();

        assert_eq!(listed, vec![created]);
    }

    #[tokio::test]
    async fn test_delete_cascades_to_signups() {
        let pool = create_in_memory_pool().await.unwrap();
        let service = ActivityService::new(pool.clone());
        let activity = service.create_activity(&archery()).await.unwrap();

        sqlx::query("INSERT INTO campers (name, age) VALUES ('Ava', 12)")
            .execute(&pool)
            .await
            .unwrap();
        sqlx::query("INSERT INTO signups (time, camper_id, activity_id) VALUES (10, 1, ?)")
            .bind(activity.id)
            .execute(&pool)
            .await
            .unwrap();

        service.delete_activity(activity.id).await.unwrap();

        assert!(service.list_activities().await.unwrap().is_empty());
        let remaining: i64 = sqlx::query("SELECT COUNT(*) AS n FROM signups")
            .fetch_one(&pool)
            .await
            .unwrap()
            .get("n");
        assert_eq!(remaining, 0);
    }

    #[tokio::test]
    async fn test_delete_missing_activity() {
        let service = ActivityService::new(create_in_memory_pool().await.unwrap());

        assert!(matches!(
            service.delete_activity(99).await,
            Err(CampError::ActivityNotFound)
        ));
    }
}
