use sqlx::SqlitePool;

use crate::types::{Activity, CampError, Camper, CreateSignupRequest, Signup, SignupDetail};

/// Service for signing campers up for activities
pub struct SignupService {
    pool: SqlitePool,
}

impl SignupService {
    /// Creates a new instance of `SignupService` with the provided database connection pool
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    /// Creates a signup from an already validated request and returns it with its
    /// camper and activity. A camper or activity that does not exist surfaces as
    /// `CampError::Constraint` from the foreign keys.
    pub async fn create_signup(
        &self,
        request: &CreateSignupRequest,
    ) -> Result<SignupDetail, CampError> {
        let mut tx = self.pool.begin().await?;

        let signup = sqlx::query_as::<_, Signup>(
            r#"
            INSERT INTO signups (time, camper_id, activity_id)
            VALUES (?, ?, ?)
            RETURNING id, time, camper_id, activity_id
            "#,
        )
        .bind(request.time)
        .bind(request.camper_id)
        .bind(request.activity_id)
        .fetch_one(&mut *tx)
        .await?;

        let camper = sqlx::query_as::<_, Camper>("SELECT id, name, age FROM campers WHERE id = ?")
            .bind(signup.camper_id)
            .fetch_one(&mut *tx)
            .await?;

        let activity = sqlx::query_as::<_, Activity>(
            "SELECT id, name, difficulty FROM activities WHERE id = ?",
        )
        .bind(signup.activity_id)
        .fetch_one(&mut *tx)
        .await?;

        tx.commit().await?;

        log::info!(
            "📝 Signed camper {} up for activity {} at {}:00",
            camper.id,
            activity.id,
            signup.time
        );

        Ok(SignupDetail {
            id: signup.id,
            time: signup.time,
            camper_id: signup.camper_id,
            activity_id: signup.activity_id,
            camper,
            activity,
        })
    }
}
