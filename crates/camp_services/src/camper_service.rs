use sqlx::{Row, SqliteConnection, SqlitePool};

use crate::types::{
    Activity, CampError, Camper, CamperDetail, CamperSignup, CreateCamperRequest,
    UpdateCamperRequest,
};

/// A service for creating, reading and patching campers.
pub struct CamperService {
    pool: SqlitePool,
}

impl CamperService {
    /// Creates a new instance of `CamperService` with the provided database connection pool.
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    /// Lists every camper in storage order.
    pub async fn list_campers(&self) -> Result<Vec<Camper>, CampError> {
        let campers = sqlx::query_as::<_, Camper>("SELECT id, name, age FROM campers ORDER BY id")
            .fetch_all(&self.pool)
            .await?;

        Ok(campers)
    }

    /// Creates a new camper from an already validated request.
    pub async fn create_camper(&self, request: &CreateCamperRequest) -> Result<Camper, CampError> {
        let mut tx = self.pool.begin().await?;

        let camper = sqlx::query_as::<_, Camper>(
            r#"
            INSERT INTO campers (name, age)
            VALUES (?, ?)
            RETURNING id, name, age
            "#,
        )
        .bind(&request.name)
        .bind(request.age)
        .fetch_one(&mut *tx)
        .await?;

        tx.commit().await?;

        log::info!("🏕️ Created camper {} ({})", camper.id, camper.name);
        Ok(camper)
    }

    /// Retrieves a camper by ID.
    pub async fn get_camper(&self, camper_id: i64) -> Result<Camper, CampError> {
        sqlx::query_as::<_, Camper>("SELECT id, name, age FROM campers WHERE id = ?")
            .bind(camper_id)
            .fetch_optional(&self.pool)
            .await?
            .ok_or(CampError::CamperNotFound)
    }

    /// Retrieves a camper together with all of its signups and their activities.
    pub async fn get_camper_detail(&self, camper_id: i64) -> Result<CamperDetail, CampError> {
        let camper = self.get_camper(camper_id).await?;

        let mut conn = self.pool.acquire().await?;
        let signups = fetch_signups(&mut conn, camper_id).await?;

        Ok(CamperDetail {
            id: camper.id,
            name: camper.name,
            age: camper.age,
            signups,
        })
    }

    /// Applies the supplied fields of an already validated patch to a camper and
    /// returns its detail view, read in the same transaction as the write.
    /// Fields left out of the patch keep their current value.
    pub async fn update_camper(
        &self,
        camper_id: i64,
        request: &UpdateCamperRequest,
    ) -> Result<CamperDetail, CampError> {
        let mut tx = self.pool.begin().await?;

        let camper = sqlx::query_as::<_, Camper>(
            r#"
            UPDATE campers
            SET name = COALESCE(?, name),
                age = COALESCE(?, age)
            WHERE id = ?
            RETURNING id, name, age
            "#,
        )
        .bind(request.name.as_deref())
        .bind(request.age)
        .bind(camper_id)
        .fetch_optional(&mut *tx)
        .await?
        .ok_or(CampError::CamperNotFound)?;

        let signups = fetch_signups(&mut tx, camper_id).await?;

        tx.commit().await?;

        log::info!("✏️ Updated camper {}", camper.id);
        Ok(CamperDetail {
            id: camper.id,
            name: camper.name,
            age: camper.age,
            signups,
        })
    }
}

/// Loads a camper's signups with their activities joined in, oldest first.
async fn fetch_signups(
    conn: &mut SqliteConnection,
    camper_id: i64,
) -> Result<Vec<CamperSignup>, sqlx::Error> {
    let rows = sqlx::query(
        r#"
        SELECT
            s.id, s.time, s.camper_id, s.activity_id,
            a.name AS activity_name, a.difficulty
        FROM signups s
        JOIN activities a ON s.activity_id = a.id
        WHERE s.camper_id = ?
        ORDER BY s.id
        "#,
    )
    .bind(camper_id)
    .fetch_all(&mut *conn)
    .await?;

    let signups = rows
        .into_iter()
        .map(|row| CamperSignup {
            id: row.get("id"),
            time: row.get("time"),
            camper_id: row.get("camper_id"),
            activity_id: row.get("activity_id"),
            activity: Activity {
                id: row.get("activity_id"),
                name: row.get("activity_name"),
                difficulty: row.get("difficulty"),
            },
        })
        .collect();

    Ok(signups)
}
