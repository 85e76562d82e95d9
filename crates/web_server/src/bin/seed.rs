//! Resets the database and fills it with sample campers, activities and signups.

use anyhow::Context;
use camp_services::types::{CreateActivityRequest, CreateCamperRequest, CreateSignupRequest};
use camp_services::{ActivityService, CamperService, SignupService};
use camp_store::database::{create_connection_pool, init_schema};
use web_server::config::ServerConfig;

const CAMPERS: [(&str, i64); 5] = [
    ("Ava", 12),
    ("Ben", 9),
    ("Caleb", 15),
    ("Dana", 17),
    ("Eli", 8),
];

const ACTIVITIES: [(&str, i64); 5] = [
    ("Archery", 2),
    ("Canoeing", 3),
    ("Hiking", 1),
    ("Rock Climbing", 5),
    ("Swimming", 2),
];

#[actix_web::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    env_logger::init_from_env(env_logger::Env::new().default_filter_or("info"));

    let config = ServerConfig::from_env()?;
    let pool = create_connection_pool(&config.database_url, config.max_connections)
        .await
        .with_context(|| format!("connecting to {}", config.database_url))?;
    init_schema(&pool).await?;

    log::info!("🧹 Clearing existing data...");
    let mut tx = pool.begin().await?;
    for table in ["signups", "campers", "activities"] {
        sqlx::query(&format!("DELETE FROM {table}"))
            .execute(&mut *tx)
            .await?;
    }
    sqlx::query("DELETE FROM sqlite_sequence")
        .execute(&mut *tx)
        .await?;
    tx.commit().await?;

    let camper_service = CamperService::new(pool.clone());
    let activity_service = ActivityService::new(pool.clone());
    let signup_service = SignupService::new(pool.clone());

    let mut campers = Vec::new();
    for (name, age) in CAMPERS {
        let request = CreateCamperRequest {
            name: name.to_string(),
            age,
        };
        campers.push(camper_service.create_camper(&request).await?);
    }

    let mut activities = Vec::new();
    for (name, difficulty) in ACTIVITIES {
        let request = CreateActivityRequest {
            name: name.to_string(),
            difficulty,
        };
        activities.push(activity_service.create_activity(&request).await?);
    }

    // Every camper takes two activities, two hours apart.
    let mut signups = 0;
    for (i, camper) in campers.iter().enumerate() {
        for offset in 0..2 {
            let activity = &activities[(i + offset) % activities.len()];
            let request = CreateSignupRequest {
                camper_id: camper.id,
                activity_id: activity.id,
                time: 9 + 2 * offset as i64 + i as i64,
            };
            signup_service.create_signup(&request).await?;
            signups += 1;
        }
    }

    log::info!(
        "🌱 Seeded {} campers, {} activities and {} signups",
        campers.len(),
        activities.len(),
        signups
    );
    Ok(())
}
