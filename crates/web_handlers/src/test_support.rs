use camp_services::ActivityService;
use camp_services::types::{Activity, CreateActivityRequest};
use sqlx::SqlitePool;

/// Builds the full route table over `$pool`, the same way the server does.
macro_rules! test_app {
    ($pool:expr) => {
        actix_web::test::init_service(
            actix_web::App::new()
                .app_data(actix_web::web::Data::new($pool.clone()))
                .configure(crate::configure),
        )
        .await
    };
}
pub(crate) use test_app;

pub(crate) async fn test_pool() -> SqlitePool {
    camp_store::database::create_in_memory_pool()
        .await
        .expect("in-memory pool")
}

pub(crate) async fn seed_activity(pool: &SqlitePool, name: &str, difficulty: i64) -> Activity {
    ActivityService::new(pool.clone())
        .create_activity(&CreateActivityRequest {
            name: name.to_string(),
            difficulty,
        })
        .await
        .expect("seed activity")
}
