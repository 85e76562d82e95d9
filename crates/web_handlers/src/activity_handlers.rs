use actix_web::{HttpResponse, Result, web};
use sqlx::SqlitePool;

use camp_services::ActivityService;
use camp_services::types::CampError;

/// Lists every activity using the `{id, name, difficulty}` view
pub async fn list_activities(pool: web::Data<SqlitePool>) -> Result<HttpResponse, CampError> {
    let activity_service = ActivityService::new(pool.get_ref().clone());
    let activities = activity_service.list_activities().await?;

    Ok(HttpResponse::Ok().json(activities))
}

/// Deletes an activity and, through the cascade, its signups
pub async fn delete_activity(
    pool: web::Data<SqlitePool>,
    path: web::Path<i64>,
) -> Result<HttpResponse, CampError> {
    let activity_id = path.into_inner();
    let activity_service = ActivityService::new(pool.get_ref().clone());
    activity_service.delete_activity(activity_id).await?;

    Ok(HttpResponse::NoContent().finish())
}
