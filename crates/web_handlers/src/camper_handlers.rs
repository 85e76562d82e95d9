use actix_web::{HttpResponse, Result, web};
use sqlx::SqlitePool;
use validator::Validate;

use camp_services::CamperService;
use camp_services::types::*;

/// Lists every camper using the narrow `{id, name, age}` view.
pub async fn list_campers(pool: web::Data<SqlitePool>) -> Result<HttpResponse, CampError> {
    let camper_service = CamperService::new(pool.get_ref().clone());
    let campers = camper_service.list_campers().await?;

    Ok(HttpResponse::Ok().json(campers))
}

/// Creates a camper after validating the request.
/// Returns a 201 Created response with the narrow camper view.
pub async fn create_camper(
    pool: web::Data<SqlitePool>,
    request: web::Json<CreateCamperRequest>,
) -> Result<HttpResponse, CampError> {
    if let Err(errors) = request.validate() {
        log::warn!("⚠️ Rejected camper: {}", errors);
        return Err(errors.into());
    }

    let camper_service = CamperService::new(pool.get_ref().clone());
    let camper = camper_service.create_camper(&request).await?;

    Ok(HttpResponse::Created().json(camper))
}

/// Gets a camper with its signups and their activities.
pub async fn get_camper(
    pool: web::Data<SqlitePool>,
    path: web::Path<i64>,
) -> Result<HttpResponse, CampError> {
    let camper_id = path.into_inner();
    let camper_service = CamperService::new(pool.get_ref().clone());
    let camper = camper_service.get_camper_detail(camper_id).await?;

    Ok(HttpResponse::Ok().json(camper))
}

/// Applies a partial update to a camper and returns 202 Accepted with the detail view.
///
/// The camper is looked up before the body is parsed, so an unknown id is a 404
/// whatever the payload looks like.
pub async fn update_camper(
    pool: web::Data<SqlitePool>,
    path: web::Path<i64>,
    body: web::Bytes,
) -> Result<HttpResponse, CampError> {
    let camper_id = path.into_inner();
    let camper_service = CamperService::new(pool.get_ref().clone());
    camper_service.get_camper(camper_id).await?;

    let request: UpdateCamperRequest = serde_json::from_slice(&body).map_err(|e| {
        log::warn!("⚠️ Rejected patch for camper {}: {}", camper_id, e);
        CampError::validation(format!("Invalid request body: {}", e))
    })?;
    if let Err(errors) = request.validate() {
        log::warn!("⚠️ Rejected patch for camper {}: {}", camper_id, errors);
        return Err(errors.into());
    }

    let camper = camper_service.update_camper(camper_id, &request).await?;

    Ok(HttpResponse::Accepted().json(camper))
}
