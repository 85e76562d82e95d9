use actix_web::{HttpResponse, Result, web};
use sqlx::SqlitePool;
use validator::Validate;

use camp_services::SignupService;
use camp_services::types::*;

/// Signs a camper up for an activity.
/// Returns 200 OK (not 201) with the signup and its camper and activity expanded.
pub async fn create_signup(
    pool: web::Data<SqlitePool>,
    request: web::Json<CreateSignupRequest>,
) -> Result<HttpResponse, CampError> {
    // Validate the request
    request.validate()?;

    let signup_service = SignupService::new(pool.get_ref().clone());
    let signup = signup_service.create_signup(&request).await.inspect_err(|e| {
        if let CampError::Constraint(msg) = e {
            log::warn!("⚠️ Rejected signup: {}", msg);
        }
    })?;

    Ok(HttpResponse::Ok().json(signup))
}
