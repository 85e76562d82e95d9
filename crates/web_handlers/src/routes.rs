use actix_web::web;
use camp_services::types::CampError;

use crate::{
    create_camper, create_signup, delete_activity, get_camper, health, list_activities,
    list_campers, update_camper,
};

/// JSON extractor configuration that turns unreadable bodies into validation errors
/// instead of actix's plain-text 400.
pub fn json_config() -> web::JsonConfig {
    web::JsonConfig::default().error_handler(|err, req| {
        log::warn!(
            "⚠️ Rejected request body for {} {}: {}",
            req.method(),
            req.path(),
            err
        );
        CampError::validation(format!("Invalid request body: {}", err)).into()
    })
}

/// Registers every camp route on the given service config.
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.app_data(json_config())
        .route("/health", web::get().to(health))
        .service(
            web::resource("/campers")
                .route(web::get().to(list_campers))
                .route(web::post().to(create_camper)),
        )
        .service(
            web::resource("/campers/{id}")
                .route(web::get().to(get_camper))
                .route(web::patch().to(update_camper)),
        )
        .route("/activities", web::get().to(list_activities))
        .route("/activities/{id}", web::delete().to(delete_activity))
        .route("/signups", web::post().to(create_signup));
}
