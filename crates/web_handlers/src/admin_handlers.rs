use actix_web::{HttpResponse, Result};

/// Health check endpoint
pub async fn health() -> Result<HttpResponse> {
    Ok(HttpResponse::Ok().json(serde_json::json!({
        "service": "camp-signups",
        "status": "healthy",
        "timestamp": chrono::Utc::now()
    })))
}

#[cfg(test)]
mod tests {
    use actix_web::test;

    use crate::test_support::*;

    #[actix_web::test]
    async fn test_health() {
        let pool = test_pool().await;
        let app = test_app!(pool);

        let req = test::TestRequest::get().uri("/health").to_request();
        let body: serde_json::Value = test::call_and_read_body_json(&app, req).await;

        assert_eq!(body["status"], "healthy");
        assert_eq!(body["service"], "camp-signups");
    }
}
