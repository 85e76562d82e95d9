use serde::{Deserialize, Serialize};
use sqlx::error::ErrorKind;
use validator::{Validate, ValidationError, ValidationErrors};

/// Camper model representing the `campers` table
#[derive(Debug, Clone, PartialEq, Serialize, sqlx::FromRow)]
pub struct Camper {
    /// Unique identifier for the camper
    pub id: i64,
    /// Name of the camper
    pub name: String,
    /// Age of the camper, between 8 and 18
    pub age: i64,
}

/// Activity model representing the `activities` table
#[derive(Debug, Clone, PartialEq, Serialize, sqlx::FromRow)]
pub struct Activity {
    /// Unique identifier for the activity
    pub id: i64,
    /// Name of the activity
    pub name: String,
    /// Difficulty rating of the activity
    pub difficulty: i64,
}

/// Signup model representing the `signups` table
#[derive(Debug, Clone, PartialEq, Serialize, sqlx::FromRow)]
pub struct Signup {
    /// Unique identifier for the signup
    pub id: i64,
    /// Hour of the day the camper attends the activity
    pub time: i64,
    /// Camper attending the activity
    pub camper_id: i64,
    /// Activity being attended
    pub activity_id: i64,
}

/// A signup as listed on a camper's detail view, with its activity expanded
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CamperSignup {
    /// Unique identifier for the signup
    pub id: i64,
    /// Hour of the day
    pub time: i64,
    /// Camper attending the activity
    pub camper_id: i64,
    /// Activity being attended
    pub activity_id: i64,
    /// The activity itself
    pub activity: Activity,
}

/// Detail view of a camper, including every signup
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CamperDetail {
    /// Unique identifier for the camper
    pub id: i64,
    /// Name of the camper
    pub name: String,
    /// Age of the camper
    pub age: i64,
    /// Signups of the camper, each with its activity
    pub signups: Vec<CamperSignup>,
}

/// Response structure for a created signup, with camper and activity expanded
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SignupDetail {
    /// Unique identifier for the signup
    pub id: i64,
    /// Hour of the day
    pub time: i64,
    /// Camper attending the activity
    pub camper_id: i64,
    /// Activity being attended
    pub activity_id: i64,
    /// The camper
    pub camper: Camper,
    /// The activity
    pub activity: Activity,
}

/// Request structure for creating a camper
#[derive(Debug, Deserialize, Validate)]
pub struct CreateCamperRequest {
    /// Name of the camper
    #[validate(custom(function = "validate_not_blank"))]
    pub name: String,

    /// Age of the camper
    #[validate(range(min = 8, max = 18, message = "Age must be between 8 and 18"))]
    pub age: i64,
}

/// Request structure for partially updating a camper.
///
/// Only `name` and `age` may be patched; any other field fails deserialization.
#[derive(Debug, Default, Deserialize, Validate)]
#[serde(deny_unknown_fields)]
pub struct UpdateCamperRequest {
    /// New name of the camper
    #[validate(custom(function = "validate_not_blank"))]
    pub name: Option<String>,

    /// New age of the camper
    #[validate(range(min = 8, max = 18, message = "Age must be between 8 and 18"))]
    pub age: Option<i64>,
}

/// Request structure for creating an activity
#[derive(Debug, Deserialize, Validate)]
pub struct CreateActivityRequest {
    /// Name of the activity
    #[validate(custom(function = "validate_not_blank"))]
    pub name: String,

    /// Difficulty rating of the activity
    pub difficulty: i64,
}

/// Request structure for signing a camper up for an activity
#[derive(Debug, Deserialize, Validate)]
pub struct CreateSignupRequest {
    /// Camper to sign up
    pub camper_id: i64,

    /// Activity to sign up for
    pub activity_id: i64,

    /// Hour of the day
    #[validate(range(min = 0, max = 23, message = "Time must be between 0 and 23"))]
    pub time: i64,
}

/// Custom error type for camp operations
#[derive(Debug, thiserror::Error)]
pub enum CampError {
    /// The camper was not found
    #[error("Camper not found")]
    CamperNotFound,

    /// The activity was not found
    #[error("Activity not found")]
    ActivityNotFound,

    /// One or more request fields failed validation
    #[error("Validation error: {}", .0.join(", "))]
    Validation(Vec<String>),

    /// The store rejected a write because of an integrity constraint
    #[error("Constraint error: {0}")]
    Constraint(String),

    /// Any other database failure
    #[error("Database error: {0}")]
    Database(sqlx::Error),
}

impl CampError {
    /// Builds a validation error carrying a single message.
    pub fn validation(message: impl Into<String>) -> Self {
        CampError::Validation(vec![message.into()])
    }
}

impl From<sqlx::Error> for CampError {
    fn from(err: sqlx::Error) -> Self {
        if let Some(db_err) = err.as_database_error() {
            let message = match db_err.kind() {
                ErrorKind::ForeignKeyViolation => Some("Referenced camper or activity does not exist"),
                ErrorKind::CheckViolation => Some("Value is out of the allowed range"),
                ErrorKind::NotNullViolation => Some("Required field is missing"),
                _ => None,
            };
            if let Some(message) = message {
                return CampError::Constraint(message.to_string());
            }
        }
        CampError::Database(err)
    }
}

impl From<ValidationErrors> for CampError {
    fn from(errors: ValidationErrors) -> Self {
        let mut messages: Vec<String> = errors
            .field_errors()
            .into_iter()
            .flat_map(|(field, errors)| {
                errors.iter().map(move |error| match &error.message {
                    Some(message) => format!("{}: {}", field, message),
                    None => format!("{}: {}", field, error.code),
                })
            })
            .collect();
        messages.sort();
        CampError::Validation(messages)
    }
}

impl actix_web::ResponseError for CampError {
    fn status_code(&self) -> actix_web::http::StatusCode {
        use actix_web::http::StatusCode;

        match self {
            CampError::CamperNotFound | CampError::ActivityNotFound => StatusCode::NOT_FOUND,
            CampError::Validation(_) | CampError::Constraint(_) => StatusCode::BAD_REQUEST,
            CampError::Database(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> actix_web::HttpResponse {
        use actix_web::HttpResponse;

        match self {
            CampError::CamperNotFound | CampError::ActivityNotFound => HttpResponse::NotFound()
                .json(serde_json::json!({
                    "error": self.to_string()
                })),
            CampError::Validation(messages) => HttpResponse::BadRequest().json(serde_json::json!({
                "errors": messages
            })),
            CampError::Constraint(message) => HttpResponse::BadRequest().json(serde_json::json!({
                "errors": [message]
            })),
            CampError::Database(err) => {
                log::error!("❌ Database error: {}", err);
                HttpResponse::InternalServerError().json(serde_json::json!({
                    "error": "Internal server error"
                }))
            }
        }
    }
}

/// Rejects names that are empty or whitespace only
fn validate_not_blank(value: &str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        return Err(ValidationError::new("blank").with_message("Name is required".into()));
    }
    Ok(())
}
