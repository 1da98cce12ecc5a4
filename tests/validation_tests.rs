use axum::http::StatusCode;
use axum::response::IntoResponse;
use chrono::{DateTime, Utc};

use roombook::booking::TimeRange;
use roombook::config::parse_origins;
use roombook::error::AppError;
use roombook::validation;

fn t(s: &str) -> DateTime<Utc> {
    s.parse().unwrap()
}

#[test]
fn time_range_requires_end_after_start() {
    assert!(TimeRange::new(t("2030-01-15T10:00:00Z"), t("2030-01-15T11:00:00Z")).is_ok());

    let err = TimeRange::new(t("2030-01-15T11:00:00Z"), t("2030-01-15T10:00:00Z")).unwrap_err();
    assert_eq!(err.into_response().status(), StatusCode::BAD_REQUEST);

    assert!(TimeRange::new(t("2030-01-15T10:00:00Z"), t("2030-01-15T10:00:00Z")).is_err());
}

#[test]
fn time_range_compares_instants_across_offsets() {
    // 17:00 at +07:00 is 10:00Z
    let start: DateTime<Utc> = DateTime::parse_from_rfc3339("2030-01-15T17:00:00+07:00")
        .unwrap()
        .with_timezone(&Utc);
    assert!(TimeRange::new(start, t("2030-01-15T10:00:00Z")).is_err());
}

#[test]
fn email_format() {
    assert!(validation::is_valid_email("budi@example.com"));
    assert!(!validation::is_valid_email("budi@example"));
    assert!(!validation::is_valid_email("budi example.com"));
    assert_eq!(validation::normalize_email("  Budi@Example.COM "), "budi@example.com");
}

#[test]
fn registration_validation() {
    assert!(validation::validate_registration("Budi", "budi@example.com", "secret1").is_ok());
    assert!(validation::validate_registration(" ", "budi@example.com", "secret1").is_err());
    assert!(validation::validate_registration("Budi", "budi", "secret1").is_err());
    assert!(validation::validate_registration("Budi", "budi@example.com", "12345").is_err());
}

#[test]
fn room_validation_and_features() {
    assert!(validation::validate_room("Ruang A", 1).is_ok());
    assert!(validation::validate_room("Ruang A", 0).is_err());
    assert!(validation::validate_room("", 5).is_err());

    let features = validation::normalize_features(vec![
        "wifi".to_string(),
        " projector ".to_string(),
        "".to_string(),
        "wifi".to_string(),
    ]);
    assert_eq!(features, vec!["projector".to_string(), "wifi".to_string()]);
}

#[test]
fn error_categories_map_to_status_codes() {
    let cases = [
        (AppError::BadRequest("x".into()), StatusCode::BAD_REQUEST),
        (AppError::Unauthorized("x".into()), StatusCode::UNAUTHORIZED),
        (AppError::Forbidden("x".into()), StatusCode::FORBIDDEN),
        (AppError::NotFound("x".into()), StatusCode::NOT_FOUND),
        (AppError::Conflict("x".into()), StatusCode::CONFLICT),
        (AppError::RateLimited("x".into()), StatusCode::TOO_MANY_REQUESTS),
        (AppError::Timeout("x".into()), StatusCode::SERVICE_UNAVAILABLE),
        (AppError::Internal("x".into()), StatusCode::INTERNAL_SERVER_ERROR),
        (
            AppError::Database(sqlx::Error::RowNotFound),
            StatusCode::INTERNAL_SERVER_ERROR,
        ),
    ];
    for (err, status) in cases {
        assert_eq!(err.into_response().status(), status);
    }
}

#[test]
fn cors_origins_parse() {
    let origins = parse_origins("http://localhost:5173, https://rooms.example.com,").unwrap();
    assert_eq!(origins.len(), 2);
    assert_eq!(origins[1], "https://rooms.example.com");
}
