use std::sync::LazyLock;

use regex::Regex;

use crate::auth::password;
use crate::error::AppError;

static EMAIL_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[^@\s]+@[^@\s]+\.[^@\s]+$").unwrap());

pub fn normalize_email(email: &str) -> String {
    email.trim().to_lowercase()
}

pub fn is_valid_email(email: &str) -> bool {
    EMAIL_RE.is_match(email)
}

/// Checks a registration payload. `email` is expected to be normalized already.
pub fn validate_registration(name: &str, email: &str, pw: &str) -> Result<(), AppError> {
    if name.trim().is_empty() || email.is_empty() || pw.is_empty() {
        return Err(AppError::BadRequest(
            "Nama, email, dan password wajib diisi".to_string(),
        ));
    }

    if !is_valid_email(email) {
        return Err(AppError::BadRequest("Format email tidak valid".to_string()));
    }

    if !password::meets_minimum_length(pw) {
        return Err(AppError::BadRequest(format!(
            "Password minimal {} karakter",
            password::MIN_PASSWORD_LEN
        )));
    }

    Ok(())
}

pub fn validate_room(name: &str, capacity: i32) -> Result<(), AppError> {
    if name.trim().is_empty() {
        return Err(AppError::BadRequest("Nama ruangan wajib diisi".to_string()));
    }
    if capacity <= 0 {
        return Err(AppError::BadRequest(
            "Kapasitas harus lebih dari 0".to_string(),
        ));
    }
    Ok(())
}

/// Feature tags form a set: trimmed, blanks dropped, duplicates removed, sorted.
pub fn normalize_features(features: Vec<String>) -> Vec<String> {
    let mut tags: Vec<String> = features
        .into_iter()
        .map(|f| f.trim().to_string())
        .filter(|f| !f.is_empty())
        .collect();
    tags.sort();
    tags.dedup();
    tags
}
