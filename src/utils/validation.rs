use axum::{http::StatusCode, Json};
use regex::Regex;
use serde_json::json;
use std::borrow::Cow;
use validator::{ValidationError, ValidationErrors};

pub fn into_response(errors: ValidationErrors) -> (StatusCode, Json<serde_json::Value>) {
    (StatusCode::BAD_REQUEST, Json(json!({"errors": errors})))
}

/// Local (`07...`) or international (`+254...`) numbers, spaces allowed.
pub fn validate_phone_number(phone_number: &str) -> Result<(), ValidationError> {
    let regex = Regex::new(r"^\+?\d{9,15}$").expect("Invalid phone number regex");
    match regex.is_match(&phone_number.replace(' ', "")) {
        true => Ok(()),
        false => Err(ValidationError::new("INVALID_PHONE_NUMBER").with_message(Cow::from(
            "Phone number must contain 9 to 15 digits (e.g: 0712 345 678 or +254712345678)",
        ))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_local_and_international_numbers() {
        assert!(validate_phone_number("0712345678").is_ok());
        assert!(validate_phone_number("0712 345 678").is_ok());
        assert!(validate_phone_number("+254712345678").is_ok());
    }

    #[test]
    fn rejects_anything_else() {
        assert!(validate_phone_number("").is_err());
        assert!(validate_phone_number("12345").is_err());
        assert!(validate_phone_number("07-123-456").is_err());
        assert!(validate_phone_number("+254 7123 4567 8901 23").is_err());
    }
}
