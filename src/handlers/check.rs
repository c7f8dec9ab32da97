use axum::{
    extract::{
        rejection::{JsonRejection, QueryRejection},
        Query,
    },
    Json,
};
use serde::Deserialize;

use crate::models::verdict::{FormInput, FormReport, Verdict};
use crate::services::validation::{validate_email, validate_form, validate_phone, validate_website};
use crate::utils::error::ApiError;

/// Email check request
#[derive(Debug, Deserialize)]
pub struct EmailCheckRequest {
    email: String,
}

/// Phone check request
#[derive(Debug, Deserialize)]
pub struct PhoneCheckRequest {
    phone: String,
}

/// Website check request
#[derive(Debug, Deserialize)]
pub struct WebsiteCheckRequest {
    url: String,
}

/// Check an email address
pub async fn check_email(
    payload: Result<Json<EmailCheckRequest>, JsonRejection>,
) -> Result<Json<Verdict>, ApiError> {
    let Json(payload) = payload?;
    Ok(Json(validate_email(&payload.email)))
}

/// Check a phone number
pub async fn check_phone(
    payload: Result<Json<PhoneCheckRequest>, JsonRejection>,
) -> Result<Json<Verdict>, ApiError> {
    let Json(payload) = payload?;
    Ok(Json(validate_phone(&payload.phone)))
}

/// Check a website URL
pub async fn check_website(
    payload: Result<Json<WebsiteCheckRequest>, JsonRejection>,
) -> Result<Json<Verdict>, ApiError> {
    let Json(payload) = payload?;
    Ok(Json(validate_website(&payload.url)))
}

/// Check whichever of `email`, `phone` and `url` are present in the query string.
///
/// An empty value counts as absent, so `?email=` alone is rejected.
pub async fn check_form(
    query: Result<Query<FormInput>, QueryRejection>,
) -> Result<Json<FormReport>, ApiError> {
    let Query(form) = query?;
    let report = validate_form(&drop_empty(form));

    if report.is_empty() {
        return Err(ApiError::BadRequest("Invalid request!".to_string()));
    }

    Ok(Json(report))
}

fn drop_empty(form: FormInput) -> FormInput {
    let keep = |value: Option<String>| value.filter(|v| !v.is_empty());
    FormInput {
        email: keep(form.email),
        phone: keep(form.phone),
        url: keep(form.url),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_check_request_deserialization() {
        let email: EmailCheckRequest = serde_json::from_str(r#"{ "email": "a@b.co" }"#).unwrap();
        assert_eq!(email.email, "a@b.co");

        let phone: PhoneCheckRequest = serde_json::from_str(r#"{ "phone": "1234567890" }"#).unwrap();
        assert_eq!(phone.phone, "1234567890");

        let website: WebsiteCheckRequest =
            serde_json::from_str(r#"{ "url": "example.com" }"#).unwrap();
        assert_eq!(website.url, "example.com");
    }

    #[test]
    fn test_check_request_missing_field() {
        let result: Result<EmailCheckRequest, _> = serde_json::from_str(r#"{ "phone": "x" }"#);
        assert!(result.is_err());
    }

    #[tokio::test]
    async fn test_check_form_without_fields_is_bad_request() {
        let result = check_form(Ok(Query(FormInput::default()))).await;

        match result {
            Err(ApiError::BadRequest(msg)) => assert_eq!(msg, "Invalid request!"),
            _ => panic!("Expected BadRequest error"),
        }
    }

    #[tokio::test]
    async fn test_check_form_reports_supplied_fields() {
        let form = FormInput {
            email: Some("a@b".to_string()),
            ..Default::default()
        };

        let Json(report) = check_form(Ok(Query(form))).await.unwrap();

        assert_eq!(report.email.map(|v| v.message()), Some("Invalid Email!"));
        assert!(report.phone.is_none());
        assert!(report.website.is_none());
    }

    #[tokio::test]
    async fn test_check_form_empty_values_count_as_absent() {
        let form = FormInput {
            email: Some(String::new()),
            url: Some(String::new()),
            ..Default::default()
        };

        match check_form(Ok(Query(form))).await {
            Err(ApiError::BadRequest(msg)) => assert_eq!(msg, "Invalid request!"),
            _ => panic!("Expected BadRequest error"),
        }
    }

    #[tokio::test]
    async fn test_check_form_skips_empty_alongside_filled() {
        let form = FormInput {
            email: Some(String::new()),
            phone: Some("1234567890".to_string()),
            ..Default::default()
        };

        let Json(report) = check_form(Ok(Query(form))).await.unwrap();

        assert!(report.email.is_none());
        assert_eq!(report.phone.map(|v| v.is_valid()), Some(true));
    }
}
