use regex::Regex;
use serde::{Deserialize, Serialize};
use std::sync::LazyLock;
use utoipa::ToSchema;
use validator::{Validate, ValidationError};

static CARD_NUMBER_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^[0-9]{16}$").unwrap());

static EXPIRATION_DATE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^(0[1-9]|1[0-2])/[0-9]{2}$").unwrap());

static CVC_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^[0-9]{3}$").unwrap());

#[derive(Debug, Serialize, Deserialize, Clone, Validate, ToSchema)]
pub struct PaymentDetailRequest {
    #[serde(rename = "cardOwnerName")]
    #[validate(custom(function = validate_card_owner_name))]
    pub card_owner_name: String,

    #[serde(rename = "cardNumber")]
    #[validate(custom(function = validate_card_number))]
    pub card_number: String,

    #[serde(rename = "expirationDate")]
    #[validate(custom(function = validate_expiration_date))]
    pub expiration_date: String,

    #[validate(custom(function = validate_cvc))]
    pub cvc: String,
}

fn validate_card_owner_name(card_owner_name: &str) -> Result<(), ValidationError> {
    if card_owner_name.is_empty() {
        let mut err = ValidationError::new("required");
        err.message = Some("Card owner name is required".into());
        return Err(err);
    }

    if card_owner_name.chars().count() > 100 {
        let mut err = ValidationError::new("length");
        err.message = Some("Card owner name cannot exceed 100 characters".into());
        return Err(err);
    }

    Ok(())
}

fn validate_card_number(card_number: &str) -> Result<(), ValidationError> {
    if card_number.is_empty() {
        let mut err = ValidationError::new("required");
        err.message = Some("Card number is required".into());
        return Err(err);
    }

    if !CARD_NUMBER_RE.is_match(card_number) {
        let mut err = ValidationError::new("format");
        err.message = Some("Card number must be 16 digits".into());
        return Err(err);
    }

    Ok(())
}

fn validate_expiration_date(expiration_date: &str) -> Result<(), ValidationError> {
    if expiration_date.is_empty() {
        let mut err = ValidationError::new("required");
        err.message = Some("Expiration date is required".into());
        return Err(err);
    }

    if !EXPIRATION_DATE_RE.is_match(expiration_date) {
        let mut err = ValidationError::new("format");
        err.message = Some("Expiration date must be in MM/YY format".into());
        return Err(err);
    }

    Ok(())
}

fn validate_cvc(cvc: &str) -> Result<(), ValidationError> {
    if cvc.is_empty() {
        let mut err = ValidationError::new("required");
        err.message = Some("CVC is required".into());
        return Err(err);
    }

    if !CVC_RE.is_match(cvc) {
        let mut err = ValidationError::new("format");
        err.message = Some("CVC must be 3 digits".into());
        return Err(err);
    }

    Ok(())
}
