use std::collections::HashMap;
use validator::ValidationErrors;

/// Flattens `ValidationErrors` into a map keyed by the JSON field names the
/// caller sent, each holding the list of messages for that field.
pub fn validation_error_map(errors: &ValidationErrors) -> HashMap<String, Vec<String>> {
    let mut result: HashMap<String, Vec<String>> = HashMap::new();

    for (field, field_errors) in errors.field_errors() {
        for err in field_errors {
            let message = err
                .message
                .as_ref()
                .map(|m| m.to_string())
                .unwrap_or_else(|| match err.code.as_ref() {
                    "length" => "invalid length".to_string(),
                    "required" => "required".to_string(),
                    _ => "invalid value".to_string(),
                });

            result
                .entry(wire_field_name(&field).to_string())
                .or_default()
                .push(message);
        }
    }

    result
}

// validator reports struct field identifiers; the API speaks camelCase.
fn wire_field_name(field: &str) -> &str {
    match field {
        "card_owner_name" => "cardOwnerName",
        "card_number" => "cardNumber",
        "expiration_date" => "expirationDate",
        other => other,
    }
}
