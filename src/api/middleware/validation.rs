use serde::de::DeserializeOwned;
use serde_json::Value;
use validator::Validate;

use crate::api::errors::{ApiError, FieldError};
use crate::application::sanitize::Sanitizer;

/// Sanitize a raw JSON body, then deserialize and validate it.
///
/// Sanitization runs before deserialization so every string reaching a
/// request type has already been neutralized. Validation failures come
/// back as per-field errors.
pub fn sanitize_and_validate<T>(body: Value) -> Result<T, ApiError>
where
    T: DeserializeOwned + Validate,
{
    let sanitized = Sanitizer::sanitize_json(&body);

    let request: T = serde_json::from_value(sanitized)
        .map_err(|err| ApiError::bad_request(format!("Invalid request body: {err}")))?;

    request
        .validate()
        .map_err(|errors| ApiError::validation_failed(field_errors(&errors)))?;

    Ok(request)
}

fn field_errors(errors: &validator::ValidationErrors) -> Vec<FieldError> {
    errors
        .field_errors()
        .iter()
        .flat_map(|(field, errors)| {
            // Schema-level errors land under "__all__"; the only schema
            // rule concerns the prompt content.
            let name = if field.as_ref() == "__all__" {
                "content".to_string()
            } else {
                field.to_string()
            };
            errors.iter().map(move |error| FieldError {
                field: name.clone(),
                message: error
                    .message
                    .as_ref()
                    .map(|cow| cow.to_string())
                    .unwrap_or_else(|| format!("Invalid value for {}", name)),
            })
        })
        .collect()
}
