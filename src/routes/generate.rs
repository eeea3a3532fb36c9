use axum::Json;
use axum::body::Bytes;
use axum::extract::State;
use rand::SeedableRng;
use rand::rngs::StdRng;
use serde_json::Value;

use crate::error::AppError;
use crate::generator::{self, Faker, GenerateConfig, GenerationError};
use crate::models::ApplicantPayload;
use crate::state::SharedState;

pub async fn generate(
    State(state): State<SharedState>,
    body: Bytes,
) -> Result<Json<ApplicantPayload>, AppError> {
    let config = parse_config(&body)?;

    let mut faker = Faker::new(StdRng::from_os_rng(), state.locale);
    let payload = generator::generate(&config, &mut faker)?;

    tracing::info!(
        role = payload.applicants[0].role.as_str(),
        "Generated applicant payload"
    );

    Ok(Json(payload))
}

/// Read the optional config from a raw request body.
///
/// The body is parsed as JSON whatever the Content-Type. An empty body or a
/// falsy document (`null`, `false`, `0`, `""`, `[]`, `{}`) yields the defaults.
pub fn parse_config(body: &[u8]) -> Result<GenerateConfig, GenerationError> {
    if body.iter().all(u8::is_ascii_whitespace) {
        return Ok(GenerateConfig::default());
    }

    let value: Value = serde_json::from_slice(body)
        .map_err(|e| GenerationError::InvalidConfig(format!("invalid JSON: {e}")))?;

    if is_falsy(&value) {
        return Ok(GenerateConfig::default());
    }

    match value {
        Value::Object(_) => serde_json::from_value(value)
            .map_err(|e| GenerationError::InvalidConfig(e.to_string())),
        other => Err(GenerationError::InvalidConfig(format!(
            "expected a JSON object, got {}",
            json_kind(&other)
        ))),
    }
}

fn is_falsy(value: &Value) -> bool {
    match value {
        Value::Null => true,
        Value::Bool(b) => !b,
        Value::Number(n) => n.as_f64() == Some(0.0),
        Value::String(s) => s.is_empty(),
        Value::Array(a) => a.is_empty(),
        Value::Object(o) => o.is_empty(),
    }
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
