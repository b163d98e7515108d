//! Structural validation of untrusted book payloads.

use std::fmt;

use serde_json::Value;

use crate::schema::{as_integer, Mode};

/// Why a payload was rejected.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// Schema violations in reporting order.
    Violations(Vec<String>),
    /// A forbidden field was present; carries that field's message.
    Forbidden(String),
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ValidationError::Violations(msgs) => write!(f, "{}", msgs.join("; ")),
            ValidationError::Forbidden(msg) => write!(f, "{}", msg),
        }
    }
}

impl std::error::Error for ValidationError {}

/// Checks `payload` against the schema selected by `mode`.
///
/// Messages are ordered: type and range errors (declaration order), then undeclared
/// fields (key order), then missing required fields (declaration order).
/// A forbidden field short-circuits everything else.
pub fn validate(mode: Mode, payload: &Value) -> Result<(), ValidationError> {
    let schema = mode.schema();
    let Some(obj) = payload.as_object() else {
        return Err(ValidationError::Violations(vec!["instance is not of a type(s) object".to_string()]));
    };

    if let Some(forbidden) = schema.forbidden.iter().find(|f| obj.contains_key(f.name)) {
        return Err(ValidationError::Forbidden(forbidden.message.to_string()));
    }

    let mut errors = Vec::new();

    for field in schema.fields {
        if let Some(value) = obj.get(field.name) {
            if !field.ty.matches(value) {
                errors.push(format!("instance.{} is not of a type(s) {}", field.name, field.ty.name()));
            } else if let (Some(min), Some(n)) = (field.minimum, as_integer(value)) {
                if n < min {
                    errors.push(format!("instance.{} must be greater than or equal to {}", field.name, min));
                }
            }
        }
    }

    for key in obj.keys() {
        if schema.field(key).is_none() {
            errors.push(format!("instance is not allowed to have the additional property \"{}\"", key));
        }
    }

    for field in schema.fields.iter().filter(|f| f.required) {
        if !obj.contains_key(field.name) {
            errors.push(format!("instance requires property \"{}\"", field.name));
        }
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(ValidationError::Violations(errors))
    }
}
