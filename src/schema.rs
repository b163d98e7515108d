//! Declarative request schemas for book payloads.
//!
//! A [`Schema`] lists every accepted field in declaration order together with
//! its JSON type, whether it must be present and any integer minimum. Fields
//! not listed are rejected, and fields listed under `forbidden` are rejected
//! with their own message before any other check runs.

use serde_json::Value;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldType {
    String,
    Integer,
}

impl FieldType {
    /// Type name as it appears in validation messages.
    pub fn name(self) -> &'static str {
        match self {
            FieldType::String => "string",
            FieldType::Integer => "integer",
        }
    }

    pub fn matches(self, value: &Value) -> bool {
        match self {
            FieldType::String => value.is_string(),
            FieldType::Integer => as_integer(value).is_some(),
        }
    }
}

/// Reads a JSON number as an integer. Integral floats such as `101.0` count;
/// anything with a fractional part or outside `i64` does not.
pub fn as_integer(value: &Value) -> Option<i64> {
    if let Some(n) = value.as_i64() {
        return Some(n);
    }
    let f = value.as_f64()?;
    // i64::MAX as f64 rounds up to 2^63, so the upper bound is exclusive
    if f.fract() == 0.0 && f >= i64::MIN as f64 && f < i64::MAX as f64 {
        Some(f as i64)
    } else {
        None
    }
}

#[derive(Debug, Clone, Copy)]
pub struct FieldDef {
    pub name: &'static str,
    pub ty: FieldType,
    pub required: bool,
    /// Inclusive lower bound, integers only.
    pub minimum: Option<i64>,
}

#[derive(Debug, Clone, Copy)]
pub struct ForbiddenField {
    pub name: &'static str,
    pub message: &'static str,
}

#[derive(Debug)]
pub struct Schema {
    pub fields: &'static [FieldDef],
    pub forbidden: &'static [ForbiddenField],
}

impl Schema {
    pub fn field(&self, name: &str) -> Option<&FieldDef> {
        self.fields.iter().find(|f| f.name == name)
    }

    /// Rewrites integral floats in integer fields (`101.0`) as plain integers
    /// so a validated payload decodes into `i64` columns.
    pub fn normalize(&self, payload: &mut Value) {
        let Some(obj) = payload.as_object_mut() else { return };
        for field in self.fields.iter().filter(|f| f.ty == FieldType::Integer) {
            if let Some(value) = obj.get_mut(field.name) {
                if let Some(n) = as_integer(value) {
                    *value = Value::from(n);
                }
            }
        }
    }
}

const fn required(name: &'static str, ty: FieldType) -> FieldDef {
    FieldDef { name, ty, required: true, minimum: None }
}

const fn at_least(field: FieldDef, minimum: i64) -> FieldDef {
    FieldDef { minimum: Some(minimum), ..field }
}

pub static CREATE_BOOK: Schema = Schema {
    fields: &[
        required("isbn", FieldType::String),
        required("amazon_url", FieldType::String),
        required("author", FieldType::String),
        required("language", FieldType::String),
        at_least(required("pages", FieldType::Integer), 1),
        required("publisher", FieldType::String),
        required("title", FieldType::String),
        required("year", FieldType::Integer),
    ],
    forbidden: &[],
};

pub static UPDATE_BOOK: Schema = Schema {
    fields: &[
        required("amazon_url", FieldType::String),
        required("author", FieldType::String),
        required("language", FieldType::String),
        at_least(required("pages", FieldType::Integer), 1),
        required("publisher", FieldType::String),
        required("title", FieldType::String),
        required("year", FieldType::Integer),
    ],
    forbidden: &[ForbiddenField { name: "isbn", message: "Updating isbn property not allowed." }],
};

/// Which write operation a payload is validated for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    Create,
    Update,
}

impl Mode {
    pub fn schema(self) -> &'static Schema {
        match self {
            Mode::Create => &CREATE_BOOK,
            Mode::Update => &UPDATE_BOOK,
        }
    }
}
