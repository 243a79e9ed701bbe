//! Field-table driven (de)serialization and validation.
//!
//! Each resource declares a [`Schema`]: a static table of [`Field`]s naming
//! every attribute the API reads or writes, its JSON type, whether it is
//! required on create, and whether it may be loaded, dumped, or both.
//!
//! - [`dump`] projects an entity to JSON, dropping load-only fields (passwords).
//! - [`load`] validates a create body; every required field must be present.
//! - [`load_partial`] validates an update body; absent fields are left alone.
//!
//! Loading reports every failing field at once. Type and presence checks come
//! from the field table; value constraints (lengths, email format) come from
//! the `validator` rules on the schema's patch type.
//!
//! [`check`] verifies at startup that a schema only names attributes the entity
//! actually persists.

pub mod bank;
pub mod user;

pub use bank::BankSchema;
pub use user::UserSchema;

use chrono::DateTime;
use serde::de::DeserializeOwned;
use serde_json::{Map, Value};
use validator::Validate;

use crate::domain::entities::Entity;
use crate::error::{AppError, FieldErrors, merge_validation_errors};

/// Error key for problems with the body as a whole.
pub const SCHEMA_KEY: &str = "_schema";

/// JSON type accepted for a field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
    Integer,
    String,
    Boolean,
    /// RFC 3339 timestamp string.
    DateTime,
}

/// Direction(s) in which a field crosses the API boundary.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Access {
    ReadWrite,
    /// Accepted on input, never serialized.
    LoadOnly,
    /// Serialized, rejected on input.
    DumpOnly,
}

#[derive(Debug, Clone, Copy)]
pub struct Field {
    pub name: &'static str,
    pub kind: FieldKind,
    pub required: bool,
    pub access: Access,
}

impl Field {
    pub const fn new(name: &'static str, kind: FieldKind) -> Self {
        Self {
            name,
            kind,
            required: false,
            access: Access::ReadWrite,
        }
    }

    pub const fn required(self) -> Self {
        Self {
            required: true,
            ..self
        }
    }

    pub const fn load_only(self) -> Self {
        Self {
            access: Access::LoadOnly,
            ..self
        }
    }

    pub const fn dump_only(self) -> Self {
        Self {
            access: Access::DumpOnly,
            ..self
        }
    }

    pub fn loadable(&self) -> bool {
        self.access != Access::DumpOnly
    }

    pub fn dumpable(&self) -> bool {
        self.access != Access::LoadOnly
    }

    /// Checks the JSON type of `value`, returning the error message on mismatch.
    fn check(&self, value: &Value) -> Result<(), &'static str> {
        if value.is_null() {
            return Err("Field may not be null.");
        }

        match self.kind {
            FieldKind::Integer if value.is_i64() || value.is_u64() => Ok(()),
            FieldKind::Integer => Err("Not a valid integer."),
            FieldKind::String if value.is_string() => Ok(()),
            FieldKind::String => Err("Not a valid string."),
            FieldKind::Boolean if value.is_boolean() => Ok(()),
            FieldKind::Boolean => Err("Not a valid boolean."),
            FieldKind::DateTime
                if value
                    .as_str()
                    .is_some_and(|s| DateTime::parse_from_rfc3339(s).is_ok()) =>
            {
                Ok(())
            }
            FieldKind::DateTime => Err("Not a valid datetime."),
        }
    }
}

/// Validation and serialization contract for one entity type.
pub trait Schema: Send + Sync + 'static {
    type Entity: Entity + Send + Sync + 'static;
    /// Fully validated create input.
    type Input: DeserializeOwned + Send + 'static;
    /// Partial update input; all fields optional. Carries the value constraints.
    type Patch: DeserializeOwned + Validate + Send + 'static;

    /// Key under which a single entity is returned, e.g. `"bank"`.
    const NAME: &'static str;
    const FIELDS: &'static [Field];

    /// Every attribute of the entity, including ones that must not be dumped.
    fn attributes(entity: &Self::Entity) -> Map<String, Value>;
}

/// Serializes an entity, keeping only dumpable fields listed in the table.
pub fn dump<S: Schema>(entity: &S::Entity) -> Value {
    let mut attributes = S::attributes(entity);
    attributes.retain(|key, _| {
        S::FIELDS
            .iter()
            .any(|field| field.name == key && field.dumpable())
    });
    Value::Object(attributes)
}

/// Validates a create body; all required fields must be present.
///
/// # Errors
///
/// Returns [`AppError::Validation`] listing every failing field.
pub fn load<S: Schema>(body: &Value) -> Result<S::Input, AppError> {
    check_body::<S>(body, false)?;
    serde_json::from_value(body.clone()).map_err(|e| AppError::field(SCHEMA_KEY, e.to_string()))
}

/// Validates an update body; absent fields are not required.
///
/// # Errors
///
/// Returns [`AppError::Validation`] listing every failing field.
pub fn load_partial<S: Schema>(body: &Value) -> Result<S::Patch, AppError> {
    check_body::<S>(body, true)
}

fn check_body<S: Schema>(body: &Value, partial: bool) -> Result<S::Patch, AppError> {
    let Some(object) = body.as_object() else {
        return Err(AppError::field(SCHEMA_KEY, "Invalid input type."));
    };

    let mut errors = FieldErrors::new();
    let mut accepted = Map::new();

    for (key, value) in object {
        let field = S::FIELDS
            .iter()
            .find(|field| field.name == key && field.loadable());

        let result = match field {
            Some(field) => field.check(value),
            None => Err("Unknown field."),
        };

        match result {
            Ok(()) => {
                accepted.insert(key.clone(), value.clone());
            }
            Err(message) => push(&mut errors, key, message),
        }
    }

    if !partial {
        for field in S::FIELDS.iter().filter(|f| f.required && f.loadable()) {
            if !object.contains_key(field.name) {
                push(&mut errors, field.name, "Missing data for required field.");
            }
        }
    }

    // Only type-checked fields reach serde, so this succeeds for any table
    // that matches its patch type.
    let patch: S::Patch = serde_json::from_value(Value::Object(accepted))
        .map_err(|e| AppError::field(SCHEMA_KEY, e.to_string()))?;

    if let Err(validation) = patch.validate() {
        merge_validation_errors(&mut errors, &validation);
    }

    if errors.is_empty() {
        Ok(patch)
    } else {
        Err(AppError::validation(errors))
    }
}

fn push(errors: &mut FieldErrors, field: &str, message: &str) {
    errors
        .entry(field.to_string())
        .or_default()
        .push(message.to_string());
}

/// Verifies that every field of `S` names a persisted attribute of its entity.
///
/// # Errors
///
/// Returns a message naming the first unknown field.
pub fn check<S: Schema>() -> Result<(), String> {
    let columns = <S::Entity as Entity>::COLUMNS;

    for field in S::FIELDS {
        if !columns.contains(&field.name) {
            return Err(format!(
                "schema '{}' field '{}' is not a column of '{}'",
                S::NAME,
                field.name,
                <S::Entity as Entity>::TABLE
            ));
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_field_builders() {
        let field = Field::new("password", FieldKind::String)
            .required()
            .load_only();

        assert!(field.required);
        assert!(field.loadable());
        assert!(!field.dumpable());

        let id = Field::new("id", FieldKind::Integer).dump_only();
        assert!(!id.loadable());
        assert!(id.dumpable());
    }

    #[test]
    fn test_field_type_checks() {
        let int = Field::new("n", FieldKind::Integer);
        assert!(int.check(&json!(5)).is_ok());
        assert_eq!(int.check(&json!("5")), Err("Not a valid integer."));
        assert_eq!(int.check(&json!(1.5)), Err("Not a valid integer."));

        let string = Field::new("s", FieldKind::String);
        assert!(string.check(&json!("x")).is_ok());
        assert_eq!(string.check(&json!(1)), Err("Not a valid string."));
        assert_eq!(string.check(&Value::Null), Err("Field may not be null."));

        let boolean = Field::new("b", FieldKind::Boolean);
        assert!(boolean.check(&json!(false)).is_ok());
        assert_eq!(boolean.check(&json!("true")), Err("Not a valid boolean."));

        let ts = Field::new("t", FieldKind::DateTime);
        assert!(ts.check(&json!("2026-01-01T00:00:00Z")).is_ok());
        assert_eq!(ts.check(&json!("yesterday")), Err("Not a valid datetime."));
    }

    #[test]
    fn test_non_object_body_is_rejected() {
        for body in [json!([1, 2]), json!("name"), Value::Null] {
            let Err(AppError::Validation { fields }) = load::<BankSchema>(&body) else {
                panic!("expected validation error");
            };
            assert_eq!(fields[SCHEMA_KEY], vec!["Invalid input type.".to_string()]);
        }
    }

    #[test]
    fn test_schemas_match_entity_columns() {
        assert!(check::<BankSchema>().is_ok());
        assert!(check::<UserSchema>().is_ok());
    }
}
