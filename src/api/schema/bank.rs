//! Bank schema.

use serde::Deserialize;
use serde_json::{Map, Value, json};
use validator::Validate;

use super::{Field, FieldKind, Schema};
use crate::domain::entities::{Bank, BankPatch, NewBank};

pub struct BankSchema;

/// Body of `POST /banks`.
#[derive(Debug, Deserialize)]
pub struct BankInput {
    pub name: String,
}

/// Body of `PUT /banks/{id}`.
#[derive(Debug, Default, Deserialize, Validate)]
pub struct BankPatchInput {
    #[validate(length(min = 1, max = 80, message = "Length must be between 1 and 80."))]
    pub name: Option<String>,
}

impl Schema for BankSchema {
    type Entity = Bank;
    type Input = BankInput;
    type Patch = BankPatchInput;

    const NAME: &'static str = "bank";
    const FIELDS: &'static [Field] = &[
        Field::new("id", FieldKind::Integer).dump_only(),
        Field::new("name", FieldKind::String).required(),
    ];

    fn attributes(bank: &Bank) -> Map<String, Value> {
        let mut map = Map::new();
        map.insert("id".into(), json!(bank.id));
        map.insert("name".into(), json!(bank.name));
        map
    }
}

impl From<BankInput> for NewBank {
    fn from(input: BankInput) -> Self {
        NewBank { name: input.name }
    }
}

impl From<BankPatchInput> for BankPatch {
    fn from(input: BankPatchInput) -> Self {
        BankPatch { name: input.name }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::schema::{dump, load, load_partial};
    use crate::error::AppError;

    fn errors_of<T: std::fmt::Debug>(result: Result<T, AppError>) -> crate::error::FieldErrors {
        match result {
            Err(AppError::Validation { fields }) => fields,
            other => panic!("expected validation error, got {other:?}"),
        }
    }

    #[test]
    fn test_dump_bank() {
        let value = dump::<BankSchema>(&Bank::new(4, "Chase".to_string()));

        assert_eq!(value, json!({ "id": 4, "name": "Chase" }));
    }

    #[test]
    fn test_load_valid_bank() {
        let input = load::<BankSchema>(&json!({ "name": "Chase" })).unwrap();
        assert_eq!(input.name, "Chase");
    }

    #[test]
    fn test_load_missing_name() {
        let fields = errors_of(load::<BankSchema>(&json!({})));

        assert_eq!(
            fields["name"],
            vec!["Missing data for required field.".to_string()]
        );
    }

    #[test]
    fn test_load_rejects_id() {
        let fields = errors_of(load::<BankSchema>(&json!({ "id": 1, "name": "Chase" })));

        assert_eq!(fields["id"], vec!["Unknown field.".to_string()]);
        assert!(!fields.contains_key("name"));
    }

    #[test]
    fn test_load_empty_name_fails_length() {
        let fields = errors_of(load::<BankSchema>(&json!({ "name": "" })));
        assert_eq!(
            fields["name"],
            vec!["Length must be between 1 and 80.".to_string()]
        );
    }

    #[test]
    fn test_load_name_too_long() {
        let fields = errors_of(load::<BankSchema>(&json!({ "name": "x".repeat(81) })));
        assert!(fields.contains_key("name"));
    }

    #[test]
    fn test_partial_empty_body_is_noop() {
        let patch: BankPatch = load_partial::<BankSchema>(&json!({})).unwrap().into();
        assert!(patch.is_empty());
    }

    #[test]
    fn test_partial_wrong_type() {
        let fields = errors_of(load_partial::<BankSchema>(&json!({ "name": 12 })));
        assert_eq!(fields["name"], vec!["Not a valid string.".to_string()]);
    }
}
