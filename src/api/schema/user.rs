//! User schema.

use serde::Deserialize;
use serde_json::{Map, Value, json};
use validator::Validate;

use super::{Field, FieldKind, Schema};
use crate::application::services::{CreateUser, UpdateUser};
use crate::domain::entities::User;

pub struct UserSchema;

fn default_active() -> bool {
    true
}

/// Body of `POST /users`.
#[derive(Debug, Deserialize)]
pub struct UserInput {
    pub username: String,
    pub email: String,
    pub password: String,
    #[serde(default = "default_active")]
    pub active: bool,
}

/// Body of `PUT /users/{id}`.
#[derive(Debug, Default, Deserialize, Validate)]
pub struct UserPatchInput {
    #[validate(length(min = 1, max = 80, message = "Length must be between 1 and 80."))]
    pub username: Option<String>,
    #[validate(
        email(message = "Not a valid email address."),
        length(max = 80, message = "Longer than maximum length 80.")
    )]
    pub email: Option<String>,
    #[validate(length(min = 1, message = "Shorter than minimum length 1."))]
    pub password: Option<String>,
    pub active: Option<bool>,
}

impl Schema for UserSchema {
    type Entity = User;
    type Input = UserInput;
    type Patch = UserPatchInput;

    const NAME: &'static str = "user";
    const FIELDS: &'static [Field] = &[
        Field::new("id", FieldKind::Integer).dump_only(),
        Field::new("username", FieldKind::String).required(),
        Field::new("email", FieldKind::String).required(),
        Field::new("password", FieldKind::String)
            .required()
            .load_only(),
        Field::new("active", FieldKind::Boolean),
        Field::new("created_at", FieldKind::DateTime).dump_only(),
    ];

    fn attributes(user: &User) -> Map<String, Value> {
        let mut map = Map::new();
        map.insert("id".into(), json!(user.id));
        map.insert("username".into(), json!(user.username));
        map.insert("email".into(), json!(user.email));
        map.insert("password".into(), json!(user.password));
        map.insert("active".into(), json!(user.active));
        map.insert("created_at".into(), json!(user.created_at));
        map
    }
}

impl From<UserInput> for CreateUser {
    fn from(input: UserInput) -> Self {
        CreateUser {
            username: input.username,
            email: input.email,
            password: input.password,
            active: input.active,
        }
    }
}

impl From<UserPatchInput> for UpdateUser {
    fn from(input: UserPatchInput) -> Self {
        UpdateUser {
            username: input.username,
            email: input.email,
            password: input.password,
            active: input.active,
        }
    }
}
