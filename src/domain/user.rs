//! User domain entity.

use serde::{Deserialize, Serialize};
use validator::Validate;

use super::validation::{name_rules, password_policy, romanian_phone};
use super::Entity;
use crate::config::KIND_USER;

/// User domain entity
///
/// The password is stored and returned in clear text; it is compared by
/// plain equality on login.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct User {
    #[validate(range(min = 1, message = "User id must be positive"))]
    pub id: i64,
    #[validate(custom(function = "name_rules"))]
    pub username: String,
    #[validate(custom(function = "name_rules"))]
    pub first_name: String,
    #[validate(custom(function = "name_rules"))]
    pub last_name: String,
    #[validate(email(message = "Email must be a well-formed email address"))]
    pub email: String,
    #[validate(custom(function = "password_policy"))]
    pub password: String,
    #[validate(custom(function = "romanian_phone"))]
    pub phone: String,
    pub user_status: i32,
}

impl Entity for User {
    const KIND: &'static str = KIND_USER;

    fn id(&self) -> i64 {
        self.id
    }
}
