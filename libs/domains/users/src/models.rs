use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

/// User entity
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct User {
    /// Opaque unique identifier, server-generated and immutable
    pub id: String,
    /// Display name, at least 2 characters
    pub name: String,
    /// Email address
    pub email: String,
    /// Positive integer or null; the field is always present in JSON output
    pub age: Option<i64>,
}

/// DTO for creating a new user (the "creation" schema).
///
/// Required fields are modeled as `Option` with a `required` validator so
/// that a missing field shows up in the validation error list next to the
/// other constraint violations, instead of aborting body deserialization
/// with only the first problem reported.
#[derive(Debug, Clone, Deserialize, Validate, ToSchema)]
pub struct CreateUser {
    #[validate(
        required(message = "is required"),
        length(min = 2, message = "must be at least 2 characters")
    )]
    pub name: Option<String>,
    #[validate(
        required(message = "is required"),
        email(message = "must be a valid email address")
    )]
    pub email: Option<String>,
    #[validate(range(min = 1, message = "must be a positive integer"))]
    pub age: Option<i64>,
}

/// Normalized creation input: a validated [`CreateUser`] with the required
/// fields unwrapped. Only the service performs this normalization.
#[derive(Debug, Clone)]
pub struct NewUser {
    pub name: String,
    pub email: String,
    pub age: Option<i64>,
}

impl CreateUser {
    /// Normalize into [`NewUser`]; `None` when a required field is absent.
    pub fn into_new_user(self) -> Option<NewUser> {
        Some(NewUser {
            name: self.name?,
            email: self.email?,
            age: self.age,
        })
    }
}

/// DTO for updating an existing user (the "update" schema).
///
/// All fields are optional; fields that are present must satisfy the same
/// per-field constraints as on creation. Explicit `null` and an absent key
/// are equivalent: both leave the stored value untouched.
#[derive(Debug, Clone, Default, Deserialize, Validate, ToSchema)]
pub struct UpdateUser {
    #[validate(length(min = 2, message = "must be at least 2 characters"))]
    pub name: Option<String>,
    #[validate(email(message = "must be a valid email address"))]
    pub email: Option<String>,
    #[validate(range(min = 1, message = "must be a positive integer"))]
    pub age: Option<i64>,
}

impl User {
    /// Merge the present fields of `update` over this record.
    ///
    /// Absent fields, including absent `age`, preserve their stored values.
    /// `id` is never overwritten.
    pub fn apply_update(&mut self, update: UpdateUser) {
        if let Some(name) = update.name {
            self.name = name;
        }
        if let Some(email) = update.email {
            self.email = email;
        }
        if let Some(age) = update.age {
            self.age = Some(age);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn alice() -> User {
        User {
            id: "u-1".to_string(),
            name: "Alice".to_string(),
            email: "a@x.com".to_string(),
            age: Some(30),
        }
    }

    #[test]
    fn test_apply_update_empty_is_noop() {
        let mut user = alice();
        user.apply_update(UpdateUser::default());
        assert_eq!(user, alice());
    }

    #[test]
    fn test_apply_update_preserves_absent_age() {
        let mut user = alice();
        user.apply_update(UpdateUser {
            name: Some("Bobby".to_string()),
            ..Default::default()
        });
        assert_eq!(user.name, "Bobby");
        assert_eq!(user.email, "a@x.com");
        assert_eq!(user.age, Some(30));
    }

    #[test]
    fn test_apply_update_overwrites_present_age() {
        let mut user = alice();
        user.apply_update(UpdateUser {
            age: Some(5),
            ..Default::default()
        });
        assert_eq!(user.age, Some(5));
    }

    #[test]
    fn test_user_serializes_null_age() {
        let user = User {
            age: None,
            ..alice()
        };
        let json = serde_json::to_value(&user).unwrap();
        assert_eq!(json["age"], serde_json::Value::Null);
    }

    #[test]
    fn test_create_user_validation() {
        let valid = CreateUser {
            name: Some("Alice".to_string()),
            email: Some("a@x.com".to_string()),
            age: None,
        };
        assert!(valid.validate().is_ok());

        let invalid = CreateUser {
            name: Some("A".to_string()),
            email: None,
            age: Some(0),
        };
        let errors = invalid.validate().unwrap_err();
        let fields = errors.field_errors();
        assert!(fields.contains_key("name"));
        assert!(fields.contains_key("email"));
        assert!(fields.contains_key("age"));
    }

    #[test]
    fn test_update_user_null_deserializes_as_absent() {
        let update: UpdateUser = serde_json::from_str(r#"{"age": null}"#).unwrap();
        assert_eq!(update.age, None);
    }
}
