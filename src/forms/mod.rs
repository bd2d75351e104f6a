use std::collections::HashMap;

use serde::{Deserialize, Serialize};
use validator::{Validate, ValidationErrors};

/// Field errors keyed by field name. Every field of the form is present
/// (possibly with an empty list) so templates can iterate without
/// existence checks.
pub type FieldErrors = HashMap<String, Vec<String>>;

#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate)]
pub struct RegisterForm {
    #[serde(default)]
    #[validate(email(message = "Please enter a valid email address."))]
    pub email: String,
    #[serde(default)]
    #[validate(length(min = 1, message = "Password is required."))]
    pub password: String,
    #[serde(default)]
    #[validate(length(min = 1, message = "Name is required."))]
    pub name: String,
}

impl RegisterForm {
    pub const FIELDS: &'static [&'static str] = &["email", "password", "name"];
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate)]
pub struct LoginForm {
    #[serde(default)]
    #[validate(email(message = "Please enter a valid email address."))]
    pub email: String,
    #[serde(default)]
    #[validate(length(min = 1, message = "Password is required."))]
    pub password: String,
}

impl LoginForm {
    pub const FIELDS: &'static [&'static str] = &["email", "password"];
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate)]
pub struct CreatePostForm {
    #[serde(default)]
    #[validate(length(min = 1, message = "Title is required."))]
    pub title: String,
    #[serde(default)]
    #[validate(length(min = 1, message = "Subtitle is required."))]
    pub subtitle: String,
    #[serde(default)]
    #[validate(url(message = "A well-formed image URL is required."))]
    pub img_url: String,
    #[serde(default)]
    #[validate(length(min = 1, message = "Content is required."))]
    pub body: String,
}

impl CreatePostForm {
    pub const FIELDS: &'static [&'static str] = &["title", "subtitle", "img_url", "body"];
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate)]
pub struct CommentForm {
    #[serde(default)]
    #[validate(length(min = 1, message = "Comment text is required."))]
    pub body: String,
}

impl CommentForm {
    pub const FIELDS: &'static [&'static str] = &["body"];
}

/// Flattens a validation outcome into per-field message lists, seeding
/// every known field so clean fields come out as empty lists.
pub fn error_map(fields: &[&str], outcome: Result<(), ValidationErrors>) -> FieldErrors {
    let mut map: FieldErrors = fields.iter().map(|f| (f.to_string(), Vec::new())).collect();

    if let Err(errors) = outcome {
        for (field, errs) in errors.field_errors() {
            let messages = errs
                .iter()
                .map(|e| match &e.message {
                    Some(message) => message.to_string(),
                    None => e.code.to_string(),
                })
                .collect();
            map.insert(field.to_string(), messages);
        }
    }

    map
}

/// Error map for a read-only render: all fields, no messages.
pub fn no_errors(fields: &[&str]) -> FieldErrors {
    error_map(fields, Ok(()))
}

/// Appends a message to a field, for failures detected past validation
/// (e.g. a UNIQUE constraint hit).
pub fn push_error(map: &mut FieldErrors, field: &str, message: &str) {
    map.entry(field.to_string()).or_default().push(message.to_string());
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_register_form_validates() {
        let form = RegisterForm {
            email: String::from("someone@example.com"),
            password: String::from("test_password123"),
            name: String::from("Someone"),
        };

        assert!(form.validate().is_ok());
    }

    #[test]
    fn test_register_form_rejects_bad_email() {
        let form = RegisterForm {
            email: String::from("not-an-email"),
            password: String::from("test_password123"),
            name: String::from("Someone"),
        };

        let errors = error_map(RegisterForm::FIELDS, form.validate());
        assert_eq!(errors["email"].len(), 1);
        assert!(errors["password"].is_empty());
        assert!(errors["name"].is_empty());
    }

    #[test]
    fn test_empty_register_form_flags_every_field() {
        let errors = error_map(RegisterForm::FIELDS, RegisterForm::default().validate());

        for field in RegisterForm::FIELDS {
            assert!(!errors[*field].is_empty(), "expected an error for {}", field);
        }
    }

    #[test]
    fn test_post_form_rejects_bad_url() {
        let form = CreatePostForm {
            title: String::from("T"),
            subtitle: String::from("S"),
            img_url: String::from("not a url"),
            body: String::from("B"),
        };

        let errors = error_map(CreatePostForm::FIELDS, form.validate());
        assert_eq!(errors["img_url"].len(), 1);
        assert!(errors["title"].is_empty());
    }

    #[test]
    fn test_no_errors_seeds_all_fields() {
        let errors = no_errors(CommentForm::FIELDS);

        assert_eq!(errors.len(), 1);
        assert!(errors["body"].is_empty());
    }
}
