// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Client-side checks for the login, register and forgot-password forms.
//!
//! Failures are reported as [`ApiError::Validation`] so form errors and
//! server-side validation errors render the same way.

use crate::error::{ApiError, FieldErrors};
use crate::models::NewAccount;
use std::borrow::Cow;
use validator::{Validate, ValidationError, ValidationErrors};

pub const LOGIN_MIN_PASSWORD_LEN: usize = 6;
pub const REGISTER_MIN_PASSWORD_LEN: usize = 8;

#[derive(Debug, Clone, Default, Validate)]
pub struct LoginForm {
    #[validate(custom(function = "check_email"))]
    pub email: String,
    #[validate(custom(function = "check_login_password"))]
    pub password: String,
}

#[derive(Debug, Clone, Default, Validate)]
pub struct RegisterForm {
    #[validate(custom(function = "check_display_name"))]
    pub display_name: String,
    #[validate(custom(function = "check_email"))]
    pub email: String,
    pub phone: Option<String>,
    #[validate(custom(function = "check_register_password"))]
    pub password: String,
    #[validate(must_match(other = "password", message = "Passwords do not match"))]
    pub confirm_password: String,
}

#[derive(Debug, Clone, Default, Validate)]
pub struct ForgotPasswordForm {
    #[validate(custom(function = "check_email"))]
    pub email: String,
}

impl LoginForm {
    pub fn check(&self) -> Result<(), ApiError> {
        self.validate().map_err(to_api_error)
    }
}

impl RegisterForm {
    pub fn check(&self) -> Result<(), ApiError> {
        self.validate().map_err(to_api_error)
    }

    /// Build the register request body. The form has no username field, so
    /// the local part of the email is used.
    pub fn to_account(&self) -> NewAccount {
        let username = self
            .email
            .split_once('@')
            .map_or(self.email.as_str(), |(local, _)| local)
            .to_string();

        NewAccount {
            name: self.display_name.trim().to_string(),
            email: self.email.trim().to_string(),
            password: self.password.clone(),
            username,
        }
    }
}

impl ForgotPasswordForm {
    pub fn check(&self) -> Result<(), ApiError> {
        self.validate().map_err(to_api_error)
    }
}

// ─── Field checks ────────────────────────────────────────────────────────────

fn error(code: &'static str, message: &'static str) -> ValidationError {
    ValidationError::new(code).with_message(Cow::Borrowed(message))
}

/// Non-blank text, an `@`, then a dot somewhere after it (`\S+@\S+\.\S+`).
fn looks_like_email(value: &str) -> bool {
    value.split_whitespace().any(|word| {
        word.split_once('@').is_some_and(|(local, domain)| {
            !local.is_empty()
                && domain
                    .char_indices()
                    .any(|(i, c)| c == '.' && i > 0 && i + 1 < domain.len())
        })
    })
}

fn check_email(value: &str) -> Result<(), ValidationError> {
    if value.is_empty() {
        Err(error("required", "Email is required"))
    } else if !looks_like_email(value) {
        Err(error("email", "Email is invalid"))
    } else {
        Ok(())
    }
}

fn check_password(value: &str, min_len: usize, too_short: &'static str) -> Result<(), ValidationError> {
    if value.is_empty() {
        Err(error("required", "Password is required"))
    } else if value.chars().count() < min_len {
        Err(error("length", too_short))
    } else {
        Ok(())
    }
}

fn check_login_password(value: &str) -> Result<(), ValidationError> {
    check_password(value, LOGIN_MIN_PASSWORD_LEN, "Minimum 6 characters")
}

fn check_register_password(value: &str) -> Result<(), ValidationError> {
    check_password(value, REGISTER_MIN_PASSWORD_LEN, "Minimum 8 characters")
}

fn check_display_name(value: &str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        Err(error("required", "Name is required"))
    } else {
        Ok(())
    }
}

// ─── Error mapping ───────────────────────────────────────────────────────────

/// `display_name` -> `displayName`, matching the API's field naming.
fn camel_case(field: &str) -> String {
    let mut out = String::with_capacity(field.len());
    let mut upper = false;
    for c in field.chars() {
        if c == '_' {
            upper = true;
        } else if upper {
            out.extend(c.to_uppercase());
            upper = false;
        } else {
            out.push(c);
        }
    }
    out
}

fn to_api_error(errors: ValidationErrors) -> ApiError {
    let mut details = FieldErrors::new();
    for (field, field_errors) in errors.field_errors() {
        let messages = field_errors
            .iter()
            .map(|e| {
                e.message
                    .as_ref()
                    .map_or_else(|| e.code.to_string(), |m| m.to_string())
            })
            .collect();
        details.insert(camel_case(&field), messages);
    }
    ApiError::validation(details)
}
