//! Local form checks run before any network call.
//!
//! Messages are user-facing and shown verbatim.

#[cfg(test)]
#[path = "validate_test.rs"]
mod validate_test;

use std::sync::LazyLock;

use regex::Regex;

use crate::types::{ProfileUpdate, User};

pub const LOGIN_FIELDS_REQUIRED: &str = "Email and password are required";
pub const REGISTER_FIELDS_REQUIRED: &str = "All fields are required";
pub const INVALID_EMAIL: &str = "Please enter a valid email address";
pub const NAME_REQUIRED: &str = "Name cannot be empty.";
pub const EMAIL_REQUIRED: &str = "Email cannot be empty.";
pub const NO_UPDATES: &str = "No updates detected.";
pub const NOT_LOGGED_IN: &str = "You must be logged in to update your profile.";

static EMAIL_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("email pattern compiles"));

/// Loose shape check: something, `@`, something, `.`, something, no spaces.
#[must_use]
pub fn is_valid_email(email: &str) -> bool {
    EMAIL_RE.is_match(email)
}

/// Validate login input.
///
/// # Errors
///
/// Returns the message to show when a field is empty or the email is malformed.
pub fn login(email: &str, password: &str) -> Result<(), &'static str> {
    if email.is_empty() || password.is_empty() {
        return Err(LOGIN_FIELDS_REQUIRED);
    }
    if !is_valid_email(email) {
        return Err(INVALID_EMAIL);
    }
    Ok(())
}

/// Validate registration input.
///
/// # Errors
///
/// Returns the message to show when a field is empty or the email is malformed.
pub fn register(name: &str, email: &str, password: &str) -> Result<(), &'static str> {
    if name.is_empty() || email.is_empty() || password.is_empty() {
        return Err(REGISTER_FIELDS_REQUIRED);
    }
    if !is_valid_email(email) {
        return Err(INVALID_EMAIL);
    }
    Ok(())
}

/// Validate a profile edit against the current identity and build the request.
///
/// A blank password means "keep the current one" and is dropped.
///
/// # Errors
///
/// Returns the message to show for empty fields, an unchanged submission, or a
/// malformed email, checked in that order.
pub fn profile_update(
    current: &User,
    name: &str,
    email: &str,
    password: &str,
) -> Result<ProfileUpdate, &'static str> {
    if name.is_empty() {
        return Err(NAME_REQUIRED);
    }
    if email.is_empty() {
        return Err(EMAIL_REQUIRED);
    }
    if name == current.name && email == current.email && password.is_empty() {
        return Err(NO_UPDATES);
    }
    if !is_valid_email(email) {
        return Err(INVALID_EMAIL);
    }
    Ok(ProfileUpdate {
        name: name.to_owned(),
        email: email.to_owned(),
        password: (!password.is_empty()).then(|| password.to_owned()),
    })
}
