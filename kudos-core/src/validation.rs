//! Form validation for review submissions and contact messages
//!
//! The store accepts whatever it is given; these checks are the caller-side
//! gate in front of it. Every failing field is reported, not just the first.

use std::fmt;

/// Minimum trimmed length of a review comment
pub const MIN_COMMENT_CHARS: usize = 5;

/// Minimum trimmed length of a contact message
pub const MIN_MESSAGE_CHARS: usize = 10;

/// A single failed field with its user-facing message
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldError {
    pub field: &'static str,
    pub message: &'static str,
}

/// All failed fields of one form
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ValidationErrors {
    errors: Vec<FieldError>,
}

impl ValidationErrors {
    fn push(&mut self, field: &'static str, message: &'static str) {
        self.errors.push(FieldError { field, message });
    }

    /// Failed fields in form order
    pub fn errors(&self) -> &[FieldError] {
        &self.errors
    }

    /// Message for `field`, if it failed
    pub fn message_for(&self, field: &str) -> Option<&'static str> {
        self.errors
            .iter()
            .find(|e| e.field == field)
            .map(|e| e.message)
    }

    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    fn into_result<T>(self, value: T) -> Result<T, ValidationErrors> {
        if self.errors.is_empty() {
            Ok(value)
        } else {
            Err(self)
        }
    }
}

impl fmt::Display for ValidationErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let parts: Vec<String> = self
            .errors
            .iter()
            .map(|e| format!("{}: {}", e.field, e.message))
            .collect();
        write!(f, "{}", parts.join("; "))
    }
}

impl std::error::Error for ValidationErrors {}

/// Raw review form input
#[derive(Debug, Clone, Default)]
pub struct ReviewForm {
    pub rating: i64,
    pub name: String,
    pub comment: String,
}

/// Review input that passed validation, ready for `ReviewStore::submit`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidReview {
    pub rating: u8,
    pub name: String,
    pub comment: String,
}

impl ReviewForm {
    /// Check rating range and comment length; trims name and comment
    pub fn validate(&self) -> Result<ValidReview, ValidationErrors> {
        let mut errors = ValidationErrors::default();
        let name = self.name.trim().to_string();
        let comment = self.comment.trim().to_string();

        let rating = match u8::try_from(self.rating) {
            Ok(r) if (1..=5).contains(&r) => r,
            _ => {
                errors.push("rating", "Pick a rating from 1 to 5");
                0
            }
        };
        if comment.chars().count() < MIN_COMMENT_CHARS {
            errors.push("comment", "At least 5 characters");
        }

        errors.into_result(ValidReview {
            rating,
            name,
            comment,
        })
    }
}

/// Raw contact form input
#[derive(Debug, Clone, Default)]
pub struct ContactForm {
    pub name: String,
    pub email: String,
    pub message: String,
}

/// Contact message that passed validation
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidContact {
    pub name: String,
    pub email: String,
    pub message: String,
}

impl ContactForm {
    pub fn validate(&self) -> Result<ValidContact, ValidationErrors> {
        let mut errors = ValidationErrors::default();
        let name = self.name.trim();
        let message = self.message.trim();

        if name.is_empty() {
            errors.push("name", "Name is required");
        }
        if !is_valid_email(&self.email) {
            errors.push("email", "Invalid email");
        }
        if message.chars().count() < MIN_MESSAGE_CHARS {
            errors.push("message", "At least 10 characters");
        }

        errors.into_result(ValidContact {
            name: name.to_string(),
            email: self.email.clone(),
            message: message.to_string(),
        })
    }
}

/// Loose email shape check: `local@domain.tld` with no whitespace and a
/// single `@`
pub fn is_valid_email(email: &str) -> bool {
    if email.chars().any(char::is_whitespace) {
        return false;
    }
    let Some((local, domain)) = email.split_once('@') else {
        return false;
    };
    if local.is_empty() || domain.contains('@') {
        return false;
    }
    domain
        .char_indices()
        .any(|(i, c)| c == '.' && i > 0 && i + 1 < domain.len())
}
