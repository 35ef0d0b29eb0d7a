//! Player records and their field rules.

use serde::{Deserialize, Serialize};
use validator::validate_email;

/// Shown when the name is blank.
pub const NAME_REQUIRED: &str = "The name is required";
/// Shown when the name falls outside the accepted length.
pub const NAME_SIZE: &str = "name size must be > 2 and <240";
/// Shown when the email is blank. Form copy is frozen as shipped, inverted
/// "not required" wording included.
pub const EMAIL_REQUIRED: &str = "The email is not required";
/// Shown when the email does not parse as an address.
pub const EMAIL_INVALID: &str = "invalid email";

// Accepted name length in characters, inclusive on both ends.
const NAME_MIN: usize = 2;
const NAME_MAX: usize = 240;

/// A stored roster entry. Ids come from the store, never from clients.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Player {
    pub id: i32,
    pub name: String,
    pub email: String,
}

/// Client-submitted fields for a player that has no id yet. Missing form
/// fields decode as empty strings so they land on the blank-field messages.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewPlayer {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub email: String,
}

/// One rejected field and its fixed message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct FieldError {
    pub field: &'static str,
    pub message: &'static str,
}

impl NewPlayer {
    /// Run every field rule; an empty Vec means the draft can be stored.
    /// Rules are independent, so a blank name reports both name messages.
    pub fn validate(&self) -> Vec<FieldError> {
        let mut errors = Vec::new();

        if self.name.trim().is_empty() {
            errors.push(FieldError {
                field: "name",
                message: NAME_REQUIRED,
            });
        }
        // The length rule counts the raw string, untrimmed.
        let len = self.name.chars().count();
        if len < NAME_MIN || len > NAME_MAX {
            errors.push(FieldError {
                field: "name",
                message: NAME_SIZE,
            });
        }

        if self.email.trim().is_empty() {
            // A blank email only gets the blank message; the grammar check
            // does not apply to empty values.
            errors.push(FieldError {
                field: "email",
                message: EMAIL_REQUIRED,
            });
        } else if !validate_email(self.email.as_str()) {
            errors.push(FieldError {
                field: "email",
                message: EMAIL_INVALID,
            });
        }

        errors
    }
}
