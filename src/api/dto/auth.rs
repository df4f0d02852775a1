//! Authentication DTOs: registration and login forms.

use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::models::User;

/// Registration form submission.
#[derive(Debug, Deserialize, Validate)]
pub struct RegisterForm {
    #[validate(
        length(min = 1, max = 80, message = "Email is required"),
        email(message = "Invalid email format")
    )]
    pub email: String,

    #[validate(length(min = 1, max = 80, message = "Username is required"))]
    pub username: String,

    #[validate(
        length(min = 1, message = "Password is required"),
        must_match(other = password2, message = "Passwords must match")
    )]
    pub password: String,

    #[validate(length(min = 1, message = "Confirm Password is required"))]
    pub password2: String,
}

/// Login form submission.
///
/// `next` carries the path the user was redirected away from by the
/// login guard, so a successful login can send them back.
#[derive(Debug, Deserialize, Validate)]
pub struct LoginForm {
    #[validate(
        length(min = 1, max = 70, message = "Email is required"),
        email(message = "Invalid email format")
    )]
    pub email: String,

    #[validate(length(min = 1, message = "Password is required"))]
    pub password: String,

    #[serde(default)]
    pub remember_me: bool,

    pub next: Option<String>,
}

/// Public view of an account, with the password hash left out.
#[derive(Debug, Serialize)]
pub struct UserResponse {
    pub id: i32,
    pub username: String,
    pub email: String,
}

impl From<User> for UserResponse {
    fn from(user: User) -> Self {
        Self {
            id: user.id,
            username: user.username,
            email: user.email,
        }
    }
}
