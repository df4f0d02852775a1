//! User service: registration and credential verification.

use std::sync::Arc;

use crate::error::{AppError, AppResult, ValidationFieldError};
use crate::models::{NewUser, User};
use crate::repositories::UserStore;
use crate::utils::password::{hash_password, verify_password};

/// Generic login failure copy. Deliberately does not say whether the
/// email or the password was wrong.
const INVALID_CREDENTIALS: &str = "Invalid username or password - try again!";

#[derive(Clone)]
pub struct UserService {
    repo: Arc<dyn UserStore>,
}

impl UserService {
    pub fn new(repo: Arc<dyn UserStore>) -> Self {
        Self { repo }
    }

    /// Registers a new account.
    ///
    /// Email and username uniqueness are checked with queries first so
    /// both collisions can be reported as field-level validation errors
    /// in one pass; the schema's unique constraints remain the backstop.
    /// The submitted plaintext is hashed here and then dropped.
    pub async fn register(&self, username: &str, email: &str, password: &str) -> AppResult<User> {
        let mut errors = Vec::new();

        if self.repo.find_by_email(email).await?.is_some() {
            errors.push(ValidationFieldError {
                field: "email".to_string(),
                message: "Email already registered.".to_string(),
            });
        }
        if self.repo.find_by_username(username).await?.is_some() {
            errors.push(ValidationFieldError {
                field: "username".to_string(),
                message: "Username already taken".to_string(),
            });
        }
        if !errors.is_empty() {
            return Err(AppError::ValidationErrors { errors });
        }

        let new_user = NewUser {
            username: username.to_string(),
            email: email.to_string(),
            password: hash_password(password)?,
        };
        self.repo.create(new_user).await
    }

    /// Verifies credentials for login.
    ///
    /// An unknown email and a wrong password produce the same error.
    pub async fn authenticate(&self, email: &str, password: &str) -> AppResult<User> {
        let user = self
            .repo
            .find_by_email(email)
            .await?
            .ok_or_else(|| AppError::unauthorized(INVALID_CREDENTIALS))?;

        if verify_password(password, &user.password)? {
            Ok(user)
        } else {
            Err(AppError::unauthorized(INVALID_CREDENTIALS))
        }
    }

    /// Gets a user by id, as a structured NotFound when absent.
    pub async fn get_user(&self, id: i32) -> AppResult<User> {
        self.repo
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::not_found("user", "id", id))
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Mutex;

    use async_trait::async_trait;
    use jiff_diesel::DateTime;

    use super::*;

    /// In-memory users table.
    #[derive(Default)]
    struct FakeUserStore {
        users: Mutex<Vec<User>>,
    }

    impl FakeUserStore {
        fn with_user(username: &str, email: &str) -> Self {
            let store = Self::default();
            store.users.lock().unwrap().push(User {
                id: 1,
                username: username.to_string(),
                email: email.to_string(),
                password: "$argon2id$unused".to_string(),
                created_at: DateTime::from(jiff::civil::DateTime::default()),
                updated_at: DateTime::from(jiff::civil::DateTime::default()),
            });
            store
        }

        fn row_count(&self) -> usize {
            self.users.lock().unwrap().len()
        }
    }

    #[async_trait]
    impl UserStore for FakeUserStore {
        async fn create(&self, new_user: NewUser) -> Result<User, AppError> {
            let mut users = self.users.lock().unwrap();
            let user = User {
                id: users.len() as i32 + 1,
                username: new_user.username,
                email: new_user.email,
                password: new_user.password,
                created_at: DateTime::from(jiff::civil::DateTime::default()),
                updated_at: DateTime::from(jiff::civil::DateTime::default()),
            };
            users.push(user.clone());
            Ok(user)
        }

        async fn find_by_id(&self, user_id: i32) -> Result<Option<User>, AppError> {
            Ok(self
                .users
                .lock()
                .unwrap()
                .iter()
                .find(|u| u.id == user_id)
                .cloned())
        }

        async fn find_by_email(&self, user_email: &str) -> Result<Option<User>, AppError> {
            Ok(self
                .users
                .lock()
                .unwrap()
                .iter()
                .find(|u| u.email == user_email)
                .cloned())
        }

        async fn find_by_username(&self, name: &str) -> Result<Option<User>, AppError> {
            Ok(self
                .users
                .lock()
                .unwrap()
                .iter()
                .find(|u| u.username == name)
                .cloned())
        }
    }

    #[tokio::test]
    async fn duplicate_registration_reports_both_fields_and_inserts_no_row() {
        let store = Arc::new(FakeUserStore::with_user("maren", "maren@example.com"));
        let service = UserService::new(store.clone());

        let result = service
            .register("maren", "maren@example.com", "hunter2x")
            .await;

        let Err(AppError::ValidationErrors { errors }) = result else {
            panic!("expected field-level validation errors");
        };
        let fields: Vec<&str> = errors.iter().map(|e| e.field.as_str()).collect();
        assert_eq!(fields, ["email", "username"]);
        assert_eq!(store.row_count(), 1);
    }

    #[tokio::test]
    async fn registration_stores_a_hash_not_the_plaintext() {
        let store = Arc::new(FakeUserStore::default());
        let service = UserService::new(store.clone());

        let user = service
            .register("maren", "maren@example.com", "hunter2x")
            .await
            .unwrap();

        assert_ne!(user.password, "hunter2x");
        assert!(user.password.starts_with("$argon2"));
        assert_eq!(store.row_count(), 1);
    }

    #[tokio::test]
    async fn unknown_email_and_wrong_password_are_indistinguishable() {
        let store = Arc::new(FakeUserStore::default());
        let service = UserService::new(store.clone());
        service
            .register("maren", "maren@example.com", "hunter2x")
            .await
            .unwrap();

        let unknown = service.authenticate("nobody@example.com", "hunter2x").await;
        let wrong = service.authenticate("maren@example.com", "wrong-pw").await;

        let Err(AppError::Unauthorized { message: a }) = unknown else {
            panic!("expected unauthorized");
        };
        let Err(AppError::Unauthorized { message: b }) = wrong else {
            panic!("expected unauthorized");
        };
        assert_eq!(a, b);
    }
}
