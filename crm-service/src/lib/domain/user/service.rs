use std::sync::Arc;

use async_trait::async_trait;
use auth::AuthenticationError;
use auth::Authenticator;

use crate::domain::user::models::NewUser;
use crate::domain::user::models::RegisterUserCommand;
use crate::domain::user::models::User;
use crate::user::errors::UserError;
use crate::user::ports::UserRepository;
use crate::user::ports::UserServicePort;

/// Domain service implementation for user operations.
///
/// Concrete implementation of UserServicePort with dependency injection.
/// Password hashing and verification are delegated to the shared
/// authenticator so the login flow and the authorization gate agree on keys.
pub struct UserService<R>
where
    R: UserRepository,
{
    repository: Arc<R>,
    authenticator: Arc<Authenticator>,
}

impl<R> UserService<R>
where
    R: UserRepository,
{
    /// Create a new user service with injected dependencies.
    ///
    /// # Arguments
    /// * `repository` - User persistence implementation
    /// * `authenticator` - Password hashing and verification
    ///
    /// # Returns
    /// Configured user service instance
    pub fn new(repository: Arc<R>, authenticator: Arc<Authenticator>) -> Self {
        Self {
            repository,
            authenticator,
        }
    }
}

#[async_trait]
impl<R> UserServicePort for UserService<R>
where
    R: UserRepository,
{
    async fn register(&self, command: RegisterUserCommand) -> Result<User, UserError> {
        let password_hash = self
            .authenticator
            .hash_password(&command.password)
            .map_err(|e| UserError::Password(e.to_string()))?;

        let user = NewUser {
            username: command.username,
            email: command.email,
            password_hash,
        };

        self.repository.create(user).await
    }

    async fn authenticate(&self, email: &str, password: &str) -> Result<User, UserError> {
        let user = match self.repository.find_by_email(email).await? {
            Some(user) => user,
            None => {
                // Same error as a wrong password; the reason only shows in logs.
                tracing::warn!(email = %email, "Login attempt for unknown email");
                return Err(UserError::InvalidCredentials);
            }
        };

        match self.authenticator.authenticate(password, &user.password_hash) {
            Ok(()) => Ok(user),
            Err(AuthenticationError::InvalidCredentials) => {
                tracing::warn!(user_id = %user.id, "Login attempt with wrong password");
                Err(UserError::InvalidCredentials)
            }
            Err(e) => Err(UserError::Password(e.to_string())),
        }
    }

    async fn list_users(&self) -> Result<Vec<User>, UserError> {
        self.repository.list_all().await
    }
}

#[cfg(test)]
mod tests {
    use auth::PasswordHasher;
    use auth::TokenKeys;
    use chrono::Utc;
    use mockall::mock;
    use mockall::predicate::*;

    use super::*;
    use crate::domain::user::models::EmailAddress;
    use crate::domain::user::models::UserId;
    use crate::domain::user::models::Username;

    mock! {
        pub TestUserRepository {}

        #[async_trait]
        impl UserRepository for TestUserRepository {
            async fn create(&self, user: NewUser) -> Result<User, UserError>;
            async fn find_by_email(&self, email: &str) -> Result<Option<User>, UserError>;
            async fn list_all(&self) -> Result<Vec<User>, UserError>;
        }
    }

    fn test_authenticator() -> Arc<Authenticator> {
        Arc::new(Authenticator::new(
            Arc::new(TokenKeys::new(b"test_secret_key_at_least_32_bytes!")),
            PasswordHasher::new(),
        ))
    }

    fn stored_user(email: &str, password_hash: String) -> User {
        User {
            id: UserId(1),
            username: Username::new("alice".to_string()).unwrap(),
            email: EmailAddress::new(email.to_string()).unwrap(),
            password_hash,
            created_at: Utc::now(),
        }
    }

    #[tokio::test]
    async fn test_register_hashes_password() {
        let mut repository = MockTestUserRepository::new();

        repository
            .expect_create()
            .withf(|user| {
                user.username.as_str() == "alice"
                    && user.email.as_str() == "alice@example.com"
                    && user.password_hash.starts_with("$argon2")
            })
            .times(1)
            .returning(|user| {
                Ok(User {
                    id: UserId(1),
                    username: user.username,
                    email: user.email,
                    password_hash: user.password_hash,
                    created_at: Utc::now(),
                })
            });

        let service = UserService::new(Arc::new(repository), test_authenticator());

        let command = RegisterUserCommand {
            username: Username::new("alice".to_string()).unwrap(),
            email: EmailAddress::new("alice@example.com".to_string()).unwrap(),
            password: "password123".to_string(),
        };

        let user = service.register(command).await.expect("Register failed");
        assert_eq!(user.username.as_str(), "alice");
        // The plaintext never reaches the repository.
        assert!(user.password_hash.starts_with("$argon2"));
        assert_ne!(user.password_hash, "password123");
    }

    #[tokio::test]
    async fn test_register_duplicate_email() {
        let mut repository = MockTestUserRepository::new();

        repository.expect_create().times(1).returning(|user| {
            Err(UserError::EmailAlreadyExists(
                user.email.as_str().to_string(),
            ))
        });

        let service = UserService::new(Arc::new(repository), test_authenticator());

        let command = RegisterUserCommand {
            username: Username::new("alice".to_string()).unwrap(),
            email: EmailAddress::new("alice@example.com".to_string()).unwrap(),
            password: "password123".to_string(),
        };

        let result = service.register(command).await;
        assert!(matches!(
            result.unwrap_err(),
            UserError::EmailAlreadyExists(_)
        ));
    }

    #[tokio::test]
    async fn test_authenticate_success() {
        let authenticator = test_authenticator();
        let hash = authenticator.hash_password("correct_password").unwrap();

        let mut repository = MockTestUserRepository::new();
        let returned = stored_user("alice@example.com", hash);
        repository
            .expect_find_by_email()
            .with(eq("alice@example.com"))
            .times(1)
            .returning(move |_| Ok(Some(returned.clone())));

        let service = UserService::new(Arc::new(repository), authenticator);

        let user = service
            .authenticate("alice@example.com", "correct_password")
            .await
            .expect("Authentication failed");
        assert_eq!(user.email.as_str(), "alice@example.com");
    }

    #[tokio::test]
    async fn test_authenticate_unknown_email() {
        let mut repository = MockTestUserRepository::new();
        repository
            .expect_find_by_email()
            .times(1)
            .returning(|_| Ok(None));

        let service = UserService::new(Arc::new(repository), test_authenticator());

        let result = service.authenticate("missing@example.com", "whatever").await;
        assert!(matches!(result.unwrap_err(), UserError::InvalidCredentials));
    }

    #[tokio::test]
    async fn test_authenticate_wrong_password() {
        let authenticator = test_authenticator();
        let hash = authenticator.hash_password("correct_password").unwrap();

        let mut repository = MockTestUserRepository::new();
        let returned = stored_user("alice@example.com", hash);
        repository
            .expect_find_by_email()
            .times(1)
            .returning(move |_| Ok(Some(returned.clone())));

        let service = UserService::new(Arc::new(repository), authenticator);

        let result = service
            .authenticate("alice@example.com", "wrong_password")
            .await;
        assert!(matches!(result.unwrap_err(), UserError::InvalidCredentials));
    }

    #[tokio::test]
    async fn test_authenticate_failures_are_indistinguishable() {
        let authenticator = test_authenticator();
        let hash = authenticator.hash_password("correct_password").unwrap();

        let mut repository = MockTestUserRepository::new();
        let returned = stored_user("alice@example.com", hash);
        repository.expect_find_by_email().returning(move |email| {
            if email == "alice@example.com" {
                Ok(Some(returned.clone()))
            } else {
                Ok(None)
            }
        });

        let service = UserService::new(Arc::new(repository), authenticator);

        let unknown_email = service
            .authenticate("missing@example.com", "whatever")
            .await
            .unwrap_err();
        let wrong_password = service
            .authenticate("alice@example.com", "wrong_password")
            .await
            .unwrap_err();

        // Both failures must look the same to the caller.
        assert_eq!(unknown_email.to_string(), wrong_password.to_string());
    }

    #[tokio::test]
    async fn test_authenticate_verifies_exactly_once() {
        // A malformed stored hash makes verification itself fail; the service
        // must surface that as a password error, not invalid credentials.
        let mut repository = MockTestUserRepository::new();
        let returned = stored_user("alice@example.com", "not_a_phc_string".to_string());
        repository
            .expect_find_by_email()
            .times(1)
            .returning(move |_| Ok(Some(returned.clone())));

        let service = UserService::new(Arc::new(repository), test_authenticator());

        let result = service
            .authenticate("alice@example.com", "correct_password")
            .await;
        assert!(matches!(result.unwrap_err(), UserError::Password(_)));
    }

    #[tokio::test]
    async fn test_list_users() {
        let authenticator = test_authenticator();
        let hash = authenticator.hash_password("pw").unwrap();

        let mut repository = MockTestUserRepository::new();
        let users = vec![
            stored_user("alice@example.com", hash.clone()),
            stored_user("bob@example.com", hash),
        ];
        repository
            .expect_list_all()
            .times(1)
            .returning(move || Ok(users.clone()));

        let service = UserService::new(Arc::new(repository), authenticator);

        let listed = service.list_users().await.expect("Listing failed");
        assert_eq!(listed.len(), 2);
    }
}
