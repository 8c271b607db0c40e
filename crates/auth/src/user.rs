//! Credential records

use entities::User;

/// An identity together with its plaintext password.
///
/// Only the credential store holds these; everything else sees [`User`].
#[derive(Debug, Clone)]
pub struct UserCredential {
    /// The identity
    pub user: User,

    /// Plaintext password
    pub password: String,
}

impl UserCredential {
    /// Creates a credential record
    pub fn new(user: User, password: impl Into<String>) -> Self {
        Self {
            user,
            password: password.into(),
        }
    }

    /// Exact, case-sensitive match on both email and password
    pub fn matches(&self, email: &str, password: &str) -> bool {
        self.user.email == email && self.password == password
    }
}

/// The demo accounts every credential store starts with
pub fn seed_credentials() -> Vec<UserCredential> {
    vec![
        UserCredential::new(
            User::new("admin123@gmail.com", "Admin User")
                .with_id("1")
                .with_admin(true),
            "admin123",
        ),
        UserCredential::new(
            User::new("user@campusbuzz.com", "Regular User").with_id("2"),
            "user123",
        ),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_matches_is_exact() {
        let credential = UserCredential::new(User::new("a@b.com", "A"), "secret1");

        assert!(credential.matches("a@b.com", "secret1"));
        assert!(!credential.matches("A@B.com", "secret1"));
        assert!(!credential.matches("a@b.com", "Secret1"));
    }

    #[test]
    fn test_seed_credentials() {
        let seeds = seed_credentials();

        assert_eq!(seeds.len(), 2);
        assert!(seeds[0].user.is_admin);
        assert!(!seeds[1].user.is_admin);
    }
}
