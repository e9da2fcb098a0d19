//! Shared-secret token authentication

use constant_time_eq::constant_time_eq;

/// Authenticates requests against a single configured shared secret.
///
/// The comparison is constant-time so the token cannot be recovered by
/// timing the rejection path.
#[derive(Debug, Clone)]
pub struct TokenAuthenticator {
    secret: String,
}

impl TokenAuthenticator {
    /// Create an authenticator for the configured secret
    pub fn new(secret: impl Into<String>) -> Self {
        Self {
            secret: secret.into(),
        }
    }

    /// Check a presented credential.
    ///
    /// Absent or empty credentials are always rejected.
    pub fn authenticate(&self, presented: Option<&str>) -> bool {
        match presented {
            Some(token) if !token.is_empty() => {
                constant_time_eq(token.as_bytes(), self.secret.as_bytes())
            }
            _ => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_authenticate() {
        let auth = TokenAuthenticator::new("s3cret");
        assert!(!auth.authenticate(None));
        assert!(!auth.authenticate(Some("")));
        assert!(!auth.authenticate(Some("wrong")));
        assert!(!auth.authenticate(Some("s3cret ")));
        assert!(auth.authenticate(Some("s3cret")));
    }
}
