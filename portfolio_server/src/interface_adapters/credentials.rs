use crate::domain::entities::Identity;
use crate::domain::ports::CredentialVerifier;

const ADMIN_USERNAME: &str = "admin";
const ADMIN_PASSWORD: &str = "admin123";

// Placeholder policy: a single hard-coded admin account. Swap for a verifier
// backed by a real credential store before exposing the dashboard.
#[derive(Clone, Copy, Debug, Default)]
pub struct FixedCredentials;

impl CredentialVerifier for FixedCredentials {
    fn verify(&self, username: &str, password: &str) -> Option<Identity> {
        if username != ADMIN_USERNAME || password != ADMIN_PASSWORD {
            return None;
        }

        Some(Identity {
            user_id: "1".to_string(),
            username: ADMIN_USERNAME.to_string(),
            email: "admin@portfolio.com".to_string(),
        })
    }
}
