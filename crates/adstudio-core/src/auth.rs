//! Mock sign-in.
//!
//! There is no authentication server: a single configured email/password
//! pair is accepted and everything else is rejected. Sign-up creates nothing;
//! it checks the confirmation and then signs in with the same pair.

use adstudio_types::account::{Credentials, SignUp, User};
use adstudio_types::config::AuthConfig;
use adstudio_types::error::AuthError;
use secrecy::{ExposeSecret, SecretString};
use tracing::{info, warn};

pub struct AuthService {
    demo_email: String,
    demo_password: SecretString,
    demo_name: String,
    current: Option<User>,
}

impl AuthService {
    pub fn new(config: &AuthConfig) -> Self {
        Self {
            demo_email: config.demo_email.clone(),
            demo_password: SecretString::from(config.demo_password.clone()),
            demo_name: config.demo_name.clone(),
            current: None,
        }
    }

    /// Check the credentials against the demo pair and sign in on a match.
    pub fn login(&mut self, credentials: &Credentials) -> Result<&User, AuthError> {
        let matches = credentials.email == self.demo_email
            && credentials.password.expose_secret() == self.demo_password.expose_secret();

        if !matches {
            warn!(email = %credentials.email, "Login rejected");
            return Err(AuthError::InvalidCredentials);
        }

        info!(email = %credentials.email, "Signed in");
        Ok(self.current.insert(User {
            name: self.demo_name.clone(),
            email: credentials.email.clone(),
        }))
    }

    /// Register and sign in. The display name is not stored, so only the
    /// demo pair can complete a sign-up.
    pub fn sign_up(&mut self, form: &SignUp) -> Result<&User, AuthError> {
        if form.password.expose_secret() != form.confirm_password.expose_secret() {
            warn!(email = %form.email, "Sign-up rejected: passwords differ");
            return Err(AuthError::PasswordMismatch);
        }

        let credentials = Credentials {
            email: form.email.clone(),
            password: form.password.clone(),
        };
        self.login(&credentials).map_err(|_| AuthError::SignupFailed)
    }

    pub fn logout(&mut self) {
        if let Some(user) = self.current.take() {
            info!(email = %user.email, "Signed out");
        }
    }

    pub fn current_user(&self) -> Result<&User, AuthError> {
        self.current.as_ref().ok_or(AuthError::NotSignedIn)
    }

    pub fn is_authenticated(&self) -> bool {
        self.current.is_some()
    }
}
