//! Account and sign-in types.

use secrecy::SecretString;
use serde::{Deserialize, Serialize};

use std::fmt;
use std::str::FromStr;

/// The signed-in user as shown in the sidebar and account screen.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub name: String,
    pub email: String,
}

/// Email/password pair submitted by the login form.
///
/// The password is a `SecretString` so it never shows up in `Debug` output
/// or logs.
#[derive(Debug)]
pub struct Credentials {
    pub email: String,
    pub password: SecretString,
}

impl Credentials {
    pub fn new(email: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            email: email.into(),
            password: SecretString::from(password.into()),
        }
    }
}

/// The sign-up form: a display name plus a password typed twice.
#[derive(Debug)]
pub struct SignUp {
    pub name: String,
    pub email: String,
    pub password: SecretString,
    pub confirm_password: SecretString,
}

impl SignUp {
    pub fn new(
        name: impl Into<String>,
        email: impl Into<String>,
        password: impl Into<String>,
        confirm_password: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            email: email.into(),
            password: SecretString::from(password.into()),
            confirm_password: SecretString::from(confirm_password.into()),
        }
    }
}

/// Editable profile details on the account screen.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Profile {
    pub first_name: String,
    pub last_name: String,
    /// Shown read-only; changing it needs support.
    pub email: String,
    pub phone: String,
}

impl Profile {
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }
}

/// Which emails the user wants to receive.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NotificationPreference {
    Video,
    Platform,
    Billing,
}

impl NotificationPreference {
    pub const ALL: [NotificationPreference; 3] = [
        NotificationPreference::Video,
        NotificationPreference::Platform,
        NotificationPreference::Billing,
    ];

    pub fn label(self) -> &'static str {
        match self {
            NotificationPreference::Video => "Video Generation Updates",
            NotificationPreference::Platform => "Platform Updates",
            NotificationPreference::Billing => "Billing Activity",
        }
    }

    pub fn description(self) -> &'static str {
        match self {
            NotificationPreference::Video => "Get notified when your video is ready",
            NotificationPreference::Platform => "Stay informed about new features",
            NotificationPreference::Billing => "Receive payment confirmations",
        }
    }
}

impl fmt::Display for NotificationPreference {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NotificationPreference::Video => write!(f, "video"),
            NotificationPreference::Platform => write!(f, "platform"),
            NotificationPreference::Billing => write!(f, "billing"),
        }
    }
}

impl FromStr for NotificationPreference {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "video" => Ok(NotificationPreference::Video),
            "platform" => Ok(NotificationPreference::Platform),
            "billing" => Ok(NotificationPreference::Billing),
            other => Err(format!("invalid notification preference: '{other}'")),
        }
    }
}

/// Email preference toggles; every one starts switched on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct NotificationPreferences {
    pub video: bool,
    pub platform: bool,
    pub billing: bool,
}

impl NotificationPreferences {
    pub fn get(&self, pref: NotificationPreference) -> bool {
        match pref {
            NotificationPreference::Video => self.video,
            NotificationPreference::Platform => self.platform,
            NotificationPreference::Billing => self.billing,
        }
    }

    pub fn set(&mut self, pref: NotificationPreference, enabled: bool) {
        match pref {
            NotificationPreference::Video => self.video = enabled,
            NotificationPreference::Platform => self.platform = enabled,
            NotificationPreference::Billing => self.billing = enabled,
        }
    }
}

impl Default for NotificationPreferences {
    fn default() -> Self {
        Self {
            video: true,
            platform: true,
            billing: true,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_credentials_debug_redacts_password() {
        let creds = Credentials::new("test@gmail.com", "hunter2");
        let debug = format!("{creds:?}");
        assert!(debug.contains("test@gmail.com"));
        assert!(!debug.contains("hunter2"));
    }

    #[test]
    fn test_signup_debug_redacts_both_passwords() {
        let form = SignUp::new("Jane", "jane@example.com", "first-secret", "second-secret");
        let debug = format!("{form:?}");
        assert!(debug.contains("jane@example.com"));
        assert!(!debug.contains("first-secret"));
        assert!(!debug.contains("second-secret"));
    }

    #[test]
    fn test_notification_preference_parse() {
        assert_eq!(
            "Video".parse::<NotificationPreference>().unwrap(),
            NotificationPreference::Video
        );
        assert!("sms".parse::<NotificationPreference>().is_err());
        for pref in NotificationPreference::ALL {
            assert_eq!(pref.to_string().parse::<NotificationPreference>().unwrap(), pref);
        }
    }

    #[test]
    fn test_preferences_default_on_and_toggle() {
        let mut prefs = NotificationPreferences::default();
        assert!(NotificationPreference::ALL.iter().all(|p| prefs.get(*p)));

        prefs.set(NotificationPreference::Platform, false);
        assert!(!prefs.get(NotificationPreference::Platform));
        assert!(prefs.get(NotificationPreference::Billing));
    }
}
