//! Account screen state: profile, security, and email preferences.

use adstudio_types::account::{NotificationPreference, NotificationPreferences, Profile};
use adstudio_types::error::AccountError;
use tracing::info;

/// Plan shown on the account billing tab.
pub const PLAN_NAME: &str = "Pro Tier";

/// Masked card on file.
pub const PAYMENT_METHOD: &str = "•••• 1234 (expires 12/25)";

/// Changes from the profile form. `None` leaves a field as it is.
#[derive(Debug, Default)]
pub struct ProfileUpdate {
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub phone: Option<String>,
}

impl ProfileUpdate {
    pub fn is_empty(&self) -> bool {
        self.first_name.is_none() && self.last_name.is_none() && self.phone.is_none()
    }
}

#[derive(Debug)]
pub struct AccountSettings {
    profile: Profile,
    two_factor: bool,
    preferences: NotificationPreferences,
}

impl AccountSettings {
    pub fn new(profile: Profile) -> Self {
        Self {
            profile,
            two_factor: false,
            preferences: NotificationPreferences::default(),
        }
    }

    pub fn profile(&self) -> &Profile {
        &self.profile
    }

    /// Apply a profile edit. Names must stay non-blank; the email is fixed.
    pub fn update_profile(&mut self, update: ProfileUpdate) -> Result<&Profile, AccountError> {
        if update.first_name.as_deref().is_some_and(|n| n.trim().is_empty()) {
            return Err(AccountError::EmptyField("first name"));
        }
        if update.last_name.as_deref().is_some_and(|n| n.trim().is_empty()) {
            return Err(AccountError::EmptyField("last name"));
        }

        if let Some(first) = update.first_name {
            self.profile.first_name = first.trim().to_string();
        }
        if let Some(last) = update.last_name {
            self.profile.last_name = last.trim().to_string();
        }
        if let Some(phone) = update.phone {
            self.profile.phone = phone.trim().to_string();
        }
        info!(name = %self.profile.full_name(), "Profile updated");
        Ok(&self.profile)
    }

    pub fn two_factor(&self) -> bool {
        self.two_factor
    }

    pub fn set_two_factor(&mut self, enabled: bool) {
        self.two_factor = enabled;
        info!(enabled, "Two-factor authentication toggled");
    }

    pub fn preferences(&self) -> &NotificationPreferences {
        &self.preferences
    }

    pub fn set_preference(&mut self, pref: NotificationPreference, enabled: bool) {
        self.preferences.set(pref, enabled);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn settings() -> AccountSettings {
        AccountSettings::new(Profile {
            first_name: "John".to_string(),
            last_name: "Doe".to_string(),
            email: "john.doe@example.com".to_string(),
            phone: "+1 (555) 123-4567".to_string(),
        })
    }

    #[test]
    fn test_defaults() {
        let account = settings();
        assert_eq!(account.profile().full_name(), "John Doe");
        assert!(!account.two_factor());
        assert_eq!(*account.preferences(), NotificationPreferences::default());
    }

    #[test]
    fn test_update_profile_keeps_unset_fields() {
        let mut account = settings();
        let profile = account
            .update_profile(ProfileUpdate {
                first_name: Some(" Jane ".to_string()),
                ..ProfileUpdate::default()
            })
            .unwrap();
        assert_eq!(profile.full_name(), "Jane Doe");
        assert_eq!(profile.phone, "+1 (555) 123-4567");
        assert_eq!(profile.email, "john.doe@example.com");
    }

    #[test]
    fn test_update_profile_rejects_blank_name() {
        let mut account = settings();
        let err = account
            .update_profile(ProfileUpdate {
                first_name: Some("Jane".to_string()),
                last_name: Some("  ".to_string()),
                phone: None,
            })
            .unwrap_err();
        assert!(matches!(err, AccountError::EmptyField("last name")));
        // Nothing applied when any field is rejected
        assert_eq!(account.profile().first_name, "John");
    }

    #[test]
    fn test_toggles() {
        let mut account = settings();
        account.set_two_factor(true);
        account.set_preference(NotificationPreference::Billing, false);

        assert!(account.two_factor());
        assert!(!account.preferences().billing);
        assert!(account.preferences().video);
        assert!(ProfileUpdate::default().is_empty());
    }
}
