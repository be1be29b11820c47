use thiserror::Error;

/// Errors from the mock sign-in.
#[derive(Debug, Error)]
pub enum AuthError {
    #[error("invalid credentials")]
    InvalidCredentials,

    #[error("Passwords do not match")]
    PasswordMismatch,

    #[error("Failed to create account")]
    SignupFailed,

    #[error("not signed in")]
    NotSignedIn,
}

/// Errors related to credit purchases and spends.
#[derive(Debug, Error)]
pub enum BillingError {
    #[error("no credit package with {0} credits")]
    UnknownPackage(u32),

    #[error("insufficient credits: need {needed}, have {available}")]
    InsufficientCredits { needed: u32, available: u32 },

    #[error("credit balance would overflow: have {balance}, adding {adding}")]
    BalanceOverflow { balance: u32, adding: u32 },
}

/// Errors from project and template lookups.
#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("project '{0}' not found")]
    ProjectNotFound(String),

    #[error("template '{0}' not found")]
    TemplateNotFound(String),
}

/// Errors from resolving a user-picked file into an asset upload.
#[derive(Debug, Error)]
pub enum AssetError {
    #[error("asset not found: {0}")]
    NotFound(String),

    #[error("asset has no file name: {0}")]
    MissingName(String),

    #[error("filesystem error: {0}")]
    FileSystemError(String),
}

/// Errors from loading `config.toml`.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config: {0}")]
    Read(String),

    #[error("invalid config: {0}")]
    Parse(String),

    #[error("invalid config value: {field} must be greater than zero")]
    ZeroPeriod { field: &'static str },
}

/// Errors from editing account settings.
#[derive(Debug, Error)]
pub enum AccountError {
    #[error("{0} cannot be empty")]
    EmptyField(&'static str),
}
