use thiserror::Error;

// === StoreError ===

/// Errors raised by the record store.
#[derive(Error, Debug)]
pub enum StoreError {
    /// The storage engine could not be opened, or the store is not initialized.
    #[error("Storage unavailable: {0}")]
    StorageUnavailable(String),
    /// A read query failed.
    #[error("Query failed: {0}")]
    QueryFailed(String),
    /// An insert, update or delete failed.
    #[error("Write failed: {0}")]
    WriteFailed(String),
}

// === FormError ===

/// Errors raised by the add/edit form.
#[derive(Error, Debug, PartialEq, Eq)]
pub enum FormError {
    /// Name or URL was empty or whitespace only.
    #[error("Fields cannot be empty")]
    EmptyFields,
    /// The form was submitted while hidden.
    #[error("Form is not open")]
    NotOpen,
}

// === BrowserError ===

/// Errors raised by the embedded browser screen.
#[derive(Error, Debug, PartialEq, Eq)]
pub enum BrowserError {
    /// The URL does not parse even after normalization.
    #[error("Invalid URL: {0}")]
    InvalidUrl(String),
    /// The page failed to load.
    #[error("Unable to connect to {0}")]
    LoadFailed(String),
}

// === NavigationError ===

/// Errors raised when selecting items or moving between screens.
#[derive(Error, Debug, PartialEq, Eq)]
pub enum NavigationError {
    /// No list item at the given position.
    #[error("No web app at index {0}")]
    IndexOutOfRange(usize),
    /// No web app with the given id.
    #[error("Web app not found: {0}")]
    NotFound(String),
}

// === SettingsError ===

/// Errors related to settings management.
#[derive(Error, Debug)]
pub enum SettingsError {
    /// An I/O error occurred while reading or writing settings.
    #[error("Settings I/O error: {0}")]
    IoError(String),
    /// Failed to serialize or deserialize settings.
    #[error("Settings serialization error: {0}")]
    SerializationError(String),
    /// The provided settings key is invalid.
    #[error("Invalid settings key: {0}")]
    InvalidKey(String),
    /// The provided settings value is invalid.
    #[error("Invalid settings value: {0}")]
    InvalidValue(String),
}

// === AppError ===

/// Top-level error for application lifecycle and screen flows.
#[derive(Error, Debug)]
pub enum AppError {
    #[error(transparent)]
    Store(#[from] StoreError),
    #[error(transparent)]
    Form(#[from] FormError),
    #[error(transparent)]
    Browser(#[from] BrowserError),
    #[error(transparent)]
    Navigation(#[from] NavigationError),
    #[error(transparent)]
    Settings(#[from] SettingsError),
}
