use bcrypt::BcryptError;
use thiserror::Error;

use crate::error::OperationalError;

/// Error type for password operations.
///
/// Each variant keeps the underlying bcrypt failure as its source for
/// logging; the displayed message is fixed and safe to return to clients.
#[derive(Debug, Error)]
pub enum PasswordError {
    #[error("Could not hash password")]
    Hash(#[source] BcryptError),

    #[error("Could not compare password")]
    Compare(#[source] BcryptError),
}

impl From<PasswordError> for OperationalError {
    /// Surface a boundary failure as a 500-class operational error.
    ///
    /// The bcrypt cause stops here; it was already logged where the
    /// failure occurred.
    fn from(err: PasswordError) -> Self {
        OperationalError::new(err.to_string(), 500)
    }
}
