//! Shared utilities for web backend services
//!
//! Provides the two pieces every service boundary ends up needing:
//! - Operational error construction and classification
//! - Password hashing (bcrypt)
//!
//! Operational errors carry an HTTP status code, a coarse `fail`/`error`
//! classification, and an `is_operational` marker so a centralized error
//! handler can tell expected failures apart from defects in surrounding
//! code. The password hasher wraps bcrypt behind a fixed work factor and
//! maps any underlying failure into an operational error with a fixed,
//! client-safe message.
//!
//! # Examples
//!
//! ## Operational Errors
//! ```
//! use service_utils::{OperationalError, Status};
//!
//! let err = OperationalError::new("Not found", 404);
//! assert_eq!(err.status, Status::Fail);
//! assert!(err.is_operational);
//! ```
//!
//! ## Password Hashing
//! ```
//! use service_utils::PasswordHasher;
//!
//! let hasher = PasswordHasher::new();
//! let hash = hasher.hash("my_password").unwrap();
//! let is_valid = hasher.verify("my_password", &hash).unwrap();
//! assert!(is_valid);
//! ```
//!
//! ## Surfacing Hashing Failures
//! ```
//! use service_utils::{OperationalError, PasswordHasher};
//!
//! fn check(candidate: &str, stored: &str) -> Result<bool, OperationalError> {
//!     let hasher = PasswordHasher::new();
//!     Ok(hasher.verify(candidate, stored)?)
//! }
//!
//! let err = check("secret", "not-a-bcrypt-hash").unwrap_err();
//! assert_eq!(err.status_code, 500);
//! assert_eq!(err.message, "Could not compare password");
//! ```

pub mod error;
pub mod password;

// Re-export commonly used items
pub use error::OperationalError;
pub use error::Status;
pub use password::PasswordError;
pub use password::PasswordHasher;
