use super::errors::PasswordError;

/// bcrypt work factor: each hash runs 2^12 internal rounds.
pub const HASH_COST: u32 = 12;

/// Password hashing implementation.
///
/// Wraps bcrypt behind a fixed work factor. Encoded hashes carry their own
/// salt and cost, so verification needs nothing beyond the stored string.
pub struct PasswordHasher {
    cost: u32,
}

impl PasswordHasher {
    /// Create a password hasher with the default work factor.
    ///
    /// # Returns
    /// PasswordHasher configured with [`HASH_COST`]
    pub fn new() -> Self {
        Self { cost: HASH_COST }
    }

    /// Create a password hasher with an explicit work factor.
    ///
    /// The cost factor is the only tunable; lower values trade brute-force
    /// resistance for latency. bcrypt rejects costs outside 4..=31.
    pub fn with_cost(cost: u32) -> Self {
        Self { cost }
    }

    /// Hash a plaintext password securely.
    ///
    /// A fresh random salt is generated per call, so hashing the same
    /// password twice yields different encodings; both verify.
    ///
    /// # Arguments
    /// * `password` - Plaintext password to hash
    ///
    /// # Returns
    /// Modular crypt format hash (includes algorithm, cost, and salt)
    ///
    /// # Errors
    /// * `PasswordError::Hash` - the underlying primitive failed
    pub fn hash(&self, password: &str) -> Result<String, PasswordError> {
        bcrypt::hash(password, self.cost).map_err(|err| {
            tracing::warn!(error = %err, "bcrypt hashing failed");
            PasswordError::Hash(err)
        })
    }

    /// Verify a password against a stored hash.
    ///
    /// Recomputes the digest from the salt and cost embedded in `hash` and
    /// compares in constant time.
    ///
    /// # Arguments
    /// * `password` - Plaintext password to verify
    /// * `hash` - Stored hash in modular crypt format
    ///
    /// # Returns
    /// True if password matches, false otherwise
    ///
    /// # Errors
    /// * `PasswordError::Compare` - `hash` is malformed or the primitive failed
    pub fn verify(&self, password: &str, hash: &str) -> Result<bool, PasswordError> {
        bcrypt::verify(password, hash).map_err(|err| {
            tracing::warn!(error = %err, "bcrypt verification failed");
            PasswordError::Compare(err)
        })
    }
}

impl Default for PasswordHasher {
    fn default() -> Self {
        Self::new()
    }
}
