pub mod bcrypt;
pub mod errors;

pub use self::bcrypt::PasswordHasher;
pub use self::bcrypt::HASH_COST;
pub use self::errors::PasswordError;
