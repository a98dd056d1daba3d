pub mod operational;

pub use operational::OperationalError;
pub use operational::Status;
