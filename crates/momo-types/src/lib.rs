pub mod config;
pub mod error;
pub mod event;
pub mod message;
pub mod session;


pub use error::{AuthError, ClientError};
pub type Result<T> = std::result::Result<T, ClientError>;
