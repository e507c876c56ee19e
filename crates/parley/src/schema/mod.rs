//! Declared entities.

pub mod message;
pub mod user;

pub use message::MESSAGE;
pub use user::USER;
