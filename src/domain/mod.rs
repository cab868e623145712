pub mod entities;
pub mod errors;
pub mod value_objects;

pub use entities::{Chat, Message};
pub use errors::DomainError;
