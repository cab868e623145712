pub mod chat_id;
pub mod message_id;
pub mod provider_model;
pub mod response_type;
pub mod role;

pub use chat_id::{ChatId, MAX_SAFE_ID};
pub use message_id::MessageId;
pub use provider_model::ProviderModel;
pub use response_type::ResponseType;
pub use role::Role;
