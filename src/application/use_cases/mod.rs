pub mod create_chat;
pub mod delete_chat;
pub mod get_chat;
pub mod list_chats;
pub mod send_message;

pub use create_chat::{CreateChatError, CreateChatUseCase};
pub use delete_chat::{DeleteChatError, DeleteChatUseCase};
pub use get_chat::{GetChatError, GetChatUseCase};
pub use list_chats::{ListChatsError, ListChatsUseCase};
pub use send_message::{SendMessageError, SendMessageUseCase};
