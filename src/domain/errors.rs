use thiserror::Error;

#[derive(Debug, Error)]
pub enum DomainError {
    #[error("Invalid chat ID: {0}")]
    InvalidChatId(String),

    #[error("Invalid role: {0}")]
    InvalidRole(String),

    #[error("Invalid model: {0}")]
    InvalidModel(String),

    #[error("Invalid response type: {0}")]
    InvalidResponseType(String),
}
