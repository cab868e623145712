use serde::{Deserialize, Serialize};

use crate::domain::errors::DomainError;

/// Kind of assistant output requested for a turn
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum ResponseType {
    #[default]
    Text,
    Image,
}

impl std::fmt::Display for ResponseType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ResponseType::Text => write!(f, "text"),
            ResponseType::Image => write!(f, "image"),
        }
    }
}

impl std::str::FromStr for ResponseType {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "text" => Ok(ResponseType::Text),
            "image" => Ok(ResponseType::Image),
            _ => Err(DomainError::InvalidResponseType(format!(
                "must be 'text' or 'image', got '{}'",
                s
            ))),
        }
    }
}
