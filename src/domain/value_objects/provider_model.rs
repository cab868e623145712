use serde::{Deserialize, Serialize};

use super::ResponseType;
use crate::domain::errors::DomainError;

/// Upstream provider that produced (or will produce) an assistant turn.
///
/// The model is derived from the requested [`ResponseType`]; clients may
/// still send it for backwards compatibility but the supplied value is
/// ignored in favor of the derivation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ProviderModel {
    #[serde(rename = "text-provider")]
    TextProvider,
    #[serde(rename = "image-provider")]
    ImageProvider,
}

impl ProviderModel {
    /// Canonical derivation: the response type alone picks the provider.
    pub fn for_response_type(response_type: ResponseType) -> Self {
        match response_type {
            ResponseType::Text => ProviderModel::TextProvider,
            ResponseType::Image => ProviderModel::ImageProvider,
        }
    }
}

impl std::fmt::Display for ProviderModel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ProviderModel::TextProvider => write!(f, "text-provider"),
            ProviderModel::ImageProvider => write!(f, "image-provider"),
        }
    }
}

impl std::str::FromStr for ProviderModel {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "text-provider" => Ok(ProviderModel::TextProvider),
            "image-provider" => Ok(ProviderModel::ImageProvider),
            _ => Err(DomainError::InvalidModel(format!(
                "must be 'text-provider' or 'image-provider', got '{}'",
                s
            ))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_model_derivation_from_response_type() {
        assert_eq!(
            ProviderModel::for_response_type(ResponseType::Text),
            ProviderModel::TextProvider
        );
        assert_eq!(
            ProviderModel::for_response_type(ResponseType::Image),
            ProviderModel::ImageProvider
        );
    }

    #[test]
    fn test_model_wire_names() {
        assert_eq!(
            serde_json::to_string(&ProviderModel::TextProvider).unwrap(),
            "\"text-provider\""
        );
        let parsed: ProviderModel = serde_json::from_str("\"image-provider\"").unwrap();
        assert_eq!(parsed, ProviderModel::ImageProvider);
    }

    #[test]
    fn test_model_from_str_invalid() {
        assert!("mistral".parse::<ProviderModel>().is_err());
    }
}
