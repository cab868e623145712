pub mod chat_store;
pub mod providers;

pub use chat_store::{ChatStore, StoreError};
pub use providers::{ImageGenerationProvider, ProviderError, TextCompletionProvider};

#[cfg(test)]
pub use chat_store::MockChatStore;
#[cfg(test)]
pub use providers::{MockImageGenerationProvider, MockTextCompletionProvider};
