pub mod image_generation;
pub mod text_completion;

pub use image_generation::HttpImageGenerationProvider;
pub use text_completion::HttpTextCompletionProvider;
