//! # ChatGateway - Conversational AI Web Service
//!
//! A small chat service that proxies user prompts to upstream AI providers
//! for text completion and image generation, built on Clean Architecture
//! principles.
//!
//! ## Architecture Layers
//!
//! - **Domain**: Core business logic (entities, value objects, domain errors)
//! - **Application**: Use cases, ports (interfaces), validation and sanitization
//! - **Infrastructure**: Adapters for persistence and upstream providers
//! - **API**: HTTP handlers and middleware
//!
//! ## Key Features
//!
//! - Chats with ordered message history
//! - Text completion and image generation through pluggable providers
//! - Defense-in-depth input handling: JSON sanitization, schema validation,
//!   and per-endpoint rate limiting
//! - Generated images persisted to a public uploads directory

pub mod api;
pub mod application;
pub mod config;
pub mod domain;
pub mod infrastructure;

// Re-export key types explicitly to avoid ambiguity
pub use api::errors as api_errors;
pub use application::{dto, ports, use_cases};
pub use config::Config;
pub use domain::errors as domain_errors;
pub use domain::{entities, value_objects};
