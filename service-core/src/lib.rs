//! service-core: Shared infrastructure for the chatbot relay workspace.
pub mod config;
pub mod error;
pub mod observability;
