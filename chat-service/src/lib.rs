//! Chatbot relay service.
//!
//! Two-endpoint backend: `/api/train-txt` ingests an uploaded text file as
//! the persisted bot instruction, `/api/chat` relays a user message (plus the
//! stored instruction and caller-supplied history) to the Gemini
//! generative-language API and returns the reply.
pub mod config;
pub mod handlers;
pub mod models;
pub mod services;
pub mod startup;
