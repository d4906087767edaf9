//! API data models
//!
//! This module contains data structures for the relay's own API and the
//! Ollama chat API it forwards to.

pub mod ollama;
pub mod relay;
