//! Translation between relay and Ollama formats

pub mod request_converter;
pub mod response_converter;
