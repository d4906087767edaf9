//! Constants shared by the relay and the upstream client

/// Message role constants
pub mod role {
    /// User role identifier
    pub const USER: &str = "user";
}

/// Client-facing error messages
pub mod message {
    pub const MISSING_PROMPT: &str = "Missing 'prompt' in request body";

    pub const INTERNAL_ERROR: &str = "An internal server error occurred";
}

/// Built-in configuration defaults
pub mod defaults {
    pub const HOST: &str = "0.0.0.0";

    pub const PORT: u16 = 5001;

    pub const LOG_LEVEL: &str = "info";

    /// Chat endpoint of a locally running Ollama
    pub const OLLAMA_URL: &str = "http://localhost:11434/api/chat";

    pub const MODEL: &str = "phi3:mini";

    pub const CONFIG_PATH: &str = "config.toml";
}
