use thiserror::Error;

/// PMP統一エラー型
#[derive(Debug, Error)]
pub enum MarketError {
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    #[error("Backend API error: {message} (status: {status})")]
    Api { status: u16, message: String },

    #[error("Plugin not found: {0}")]
    PluginNotFound(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON parse error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Settings parse error: {0}")]
    Toml(#[from] toml::de::Error),
}

pub type Result<T> = std::result::Result<T, MarketError>;
