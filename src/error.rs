#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("invalid {var}={value:?}: {reason}")]
    Invalid { var: String, value: String, reason: String },
}

#[derive(Debug, thiserror::Error)]
pub enum GameError {
    #[error("config error: {0}")]
    Config(#[from] ConfigError),
    #[error("could not create {what} texture: {reason}")]
    Texture { what: &'static str, reason: String },
}
