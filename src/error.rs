use thiserror::Error;

#[derive(Error, Debug)]
pub enum TechfitError {
    #[error("config parse error: {0}")]
    ConfigParse(String),

    #[error("invalid config value: {0}")]
    InvalidConfig(String),

    #[error("tool catalog error: {0}")]
    Catalog(String),

    #[error("chart rendering failed: {0}")]
    Chart(String),

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("csv error: {0}")]
    Csv(#[from] csv::Error),

    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, TechfitError>;
