use thiserror::Error;

#[derive(Error, Debug)]
pub enum StoreError {
    #[error("Supabase is not configured: set COMPTRACK_SUPABASE__URL and COMPTRACK_SUPABASE__ANON_KEY")]
    NotConfigured,

    #[error("Invalid store configuration: {0}")]
    Configuration(String),

    #[error("Failed to reach the salary store: {0}")]
    Request(#[from] reqwest::Error),

    #[error("Salary store request failed: {0}")]
    Upstream(String),

    #[error("Failed to deserialize the store response: {0}")]
    Deserialization(String),
}
