use crate::error::ConfigError;

// Declare the modules that make up this crate.
pub mod error;
pub mod settings;

// Re-export the core types to provide a clean public API.
pub use settings::{ServerSettings, Settings, SupabaseSettings};

/// Loads the application configuration.
///
/// This function is the primary entry point for this crate. It reads an
/// optional `config.toml`, then lets `COMPTRACK_*` environment variables
/// override it (e.g. `COMPTRACK_SUPABASE__URL`, `COMPTRACK_SERVER__PORT`),
/// and deserializes the result into our strongly-typed `Settings` struct.
///
/// Missing Supabase coordinates are deliberately not an error here: the
/// store layer decides whether to fail hard (the relay) or degrade to a
/// "not configured" stub (the identity gate).
pub fn load_settings() -> Result<Settings, ConfigError> {
    let builder = config::Config::builder()
        .add_source(config::File::with_name("config.toml").required(false))
        .add_source(
            config::Environment::with_prefix("COMPTRACK")
                .separator("__"),
        )
        .build()?;

    let settings = builder.try_deserialize::<Settings>()?;

    Ok(settings)
}
